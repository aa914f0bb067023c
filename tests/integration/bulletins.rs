//! Integration tests for bulletin use cases

use super::*;
use integrations_haven::HavenErrorKind;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn test_bulletin_create_looks_up_category_then_creates() {
    let mock_server = setup_mock_server().await;
    let category = Uuid::from_u128(0x3333);
    let created = Uuid::from_u128(0x4444);

    Mock::given(method("GET"))
        .and(path(format!("/bulletincategories/by_faction/{}", faction())))
        .and(query_param("skip", "0"))
        .and(query_param("take", "1"))
        .respond_with(items(json!([{ "bulletin_category_id": category, "name": "News" }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/bulletin"))
        .and(body_partial_json(json!({
            "bulletin_category_id": category,
            "faction_id": faction(),
            "account_id_owner": account_id(),
            "title": "My Bulletin Title",
            "stack_tab": -1,
            "disable_push": true,
            "active": true
        })))
        .respond_with(item(json!({ "bulletin_id": created, "title": "My Bulletin Title" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let bulletin = consumer(&mock_server).bulletin_create(faction()).await.unwrap();

    assert_eq!(bulletin.bulletin_id, created);
    assert!(!bulletin.bulletin_id.is_nil());
}

#[tokio::test]
async fn test_bulletin_create_without_category_is_not_found() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path(format!("/bulletincategories/by_faction/{}", faction())))
        .respond_with(items(json!([])))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/bulletin"))
        .respond_with(item(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = consumer(&mock_server)
        .bulletin_create(faction())
        .await
        .unwrap_err();

    assert_eq!(*err.kind(), HavenErrorKind::NotFound);
    assert_eq!(err.message(), "No bulletin category available");
}

#[tokio::test]
async fn test_bulletin_create_failed_envelope_is_request_failed() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path(format!("/bulletincategories/by_faction/{}", faction())))
        .respond_with(failed("Faction is disabled"))
        .mount(&mock_server)
        .await;

    let err = consumer(&mock_server)
        .bulletin_create(faction())
        .await
        .unwrap_err();

    assert_eq!(*err.kind(), HavenErrorKind::RequestFailed);
    assert_eq!(err.message(), "Faction is disabled");
}

#[tokio::test]
async fn test_bulletin_edit_retitles() {
    let mock_server = setup_mock_server().await;
    let bulletin_id = Uuid::from_u128(0x5555);

    Mock::given(method("GET"))
        .and(path(format!("/bulletin/{}", bulletin_id)))
        .respond_with(item(json!({ "bulletin_id": bulletin_id, "title": "Old" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path(format!("/bulletin/{}", bulletin_id)))
        .respond_with(item(json!({ "bulletin_id": bulletin_id, "title": "I was updated" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let bulletin = consumer(&mock_server)
        .bulletin_edit(faction(), bulletin_id)
        .await
        .unwrap();

    assert_eq!(bulletin.bulletin_id, bulletin_id);

    let requests = mock_server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    assert!(sent["title"]
        .as_str()
        .unwrap()
        .starts_with("I was updated at "));
}

#[tokio::test]
async fn test_server_error_maps_status() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path(format!("/bulletin/{}", Uuid::nil())))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "message": "Not a manager" })),
        )
        .mount(&mock_server)
        .await;

    let err = consumer(&mock_server)
        .bulletin_edit(faction(), Uuid::nil())
        .await
        .unwrap_err();

    assert_eq!(*err.kind(), HavenErrorKind::Forbidden);
    assert_eq!(err.status_code(), Some(403));
    assert_eq!(err.message(), "Not a manager");
}

#[tokio::test]
async fn test_bulletin_create_with_form_attaches_on_demand_config() {
    let mock_server = setup_mock_server().await;
    let category = Uuid::from_u128(0x3333);
    let form_config = Uuid::from_u128(0x3434);

    Mock::given(method("GET"))
        .and(path(format!("/bulletincategories/by_faction/{}", faction())))
        .respond_with(items(json!([{ "bulletin_category_id": category }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/formconfig/by_faction/{}", faction())))
        .and(query_param("skip", "0"))
        .and(query_param("take", "1"))
        .and(query_param("flow", "OnDemand"))
        .and(query_param("purpose", "Generated"))
        .respond_with(items(json!([{ "form_config_id": form_config }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/bulletin"))
        .and(body_partial_json(json!({
            "bulletin_category_id": category,
            "title": "This has a form attached!",
            "cta_form_config_id": form_config,
            "scope": "Faction"
        })))
        .respond_with(item(json!({ "bulletin_id": Uuid::from_u128(0x3535) })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let bulletin = consumer(&mock_server)
        .bulletin_create_with_form(faction())
        .await
        .unwrap();

    assert_eq!(bulletin.bulletin_id, Uuid::from_u128(0x3535));
}

#[tokio::test]
async fn test_bulletin_create_with_target_scopes_to_active_term() {
    let mock_server = setup_mock_server().await;
    let category = Uuid::from_u128(0x3333);
    let term = Uuid::from_u128(0x3636);

    Mock::given(method("GET"))
        .and(path(format!("/bulletincategories/by_faction/{}", faction())))
        .respond_with(items(json!([{ "bulletin_category_id": category }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/terms/active/by_faction/{}", faction())))
        .and(query_param("take", "1"))
        .respond_with(items(json!([{ "term_id": term, "name": "Fall" }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/bulletin"))
        .and(body_partial_json(json!({
            "title": "This is targeted to a term",
            "scope": "Term",
            "term_id": term
        })))
        .respond_with(item(json!({ "bulletin_id": Uuid::from_u128(0x3737), "term_id": term })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let bulletin = consumer(&mock_server)
        .bulletin_create_with_target(faction())
        .await
        .unwrap();

    assert_eq!(bulletin.term_id, Some(term));
}
