//! Integration tests for principal, group and staff use cases

use super::*;
use integrations_haven::HavenErrorKind;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn test_group_remove_deletes_matching_membership() {
    let mock_server = setup_mock_server().await;
    let group_id = Uuid::from_u128(0x20);
    let principal_id = Uuid::from_u128(0x21);
    let target_id = Uuid::from_u128(0x22);

    Mock::given(method("GET"))
        .and(path(format!("/grouptarget/by_group/{}", group_id)))
        .and(query_param("take", i32::MAX.to_string()))
        .respond_with(items(json!([
            { "group_target_id": Uuid::from_u128(0x99), "principal_id": Uuid::from_u128(0x98) },
            { "group_target_id": target_id, "principal_id": principal_id }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("/grouptarget/{}", target_id)))
        .respond_with(action_ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let removed = consumer(&mock_server)
        .principal_group_remove(faction(), principal_id, group_id)
        .await
        .unwrap();

    assert!(removed);
}

#[tokio::test]
async fn test_group_remove_without_membership_is_not_found() {
    let mock_server = setup_mock_server().await;
    let group_id = Uuid::from_u128(0x20);

    Mock::given(method("GET"))
        .and(path(format!("/grouptarget/by_group/{}", group_id)))
        .respond_with(items(json!([])))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .respond_with(action_ok())
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = consumer(&mock_server)
        .principal_group_remove(faction(), Uuid::from_u128(0x21), group_id)
        .await
        .unwrap_err();

    assert_eq!(*err.kind(), HavenErrorKind::NotFound);
    assert_eq!(err.message(), "User is not a part of the group");
}

#[tokio::test]
async fn test_group_add_posts_writer_membership() {
    let mock_server = setup_mock_server().await;
    let group_id = Uuid::from_u128(0x20);
    let principal_id = Uuid::from_u128(0x21);

    Mock::given(method("POST"))
        .and(path("/grouptargets/upsert"))
        .and(body_partial_json(json!({
            "account_id": account_id(),
            "group_id": group_id,
            "principal_id": principal_id,
            "kind": "Principal",
            "role": "Writer",
            "hidden": false,
            "suppress_main": false
        })))
        .respond_with(action_ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let added = consumer(&mock_server)
        .principal_group_add(faction(), principal_id, group_id)
        .await
        .unwrap();

    assert!(added);
}

#[tokio::test]
async fn test_principal_register_seats_with_first_seat_type() {
    let mock_server = setup_mock_server().await;
    let term_id = Uuid::from_u128(0x30);
    let seat_type_id = Uuid::from_u128(0x31);
    let principal_id = Uuid::from_u128(0x32);

    Mock::given(method("GET"))
        .and(path(format!("/seattype/by_faction/{}", faction())))
        .respond_with(items(json!([{ "seat_type_id": seat_type_id }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/principals/register"))
        .and(body_partial_json(json!({
            "invite_emails": ["new@example.com"],
            "seat": { "term_id": term_id, "seat_type_id": seat_type_id },
            "principal": {
                "display_name": "New Principal",
                "external_identifier": "my-external",
                "access_code": "",
                "limit": 1,
                "expected_signers": 1
            }
        })))
        .respond_with(item(json!({ "principal_id": principal_id, "display_name": "New Principal" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let principal = consumer(&mock_server)
        .principal_register(faction(), term_id, "new@example.com")
        .await
        .unwrap();

    assert_eq!(principal.principal_id, principal_id);
}

#[tokio::test]
async fn test_principal_change_status_reports_failure() {
    let mock_server = setup_mock_server().await;
    let principal_id = Uuid::from_u128(0x32);

    Mock::given(method("POST"))
        .and(path(format!("/principals/{}/status", principal_id)))
        .and(body_partial_json(json!({ "enabled": false })))
        .respond_with(failed("Principal is locked"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let changed = consumer(&mock_server)
        .principal_change_status(faction(), principal_id, false)
        .await
        .unwrap();

    assert!(!changed);
}

#[tokio::test]
async fn test_staff_invite_and_manager_change() {
    let mock_server = setup_mock_server().await;
    let manager_id = Uuid::from_u128(0x40);

    Mock::given(method("POST"))
        .and(path("/invite"))
        .and(body_partial_json(json!({
            "email": "staff@example.com",
            "type": "Administrator",
            "code": null
        })))
        .respond_with(action_ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/managers/{}/type/Administrator", manager_id)))
        .respond_with(action_ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut consumer = consumer(&mock_server);
    assert!(consumer.staff_invite(faction(), "staff@example.com").await.unwrap());
    assert!(consumer.manager_change(faction(), manager_id).await.unwrap());
}

#[tokio::test]
async fn test_seat_add_uses_first_seat_type() {
    let mock_server = setup_mock_server().await;
    let principal_id = Uuid::from_u128(0x40);
    let term_id = Uuid::from_u128(0x41);
    let seat_type_id = Uuid::from_u128(0x42);
    let seat_id = Uuid::from_u128(0x43);

    Mock::given(method("GET"))
        .and(path(format!("/seattype/by_faction/{}", faction())))
        .and(query_param("skip", "0"))
        .and(query_param("take", "1"))
        .respond_with(items(json!([{ "seat_type_id": seat_type_id, "name": "Student" }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/seat"))
        .and(body_partial_json(json!({
            "faction_id": faction(),
            "principal_id": principal_id,
            "term_id": term_id,
            "seat_type_id": seat_type_id
        })))
        .respond_with(item(json!({ "seat_id": seat_id, "term_id": term_id })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let seat = consumer(&mock_server)
        .principal_seat_add(faction(), principal_id, term_id)
        .await
        .unwrap();

    assert_eq!(seat.seat_id, seat_id);
}

#[tokio::test]
async fn test_seat_add_without_seat_type_is_not_found() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path(format!("/seattype/by_faction/{}", faction())))
        .respond_with(items(json!([])))
        .mount(&mock_server)
        .await;

    let err = consumer(&mock_server)
        .principal_seat_add(faction(), Uuid::from_u128(0x40), Uuid::from_u128(0x41))
        .await
        .unwrap_err();

    assert_eq!(*err.kind(), HavenErrorKind::NotFound);
    assert_eq!(err.message(), "No seat type available");
}

#[tokio::test]
async fn test_seat_remove_posts_to_remove_action() {
    let mock_server = setup_mock_server().await;
    let seat_id = Uuid::from_u128(0x44);

    Mock::given(method("POST"))
        .and(path(format!("/seats/{}/remove", seat_id)))
        .respond_with(action_ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let removed = consumer(&mock_server)
        .principal_seat_remove(faction(), seat_id)
        .await
        .unwrap();

    assert!(removed);
}
