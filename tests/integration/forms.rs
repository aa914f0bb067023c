//! Integration tests for form use cases

use super::*;
use integrations_haven::{FactionPublic, HavenErrorKind};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::Mock;

fn member_account() -> AccountInfo {
    let mut account = AccountInfo::with_credentials(account_id(), API_KEY, API_SECRET);
    account.factions_member = vec![FactionPublic {
        faction_id: faction(),
        member_id: Some(Uuid::from_u128(0xAAAA)),
        principal_id: Some(Uuid::from_u128(0xBBBB)),
        ..Default::default()
    }];
    account
}

fn assigned_form(form_id: Uuid) -> serde_json::Value {
    json!({
        "form_id": form_id,
        "faction_id": faction(),
        "attachment": "Principal",
        "title": "My Form Title",
        "sections": [
            { "kind": "header", "text": "Hello Header" },
            {
                "kind": "form_question",
                "question": {
                    "form_question_id": Uuid::from_u128(0x10),
                    "title": "Pick one",
                    "config": {
                        "kind": "SingleChoice",
                        "options": [
                            { "name": "First Answer", "value": "first" },
                            { "name": "Second Answer", "value": "Second Answer" }
                        ]
                    }
                }
            },
            {
                "kind": "form_question",
                "question": {
                    "form_question_id": Uuid::from_u128(0x11),
                    "title": "How many?",
                    "config": { "kind": "Number" }
                }
            }
        ]
    })
}

#[tokio::test]
async fn test_form_submit_answers_every_question() {
    let mock_server = setup_mock_server().await;
    let form_id = Uuid::from_u128(0x6666);

    Mock::given(method("GET"))
        .and(path(format!("/forms/for_account/{}", faction())))
        .and(query_param("include_submitted", "true"))
        .and(query_param("include_pending", "true"))
        .and(query_param("take", "20"))
        .respond_with(items(json!([assigned_form(form_id)])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/forms/submit"))
        .and(body_partial_json(json!({
            "form_id": form_id,
            "account_id": account_id(),
            "principal_id": Uuid::from_u128(0xBBBB),
            "response_data": [
                {
                    "form_question_id": Uuid::from_u128(0x10),
                    "response_raw": "first",
                    "response_display": "First Answer"
                },
                {
                    "form_question_id": Uuid::from_u128(0x11),
                    "response_raw": "134",
                    "response_display": "134"
                }
            ]
        })))
        .respond_with(action_ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let submitted = consumer_as(&mock_server, member_account())
        .form_submit(faction(), form_id)
        .await
        .unwrap();

    assert!(submitted);
}

#[tokio::test]
async fn test_form_submit_unknown_form_is_not_found() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path(format!("/forms/for_account/{}", faction())))
        .respond_with(items(json!([assigned_form(Uuid::from_u128(1))])))
        .mount(&mock_server)
        .await;

    let err = consumer_as(&mock_server, member_account())
        .form_submit(faction(), Uuid::from_u128(2))
        .await
        .unwrap_err();

    assert_eq!(*err.kind(), HavenErrorKind::NotFound);
    assert_eq!(err.message(), "Check demonstration code for proper IDs");
}

#[tokio::test]
async fn test_form_get_answers_downloads_export() {
    let mock_server = setup_mock_server().await;
    let form_id = Uuid::from_u128(0x6666);
    let export = b"PK\x03\x04fake-xlsx".to_vec();

    let mut row = assigned_form(form_id);
    row["sections"][1]["question"]["answer"] = json!({ "response_raw": "first" });
    row["form_response"] = json!({ "submitted_by": "Pat Doe" });

    Mock::given(method("GET"))
        .and(path(format!("/forms/{}/report", form_id)))
        .respond_with(items(json!([row])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/forms/{}/export", form_id)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(export.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let answers = consumer(&mock_server)
        .form_get_answers(faction(), form_id)
        .await
        .unwrap();

    assert_eq!(
        answers.rows,
        vec![("Pat Doe".to_string(), Some("first".to_string()))]
    );
    assert!(answers.export_url.ends_with(&format!("/forms/{}/export", form_id)));
    assert!(answers.path.ends_with("export.xlsx"));
    assert_eq!(tokio::fs::read(&answers.path).await.unwrap(), export);

    if let Some(folder) = answers.path.parent() {
        let _ = tokio::fs::remove_dir_all(folder).await;
    }
}

#[tokio::test]
async fn test_form_create_with_target_uses_first_group() {
    let mock_server = setup_mock_server().await;
    let group_id = Uuid::from_u128(0x8888);

    Mock::given(method("GET"))
        .and(path(format!("/group/by_faction/{}", faction())))
        .respond_with(items(json!([{ "group_id": group_id, "name": "Band" }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/forms/upsert"))
        .and(body_partial_json(json!({
            "scope": "Group",
            "group_id": group_id,
            "title": "This is targeted to a group",
            "attachment": "Principal",
            "external_identifier": "your-system-id"
        })))
        .respond_with(item(json!({ "form_id": Uuid::from_u128(0x9999) })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let form = consumer(&mock_server)
        .form_create_with_target(faction())
        .await
        .unwrap();

    assert_eq!(form.form_id, Uuid::from_u128(0x9999));
}

#[tokio::test]
async fn test_form_edit_appends_text_question() {
    let mock_server = setup_mock_server().await;
    let form_id = Uuid::from_u128(0x6666);

    Mock::given(method("GET"))
        .and(path(format!("/form/{}", form_id)))
        .respond_with(item(assigned_form(form_id)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/forms/upsert"))
        .and(body_partial_json(json!({ "form_id": form_id })))
        .respond_with(item(json!({ "form_id": form_id })))
        .expect(1)
        .mount(&mock_server)
        .await;

    consumer(&mock_server)
        .form_edit(faction(), form_id)
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let upsert = requests
        .iter()
        .find(|r| r.url.path() == "/forms/upsert")
        .unwrap();
    let body: Value = serde_json::from_slice(&upsert.body).unwrap();

    assert!(body["title"].as_str().unwrap().starts_with("I was updated at "));
    let sections = body["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 4);
    assert_eq!(sections[3]["kind"], "form_question");
    assert_eq!(sections[3]["question"]["title"], "This is a new question");
    assert_eq!(sections[3]["question"]["config"]["kind"], "Text");
    assert_eq!(sections[3]["question"]["config"]["code"], "new");
}

#[tokio::test]
async fn test_form_submit_uses_requested_faction_membership() {
    let mock_server = setup_mock_server().await;
    let form_id = Uuid::from_u128(0x6767);

    let mut form = assigned_form(form_id);
    form.as_object_mut().unwrap().remove("faction_id");

    Mock::given(method("GET"))
        .and(path(format!("/forms/for_account/{}", faction())))
        .respond_with(items(json!([form])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/forms/submit"))
        .and(body_partial_json(json!({
            "form_id": form_id,
            "faction_id": faction(),
            "principal_id": Uuid::from_u128(0xBBBB)
        })))
        .respond_with(action_ok())
        .expect(1)
        .mount(&mock_server)
        .await;

    let submitted = consumer_as(&mock_server, member_account())
        .form_submit(faction(), form_id)
        .await
        .unwrap();

    assert!(submitted);
}
