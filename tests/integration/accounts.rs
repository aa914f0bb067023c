//! Integration tests for access codes and account use cases

use super::*;
use integrations_haven::headers::APPLICATION_KEY;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::Mock;

#[tokio::test]
async fn test_login_auto_adopts_redeemed_identity() {
    let mock_server = setup_mock_server().await;
    let redeemed = Uuid::from_u128(0x5151);

    Mock::given(method("POST"))
        .and(path("/auth/redeem"))
        .and(body_partial_json(json!({ "code": "ABC123" })))
        .respond_with(item(json!({
            "next_screen": "AutoLogin",
            "account_info": {
                "account_id": redeemed,
                "api_key": "redeemed-key",
                "api_secret": "redeemed-secret"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/accounts/self"))
        .and(header(APPLICATION_KEY, "redeemed-key"))
        .respond_with(item(json!({ "account_id": redeemed })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut consumer = consumer(&mock_server);
    let account = consumer.login_auto("ABC123").await.unwrap();

    assert_eq!(account.account_id, redeemed);
    assert_eq!(consumer.account().account_id, redeemed);
    assert!(consumer.get_self().await.unwrap().is_success());
}

#[tokio::test]
async fn test_login_auto_keeps_identity_on_other_screens() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/auth/redeem"))
        .respond_with(item(json!({
            "next_screen": "Login",
            "account_info": { "account_id": Uuid::from_u128(0x5151), "api_key": "other-key" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/accounts/self"))
        .and(header(APPLICATION_KEY, API_KEY))
        .respond_with(item(json!({ "account_id": account_id() })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut consumer = consumer(&mock_server);
    let account = consumer.login_auto("ABC123").await.unwrap();

    assert_eq!(account.account_id, account_id());
    assert!(consumer.get_self().await.unwrap().is_success());
}

#[tokio::test]
async fn test_login_token_expires_in_five_minutes() {
    let mock_server = setup_mock_server().await;
    let target = Uuid::from_u128(0x5252);

    Mock::given(method("POST"))
        .and(path(format!("/factions/{}/login_token", faction())))
        .and(body_partial_json(json!({ "account_id": target, "expire_minutes": 5 })))
        .respond_with(item(json!("one-time-token")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let token = consumer(&mock_server)
        .account_create_login_token(faction(), target)
        .await
        .unwrap();

    assert_eq!(token, "one-time-token");
}
