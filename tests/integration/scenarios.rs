//! Integration tests for the scenario runner

use super::*;
use integrations_haven::{HavenErrorKind, Runner, Scenario};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::Mock;

fn runner(server: &MockServer) -> Runner {
    let config = HavenConfig::builder()
        .base_url(server.uri())
        .account(AccountInfo::with_credentials(account_id(), API_KEY, API_SECRET))
        .faction_id(faction())
        .build()
        .expect("Failed to build config");
    Runner::new(config)
}

#[tokio::test]
async fn test_connection_failure_does_not_stop_run() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/accounts/self"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/feeditem/by_faction/{}", faction())))
        .respond_with(items(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/feeditems/for_account/{}", faction())))
        .respond_with(items(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = runner(&mock_server).run(&Scenario::defaults()).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_scenario_failure_is_aggregated_and_stops_run() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path(format!("/feeditem/by_faction/{}", faction())))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Unknown faction" })),
        )
        .mount(&mock_server)
        .await;

    // the push scenario runs after pattern and must not be reached
    Mock::given(method("POST"))
        .respond_with(action_ok())
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = runner(&mock_server)
        .run(&[Scenario::Pattern, Scenario::Push])
        .await
        .unwrap_err();

    assert_eq!(*err.kind(), HavenErrorKind::Aggregate);
    assert_eq!(err.message(), "Scenario pattern failed");

    let cause = err.first_non_aggregate();
    assert_eq!(*cause.kind(), HavenErrorKind::NotFound);
    assert_eq!(cause.message(), "Unknown faction");
}
