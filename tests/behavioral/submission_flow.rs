// ABOUTME: Behavioral tests for submitting the wizard
// Preview then checkout then browser hand-off, with one generic alert for every failure

use pretty_assertions::assert_eq;
use serde_json::json;
use visa_intake::api::ApiClient;
use visa_intake::app::App;
use visa_intake::intake::{submit, IntakeStep, SubmitError, SubmitOutcome, SUBMIT_FAILED_MESSAGE};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::{
    complete_request, mount_checkout_flow, review_state, FixedIdSource, RecordingNavigator,
    CHECKOUT_URL,
};

#[tokio::test]
async fn test_checkout_url_is_opened_verbatim() {
    let server = MockServer::start().await;
    mount_checkout_flow(&server).await;

    let api = ApiClient::new(server.uri()).unwrap();
    let navigator = RecordingNavigator::new();
    let mut state = review_state();

    let outcome = submit(&mut state, &api, &FixedIdSource("temp-1"), &navigator).await;

    assert!(matches!(outcome, SubmitOutcome::Redirected(ref url) if url == CHECKOUT_URL));
    assert_eq!(navigator.visited(), vec![CHECKOUT_URL.to_string()]);
    assert!(!state.loading);
    assert!(state.alert.is_none());
}

#[tokio::test]
async fn test_preview_receives_the_answers() {
    let server = MockServer::start().await;
    let expected = serde_json::to_value(complete_request()).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/consultation/preview"))
        .and(body_json(expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/payment/create-checkout"))
        .and(body_json(json!({
            "consultation_id": "temp-99",
            "email": "asha@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "checkout_url": CHECKOUT_URL,
            "session_id": "s1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let mut state = review_state();
    let outcome = submit(
        &mut state,
        &api,
        &FixedIdSource("temp-99"),
        &RecordingNavigator::new(),
    )
    .await;

    assert!(matches!(outcome, SubmitOutcome::Redirected(_)));
}

#[tokio::test]
async fn test_checkout_failure_shows_generic_alert_and_keeps_answers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/consultation/preview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/payment/create-checkout"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "card processor down"})),
        )
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let navigator = RecordingNavigator::new();
    let mut state = review_state();

    let outcome = submit(&mut state, &api, &FixedIdSource("temp-1"), &navigator).await;

    match outcome {
        SubmitOutcome::Failed(SubmitError::Checkout(err)) => {
            assert_eq!(err.status(), Some(500));
            assert_eq!(err.message(), "card processor down");
        }
        other => panic!("expected checkout failure, got {other:?}"),
    }
    assert_eq!(state.alert.as_deref(), Some(SUBMIT_FAILED_MESSAGE));
    assert!(!state.loading);
    assert_eq!(state.request, complete_request());
    assert_eq!(state.current_step, IntakeStep::Review);
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn test_submit_while_loading_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let navigator = RecordingNavigator::new();
    let mut state = review_state();
    state.loading = true;

    let outcome = submit(&mut state, &api, &FixedIdSource("temp-1"), &navigator).await;

    assert!(matches!(outcome, SubmitOutcome::Ignored));
    assert!(state.loading);
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn test_unreachable_backend_shows_generic_alert() {
    // Nothing listens on the discard port
    let api = ApiClient::new("http://127.0.0.1:9").unwrap();
    let navigator = RecordingNavigator::new();
    let mut state = review_state();

    let outcome = submit(&mut state, &api, &FixedIdSource("temp-1"), &navigator).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(SubmitError::Preview(_))));
    assert_eq!(state.alert.as_deref(), Some(SUBMIT_FAILED_MESSAGE));
    assert!(!state.loading);
}

#[tokio::test]
async fn test_app_retry_after_failure_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/consultation/preview"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_checkout_flow(&server).await;

    let navigator = RecordingNavigator::new();
    let mut app = App::new(
        ApiClient::new(server.uri()).unwrap(),
        Box::new(FixedIdSource("temp-5")),
        Box::new(navigator.clone()),
    );
    app.state.start_intake();
    app.state.intake = review_state();

    assert!(app.state.request_submit());
    app.process_pending_action().await;
    assert_eq!(app.state.intake.alert.as_deref(), Some(SUBMIT_FAILED_MESSAGE));
    assert!(!app.state.should_quit);

    app.state.intake.dismiss_alert();
    assert!(app.state.request_submit());
    app.process_pending_action().await;

    assert_eq!(app.state.checkout_url.as_deref(), Some(CHECKOUT_URL));
    assert!(app.state.should_quit);
    assert_eq!(navigator.visited(), vec![CHECKOUT_URL.to_string()]);
}
