// ABOUTME: Shared test fixtures and utilities for behavioral tests
//
// Provides:
// - RecordingNavigator: Navigator that remembers every URL it was asked to open
// - FixedIdSource: deterministic consultation IDs
// - complete_request()/review_state(): a fully answered intake
// - mount_checkout_flow(): wiremock routes for a successful submission

use std::sync::{Arc, Mutex};

use serde_json::json;
use visa_intake::intake::{
    ConsultationIdSource, IntakeState, IntakeStep, NavigationError, Navigator,
};
use visa_intake::models::{ConsultationRequest, ResidencyStatus, TravelPurpose};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CHECKOUT_URL: &str = "https://pay.example/abc";

/// Navigator that records URLs instead of launching a browser
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        self.visited.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

pub struct FixedIdSource(pub &'static str);

impl ConsultationIdSource for FixedIdSource {
    fn next_id(&self) -> String {
        self.0.to_string()
    }
}

pub fn complete_request() -> ConsultationRequest {
    ConsultationRequest {
        nationality: "Indian".to_string(),
        dual_citizenship: None,
        current_country: "United States".to_string(),
        residency_status: ResidencyStatus::TemporaryWorker,
        residency_details: None,
        destination_country: "Germany".to_string(),
        travel_purpose: TravelPurpose::Business,
        travel_dates: "March 2025".to_string(),
        duration: "2 weeks".to_string(),
        previous_rejections: false,
        additional_info: Some("Conference in Berlin".to_string()),
        email: "asha@example.com".to_string(),
    }
}

/// Fully answered wizard sitting on the review step
pub fn review_state() -> IntakeState {
    let mut state = IntakeState::new();
    state.request = complete_request();
    state.current_step = IntakeStep::Review;
    state
}

/// Mount a 200 preview and a checkout returning [`CHECKOUT_URL`]
pub async fn mount_checkout_flow(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/consultation/preview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "preview": "Initial analysis"
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/payment/create-checkout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "checkout_url": CHECKOUT_URL,
            "session_id": "s1"
        })))
        .mount(server)
        .await;
}
