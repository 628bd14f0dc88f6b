// ABOUTME: Submission flow for the intake wizard
// Preview, then checkout session, then hand-off to the hosted checkout page

use crate::api::{ApiClient, ApiError, CheckoutRequest};
use crate::intake::navigator::{NavigationError, Navigator};
use crate::intake::state::IntakeState;
use crate::models::ConsultationRequest;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Supplies the consultation identifier sent with the checkout request
#[cfg_attr(test, mockall::automock)]
pub trait ConsultationIdSource {
    fn next_id(&self) -> String;
}

/// Placeholder identifiers of the form `temp-<unix millis>`.
///
/// No server-side consultation exists before payment, so the checkout call
/// gets a client-generated token.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIdSource;

impl ConsultationIdSource for TimestampIdSource {
    fn next_id(&self) -> String {
        format!("temp-{}", chrono::Utc::now().timestamp_millis())
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Preview request failed: {0}")]
    Preview(#[source] ApiError),

    #[error("Checkout session creation failed: {0}")]
    Checkout(#[source] ApiError),

    #[error("Could not open the checkout page: {0}")]
    Navigation(#[from] NavigationError),
}

/// What happened to a submit request
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Not on the review step, or a submission is already running
    Ignored,
    /// The checkout page was opened at this URL
    Redirected(String),
    /// The generic alert is showing; answers are kept for a retry
    Failed(SubmitError),
}

/// Run the two backend calls in order and open the checkout page.
///
/// The checkout call is only made once the preview succeeded.
pub async fn run_submission(
    api: &ApiClient,
    request: &ConsultationRequest,
    ids: &dyn ConsultationIdSource,
    navigator: &dyn Navigator,
) -> Result<String, SubmitError> {
    let preview = api
        .preview_consultation(request)
        .await
        .map_err(SubmitError::Preview)?;
    debug!("Preview: {}", preview);

    let checkout_request = CheckoutRequest {
        consultation_id: ids.next_id(),
        email: request.email.clone(),
    };
    let session = api
        .create_checkout_session(&checkout_request)
        .await
        .map_err(SubmitError::Checkout)?;
    info!(
        "Checkout session {} created for consultation {}",
        session.session_id, checkout_request.consultation_id
    );

    navigator.navigate(&session.checkout_url)?;
    Ok(session.checkout_url)
}

/// Submit the wizard from the review step.
///
/// Sets `loading` for the duration of the calls and always clears it. Every
/// failure shows the same alert; the concrete error is logged and returned.
pub async fn submit(
    state: &mut IntakeState,
    api: &ApiClient,
    ids: &dyn ConsultationIdSource,
    navigator: &dyn Navigator,
) -> SubmitOutcome {
    if !state.begin_submit() {
        debug!("Submit ignored (step {}, loading {})", state.step_number(), state.loading);
        return SubmitOutcome::Ignored;
    }

    complete_submit(state, api, ids, navigator).await
}

/// Finish a submission already started with [`IntakeState::begin_submit`].
///
/// Split from [`submit`] so the UI can render the loading state between the
/// key press and the network calls.
pub async fn complete_submit(
    state: &mut IntakeState,
    api: &ApiClient,
    ids: &dyn ConsultationIdSource,
    navigator: &dyn Navigator,
) -> SubmitOutcome {
    if !state.loading {
        return SubmitOutcome::Ignored;
    }

    let result = run_submission(api, &state.request, ids, navigator).await;
    state.finish_submit(result.is_ok());

    match result {
        Ok(url) => SubmitOutcome::Redirected(url),
        Err(e) => {
            warn!("Submission failed: {}", e);
            SubmitOutcome::Failed(e)
        }
    }
}
