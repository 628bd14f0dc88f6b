// ABOUTME: Application state management and view switching logic for the visa-intake TUI

use crate::api::ApiClient;
use crate::intake::{
    complete_submit, ConsultationIdSource, IntakeState, Navigator, SubmitOutcome,
};
use std::future::Future;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Product pitch with the call to action
    Landing,
    /// The four-step intake wizard
    Intake,
}

/// Work the event loop runs after the next redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsyncAction {
    /// Preview + checkout + browser hand-off
    SubmitConsultation,
}

#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    pub intake: IntakeState,
    pub should_quit: bool,
    pub pending_async_action: Option<AsyncAction>,
    /// Set once the checkout page has been opened
    pub checkout_url: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_view: View::Landing,
            intake: IntakeState::new(),
            should_quit: false,
            pending_async_action: None,
            checkout_url: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Leave the landing screen for the wizard. Earlier answers are kept.
    pub fn start_intake(&mut self) {
        info!("Starting consultation intake");
        self.current_view = View::Intake;
    }

    pub fn show_landing(&mut self) {
        self.current_view = View::Landing;
    }

    /// Start a submission; the network calls run after the loading state is drawn
    pub fn request_submit(&mut self) -> bool {
        if self.intake.begin_submit() {
            self.pending_async_action = Some(AsyncAction::SubmitConsultation);
            true
        } else {
            false
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct App {
    pub state: AppState,
    api: ApiClient,
    ids: Box<dyn ConsultationIdSource>,
    navigator: Box<dyn Navigator>,
}

impl App {
    pub fn new(
        api: ApiClient,
        ids: Box<dyn ConsultationIdSource>,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        Self {
            state: AppState::new(),
            api,
            ids,
            navigator,
        }
    }

    /// Run the pending async action unless `interrupt` resolves first.
    /// An interrupted action is dropped mid-flight and the app quits.
    pub async fn process_pending_action_until<F>(&mut self, interrupt: F)
    where
        F: Future<Output = ()>,
    {
        if self.state.pending_async_action.is_none() {
            return;
        }

        let interrupted = tokio::select! {
            () = self.process_pending_action() => false,
            () = interrupt => true,
        };

        if interrupted {
            warn!("Submission interrupted by the user");
            self.state.pending_async_action = None;
            self.state.intake.loading = false;
            self.state.quit();
        }
    }

    /// Run the pending async action, if any
    pub async fn process_pending_action(&mut self) {
        let Some(action) = self.state.pending_async_action.take() else {
            return;
        };

        match action {
            AsyncAction::SubmitConsultation => {
                let outcome = complete_submit(
                    &mut self.state.intake,
                    &self.api,
                    self.ids.as_ref(),
                    self.navigator.as_ref(),
                )
                .await;

                if let SubmitOutcome::Redirected(url) = outcome {
                    // The browser owns the flow from here on
                    self.state.checkout_url = Some(url);
                    self.state.quit();
                }
            }
        }
    }
}
