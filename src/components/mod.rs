// ABOUTME: UI components for the TUI interface: landing screen, intake wizard and alert dialog

pub mod alert_dialog;
pub mod intake_wizard;
pub mod landing;
pub mod palette;

#[cfg(test)]
pub(crate) mod test_support;

pub use alert_dialog::AlertDialogComponent;
pub use intake_wizard::IntakeWizardComponent;
pub use landing::LandingComponent;

use crate::app::{AppState, View};
use ratatui::Frame;

/// Draw the current view plus any alert on top
pub fn render_app(frame: &mut Frame, state: &AppState) {
    let area = frame.size();
    match state.current_view {
        View::Landing => LandingComponent::new().render(frame, area),
        View::Intake => IntakeWizardComponent::new().render(frame, area, &state.intake),
    }
    AlertDialogComponent::new().render(frame, area, state.intake.alert.as_deref());
}
