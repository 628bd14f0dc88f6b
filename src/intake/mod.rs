// ABOUTME: Consultation intake wizard: step state, submission flow and checkout hand-off

pub mod navigator;
pub mod state;
pub mod submit;

pub use navigator::{BrowserNavigator, NavigationError, Navigator};
pub use state::{FieldKind, IntakeField, IntakeState, IntakeStep, SUBMIT_FAILED_MESSAGE};
pub use submit::{
    complete_submit, run_submission, submit, ConsultationIdSource, SubmitError, SubmitOutcome,
    TimestampIdSource,
};
