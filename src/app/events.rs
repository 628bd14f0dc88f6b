// ABOUTME: Event handling system for keyboard input and app actions

use crate::app::state::{AppState, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    // Landing screen
    StartIntake,
    // Intake wizard
    NextField,
    PreviousField,
    ChoiceNext,
    ChoicePrevious,
    ToggleOption,
    InputChar(char),
    Backspace,
    NextStep,
    PreviousStep,
    Submit,
    BackToLanding,
    // Alert dialog
    DismissAlert,
}

pub struct EventHandler;

impl EventHandler {
    /// Ctrl-C quits from every screen, including while a submission is running
    pub fn is_interrupt(key_event: &KeyEvent) -> bool {
        key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
    }

    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        if Self::is_interrupt(&key_event) {
            return Some(AppEvent::Quit);
        }

        // The alert blocks everything else until dismissed
        if state.intake.alert.is_some() {
            return match key_event.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(AppEvent::DismissAlert),
                _ => None,
            };
        }

        match state.current_view {
            View::Landing => Self::handle_landing_keys(key_event),
            View::Intake => Self::handle_intake_keys(key_event, state),
        }
    }

    fn handle_landing_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(AppEvent::StartIntake),
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            _ => None,
        }
    }

    fn handle_intake_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Keys are swallowed while a submission is in flight
        if state.intake.loading {
            return None;
        }

        match key_event.code {
            KeyCode::Tab | KeyCode::Down => Some(AppEvent::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(AppEvent::PreviousField),
            KeyCode::Right => Some(AppEvent::ChoiceNext),
            KeyCode::Left => Some(AppEvent::ChoicePrevious),
            KeyCode::Backspace => Some(AppEvent::Backspace),
            KeyCode::Enter => {
                if state.intake.is_final_step() {
                    Some(AppEvent::Submit)
                } else {
                    Some(AppEvent::NextStep)
                }
            }
            KeyCode::Esc => {
                if state.intake.can_go_back() {
                    Some(AppEvent::PreviousStep)
                } else {
                    Some(AppEvent::BackToLanding)
                }
            }
            KeyCode::Char(' ') if Self::focused_is_toggle(state) => Some(AppEvent::ToggleOption),
            KeyCode::Char(c) if Self::is_plain_text(&key_event) => Some(AppEvent::InputChar(c)),
            _ => None,
        }
    }

    // Ctrl and Alt chords are not text
    fn is_plain_text(key_event: &KeyEvent) -> bool {
        key_event.modifiers == KeyModifiers::NONE || key_event.modifiers == KeyModifiers::SHIFT
    }

    fn focused_is_toggle(state: &AppState) -> bool {
        use crate::intake::FieldKind;

        matches!(
            state.intake.focused().map(|field| field.kind()),
            Some(FieldKind::YesNo) | Some(FieldKind::Choice)
        )
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!("Processing event: {:?}", event);

        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::StartIntake => state.start_intake(),
            AppEvent::BackToLanding => state.show_landing(),
            AppEvent::NextField => state.intake.focus_next(),
            AppEvent::PreviousField => state.intake.focus_previous(),
            AppEvent::ChoiceNext => state.intake.cycle_choice(true),
            AppEvent::ChoicePrevious => state.intake.cycle_choice(false),
            AppEvent::ToggleOption => state.intake.cycle_choice(true),
            AppEvent::InputChar(c) => state.intake.input_char(c),
            AppEvent::Backspace => state.intake.backspace(),
            AppEvent::NextStep => {
                if !state.intake.advance() {
                    debug!(
                        "Step {} incomplete, staying put",
                        state.intake.step_number()
                    );
                }
            }
            AppEvent::PreviousStep => {
                state.intake.go_back();
            }
            AppEvent::Submit => {
                state.request_submit();
            }
            AppEvent::DismissAlert => state.intake.dismiss_alert(),
        }
    }
}
