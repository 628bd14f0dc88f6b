// ABOUTME: Behavioral tests for wizard step gating and conditional fields
// Next is gated on required fields, Back is unavailable on step 1, and the
// residency details field follows the residency status

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use visa_intake::app::{AppState, EventHandler, View};
use visa_intake::intake::{IntakeField, IntakeState, IntakeStep};
use visa_intake::models::ResidencyStatus;

use super::fixtures::complete_request;

fn press(state: &mut AppState, code: KeyCode) {
    if let Some(event) = EventHandler::handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), state)
    {
        EventHandler::process_event(event, state);
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
}

fn clear_nationality(s: &mut IntakeState) {
    s.request.nationality.clear();
}
fn clear_current_country(s: &mut IntakeState) {
    s.request.current_country.clear();
}
fn clear_destination(s: &mut IntakeState) {
    s.request.destination_country.clear();
}
fn clear_travel_dates(s: &mut IntakeState) {
    s.request.travel_dates.clear();
}
fn clear_duration(s: &mut IntakeState) {
    s.request.duration.clear();
}
fn clear_email(s: &mut IntakeState) {
    s.request.email.clear();
}

/// Next is enabled exactly when every required field of the step is filled
#[test]
fn test_next_requires_every_required_field() {
    type Clearer = fn(&mut IntakeState);
    let cases: [(IntakeStep, &[Clearer]); 3] = [
        (IntakeStep::Background, &[clear_nationality, clear_current_country]),
        (
            IntakeStep::TravelPlans,
            &[clear_destination, clear_travel_dates, clear_duration],
        ),
        (IntakeStep::AdditionalInfo, &[clear_email]),
    ];

    for (step, clearers) in cases {
        let mut state = IntakeState::new();
        state.request = complete_request();
        state.current_step = step;
        assert!(state.can_advance(), "step {} should be complete", step.number());

        for clear in clearers {
            let mut incomplete = state.clone();
            clear(&mut incomplete);
            assert!(
                !incomplete.can_advance(),
                "step {} advanced with a missing field",
                step.number()
            );
            assert!(!incomplete.advance());
            assert_eq!(incomplete.current_step, step);
        }
    }
}

/// Optional fields never block a step
#[test]
fn test_optional_fields_do_not_gate() {
    let mut state = IntakeState::new();
    state.request = complete_request();
    state.request.dual_citizenship = None;
    state.request.additional_info = None;
    state.request.residency_status = ResidencyStatus::Other;
    state.request.residency_details = None;

    assert!(state.can_advance());
    state.current_step = IntakeStep::AdditionalInfo;
    assert!(state.can_advance());
}

#[test]
fn test_back_unavailable_only_on_first_step() {
    for step in IntakeStep::all() {
        let mut state = IntakeState::new();
        state.current_step = *step;
        assert_eq!(state.can_go_back(), *step != IntakeStep::Background);
    }
}

#[test]
fn test_review_step_offers_submit_not_next() {
    let mut state = IntakeState::new();
    state.request = complete_request();
    state.current_step = IntakeStep::Review;

    assert!(state.is_final_step());
    assert!(!state.can_advance());
    assert!(state.can_submit());
    assert!(!state.advance());
}

#[test]
fn test_residency_details_follow_status_and_keep_text() {
    let mut state = IntakeState::new();
    assert!(!state.visible_fields().contains(&IntakeField::ResidencyDetails));

    state.set_residency_status(ResidencyStatus::Other);
    assert!(state.visible_fields().contains(&IntakeField::ResidencyDetails));
    state.set_text(IntakeField::ResidencyDetails, "Working holiday visa");

    state.set_residency_status(ResidencyStatus::Student);
    assert!(!state.visible_fields().contains(&IntakeField::ResidencyDetails));
    assert_eq!(
        state.request.residency_details.as_deref(),
        Some("Working holiday visa")
    );

    state.set_residency_status(ResidencyStatus::Other);
    assert_eq!(
        state.text_value(IntakeField::ResidencyDetails),
        "Working holiday visa"
    );
}

/// Drive the whole wizard with the keyboard up to the review step
#[test]
fn test_keyboard_walkthrough_reaches_review() {
    let mut state = AppState::new();
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.current_view, View::Intake);

    // Step 1: nationality, dual citizenship, current country, status
    type_text(&mut state, "Indian");
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "United States");
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Right);
    assert_eq!(state.intake.request.residency_status, ResidencyStatus::PermanentResident);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.intake.current_step, IntakeStep::TravelPlans);

    // Step 2: destination, purpose, dates, duration
    type_text(&mut state, "Germany");
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Down);
    type_text(&mut state, "March 2025");
    press(&mut state, KeyCode::Down);
    type_text(&mut state, "2 weeks");
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.intake.current_step, IntakeStep::AdditionalInfo);

    // Step 3: Enter is refused until the email is in
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.intake.current_step, IntakeStep::AdditionalInfo);
    press(&mut state, KeyCode::Up);
    assert_eq!(state.intake.focused(), Some(IntakeField::Email));
    type_text(&mut state, "asha@example.com");
    press(&mut state, KeyCode::Enter);

    assert_eq!(state.intake.current_step, IntakeStep::Review);
    assert_eq!(state.intake.request.destination_country, "Germany");
    assert_eq!(state.intake.request.email, "asha@example.com");
    assert!(state.intake.request.dual_citizenship.is_none());
}

#[test]
fn test_back_keeps_answers() {
    let mut state = AppState::new();
    state.start_intake();
    state.intake.request = complete_request();
    state.intake.current_step = IntakeStep::Review;

    press(&mut state, KeyCode::Esc);
    press(&mut state, KeyCode::Esc);
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.intake.current_step, IntakeStep::Background);
    assert_eq!(state.intake.request, complete_request());

    press(&mut state, KeyCode::Esc);
    assert_eq!(state.current_view, View::Landing);
}
