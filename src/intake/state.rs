// ABOUTME: State management for the consultation intake wizard
// Tracks current step, field focus, the request being filled in, and the submission flag

use crate::models::{ConsultationRequest, ResidencyStatus, TravelPurpose};

/// Shown for every failed submission, whatever the cause
pub const SUBMIT_FAILED_MESSAGE: &str =
    "There was an error processing your request. Please try again.";

/// Steps in the intake wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeStep {
    Background,
    TravelPlans,
    AdditionalInfo,
    Review,
}

impl IntakeStep {
    /// Get all steps in order
    pub fn all() -> &'static [IntakeStep] {
        &[
            Self::Background,
            Self::TravelPlans,
            Self::AdditionalInfo,
            Self::Review,
        ]
    }

    /// Get the step number (1-indexed for display)
    pub fn number(&self) -> usize {
        match self {
            Self::Background => 1,
            Self::TravelPlans => 2,
            Self::AdditionalInfo => 3,
            Self::Review => 4,
        }
    }

    pub fn from_number(number: usize) -> Option<Self> {
        Self::all().get(number.checked_sub(1)?).copied()
    }

    /// Get the total number of steps
    pub fn total() -> usize {
        4
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Background => "Your Background",
            Self::TravelPlans => "Travel Plans",
            Self::AdditionalInfo => "Additional Information",
            Self::Review => "Review & Payment",
        }
    }

    /// Required fields for this step are filled in.
    ///
    /// Step 3 only requires the email, and step 1 never requires
    /// `residency_details`, even when the status is `Other`.
    pub fn is_complete(&self, request: &ConsultationRequest) -> bool {
        match self {
            // residency_status is an enum and always has a value
            Self::Background => {
                !request.nationality.is_empty() && !request.current_country.is_empty()
            }
            Self::TravelPlans => {
                !request.destination_country.is_empty()
                    && !request.travel_dates.is_empty()
                    && !request.duration.is_empty()
            }
            Self::AdditionalInfo => !request.email.is_empty(),
            Self::Review => true,
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Background => Some(Self::TravelPlans),
            Self::TravelPlans => Some(Self::AdditionalInfo),
            Self::AdditionalInfo => Some(Self::Review),
            Self::Review => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Background => None,
            Self::TravelPlans => Some(Self::Background),
            Self::AdditionalInfo => Some(Self::TravelPlans),
            Self::Review => Some(Self::AdditionalInfo),
        }
    }

    /// Editable fields on this step, in display order
    pub fn fields(&self, request: &ConsultationRequest) -> Vec<IntakeField> {
        match self {
            Self::Background => {
                let mut fields = vec![
                    IntakeField::Nationality,
                    IntakeField::DualCitizenship,
                    IntakeField::CurrentCountry,
                    IntakeField::ResidencyStatus,
                ];
                if request.residency_status == ResidencyStatus::Other {
                    fields.push(IntakeField::ResidencyDetails);
                }
                fields
            }
            Self::TravelPlans => vec![
                IntakeField::DestinationCountry,
                IntakeField::TravelPurpose,
                IntakeField::TravelDates,
                IntakeField::Duration,
            ],
            Self::AdditionalInfo => vec![
                IntakeField::PreviousRejections,
                IntakeField::AdditionalInfo,
                IntakeField::Email,
            ],
            Self::Review => Vec::new(),
        }
    }
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Cycles through a fixed option list
    Choice,
    YesNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeField {
    Nationality,
    DualCitizenship,
    CurrentCountry,
    ResidencyStatus,
    ResidencyDetails,
    DestinationCountry,
    TravelPurpose,
    TravelDates,
    Duration,
    PreviousRejections,
    AdditionalInfo,
    Email,
}

impl IntakeField {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::ResidencyStatus | Self::TravelPurpose => FieldKind::Choice,
            Self::PreviousRejections => FieldKind::YesNo,
            _ => FieldKind::Text,
        }
    }

    /// Question shown above the field
    pub fn label(&self, request: &ConsultationRequest) -> String {
        match self {
            Self::Nationality => "What is your nationality? (Passport country)".to_string(),
            Self::DualCitizenship => "Do you have dual citizenship? (Optional)".to_string(),
            Self::CurrentCountry => "Which country do you currently live in?".to_string(),
            Self::ResidencyStatus => {
                let country = if request.current_country.is_empty() {
                    "that country"
                } else {
                    request.current_country.as_str()
                };
                format!("What is your status in {country}?")
            }
            Self::ResidencyDetails => "Please specify your residency status".to_string(),
            Self::DestinationCountry => "Which country do you want to visit?".to_string(),
            Self::TravelPurpose => "What is the purpose of your visit?".to_string(),
            Self::TravelDates => "When do you plan to travel?".to_string(),
            Self::Duration => "How long do you plan to stay?".to_string(),
            Self::PreviousRejections => "Have you ever been denied a visa before?".to_string(),
            Self::AdditionalInfo => "Any other relevant information? (Optional)".to_string(),
            Self::Email => "Email address for results delivery".to_string(),
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Nationality => "e.g., Chinese, Indian, German",
            Self::DualCitizenship => "e.g., Canadian, Australian (leave blank if none)",
            Self::CurrentCountry => "e.g., United States, Canada, United Kingdom",
            Self::ResidencyDetails => "e.g., Tourist visa, Working holiday visa",
            Self::DestinationCountry => "e.g., Germany, Japan, France",
            Self::TravelDates => "e.g., March 2025, Summer 2025, Flexible",
            Self::Duration => "e.g., 2 weeks, 1 month, 3 months",
            Self::AdditionalInfo => {
                "e.g., Previous travel history, specific concerns, urgency, multiple destination plans..."
            }
            Self::Email => "your.email@example.com",
            Self::ResidencyStatus | Self::TravelPurpose | Self::PreviousRejections => "",
        }
    }
}

/// Full intake wizard state
#[derive(Debug, Clone)]
pub struct IntakeState {
    /// Answers entered so far
    pub request: ConsultationRequest,
    pub current_step: IntakeStep,
    /// Index into the current step's visible fields
    pub focused_field: usize,
    /// Submission in flight
    pub loading: bool,
    /// Blocking failure notice, cleared by the user
    pub alert: Option<String>,
}

impl IntakeState {
    pub fn new() -> Self {
        Self {
            request: ConsultationRequest::default(),
            current_step: IntakeStep::Background,
            focused_field: 0,
            loading: false,
            alert: None,
        }
    }

    pub fn step_number(&self) -> usize {
        self.current_step.number()
    }

    /// Percentage shown in the progress header
    pub fn progress_percent(&self) -> usize {
        (self.step_number() * 100 + IntakeStep::total() / 2) / IntakeStep::total()
    }

    pub fn visible_fields(&self) -> Vec<IntakeField> {
        self.current_step.fields(&self.request)
    }

    pub fn focused(&self) -> Option<IntakeField> {
        self.visible_fields().get(self.focused_field).copied()
    }

    pub fn is_step_complete(&self) -> bool {
        self.current_step.is_complete(&self.request)
    }

    pub fn can_advance(&self) -> bool {
        !self.is_final_step() && self.is_step_complete()
    }

    pub fn can_go_back(&self) -> bool {
        self.current_step.previous().is_some()
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step == IntakeStep::Review
    }

    pub fn can_submit(&self) -> bool {
        self.is_final_step() && self.is_step_complete() && !self.loading
    }

    /// Move to next step if the current one is complete
    pub fn advance(&mut self) -> bool {
        if !self.is_step_complete() {
            return false;
        }
        match self.current_step.next() {
            Some(next) => {
                self.current_step = next;
                self.focused_field = 0;
                true
            }
            None => false,
        }
    }

    /// Move to previous step
    pub fn go_back(&mut self) -> bool {
        match self.current_step.previous() {
            Some(prev) => {
                self.current_step = prev;
                self.focused_field = 0;
                true
            }
            None => false,
        }
    }

    pub fn focus_next(&mut self) {
        let count = self.visible_fields().len();
        if count > 0 {
            self.focused_field = (self.focused_field + 1) % count;
        }
    }

    pub fn focus_previous(&mut self) {
        let count = self.visible_fields().len();
        if count > 0 {
            self.focused_field = (self.focused_field + count - 1) % count;
        }
    }

    /// Current text of a text field
    pub fn text_value(&self, field: IntakeField) -> &str {
        let request = &self.request;
        match field {
            IntakeField::Nationality => request.nationality.as_str(),
            IntakeField::DualCitizenship => request.dual_citizenship.as_deref().unwrap_or(""),
            IntakeField::CurrentCountry => request.current_country.as_str(),
            IntakeField::ResidencyDetails => request.residency_details.as_deref().unwrap_or(""),
            IntakeField::DestinationCountry => request.destination_country.as_str(),
            IntakeField::TravelDates => request.travel_dates.as_str(),
            IntakeField::Duration => request.duration.as_str(),
            IntakeField::AdditionalInfo => request.additional_info.as_deref().unwrap_or(""),
            IntakeField::Email => request.email.as_str(),
            IntakeField::ResidencyStatus => request.residency_status.label(),
            IntakeField::TravelPurpose => request.travel_purpose.label(),
            IntakeField::PreviousRejections => {
                if request.previous_rejections {
                    "Yes, I have been denied before"
                } else {
                    "No, never"
                }
            }
        }
    }

    fn text_slot(&mut self, field: IntakeField) -> Option<&mut String> {
        let request = &mut self.request;
        match field {
            IntakeField::Nationality => Some(&mut request.nationality),
            IntakeField::DualCitizenship => {
                Some(request.dual_citizenship.get_or_insert_with(String::new))
            }
            IntakeField::CurrentCountry => Some(&mut request.current_country),
            IntakeField::ResidencyDetails => {
                Some(request.residency_details.get_or_insert_with(String::new))
            }
            IntakeField::DestinationCountry => Some(&mut request.destination_country),
            IntakeField::TravelDates => Some(&mut request.travel_dates),
            IntakeField::Duration => Some(&mut request.duration),
            IntakeField::AdditionalInfo => {
                Some(request.additional_info.get_or_insert_with(String::new))
            }
            IntakeField::Email => Some(&mut request.email),
            IntakeField::ResidencyStatus
            | IntakeField::TravelPurpose
            | IntakeField::PreviousRejections => None,
        }
    }

    /// Replace a text field's value. Ignored for non-text fields.
    pub fn set_text(&mut self, field: IntakeField, value: &str) {
        if let Some(slot) = self.text_slot(field) {
            slot.clear();
            slot.push_str(value);
        }
    }

    /// Handle text input character on the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused() {
            if let Some(slot) = self.text_slot(field) {
                slot.push(c);
            }
        }
    }

    /// Handle backspace on the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused() {
            if let Some(slot) = self.text_slot(field) {
                slot.pop();
            }
        }
    }

    pub fn set_residency_status(&mut self, status: ResidencyStatus) {
        self.request.residency_status = status;
        // Hiding residency_details can shrink the field list
        let count = self.visible_fields().len();
        if self.focused_field >= count {
            self.focused_field = count.saturating_sub(1);
        }
    }

    pub fn set_travel_purpose(&mut self, purpose: TravelPurpose) {
        self.request.travel_purpose = purpose;
    }

    /// Step the focused choice field forward or backward through its options
    pub fn cycle_choice(&mut self, forward: bool) {
        match self.focused() {
            Some(IntakeField::ResidencyStatus) => {
                let next = cycle(ResidencyStatus::all(), self.request.residency_status, forward);
                self.set_residency_status(next);
            }
            Some(IntakeField::TravelPurpose) => {
                let next = cycle(TravelPurpose::all(), self.request.travel_purpose, forward);
                self.set_travel_purpose(next);
            }
            Some(IntakeField::PreviousRejections) => self.toggle_yes_no(),
            _ => {}
        }
    }

    pub fn toggle_yes_no(&mut self) {
        if self.focused() == Some(IntakeField::PreviousRejections) {
            self.request.previous_rejections = !self.request.previous_rejections;
        }
    }

    /// Mark a submission as started. Returns false when one is already running
    /// or the wizard is not on the review step.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.loading = true;
        self.alert = None;
        true
    }

    /// Reset the loading flag; a failure raises the generic alert.
    /// Step and answers are left untouched so the user can retry.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.loading = false;
        if !succeeded {
            self.alert = Some(SUBMIT_FAILED_MESSAGE.to_string());
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

impl Default for IntakeState {
    fn default() -> Self {
        Self::new()
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let len = options.len();
    let idx = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
    options[next]
}
