// ABOUTME: Intake wizard component
// Renders the four consultation steps, progress header and navigation footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::palette::{
    CORNFLOWER_BLUE, DARK_BG, GOLD, MUTED_GRAY, PANEL_BG, SELECTION_GREEN, SOFT_WHITE,
    SUBDUED_BORDER, WARNING_YELLOW,
};
use crate::intake::{FieldKind, IntakeField, IntakeState, IntakeStep};
use crate::models::{ResidencyStatus, TravelPurpose};

pub const SUBMIT_LABEL: &str = "Proceed to Payment - $49";
pub const PROCESSING_LABEL: &str = "Processing...";

const WHAT_YOU_RECEIVE: &[&str] = &[
    "Personalized document checklist prioritized for your situation",
    "AI-written cover letter addressing your specific circumstances",
    "Strategic notes for stronger application",
    "Risk assessment and confidence score",
    "Current processing time estimates",
    "PDF delivery via email within 10 minutes",
];

const IMPORTANT_NOTICE: &str = "This service provides research assistance and document \
preparation guidance only. We do not provide legal advice. Always verify information with \
official embassy sources.";

/// Rows per field: label plus a bordered input
const FIELD_HEIGHT: u16 = 4;

pub struct IntakeWizardComponent;

impl IntakeWizardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &IntakeState) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header with progress
                Constraint::Min(10),   // Step content
                Constraint::Length(3), // Navigation footer
            ])
            .split(area);

        self.render_header(frame, layout[0], state);
        match state.current_step {
            IntakeStep::Review => self.render_review(frame, layout[1], state),
            _ => self.render_fields(frame, layout[1], state),
        }
        self.render_navigation(frame, layout[2], state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &IntakeState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Step counter
                Constraint::Length(1), // Progress row
            ])
            .split(inner);

        let title = Paragraph::new(Span::styled(
            "Visa Consultation",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, rows[0]);

        let counter = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Step {} of {}", state.step_number(), IntakeStep::total()),
                Style::default().fg(SOFT_WHITE),
            ),
            Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)),
            Span::styled(
                format!("{}% Complete", state.progress_percent()),
                Style::default().fg(MUTED_GRAY),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(counter, rows[1]);

        self.render_progress(frame, rows[2], state);
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect, state: &IntakeState) {
        let total = IntakeStep::total();
        let current = state.step_number();
        let mut spans = Vec::new();

        for step in (1..=total).filter_map(IntakeStep::from_number) {
            let number = step.number();
            let (icon, style) = if number < current {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if number == current {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                step.title(),
                if number == current {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if number < total {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }

    fn step_block(step: IntakeStep) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {} ", step.title()))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
    }

    fn render_fields(&self, frame: &mut Frame, area: Rect, state: &IntakeState) {
        let block = Self::step_block(state.current_step);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let fields = state.visible_fields();
        let mut constraints: Vec<Constraint> =
            fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)).collect();
        constraints.push(Constraint::Min(1)); // Key hints

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(2)
            .vertical_margin(1)
            .constraints(constraints)
            .split(inner);

        for (idx, field) in fields.iter().enumerate() {
            let focused = idx == state.focused_field;
            self.render_field(frame, rows[idx], state, *field, focused);
        }

        if let Some(hint_area) = rows.last() {
            let hint = Paragraph::new(Span::styled(
                "Tab/↓ next field • Shift-Tab/↑ previous field • ←/→ change option • Space toggle",
                Style::default().fg(MUTED_GRAY),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(hint, *hint_area);
        }
    }

    fn render_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &IntakeState,
        field: IntakeField,
        focused: bool,
    ) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(3)])
            .split(area);

        let label_style = if focused {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SOFT_WHITE)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(field.label(&state.request), label_style)),
            rows[0],
        );

        let value = match field.kind() {
            FieldKind::Text => text_line(state.text_value(field), field.placeholder(), focused),
            FieldKind::Choice => choice_line(state, field),
            FieldKind::YesNo => yes_no_line(state.request.previous_rejections),
        };

        let border = if focused { GOLD } else { SUBDUED_BORDER };
        let input = Paragraph::new(value).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(DARK_BG)),
        );
        frame.render_widget(input, rows[1]);
    }

    fn render_review(&self, frame: &mut Frame, area: Rect, state: &IntakeState) {
        let block = Self::step_block(IntakeStep::Review);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(2)
            .vertical_margin(1)
            .constraints([
                Constraint::Length(10), // Summary
                Constraint::Length(10), // What you'll receive + price
                Constraint::Min(3),     // Important notice
            ])
            .split(inner);

        let request = &state.request;
        let summary_rows = [
            ("Nationality", request.nationality.as_str()),
            ("Current Location", request.current_country.as_str()),
            ("Status", request.residency_status.label()),
            ("Destination", request.destination_country.as_str()),
            ("Purpose", request.travel_purpose.label()),
            ("Travel Dates", request.travel_dates.as_str()),
            ("Duration", request.duration.as_str()),
            ("Email", request.email.as_str()),
        ];

        let mut summary = vec![Line::from(Span::styled(
            "Your Consultation Summary",
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        ))];
        summary.extend(summary_rows.iter().map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{}: ", label), Style::default().fg(MUTED_GRAY)),
                Span::styled(*value, Style::default().fg(SOFT_WHITE)),
            ])
        }));
        frame.render_widget(Paragraph::new(summary), rows[0]);

        let mut receive = vec![Line::from(Span::styled(
            "What You'll Receive",
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        ))];
        receive.extend(WHAT_YOU_RECEIVE.iter().map(|item| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(GOLD)),
                Span::styled(*item, Style::default().fg(SOFT_WHITE)),
            ])
        }));
        receive.push(Line::from(""));
        receive.push(Line::from(Span::styled(
            "$49",
            Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(Paragraph::new(receive), rows[1]);

        let notice = Paragraph::new(Line::from(vec![
            Span::styled(
                "Important: ",
                Style::default().fg(WARNING_YELLOW).add_modifier(Modifier::BOLD),
            ),
            Span::styled(IMPORTANT_NOTICE, Style::default().fg(WARNING_YELLOW)),
        ]))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(WARNING_YELLOW)),
        );
        frame.render_widget(notice, rows[2]);
    }

    fn render_navigation(&self, frame: &mut Frame, area: Rect, state: &IntakeState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = vec![Span::raw("  ")];

        // Back is dimmed on step 1, where Esc returns to the landing screen
        let back_style = if state.can_go_back() && !state.loading {
            Style::default().fg(GOLD)
        } else {
            Style::default().fg(MUTED_GRAY)
        };
        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("Esc", back_style));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(" Back", Style::default().fg(MUTED_GRAY)));
        spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));

        let (button_text, enabled) = if state.is_final_step() {
            if state.loading {
                (PROCESSING_LABEL, false)
            } else {
                (SUBMIT_LABEL, state.can_submit())
            }
        } else {
            ("Next", state.can_advance())
        };

        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(
            "Enter",
            if enabled {
                Style::default().fg(GOLD)
            } else {
                Style::default().fg(MUTED_GRAY)
            },
        ));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(
            format!(" {}", button_text),
            if enabled {
                Style::default().fg(SOFT_WHITE)
            } else {
                Style::default().fg(MUTED_GRAY)
            },
        ));

        spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("Ctrl-C", Style::default().fg(GOLD)));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(" Quit", Style::default().fg(MUTED_GRAY)));

        let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(nav, inner);
    }
}

impl Default for IntakeWizardComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn text_line<'a>(value: &'a str, placeholder: &'a str, focused: bool) -> Line<'a> {
    let mut spans = Vec::new();
    if value.is_empty() {
        if focused {
            spans.push(Span::styled("│", Style::default().fg(GOLD)));
        }
        spans.push(Span::styled(placeholder, Style::default().fg(MUTED_GRAY)));
    } else {
        spans.push(Span::styled(value, Style::default().fg(SOFT_WHITE)));
        if focused {
            spans.push(Span::styled("│", Style::default().fg(GOLD)));
        }
    }
    Line::from(spans)
}

fn choice_line(state: &IntakeState, field: IntakeField) -> Line<'static> {
    let (position, count) = match field {
        IntakeField::ResidencyStatus => (
            ResidencyStatus::all()
                .iter()
                .position(|s| *s == state.request.residency_status),
            ResidencyStatus::all().len(),
        ),
        IntakeField::TravelPurpose => (
            TravelPurpose::all()
                .iter()
                .position(|p| *p == state.request.travel_purpose),
            TravelPurpose::all().len(),
        ),
        _ => (None, 0),
    };

    let mut spans = vec![
        Span::styled("◀ ", Style::default().fg(GOLD)),
        Span::styled(
            state.text_value(field).to_string(),
            Style::default().fg(SOFT_WHITE),
        ),
        Span::styled(" ▶", Style::default().fg(GOLD)),
    ];
    if let Some(idx) = position {
        spans.push(Span::styled(
            format!("  ({}/{})", idx + 1, count),
            Style::default().fg(MUTED_GRAY),
        ));
    }
    Line::from(spans)
}

fn yes_no_line(denied_before: bool) -> Line<'static> {
    let option = |selected: bool, text: &'static str| {
        let (icon, style) = if selected {
            ("● ", Style::default().fg(SELECTION_GREEN))
        } else {
            ("○ ", Style::default().fg(MUTED_GRAY))
        };
        vec![Span::styled(icon, style), Span::styled(text, style)]
    };

    let mut spans = option(!denied_before, "No, never");
    spans.push(Span::raw("    "));
    spans.extend(option(denied_before, "Yes, I have been denied before"));
    Line::from(spans)
}
