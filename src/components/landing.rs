// ABOUTME: Landing screen with the product pitch, disclaimer and call to action

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::palette::{
    CORNFLOWER_BLUE, DARK_BG, GOLD, MUTED_GRAY, PANEL_BG, SOFT_WHITE, SUBDUED_BORDER,
    WARNING_YELLOW,
};

pub const CALL_TO_ACTION: &str = "Get My Visa Guidance - $49";

const TAGLINE: &str = "Get AI-powered, personalized visa guidance for complex immigration \
scenarios. No more generic checklists or conflicting advice.";

const DISCLAIMER: &str = "This service provides research assistance and document preparation \
guidance only. We do not provide legal advice. Always consult official embassy sources and \
immigration lawyers for legal guidance.";

const FEATURES: &[(&str, &str)] = &[
    (
        "Smart Questionnaire",
        "Adaptive questions that understand complex scenarios like dual citizenship and residency status",
    ),
    (
        "AI Research",
        "Real-time research of current visa requirements specific to your exact situation",
    ),
    (
        "Personalized Documents",
        "Custom document checklist and AI-written cover letter addressing your edge cases",
    ),
];

const WE_HANDLE: &[&str] = &[
    "Dual citizenship scenarios",
    "Multiple residency statuses",
    "H1B, Green Card, F1/OPT holders",
    "Complex travel patterns",
    "Previous visa rejections",
];

const YOU_GET: &[&str] = &[
    "Prioritized document checklist",
    "Personalized cover letter",
    "Strategic application notes",
    "Risk assessment & confidence score",
    "Current processing time estimates",
];

pub struct LandingComponent;

impl LandingComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(4), // Title + tagline
                Constraint::Length(5), // Disclaimer
                Constraint::Length(8), // Features
                Constraint::Length(3), // Call to action
                Constraint::Min(8),    // Complex cases
            ])
            .split(area);

        self.render_title(frame, layout[0]);
        self.render_disclaimer(frame, layout[1]);
        self.render_features(frame, layout[2]);
        self.render_call_to_action(frame, layout[3]);
        self.render_complex_cases(frame, layout[4]);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Visa Guru",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(TAGLINE, Style::default().fg(SOFT_WHITE))),
        ];

        let title = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(title, area);
    }

    fn render_disclaimer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(WARNING_YELLOW))
            .style(Style::default().bg(PANEL_BG));

        let text = Paragraph::new(Line::from(vec![
            Span::styled(
                "Disclaimer: ",
                Style::default().fg(WARNING_YELLOW).add_modifier(Modifier::BOLD),
            ),
            Span::styled(DISCLAIMER, Style::default().fg(WARNING_YELLOW)),
        ]))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(text, area);
    }

    fn render_features(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        for ((title, blurb), column) in FEATURES.iter().zip(columns.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(CORNFLOWER_BLUE))
                .style(Style::default().bg(PANEL_BG))
                .title(format!(" {} ", title))
                .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

            let body = Paragraph::new(Span::styled(*blurb, Style::default().fg(MUTED_GRAY)))
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(body, *column);
        }
    }

    fn render_call_to_action(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(vec![
                Span::styled("[", Style::default().fg(SUBDUED_BORDER)),
                Span::styled("Enter", Style::default().fg(GOLD)),
                Span::styled("] ", Style::default().fg(SUBDUED_BORDER)),
                Span::styled(
                    CALL_TO_ACTION,
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                ),
                Span::styled("    [", Style::default().fg(SUBDUED_BORDER)),
                Span::styled("q", Style::default().fg(GOLD)),
                Span::styled("] ", Style::default().fg(SUBDUED_BORDER)),
                Span::styled("Quit", Style::default().fg(MUTED_GRAY)),
            ]),
            Line::from(Span::styled(
                "Complete personalized consultation in under 10 minutes",
                Style::default().fg(MUTED_GRAY),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_complex_cases(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(PANEL_BG))
            .title(" Perfect For Complex Cases ")
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        frame.render_widget(bullet_list("We Handle:", WE_HANDLE), columns[0]);
        frame.render_widget(bullet_list("You Get:", YOU_GET), columns[1]);
    }
}

impl Default for LandingComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn bullet_list<'a>(heading: &'a str, items: &'a [&'a str]) -> Paragraph<'a> {
    let mut lines = vec![Line::from(Span::styled(
        heading,
        Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(items.iter().map(|item| {
        Line::from(vec![
            Span::styled("• ", Style::default().fg(GOLD)),
            Span::styled(*item, Style::default().fg(MUTED_GRAY)),
        ])
    }));
    Paragraph::new(lines)
}
