// ABOUTME: Modal alert dialog shown when a consultation submission fails

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::palette::{ERROR_RED, GOLD, MUTED_GRAY, PANEL_BG, SOFT_WHITE, SUBDUED_BORDER};

pub struct AlertDialogComponent;

impl AlertDialogComponent {
    pub fn new() -> Self {
        Self
    }

    /// Draw `message` centred over `area`. Nothing is drawn for `None`.
    pub fn render(&self, frame: &mut Frame, area: Rect, message: Option<&str>) {
        let Some(message) = message else {
            return;
        };

        let dialog_width = 60.min(area.width.saturating_sub(4));
        let dialog_height = 7.min(area.height);

        let dialog_area = Rect {
            x: area.x + (area.width - dialog_width) / 2,
            y: area.y + (area.height - dialog_height) / 2,
            width: dialog_width,
            height: dialog_height,
        };

        // Clear only the dialog area so the wizard stays visible behind it
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(" Error ")
            .title_style(Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ERROR_RED))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([
                Constraint::Min(1),    // Message
                Constraint::Length(1), // Button
            ])
            .split(inner);

        let text = Paragraph::new(message)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(SOFT_WHITE))
            .alignment(Alignment::Center);
        frame.render_widget(text, chunks[0]);

        let button = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(SUBDUED_BORDER)),
            Span::styled("Enter", Style::default().fg(GOLD)),
            Span::styled("]", Style::default().fg(SUBDUED_BORDER)),
            Span::styled(" OK", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(button, chunks[1]);
    }
}

impl Default for AlertDialogComponent {
    fn default() -> Self {
        Self::new()
    }
}
