// ABOUTME: Render helpers shared by component unit tests

use ratatui::{backend::TestBackend, Frame, Terminal};

/// Draw once into an in-memory terminal and return each screen row as text
pub fn render_to_lines(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer.get(x, y).symbol())
                .collect::<String>()
        })
        .collect()
}
