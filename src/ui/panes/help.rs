//! Instructions screen shown at startup and toggled with `i`

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

/// Key and description for each instruction line
pub const INSTRUCTIONS: [(&str, &str); 5] = [
    ("SPACE", "start sorting"),
    ("R", "reset the array"),
    ("UP / DOWN", "change the algorithm"),
    ("I", "toggle instructions"),
    ("Q", "quit"),
];

pub fn render_help_pane(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Instructions ")
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border))
        .padding(Padding::new(0, 0, 2, 0));

    let mut lines = Vec::with_capacity(INSTRUCTIONS.len() * 2);
    for (key, action) in INSTRUCTIONS {
        lines.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(
                key,
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" to {}", action), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().bg(DEFAULT_THEME.bg));
    frame.render_widget(paragraph, area);
}
