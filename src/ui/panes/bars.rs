//! Bar chart of the working array

use crate::dataset::{DataSet, Role, Value};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

/// Partial block glyphs, indexed by eighths of a cell
const EIGHTHS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Render the data set as vertical bars inside a titled block
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    data: &DataSet,
    algorithm_name: &str,
    max_value: Value,
) {
    let block = Block::default()
        .title(format!(" Algorithm: {} ", algorithm_name))
        .title_style(
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Bars {
            data,
            max_value: max_value.max(data.max_value()),
        },
        inner,
    );
}

/// Column-per-bar widget. When there are more bars than columns, each column
/// shows the bar its left edge falls on.
struct Bars<'a> {
    data: &'a DataSet,
    max_value: Value,
}

impl Widget for Bars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let n = self.data.len();
        if n == 0 || area.width == 0 || area.height == 0 || self.max_value == 0 {
            return;
        }

        let width = area.width as usize;
        let bar_width = (width / n).max(1);
        let columns = (bar_width * n).min(width);
        let left = area.x + ((width - columns) / 2) as u16;

        for col in 0..columns {
            let index = if bar_width > 1 {
                col / bar_width
            } else {
                col * n / columns
            };
            let x = left + col as u16;
            let style = Style::default().fg(role_color(self.data.roles()[index]));

            // Height in eighths of a cell
            let eighths = self.data.values()[index] as u64 * area.height as u64 * 8
                / self.max_value as u64;
            let full = (eighths / 8) as u16;
            let partial = (eighths % 8) as usize;

            for row in 0..full.min(area.height) {
                buf.set_string(x, area.bottom() - 1 - row, EIGHTHS[8], style);
            }
            if full < area.height && partial > 0 {
                buf.set_string(x, area.bottom() - 1 - full, EIGHTHS[partial], style);
            }
        }
    }
}

fn role_color(role: Role) -> ratatui::style::Color {
    match role {
        Role::Idle => DEFAULT_THEME.bar_idle,
        Role::Compare => DEFAULT_THEME.bar_compare,
        Role::Placed => DEFAULT_THEME.bar_placed,
    }
}
