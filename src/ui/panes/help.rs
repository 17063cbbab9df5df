//! Help overlay rendering
//!
//! A centered popup over the other panes with an overview, the supported
//! notation, key bindings and tips. Toggled with `F1` (or `?` outside the
//! editor).

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

/// Notation examples, one block per element kind
const EXAMPLES: [(&str, [&str; 2]); 3] = [
    ("Integer array", ["int numbers[5] = {10, 20, 30, 40, 50};", "numbers[2] = 85;"]),
    ("Character array", ["char word[4] = \"byte\";", "word[0] = 'j';"]),
    ("Double array", ["double values[3] = {1.5, 2.7, 3.14};", "values[1] = 4.2;"]),
];

const KEYS: [(&str, &str); 10] = [
    ("Tab", "switch focus between editor and chart"),
    ("Ctrl-T / m", "toggle live and step mode"),
    ("Ctrl-N / n", "step forward"),
    ("Ctrl-B / b", "step back"),
    ("Ctrl-R / r", "back to the start"),
    ("Ctrl-P / space", "play or pause"),
    ("←/→", "select a bar (chart)"),
    ("↑/↓", "raise or lower the selected bar (chart, live mode)"),
    ("[ / ]", "previous or next array (chart)"),
    ("F1 / ?", "toggle this help"),
];

const TIPS: [&str; 5] = [
    "Lines starting with // are ignored, as are blank lines.",
    "Indices are validated: out-of-range updates, inserts and removes raise an error.",
    "Declared sizes are checked against the initializer list.",
    "Char arrays chart the ASCII code of each character.",
    "Every statement must end with ';'. `values[1] = 9` is not applied until it does.",
];

/// Rectangle of `percent_x` by `percent_y` centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Lines of the help text
pub fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Overview"),
        Line::from(
            "Write int, char and double array declarations and updates in the editor. \
             Live mode charts the whole program as you type; step mode replays it one \
             statement at a time.",
        ),
        Line::from(""),
        heading("Usage examples"),
    ];

    for (title, code) in EXAMPLES {
        lines.push(Line::from(Span::styled(
            format!("  {}:", title),
            Style::default().fg(DEFAULT_THEME.secondary),
        )));
        for statement in code {
            lines.push(Line::from(Span::styled(
                format!("    {}", statement),
                Style::default().fg(DEFAULT_THEME.string),
            )));
        }
    }
    lines.push(Line::from(Span::styled(
        "    a.insert(0, 4);  a.remove(1);  a.delete(1);",
        Style::default().fg(DEFAULT_THEME.string),
    )));

    lines.push(Line::from(""));
    lines.push(heading("Keys"));
    for (key, desc) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<16}", key), Style::default().fg(DEFAULT_THEME.method)),
            Span::styled(desc, Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("Tips"));
    for tip in TIPS {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(tip, Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    lines
}

/// Render the help overlay on top of whatever is in `area`
pub fn render_help_pane(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);

    let block = Block::default()
        .title(" Help (F1 / Esc to close) ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(1, 1, 0, 0));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_kind() {
        let text: String = help_lines()
            .iter()
            .flat_map(|line| line.spans.iter().map(|s| s.content.to_string()))
            .collect();
        for keyword in ["int numbers", "char word", "double values", "ASCII"] {
            assert!(text.contains(keyword), "{keyword}");
        }
    }

    #[test]
    fn test_popup_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(70, 80, area);
        assert!(popup.width <= area.width && popup.height <= area.height);
        assert!(popup.x > 0 && popup.y > 0);
    }
}
