//! Status bar rendering with keybindings and state indicators

use crate::timeline::Mode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub mode: Mode,
    /// Statements executed in step mode
    pub cursor: usize,
    pub total: usize,
    pub is_playing: bool,
    pub chart_focused: bool,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: mode, progress and message
    let mode_text = match data.mode {
        Mode::Live => format!(" {} ", data.mode),
        Mode::Step => format!(" {} {}/{} ", data.mode, data.cursor, data.total),
    };

    let left_spans = vec![
        Span::styled(
            mode_text,
            Style::default()
                .bg(match data.mode {
                    Mode::Live => DEFAULT_THEME.success,
                    Mode::Step => DEFAULT_THEME.primary,
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ⇥ ", key_style),
        Span::styled(" focus ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ^T ", key_style),
        Span::styled(" mode ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
    ];

    if data.chart_focused {
        right_spans.extend([
            Span::styled(" ←/→ ", key_style),
            Span::styled(" select ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ↑/↓ ", key_style),
            Span::styled(" edit ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" [/] ", key_style),
            Span::styled(" array ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
        ]);
    }

    if data.mode == Mode::Step {
        right_spans.extend([
            Span::styled(" ^N/^B ", key_style),
            Span::styled(" step ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ^P ", key_style),
            Span::styled(" play ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ^R ", key_style),
            Span::styled(" reset ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
        ]);
    }

    right_spans.extend([
        Span::styled(" F1 ", key_style),
        Span::styled(" help ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ^Q ", key_style),
        Span::styled(" quit ", desc_style),
    ]);

    // Show status indicators based on position and state
    if data.mode == Mode::Step {
        let badge = if data.is_playing {
            Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
        } else if data.cursor >= data.total {
            Some((" END ", DEFAULT_THEME.error))
        } else if data.cursor == 0 {
            Some((" START ", DEFAULT_THEME.success))
        } else {
            None
        };

        if let Some((text, color)) = badge {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(
                text,
                Style::default()
                    .bg(color)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
