//! Notification pane rendering

use crate::interpreter::diagnostics::Notification;
use crate::interpreter::errors::Severity;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Hint => DEFAULT_THEME.primary,
        Severity::Warning => DEFAULT_THEME.warning,
        Severity::Error => DEFAULT_THEME.error,
    }
}

/// Render active notifications, newest at the bottom
pub fn render_notifications_pane(frame: &mut Frame, area: Rect, notifications: &[Notification]) {
    let block = Block::default()
        .title(" Notifications ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if notifications.is_empty() {
        let paragraph = Paragraph::new("(no diagnostics)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let skip = notifications.len().saturating_sub(visible_height);

    let items: Vec<ListItem> = notifications
        .iter()
        .skip(skip)
        .map(|n| {
            let color = severity_color(n.severity);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", n.severity),
                    Style::default().bg(color).fg(Color::Black).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" line {}: ", n.line), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(n.message.clone(), Style::default().fg(color)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
