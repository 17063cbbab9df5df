//! Arrays pane rendering
//!
//! Lists every array of the displayed environment in declaration order with
//! its kind, length and values. The array shown in the chart is marked and
//! always scrolled into view.

use crate::memory::{ArrayEnvironment, Element};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Data needed to render the arrays pane
pub struct ArraysRenderData<'a> {
    pub environment: &'a ArrayEnvironment,
    pub current: Option<&'a str>,
}

fn element_span(element: &Element) -> Span<'static> {
    let color = match element {
        Element::Char(_) => DEFAULT_THEME.string,
        _ => DEFAULT_THEME.number,
    };
    Span::styled(element.to_string(), Style::default().fg(color))
}

/// Scroll offset that keeps `row` on screen, clamped to the content
fn keep_visible(offset: usize, total: usize, visible: usize, row: Option<usize>) -> usize {
    if total <= visible {
        return 0;
    }

    let offset = match row {
        Some(row) if row < offset => row,
        Some(row) if row >= offset + visible => row + 1 - visible,
        _ => offset,
    };
    offset.min(total - visible)
}

/// Render the arrays pane
pub fn render_arrays_pane(frame: &mut Frame, area: Rect, data: ArraysRenderData, scroll_offset: &mut usize) {
    let block = Block::default()
        .title(format!(" Arrays ({}) ", data.environment.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if data.environment.is_empty() {
        let paragraph = Paragraph::new("(nothing declared yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let all_items: Vec<ListItem> = data
        .environment
        .iter()
        .map(|(name, array)| {
            let is_current = data.current == Some(name);
            let marker = if is_current { "▶ " } else { "  " };
            let name_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(format!("{} ", array.kind()), Style::default().fg(DEFAULT_THEME.type_name)),
                Span::styled(name.to_string(), name_style),
                Span::styled(format!("[{}]", array.len()), Style::default().fg(DEFAULT_THEME.comment)),
                Span::raw(" = {"),
            ];
            for (i, element) in array.elements().iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(", "));
                }
                spans.push(element_span(element));
            }
            spans.push(Span::raw("}"));

            ListItem::new(Line::from(spans))
        })
        .collect();

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let current_row = data
        .current
        .and_then(|current| data.environment.names().position(|name| name == current));
    *scroll_offset = keep_visible(*scroll_offset, all_items.len(), visible_height, current_row);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_fits() {
        assert_eq!(keep_visible(3, 4, 10, Some(2)), 0);
    }

    #[test]
    fn test_scrolls_down_to_current() {
        assert_eq!(keep_visible(0, 20, 5, Some(7)), 3);
        assert_eq!(keep_visible(0, 20, 5, Some(19)), 15);
    }

    #[test]
    fn test_scrolls_up_to_current() {
        assert_eq!(keep_visible(10, 20, 5, Some(2)), 2);
    }

    #[test]
    fn test_offset_kept_when_current_visible() {
        assert_eq!(keep_visible(4, 20, 5, Some(6)), 4);
        assert_eq!(keep_visible(30, 20, 5, None), 15);
    }
}
