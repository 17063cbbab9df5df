//! Chart pane rendering for the current array
//!
//! Draws one vertical bar per element of the displayed array using ratatui's
//! [`BarChart`]. Bars are shifted so the smallest negative value sits on the
//! baseline; the text over each bar always shows the real value.
//!
//! Char arrays chart their code points and label each bar `'c' (99)`. Doubles
//! are scaled by [`DOUBLE_SCALE`] so fractional differences stay visible.

use crate::memory::{Element, TypedArray};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Multiplier applied to doubles before they become bar heights
pub const DOUBLE_SCALE: f64 = 100.0;

/// Step used when a double bar is raised or lowered
const DOUBLE_NUDGE: f64 = 0.5;

/// Printable ASCII range kept by char bars
const PRINTABLE: std::ops::RangeInclusive<u32> = 0x20..=0x7e;

const MAX_BAR_WIDTH: u16 = 9;
const BAR_GAP: u16 = 1;

/// Data needed to render the chart pane
pub struct ChartRenderData<'a> {
    pub name: Option<&'a str>,
    pub array: Option<&'a TypedArray>,
    pub selected: usize,
}

/// Bar heights for `elements`, shifted so the lowest value is the baseline
pub fn bar_heights(elements: &[Element]) -> Vec<u64> {
    let scale = |e: &Element| match e {
        Element::Double(x) => x * DOUBLE_SCALE,
        other => other.as_f64(),
    };
    let base = elements.iter().map(scale).fold(0.0_f64, f64::min);

    elements
        .iter()
        .map(|e| (scale(e) - base).round().max(0.0) as u64)
        .collect()
}

/// Label under a bar: the index, or the character and its code for char
/// arrays
pub fn bar_label(index: usize, element: &Element) -> String {
    match element {
        Element::Char(c) => format!("'{}' ({})", c, *c as u32),
        _ => index.to_string(),
    }
}

/// Text drawn on top of a bar; chars show their code
pub fn bar_text(element: &Element) -> String {
    match element {
        Element::Char(c) => (*c as u32).to_string(),
        other => other.to_string(),
    }
}

/// `element` raised (`up`) or lowered by one step of its kind. Chars stay
/// within printable ASCII.
pub fn nudge_element(element: Element, up: bool) -> Element {
    match element {
        Element::Int(n) => Element::Int(if up { n.saturating_add(1) } else { n.saturating_sub(1) }),
        Element::Double(x) => Element::Double(if up { x + DOUBLE_NUDGE } else { x - DOUBLE_NUDGE }),
        Element::Char(c) => {
            let code = (c as u32).clamp(*PRINTABLE.start(), *PRINTABLE.end());
            let next = if up {
                (code + 1).min(*PRINTABLE.end())
            } else {
                code.saturating_sub(1).max(*PRINTABLE.start())
            };
            Element::Char(char::from_u32(next).unwrap_or(c))
        }
    }
}

/// First index shown when `visible` bars fit and `selected` must be one of them
fn window_start(len: usize, visible: usize, selected: usize) -> usize {
    if len <= visible || visible == 0 {
        return 0;
    }
    let half = visible / 2;
    selected.saturating_sub(half).min(len - visible)
}

/// Render the chart pane
pub fn render_chart_pane(frame: &mut Frame, area: Rect, data: ChartRenderData, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = match (data.name, data.array) {
        (Some(name), Some(array)) => format!(" Chart: {} {}[{}] ", array.kind(), name, array.len()),
        _ => " Chart ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let array = match data.array {
        Some(array) if !array.is_empty() => array,
        Some(_) => {
            let paragraph = Paragraph::new("(empty array)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
        None => {
            let paragraph = Paragraph::new("(no arrays declared)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let elements = array.elements();
    let inner_width = area.width.saturating_sub(2);

    // Widest label or value text decides the bar width, within limits
    let value_width = elements
        .iter()
        .enumerate()
        .map(|(i, e)| bar_text(e).chars().count().max(bar_label(i, e).chars().count()))
        .max()
        .unwrap_or(1) as u16;
    let bar_width = value_width.clamp(3, MAX_BAR_WIDTH);
    let visible = (inner_width / (bar_width + BAR_GAP)).max(1) as usize;
    let start = window_start(elements.len(), visible, data.selected);

    let heights = bar_heights(elements);
    let bars: Vec<Bar> = elements
        .iter()
        .zip(heights)
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(index, (element, height))| {
            let color = if is_focused && index == data.selected {
                DEFAULT_THEME.bar_selected
            } else {
                DEFAULT_THEME.bar
            };
            Bar::default()
                .value(height)
                .text_value(bar_text(element))
                .label(Line::from(bar_label(index, element)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .label_style(Style::default().fg(DEFAULT_THEME.comment));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heights_shift_negative_values() {
        let heights = bar_heights(&[Element::Int(-2), Element::Int(0), Element::Int(3)]);
        assert_eq!(heights, vec![0, 2, 5]);
    }

    #[test]
    fn test_heights_scale_doubles() {
        let heights = bar_heights(&[Element::Double(1.5), Element::Double(0.25)]);
        assert_eq!(heights, vec![150, 25]);
    }

    #[test]
    fn test_chars_chart_by_code_point() {
        assert_eq!(bar_heights(&[Element::Char('a')]), vec![97]);
        assert_eq!(bar_label(0, &Element::Char('a')), "'a' (97)");
        assert_eq!(bar_text(&Element::Char('c')), "99");
        assert_eq!(bar_label(4, &Element::Int(9)), "4");
        assert_eq!(bar_text(&Element::Double(2.5)), "2.5");
    }

    #[test]
    fn test_nudge_keeps_chars_printable() {
        assert_eq!(nudge_element(Element::Char('~'), true), Element::Char('~'));
        assert_eq!(nudge_element(Element::Char(' '), false), Element::Char(' '));
        assert_eq!(nudge_element(Element::Char('a'), true), Element::Char('b'));
        assert_eq!(nudge_element(Element::Char('\n'), true), Element::Char('!'));
    }

    #[test]
    fn test_nudge_numbers() {
        assert_eq!(nudge_element(Element::Int(3), false), Element::Int(2));
        assert_eq!(nudge_element(Element::Double(1.0), true), Element::Double(1.5));
    }

    #[test]
    fn test_window_keeps_selection_visible() {
        assert_eq!(window_start(5, 10, 4), 0);
        assert_eq!(window_start(20, 5, 0), 0);
        assert_eq!(window_start(20, 5, 10), 8);
        assert_eq!(window_start(20, 5, 19), 15);
    }
}
