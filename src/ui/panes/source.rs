//! Editor pane rendering with syntax highlighting
//!
//! This module renders the editable source text with basic syntax
//! highlighting, line numbers and execution indicators.
//!
//! # Features
//!
//! - Highlighting for type keywords, array methods, strings, characters,
//!   numbers and comments
//! - Step mode: the last executed line is highlighted and the next line is
//!   marked with an arrow
//! - Lines with an active diagnostic get a marker in the gutter
//! - Scrolling that keeps the cursor visible
//!
//! # Rendering
//!
//! The pane uses a simple character-by-character tokenizer to apply syntax
//! highlighting styles without running the recognizer.

use crate::editor::Cursor;
use crate::interpreter::errors::Severity;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the gutter: marker, 4-digit line number, space
const GUTTER_WIDTH: u16 = 6;

/// Simple syntax highlighting for the array notation
fn highlight_source_code(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut current_word = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    let flush = |word: &mut String, spans: &mut Vec<Span<'static>>, next: Option<char>| {
        if !word.is_empty() {
            let style = get_word_style(word, next == Some('('));
            spans.push(Span::styled(std::mem::take(word), style));
        }
    };

    while i < chars.len() {
        let c = chars[i];

        // Comments run to the end of the line
        if c == '/' && chars.get(i + 1) == Some(&'/') {
            flush(&mut current_word, &mut spans, Some(c));
            let rest: String = chars[i..].iter().collect();
            spans.push(Span::styled(rest, Style::default().fg(DEFAULT_THEME.comment)));
            break;
        }

        // Strings and character literals
        if c == '"' || c == '\'' {
            flush(&mut current_word, &mut spans, Some(c));
            let mut end = i + 1;
            while end < chars.len() && chars[end] != c {
                end += 1;
            }
            end = (end + 1).min(chars.len());
            let literal: String = chars[i..end].iter().collect();
            spans.push(Span::styled(literal, Style::default().fg(DEFAULT_THEME.string)));
            i = end;
            continue;
        }

        // '.' inside a number belongs to the number
        let in_number = c == '.' && current_word.chars().all(|d| d.is_ascii_digit()) && !current_word.is_empty();

        if !c.is_alphanumeric() && c != '_' && !in_number {
            flush(&mut current_word, &mut spans, Some(c));

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                '-' if chars.get(i + 1).is_some_and(|d| d.is_ascii_digit()) => {
                    Style::default().fg(DEFAULT_THEME.number)
                }
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush(&mut current_word, &mut spans, None);
    Line::from(spans)
}

fn get_word_style(word: &str, is_call: bool) -> Style {
    match word {
        "int" | "double" | "char" => Style::default()
            .fg(DEFAULT_THEME.type_name)
            .add_modifier(Modifier::BOLD),
        "insert" | "remove" | "delete" if is_call => Style::default().fg(DEFAULT_THEME.method),
        _ if word.chars().next().is_some_and(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Scroll state for the editor pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
}

/// Data needed to render the editor pane
pub struct SourceRenderData<'a> {
    pub lines: &'a [String],
    pub cursor: Cursor,
    /// 1-based line of the statement executed last (step mode)
    pub executed_line: Option<usize>,
    /// 1-based line of the statement the next step executes
    pub next_line: Option<usize>,
    /// 1-based lines carrying an active diagnostic
    pub flagged_lines: &'a [(usize, Severity)],
}

/// Render the editor pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    data: SourceRenderData,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Editor ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    // Keep the cursor row on screen
    let cursor_row = data.cursor.row;
    if cursor_row < scroll_state.offset {
        scroll_state.offset = cursor_row;
    } else if cursor_row >= scroll_state.offset + visible_height {
        scroll_state.offset = cursor_row + 1 - visible_height;
    }

    let visible_lines: Vec<Line> = data
        .lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_executed = data.executed_line == Some(line_num);
            let flag = data
                .flagged_lines
                .iter()
                .filter(|(line, _)| *line == line_num)
                .map(|(_, severity)| *severity)
                .max();

            let (marker, marker_style) = match flag {
                Some(Severity::Error) => ("●", Style::default().fg(DEFAULT_THEME.error)),
                Some(Severity::Warning) => ("●", Style::default().fg(DEFAULT_THEME.warning)),
                Some(Severity::Hint) => ("◦", Style::default().fg(DEFAULT_THEME.primary)),
                None if data.next_line == Some(line_num) => {
                    ("▶", Style::default().fg(DEFAULT_THEME.success))
                }
                None => (" ", Style::default()),
            };

            let num_style = if is_executed {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content_line = highlight_source_code(line);
            if is_executed {
                for span in &mut content_line.spans {
                    span.style = span.style.patch(Style::default().bg(DEFAULT_THEME.current_line_bg));
                }
            }

            let mut final_spans = vec![
                Span::styled(marker, marker_style),
                Span::styled(format!("{:4} ", line_num), num_style),
            ];
            final_spans.extend(content_line.spans);
            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);

    if is_focused {
        let column = data.cursor.column as u16;
        let row = (cursor_row - scroll_state.offset) as u16;
        let x = (area.x + 1 + GUTTER_WIDTH + column).min(area.right().saturating_sub(2));
        let y = area.y + 1 + row;
        frame.set_cursor_position(Position::new(x, y));
    }
}
