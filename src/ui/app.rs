//! Main TUI application state and logic

use crate::config::Settings;
use crate::editor::TextBuffer;
use crate::interpreter::diagnostics::Notifier;
use crate::interpreter::errors::{Diagnostic, Severity};
use crate::timeline::{ExecutionTimeline, Mode};
use crate::ui::panes::{
    self, chart::nudge_element, ArraysRenderData, ChartRenderData, SourceRenderData,
    SourceScrollState, StatusRenderData,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Which pane receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Editor,
    Chart,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Editor => FocusedPane::Chart,
            FocusedPane::Chart => FocusedPane::Editor,
        }
    }
}

/// The main application state
pub struct App {
    /// Editable text; the timeline is re-derived from it on every change
    pub buffer: TextBuffer,

    pub timeline: ExecutionTimeline,

    /// Coalesced diagnostics shown in the notifications pane
    pub notifier: Notifier,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Selected bar in the chart pane
    pub selected_bar: usize,

    pub source_scroll: SourceScrollState,
    pub arrays_scroll: usize,

    /// Help overlay visible
    pub show_help: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app over `source`, starting in `mode`
    pub fn new(source: &str, mode: Mode, settings: &Settings, now: Instant) -> Self {
        let mut timeline = ExecutionTimeline::new(source, settings);
        if mode != timeline.mode() {
            timeline.set_mode(mode, now);
        }

        let mut notifier = Notifier::new(settings.coalesce_window, settings.notification_lifetime);
        if mode == Mode::Live {
            notifier.publish(&timeline.validate().diagnostics, now);
        }

        App {
            buffer: TextBuffer::new(source),
            timeline,
            notifier,
            focused_pane: FocusedPane::Editor,
            selected_bar: 0,
            source_scroll: SourceScrollState::default(),
            arrays_scroll: 0,
            show_help: false,
            should_quit: false,
            status_message: String::from("Ready! Press F1 for help"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.tick(Instant::now());
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Use poll with timeout so timers keep firing without input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, Instant::now());
                    }
                }
            }
        }

        self.timeline.cancel_timers();
        Ok(())
    }

    /// Fire due timers and expire old notifications
    pub fn tick(&mut self, now: Instant) {
        let events = self.timeline.poll(now);
        self.notifier.publish(&events.diagnostics, now);
        self.notifier.expire(now);

        if events.playback_finished {
            self.status_message = "Playback complete".to_string();
        } else if events.stepped {
            self.status_message = "Playing...".to_string();
        }
        self.clamp_selection();
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(pane_area);

        // Left column: Editor (top) | Notifications (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
            .split(columns[0]);

        // Right column: Chart (top) | Arrays (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        let flagged_lines: Vec<(usize, Severity)> = self
            .notifier
            .active()
            .iter()
            .map(|n| (n.line, n.severity))
            .collect();

        panes::render_source_pane(
            frame,
            left_rows[0],
            SourceRenderData {
                lines: self.buffer.lines(),
                cursor: self.buffer.cursor(),
                executed_line: self.timeline.last_executed().map(|l| l.line),
                next_line: self.timeline.next_statement().map(|l| l.line),
                flagged_lines: &flagged_lines,
            },
            self.focused_pane == FocusedPane::Editor,
            &mut self.source_scroll,
        );

        panes::render_notifications_pane(frame, left_rows[1], self.notifier.active());

        let current = self.timeline.current_array();
        panes::render_chart_pane(
            frame,
            right_rows[0],
            ChartRenderData {
                name: current.map(|(name, _)| name),
                array: current.map(|(_, array)| array),
                selected: self.selected_bar,
            },
            self.focused_pane == FocusedPane::Chart,
        );

        panes::render_arrays_pane(
            frame,
            right_rows[1],
            ArraysRenderData {
                environment: self.timeline.environment(),
                current: current.map(|(name, _)| name),
            },
            &mut self.arrays_scroll,
        );

        panes::render_status_bar(
            frame,
            status_area,
            StatusRenderData {
                message: &self.status_message,
                mode: self.timeline.mode(),
                cursor: self.timeline.cursor(),
                total: self.timeline.total_statements(),
                is_playing: self.timeline.is_playing(),
                chart_focused: self.focused_pane == FocusedPane::Chart,
            },
        );

        if self.show_help {
            panes::render_help_pane(frame, size);
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.show_help {
            self.handle_help_key(key);
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char(c) = key.code {
                self.handle_command(c.to_ascii_lowercase(), now);
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) => self.show_help = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.next();
            }
            _ => match self.focused_pane {
                FocusedPane::Editor => self.handle_editor_key(key.code, now),
                FocusedPane::Chart => self.handle_chart_key(key.code, now),
            },
        }

        self.clamp_selection();
    }

    /// Commands shared by both panes (Ctrl-<c>, and bare letters in the chart)
    fn handle_command(&mut self, c: char, now: Instant) {
        match c {
            'q' => self.should_quit = true,
            't' | 'm' => {
                self.timeline.toggle_mode(now);
                self.notifier.clear();
                self.status_message = format!("{} mode", self.timeline.mode());
            }
            'n' => self.step_forward(now),
            'b' => self.step_backward(),
            'r' => {
                if self.timeline.mode() == Mode::Step {
                    self.timeline.reset();
                    self.status_message = "Jumped to start".to_string();
                }
            }
            'p' => self.toggle_play(now),
            _ => {}
        }
    }

    /// While help is open only closing it (or Ctrl-Q) does anything
    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.show_help = false;
            }
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, code: KeyCode, now: Instant) {
        let edited = match code {
            KeyCode::Char(c) => {
                self.buffer.insert_char(c);
                true
            }
            KeyCode::Enter => {
                self.buffer.insert_newline();
                true
            }
            KeyCode::Backspace => self.buffer.backspace(),
            KeyCode::Delete => self.buffer.delete(),
            KeyCode::Left => {
                self.buffer.move_left();
                false
            }
            KeyCode::Right => {
                self.buffer.move_right();
                false
            }
            KeyCode::Up => {
                self.buffer.move_up();
                false
            }
            KeyCode::Down => {
                self.buffer.move_down();
                false
            }
            KeyCode::Home => {
                self.buffer.move_home();
                false
            }
            KeyCode::End => {
                self.buffer.move_end();
                false
            }
            _ => false,
        };

        if edited {
            let was_stepping = self.timeline.mode() == Mode::Step && self.timeline.cursor() > 0;
            self.timeline.set_text(&self.buffer.text(), now);
            if was_stepping {
                self.status_message = "Text changed, step mode restarted".to_string();
            }
        }
    }

    fn handle_chart_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Left => {
                self.selected_bar = self.selected_bar.saturating_sub(1);
            }
            KeyCode::Right => {
                self.selected_bar = self.selected_bar.saturating_add(1);
            }
            KeyCode::Up => self.adjust_selected(true, now),
            KeyCode::Down => self.adjust_selected(false, now),
            KeyCode::Char('[') => {
                self.timeline.cycle_current(false);
                self.selected_bar = 0;
            }
            KeyCode::Char(']') => {
                self.timeline.cycle_current(true);
                self.selected_bar = 0;
            }
            KeyCode::Char(' ') => self.toggle_play(now),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char(c) => self.handle_command(c.to_ascii_lowercase(), now),
            _ => {}
        }
    }

    /// Raise or lower the selected bar by writing the new value into the text
    fn adjust_selected(&mut self, up: bool, now: Instant) {
        // An edit would restart stepping and hide the new value at once
        if self.timeline.mode() == Mode::Step {
            self.status_message = "Bars are edited in live mode (^T)".to_string();
            return;
        }

        let Some(element) = self
            .timeline
            .current_array()
            .and_then(|(_, array)| array.get(self.selected_bar))
        else {
            return;
        };

        let value = nudge_element(element, up);
        if self.timeline.request_element_change(self.selected_bar, value, now) {
            self.buffer.set_text(self.timeline.source());
            self.status_message = format!("[{}] = {}", self.selected_bar, value);
        }
    }

    fn step_forward(&mut self, now: Instant) {
        if self.timeline.mode() != Mode::Step {
            self.status_message = "Switch to step mode to step (^T)".to_string();
            return;
        }

        match self.timeline.step_forward() {
            Some(diagnostics) => {
                self.show_diagnostics(&diagnostics, now);
                self.status_message = format!(
                    "Stepped forward ({}/{})",
                    self.timeline.cursor(),
                    self.timeline.total_statements()
                );
            }
            None => self.status_message = "Already at the end".to_string(),
        }
    }

    fn step_backward(&mut self) {
        if self.timeline.step_backward() {
            self.status_message = "Stepped backward".to_string();
        } else if self.timeline.mode() == Mode::Step {
            self.status_message = "Already at the start".to_string();
        }
    }

    fn toggle_play(&mut self, now: Instant) {
        if self.timeline.toggle_play(now) {
            self.status_message = "Playing...".to_string();
        } else if self.timeline.mode() == Mode::Step {
            self.status_message = "Paused".to_string();
        }
    }

    fn show_diagnostics(&mut self, diagnostics: &[Diagnostic], now: Instant) {
        let added = self.notifier.publish(diagnostics, now);
        if added > 0 {
            debug!(added, "notifications raised");
        }
    }

    fn clamp_selection(&mut self) {
        let len = self
            .timeline
            .current_array()
            .map_or(0, |(_, array)| array.len());
        self.selected_bar = self.selected_bar.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::Element;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn new_app(source: &str) -> (App, Instant) {
        let now = Instant::now();
        (App::new(source, Mode::Live, &Settings::default(), now), now)
    }

    #[test]
    fn test_typing_updates_live_view() {
        let (mut app, now) = new_app("");
        for c in "int a[2] = {1, 2};".chars() {
            app.handle_key_event(key(KeyCode::Char(c)), now);
        }
        let (name, array) = app.timeline.current_array().unwrap();
        assert_eq!(name, "a");
        assert_eq!(array.len(), 2);
    }

    #[test]
    fn test_chart_adjust_writes_back() {
        let (mut app, now) = new_app("int a[2] = {1, 2};");
        app.handle_key_event(key(KeyCode::Tab), now);
        app.handle_key_event(key(KeyCode::Right), now);
        app.handle_key_event(key(KeyCode::Up), now);

        assert_eq!(app.buffer.text(), "int a[2] = {1, 2};\na[1] = 3;");
        let (_, array) = app.timeline.current_array().unwrap();
        assert_eq!(array.get(1), Some(Element::Int(3)));
    }

    #[test]
    fn test_selection_clamped_to_array() {
        let (mut app, now) = new_app("int a[2] = {1, 2};");
        app.handle_key_event(key(KeyCode::Tab), now);
        for _ in 0..5 {
            app.handle_key_event(key(KeyCode::Right), now);
        }
        assert_eq!(app.selected_bar, 1);
    }

    #[test]
    fn test_step_commands() {
        let (mut app, now) = new_app("int a[1] = {1};\na[0] = 5;");
        app.handle_key_event(ctrl('t'), now);
        assert_eq!(app.timeline.mode(), Mode::Step);

        app.handle_key_event(ctrl('n'), now);
        app.handle_key_event(ctrl('n'), now);
        assert_eq!(app.timeline.cursor(), 2);

        app.handle_key_event(ctrl('b'), now);
        assert_eq!(app.timeline.cursor(), 1);

        app.handle_key_event(ctrl('r'), now);
        assert_eq!(app.timeline.cursor(), 0);
    }

    #[test]
    fn test_step_diagnostics_become_notifications() {
        let (mut app, now) = new_app("int a[2] = {1, 2};\na[5] = 1;");
        app.notifier.clear();
        app.handle_key_event(ctrl('t'), now);
        app.handle_key_event(ctrl('n'), now);
        app.handle_key_event(ctrl('n'), now);
        assert_eq!(app.notifier.active().len(), 1);
        assert_eq!(app.notifier.active()[0].severity, Severity::Error);
    }

    #[test]
    fn test_chart_edit_refused_in_step_mode() {
        let (mut app, now) = new_app("int a[2] = {1, 2};");
        app.handle_key_event(ctrl('t'), now);
        app.handle_key_event(key(KeyCode::Tab), now);
        app.handle_key_event(ctrl('n'), now);
        app.handle_key_event(key(KeyCode::Up), now);

        assert_eq!(app.buffer.text(), "int a[2] = {1, 2};");
        assert_eq!(app.timeline.cursor(), 1);
        assert!(app.status_message.contains("live mode"));
    }

    #[test]
    fn test_help_toggle() {
        let (mut app, now) = new_app("int a[1] = {1};");
        app.handle_key_event(key(KeyCode::F(1)), now);
        assert!(app.show_help);

        // Keys do nothing else while help is open
        app.handle_key_event(key(KeyCode::Char('x')), now);
        assert_eq!(app.buffer.text(), "int a[1] = {1};");
        assert!(!app.should_quit);

        app.handle_key_event(key(KeyCode::Esc), now);
        assert!(!app.show_help);
        assert!(!app.should_quit);

        // '?' is typed in the editor but opens help from the chart
        app.handle_key_event(key(KeyCode::Char('?')), now);
        assert!(!app.show_help);
        assert_eq!(app.buffer.text(), "?int a[1] = {1};");

        app.handle_key_event(key(KeyCode::Tab), now);
        app.handle_key_event(key(KeyCode::Char('?')), now);
        assert!(app.show_help);
        app.handle_key_event(key(KeyCode::Char('?')), now);
        assert!(!app.show_help);
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, now) = new_app("");
        app.handle_key_event(key(KeyCode::Esc), now);
        assert!(app.should_quit);

        let (mut app, now) = new_app("");
        app.handle_key_event(ctrl('q'), now);
        assert!(app.should_quit);
    }
}
