// Execution timeline: live and step replay over the text buffer

use crate::config::Settings;
use crate::editor::writeback::write_element;
use crate::interpreter::engine::{self, Replay};
use crate::interpreter::errors::Diagnostic;
use crate::memory::{ArrayEnvironment, Element, TypedArray};
use crate::parser::ast::{Program, SourceLocation};
use crate::parser::parse::parse_program;
use crate::snapshot::SnapshotManager;
use crate::timeline::timer::{Debouncer, Ticker};
use std::fmt;
use std::time::Instant;
use tracing::debug;

/// Which prefix of the program is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every statement, recomputed on each text change
    Live,
    /// The first `cursor` statements, moved one at a time
    Step,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Live => write!(f, "LIVE"),
            Mode::Step => write!(f, "STEP"),
        }
    }
}

/// What happened during one [`ExecutionTimeline::poll`]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TimelineEvents {
    /// Diagnostics from the debounced pass or from an autoplay step
    pub diagnostics: Vec<Diagnostic>,
    /// Autoplay executed a statement
    pub stepped: bool,
    /// Autoplay reached the last statement and stopped
    pub playback_finished: bool,
}

/// The main timeline that replays the program derived from the text
pub struct ExecutionTimeline {
    /// Text buffer contents; the only durable state
    source: String,

    /// Statement lines parsed from `source`
    program: Program,

    mode: Mode,

    /// Number of statements executed in step mode
    cursor: usize,

    /// Step-mode snapshots; `history.len() == cursor + 1`
    history: SnapshotManager,

    /// Environment over the whole program, for live mode
    live: ArrayEnvironment,

    is_playing: bool,

    /// Explicit choice of displayed array
    current_name: Option<String>,

    /// Debounced diagnostics pass
    validation: Debouncer,

    /// Autoplay timer
    autoplay: Ticker,
}

impl ExecutionTimeline {
    /// Create a live-mode timeline over `source`
    pub fn new(source: &str, settings: &Settings) -> Self {
        let program = parse_program(source);
        let live = engine::replay_silent(&program.lines);
        ExecutionTimeline {
            source: source.to_string(),
            program,
            mode: Mode::Live,
            cursor: 0,
            history: SnapshotManager::new(),
            live,
            is_playing: false,
            current_name: None,
            validation: Debouncer::new(settings.debounce),
            autoplay: Ticker::new(settings.play_interval),
        }
    }

    // ========== Text changes ==========

    /// Replace the text. Live mode recomputes immediately and schedules the
    /// diagnostics pass; step mode always restarts from the beginning.
    pub fn set_text(&mut self, text: &str, now: Instant) {
        if text == self.source {
            return;
        }

        self.source = text.to_string();
        self.program = parse_program(text);

        match self.mode {
            Mode::Live => {
                self.live = engine::replay_silent(&self.program.lines);
                self.validation.schedule(now);
            }
            Mode::Step => {
                debug!("text changed in step mode, restarting");
                self.reset_execution();
            }
        }
    }

    /// Write `value` into element `index` of the displayed array by editing
    /// the text. Returns false when there is no such element.
    pub fn request_element_change(&mut self, index: usize, value: Element, now: Instant) -> bool {
        let Some((name, array)) = self.current_array() else {
            return false;
        };
        if index >= array.len() {
            return false;
        }

        let value = Element::coerce(value.to_literal(), array.kind());
        let name = name.to_string();
        let text = write_element(&self.source, &name, index, value);
        debug!(%name, index, %value, "element write-back");

        self.current_name = Some(name);
        self.set_text(&text, now);
        true
    }

    // ========== Mode ==========

    /// Switch mode; always resets the step cursor and stops autoplay
    pub fn set_mode(&mut self, mode: Mode, now: Instant) {
        debug!(from = %self.mode, to = %mode, "mode change");
        self.mode = mode;
        self.reset_execution();
        self.validation.cancel();

        if mode == Mode::Live {
            self.live = engine::replay_silent(&self.program.lines);
            self.validation.schedule(now);
        }
    }

    pub fn toggle_mode(&mut self, now: Instant) {
        let next = match self.mode {
            Mode::Live => Mode::Step,
            Mode::Step => Mode::Live,
        };
        self.set_mode(next, now);
    }

    // ========== Stepping ==========

    /// Execute the next statement (step mode only). Stops autoplay.
    ///
    /// Returns the diagnostics of the executed statement, or `None` when
    /// there was nothing to execute.
    pub fn step_forward(&mut self) -> Option<Vec<Diagnostic>> {
        self.pause();
        self.advance()
    }

    /// Undo the last executed statement (step mode only). Stops autoplay.
    pub fn step_backward(&mut self) -> bool {
        self.pause();
        if !self.can_step_back() {
            return false;
        }

        self.history.pop();
        self.cursor -= 1;
        debug_assert_eq!(
            self.history.latest(),
            &engine::replay_silent(self.program.prefix(self.cursor))
        );
        debug!(cursor = self.cursor, "stepped backward");
        true
    }

    /// Back to the start: cursor 0, empty history, autoplay stopped
    pub fn reset(&mut self) {
        self.reset_execution();
    }

    pub fn play(&mut self, now: Instant) -> bool {
        if !self.can_step_forward() {
            return false;
        }
        self.is_playing = true;
        self.autoplay.start(now);
        debug!(cursor = self.cursor, "autoplay started");
        true
    }

    pub fn pause(&mut self) {
        if self.is_playing {
            debug!(cursor = self.cursor, "autoplay paused");
        }
        self.is_playing = false;
        self.autoplay.stop();
    }

    pub fn toggle_play(&mut self, now: Instant) -> bool {
        if self.is_playing {
            self.pause();
            false
        } else {
            self.play(now)
        }
    }

    /// Cancel every pending timer
    pub fn cancel_timers(&mut self) {
        self.pause();
        self.validation.cancel();
    }

    /// Run whichever timers are due
    pub fn poll(&mut self, now: Instant) -> TimelineEvents {
        let mut events = TimelineEvents::default();

        if self.validation.fire(now) {
            let Replay { diagnostics, .. } = self.validate();
            debug!(count = diagnostics.len(), "debounced validation pass");
            events.diagnostics.extend(diagnostics);
        }

        if self.is_playing && self.autoplay.fire(now) {
            if let Some(diagnostics) = self.advance() {
                events.stepped = true;
                events.diagnostics.extend(diagnostics);
            }
            if !self.can_step_forward() {
                self.pause();
                events.playback_finished = true;
            }
        }

        events
    }

    /// Full replay with diagnostics, independent of mode
    pub fn validate(&self) -> Replay {
        engine::replay(&self.program.lines)
    }

    fn advance(&mut self) -> Option<Vec<Diagnostic>> {
        if !self.can_step_forward() {
            return None;
        }

        let line = &self.program.lines[self.cursor];
        let mut env = self.history.latest().clone();
        let mut diagnostics = Vec::new();
        engine::execute_statement(&mut env, line, &mut diagnostics);

        self.history.push(env);
        self.cursor += 1;
        debug!(
            cursor = self.cursor,
            total = self.program.len(),
            history_bytes = self.history.memory_usage(),
            "stepped forward"
        );
        Some(diagnostics)
    }

    fn reset_execution(&mut self) {
        self.pause();
        self.cursor = 0;
        self.history.reset();
    }

    // ========== Current array ==========

    /// Prefer `name` as the displayed array; `None` returns to the default
    pub fn set_current_name(&mut self, name: Option<String>) {
        self.current_name = name;
    }

    /// Move the displayed array to the next (or previous) one in
    /// declaration order
    pub fn cycle_current(&mut self, forward: bool) {
        let names: Vec<String> = self.environment().names().map(str::to_string).collect();
        if names.is_empty() {
            return;
        }

        let current = self
            .current_array()
            .and_then(|(name, _)| names.iter().position(|n| n == name))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % names.len()
        } else {
            (current + names.len() - 1) % names.len()
        };
        self.current_name = Some(names[next].clone());
    }

    // ========== Getter methods for UI ==========

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_statements(&self) -> usize {
        self.program.len()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn history(&self) -> &SnapshotManager {
        &self.history
    }

    pub fn can_step_forward(&self) -> bool {
        self.mode == Mode::Step && self.cursor < self.program.len()
    }

    pub fn can_step_back(&self) -> bool {
        self.mode == Mode::Step && self.cursor > 0
    }

    /// Environment currently displayed
    pub fn environment(&self) -> &ArrayEnvironment {
        match self.mode {
            Mode::Live => &self.live,
            Mode::Step => self.history.latest(),
        }
    }

    /// Name and contents of the displayed array
    pub fn current_array(&self) -> Option<(&str, &TypedArray)> {
        self.environment().current(self.current_name.as_deref())
    }

    /// Location of the statement executed last in step mode
    pub fn last_executed(&self) -> Option<SourceLocation> {
        match self.mode {
            Mode::Step if self.cursor > 0 => {
                self.program.lines.get(self.cursor - 1).map(|line| line.location)
            }
            _ => None,
        }
    }

    /// Location of the statement the next step will execute
    pub fn next_statement(&self) -> Option<SourceLocation> {
        match self.mode {
            Mode::Step => self.program.lines.get(self.cursor).map(|line| line.location),
            Mode::Live => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn timeline(source: &str) -> ExecutionTimeline {
        ExecutionTimeline::new(source, &Settings::default())
    }

    #[test]
    fn test_step_mode_starts_empty() {
        let mut tl = timeline("int a[1] = {1};");
        tl.set_mode(Mode::Step, Instant::now());
        assert!(tl.environment().is_empty());
        assert_eq!(tl.history().len(), 1);
        assert!(tl.can_step_forward());
        assert!(!tl.can_step_back());
    }

    #[test]
    fn test_history_tracks_cursor() {
        let mut tl = timeline("int a[1] = {1};\na[0] = 2;");
        tl.set_mode(Mode::Step, Instant::now());
        tl.step_forward();
        tl.step_forward();
        assert_eq!(tl.cursor(), 2);
        assert_eq!(tl.history().len(), 3);
        assert!(tl.step_forward().is_none());

        assert!(tl.step_backward());
        assert_eq!(tl.history().len(), 2);
        assert_eq!(tl.last_executed().map(|l| l.line), Some(1));
        assert_eq!(tl.next_statement().map(|l| l.line), Some(2));
    }

    #[test]
    fn test_live_mode_ignores_stepping() {
        let mut tl = timeline("int a[1] = {1};");
        assert!(tl.step_forward().is_none());
        assert!(!tl.step_backward());
        assert!(!tl.play(Instant::now()));
        assert_eq!(tl.environment().len(), 1);
    }

    #[test]
    fn test_cycle_current() {
        let mut tl = timeline("int a[1] = {1};\nint b[1] = {2};\nint c[1] = {3};");
        assert_eq!(tl.current_array().map(|(n, _)| n), Some("a"));
        tl.cycle_current(true);
        assert_eq!(tl.current_array().map(|(n, _)| n), Some("b"));
        tl.cycle_current(false);
        tl.cycle_current(false);
        assert_eq!(tl.current_array().map(|(n, _)| n), Some("c"));
    }

    #[test]
    fn test_same_text_does_not_reschedule() {
        let start = Instant::now();
        let mut tl = timeline("int a[1] = {1};");
        tl.set_text("int a[1] = {1};", start);
        assert!(tl.poll(start + Duration::from_secs(5)).diagnostics.is_empty());
    }
}
