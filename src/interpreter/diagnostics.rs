//! Diagnostics channel
//!
//! The engine reports through a [`DiagnosticSink`] so the same replay can run
//! silently (display refresh, step precomputation) or noisily (debounced
//! validation). [`Notifier`] is the consumer side: it turns diagnostics into
//! short-lived notifications and drops repeats inside a coalescing window.

use super::errors::{Diagnostic, Severity};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Receiver for diagnostics raised during a replay
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Most notifications kept on screen at once
pub const MAX_ACTIVE_NOTIFICATIONS: usize = 5;

/// A diagnostic as shown to the user
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    pub line: usize,
    pub raised_at: Instant,
}

/// Coalescing, expiring notification queue
#[derive(Debug)]
pub struct Notifier {
    window: Duration,
    lifetime: Duration,
    last_shown: FxHashMap<String, Instant>,
    active: Vec<Notification>,
}

impl Notifier {
    pub fn new(window: Duration, lifetime: Duration) -> Self {
        Notifier {
            window,
            lifetime,
            last_shown: FxHashMap::default(),
            active: Vec::new(),
        }
    }

    /// Queue notifications for `diagnostics`, skipping any identical
    /// diagnostic already shown within the coalescing window.
    ///
    /// Returns how many notifications were added.
    pub fn publish(&mut self, diagnostics: &[Diagnostic], now: Instant) -> usize {
        let mut added = 0;

        for diagnostic in diagnostics {
            let key = diagnostic.to_string();
            let recent = self
                .last_shown
                .get(&key)
                .is_some_and(|&shown| now.saturating_duration_since(shown) < self.window);
            if recent {
                continue;
            }

            self.last_shown.insert(key, now);
            self.active.push(Notification {
                severity: diagnostic.severity,
                message: diagnostic.message(),
                line: diagnostic.location.line,
                raised_at: now,
            });
            added += 1;
        }

        if self.active.len() > MAX_ACTIVE_NOTIFICATIONS {
            let excess = self.active.len() - MAX_ACTIVE_NOTIFICATIONS;
            self.active.drain(..excess);
        }

        added
    }

    /// Drop notifications older than their lifetime
    pub fn expire(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        let window = self.window;
        self.active
            .retain(|n| now.saturating_duration_since(n.raised_at) < lifetime);
        self.last_shown
            .retain(|_, shown| now.saturating_duration_since(*shown) < window);
    }

    /// Notifications currently on screen, oldest first
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    /// Drop every notification and forget what was shown recently
    pub fn clear(&mut self) {
        self.active.clear();
        self.last_shown.clear();
    }
}
