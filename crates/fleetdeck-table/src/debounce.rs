// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::time::{Duration, Instant};

pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    value: String,
    deadline: Instant,
}

/// Holds at most one pending search value and commits it only after the
/// quiescence interval passes with no further input. Each keystroke
/// replaces the pending value and reschedules the deadline, so superseded
/// values never fire. Time is supplied by the caller, which keeps the
/// adapter synchronous and deterministic under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebouncedInput {
    quiescence: Duration,
    pending: Option<Pending>,
}

impl DebouncedInput {
    pub fn new(quiescence: Duration) -> Self {
        Self {
            quiescence,
            pending: None,
        }
    }

    pub fn push(&mut self, value: &str, now: Instant) {
        self.pending = Some(Pending {
            value: value.to_owned(),
            deadline: now + self.quiescence,
        });
    }

    /// Emits the committed value once its deadline has passed. Returns
    /// None while input is still settling or nothing is pending.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.deadline <= now);
        if !due {
            return None;
        }
        self.pending.take().map(|pending| pending.value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline the event loop should wake at, if anything is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }
}

impl Default for DebouncedInput {
    fn default() -> Self {
        Self::new(DEFAULT_QUIESCENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_QUIESCENCE, DebouncedInput};
    use std::time::{Duration, Instant};

    fn at(base: Instant, millis: u64) -> Instant {
        base + Duration::from_millis(millis)
    }

    #[test]
    fn only_the_last_value_within_the_window_is_emitted() {
        let base = Instant::now();
        let mut input = DebouncedInput::default();

        input.push("a", at(base, 0));
        input.push("ab", at(base, 100));
        input.push("abc", at(base, 200));

        assert_eq!(input.poll(at(base, 699)), None);
        assert_eq!(input.poll(at(base, 700)), Some("abc".to_owned()));
        assert_eq!(input.poll(at(base, 700)), None);
    }

    #[test]
    fn each_keystroke_resets_the_deadline() {
        let base = Instant::now();
        let mut input = DebouncedInput::new(Duration::from_millis(500));

        input.push("rom", at(base, 0));
        assert_eq!(input.next_deadline(), Some(at(base, 500)));

        input.push("rome", at(base, 400));
        assert_eq!(input.next_deadline(), Some(at(base, 900)));
        assert_eq!(input.poll(at(base, 500)), None);
        assert_eq!(input.poll(at(base, 900)), Some("rome".to_owned()));
    }

    #[test]
    fn cancel_drops_the_pending_value() {
        let base = Instant::now();
        let mut input = DebouncedInput::default();

        input.push("stale", base);
        assert!(input.is_pending());
        input.cancel();
        assert!(!input.is_pending());
        assert_eq!(input.poll(at(base, 1_000)), None);
    }

    #[test]
    fn default_quiescence_is_500ms() {
        assert_eq!(DEFAULT_QUIESCENCE, Duration::from_millis(500));
    }
}
