//! Pre-recorded input, replayed by tick number

use std::collections::VecDeque;

use super::InputSource;
use crate::sim::{GameState, InputEvent, Key};

/// Replays `(tick, event)` pairs; each event fires on the poll of its tick
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<(u64, InputEvent)>,
    polls: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the poll of tick `at` (0-based). Events on the
    /// same tick fire in the order they were queued.
    pub fn push(&mut self, at: u64, event: InputEvent) -> &mut Self {
        let idx = self.events.partition_point(|&(t, _)| t <= at);
        self.events.insert(idx, (at, event));
        self
    }

    pub fn key(&mut self, at: u64, key: Key) -> &mut Self {
        self.push(at, InputEvent::KeyDown(key))
    }

    /// Returns true once every queued event has fired
    pub fn is_done(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> Vec<InputEvent> {
        let mut out = Vec::new();
        while let Some(&(at, event)) = self.events.front() {
            if at > self.polls {
                break;
            }
            out.push(event);
            self.events.pop_front();
        }
        self.polls += 1;
        out
    }
}
