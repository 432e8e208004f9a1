#![allow(dead_code)]

use std::time::Duration;

use announcer::script::{Script, Timing};

/// Builder for `Script` to simplify test setup.
///
/// Starts from the production timing (5s / 1s / 1s) and no messages.
pub struct ScriptBuilder {
    messages: Vec<String>,
    timing: Timing,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            timing: Timing::default(),
        }
    }

    pub fn message(mut self, line: &str) -> Self {
        self.messages.push(line.to_string());
        self
    }

    pub fn messages<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.messages.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn warmup(mut self, d: Duration) -> Self {
        self.timing.warmup = d;
        self
    }

    pub fn interval(mut self, d: Duration) -> Self {
        self.timing.interval = d;
        self
    }

    pub fn idle(mut self, d: Duration) -> Self {
        self.timing.idle = d;
        self
    }

    pub fn build(self) -> Script {
        Script::new(self.messages, self.timing).expect("Failed to build valid script from builder")
    }
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}
