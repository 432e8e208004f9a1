// src/emitter/core.rs

//! Pure emitter state machine.
//!
//! `EmitterCore` owns the script and a cursor into it. Each call to
//! [`EmitterCore::step`] returns the next [`Step`] and advances the phase.
//! It has no Tokio types and performs no IO, so every transition can be
//! tested without clocks or pipes.

use crate::emitter::{Phase, Step};
use crate::script::Script;

#[derive(Debug)]
pub struct EmitterCore {
    script: Script,
    phase: Phase,
}

impl EmitterCore {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            phase: Phase::Warmup,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Number of messages handed out so far.
    pub fn emitted(&self) -> usize {
        match self.phase {
            Phase::Warmup => 0,
            Phase::Emitting { next } => next,
            Phase::Idle => self.script.len(),
        }
    }

    /// Produce the next step and advance.
    pub fn step(&mut self) -> Step {
        let timing = self.script.timing();

        match self.phase {
            Phase::Warmup => {
                self.phase = self.after_message(None);
                Step {
                    line: None,
                    pause: timing.warmup,
                }
            }
            Phase::Emitting { next } => {
                let line = self.script.messages()[next].clone();
                self.phase = self.after_message(Some(next));
                Step {
                    line: Some(line),
                    pause: timing.interval,
                }
            }
            Phase::Idle => Step {
                line: None,
                pause: timing.idle,
            },
        }
    }

    /// Phase following message `done` (`None` = nothing written yet).
    fn after_message(&self, done: Option<usize>) -> Phase {
        let next = done.map_or(0, |i| i + 1);
        if next < self.script.len() {
            Phase::Emitting { next }
        } else {
            Phase::Idle
        }
    }
}
