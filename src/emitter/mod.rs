// src/emitter/mod.rs

//! The emitter: plays the script back on a fixed schedule, then idles.
//!
//! Three phases: `Warmup` (initial) → `Emitting` (once per message) → `Idle`
//! (terminal, repeats forever).
//!
//! The pure state machine lives in [`core`]; the async/IO shell is
//! implemented in [`runtime`].

use std::time::Duration;

/// Where the emitter currently is in its script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing written yet; the next step is the warm-up pause.
    Warmup,
    /// The next step writes message `next`.
    Emitting { next: usize },
    /// Script exhausted. No step leaves this phase.
    Idle,
}

/// What the IO shell should do for one step: optionally write a line, then
/// pause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub line: Option<String>,
    pub pause: Duration,
}

pub mod core;
pub mod runtime;

pub use self::core::EmitterCore;
pub use runtime::Emitter;
