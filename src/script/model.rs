// src/script/model.rs

use std::time::Duration;

use serde::Deserialize;

use crate::errors::{AnnouncerError, Result};

/// Script as read from TOML, before validation.
///
/// ```toml
/// messages = ["announce route 100.10.0.0/24 next-hop self"]
///
/// [timing]
/// warmup_secs = 5
/// interval_secs = 1
/// idle_secs = 1
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RawScript {
    #[serde(default)]
    pub messages: Vec<String>,

    #[serde(default)]
    pub timing: RawTiming,
}

/// `[timing]` section, in whole seconds.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawTiming {
    #[serde(default = "default_warmup_secs")]
    pub warmup_secs: u64,

    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    #[serde(default = "default_idle_secs")]
    pub idle_secs: u64,
}

fn default_warmup_secs() -> u64 {
    5
}

fn default_interval_secs() -> u64 {
    1
}

fn default_idle_secs() -> u64 {
    1
}

impl Default for RawTiming {
    fn default() -> Self {
        Self {
            warmup_secs: default_warmup_secs(),
            interval_secs: default_interval_secs(),
            idle_secs: default_idle_secs(),
        }
    }
}

/// Delays applied by the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Pause before the first line.
    pub warmup: Duration,
    /// Pause after every line.
    pub interval: Duration,
    /// Length of one idle-loop iteration once the script is exhausted.
    pub idle: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Timing::from(RawTiming::default())
    }
}

impl From<RawTiming> for Timing {
    fn from(raw: RawTiming) -> Self {
        Self {
            warmup: Duration::from_secs(raw.warmup_secs),
            interval: Duration::from_secs(raw.interval_secs),
            idle: Duration::from_secs(raw.idle_secs),
        }
    }
}

/// Validated, immutable script: an ordered list of opaque lines plus timing.
///
/// There is no way to mutate a `Script` after construction. The emitter takes
/// it by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    messages: Vec<String>,
    timing: Timing,
}

impl Script {
    /// Build a script from an explicit message list.
    ///
    /// Messages are not inspected beyond line framing: a message may not
    /// contain a line break, since it must come out as exactly one line.
    pub fn new(messages: Vec<String>, timing: Timing) -> Result<Self> {
        if timing.interval.is_zero() {
            return Err(AnnouncerError::Script(
                "timing.interval must be greater than zero".to_string(),
            ));
        }
        if timing.idle.is_zero() {
            return Err(AnnouncerError::Script(
                "timing.idle must be greater than zero".to_string(),
            ));
        }

        if let Some(idx) = messages
            .iter()
            .position(|m| m.contains('\n') || m.contains('\r'))
        {
            return Err(AnnouncerError::Script(format!(
                "message #{idx} contains a line break: {:?}",
                messages[idx]
            )));
        }

        Ok(Self { messages, timing })
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl TryFrom<RawScript> for Script {
    type Error = AnnouncerError;

    fn try_from(raw: RawScript) -> Result<Self> {
        Script::new(raw.messages, Timing::from(raw.timing))
    }
}
