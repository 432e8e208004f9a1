// src/script/mod.rs

//! The fixed script the emitter plays back.
//!
//! Responsibilities:
//! - Define the TOML-backed raw model and the validated `Script` (`model.rs`).
//! - Provide the compiled-in script the binary runs with.

pub mod model;

pub use model::{RawScript, RawTiming, Script, Timing};

use crate::errors::Result;

/// TOML source of the script compiled into the binary.
pub const BUILTIN_SCRIPT: &str = include_str!("builtin.toml");

impl Script {
    /// The script the binary runs with.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_SCRIPT)
    }

    /// Decode and validate a script from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let raw: RawScript = toml::from_str(contents)?;
        Script::try_from(raw)
    }
}
