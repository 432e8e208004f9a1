// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnouncerError {
    /// Writing or flushing the output stream failed (e.g. the reader went away).
    #[error("output stream error: {0}")]
    Output(#[from] std::io::Error),

    #[error("invalid script: {0}")]
    Script(String),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AnnouncerError>;
