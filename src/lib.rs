// src/lib.rs

pub mod cli;
pub mod emitter;
pub mod errors;
pub mod logging;
pub mod output;
pub mod script;

use std::convert::Infallible;

use tracing::info;

use crate::cli::CliArgs;
use crate::emitter::{Emitter, EmitterCore};
use crate::errors::Result;
use crate::output::StdoutSink;
use crate::script::Script;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the built-in script
/// - the pure emitter core
/// - the stdout sink
///
/// It only returns if writing to stdout fails.
pub async fn run(_args: CliArgs) -> Result<Infallible> {
    let script = Script::builtin()?;
    info!(
        messages = script.len(),
        warmup = ?script.timing().warmup,
        interval = ?script.timing().interval,
        "loaded built-in script"
    );

    let core = EmitterCore::new(script);
    let emitter = Emitter::new(core, StdoutSink::new());
    emitter.run().await
}
