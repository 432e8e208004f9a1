// src/emitter/runtime.rs

use std::convert::Infallible;
use std::fmt;

use tokio::time::sleep;
use tracing::{debug, info, trace};

use crate::errors::Result;
use crate::output::LineSink;

use super::core::EmitterCore;
use super::Phase;

/// Drives an [`EmitterCore`] in real time and writes its lines to a
/// [`LineSink`].
///
/// All semantics live in the core; this shell only sleeps and writes.
pub struct Emitter<S: LineSink> {
    core: EmitterCore,
    sink: S,
}

impl<S: LineSink> fmt::Debug for Emitter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl<S: LineSink> Emitter<S> {
    pub fn new(core: EmitterCore, sink: S) -> Self {
        Self { core, sink }
    }

    /// Main loop.
    ///
    /// Never returns `Ok`: once the script is exhausted the emitter idles
    /// forever. The only way out is a sink error, which is returned
    /// immediately without touching the remaining messages.
    pub async fn run(mut self) -> Result<Infallible> {
        info!(messages = self.core.script().len(), "emitter started");

        loop {
            let before = self.core.phase();
            let step = self.core.step();

            if let Some(line) = step.line {
                debug!(index = self.core.emitted() - 1, %line, "writing line");
                self.sink.write_line(&line).await?;
            }

            match (before, self.core.phase()) {
                (Phase::Idle, _) => trace!("idle tick"),
                (_, Phase::Idle) => info!("script exhausted; idling"),
                _ => {}
            }

            sleep(step.pause).await;
        }
    }
}
