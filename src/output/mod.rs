// src/output/mod.rs

//! Pluggable line sink abstraction.
//!
//! The emitter writes through a `LineSink` instead of touching stdout
//! directly, so tests can swap in a recording or failing sink while the
//! binary uses [`StdoutSink`].

use std::future::Future;
use std::pin::Pin;

use tokio::io::{AsyncWriteExt, Stdout};

use crate::errors::Result;

/// Destination for emitted lines.
pub trait LineSink: Send {
    /// Write `line` followed by a single `\n`, and make sure it has been
    /// handed to the underlying stream before returning.
    ///
    /// Any error is final: the emitter does not retry.
    fn write_line<'a>(
        &'a mut self,
        line: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

/// Sink writing to the process's standard output, flushing after every line.
pub struct StdoutSink {
    out: Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            out: tokio::io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSink for StdoutSink {
    fn write_line<'a>(
        &'a mut self,
        line: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            // Message and terminator in one buffer so they are never split
            // across separate write calls by us.
            let mut buf = String::with_capacity(line.len() + 1);
            buf.push_str(line);
            buf.push('\n');

            self.out.write_all(buf.as_bytes()).await?;
            self.out.flush().await?;
            Ok(())
        })
    }
}
