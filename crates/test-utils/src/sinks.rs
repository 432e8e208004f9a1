use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tokio::time::Instant;

use announcer::errors::{AnnouncerError, Result};
use announcer::output::LineSink;

/// A line together with the (Tokio) instant it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedLine {
    pub at: Instant,
    pub line: String,
}

/// Shared handle to what a sink has recorded.
pub type Recorded = Arc<Mutex<Vec<RecordedLine>>>;

/// A fake sink that records every line with its timestamp.
pub struct RecordingSink {
    recorded: Recorded,
}

impl RecordingSink {
    pub fn new(recorded: Recorded) -> Self {
        Self { recorded }
    }
}

impl LineSink for RecordingSink {
    fn write_line<'a>(
        &'a mut self,
        line: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        let recorded = Arc::clone(&self.recorded);

        Box::pin(async move {
            let mut guard = recorded.lock().unwrap();
            guard.push(RecordedLine {
                at: Instant::now(),
                line: line.to_string(),
            });
            Ok(())
        })
    }
}

/// A sink that accepts `accept` lines, then fails every write with
/// `BrokenPipe`, like a pipe whose reader has gone away.
pub struct FailingSink {
    accept: usize,
    recorded: Recorded,
    attempts: Arc<Mutex<usize>>,
}

impl FailingSink {
    pub fn new(accept: usize, recorded: Recorded, attempts: Arc<Mutex<usize>>) -> Self {
        Self {
            accept,
            recorded,
            attempts,
        }
    }
}

impl LineSink for FailingSink {
    fn write_line<'a>(
        &'a mut self,
        line: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        let recorded = Arc::clone(&self.recorded);
        let attempts = Arc::clone(&self.attempts);
        let accept = self.accept;

        Box::pin(async move {
            let attempt = {
                let mut guard = attempts.lock().unwrap();
                *guard += 1;
                *guard
            };

            if attempt > accept {
                return Err(AnnouncerError::Output(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    "reader closed",
                )));
            }

            recorded.lock().unwrap().push(RecordedLine {
                at: Instant::now(),
                line: line.to_string(),
            });
            Ok(())
        })
    }
}
