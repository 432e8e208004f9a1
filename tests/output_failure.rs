// tests/output_failure.rs

use std::error::Error;
use std::io;
use std::sync::{Arc, Mutex};

use tokio::time::{timeout, Duration};

use announcer::emitter::{Emitter, EmitterCore};
use announcer::errors::AnnouncerError;
use announcer_test_utils::builders::ScriptBuilder;
use announcer_test_utils::init_tracing;
use announcer_test_utils::sinks::{FailingSink, Recorded};

type TestResult = Result<(), Box<dyn Error>>;

async fn run_until_failure(accept: usize) -> Result<(AnnouncerError, Vec<String>, usize), Box<dyn Error>> {
    let recorded = Recorded::default();
    let attempts = Arc::new(Mutex::new(0));
    let script = ScriptBuilder::new()
        .messages(["one", "two", "three", "four"])
        .build();
    let emitter = Emitter::new(
        EmitterCore::new(script),
        FailingSink::new(accept, Arc::clone(&recorded), Arc::clone(&attempts)),
    );

    let err = match timeout(Duration::from_secs(60), emitter.run()).await {
        Ok(Err(e)) => e,
        Ok(Ok(never)) => match never {},
        Err(_) => panic!("emitter kept running after the sink failed"),
    };

    let lines = recorded
        .lock()
        .unwrap()
        .iter()
        .map(|l| l.line.clone())
        .collect();
    let attempts = *attempts.lock().unwrap();
    Ok((err, lines, attempts))
}

#[tokio::test(start_paused = true)]
async fn broken_pipe_stops_the_emitter_at_the_next_write() -> TestResult {
    init_tracing();

    let (err, lines, attempts) = run_until_failure(2).await?;

    match err {
        AnnouncerError::Output(io_err) => assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("Expected Output error, got: {:?}", other),
    }
    assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);
    assert_eq!(attempts, 3, "no write may be attempted after the failure");

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn failure_on_first_write_produces_no_output() -> TestResult {
    init_tracing();

    let (err, lines, attempts) = run_until_failure(0).await?;

    assert!(matches!(err, AnnouncerError::Output(_)));
    assert!(lines.is_empty());
    assert_eq!(attempts, 1);

    Ok(())
}
