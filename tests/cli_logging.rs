// tests/cli_logging.rs

use std::error::Error;

use clap::Parser;

use announcer::cli::{CliArgs, LogLevel};
use announcer::logging::resolve_level;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn no_arguments_is_the_normal_invocation() -> TestResult {
    let args = CliArgs::try_parse_from(["announcer"])?;
    assert_eq!(args.log_level, None);
    Ok(())
}

#[test]
fn log_level_flag_is_parsed() -> TestResult {
    let args = CliArgs::try_parse_from(["announcer", "--log-level", "debug"])?;
    assert_eq!(args.log_level, Some(LogLevel::Debug));
    Ok(())
}

#[test]
fn stray_positional_arguments_are_ignored() -> TestResult {
    let args = CliArgs::try_parse_from(["announcer", "extra", "words"])?;
    assert_eq!(args.log_level, None);
    assert_eq!(args.ignored, vec!["extra".to_string(), "words".to_string()]);

    let args = CliArgs::try_parse_from(["announcer", "--log-level", "warn", "extra"])?;
    assert_eq!(args.log_level, Some(LogLevel::Warn));
    Ok(())
}

#[test]
fn unknown_flags_are_rejected() {
    assert!(CliArgs::try_parse_from(["announcer", "--script", "routes.toml"]).is_err());
}

#[test]
fn cli_level_wins_over_env() {
    assert_eq!(
        resolve_level(Some(LogLevel::Warn), Some("trace")),
        tracing::Level::WARN
    );
}

#[test]
fn env_level_is_used_without_flag() {
    assert_eq!(resolve_level(None, Some(" Debug ")), tracing::Level::DEBUG);
    assert_eq!(resolve_level(None, Some("warning")), tracing::Level::WARN);
}

#[test]
fn unknown_or_missing_env_falls_back_to_info() {
    assert_eq!(resolve_level(None, Some("loud")), tracing::Level::INFO);
    assert_eq!(resolve_level(None, None), tracing::Level::INFO);
}
