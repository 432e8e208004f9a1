// src/main.rs

use announcer::{cli, logging, run};

// Output failures are returned from `main` as-is: the process exits non-zero
// with the default error report on stderr.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    match run(args).await? {}
}
