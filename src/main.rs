use std::process::ExitCode;

use capture::endpoint::DEFAULT_BASE_URL;
use capture::{FailurePolicy, Outcome, RemoteActionTrigger, TriggerConfig};
use clap::Parser;
use futures_util::future::join_all;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] capture::ConfigError),
    #[error("capture task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Parser, Debug)]
#[command(name = "saldo", about = "Trigger a balance capture on the finanzas server")]
struct Cli {
    #[arg(long, env = "SALDO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, default_value_t = 1, help = "Number of concurrent invocations")]
    times: usize,

    #[arg(long, default_value_t = false, help = "Also print failures to stdout")]
    surface_errors: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut config = TriggerConfig::from_env()?;
    config.base_url = cli.base_url;
    if cli.surface_errors {
        config.failure_policy = FailurePolicy::Surface;
    }

    let trigger = RemoteActionTrigger::from_config(&config)?;
    tracing::debug!(base_url = %config.base_url, times = cli.times, "firing capture");

    let handles: Vec<_> = (0..cli.times).map(|_| trigger.fire()).collect();
    let mut failed = 0;
    for outcome in join_all(handles).await {
        if matches!(outcome?, Outcome::Failed(_)) {
            failed += 1;
        }
    }

    if failed > 0 {
        tracing::debug!(failed, total = cli.times, "capture finished with failures");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
