use clap::Parser;
use signal_jobs::cli::{handle_job_command, Cli};
use signal_jobs::logging;
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_file.as_deref()) {
        eprintln!("Failed to initialize logging: {:#}", e);
        return ExitCode::FAILURE;
    }

    match handle_job_command(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_config() {
                error!("CRITICAL: {}", e);
            } else {
                error!("❌ Job failed: {}", e);
            }
            ExitCode::from(e.exit_code())
        }
    }
}
