// src/cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::core::config_manager::{load_env_file, process_env};
use crate::error::Result;
use crate::jobs::recommendation_sync::{self, DEFAULT_PAGE_LIMIT};
use crate::jobs::signal_refresh;

#[derive(Parser)]
#[command(name = "signal-jobs")]
#[command(about = "Scheduled jobs for the recommendations API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: JobCommand,

    /// Also append JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum JobCommand {
    /// Push recommendation signals for every fetched user
    Sync {
        /// Page size for the users and jobs fetches
        #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u32,
    },
    /// Trigger a server-side signal refresh cycle
    Refresh,
}

pub async fn handle_job_command(command: JobCommand) -> Result<()> {
    match command {
        JobCommand::Sync { limit } => {
            info!("🤖 Starting recommendation sync");
            let report = recommendation_sync::execute(process_env, limit).await?;
            info!(
                users = report.users_fetched,
                jobs = report.jobs_fetched,
                updates = report.updates_sent,
                "Sync finished"
            );
        }

        JobCommand::Refresh => {
            load_env_file();
            let outcome = signal_refresh::execute(process_env).await?;
            info!(status = outcome.status.as_u16(), "Refresh accepted");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_limit_defaults_to_one_hundred() {
        let cli = Cli::try_parse_from(["signal-jobs", "sync"]).unwrap();
        match cli.command {
            JobCommand::Sync { limit } => assert_eq!(limit, 100),
            JobCommand::Refresh => panic!("expected sync"),
        }
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_log_file_is_global() {
        let cli =
            Cli::try_parse_from(["signal-jobs", "refresh", "--log-file", "/tmp/jobs.log"]).unwrap();
        assert!(matches!(cli.command, JobCommand::Refresh));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/jobs.log")));
    }

    #[test]
    fn test_unknown_job_is_rejected() {
        assert!(Cli::try_parse_from(["signal-jobs", "rebuild"]).is_err());
    }
}
