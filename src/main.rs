//! timed-print CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use timed_print::cli::{
    handle_config_command, load_merged_config, run_command, run_hold, Cli, Commands,
    HoldOptions, NoticeArgs, Presenter, RunOptions, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR,
};
use timed_print::domain::timing::Duration;
use timed_print::domain::NoticeSettings;
use timed_print::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(?cli, "parsed CLI arguments");

    let presenter = Presenter::new();

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Commands::Hold { time, notice } => {
            let hold = match time.parse::<Duration>() {
                Ok(d) => d,
                Err(e) => {
                    presenter.error(&format!("Invalid hold time: {}", e));
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };
            let settings = match resolve_settings(&notice).await {
                Ok(settings) => settings,
                Err(code) => return code,
            };

            run_hold(HoldOptions { settings, hold }).await
        }
        Commands::Run { notice, command } => {
            let settings = match resolve_settings(&notice).await {
                Ok(settings) => settings,
                Err(code) => return code,
            };

            run_command(RunOptions { settings, command }).await
        }
    }
}

/// Merge config file and CLI flags into notice settings
async fn resolve_settings(notice: &NoticeArgs) -> Result<NoticeSettings, ExitCode> {
    let config = load_merged_config(notice.to_config()).await;
    config.to_settings().map_err(|e| {
        Presenter::new().error(&e.to_string());
        ExitCode::from(EXIT_USAGE_ERROR)
    })
}

/// Filter directives: `-v` forces debug and ignores `RUST_LOG`,
/// otherwise `RUST_LOG` applies with a `warn` fallback.
fn filter_directives(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return "timed_print=debug".to_string();
    }
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| "warn".to_string())
}

/// Log to stderr; stdout carries the notice
fn init_tracing(verbose: bool) {
    let directives = filter_directives(verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .init();
}
