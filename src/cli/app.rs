//! Hold and run modes

use std::io;
use std::process::{ExitCode, ExitStatus};
use std::time::Duration;

use tokio::process::{Child, Command};

use crate::application::notify_while_async;
use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::infrastructure::XdgConfigStore;

use super::args::{HoldOptions, RunOptions};
use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;
pub const EXIT_INTERRUPTED: u8 = 130;

/// How long an interrupted child gets to exit on its own before it is killed
const KILL_GRACE: Duration = Duration::from_secs(1);

/// Hold a notice for a fixed time, or until SIGINT/SIGTERM
pub async fn run_hold(options: HoldOptions) -> ExitCode {
    let presenter = Presenter::new();

    let shutdown = ShutdownSignal::new();
    if let Err(e) = shutdown.setup().await {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    let hold = options.hold.as_std();
    let work = async {
        tokio::select! {
            _ = tokio::time::sleep(hold) => false,
            _ = shutdown.recv() => true,
        }
    };

    match notify_while_async(&options.settings, work).await {
        Ok((interrupted, report)) => {
            tracing::debug!(
                message_printed = report.message_printed,
                markers = report.markers,
                interrupted,
                "hold finished"
            );
            if interrupted {
                presenter.warn("Interrupted");
                ExitCode::from(shutdown.exit_code().unwrap_or(EXIT_INTERRUPTED))
            } else {
                ExitCode::from(EXIT_SUCCESS)
            }
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run a child command with a notice until it exits.
/// The child's exit code becomes ours. On SIGINT/SIGTERM the child is
/// stopped and we exit with 128 + signal.
pub async fn run_command(options: RunOptions) -> ExitCode {
    let presenter = Presenter::new();

    let Some((program, args)) = options.command.split_first() else {
        presenter.error("No command given");
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    let shutdown = ShutdownSignal::new();
    if let Err(e) = shutdown.setup().await {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    let mut child = match Command::new(program).args(args).kill_on_drop(true).spawn() {
        Ok(child) => child,
        Err(e) => {
            presenter.error(&format!("Failed to run '{}': {}", program, e));
            return ExitCode::from(EXIT_ERROR);
        }
    };
    tracing::debug!(program = %program, pid = ?child.id(), "command started");

    let work = async {
        tokio::select! {
            status = child.wait() => return status,
            _ = shutdown.recv() => {}
        }
        stop_child(&mut child).await
    };

    match notify_while_async(&options.settings, work).await {
        Ok((Ok(status), report)) => {
            tracing::debug!(
                %status,
                message_printed = report.message_printed,
                markers = report.markers,
                "command finished"
            );
            match shutdown.exit_code() {
                Some(code) => {
                    presenter.warn("Interrupted");
                    ExitCode::from(code)
                }
                None => ExitCode::from(exit_code_for(status)),
            }
        }
        Ok((Err(e), _)) => {
            presenter.error(&format!("Failed to wait for '{}': {}", program, e));
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Give the child `KILL_GRACE` to exit (Ctrl-C reaches it through the
/// process group), then kill it. Always reaps the child.
async fn stop_child(child: &mut Child) -> io::Result<ExitStatus> {
    if let Ok(status) = tokio::time::timeout(KILL_GRACE, child.wait()).await {
        return status;
    }

    tracing::debug!(pid = ?child.id(), "killing command");
    child.start_kill()?;
    child.wait().await
}

/// Map a child exit status to our exit code (128 + signal when killed)
pub fn exit_code_for(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(EXIT_ERROR);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(EXIT_ERROR);
        }
    }

    EXIT_ERROR
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, path = %store.path().display(), "ignoring config file");
        AppConfig::empty()
    });

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}
