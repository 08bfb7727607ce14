//! Shutdown signal handling

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Exit code for SIGINT / Ctrl-C (128 + 2)
pub const EXIT_SIGINT: u8 = 130;
/// Exit code for SIGTERM (128 + 15)
pub const EXIT_SIGTERM: u8 = 143;

/// Shutdown signal raised by SIGINT/SIGTERM (Ctrl-C elsewhere).
/// Remembers the exit code of the first signal received.
#[derive(Clone)]
pub struct ShutdownSignal {
    // 0 until triggered
    exit_code: Arc<AtomicU8>,
    notify: Arc<Notify>,
}

impl ShutdownSignal {
    /// Create a new shutdown signal handler
    pub fn new() -> Self {
        Self {
            exit_code: Arc::new(AtomicU8::new(0)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Check if shutdown was requested
    pub fn is_shutdown(&self) -> bool {
        self.exit_code.load(Ordering::SeqCst) != 0
    }

    /// Exit code of the signal that requested shutdown, if any
    pub fn exit_code(&self) -> Option<u8> {
        match self.exit_code.load(Ordering::SeqCst) {
            0 => None,
            code => Some(code),
        }
    }

    /// Mark shutdown with `exit_code` and wake every waiter.
    /// Only the first trigger sets the code.
    pub fn trigger(&self, exit_code: u8) {
        let code = exit_code.max(1);
        let _ = self
            .exit_code
            .compare_exchange(0, code, Ordering::SeqCst, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    /// Wait until shutdown is requested
    pub async fn recv(&self) {
        loop {
            // Register before checking the flag so a trigger in between is not lost.
            let notified = self.notify.notified();
            if self.is_shutdown() {
                return;
            }
            notified.await;
        }
    }

    /// Install the OS signal handlers. A second signal exits immediately.
    #[cfg(unix)]
    pub async fn setup(&self) -> Result<(), std::io::Error> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;
        let this = self.clone();
        tokio::spawn(async move {
            loop {
                let code = tokio::select! {
                    _ = sigint.recv() => EXIT_SIGINT,
                    _ = sigterm.recv() => EXIT_SIGTERM,
                };
                if let Some(first) = this.exit_code() {
                    tracing::warn!(exit_code = first, "second signal, exiting now");
                    std::process::exit(i32::from(first));
                }
                tracing::debug!(exit_code = code, "received shutdown signal");
                this.trigger(code);
            }
        });

        Ok(())
    }

    /// Install the OS signal handlers
    #[cfg(not(unix))]
    pub async fn setup(&self) -> Result<(), std::io::Error> {
        let this = self.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::debug!("received Ctrl-C");
                this.trigger(EXIT_SIGINT);
            }
        });

        Ok(())
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
