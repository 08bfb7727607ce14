//! Console timed notifier
//!
//! A scope guard that prints a message once an initial wait elapses, then one
//! progress marker per tick interval, until the guard is dropped. Teardown
//! joins the worker thread before finishing the line, so nothing is printed
//! after the guard is gone.

use std::io::{self, Stdout, Write};
use std::panic;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::domain::error::NotifierError;
use crate::domain::session::NotifierSession;
use crate::domain::timing::NoticeSettings;

/// Printed once per elapsed tick interval, without a newline
pub const PROGRESS_MARKER: &str = ".";

const WORKER_THREAD_NAME: &str = "timed-print";

/// What a session printed before it stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoticeReport {
    pub message_printed: bool,
    pub markers: u64,
}

/// Handed back by the worker thread so the owner can finish the line
struct WorkerExit<W> {
    out: W,
    report: NoticeReport,
    result: io::Result<()>,
}

/// Scope guard for a background progress notice.
///
/// The notice runs for as long as the guard is alive. Dropping the guard (or
/// calling [`TimedNotifier::finish`]) cancels the worker, waits for it to
/// exit, then writes a line terminator.
///
/// Cancellation is a single-shot handoff: the guard owns the only [`Sender`]
/// of a channel the worker waits on, and cancelling drops it. The worker's
/// timed receive then returns `Disconnected` immediately, whichever wait it
/// is in.
#[must_use = "the notice stops as soon as the notifier is dropped"]
pub struct TimedNotifier<W: Write + Send + 'static = Stdout> {
    session: NotifierSession,
    cancel: Option<Sender<()>>,
    worker: Option<JoinHandle<WorkerExit<W>>>,
}

impl TimedNotifier<Stdout> {
    /// Start a notice on stdout.
    ///
    /// # Errors
    /// `ZeroTickInterval` if `tick_interval` is zero, `Spawn` if the worker
    /// thread cannot be created. No worker exists in either case.
    pub fn start(
        message: impl Into<String>,
        initial_wait: Duration,
        tick_interval: Duration,
    ) -> Result<Self, NotifierError> {
        Self::with_writer(io::stdout(), message, initial_wait, tick_interval)
    }

    /// Start a notice on stdout from resolved settings
    pub fn from_settings(settings: &NoticeSettings) -> Result<Self, NotifierError> {
        Self::start(
            settings.message.clone(),
            settings.initial_wait.as_std(),
            settings.tick_interval.as_std(),
        )
    }
}

impl<W: Write + Send + 'static> TimedNotifier<W> {
    pub(crate) fn with_writer(
        out: W,
        message: impl Into<String>,
        initial_wait: Duration,
        tick_interval: Duration,
    ) -> Result<Self, NotifierError> {
        if tick_interval.is_zero() {
            return Err(NotifierError::ZeroTickInterval);
        }

        let session = NotifierSession::new(message, initial_wait, tick_interval);
        let (cancel, cancelled) = mpsc::channel();

        let worker_session = session.clone();
        let worker = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || run_worker(out, &worker_session, &cancelled))
            .map_err(NotifierError::Spawn)?;

        tracing::debug!(
            ?initial_wait,
            ?tick_interval,
            "notifier started"
        );

        Ok(Self {
            session,
            cancel: Some(cancel),
            worker: Some(worker),
        })
    }

    pub fn session(&self) -> &NotifierSession {
        &self.session
    }

    pub fn is_cancelled(&self) -> bool {
        self.session.is_cancelled()
    }

    /// Signal the worker to stop without waiting for it.
    ///
    /// Returns `true` only for the call that performed the cancellation;
    /// later calls are no-ops.
    pub fn cancel(&mut self) -> bool {
        if !self.session.cancel() {
            return false;
        }
        drop(self.cancel.take());
        tracing::debug!("notifier cancelled");
        true
    }

    /// Cancel, wait for the worker to exit, and finish the line.
    ///
    /// # Errors
    /// `Output` if writing to the console failed, `TaskPanicked` if the
    /// worker thread panicked.
    pub fn finish(mut self) -> Result<NoticeReport, NotifierError> {
        match self.join_worker() {
            None => Ok(NoticeReport::default()),
            Some(Ok(exit)) => complete(exit),
            Some(Err(_)) => Err(NotifierError::TaskPanicked),
        }
    }

    fn join_worker(&mut self) -> Option<thread::Result<WorkerExit<W>>> {
        self.cancel();
        self.worker.take().map(JoinHandle::join)
    }
}

impl<W: Write + Send + 'static> Drop for TimedNotifier<W> {
    fn drop(&mut self) {
        match self.join_worker() {
            None => {}
            Some(Ok(exit)) => {
                if let Err(e) = complete(exit) {
                    tracing::warn!(error = %e, "notifier output failed");
                }
            }
            Some(Err(payload)) => {
                tracing::error!("notifier thread panicked");
                if !thread::panicking() {
                    panic::resume_unwind(payload);
                }
            }
        }
    }
}

/// Write the line terminator after the worker has exited
fn complete<W: Write>(exit: WorkerExit<W>) -> Result<NoticeReport, NotifierError> {
    let WorkerExit {
        mut out,
        report,
        result,
    } = exit;

    let terminated = out.write_all(b"\n").and_then(|()| out.flush());
    tracing::debug!(
        message_printed = report.message_printed,
        markers = report.markers,
        "notifier joined"
    );

    result.and(terminated).map_err(NotifierError::Output)?;
    Ok(report)
}

fn run_worker<W: Write>(
    mut out: W,
    session: &NotifierSession,
    cancelled: &Receiver<()>,
) -> WorkerExit<W> {
    let mut report = NoticeReport::default();
    let result = print_notice(&mut out, session, cancelled, &mut report);
    WorkerExit {
        out,
        report,
        result,
    }
}

fn print_notice<W: Write>(
    out: &mut W,
    session: &NotifierSession,
    cancelled: &Receiver<()>,
    report: &mut NoticeReport,
) -> io::Result<()> {
    // Deadlines are anchored to the start so markers don't drift.
    let mut deadline = Instant::now().checked_add(session.initial_wait());
    if !wait_until(cancelled, deadline) {
        return Ok(());
    }

    out.write_all(session.message().as_bytes())?;
    out.flush()?;
    report.message_printed = true;

    loop {
        deadline = deadline.and_then(|d| d.checked_add(session.tick_interval()));
        if !wait_until(cancelled, deadline) {
            return Ok(());
        }

        out.write_all(PROGRESS_MARKER.as_bytes())?;
        out.flush()?;
        report.markers += 1;
    }
}

/// Block until `deadline` passes or the session is cancelled.
///
/// Returns `true` when the deadline passed first. A `None` deadline is past
/// the end of representable time and only cancellation ends the wait.
fn wait_until(cancelled: &Receiver<()>, deadline: Option<Instant>) -> bool {
    match deadline {
        Some(deadline) => {
            let timeout = deadline.saturating_duration_since(Instant::now());
            matches!(
                cancelled.recv_timeout(timeout),
                Err(RecvTimeoutError::Timeout)
            )
        }
        None => {
            let _ = cancelled.recv();
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// In-memory console shared between the test and the worker
    #[derive(Clone, Default)]
    pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct PanickingWriter;

    impl Write for PanickingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            panic!("console exploded");
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn cancelled_before_initial_wait_prints_only_terminator() {
        let buffer = SharedBuffer::default();
        let started = Instant::now();
        let notifier =
            TimedNotifier::with_writer(buffer.clone(), "Yo", ms(10_000), ms(1_000)).unwrap();

        thread::sleep(ms(20));
        let report = notifier.finish().unwrap();

        assert!(started.elapsed() < ms(2_000), "initial wait was not interrupted");
        assert!(!report.message_printed);
        assert_eq!(report.markers, 0);
        assert_eq!(buffer.contents(), "\n");
    }

    #[test]
    fn message_printed_once_after_initial_wait() {
        let buffer = SharedBuffer::default();
        let notifier =
            TimedNotifier::with_writer(buffer.clone(), "Yo", Duration::ZERO, ms(10_000)).unwrap();

        thread::sleep(ms(100));
        let report = notifier.finish().unwrap();

        assert!(report.message_printed);
        assert_eq!(report.markers, 0);
        assert_eq!(buffer.contents(), "Yo\n");
    }

    #[test]
    fn markers_follow_message_once_per_tick() {
        let buffer = SharedBuffer::default();
        let notifier = TimedNotifier::with_writer(buffer.clone(), "Yo", ms(50), ms(100)).unwrap();

        let expected = notifier.session().expected_markers(ms(575));
        assert_eq!(expected, 5);

        thread::sleep(ms(575));
        let report = notifier.finish().unwrap();

        assert!(report.message_printed);
        assert!(
            (expected - 1..=expected + 2).contains(&report.markers),
            "unexpected marker count {}",
            report.markers
        );
        let expected = format!("Yo{}\n", PROGRESS_MARKER.repeat(report.markers as usize));
        assert_eq!(buffer.contents(), expected);
    }

    #[test]
    fn cancel_is_idempotent() {
        let buffer = SharedBuffer::default();
        let mut notifier =
            TimedNotifier::with_writer(buffer.clone(), "Yo", ms(5_000), ms(100)).unwrap();

        assert!(!notifier.is_cancelled());
        assert!(notifier.cancel());
        assert!(!notifier.cancel());
        assert!(notifier.is_cancelled());

        let report = notifier.finish().unwrap();
        assert_eq!(report, NoticeReport::default());
        assert_eq!(buffer.contents(), "\n");
    }

    #[test]
    fn drop_joins_worker_and_finishes_line() {
        let buffer = SharedBuffer::default();
        {
            let _notifier =
                TimedNotifier::with_writer(buffer.clone(), "Yo", Duration::ZERO, ms(20)).unwrap();
            thread::sleep(ms(110));
        }

        let after_drop = buffer.contents();
        assert!(after_drop.starts_with("Yo"));
        assert!(after_drop.ends_with('\n'));
        assert_eq!(after_drop.matches('\n').count(), 1);

        thread::sleep(ms(100));
        assert_eq!(buffer.contents(), after_drop, "output after teardown");
    }

    #[test]
    fn session_reflects_construction() {
        let notifier =
            TimedNotifier::with_writer(SharedBuffer::default(), "Yo", ms(200), ms(400)).unwrap();
        assert_eq!(notifier.session().message(), "Yo");
        assert_eq!(notifier.session().initial_wait(), ms(200));
        assert_eq!(notifier.session().tick_interval(), ms(400));
        assert!(notifier.session().is_pending());
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let result =
            TimedNotifier::with_writer(SharedBuffer::default(), "Yo", ms(10), Duration::ZERO);
        assert!(matches!(result, Err(NotifierError::ZeroTickInterval)));
    }

    #[test]
    fn write_failure_is_reported_by_finish() {
        let notifier =
            TimedNotifier::with_writer(BrokenPipe, "Yo", Duration::ZERO, ms(10_000)).unwrap();
        thread::sleep(ms(50));
        assert!(matches!(notifier.finish(), Err(NotifierError::Output(_))));
    }

    #[test]
    fn worker_panic_is_reported_by_finish() {
        let notifier =
            TimedNotifier::with_writer(PanickingWriter, "Yo", Duration::ZERO, ms(10_000)).unwrap();
        thread::sleep(ms(50));
        assert!(matches!(notifier.finish(), Err(NotifierError::TaskPanicked)));
    }

    #[test]
    #[should_panic(expected = "console exploded")]
    fn worker_panic_is_raised_on_drop() {
        let notifier =
            TimedNotifier::with_writer(PanickingWriter, "Yo", Duration::ZERO, ms(10_000)).unwrap();
        thread::sleep(ms(50));
        drop(notifier);
    }
}
