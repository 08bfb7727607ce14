//! Scoped notice use cases
//!
//! Run a unit of work inside a notifier scope. The notifier is released on
//! every exit path: normal return goes through `finish`, unwinding goes
//! through the guard's `Drop`.

use std::future::Future;
use std::io::Write;

use crate::domain::error::NotifierError;
use crate::domain::timing::NoticeSettings;
use crate::infrastructure::notifier::{NoticeReport, TimedNotifier};

/// Run `work` on the current thread while a notice runs on stdout.
pub fn notify_while<T>(
    settings: &NoticeSettings,
    work: impl FnOnce() -> T,
) -> Result<T, NotifierError> {
    let notifier = TimedNotifier::from_settings(settings)?;
    run_scoped(notifier, work).map(|(output, _)| output)
}

/// Await `work` while a notice runs on stdout.
///
/// The blocking join happens on tokio's blocking pool so the runtime worker
/// is not held while the notifier thread winds down.
pub async fn notify_while_async<F>(
    settings: &NoticeSettings,
    work: F,
) -> Result<(F::Output, NoticeReport), NotifierError>
where
    F: Future,
{
    let notifier = TimedNotifier::from_settings(settings)?;
    run_scoped_async(notifier, work).await
}

fn run_scoped<W, T>(
    notifier: TimedNotifier<W>,
    work: impl FnOnce() -> T,
) -> Result<(T, NoticeReport), NotifierError>
where
    W: Write + Send + 'static,
{
    let output = work();
    let report = notifier.finish()?;
    Ok((output, report))
}

async fn run_scoped_async<W, F>(
    notifier: TimedNotifier<W>,
    work: F,
) -> Result<(F::Output, NoticeReport), NotifierError>
where
    W: Write + Send + 'static,
    F: Future,
{
    let output = work.await;
    let report = tokio::task::spawn_blocking(move || notifier.finish())
        .await
        .map_err(|e| NotifierError::Join(e.to_string()))??;
    Ok((output, report))
}
