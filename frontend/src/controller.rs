//! Upload and history orchestration.
//!
//! These functions run the page's two network operations against the
//! [`ResumeApi`], [`StateStore`] and [`Notifier`] seams. Components spawn
//! them with `spawn_local`; tests drive them with a blocking executor.

use crate::config::UPLOAD_FAILED_MESSAGE;
use crate::diagnostics::{FailureReport, Operation};
use crate::services::{Notifier, ResumeApi};
use crate::state::StateStore;

/// How an [`upload`] call ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// No file selected or an upload already in flight.
    Skipped,
    Completed,
    Failed,
}

/// Send the selected file and show the response.
///
/// On success the history is refreshed once. On failure the previous
/// result is kept, a report is logged and the user is alerted.
pub async fn upload<A, S, N>(api: &A, store: &S, notifier: &N) -> UploadOutcome
where
    A: ResumeApi,
    S: StateStore<A::File>,
    N: Notifier,
{
    let Some(file) = store.apply(|s| s.begin_upload()).flatten() else {
        log::debug!("Upload skipped: no file selected or upload in progress");
        return UploadOutcome::Skipped;
    };

    let url = api.upload_url();
    log::info!(
        "📤 Uploading {} ({}, {} bytes) to {}",
        file.info.name,
        file.info.mime,
        file.info.size,
        url
    );

    match api.upload(&file.handle).await {
        Ok(result) => {
            log::info!(
                "✅ Upload successful: {}",
                result.name.as_deref().unwrap_or("unnamed")
            );
            store.apply(|s| s.upload_succeeded(result));
            fetch_history(api, store).await;
            UploadOutcome::Completed
        }
        Err(e) => {
            FailureReport::new(Operation::Upload, &url, Some(&file.info), &e).emit();
            store.apply(|s| s.upload_failed());
            notifier.alert(UPLOAD_FAILED_MESSAGE);
            UploadOutcome::Failed
        }
    }
}

/// Reload the history list.
///
/// Failures are logged only; the current list stays on screen.
/// Returns whether the list was replaced.
pub async fn fetch_history<A, S>(api: &A, store: &S) -> bool
where
    A: ResumeApi,
    S: StateStore<A::File>,
{
    let url = api.history_url();

    match api.fetch_history().await {
        Ok(history) => {
            log::debug!("Loaded {} history entries", history.len());
            store.apply(|s| s.replace_history(history)).is_some()
        }
        Err(e) => {
            FailureReport::new(Operation::History, &url, None, &e).emit();
            false
        }
    }
}
