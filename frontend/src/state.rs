//! Page state and its update functions.
//!
//! All mutable state of the page lives in one [`AppState`] value. Event
//! handlers and the [`controller`](crate::controller) change it only through
//! the methods below, reaching it via a [`StateStore`].

use std::cell::RefCell;

use leptos::{RwSignal, SignalUpdate, SignalWithUntracked};
use web_sys::File;

use crate::types::{ExtractionResult, FileInfo};

/// Page state as held by the components.
pub type PageState = RwSignal<AppState<File>>;

/// A file chosen in the picker.
///
/// `F` is the platform handle (`web_sys::File` in the browser).
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<F> {
    pub info: FileInfo,
    pub handle: F,
}

/// Upload lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState<F> {
    selected: Option<SelectedFile<F>>,
    phase: UploadPhase,
    latest: Option<ExtractionResult>,
    history: Vec<ExtractionResult>,
    expanded: Option<usize>,
}

impl<F> Default for AppState<F> {
    fn default() -> Self {
        Self {
            selected: None,
            phase: UploadPhase::Idle,
            latest: None,
            history: Vec::new(),
            expanded: None,
        }
    }
}

impl<F> AppState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn selected(&self) -> Option<&SelectedFile<F>> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn is_uploading(&self) -> bool {
        self.phase == UploadPhase::Uploading
    }

    /// Upload is allowed with a file selected and nothing in flight.
    pub fn can_upload(&self) -> bool {
        self.selected.is_some() && !self.is_uploading()
    }

    pub fn latest(&self) -> Option<&ExtractionResult> {
        self.latest.as_ref()
    }

    pub fn history(&self) -> &[ExtractionResult] {
        &self.history
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    // -------------------------------------------------------------------------
    // Updates
    // -------------------------------------------------------------------------

    /// Record the picked file; `None` clears the selection.
    pub fn select_file(&mut self, file: Option<SelectedFile<F>>) {
        self.selected = file;
    }

    /// Move to `Uploading` and hand out the file to send.
    ///
    /// Returns `None` and leaves the state untouched when an upload is not
    /// allowed.
    pub fn begin_upload(&mut self) -> Option<SelectedFile<F>>
    where
        F: Clone,
    {
        if !self.can_upload() {
            return None;
        }
        self.phase = UploadPhase::Uploading;
        self.selected.clone()
    }

    /// Store a successful response and return to `Idle`.
    pub fn upload_succeeded(&mut self, result: ExtractionResult) {
        self.latest = Some(result);
        self.phase = UploadPhase::Idle;
    }

    /// Return to `Idle`, keeping the previous result.
    pub fn upload_failed(&mut self) {
        self.phase = UploadPhase::Idle;
    }

    /// Replace the history wholesale.
    pub fn replace_history(&mut self, history: Vec<ExtractionResult>) {
        self.history = history;
    }

    /// Toggle a history row; only one row is expanded at a time.
    pub fn toggle_expanded(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

// =============================================================================
// Store
// =============================================================================

/// Shared access to an [`AppState`].
///
/// The page keeps its state in a Leptos signal; tests use a `RefCell`.
pub trait StateStore<F> {
    /// Read the state without subscribing.
    fn read<R>(&self, f: impl FnOnce(&AppState<F>) -> R) -> R;

    /// Mutate the state. `None` when the store is gone.
    fn apply<R>(&self, f: impl FnOnce(&mut AppState<F>) -> R) -> Option<R>;
}

impl<F: 'static> StateStore<F> for RwSignal<AppState<F>> {
    fn read<R>(&self, f: impl FnOnce(&AppState<F>) -> R) -> R {
        SignalWithUntracked::with_untracked(self, f)
    }

    fn apply<R>(&self, f: impl FnOnce(&mut AppState<F>) -> R) -> Option<R> {
        SignalUpdate::try_update(self, f)
    }
}

impl<F> StateStore<F> for RefCell<AppState<F>> {
    fn read<R>(&self, f: impl FnOnce(&AppState<F>) -> R) -> R {
        f(&self.borrow())
    }

    fn apply<R>(&self, f: impl FnOnce(&mut AppState<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf() -> SelectedFile<&'static str> {
        SelectedFile {
            info: FileInfo {
                name: "cv.pdf".to_string(),
                mime: "application/pdf".to_string(),
                size: 2048,
            },
            handle: "cv.pdf",
        }
    }

    #[test]
    fn test_upload_disabled_without_file() {
        let state = AppState::<&str>::new();
        assert!(!state.can_upload());
    }

    #[test]
    fn test_upload_disabled_while_in_flight() {
        let mut state = AppState::new();
        state.select_file(Some(pdf()));
        assert!(state.can_upload());

        let file = state.begin_upload();
        assert_eq!(file.map(|f| f.handle), Some("cv.pdf"));
        assert!(state.is_uploading());
        assert!(!state.can_upload());
        assert!(state.begin_upload().is_none());
    }

    #[test]
    fn test_begin_upload_without_file_keeps_idle() {
        let mut state = AppState::<&str>::new();
        assert!(state.begin_upload().is_none());
        assert_eq!(state.phase(), UploadPhase::Idle);
    }

    #[test]
    fn test_phase_follows_upload_lifecycle() {
        let mut state = AppState::new();
        state.select_file(Some(pdf()));
        assert_eq!(state.phase(), UploadPhase::Idle);

        state.begin_upload();
        assert_eq!(state.phase(), UploadPhase::Uploading);

        state.upload_failed();
        assert_eq!(state.phase(), UploadPhase::Idle);
    }

    #[test]
    fn test_clearing_selection_disables_upload() {
        let mut state = AppState::new();
        state.select_file(Some(pdf()));
        state.select_file(None);
        assert!(!state.can_upload());
    }

    #[test]
    fn test_success_and_failure_return_to_idle() {
        let mut state = AppState::new();
        state.select_file(Some(pdf()));

        state.begin_upload();
        let result = ExtractionResult {
            name: Some("Jane Doe".to_string()),
            ..Default::default()
        };
        state.upload_succeeded(result.clone());
        assert_eq!(state.phase(), UploadPhase::Idle);
        assert_eq!(state.latest(), Some(&result));

        state.begin_upload();
        state.upload_failed();
        assert_eq!(state.phase(), UploadPhase::Idle);
        assert_eq!(state.latest(), Some(&result));
        assert!(state.can_upload());
    }

    #[test]
    fn test_toggle_same_row_twice() {
        let mut state = AppState::<()>::new();
        state.toggle_expanded(2);
        assert!(state.is_expanded(2));
        state.toggle_expanded(2);
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn test_toggle_moves_single_expansion() {
        let mut state = AppState::<()>::new();
        state.toggle_expanded(0);
        state.toggle_expanded(3);
        assert!(!state.is_expanded(0));
        assert!(state.is_expanded(3));
    }

    #[test]
    fn test_replace_history_wholesale() {
        let mut state = AppState::<()>::new();
        state.replace_history(vec![ExtractionResult::default(); 3]);
        assert_eq!(state.history().len(), 3);
        state.replace_history(vec![ExtractionResult::default()]);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_refcell_store() {
        let store = RefCell::new(AppState::new());
        store.apply(|s| s.select_file(Some(pdf())));
        assert!(store.read(|s| s.can_upload()));
        assert_eq!(store.apply(|s| s.begin_upload().is_some()), Some(true));
        assert!(store.read(|s| s.is_uploading()));
    }
}
