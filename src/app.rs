//! Root application module.
//!
//! Contains the main App component, AppContext definition, UploaderState,
//! and application-level setup logic following Leptos conventions.

use fshare_core::{
    FileHandle, PendingFiles, UploadEvent, UploadStatus, flatten, human_file_size, resolve_each,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use tracing::{debug, error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{DataTransfer, File};

use crate::components::Uploader;
use crate::config::{ABORT_ALERT, APP_NAME, APP_TAGLINE, REMOVE_FADE_MS};
use crate::host::entries::{self, Dropped};
use crate::host::xhr;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// UploaderState
// ============================================================================

/// One rendered row of the file list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRow {
    /// Unique per row. Keys can reappear after a removal while the old
    /// row is still fading out.
    pub id: u64,
    /// Pending-collection key, shown as the row label.
    pub key: String,
    /// Human-readable size.
    pub size: String,
    /// Removed from the pending set, fading out of the list.
    pub leaving: bool,
}

/// Uploader state managed with Leptos signals.
///
/// Owns the pending files (browser `File` handles are `!Send`, so they
/// live in local storage) and the reactive pieces the components render:
/// list rows and upload status.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena handles, which are
/// cheap to copy.
#[derive(Clone, Copy)]
pub struct UploaderState {
    files: StoredValue<PendingFiles<File>, LocalStorage>,
    next_row_id: StoredValue<u64>,
    /// Rows of the file list, in insertion order.
    pub rows: RwSignal<Vec<FileRow>>,
    /// Upload progress and outcome.
    pub status: RwSignal<UploadStatus>,
}

impl UploaderState {
    pub fn new() -> Self {
        Self {
            files: StoredValue::new_local(PendingFiles::new()),
            next_row_id: StoredValue::new(0),
            rows: RwSignal::new(Vec::new()),
            status: RwSignal::new(UploadStatus::Idle),
        }
    }

    /// Whether adding, removing and sending are disabled. Tracked.
    pub fn is_locked(&self) -> bool {
        !self.status.with(UploadStatus::accepts_changes)
    }

    /// Whether any file is waiting to be sent. Tracked.
    pub fn has_files(&self) -> bool {
        self.rows.with(|rows| rows.iter().any(|row| !row.leaving))
    }

    /// Register a file and render its row. No-op if the key is taken.
    pub fn add(&self, handle: FileHandle, file: File) {
        if !self.status.with_untracked(UploadStatus::accepts_changes) {
            return;
        }

        let key = handle.key().to_string();
        let size = human_file_size(handle.size());

        let inserted = self
            .files
            .try_update_value(|files| files.insert(handle, file))
            .unwrap_or(false);
        if !inserted {
            debug!(%key, "file already pending");
            return;
        }

        let id = self.next_row_id();
        self.rows.update(|rows| {
            rows.push(FileRow {
                id,
                key,
                size,
                leaving: false,
            })
        });
    }

    /// Add files from a picker. Folder pickers key files by their
    /// relative path.
    pub fn add_picked(&self, files: Vec<File>, from_folder: bool) {
        for file in files {
            let relative = from_folder.then(|| dom::webkit_relative_path(&file)).flatten();
            let handle =
                FileHandle::new(file.name(), file.size() as u64).with_relative_path(relative);
            self.add(handle, file);
        }
    }

    /// Handle a drop: flatten dropped directories, then add each file as
    /// soon as it resolves.
    pub fn accept_drop(&self, transfer: &DataTransfer) {
        match entries::dropped_items(transfer) {
            Dropped::Files(files) => self.add_picked(files, false),
            Dropped::Entries(dropped) => {
                let state = *self;
                spawn_local(async move {
                    let flattened = flatten(dropped).await;
                    if !flattened.failed.is_empty() {
                        warn!(
                            count = flattened.failed.len(),
                            "some dropped folders could not be read completely"
                        );
                    }
                    resolve_each(&flattened.files, |entry, file| {
                        state.add(entry.handle_for(&file), file);
                    })
                    .await;
                });
            }
        }
    }

    /// Drop a file from the pending set and fade its row out.
    pub fn remove(&self, row_id: u64, key: &str) {
        if !self.status.with_untracked(UploadStatus::accepts_changes) {
            return;
        }

        self.files.update_value(|files| {
            files.remove(key);
        });
        self.rows.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|row| row.id == row_id) {
                row.leaving = true;
            }
        });

        let rows = self.rows;
        spawn_local(async move {
            TimeoutFuture::new(REMOVE_FADE_MS).await;
            rows.update(|rows| rows.retain(|row| row.id != row_id));
        });
    }

    /// Upload every pending file in one multipart request.
    pub fn send(&self) {
        if self.files.with_value(PendingFiles::is_empty) {
            return;
        }

        match self.status.try_update(UploadStatus::begin) {
            Some(Ok(())) => {}
            Some(Err(err)) => {
                warn!(error = %err, "upload not started");
                return;
            }
            None => return,
        }

        let form = match self.files.with_value(xhr::form_data) {
            Ok(form) => form,
            Err(err) => {
                error!(error = %err, "could not build upload body");
                self.status.set(UploadStatus::Failed {
                    message: err.to_string(),
                });
                return;
            }
        };

        let (count, bytes) = self
            .files
            .with_value(|files| (files.len(), files.total_size()));
        info!(files = count, bytes, "starting upload");

        let status = self.status;
        spawn_local(async move {
            let on_progress = move |event: UploadEvent| status.update(|s| s.apply(event));

            match xhr::send(&form, on_progress).await {
                Ok(event) => {
                    let aborted = event == UploadEvent::Aborted;
                    status.update(|s| s.apply(event));
                    if aborted {
                        dom::alert(ABORT_ALERT);
                    }
                }
                Err(err) => {
                    error!(error = %err, "upload request failed");
                    status.set(UploadStatus::Failed {
                        message: err.to_string(),
                    });
                }
            }
        });
    }

    fn next_row_id(&self) -> u64 {
        self.next_row_id
            .try_update_value(|id| {
                *id += 1;
                *id
            })
            .unwrap_or_default()
    }
}

impl Default for UploaderState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from children
/// with `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Pending files, list rows and upload status.
    pub uploader: UploaderState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            uploader: UploaderState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the page header and the Uploader
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <h1 class=css::fallbackTitle>"Something went wrong"</h1>
                    <p>"The uploader hit an unexpected error. Please reload the page."</p>
                    <ul class=css::fallbackErrors>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        class=css::reloadButton
                        on:click=move |_| {
                            if let Some(window) = dom::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <main class=css::page>
                <header class=css::header>
                    <h1 class=css::title>{APP_NAME}</h1>
                    <p class=css::tagline>{APP_TAGLINE}</p>
                </header>
                <Uploader />
            </main>
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::dom::fixtures::{set_relative_path, text_file};
    use wasm_bindgen_test::wasm_bindgen_test;

    fn live_keys(state: &UploaderState) -> Vec<String> {
        state
            .rows
            .get_untracked()
            .into_iter()
            .filter(|row| !row.leaving)
            .map(|row| row.key)
            .collect()
    }

    fn pending(state: &UploaderState, key: &str) -> bool {
        state.files.with_value(|files| files.contains(key))
    }

    #[wasm_bindgen_test]
    fn duplicate_key_leaves_rows_unchanged() {
        let state = UploaderState::new();
        state.add(FileHandle::new("a.txt", 1), text_file("a.txt", "x"));
        let before = state.rows.get_untracked();

        state.add(FileHandle::new("a.txt", 5), text_file("a.txt", "other"));

        assert_eq!(state.rows.get_untracked(), before);
        assert_eq!(state.files.with_value(PendingFiles::len), 1);
    }

    #[wasm_bindgen_test]
    fn folder_picker_keys_by_relative_path() {
        let state = UploaderState::new();
        let nested = text_file("a.txt", "x");
        set_relative_path(&nested, "docs/a.txt");

        state.add_picked(vec![nested], true);
        state.add_picked(vec![text_file("a.txt", "y")], false);

        assert_eq!(live_keys(&state), ["docs/a.txt", "a.txt"]);
        assert!(pending(&state, "docs/a.txt"));
        assert!(pending(&state, "a.txt"));
    }

    #[wasm_bindgen_test]
    async fn removed_row_fades_out_and_key_can_return() {
        let state = UploaderState::new();
        state.add(FileHandle::new("a.txt", 1), text_file("a.txt", "x"));
        let first = state.rows.get_untracked()[0].id;

        state.remove(first, "a.txt");
        assert!(!pending(&state, "a.txt"));
        assert!(state.rows.get_untracked()[0].leaving);
        assert!(live_keys(&state).is_empty());

        // Re-added while the old row is still fading.
        state.add(FileHandle::new("a.txt", 1), text_file("a.txt", "x"));
        let rows = state.rows.get_untracked();
        assert_eq!(rows.len(), 2);
        assert_ne!(rows[1].id, first);
        assert!(!rows[1].leaving);

        TimeoutFuture::new(REMOVE_FADE_MS + 100).await;

        let rows = state.rows.get_untracked();
        assert_eq!(rows.len(), 1);
        assert_ne!(rows[0].id, first);
        assert!(pending(&state, "a.txt"));
    }

    #[wasm_bindgen_test]
    fn changes_ignored_once_upload_started() {
        let state = UploaderState::new();
        state.add(FileHandle::new("a.txt", 1), text_file("a.txt", "x"));
        let id = state.rows.get_untracked()[0].id;
        state.status.set(UploadStatus::Uploading { percent: 0 });

        state.add(FileHandle::new("b.txt", 1), text_file("b.txt", "y"));
        state.remove(id, "a.txt");

        assert_eq!(live_keys(&state), ["a.txt"]);
        assert_eq!(state.files.with_value(PendingFiles::len), 1);
    }
}
