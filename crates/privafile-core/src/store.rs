//! Application state container.
//!
//! [`DriveStore`] owns the session, the file list and the UI flags, and
//! sequences the API calls that must run together (restore, login, upload).
//! All mutation goes through its actions; each one notifies subscribers
//! with a fresh [`AppState`] snapshot.
//!
//! The store is single-threaded. State borrows are never held across an
//! await, so a UI can read snapshots while a request is in flight. Racing
//! actions are not serialized: whichever response lands last wins.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, error, info, warn};

use crate::api::{DeleteResponse, DriveApi, Transport, UploadPayload, UploadResponse};
use crate::config::{DEFAULT_UPLOAD_MESSAGE, storage_keys};
use crate::error::RequestError;
use crate::models::{AppState, FileRecord, FileStats, Session, UiState, View};
use crate::storage::SessionStorage;

/// Handle returned by [`DriveStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Rc<dyn Fn(&AppState)>;

/// Owner of all mutable client state.
pub struct DriveStore<T, S> {
    api: DriveApi<T>,
    storage: S,
    state: RefCell<AppState>,
    observers: RefCell<Vec<(SubscriptionId, Observer)>>,
    next_id: Cell<u64>,
}

impl<T: Transport, S: SessionStorage> DriveStore<T, S> {
    pub fn new(api: DriveApi<T>, storage: S) -> Self {
        Self {
            api,
            storage,
            state: RefCell::new(AppState::default()),
            observers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    // ========================================================================
    // Observation
    // ========================================================================

    /// Register a callback invoked after every state change.
    pub fn subscribe(&self, observer: impl Fn(&AppState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let observer: Observer = Rc::new(observer);
        self.observers.borrow_mut().push((id, observer));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.observers.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    pub fn session(&self) -> Session {
        self.state.borrow().session.clone()
    }

    pub fn ui(&self) -> UiState {
        self.state.borrow().ui.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().session.is_authenticated
    }

    pub fn files(&self) -> Vec<FileRecord> {
        self.state.borrow().files.clone()
    }

    pub fn error(&self) -> String {
        self.state.borrow().ui.error.clone()
    }

    pub fn file_stats(&self) -> FileStats {
        self.state.borrow().file_stats()
    }

    /// Direct download link for a file under the current server URL.
    pub fn download_url(&self, file: &FileRecord) -> String {
        self.api.download_url(file)
    }

    fn update(&self, mutate: impl FnOnce(&mut AppState)) {
        mutate(&mut self.state.borrow_mut());
        self.notify();
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        // Observers may subscribe or read state while being notified.
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer(&snapshot);
        }
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Load the remembered server URL into the session, if any.
    ///
    /// Synchronous so a UI can call it before its first render and show the
    /// URL in the login form. Returns the URL that was restored.
    pub fn restore_server_url(&self) -> Option<String> {
        let server_url = self
            .storage
            .get(storage_keys::SERVER_URL)
            .filter(|url| !url.is_empty())?;
        if self.state.borrow().session.server_url != server_url {
            self.update(|s| s.session.server_url = server_url.clone());
        }
        Some(server_url)
    }

    /// Restore a persisted session at startup.
    ///
    /// A stored token that no longer validates is wiped together with the
    /// stored server URL. Failures are logged, never returned.
    pub async fn initialize_auth(&self) {
        let Some(server_url) = self.restore_server_url() else {
            debug!("no stored session");
            return;
        };

        let token = self.storage.get(storage_keys::TOKEN).unwrap_or_default();
        if token.is_empty() {
            debug!("stored server URL without token");
            return;
        }

        self.update(|s| s.session.token = token.clone());
        self.api.configure(&server_url, &token);

        match self.validate_session().await {
            Ok(()) => {
                self.update(|s| s.session.is_authenticated = true);
                info!(server = %server_url, "restored stored session");
            }
            Err(e) => {
                error!(error = %e, "stored session is no longer valid");
                self.forget(storage_keys::TOKEN);
                self.forget(storage_keys::SERVER_URL);
                self.drop_credentials();
            }
        }
    }

    /// Check the configured credential by listing files.
    ///
    /// On success the file list is refreshed as a side effect. Unlike
    /// [`fetch_files`](Self::fetch_files) the error is always returned.
    pub async fn validate_session(&self) -> Result<(), RequestError> {
        self.load_files().await
    }

    /// Log in with a server URL and bearer token.
    ///
    /// Nothing is persisted unless the token validates.
    pub async fn login(&self, url: &str, token: &str) -> Result<(), RequestError> {
        let server_url = normalize_server_url(url).to_string();
        self.update(|s| {
            s.ui.loading = true;
            s.ui.error.clear();
            s.session.server_url = server_url.clone();
            s.session.token = token.to_string();
        });
        self.api.configure(&server_url, token);

        match self.validate_session().await {
            Ok(()) => {
                self.update(|s| {
                    s.session.is_authenticated = true;
                    s.ui.loading = false;
                });
                self.persist(storage_keys::TOKEN, token);
                self.persist(storage_keys::SERVER_URL, &server_url);
                info!(server = %server_url, "login successful");
                Ok(())
            }
            Err(e) => {
                warn!(server = %server_url, error = %e, "login failed");
                self.update(|s| {
                    s.ui.error = e.message().to_string();
                    s.ui.loading = false;
                });
                self.drop_credentials();
                Err(e)
            }
        }
    }

    /// End the session.
    ///
    /// Only the persisted token is removed; the persisted server URL stays
    /// so the login form can offer it again.
    pub fn logout(&self) {
        self.update(|s| {
            s.session.is_authenticated = false;
            s.session.token.clear();
            s.files.clear();
            s.ui.error.clear();
            s.ui.current_view = View::Files;
        });
        self.api.configure(&self.api.base_url(), "");
        self.forget(storage_keys::TOKEN);
        info!("logged out");
    }

    /// Clear the token from state and client after a failed validation.
    fn drop_credentials(&self) {
        self.update(|s| {
            s.session.is_authenticated = false;
            s.session.token.clear();
        });
        self.api.configure(&self.api.base_url(), "");
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            warn!(key, error = %e, "failed to persist session value");
        }
    }

    fn forget(&self, key: &str) {
        if let Err(e) = self.storage.remove(key) {
            warn!(key, error = %e, "failed to clear session value");
        }
    }

    // ========================================================================
    // Files
    // ========================================================================

    /// Replace the file list with the server's current listing.
    ///
    /// Errors are recorded in `ui.error`. They are returned only while not
    /// authenticated; once a session is established a failed refresh keeps
    /// the previous list and is reported through the error field alone.
    pub async fn fetch_files(&self) -> Result<(), RequestError> {
        match self.load_files().await {
            Err(e) if !self.is_authenticated() => Err(e),
            _ => Ok(()),
        }
    }

    async fn load_files(&self) -> Result<(), RequestError> {
        self.update(|s| {
            s.ui.loading = true;
            s.ui.error.clear();
        });

        match self.api.list_files().await {
            Ok(response) => {
                debug!(count = response.files.len(), "file list refreshed");
                self.update(|s| {
                    s.files = response.files;
                    s.ui.loading = false;
                });
                Ok(())
            }
            Err(e) => {
                self.update(|s| {
                    s.ui.error = e.message().to_string();
                    s.ui.loading = false;
                });
                Err(e)
            }
        }
    }

    /// Upload a file, then refresh the whole list.
    pub async fn upload_file(&self, payload: UploadPayload) -> Result<UploadResponse, RequestError> {
        self.update(|s| {
            s.ui.uploading = true;
            s.ui.upload_message.clear();
        });
        info!(name = %payload.name, bytes = payload.bytes.len(), "uploading file");

        let result = match self.api.upload_file(payload).await {
            Ok(response) => {
                let message = response
                    .message
                    .clone()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_UPLOAD_MESSAGE.to_string());
                self.update(|s| {
                    s.ui.upload_message = message;
                    s.ui.upload_success = true;
                });
                self.fetch_files().await.map(|()| response)
            }
            Err(e) => Err(e),
        };

        self.update(|s| {
            s.ui.uploading = false;
            if let Err(e) = &result {
                s.ui.upload_message = e.message().to_string();
                s.ui.upload_success = false;
            }
        });
        if let Err(e) = &result {
            warn!(error = %e, "upload failed");
        }
        result
    }

    /// Report an upload that failed before reaching the server.
    pub fn record_upload_failure(&self, message: impl Into<String>) {
        let message = message.into();
        warn!(error = %message, "upload failed");
        self.update(|s| {
            s.ui.uploading = false;
            s.ui.upload_message = message;
            s.ui.upload_success = false;
        });
    }

    /// Delete a file on the server, then refresh the whole list.
    pub async fn delete_file(&self, file: &FileRecord) -> Result<DeleteResponse, RequestError> {
        match self.api.delete_file(file).await {
            Ok(response) => {
                info!(id = %file.id, "file deleted");
                self.update(|s| {
                    if s.ui.selected_file.as_ref().is_some_and(|f| f.id == file.id) {
                        s.ui.selected_file = None;
                    }
                });
                self.fetch_files().await?;
                Ok(response)
            }
            Err(e) => {
                warn!(id = %file.id, error = %e, "delete failed");
                self.update(|s| s.ui.error = e.message().to_string());
                Err(e)
            }
        }
    }

    // ========================================================================
    // UI setters
    // ========================================================================

    pub fn set_selected_file(&self, file: FileRecord) {
        self.update(|s| {
            s.ui.selected_file = Some(file);
            s.ui.upload_message.clear();
        });
    }

    pub fn clear_selected_file(&self) {
        self.update(|s| {
            s.ui.selected_file = None;
            s.ui.upload_message.clear();
        });
    }

    pub fn set_view(&self, view: View) {
        self.update(|s| s.ui.current_view = view);
    }

    pub fn toggle_sidebar(&self) {
        self.update(|s| s.ui.sidebar_open = !s.ui.sidebar_open);
    }

    pub fn set_dragging(&self, value: bool) {
        self.update(|s| s.ui.is_dragging = value);
    }

    pub fn set_global_dragging(&self, value: bool) {
        self.update(|s| s.ui.global_dragging = value);
    }
}

/// Strip one trailing slash from a server URL.
pub fn normalize_server_url(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}
