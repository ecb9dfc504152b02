//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] that bridges the
//! core [`DriveStore`] to Leptos signals.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use privafile_core::{AppState, DriveApi, DriveStore, FileRecord, View};
use tracing::warn;

use crate::components::{Login, Shell};
use crate::utils::{BrowserStorage, FetchTransport, read_file};

/// Store type used by the browser build.
pub type Store = DriveStore<FetchTransport, BrowserStorage>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// The [`DriveStore`] stays the single owner of client state. Every change
/// it reports is mirrored into [`AppContext::state`], which components read
/// reactively. Components never mutate `state` directly; they call the
/// action methods below, which forward to the store.
///
/// # Note
///
/// This struct is `Copy`: the signal and the stored value are arena
/// handles. The store itself is not `Send`, so it lives in local storage.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Latest store snapshot.
    pub state: RwSignal<AppState>,
    store: StoredValue<Rc<Store>, LocalStorage>,
}

impl AppContext {
    pub fn new() -> Self {
        let store = Rc::new(DriveStore::new(
            DriveApi::new(FetchTransport),
            BrowserStorage,
        ));
        // Before the first render, so the login form shows the remembered URL.
        store.restore_server_url();
        let state = RwSignal::new(store.snapshot());
        store.subscribe(move |snapshot| state.set(snapshot.clone()));

        Self {
            state,
            store: StoredValue::new_local(store),
        }
    }

    fn store(&self) -> Rc<Store> {
        self.store.get_value()
    }

    /// Restore a persisted session in the background.
    pub fn initialize_auth(&self) {
        let store = self.store();
        spawn_local(async move {
            store.initialize_auth().await;
        });
    }

    /// Failures are recorded in `state.ui.error` by the store.
    pub fn login(&self, url: String, token: String) {
        let store = self.store();
        spawn_local(async move {
            let _ = store.login(&url, &token).await;
        });
    }

    pub fn logout(&self) {
        self.store().logout();
    }

    pub fn refresh(&self) {
        let store = self.store();
        spawn_local(async move {
            let _ = store.fetch_files().await;
        });
    }

    /// Read a picked file and upload it. The outcome lands in
    /// `state.ui.upload_message`.
    pub fn upload(&self, file: web_sys::File) {
        let store = self.store();
        if store.ui().uploading {
            warn!(name = %file.name(), "upload already in progress");
            return;
        }
        spawn_local(async move {
            match read_file(&file).await {
                Ok(payload) => {
                    let _ = store.upload_file(payload).await;
                }
                Err(e) => store.record_upload_failure(e.to_string()),
            }
        });
    }

    pub fn delete(&self, file: FileRecord) {
        let store = self.store();
        spawn_local(async move {
            let _ = store.delete_file(&file).await;
        });
    }

    pub fn download_url(&self, file: &FileRecord) -> String {
        self.store().download_url(file)
    }

    pub fn select(&self, file: FileRecord) {
        self.store().set_selected_file(file);
    }

    pub fn clear_selection(&self) {
        self.store().clear_selected_file();
    }

    pub fn set_view(&self, view: View) {
        self.store().set_view(view);
    }

    pub fn toggle_sidebar(&self) {
        self.store().toggle_sidebar();
    }

    pub fn set_dragging(&self, value: bool) {
        self.store().set_dragging(value);
    }

    pub fn set_global_dragging(&self, value: bool) {
        self.store().set_global_dragging(value);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Provides the [`AppContext`], starts session restore, and shows either
/// the login form or the main shell.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.initialize_auth();

    let authenticated = Signal::derive(move || ctx.state.with(|s| s.session.is_authenticated));

    view! {
        <Show when=move || authenticated.get() fallback=|| view! { <Login /> }>
            <Shell />
        </Show>
    }
}
