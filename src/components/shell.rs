//! Authenticated layout.
//!
//! Sidebar on the left, the current view on the right. Dragging files
//! anywhere over the window raises the global drag flag so the upload zone
//! can highlight itself.

use leptos::prelude::*;
use leptos_icons::Icon;
use privafile_core::View;

use super::icons as ic;
use super::{FileList, Preview, SettingsPanel, Sidebar, StatsPanel, UploadZone};
use crate::app::AppContext;

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let sidebar_open = Signal::derive(move || ctx.state.with(|s| s.ui.sidebar_open));
    let current_view = Signal::derive(move || ctx.state.with(|s| s.ui.current_view));
    let global_dragging = Signal::derive(move || ctx.state.with(|s| s.ui.global_dragging));
    let error = Signal::derive(move || ctx.state.with(|s| s.ui.error.clone()));
    let has_selection = Signal::derive(move || ctx.state.with(|s| s.ui.selected_file.is_some()));

    let on_dragenter = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ctx.set_global_dragging(true);
    };
    let on_dragleave = move |ev: leptos::ev::DragEvent| {
        // Leaving into a child element still counts as inside the window
        if ev.related_target().is_none() {
            ctx.set_global_dragging(false);
        }
    };
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ctx.set_global_dragging(false);
    };

    view! {
        <div
            class=move || if global_dragging.get() { "shell shell-dragging" } else { "shell" }
            on:dragenter=on_dragenter
            on:dragleave=on_dragleave
            on:dragover=|ev: leptos::ev::DragEvent| ev.prevent_default()
            on:drop=on_drop
        >
            <Show when=move || sidebar_open.get()>
                <Sidebar />
            </Show>

            <main class="content">
                <header class="content-header">
                    <button
                        class="icon-button"
                        title="Toggle sidebar"
                        on:click=move |_| ctx.toggle_sidebar()
                    >
                        <Icon icon=ic::MENU />
                    </button>
                    <h2>{move || current_view.get().label()}</h2>
                    <button
                        class="icon-button"
                        title="Refresh"
                        on:click=move |_| ctx.refresh()
                    >
                        <Icon icon=ic::REFRESH />
                    </button>
                </header>

                <Show when=move || !error.with(|e| e.is_empty())>
                    <p class="error-banner" role="alert">{error}</p>
                </Show>

                {move || match current_view.get() {
                    View::Files => view! {
                        <div class="files-view">
                            <FileList />
                            <Show when=move || has_selection.get()>
                                <Preview />
                            </Show>
                        </div>
                    }.into_any(),
                    View::Upload => view! { <UploadZone /> }.into_any(),
                    View::Stats => view! { <StatsPanel /> }.into_any(),
                    View::Settings => view! { <SettingsPanel /> }.into_any(),
                }}
            </main>
        </div>
    }
}
