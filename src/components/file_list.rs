//! File list for the files view.

use leptos::prelude::*;
use leptos_icons::Icon;
use privafile_core::FileRecord;
use privafile_core::format::{display_name, format_file_size};
use privafile_core::mime::{file_color, mime_badge_class, mime_label};

use super::icons as ic;
use crate::app::AppContext;

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let files = Signal::derive(move || ctx.state.with(|s| s.files.clone()));
    let loading = Signal::derive(move || ctx.state.with(|s| s.ui.loading));

    view! {
        <div class="file-list" role="grid" aria-label="File list">
            <Show
                when=move || !files.with(|f| f.is_empty())
                fallback=move || view! {
                    <p class="file-list-empty">
                        {move || if loading.get() { "Loading files..." } else { "No files yet" }}
                    </p>
                }
            >
                <For
                    each=move || files.get()
                    key=|file| file.id.clone()
                    children=move |file| view! { <FileRow file=file /> }
                />
            </Show>
        </div>
    }
}

#[component]
fn FileRow(file: FileRecord) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = file.id.clone();
    let is_selected = Signal::derive(move || {
        ctx.state.with(|s| s.ui.selected_file.as_ref().is_some_and(|f| f.id == id))
    });

    let icon = ic::for_mime(&file.mime);
    let color = file_color(&file.mime);
    let badge = format!("badge {}", mime_badge_class(&file.mime));
    let label = mime_label(&file.mime);
    let name = file.name.clone().unwrap_or_else(|| display_name(&file));
    let size = file.size.map(format_file_size).unwrap_or_else(|| "-".to_string());
    let title = file.id.clone();

    let row_class = move || {
        if is_selected.get() {
            "file-row file-row-selected"
        } else {
            "file-row"
        }
    };

    view! {
        <div
            class=row_class
            role="row"
            aria-selected=move || is_selected.get().to_string()
            title=title
            on:click=move |_| ctx.select(file.clone())
        >
            <span class=color><Icon icon=icon /></span>
            <span class="file-name">{name}</span>
            <span class=badge>{label}</span>
            <span class="file-size">{size}</span>
        </div>
    }
}
