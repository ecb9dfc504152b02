//! Upload drop zone.
//!
//! Accepts one file per drop or pick; concurrent uploads are not queued.

use leptos::prelude::*;
use web_sys::{FileList, HtmlInputElement};

use crate::app::AppContext;

fn first_file(files: Option<FileList>) -> Option<web_sys::File> {
    files.and_then(|list| list.get(0))
}

#[component]
pub fn UploadZone() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_dragging = Signal::derive(move || ctx.state.with(|s| s.ui.is_dragging));
    let global_dragging = Signal::derive(move || ctx.state.with(|s| s.ui.global_dragging));
    let uploading = Signal::derive(move || ctx.state.with(|s| s.ui.uploading));
    let message = Signal::derive(move || ctx.state.with(|s| s.ui.upload_message.clone()));
    let success = Signal::derive(move || ctx.state.with(|s| s.ui.upload_success));

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if !is_dragging.get_untracked() {
            ctx.set_dragging(true);
        }
    };
    let on_dragleave = move |_: leptos::ev::DragEvent| ctx.set_dragging(false);
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ctx.set_dragging(false);
        ctx.set_global_dragging(false);
        if uploading.get_untracked() {
            return;
        }
        if let Some(file) = first_file(ev.data_transfer().and_then(|dt| dt.files())) {
            ctx.upload(file);
        }
    };
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = first_file(input.files()) {
            ctx.upload(file);
        }
        // Allow picking the same file again
        input.set_value("");
    };

    let zone_class = move || {
        if is_dragging.get() {
            "drop-zone drop-zone-active"
        } else if global_dragging.get() {
            "drop-zone drop-zone-hint"
        } else {
            "drop-zone"
        }
    };

    view! {
        <section class="upload">
            <label
                class=zone_class
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <input
                    type="file"
                    class="visually-hidden"
                    disabled=move || uploading.get()
                    on:change=on_change
                />
                {move || if uploading.get() {
                    "Uploading..."
                } else {
                    "Drop a file here or click to choose one"
                }}
            </label>

            <Show when=move || !message.with(|m| m.is_empty())>
                <p
                    class=move || if success.get() { "upload-message upload-ok" } else { "upload-message upload-error" }
                    role="status"
                >
                    {message}
                </p>
            </Show>
        </section>
    }
}
