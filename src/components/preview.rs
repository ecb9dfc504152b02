//! Details and inline preview of the selected file.

use leptos::prelude::*;
use leptos_icons::Icon;
use privafile_core::FileCategory;
use privafile_core::format::{display_name, format_file_size};
use privafile_core::mime::mime_label;

use super::icons as ic;
use crate::app::AppContext;

#[component]
pub fn Preview() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let selected = Signal::derive(move || ctx.state.with(|s| s.ui.selected_file.clone()));

    move || {
        selected.get().map(|file| {
            let url = ctx.download_url(&file);
            let name = file.name.clone().unwrap_or_else(|| display_name(&file));
            let size = file.size.map(format_file_size);
            let hash = file.hash.clone();

            let media = match file.category() {
                FileCategory::Image => view! { <img class="preview-media" src=url.clone() alt=name.clone() /> }.into_any(),
                FileCategory::Video => view! { <video class="preview-media" src=url.clone() controls=true></video> }.into_any(),
                FileCategory::Audio => view! { <audio src=url.clone() controls=true></audio> }.into_any(),
                _ => view! { <Icon icon=ic::for_mime(&file.mime) /> }.into_any(),
            };

            let to_delete = file.clone();
            view! {
                <aside class="preview">
                    <header class="preview-header">
                        <h3>{name}</h3>
                        <button
                            class="icon-button"
                            title="Close"
                            on:click=move |_| ctx.clear_selection()
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </header>

                    {media}

                    <dl class="preview-meta">
                        <dt>"Id"</dt>
                        <dd>{file.id.clone()}</dd>
                        <dt>"Type"</dt>
                        <dd>{mime_label(&file.mime)} " (" {file.mime.clone()} ")"</dd>
                        {size.map(|size| view! { <dt>"Size"</dt><dd>{size}</dd> })}
                        {hash.map(|hash| view! { <dt>"Hash"</dt><dd class="mono">{hash}</dd> })}
                    </dl>

                    <div class="preview-actions">
                        <a class="button" href=url target="_blank" rel="noopener">
                            <Icon icon=ic::DOWNLOAD />
                            " Download"
                        </a>
                        <button
                            class="button button-danger"
                            on:click=move |_| ctx.delete(to_delete.clone())
                        >
                            <Icon icon=ic::DELETE />
                            " Delete"
                        </button>
                    </div>
                </aside>
            }
        })
    }
}
