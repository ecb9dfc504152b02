//! Navigation sidebar with a file count summary and logout.

use leptos::prelude::*;
use leptos_icons::Icon;
use privafile_core::View;

use super::icons as ic;
use crate::app::AppContext;
use crate::config::APP_NAME;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let server_url = Signal::derive(move || ctx.state.with(|s| s.session.server_url.clone()));
    let total = Signal::derive(move || ctx.state.with(|s| s.files.len()));

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <strong>{APP_NAME}</strong>
                <span class="sidebar-server" title=server_url>{server_url}</span>
            </div>

            <nav class="sidebar-nav">
                {View::ALL
                    .into_iter()
                    .map(move |item| {
                        let is_active = Signal::derive(move || {
                            ctx.state.with(|s| s.ui.current_view == item)
                        });
                        view! {
                            <button
                                class=move || if is_active.get() { "nav-item nav-item-active" } else { "nav-item" }
                                on:click=move |_| ctx.set_view(item)
                            >
                                <Icon icon=ic::for_view(item) />
                                <span>{item.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <p class="sidebar-count">{move || format!("{} file(s)", total.get())}</p>

            <button class="nav-item sidebar-logout" on:click=move |_| ctx.logout()>
                <Icon icon=ic::LOGOUT />
                <span>"Log out"</span>
            </button>
        </aside>
    }
}
