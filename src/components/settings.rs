//! Connection details for the current session.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::icons as ic;
use crate::app::AppContext;

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let server_url = Signal::derive(move || ctx.state.with(|s| s.session.server_url.clone()));

    view! {
        <section class="settings">
            <dl>
                <dt>"Server"</dt>
                <dd class="mono">{server_url}</dd>
            </dl>
            <p class="settings-hint">
                "Logging out forgets the token; the server address is remembered."
            </p>
            <button class="button" on:click=move |_| ctx.logout()>
                <Icon icon=ic::LOGOUT />
                " Log out"
            </button>
        </section>
    }
}
