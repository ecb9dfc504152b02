//! Login form.
//!
//! Collects the server URL and bearer token. The store validates the token
//! by listing files; nothing is persisted unless that succeeds.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::{APP_NAME, APP_VERSION};

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Pre-fill with the remembered (or default) server URL
    let (url, set_url) = signal(ctx.state.with_untracked(|s| s.session.server_url.clone()));
    let (token, set_token) = signal(String::new());

    let loading = Signal::derive(move || ctx.state.with(|s| s.ui.loading));
    let error = Signal::derive(move || ctx.state.with(|s| s.ui.error.clone()));
    let can_submit = Signal::derive(move || {
        !loading.get() && !url.with(|u| u.trim().is_empty()) && !token.with(|t| t.trim().is_empty())
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !can_submit.get_untracked() {
            return;
        }
        ctx.login(
            url.get_untracked().trim().to_string(),
            token.get_untracked().trim().to_string(),
        );
    };

    view! {
        <main class="login">
            <form class="login-card" on:submit=on_submit>
                <h1>{APP_NAME}</h1>
                <p class="login-version">"v" {APP_VERSION}</p>

                <label for="server-url">"Server URL"</label>
                <input
                    id="server-url"
                    type="url"
                    placeholder="http://localhost:5830"
                    prop:value=url
                    on:input=move |ev| set_url.set(event_target_value(&ev))
                />

                <label for="token">"Access token"</label>
                <input
                    id="token"
                    type="password"
                    autocomplete="off"
                    prop:value=token
                    on:input=move |ev| set_token.set(event_target_value(&ev))
                />

                <Show when=move || !error.with(|e| e.is_empty())>
                    <p class="login-error" role="alert">{error}</p>
                </Show>

                <button type="submit" disabled=move || !can_submit.get()>
                    {move || if loading.get() { "Connecting..." } else { "Connect" }}
                </button>
            </form>
        </main>
    }
}
