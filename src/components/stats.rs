//! Per-category file counts.

use leptos::prelude::*;

use crate::app::AppContext;

#[component]
pub fn StatsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let stats = Memo::new(move |_| ctx.state.with(|s| s.file_stats()));

    let rows = move || {
        let stats = stats.get();
        [
            ("Total", stats.total),
            ("Images", stats.images),
            ("Videos", stats.videos),
            ("Audio", stats.audio),
            ("Documents", stats.documents),
            ("Other", stats.other),
        ]
        .into_iter()
        .map(|(label, count)| {
            view! {
                <div class="stat">
                    <span class="stat-count">{count}</span>
                    <span class="stat-label">{label}</span>
                </div>
            }
        })
        .collect_view()
    };

    view! { <section class="stats">{rows}</section> }
}
