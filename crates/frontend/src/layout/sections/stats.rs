use crate::layout::site_context::use_site;
use crate::shared::components::StatCounter;
use leptos::prelude::*;

#[component]
pub fn StatsSection() -> impl IntoView {
    let site = use_site();
    let duration_ms = site.config.timings.counter_duration_ms;
    let stats = site.config.stats.clone();

    view! {
        <section id="impact" class="stats-section">
            <h2>"Our Impact"</h2>
            <div class="stats-grid">
                {stats
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <StatCounter
                                label=stat.label
                                target=stat.target
                                suffix=stat.suffix
                                duration_ms=duration_ms
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
