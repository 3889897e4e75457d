use crate::layout::site_context::use_site;
use crate::shared::dispatch::EventLoop;
use crate::shared::dom::event_within;
use contracts::domain::a002_catalog_search::{
    highlight_segments, SearchEntry, SearchEvent, SearchPanelState, SearchQuery, SearchResults,
    NO_RESULTS_MESSAGE,
};
use leptos::prelude::*;

/// Строка поиска по каталогу с выпадающим списком результатов
#[component]
pub fn SearchBox() -> impl IntoView {
    let site = use_site();
    let events = EventLoop::new(
        SearchPanelState::with_min_chars(
            site.catalog.clone(),
            site.config.search.min_query_chars,
        ),
        |_, never| match never {},
    );
    let state = events.state();

    let input_ref = NodeRef::<leptos::html::Input>::new();
    let panel_ref = NodeRef::<leptos::html::Div>::new();

    // Клик вне поля и панели закрывает панель, текст запроса остаётся
    let outside_click = window_event_listener(leptos::ev::click, move |ev: leptos::ev::MouseEvent| {
        let open = state.try_with_untracked(|s| s.open).unwrap_or(false);
        if !open {
            return;
        }
        let inside = event_within(
            &ev,
            &[
                input_ref.get_untracked().map(Into::into),
                panel_ref.get_untracked().map(Into::into),
            ],
        );
        if !inside {
            events.send(SearchEvent::ClickedOutside);
        }
    });
    on_cleanup(move || outside_click.remove());

    view! {
        <div class="search-box">
            <input
                type="search"
                id="searchInput"
                placeholder="Search products, services, articles..."
                autocomplete="off"
                node_ref=input_ref
                prop:value=move || state.with(|s| s.input.clone())
                on:input=move |ev| events.send(SearchEvent::InputChanged(event_target_value(&ev)))
            />
            <div
                id="searchResults"
                class="search-results"
                node_ref=panel_ref
                style=move || {
                    if state.with(|s| s.is_visible()) { "display: block;" } else { "display: none;" }
                }
            >
                {move || state.with(render_results)}
            </div>
        </div>
    }
}

fn render_results(state: &SearchPanelState) -> AnyView {
    match &state.results {
        SearchResults::Hidden => view! { <></> }.into_any(),
        SearchResults::NoResults => view! { <p>{NO_RESULTS_MESSAGE}</p> }.into_any(),
        SearchResults::Matches(entries) => view! {
            <ul>
                {entries
                    .iter()
                    .map(|entry| result_row(entry, state.query.as_ref()))
                    .collect_view()}
            </ul>
        }
        .into_any(),
    }
}

fn result_row(entry: &SearchEntry, query: Option<&SearchQuery>) -> impl IntoView {
    let name = match query {
        Some(query) => highlight_segments(&entry.name, query)
            .into_iter()
            .map(|(text, hit)| {
                if hit {
                    view! { <mark>{text}</mark> }.into_any()
                } else {
                    view! { <span>{text}</span> }.into_any()
                }
            })
            .collect_view()
            .into_any(),
        None => view! { <span>{entry.name.clone()}</span> }.into_any(),
    };

    view! {
        <li>
            <a href=entry.destination.clone()>
                {name}
                " "
                <span class="category">{entry.category_label()}</span>
            </a>
        </li>
    }
}
