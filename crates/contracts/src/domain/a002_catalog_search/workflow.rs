use super::entry::{Catalog, SearchEntry};
use super::query::{SearchQuery, MIN_QUERY_CHARS};
use crate::shared::dispatch::{Reducer, Transition};
use std::convert::Infallible;

pub const NO_RESULTS_MESSAGE: &str = "No results found. Try different keywords.";

/// Что показывает панель результатов
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchResults {
    #[default]
    Hidden,
    NoResults,
    Matches(Vec<SearchEntry>),
}

#[derive(Debug, Clone)]
pub enum SearchEvent {
    /// Новое значение поля ввода
    InputChanged(String),
    /// Клик вне поля ввода и панели
    ClickedOutside,
}

/// Состояние строки поиска с выпадающими результатами
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPanelState {
    catalog: Catalog,
    min_chars: usize,
    /// Текст поля ввода как есть (не нормализованный)
    pub input: String,
    pub query: Option<SearchQuery>,
    pub results: SearchResults,
    pub open: bool,
}

impl SearchPanelState {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_min_chars(catalog, MIN_QUERY_CHARS)
    }

    pub fn with_min_chars(catalog: Catalog, min_chars: usize) -> Self {
        Self {
            catalog,
            min_chars,
            input: String::new(),
            query: None,
            results: SearchResults::Hidden,
            open: false,
        }
    }

    /// Панель видна, только если открыта и есть что показать
    pub fn is_visible(&self) -> bool {
        self.open && self.results != SearchResults::Hidden
    }

    fn on_input(&self, raw: String) -> Self {
        let query = SearchQuery::parse(&raw, self.min_chars);
        let results = match &query {
            None => SearchResults::Hidden,
            Some(query) => {
                let found = self.catalog.search(query);
                if found.is_empty() {
                    SearchResults::NoResults
                } else {
                    SearchResults::Matches(found)
                }
            }
        };

        Self {
            catalog: self.catalog.clone(),
            min_chars: self.min_chars,
            input: raw,
            open: query.is_some(),
            query,
            results,
        }
    }
}

impl Reducer for SearchPanelState {
    type Event = SearchEvent;
    type Command = Infallible;

    fn reduce(&self, event: SearchEvent) -> Transition<Self> {
        match event {
            SearchEvent::InputChanged(raw) => Transition::quiet(self.on_input(raw)),
            SearchEvent::ClickedOutside => Transition::quiet(Self {
                open: false,
                ..self.clone()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dispatch::Dispatcher;

    fn panel() -> Dispatcher<SearchPanelState> {
        Dispatcher::new(SearchPanelState::new(Catalog::new(vec![
            SearchEntry::new("Reusable Water Bottles", "Products", "products.html"),
            SearchEntry::new("Solar-Powered Chargers", "Products", "products.html"),
            SearchEntry::new("Renewable Energy", "Blog", "blog.html"),
        ])))
    }

    #[test]
    fn test_short_query_hides_panel() {
        let mut panel = panel();
        panel.dispatch(SearchEvent::InputChanged("so".into()));
        assert!(panel.state().is_visible());

        panel.dispatch(SearchEvent::InputChanged("s".into()));
        assert!(!panel.state().is_visible());
        assert_eq!(panel.state().results, SearchResults::Hidden);
        assert_eq!(panel.state().input, "s");

        panel.dispatch(SearchEvent::InputChanged(String::new()));
        assert_eq!(panel.state().results, SearchResults::Hidden);
    }

    #[test]
    fn test_matches_in_catalog_order() {
        let mut panel = panel();
        let effects = panel.dispatch(SearchEvent::InputChanged("RE".into()));
        assert!(effects.is_empty());

        let SearchResults::Matches(found) = &panel.state().results else {
            panic!("expected matches, got {:?}", panel.state().results);
        };
        let names: Vec<_> = found.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Reusable Water Bottles", "Solar-Powered Chargers", "Renewable Energy"]
        );
    }

    #[test]
    fn test_no_results_notice() {
        let mut panel = panel();
        panel.dispatch(SearchEvent::InputChanged("zzz".into()));
        assert!(panel.state().is_visible());
        assert_eq!(panel.state().results, SearchResults::NoResults);
    }

    #[test]
    fn test_click_outside_keeps_query() {
        let mut panel = panel();
        panel.dispatch(SearchEvent::InputChanged("bottle".into()));
        panel.dispatch(SearchEvent::ClickedOutside);

        assert!(!panel.state().is_visible());
        assert_eq!(panel.state().input, "bottle");
        assert!(matches!(panel.state().results, SearchResults::Matches(_)));

        panel.dispatch(SearchEvent::InputChanged("bottles".into()));
        assert!(panel.state().is_visible());
    }

    #[test]
    fn test_custom_minimum() {
        let mut panel = Dispatcher::new(SearchPanelState::with_min_chars(
            Catalog::new(vec![SearchEntry::new("Renewable Energy", "Blog", "blog.html")]),
            4,
        ));
        panel.dispatch(SearchEvent::InputChanged("ene".into()));
        assert!(!panel.state().is_visible());
        panel.dispatch(SearchEvent::InputChanged("ener".into()));
        assert!(panel.state().is_visible());
    }
}
