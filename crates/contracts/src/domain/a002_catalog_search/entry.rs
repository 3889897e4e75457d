use super::query::SearchQuery;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект нормализованному запросу
    fn matches_filter(&self, query: &SearchQuery) -> bool;
}

/// Запись каталога: что нашлось и куда ведёт ссылка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub name: String,
    pub category: String,
    pub destination: String,
}

impl SearchEntry {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            destination: destination.into(),
        }
    }

    /// Подпись категории в строке результата
    pub fn category_label(&self) -> String {
        format!("({})", self.category)
    }
}

impl Searchable for SearchEntry {
    fn matches_filter(&self, query: &SearchQuery) -> bool {
        self.name.to_lowercase().contains(query.as_str())
    }
}

/// Неизменяемый каталог; порядок записей фиксирован при загрузке
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Arc<[SearchEntry]>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Catalog {
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// Полный проход по каталогу; порядок совпадает с порядком каталога
    pub fn search(&self, query: &SearchQuery) -> Vec<SearchEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.matches_filter(query))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_catalog() -> Catalog {
        Catalog::new(vec![
            SearchEntry::new("Reusable Water Bottles", "Products", "products.html"),
            SearchEntry::new("Solar-Powered Chargers", "Products", "products.html"),
            SearchEntry::new("Eco-Friendly Cleaning Supplies", "Products", "products.html"),
            SearchEntry::new("Biodegradable Packaging", "Products", "products.html"),
            SearchEntry::new("Sustainability Consulting", "Services", "products.html#consulting"),
            SearchEntry::new("Reducing Plastic Waste", "Blog", "blog.html"),
            SearchEntry::new("Renewable Energy", "Blog", "blog.html"),
        ])
    }

    fn names(entries: &[SearchEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_search_bottle() {
        let catalog = site_catalog();
        let query = SearchQuery::parse("bottle", 2).unwrap();
        assert_eq!(names(&catalog.search(&query)), vec!["Reusable Water Bottles"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let catalog = site_catalog();
        let query = SearchQuery::parse("  RE ", 2).unwrap();
        assert_eq!(
            names(&catalog.search(&query)),
            vec![
                "Reusable Water Bottles",
                "Solar-Powered Chargers",
                "Reducing Plastic Waste",
                "Renewable Energy",
            ]
        );
    }

    #[test]
    fn test_search_no_matches() {
        let catalog = site_catalog();
        let query = SearchQuery::parse("zzz", 2).unwrap();
        assert!(catalog.search(&query).is_empty());
    }

    #[test]
    fn test_catalog_order_stable_across_queries() {
        let catalog = site_catalog();
        for raw in ["ab", "ing", "e", "le", "s"] {
            let Some(query) = SearchQuery::parse(raw, 1) else { continue };
            let found = catalog.search(&query);
            let positions: Vec<usize> = found
                .iter()
                .map(|f| catalog.entries.iter().position(|e| e == f).unwrap())
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(positions, sorted, "query {raw:?}");
        }
    }

    #[test]
    fn test_category_label() {
        let entry = SearchEntry::new("Renewable Energy", "Blog", "blog.html");
        assert_eq!(entry.category_label(), "(Blog)");
    }
}
