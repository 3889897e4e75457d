//! Поиск по каталогу сайта: записи, нормализация запроса, фильтрация и
//! состояние выпадающей панели результатов.

pub mod entry;
pub mod query;
pub mod workflow;

pub use entry::{Catalog, SearchEntry, Searchable};
pub use query::{highlight_segments, SearchQuery, MIN_QUERY_CHARS};
pub use workflow::{SearchEvent, SearchPanelState, SearchResults, NO_RESULTS_MESSAGE};
