//! Статические секции страницы, собранные из конфигурации сайта

mod blog;
mod stats;

pub use blog::BlogSection;
pub use stats::StatsSection;
