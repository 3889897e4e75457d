//! Конфигурация сайта: задержки, поиск и статический контент.
//!
//! По умолчанию используется встроенный TOML. Страница может подложить свой
//! вариант; ошибки разбора возвращаются вызывающему, он сам решает, откатываться ли.

use crate::domain::a001_contact_form::FormTimings;
use crate::domain::a002_catalog_search::{Catalog, SearchEntry, MIN_QUERY_CHARS};
use crate::domain::a003_product_info::{ProductCatalog, ProductInfo};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid site config: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub site: SiteInfo,
    #[serde(default)]
    pub timings: TimingConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub catalog: Vec<SearchEntry>,
    #[serde(default)]
    pub products: Vec<ProductInfo>,
    #[serde(default)]
    pub blog: Vec<BlogPost>,
    #[serde(default)]
    pub stats: Vec<StatItem>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteInfo {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub reset_delay_ms: u32,
    pub notice_hide_ms: u32,
    pub counter_duration_ms: u32,
    /// Имитация задержки сервера при отправке формы
    pub submission_latency_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        let form = FormTimings::default();
        Self {
            reset_delay_ms: form.reset_delay_ms,
            notice_hide_ms: form.notice_hide_ms,
            counter_duration_ms: 2000,
            submission_latency_ms: 400,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub min_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: MIN_QUERY_CHARS,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BlogPost {
    pub title: String,
    #[serde(default)]
    pub date: String,
    pub excerpt: String,
    pub body: String,
}

/// Счётчик статистики; `target` хранится как атрибут страницы и разбирается при показе
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StatItem {
    pub label: String,
    pub target: String,
    #[serde(default)]
    pub suffix: String,
}

impl SiteConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.search.min_query_chars == 0 {
            return Err(ConfigError::Invalid(
                "search.min_query_chars must be at least 1".into(),
            ));
        }

        if let Some(entry) = self.catalog.iter().find(|e| e.name.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "catalog entry pointing to '{}' has an empty name",
                entry.destination
            )));
        }

        let mut seen = HashSet::new();
        for product in &self.products {
            if !seen.insert(product.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate product id '{}'",
                    product.id
                )));
            }
        }

        Ok(())
    }

    pub fn form_timings(&self) -> FormTimings {
        FormTimings {
            reset_delay_ms: self.timings.reset_delay_ms,
            notice_hide_ms: self.timings.notice_hide_ms,
        }
    }

    pub fn search_catalog(&self) -> Catalog {
        Catalog::new(self.catalog.clone())
    }

    pub fn product_catalog(&self) -> ProductCatalog {
        ProductCatalog::new(self.products.clone())
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[site]
name = "Eco Essentials"
tagline = "Sustainable products for everyday living"

[timings]
reset_delay_ms = 3000
notice_hide_ms = 5000
counter_duration_ms = 2000
submission_latency_ms = 400

[search]
min_query_chars = 2

[[catalog]]
name = "Reusable Water Bottles"
category = "Products"
destination = "products.html"

[[catalog]]
name = "Solar-Powered Chargers"
category = "Products"
destination = "products.html"

[[catalog]]
name = "Eco-Friendly Cleaning Supplies"
category = "Products"
destination = "products.html"

[[catalog]]
name = "Biodegradable Packaging"
category = "Products"
destination = "products.html"

[[catalog]]
name = "Sustainability Consulting"
category = "Services"
destination = "products.html#consulting"

[[catalog]]
name = "Reducing Plastic Waste"
category = "Blog"
destination = "blog.html"

[[catalog]]
name = "Renewable Energy"
category = "Blog"
destination = "blog.html"

[[products]]
id = "bottles"
title = "Reusable Water Bottles"
description = "Our BPA-free reusable bottles are made from sustainable materials and come in various sizes. Perfect for reducing single-use plastic waste."
price = "From R150"
features = ["BPA-free materials", "Various sizes available", "Dishwasher safe", "Insulated options"]

[[products]]
id = "chargers"
title = "Solar-Powered Chargers"
description = "Harness solar energy to charge your devices anywhere. Our chargers are efficient, portable, and perfect for outdoor adventures."
price = "From R450"
features = ["Fast charging capability", "Water resistant", "Multiple device ports", "Portable design"]

[[products]]
id = "cleaning"
title = "Eco-Friendly Cleaning Supplies"
description = "Non-toxic, biodegradable cleaning products that are safe for your family and the environment. Available in various formulations."
price = "From R80"
features = ["Non-toxic formula", "Biodegradable", "Cruelty-free", "Multiple scents available"]

[[blog]]
title = "Reducing Plastic Waste"
date = "2024-03-12"
excerpt = "Small daily swaps add up to a big difference for our oceans."
body = "Start with the items you use most: bottles, bags and food wrap. A single reusable bottle replaces hundreds of disposable ones every year, and refill stations are becoming common in most cities."

[[blog]]
title = "Renewable Energy"
date = "2024-04-02"
excerpt = "Solar power is no longer just for rooftops."
body = "Portable solar chargers make it easy to keep phones and lights running off-grid. Pair one with a small power bank and you have a reliable backup during load shedding."

[[stats]]
label = "Happy Customers"
target = "5000"
suffix = "+"

[[stats]]
label = "Plastic Bottles Saved"
target = "120000"

[[stats]]
label = "Trees Planted"
target = "2500"

[[stats]]
label = "Years of Service"
target = "8"
"#;

/// Load site configuration
///
/// Search order:
/// 1. Override supplied by the page (if present and not blank)
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> Result<SiteConfig, ConfigError> {
    if let Some(text) = override_toml.filter(|t| !t.trim().is_empty()) {
        log::info!("Loading site config from page override");
        return SiteConfig::from_toml_str(text);
    }

    log::info!("Using default embedded configuration");
    SiteConfig::from_toml_str(DEFAULT_CONFIG)
}
