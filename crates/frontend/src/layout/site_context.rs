use contracts::domain::a002_catalog_search::Catalog;
use contracts::domain::a003_product_info::ProductCatalog;
use contracts::shared::config::{load_config, ConfigError, SiteConfig};
use leptos::prelude::*;
use std::sync::Arc;

/// id элемента `<script type="application/toml">` с переопределением конфигурации
const CONFIG_ELEMENT_ID: &str = "site-config";

/// Неизменяемые данные сайта, доступные всем компонентам через context
#[derive(Clone)]
pub struct SiteContext {
    pub config: Arc<SiteConfig>,
    pub catalog: Catalog,
    pub products: Arc<ProductCatalog>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        let catalog = config.search_catalog();
        let products = Arc::new(config.product_catalog());
        Self {
            config: Arc::new(config),
            catalog,
            products,
        }
    }
}

/// Hook to access site data
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext not provided in context")
}

fn page_override() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Конфигурация со страницы, при ошибке — встроенная
pub fn load_site_config() -> Result<SiteConfig, ConfigError> {
    let override_text = page_override();
    match load_config(override_text.as_deref()) {
        Ok(config) => Ok(config),
        Err(err) if override_text.is_some() => {
            log::error!("{}; falling back to embedded config", err);
            load_config(None)
        }
        Err(err) => Err(err),
    }
}
