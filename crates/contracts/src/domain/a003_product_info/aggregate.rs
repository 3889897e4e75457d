use serde::{Deserialize, Serialize};

/// Карточка товара для окна "подробнее"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Ключ из атрибута кнопки (`bottles`, `chargers`, ...)
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl ProductInfo {
    /// Текст подробностей в том виде, как его показывает сайт
    pub fn details_text(&self) -> String {
        format!(
            "{}\n\n{}\n\nPrice: {}\n\nKey Features:\n{}\n\nContact us for more details or to place an order.",
            self.title,
            self.description,
            self.price,
            self.features.join("\n")
        )
    }
}

/// Справочник товаров (только чтение)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductCatalog {
    products: Vec<ProductInfo>,
}

impl ProductCatalog {
    pub fn new(products: Vec<ProductInfo>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[ProductInfo] {
        &self.products
    }

    pub fn lookup(&self, id: &str) -> Option<&ProductInfo> {
        self.products.iter().find(|p| p.id == id)
    }
}

/// Ответ на кнопку "Enquire"
pub fn enquiry_message(product: &str) -> String {
    format!(
        "Thank you for your interest in our {product}! Please fill out the contact form and mention \"{product}\" in your message."
    )
}
