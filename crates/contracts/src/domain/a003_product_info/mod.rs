pub mod aggregate;

pub use aggregate::{enquiry_message, ProductCatalog, ProductInfo};
