pub mod a001_contact_form;
pub mod a002_catalog_search;
pub mod a003_product_info;
