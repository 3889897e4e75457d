pub mod components;
pub mod dispatch;
pub mod dom;
