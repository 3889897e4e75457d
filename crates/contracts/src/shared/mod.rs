pub mod animation;
pub mod config;
pub mod dispatch;
pub mod number_format;
