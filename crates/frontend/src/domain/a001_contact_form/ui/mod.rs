//! Contact Form UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: field layout and the submission gateway
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use model::SimulatedGateway;
pub use view::ContactForm;
pub use view_model::ContactFormViewModel;
