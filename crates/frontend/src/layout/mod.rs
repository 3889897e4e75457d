pub mod footer;
pub mod header;
pub mod modal_service;
pub mod sections;
pub mod site_context;

pub use modal_service::{Modal, ModalContent, ModalService};

use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Каркас страницы.
///
/// ```text
/// +------------------------------------------+
/// |        Header (название + поиск)          |
/// +------------------------------------------+
/// |               секции                      |
/// +------------------------------------------+
/// |                Footer                     |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="site-layout">
            <Header />
            <main class="site-main">{children()}</main>
            <Footer />
            <Modal />
        </div>
    }
}
