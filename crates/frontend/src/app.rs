use crate::domain::a001_contact_form::ui::ContactForm;
use crate::domain::a003_product_info::ui::ProductGrid;
use crate::layout::sections::{BlogSection, StatsSection};
use crate::layout::site_context::{load_site_config, SiteContext};
use crate::layout::{ModalService, Shell};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide ModalService for centralized modal management
    provide_context(ModalService::new());

    match load_site_config() {
        Ok(config) => {
            provide_context(SiteContext::new(config));

            view! {
                <Shell>
                    <ProductGrid />
                    <StatsSection />
                    <BlogSection />
                    <ContactForm />
                </Shell>
            }
            .into_any()
        }
        Err(err) => {
            log::error!("site configuration unusable: {}", err);
            view! {
                <div class="error">{format!("Site configuration error: {}", err)}</div>
            }
            .into_any()
        }
    }
}
