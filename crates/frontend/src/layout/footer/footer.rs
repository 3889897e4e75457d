use crate::layout::site_context::use_site;
use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let year = chrono::Utc::now().year();

    view! {
        <footer data-zone="footer" class="site-footer">
            <span>{format!("© {} {}", year, site.config.site.name)}</span>
        </footer>
    }
}
