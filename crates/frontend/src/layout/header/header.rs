use crate::domain::a002_catalog_search::ui::SearchBox;
use crate::layout::site_context::use_site;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let site = use_site();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">{site.config.site.name.clone()}</span>
                <span class="header__tagline">{site.config.site.tagline.clone()}</span>
            </div>
            <nav class="header__nav">
                <a href="#products">"Products"</a>
                <a href="#blog">"Blog"</a>
                <a href="#contact">"Contact"</a>
            </nav>
            <div class="header__actions">
                <SearchBox />
            </div>
        </header>
    }
}
