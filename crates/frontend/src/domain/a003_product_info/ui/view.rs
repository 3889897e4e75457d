use crate::layout::modal_service::use_modal;
use crate::layout::site_context::use_site;
use crate::layout::ModalContent;
use crate::shared::components::RevealCard;
use contracts::domain::a003_product_info::{enquiry_message, ProductInfo};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Задержка между появлением соседних карточек
const STAGGER_MS: u32 = 80;

#[component]
pub fn ProductGrid() -> impl IntoView {
    let site = use_site();
    let products = site.products.products().to_vec();

    view! {
        <section id="products" class="products-section">
            <h2>"Our Products"</h2>
            <div class="product-grid">
                {products
                    .into_iter()
                    .enumerate()
                    .map(|(i, product)| {
                        view! {
                            <RevealCard class="product-card" delay_ms={i as u32 * STAGGER_MS}>
                                <ProductCard product=product />
                            </RevealCard>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: ProductInfo) -> impl IntoView {
    let site = use_site();
    let modal = use_modal();
    let id = product.id.clone();

    // Подробности берутся из справочника по ключу кнопки, как у статической разметки
    let show_details = {
        let id = id.clone();
        move |_: leptos::ev::MouseEvent| match site.products.lookup(&id) {
            Some(info) => modal.show(ModalContent::text(info.details_text())),
            None => log::warn!("no product info for '{}'", id),
        }
    };
    let enquire = move |_: leptos::ev::MouseEvent| {
        modal.show(ModalContent::titled("Product enquiry", enquiry_message(&id)));
    };

    view! {
        <div class="product-card__body" data-product=product.id.clone()>
            <h3>{product.title}</h3>
            <p class="product-card__price">{product.price}</p>
            <div class="product-card__actions">
                <Button appearance=ButtonAppearance::Primary on_click=show_details>
                    "Learn More"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=enquire>
                    "Enquire"
                </Button>
            </div>
        </div>
    }
}
