//! RevealCard — обёртка над Thaw Card с появлением при прокрутке.
//!
//! Карточка скрыта (`opacity: 0`, сдвиг вниз на 20px), пока в viewport не
//! попадёт 10% её площади, после чего плавно проявляется и больше не прячется.
//!
//! # Пример
//! ```rust,ignore
//! // С каскадной задержкой для stagger-эффекта
//! <RevealCard delay_ms=0>   // карточка 1
//! <RevealCard delay_ms=80>  // карточка 2
//! ```

use crate::shared::dom::observe_once;
use contracts::shared::animation::{RevealState, REVEAL_VISIBILITY_THRESHOLD};
use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn RevealCard(
    /// Задержка перехода в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// CSS-класс обёртки (`product-card`, `blog-post`, ...).
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let state = RwSignal::new(RevealState::default());
    let node = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        let Some(element) = node.get() else { return };
        let reveal = move || state.update(|s| {
            s.observe(true);
        });
        if let Err(err) = observe_once(&element, REVEAL_VISIBILITY_THRESHOLD, reveal) {
            // без IntersectionObserver просто показываем карточку
            log::warn!("IntersectionObserver unavailable: {:?}", err);
            reveal();
        }
    });

    let style = move || {
        format!(
            "{} transition-delay: {}ms;",
            state.get().style(),
            delay_ms
        )
    };

    view! {
        <div node_ref=node class=class style=style>
            <Card>
                {children()}
            </Card>
        </div>
    }
}
