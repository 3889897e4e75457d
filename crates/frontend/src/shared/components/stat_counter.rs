use crate::shared::dom::{animate_frames, observe_once};
use contracts::shared::animation::{parse_target, CounterAnimation, COUNTER_VISIBILITY_THRESHOLD};
use contracts::shared::number_format::format_count;
use leptos::prelude::*;

#[component]
pub fn StatCounter(
    /// Label displayed below the number
    label: String,
    /// Raw target attribute; parsed like `parseInt`
    target: String,
    /// Optional text after the number (e.g. "+")
    #[prop(optional, into)]
    suffix: String,
    /// Animation length
    duration_ms: u32,
) -> impl IntoView {
    let end = parse_target(&target);
    if end.is_none() {
        log::warn!("stat '{}' has non-numeric target '{}'", label, target);
    }

    let text = RwSignal::new(match end {
        Some(_) => format_count(0),
        None => target,
    });
    let node = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        let (Some(element), Some(end)) = (node.get(), end) else {
            return;
        };
        let animation = CounterAnimation::to_target(end, f64::from(duration_ms));
        let run = move || {
            animate_frames(move |elapsed| {
                // компонент мог исчезнуть посреди анимации
                text.try_set(animation.text_at(elapsed)).is_none()
                    && !animation.is_finished(elapsed)
            })
        };
        if let Err(err) = observe_once(&element, COUNTER_VISIBILITY_THRESHOLD, run) {
            log::warn!("IntersectionObserver unavailable: {:?}", err);
            text.set(animation.text_at(f64::from(duration_ms)));
        }
    });

    view! {
        <div class="stat-card" node_ref=node>
            <div class="stat-card__value stat-number">
                {move || text.get()}
                {suffix}
            </div>
            <div class="stat-card__label">{label}</div>
        </div>
    }
}
