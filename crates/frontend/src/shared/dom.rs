//! Тонкие обёртки над браузерными API, которых нет в Leptos

use js_sys::Array;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Вызывает `on_visible` один раз, когда видимая доля элемента достигает `threshold`.
/// После срабатывания наблюдатель отключается.
pub fn observe_once(
    element: &Element,
    threshold: f64,
    on_visible: impl FnOnce() + 'static,
) -> Result<(), JsValue> {
    let mut on_visible = Some(on_visible);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if !visible {
                return;
            }
            observer.disconnect();
            if let Some(f) = on_visible.take() {
                f();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    // Живёт вместе со страницей, как и сам наблюдатель
    callback.forget();
    Ok(())
}

fn request_frame(callback: &Closure<dyn FnMut(f64)>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        log::warn!("requestAnimationFrame failed: {:?}", err);
    }
}

/// Цикл `requestAnimationFrame`. `on_frame` получает время с первого кадра (мс)
/// и возвращает `true`, пока анимацию нужно продолжать.
pub fn animate_frames(mut on_frame: impl FnMut(f64) -> bool + 'static) {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let inner = slot.clone();
    let mut started_at: Option<f64> = None;

    *slot.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        let start = *started_at.get_or_insert(timestamp);
        if on_frame(timestamp - start) {
            if let Some(callback) = inner.borrow().as_ref() {
                request_frame(callback);
            }
        } else {
            // разрываем цикл Rc, замыкание освобождается после возврата
            let _ = inner.borrow_mut().take();
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        request_frame(callback);
    };
}

/// Лежит ли цель события внутри одного из элементов
pub fn event_within(event: &web_sys::Event, elements: &[Option<Element>]) -> bool {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
        return false;
    };
    elements
        .iter()
        .flatten()
        .any(|element| element.contains(Some(&target)))
}
