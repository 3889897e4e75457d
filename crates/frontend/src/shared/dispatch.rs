//! Связка редьюсеров из `contracts` с реактивностью Leptos.
//!
//! Состояние лежит в `RwSignal`, команды исполняет переданный обработчик,
//! а таймеры превращаются в `gloo_timers::future::TimeoutFuture`.

use contracts::shared::dispatch::{Effect, Reducer};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub struct EventLoop<R>
where
    R: Reducer + Send + Sync + 'static,
{
    state: RwSignal<R>,
    perform: Callback<(EventLoop<R>, R::Command)>,
}

impl<R> Clone for EventLoop<R>
where
    R: Reducer + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for EventLoop<R> where R: Reducer + Send + Sync + 'static {}

impl<R> EventLoop<R>
where
    R: Reducer + Send + Sync + 'static,
    R::Event: 'static,
    R::Command: 'static,
{
    /// `perform` получает сам цикл, чтобы асинхронные команды могли вернуть событие
    pub fn new(
        initial: R,
        perform: impl Fn(EventLoop<R>, R::Command) + Send + Sync + 'static,
    ) -> Self {
        Self {
            state: RwSignal::new(initial),
            perform: Callback::new(move |(handle, command)| perform(handle, command)),
        }
    }

    pub fn state(&self) -> ReadSignal<R> {
        self.state.read_only()
    }

    /// Обработать событие. После уничтожения компонента события молча отбрасываются.
    pub fn send(self, event: R::Event) {
        let Some(transition) = self.state.try_with_untracked(|state| state.reduce(event)) else {
            log::debug!("event dropped: component is gone");
            return;
        };
        self.state.set(transition.state);

        for effect in transition.effects {
            match effect {
                Effect::Command(command) => self.perform.run((self, command)),
                Effect::Timer { delay_ms, event } => spawn_local(async move {
                    TimeoutFuture::new(delay_ms).await;
                    self.send(event);
                }),
            }
        }
    }
}
