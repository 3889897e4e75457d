//! Однопоточный цикл обработки событий.
//!
//! Каждый компонент описывается как [`Reducer`]: чистая функция
//! `(состояние, событие) -> (новое состояние, эффекты)`. Эффекты бывают двух
//! видов: команда для слоя отображения и отложенное событие (таймер).
//! Исполнение эффектов — забота окружения (frontend или тестовый стенд).

use std::fmt::Debug;

/// Эффект, который окружение должно выполнить после перехода
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<E, C> {
    /// Команда для слоя отображения
    Command(C),
    /// Доставить `event` обратно в редьюсер через `delay_ms` миллисекунд
    Timer { delay_ms: u32, event: E },
}

/// Результат обработки одного события
#[derive(Debug, Clone)]
pub struct Transition<R: Reducer> {
    pub state: R,
    pub effects: Vec<Effect<R::Event, R::Command>>,
}

impl<R: Reducer> Transition<R> {
    /// Переход без эффектов
    pub fn quiet(state: R) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn command(mut self, command: R::Command) -> Self {
        self.effects.push(Effect::Command(command));
        self
    }

    pub fn timer(mut self, delay_ms: u32, event: R::Event) -> Self {
        self.effects.push(Effect::Timer { delay_ms, event });
        self
    }
}

/// Компонент, управляемый событиями
pub trait Reducer: Clone + Sized {
    type Event: Clone + Debug;
    type Command: Clone + Debug;

    fn reduce(&self, event: Self::Event) -> Transition<Self>;
}

/// Хранит текущее состояние и применяет события строго по одному
#[derive(Debug, Clone)]
pub struct Dispatcher<R: Reducer> {
    state: R,
}

impl<R: Reducer> Dispatcher<R> {
    pub fn new(state: R) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &R {
        &self.state
    }

    /// Применить событие и вернуть эффекты для исполнения
    pub fn dispatch(&mut self, event: R::Event) -> Vec<Effect<R::Event, R::Command>> {
        let Transition { state, effects } = self.state.reduce(event);
        self.state = state;
        effects
    }
}

/// Тестовый стенд: диспетчер + ручные часы вместо таймеров браузера
#[cfg(test)]
pub(crate) struct ManualClock<R: Reducer> {
    pub dispatcher: Dispatcher<R>,
    now_ms: u64,
    seq: u64,
    pending: Vec<(u64, u64, R::Event)>,
}

#[cfg(test)]
impl<R: Reducer> ManualClock<R> {
    pub fn new(state: R) -> Self {
        Self {
            dispatcher: Dispatcher::new(state),
            now_ms: 0,
            seq: 0,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> &R {
        self.dispatcher.state()
    }

    /// Отправить событие; таймеры откладываются, команды возвращаются
    pub fn send(&mut self, event: R::Event) -> Vec<R::Command> {
        let effects = self.dispatcher.dispatch(event);
        self.absorb(effects)
    }

    /// Сдвинуть время и доставить все созревшие таймеры по порядку
    pub fn advance(&mut self, ms: u64) -> Vec<R::Command> {
        let target = self.now_ms + ms;
        let mut commands = Vec::new();
        loop {
            let next = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, (due, _, _))| *due <= target)
                .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                .map(|(idx, _)| idx);
            let Some(idx) = next else { break };
            let (due, _, event) = self.pending.remove(idx);
            self.now_ms = due;
            commands.extend(self.send(event));
        }
        self.now_ms = target;
        commands
    }

    pub fn pending_timers(&self) -> usize {
        self.pending.len()
    }

    fn absorb(&mut self, effects: Vec<Effect<R::Event, R::Command>>) -> Vec<R::Command> {
        let mut commands = Vec::new();
        for effect in effects {
            match effect {
                Effect::Command(command) => commands.push(command),
                Effect::Timer { delay_ms, event } => {
                    self.seq += 1;
                    self.pending
                        .push((self.now_ms + u64::from(delay_ms), self.seq, event));
                }
            }
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Counter(u32);

    #[derive(Debug, Clone, PartialEq)]
    enum Tick {
        Bump,
        BumpLater(u32),
    }

    impl Reducer for Counter {
        type Event = Tick;
        type Command = u32;

        fn reduce(&self, event: Tick) -> Transition<Self> {
            match event {
                Tick::Bump => Transition::quiet(Counter(self.0 + 1)).command(self.0 + 1),
                Tick::BumpLater(ms) => Transition::quiet(self.clone()).timer(ms, Tick::Bump),
            }
        }
    }

    #[test]
    fn test_dispatcher_applies_events_in_order() {
        let mut dispatcher = Dispatcher::new(Counter(0));
        dispatcher.dispatch(Tick::Bump);
        let effects = dispatcher.dispatch(Tick::Bump);

        assert_eq!(dispatcher.state(), &Counter(2));
        assert_eq!(effects, vec![Effect::Command(2)]);
    }

    #[test]
    fn test_manual_clock_fires_timers_by_due_time() {
        let mut clock = ManualClock::new(Counter(0));
        assert!(clock.send(Tick::BumpLater(500)).is_empty());
        assert!(clock.send(Tick::BumpLater(100)).is_empty());
        assert_eq!(clock.pending_timers(), 2);

        assert!(clock.advance(99).is_empty());
        assert_eq!(clock.advance(1), vec![1]);
        assert_eq!(clock.advance(1000), vec![2]);
        assert_eq!(clock.pending_timers(), 0);
    }
}
