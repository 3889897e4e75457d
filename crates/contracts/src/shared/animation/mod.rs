//! Состояния простых анимаций и переключателей страницы.
//!
//! Всё здесь — чистые значения; таймеры, `requestAnimationFrame` и
//! `IntersectionObserver` подключает frontend.

mod counter;
mod read_more;
mod reveal;

pub use counter::{parse_target, CounterAnimation, COUNTER_VISIBILITY_THRESHOLD};
pub use read_more::ReadMoreState;
pub use reveal::{RevealState, REVEAL_VISIBILITY_THRESHOLD};
