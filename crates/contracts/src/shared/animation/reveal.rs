/// Доля видимой площади, при которой элемент проявляется
pub const REVEAL_VISIBILITY_THRESHOLD: f64 = 0.1;

const TRANSITION: &str = "transition: opacity 0.5s ease, transform 0.5s ease;";

/// Плавное появление карточки при прокрутке.
/// Однажды проявившись, элемент больше не скрывается.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    /// Уведомление о пересечении с viewport; возвращает `true`, если элемент только что проявился
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if is_intersecting && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn style(&self) -> String {
        if self.revealed {
            format!("opacity: 1; transform: translateY(0); {}", TRANSITION)
        } else {
            format!("opacity: 0; transform: translateY(20px); {}", TRANSITION)
        }
    }
}
