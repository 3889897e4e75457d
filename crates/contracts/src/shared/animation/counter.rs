use crate::shared::number_format::format_count;

/// Доля видимой площади, при которой запускается счётчик
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;

/// Анимация числа от `start` до `end` за фиксированное время
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    pub start: i64,
    pub end: i64,
    pub duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(start: i64, end: i64, duration_ms: f64) -> Self {
        Self {
            start,
            end,
            duration_ms,
        }
    }

    /// Анимация от нуля до цели
    pub fn to_target(end: i64, duration_ms: f64) -> Self {
        Self::new(0, end, duration_ms)
    }

    fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Значение через `elapsed_ms` после первого кадра (округление вниз)
    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        let span = (self.end - self.start) as f64;
        (self.progress(elapsed_ms) * span + self.start as f64).floor() as i64
    }

    pub fn text_at(&self, elapsed_ms: f64) -> String {
        format_count(self.value_at(elapsed_ms))
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

/// Разбирает целевое значение из атрибута, как это делает `parseInt`:
/// пробелы в начале, необязательный знак, затем цифры до первого не-цифрового символа.
pub fn parse_target(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }

    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}
