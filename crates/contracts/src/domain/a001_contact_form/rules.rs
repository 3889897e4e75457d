//! Правила проверки одного поля

use super::field::FieldKind;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static TELEPHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("valid telephone regex"));

/// Минимальная длина сообщения (в символах, после trim)
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Минимальное количество цифр в телефоне
pub const TELEPHONE_MIN_DIGITS: usize = 7;

/// Причина, по которой поле не прошло проверку
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationReason {
    #[error("This field is required")]
    Required,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidTelephone,

    #[error("Message should be at least 10 characters long")]
    MessageTooShort,
}

/// Шаблон формата значения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Email,
    Telephone,
}

impl Pattern {
    fn regex(&self) -> &'static Regex {
        match self {
            Self::Email => &*EMAIL_REGEX,
            Self::Telephone => &*TELEPHONE_REGEX,
        }
    }

    fn mismatch(&self) -> ValidationReason {
        match self {
            Self::Email => ValidationReason::InvalidEmail,
            Self::Telephone => ValidationReason::InvalidTelephone,
        }
    }
}

/// Набор правил для одного поля
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub pattern: Option<Pattern>,
    pub min_chars: Option<usize>,
    pub min_digits: Option<usize>,
}

impl ValidationRules {
    /// Без ограничений
    pub const fn none() -> Self {
        Self {
            required: false,
            pattern: None,
            min_chars: None,
            min_digits: None,
        }
    }

    /// Правила, соответствующие типу поля
    pub const fn for_kind(kind: FieldKind, required: bool) -> Self {
        let mut rules = Self::none();
        rules.required = required;
        match kind {
            FieldKind::Text => {}
            FieldKind::Email => rules.pattern = Some(Pattern::Email),
            FieldKind::Telephone => {
                rules.pattern = Some(Pattern::Telephone);
                rules.min_digits = Some(TELEPHONE_MIN_DIGITS);
            }
            FieldKind::Message => rules.min_chars = Some(MESSAGE_MIN_CHARS),
        }
        rules
    }

    /// Проверить значение. Обязательность проверяется по trim, остальные правила
    /// применяются к любому непустому значению как есть; длина сообщения считается после trim.
    pub fn validate_string(&self, value: &str) -> Result<(), ValidationReason> {
        let trimmed = value.trim();
        if self.required && trimmed.is_empty() {
            return Err(ValidationReason::Required);
        }
        if value.is_empty() {
            return Ok(());
        }

        if let Some(pattern) = self.pattern {
            if !pattern.regex().is_match(value) {
                return Err(pattern.mismatch());
            }
            if let Some(min) = self.min_digits {
                if value.chars().filter(|c| c.is_ascii_digit()).count() < min {
                    return Err(pattern.mismatch());
                }
            }
        }

        if let Some(min) = self.min_chars {
            if trimmed.chars().count() < min {
                return Err(ValidationReason::MessageTooShort);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(kind: FieldKind, required: bool, value: &str) -> Result<(), ValidationReason> {
        ValidationRules::for_kind(kind, required).validate_string(value)
    }

    #[test]
    fn test_required_rule() {
        assert_eq!(check(FieldKind::Text, true, ""), Err(ValidationReason::Required));
        assert_eq!(check(FieldKind::Text, true, "   "), Err(ValidationReason::Required));
        assert_eq!(check(FieldKind::Text, true, "x"), Ok(()));
        assert_eq!(check(FieldKind::Text, false, ""), Ok(()));
    }

    #[test]
    fn test_email_rule() {
        assert_eq!(check(FieldKind::Email, true, "a@b.co"), Ok(()));
        assert_eq!(check(FieldKind::Email, true, "a@b"), Err(ValidationReason::InvalidEmail));
        assert_eq!(
            check(FieldKind::Email, true, "notanemail"),
            Err(ValidationReason::InvalidEmail)
        );
        assert_eq!(
            check(FieldKind::Email, true, "a b@c.de"),
            Err(ValidationReason::InvalidEmail)
        );
        assert_eq!(check(FieldKind::Email, false, ""), Ok(()));
        assert_eq!(
            check(FieldKind::Email, true, " a@b.co "),
            Err(ValidationReason::InvalidEmail)
        );
    }

    #[test]
    fn test_whitespace_only_optional_fields_fail_their_rule() {
        assert_eq!(
            check(FieldKind::Email, false, "   "),
            Err(ValidationReason::InvalidEmail)
        );
        assert_eq!(
            check(FieldKind::Telephone, false, "   "),
            Err(ValidationReason::InvalidTelephone)
        );
        assert_eq!(
            check(FieldKind::Message, false, "   "),
            Err(ValidationReason::MessageTooShort)
        );
        assert_eq!(check(FieldKind::Text, false, "   "), Ok(()));
    }

    #[test]
    fn test_required_email_reports_required_first() {
        assert_eq!(check(FieldKind::Email, true, "  "), Err(ValidationReason::Required));
    }

    #[test]
    fn test_telephone_rule() {
        assert_eq!(check(FieldKind::Telephone, false, "+27 11 555 0100"), Ok(()));
        assert_eq!(check(FieldKind::Telephone, false, "(011) 555-0100"), Ok(()));
        assert_eq!(
            check(FieldKind::Telephone, false, "12345"),
            Err(ValidationReason::InvalidTelephone)
        );
        assert_eq!(
            check(FieldKind::Telephone, false, "555-CALL-NOW"),
            Err(ValidationReason::InvalidTelephone)
        );
        assert_eq!(check(FieldKind::Telephone, false, ""), Ok(()));
    }

    #[test]
    fn test_telephone_needs_real_digits() {
        assert_eq!(
            check(FieldKind::Telephone, false, "((((((((((("),
            Err(ValidationReason::InvalidTelephone)
        );
        assert_eq!(
            check(FieldKind::Telephone, false, "--- --- 123"),
            Err(ValidationReason::InvalidTelephone)
        );
    }

    #[test]
    fn test_message_length_rule() {
        assert_eq!(
            check(FieldKind::Message, true, "123456789"),
            Err(ValidationReason::MessageTooShort)
        );
        assert_eq!(
            check(FieldKind::Message, true, "  123456789  "),
            Err(ValidationReason::MessageTooShort)
        );
        assert_eq!(check(FieldKind::Message, true, "1234567890"), Ok(()));
        assert_eq!(check(FieldKind::Message, false, ""), Ok(()));
    }

    #[test]
    fn test_reason_messages() {
        assert_eq!(ValidationReason::Required.to_string(), "This field is required");
        assert_eq!(
            ValidationReason::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            ValidationReason::InvalidTelephone.to_string(),
            "Please enter a valid phone number"
        );
        assert_eq!(
            ValidationReason::MessageTooShort.to_string(),
            "Message should be at least 10 characters long"
        );
    }
}
