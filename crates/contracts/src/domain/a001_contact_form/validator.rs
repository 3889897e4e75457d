use super::field::FormSnapshot;
use super::rules::{ValidationReason, ValidationRules};
use serde::Serialize;

/// Ошибка конкретного поля
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    #[serde(serialize_with = "serialize_reason")]
    pub reason: ValidationReason,
}

fn serialize_reason<S: serde::Serializer>(
    reason: &ValidationReason,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}

/// Итог проверки снимка формы
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

/// Проверить все поля снимка.
///
/// Проверка не останавливается на первой ошибке: каждое поле оценивается
/// независимо, и в отчёт попадает не больше одной ошибки на поле.
pub fn validate(snapshot: &FormSnapshot) -> ValidationReport {
    let errors = snapshot
        .fields()
        .iter()
        .filter_map(|field| {
            ValidationRules::for_kind(field.kind, field.required)
                .validate_string(&field.value)
                .err()
                .map(|reason| FieldError {
                    field: field.name.clone(),
                    reason,
                })
        })
        .collect();

    ValidationReport { errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_contact_form::field::{FieldKind, FormField};

    fn contact_form(name: &str, email: &str, phone: &str, message: &str) -> FormSnapshot {
        FormSnapshot::new()
            .with_field(FormField::new("name", FieldKind::Text, name).required())
            .with_field(FormField::new("email", FieldKind::Email, email).required())
            .with_field(FormField::new("phone", FieldKind::Telephone, phone))
            .with_field(FormField::new("message", FieldKind::Message, message).required())
    }

    #[test]
    fn test_valid_form() {
        let report = validate(&contact_form(
            "Thandi",
            "thandi@example.co.za",
            "+27 11 555 0100",
            "Do you ship to Durban?",
        ));
        assert!(report.is_valid());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_all_errors_surface_together() {
        let report = validate(&contact_form("", "a@b", "12345", "too short"));
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 4);

        let reasons: Vec<_> = report
            .errors
            .iter()
            .map(|e| (e.field.as_str(), e.reason))
            .collect();
        assert_eq!(
            reasons,
            vec![
                ("name", ValidationReason::Required),
                ("email", ValidationReason::InvalidEmail),
                ("phone", ValidationReason::InvalidTelephone),
                ("message", ValidationReason::MessageTooShort),
            ]
        );
    }

    #[test]
    fn test_optional_empty_phone_is_ignored() {
        let report = validate(&contact_form("Sam", "sam@eco.org", "", "1234567890"));
        assert!(report.is_valid());
        assert!(report.error_for("phone").is_none());
    }

    #[test]
    fn test_one_error_per_field() {
        let report = validate(&contact_form("   ", "   ", "", "   "));
        assert_eq!(report.errors.len(), 3);
        assert_eq!(
            report.error_for("email").map(|e| e.reason),
            Some(ValidationReason::Required)
        );
    }

    #[test]
    fn test_blank_optional_phone_is_not_empty() {
        let report = validate(&contact_form("Sam", "sam@eco.org", "   ", "1234567890"));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.error_for("phone").map(|e| e.reason),
            Some(ValidationReason::InvalidTelephone)
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let snapshot = contact_form("Lee", "nope", "", "hi");
        assert_eq!(validate(&snapshot), validate(&snapshot));
    }

    #[test]
    fn test_every_email_field_is_checked() {
        let snapshot = FormSnapshot::new()
            .with_field(FormField::new("email", FieldKind::Email, "a@b.co"))
            .with_field(FormField::new("cc", FieldKind::Email, "broken"));
        let report = validate(&snapshot);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].field, "cc");
    }

    #[test]
    fn test_report_serializes_reason_text() {
        let report = validate(&contact_form("", "a@b.co", "", "1234567890"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["errors"][0]["field"], "name");
        assert_eq!(json["errors"][0]["reason"], "This field is required");
    }
}
