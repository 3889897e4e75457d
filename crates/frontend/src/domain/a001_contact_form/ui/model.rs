use contracts::domain::a001_contact_form::{
    FieldKind, FormField, FormSnapshot, SubmissionError, SubmissionGateway, SubmissionReceipt,
    SubmissionRequest,
};
use gloo_timers::future::TimeoutFuture;

/// Описание поля для разметки
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

pub const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Your Name",
        kind: FieldKind::Text,
        required: true,
        placeholder: "Jane Dlamini",
    },
    FieldSpec {
        name: "email",
        label: "Email Address",
        kind: FieldKind::Email,
        required: true,
        placeholder: "you@example.com",
    },
    FieldSpec {
        name: "phone",
        label: "Phone Number",
        kind: FieldKind::Telephone,
        required: false,
        placeholder: "+27 11 555 0100",
    },
    FieldSpec {
        name: "message",
        label: "Message",
        kind: FieldKind::Message,
        required: true,
        placeholder: "How can we help?",
    },
];

/// Пустая форма с полями из `CONTACT_FIELDS`
pub fn contact_form_template() -> FormSnapshot {
    CONTACT_FIELDS
        .iter()
        .map(|spec| {
            let field = FormField::new(spec.name, spec.kind, "");
            if spec.required {
                field.required()
            } else {
                field
            }
        })
        .collect()
}

/// Отправка без сервера: значения пишутся в лог, ответ приходит после паузы
#[derive(Clone, Copy, Debug)]
pub struct SimulatedGateway {
    latency_ms: u32,
}

impl SimulatedGateway {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }
}

impl SubmissionGateway for SimulatedGateway {
    async fn submit(
        &self,
        request: SubmissionRequest,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        log::info!("Form submitted with data: {}", request.to_json());
        TimeoutFuture::new(self.latency_ms).await;
        Ok(SubmissionReceipt::new_now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_contact_form::{validate, ValidationReason};

    #[test]
    fn test_template_matches_field_specs() {
        let template = contact_form_template();
        assert_eq!(template.fields().len(), CONTACT_FIELDS.len());
        assert!(template.field("email").unwrap().required);
        assert!(!template.field("phone").unwrap().required);
        assert!(template.fields().iter().all(|f| f.value.is_empty()));
    }

    #[test]
    fn test_empty_template_reports_required_fields() {
        let report = validate(&contact_form_template());
        let failing: Vec<_> = report.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(failing, vec!["name", "email", "message"]);
        assert!(report
            .errors
            .iter()
            .all(|e| e.reason == ValidationReason::Required));
    }
}
