//! Интерфейс отправки формы.
//!
//! Сам сайт статический: реализация по умолчанию (во frontend) только
//! записывает значения в лог. Реальный backend подключается через тот же трейт.

use super::field::FormSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Данные, уходящие на отправку
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub fields: Vec<(String, String)>,
}

impl SubmissionRequest {
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        Self {
            fields: snapshot.values(),
        }
    }

    /// Значения в виде JSON-объекта (для лога)
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(name, value)| (name.clone(), serde_json::Value::String(value.clone())))
            .collect();
        serde_json::Value::Object(map)
    }
}

/// Подтверждение приёма
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub accepted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new_now() -> Self {
        Self {
            reference: Uuid::new_v4(),
            accepted_at: Utc::now(),
        }
    }
}

/// Ошибки отправки
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Куда уходит заполненная форма
#[allow(async_fn_in_trait)]
pub trait SubmissionGateway {
    async fn submit(&self, request: SubmissionRequest)
        -> Result<SubmissionReceipt, SubmissionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_contact_form::field::{FieldKind, FormField};

    #[test]
    fn test_request_keeps_field_order() {
        let snapshot = FormSnapshot::new()
            .with_field(FormField::new("name", FieldKind::Text, "Ann"))
            .with_field(FormField::new("email", FieldKind::Email, "ann@x.io"));
        let request = SubmissionRequest::from_snapshot(&snapshot);

        assert_eq!(
            request.fields,
            vec![
                ("name".to_string(), "Ann".to_string()),
                ("email".to_string(), "ann@x.io".to_string()),
            ]
        );
        assert_eq!(request.to_json()["email"], "ann@x.io");
    }

    #[test]
    fn test_error_messages() {
        let err = SubmissionError::Unavailable("offline".into());
        assert_eq!(err.to_string(), "service unavailable: offline");
    }
}
