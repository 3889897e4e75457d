//! Контактная форма: модель полей, правила валидации, сценарий отправки.
//!
//! - field.rs: поля и снимок формы
//! - rules.rs: правила проверки одного поля
//! - validator.rs: проверка всего снимка
//! - submission.rs: интерфейс отправки и его результат
//! - workflow.rs: редьюсер жизненного цикла формы

pub mod field;
pub mod rules;
pub mod submission;
pub mod validator;
pub mod workflow;

pub use field::{FieldKind, FormField, FormSnapshot};
pub use rules::{ValidationReason, ValidationRules};
pub use submission::{SubmissionError, SubmissionGateway, SubmissionReceipt, SubmissionRequest};
pub use validator::{validate, FieldError, ValidationReport};
pub use workflow::{
    ContactFormCommand, ContactFormEvent, ContactFormState, FormPhase, FormTimings, Notice,
    NoticeKind,
};
