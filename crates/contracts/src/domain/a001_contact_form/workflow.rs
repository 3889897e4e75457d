//! Жизненный цикл контактной формы.
//!
//! `Editing` -> (Submit, форма валидна) -> `Submitting` -> (ответ) ->
//! `CoolingDown` -> (таймер сброса) -> `Editing`.
//! Повторная отправка до окончания цикла игнорируется.

use super::field::FormSnapshot;
use super::submission::{SubmissionError, SubmissionReceipt, SubmissionRequest};
use super::validator::{validate, FieldError};
use crate::shared::dispatch::{Effect, Reducer, Transition};

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

/// Задержки сценария (мс)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTimings {
    /// Через сколько очищать поля после успешной отправки
    pub reset_delay_ms: u32,
    /// Через сколько скрывать уведомление
    pub notice_hide_ms: u32,
}

impl Default for FormTimings {
    fn default() -> Self {
        Self {
            reset_delay_ms: 3000,
            notice_hide_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    CoolingDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Уведомление под формой
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// Номер уведомления; таймер скрытия относится только к "своему" номеру
    pub ticket: u32,
}

#[derive(Debug, Clone)]
pub enum ContactFormEvent {
    Submit(FormSnapshot),
    SubmissionCompleted(Result<SubmissionReceipt, SubmissionError>),
    CooldownElapsed,
    NoticeExpired { ticket: u32 },
    NoticeDismissed,
}

/// Команды для разметки формы
#[derive(Debug, Clone, PartialEq)]
pub enum ContactFormCommand {
    ClearMarkings,
    MarkInvalid(FieldError),
    Send(SubmissionRequest),
    ResetFields,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactFormState {
    pub phase: FormPhase,
    pub notice: Option<Notice>,
    timings: FormTimings,
    last_ticket: u32,
}

impl ContactFormState {
    pub fn new(timings: FormTimings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase != FormPhase::Editing
    }

    fn with_notice(&self, kind: NoticeKind, message: String) -> Self {
        let ticket = self.last_ticket.wrapping_add(1);
        Self {
            notice: Some(Notice {
                kind,
                message,
                ticket,
            }),
            last_ticket: ticket,
            ..self.clone()
        }
    }

    fn on_submit(&self, snapshot: FormSnapshot) -> Transition<Self> {
        if self.is_busy() {
            log::debug!("contact form: submit ignored in phase {:?}", self.phase);
            return Transition::quiet(self.clone());
        }

        let report = validate(&snapshot);
        let mut effects = vec![Effect::Command(ContactFormCommand::ClearMarkings)];

        if !report.is_valid() {
            log::debug!("contact form: {} invalid field(s)", report.errors.len());
            effects.extend(
                report
                    .errors
                    .into_iter()
                    .map(|error| Effect::Command(ContactFormCommand::MarkInvalid(error))),
            );
            return Transition {
                state: self.clone(),
                effects,
            };
        }

        effects.push(Effect::Command(ContactFormCommand::Send(
            SubmissionRequest::from_snapshot(&snapshot),
        )));
        Transition {
            state: Self {
                phase: FormPhase::Submitting,
                ..self.clone()
            },
            effects,
        }
    }

    fn on_completed(
        &self,
        result: Result<SubmissionReceipt, SubmissionError>,
    ) -> Transition<Self> {
        if self.phase != FormPhase::Submitting {
            return Transition::quiet(self.clone());
        }

        match result {
            Ok(receipt) => {
                log::info!("contact form accepted, reference {}", receipt.reference);
                let mut next = self.with_notice(NoticeKind::Success, SUCCESS_MESSAGE.to_string());
                next.phase = FormPhase::CoolingDown;
                let ticket = next.last_ticket;
                Transition::quiet(next)
                    .timer(self.timings.reset_delay_ms, ContactFormEvent::CooldownElapsed)
                    .timer(
                        self.timings.notice_hide_ms,
                        ContactFormEvent::NoticeExpired { ticket },
                    )
            }
            Err(error) => {
                log::warn!("contact form submission failed: {}", error);
                let mut next = self.with_notice(
                    NoticeKind::Failure,
                    format!("We could not send your message ({}). Please try again.", error),
                );
                next.phase = FormPhase::Editing;
                let ticket = next.last_ticket;
                Transition::quiet(next).timer(
                    self.timings.notice_hide_ms,
                    ContactFormEvent::NoticeExpired { ticket },
                )
            }
        }
    }
}

impl Reducer for ContactFormState {
    type Event = ContactFormEvent;
    type Command = ContactFormCommand;

    fn reduce(&self, event: ContactFormEvent) -> Transition<Self> {
        match event {
            ContactFormEvent::Submit(snapshot) => self.on_submit(snapshot),
            ContactFormEvent::SubmissionCompleted(result) => self.on_completed(result),
            ContactFormEvent::CooldownElapsed if self.phase == FormPhase::CoolingDown => {
                Transition::quiet(Self {
                    phase: FormPhase::Editing,
                    ..self.clone()
                })
                .command(ContactFormCommand::ResetFields)
            }
            ContactFormEvent::CooldownElapsed => Transition::quiet(self.clone()),
            ContactFormEvent::NoticeExpired { ticket } => {
                let stale = self.notice.as_ref().map_or(true, |n| n.ticket != ticket);
                if stale {
                    return Transition::quiet(self.clone());
                }
                Transition::quiet(Self {
                    notice: None,
                    ..self.clone()
                })
            }
            ContactFormEvent::NoticeDismissed => Transition::quiet(Self {
                notice: None,
                ..self.clone()
            }),
        }
    }
}
