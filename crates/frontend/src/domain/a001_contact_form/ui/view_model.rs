use super::model::contact_form_template;
use crate::shared::dispatch::EventLoop;
use contracts::domain::a001_contact_form::{
    ContactFormCommand, ContactFormEvent, ContactFormState, FieldError, FormPhase, FormSnapshot,
    FormTimings, Notice, SubmissionGateway,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for the contact form
#[derive(Clone, Copy)]
pub struct ContactFormViewModel {
    pub form: RwSignal<FormSnapshot>,
    pub markings: RwSignal<Vec<FieldError>>,
    events: EventLoop<ContactFormState>,
}

impl ContactFormViewModel {
    pub fn new<G>(timings: FormTimings, gateway: G) -> Self
    where
        G: SubmissionGateway + Clone + Send + Sync + 'static,
    {
        let form = RwSignal::new(contact_form_template());
        let markings = RwSignal::new(Vec::<FieldError>::new());

        let events = EventLoop::new(
            ContactFormState::new(timings),
            move |handle, command| match command {
                ContactFormCommand::ClearMarkings => markings.set(Vec::new()),
                ContactFormCommand::MarkInvalid(error) => markings.update(|m| m.push(error)),
                ContactFormCommand::ResetFields => form.update(|f| f.clear_values()),
                ContactFormCommand::Send(request) => {
                    let gateway = gateway.clone();
                    spawn_local(async move {
                        let result = gateway.submit(request).await;
                        handle.send(ContactFormEvent::SubmissionCompleted(result));
                    });
                }
            },
        );

        Self {
            form,
            markings,
            events,
        }
    }

    pub fn set_value(&self, name: &str, value: String) {
        self.form.update(|f| {
            f.set_value(name, value);
        });
    }

    /// Текущее значение поля (реактивно)
    pub fn value(&self, name: &str) -> String {
        self.form.with(|f| f.value(name).to_string())
    }

    /// Текст ошибки поля (реактивно)
    pub fn error_for(&self, name: &str) -> Option<String> {
        self.markings.with(|m| {
            m.iter()
                .find(|e| e.field == name)
                .map(|e| e.reason.to_string())
        })
    }

    pub fn notice(&self) -> Option<Notice> {
        self.events.state().with(|s| s.notice.clone())
    }

    pub fn phase(&self) -> FormPhase {
        self.events.state().with(|s| s.phase)
    }

    pub fn is_busy(&self) -> bool {
        self.events.state().with(|s| s.is_busy())
    }

    /// Проверить и отправить текущие значения
    pub fn submit_command(&self) {
        let snapshot = self.form.get_untracked();
        self.events.send(ContactFormEvent::Submit(snapshot));
    }

    pub fn dismiss_notice(&self) {
        self.events.send(ContactFormEvent::NoticeDismissed);
    }
}
