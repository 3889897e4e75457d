use super::model::{FieldSpec, SimulatedGateway, CONTACT_FIELDS};
use super::view_model::ContactFormViewModel;
use crate::layout::site_context::use_site;
use contracts::domain::a001_contact_form::{FieldKind, FormPhase, NoticeKind};
use leptos::prelude::*;

const BORDER_OK: &str = "border-color: #ddd;";
const BORDER_ERROR: &str = "border-color: #e74c3c;";

#[component]
pub fn ContactForm() -> impl IntoView {
    let site = use_site();
    let vm = ContactFormViewModel::new(
        site.config.form_timings(),
        SimulatedGateway::new(site.config.timings.submission_latency_ms),
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    let notice_view = move || {
        vm.notice().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "success-message",
                NoticeKind::Failure => "error-message form-error",
            };
            view! {
                <div class=class style="display: block;">
                    <span>{notice.message}</span>
                    <button
                        type="button"
                        class="notice-close"
                        aria-label="Dismiss"
                        on:click=move |_| vm.dismiss_notice()
                    >
                        "×"
                    </button>
                </div>
            }
        })
    };

    view! {
        <section id="contact" class="contact-section">
            <h2>"Get in Touch"</h2>
            <form class="contact-form" novalidate=true on:submit=on_submit>
                {CONTACT_FIELDS
                    .iter()
                    .map(|spec| view! { <FormRow vm=vm spec=spec /> })
                    .collect_view()}

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || vm.is_busy()
                >
                    {move || match vm.phase() {
                        FormPhase::Submitting => "Sending...",
                        _ => "Send Message",
                    }}
                </button>

                {notice_view}
            </form>
        </section>
    }
}

#[component]
fn FormRow(vm: ContactFormViewModel, spec: &'static FieldSpec) -> impl IntoView {
    let name = spec.name;
    let error = move || vm.error_for(name);
    let border = move || if error().is_some() { BORDER_ERROR } else { BORDER_OK };
    let value = move || vm.value(name);
    let on_input = move |ev: leptos::ev::Event| vm.set_value(name, event_target_value(&ev));

    let control = if spec.kind == FieldKind::Message {
        view! {
            <textarea
                id=name
                name=name
                class="form-control"
                rows="5"
                placeholder=spec.placeholder
                required=spec.required
                style=border
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type=spec.kind.input_type()
                id=name
                name=name
                class="form-control"
                placeholder=spec.placeholder
                required=spec.required
                style=border
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label for=name>
                {spec.label}
                {spec.required.then_some(" *")}
            </label>
            {control}
            <div
                id=format!("{}Error", name)
                class="error-message"
                style=move || if error().is_some() { "display: block;" } else { "display: none;" }
            >
                {move || error().unwrap_or_default()}
            </div>
        </div>
    }
}
