use leptos::prelude::*;

/// Содержимое модального окна: заголовок и текст с абзацами через пустую строку
#[derive(Clone, Debug, PartialEq)]
pub struct ModalContent {
    pub title: Option<String>,
    pub text: String,
}

impl ModalContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            title: None,
            text: text.into(),
        }
    }

    pub fn titled(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            text: text.into(),
        }
    }

    fn paragraphs(&self) -> Vec<Vec<String>> {
        self.text
            .split("\n\n")
            .map(|p| p.lines().map(str::to_string).collect())
            .collect()
    }
}

/// Сервис для централизованного управления модальным окном
#[derive(Clone, Copy)]
pub struct ModalService {
    content: RwSignal<Option<ModalContent>>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            content: RwSignal::new(None),
        }
    }

    /// Показать модальное окно
    pub fn show(&self, content: ModalContent) {
        self.content.set(Some(content));
    }

    /// Скрыть модальное окно
    pub fn hide(&self) {
        self.content.set(None);
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the modal service
pub fn use_modal() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}

/// Компонент модального окна; не блокирует страницу, закрывается кликом по фону
#[component]
pub fn Modal() -> impl IntoView {
    let modal = use_modal();

    view! {
        {move || {
            modal.content.get().map(|content| {
                let paragraphs = content.paragraphs();
                view! {
                    <div
                        class="modal-overlay"
                        on:click=move |_| modal.hide()
                    >
                        <div
                            class="modal-content"
                            on:click=|e| e.stop_propagation()
                        >
                            {content.title.map(|title| view! { <h3>{title}</h3> })}
                            {paragraphs
                                .into_iter()
                                .map(|lines| {
                                    view! {
                                        <p>
                                            {lines
                                                .into_iter()
                                                .map(|line| view! { <span class="modal-line">{line}</span><br /> })
                                                .collect_view()}
                                        </p>
                                    }
                                })
                                .collect_view()}
                            <button class="btn btn-secondary" on:click=move |_| modal.hide()>
                                "Close"
                            </button>
                        </div>
                    </div>
                }
            })
        }}
    }
}
