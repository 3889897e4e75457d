use serde::{Deserialize, Serialize};

/// Смысловой тип поля (определяет, какие правила к нему применяются)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Telephone,
    Message,
}

impl FieldKind {
    /// Значение атрибута `type` для `<input>`; у `Message` это `<textarea>`
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Message => "text",
            Self::Email => "email",
            Self::Telephone => "tel",
        }
    }
}

/// Одно поле формы в момент отправки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
}

impl FormField {
    pub fn new(name: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: false,
            kind,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Упорядоченный снимок значений формы
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormSnapshot {
    fields: Vec<FormField>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Текущее значение поля; пустая строка, если поля нет
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|f| f.value.as_str()).unwrap_or_default()
    }

    /// Обновить значение; `false`, если поля с таким именем нет
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Вернуть форму в исходное (пустое) состояние, сохранив набор полей
    pub fn clear_values(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    /// Пары имя -> значение в исходном порядке
    pub fn values(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }
}

impl FromIterator<FormField> for FormSnapshot {
    fn from_iter<T: IntoIterator<Item = FormField>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
