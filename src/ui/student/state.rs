//! State for the student form.

use crate::api::{StudentPayload, StudentRecord};
use crate::ui::mvi::UiState;

/// One editable input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Age,
    Weight,
    Height,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Age,
        Field::Weight,
        Field::Height,
    ];

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "Nome",
            Field::LastName => "Sobrenome",
            Field::Email => "E-mail",
            Field::Age => "Idade",
            Field::Weight => "Peso",
            Field::Height => "Altura",
        }
    }

    /// Key used in the API body.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::FirstName => "nome",
            Field::LastName => "sobrenome",
            Field::Email => "email",
            Field::Age => "idade",
            Field::Weight => "peso",
            Field::Height => "altura",
        }
    }
}

/// Text currently held by each input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: String,
    pub weight: String,
    pub height: String,
}

impl StudentFields {
    /// Maps a fetched record into form fields. Missing values become "".
    pub fn from_record(record: &StudentRecord) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            first_name: text(&record.nome),
            last_name: text(&record.sobrenome),
            email: text(&record.email),
            age: text(&record.idade),
            weight: text(&record.peso),
            height: text(&record.altura),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Age => &self.age,
            Field::Weight => &self.weight,
            Field::Height => &self.height,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Age => &mut self.age,
            Field::Weight => &mut self.weight,
            Field::Height => &mut self.height,
        };
        *slot = value;
    }
}

impl From<&StudentFields> for StudentPayload {
    fn from(fields: &StudentFields) -> Self {
        Self {
            nome: fields.first_name.clone(),
            sobrenome: fields.last_name.clone(),
            email: fields.email.clone(),
            idade: fields.age.clone(),
            peso: fields.weight.clone(),
            altura: fields.height.clone(),
        }
    }
}

/// Complete state of the form view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudentFormState {
    pub fields: StudentFields,
    /// Display photo URL, empty when the student has none.
    pub photo: String,
    /// A fetch or submit is in flight.
    pub is_loading: bool,
}

impl UiState for StudentFormState {}
