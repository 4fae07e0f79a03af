//! Wire types for the `/alunos` resource.
//!
//! The server is loose about scalar types: ids may be numbers or strings and
//! `idade`/`peso`/`altura` usually come back as numbers. Everything is mapped
//! to text here so the form can hold exactly what the user sees.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Opaque student identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    /// Returns `None` for an empty identifier, which means "create mode".
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Photo attached to a student. Only the URL is read by the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default, deserialize_with = "text_field")]
    pub url: Option<String>,
}

/// Student record as returned by the API.
///
/// Every field is optional; defaults are substituted when the record is
/// mapped into form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(default, deserialize_with = "id_field")]
    pub id: Option<StudentId>,
    #[serde(default, deserialize_with = "text_field")]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub sobrenome: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub idade: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub peso: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub altura: Option<String>,
    #[serde(rename = "Fotos", default, deserialize_with = "photos_field")]
    pub fotos: Vec<Photo>,
}

impl StudentRecord {
    /// URL of the first photo, if any.
    pub fn photo_url(&self) -> Option<&str> {
        self.fotos.first().and_then(|photo| photo.url.as_deref())
    }
}

/// Body sent on create and update.
///
/// Values are the raw text of the form so that a later fetch reproduces
/// them exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentPayload {
    pub nome: String,
    pub sobrenome: String,
    pub email: String,
    pub idade: String,
    pub peso: String,
    pub altura: String,
}

fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_text))
}

fn id_field<'de, D>(deserializer: D) -> Result<Option<StudentId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_field(deserializer)?.and_then(StudentId::new))
}

/// Entries that are not objects keep their position but carry no URL, so a
/// malformed photo never fails the whole record.
fn photos_field<'de, D>(deserializer: D) -> Result<Vec<Photo>, D::Error>
where
    D: Deserializer<'de>,
{
    let photos = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(entries)) => entries
            .iter()
            .map(|entry| Photo {
                url: entry.get("url").and_then(value_to_text),
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(photos)
}

fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_to_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Formats a JSON number the way a browser would print it: integral floats
/// lose their fractional part (`60.0` -> `"60"`).
fn number_to_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
