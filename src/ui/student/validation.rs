//! Pre-submit validation for the student form.
//!
//! Rules mirror what the API accepts. All rules run; none short-circuit.

use std::fmt;

use email_address::EmailAddress;

use super::state::{Field, StudentFields};

/// Inclusive bounds on first and last name length, in characters.
pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationCategory {
    Length,
    Format,
    Type,
}

/// A single failed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    FirstNameLength,
    LastNameLength,
    InvalidEmail,
    AgeNotInteger,
    WeightNotNumber,
    HeightNotNumber,
}

impl Violation {
    pub fn field(self) -> Field {
        match self {
            Violation::FirstNameLength => Field::FirstName,
            Violation::LastNameLength => Field::LastName,
            Violation::InvalidEmail => Field::Email,
            Violation::AgeNotInteger => Field::Age,
            Violation::WeightNotNumber => Field::Weight,
            Violation::HeightNotNumber => Field::Height,
        }
    }

    pub fn category(self) -> ViolationCategory {
        match self {
            Violation::FirstNameLength | Violation::LastNameLength => ViolationCategory::Length,
            Violation::InvalidEmail => ViolationCategory::Format,
            Violation::AgeNotInteger | Violation::WeightNotNumber | Violation::HeightNotNumber => {
                ViolationCategory::Type
            }
        }
    }

    /// Text of the error toast for this violation.
    pub fn message(self) -> &'static str {
        match self {
            Violation::FirstNameLength => "Nome precisa ter entre 3 e 255 caracteres",
            Violation::LastNameLength => "Sobrenome precisa ter entre 3 e 255 caracteres",
            Violation::InvalidEmail => "Email inválido",
            Violation::AgeNotInteger => "Idade precisa ser um número inteiro",
            Violation::WeightNotNumber => "Peso precisa ser um número",
            Violation::HeightNotNumber => "Altura precisa ser um número",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Checks every rule and returns the violations in form order.
pub fn validate(fields: &StudentFields) -> Vec<Violation> {
    let checks = [
        (name_length_ok(&fields.first_name), Violation::FirstNameLength),
        (name_length_ok(&fields.last_name), Violation::LastNameLength),
        (is_email(&fields.email), Violation::InvalidEmail),
        (is_int(&fields.age), Violation::AgeNotInteger),
        (is_float(&fields.weight), Violation::WeightNotNumber),
        (is_float(&fields.height), Violation::HeightNotNumber),
    ];

    checks
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, violation)| violation)
        .collect()
}

fn name_length_ok(name: &str) -> bool {
    (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name.chars().count())
}

/// Address syntax plus a top-level domain of two or more letters
/// (`user@host` alone is rejected).
pub fn is_email(value: &str) -> bool {
    if value.chars().any(|c| c.is_whitespace() || c == '<' || c == '>') {
        return false;
    }
    if !EmailAddress::is_valid(value) {
        return false;
    }

    let Some((_, domain)) = value.rsplit_once('@') else {
        return false;
    };
    let Some((_, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    tld.to_ascii_lowercase().starts_with("xn--")
        || (tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic))
}

/// Optional sign followed by one or more ASCII digits.
pub fn is_int(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Decimal number with optional sign, fraction and exponent
/// (`1`, `-1.5`, `.5`, `1.`, `2e10`).
pub fn is_float(value: &str) -> bool {
    if matches!(value, "" | "." | "+" | "-") {
        return false;
    }

    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
        None => (unsigned, None),
    };
    let (whole, fraction) = match mantissa.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (mantissa, ""),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && all_digits(exp)
        }
    }
}
