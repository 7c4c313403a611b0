//! Form input handling.

pub mod accessory;
pub mod sanitize;
pub mod user;

use std::fmt;

use derive_more::Error;

pub use self::{accessory::AccessoryForm, user::UserForm};

/// Validation messages of form fields, in the order the fields appear.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldErrors(Vec<(&'static str, &'static str)>);

impl FieldErrors {
    /// Returns the message of the named field, if it's invalid.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, msg)| *msg)
    }

    /// Returns the message of the first invalid field, if any.
    #[must_use]
    pub fn first(&self) -> Option<&'static str> {
        self.0.first().map(|(_, msg)| *msg)
    }

    /// Indicates whether every field is valid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(field, message)` pairs.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().copied()
    }

    /// Records the message of the named field, replacing the previous one.
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        match self.0.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = message,
            None => self.0.push((field, message)),
        }
    }

    /// Forgets the message of the named field.
    pub fn clear(&mut self, field: &str) {
        self.0.retain(|(f, _)| *f != field);
    }
}

/// Form failed validation.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub struct Invalid(#[error(not(source))] pub FieldErrors);

impl fmt::Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = self.0.iter().map(|(field, _)| field);
        if let Some(first) = fields.next() {
            write!(f, "invalid `{first}`")?;
            for field in fields {
                write!(f, ", `{field}`")?;
            }
            Ok(())
        } else {
            f.write_str("invalid form")
        }
    }
}

/// Converts the provided `value` into an optional one, treating blank input
/// as absent.
fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Parses a checkbox-like boolean input.
fn flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1" | "on",
    )
}
