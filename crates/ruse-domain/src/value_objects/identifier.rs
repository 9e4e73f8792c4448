//! Service identifiers

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Textual key used to request a service from an injector
///
/// An identifier is never empty and never made only of whitespace.
/// Owned and borrowed string inputs normalize to the same identifier,
/// so `"service_a"` and `String::from("service_a")` are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Validate and wrap an identifier
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(Error::invalid_identifier(name))
        }
    }

    /// Whether `name` would be accepted by [`Identifier::new`]
    pub fn is_valid(name: &str) -> bool {
        !name.trim().is_empty()
    }

    /// Borrow the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning its text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}

/// Conversion of caller input into a validated [`Identifier`]
///
/// `None` stands for an absent identifier and is always rejected.
pub trait IntoIdentifier {
    /// Validate and convert
    fn into_identifier(self) -> Result<Identifier>;
}

impl IntoIdentifier for Identifier {
    fn into_identifier(self) -> Result<Identifier> {
        Ok(self)
    }
}

impl IntoIdentifier for &Identifier {
    fn into_identifier(self) -> Result<Identifier> {
        Ok(self.clone())
    }
}

impl IntoIdentifier for &str {
    fn into_identifier(self) -> Result<Identifier> {
        Identifier::new(self)
    }
}

impl IntoIdentifier for String {
    fn into_identifier(self) -> Result<Identifier> {
        Identifier::new(self)
    }
}

impl IntoIdentifier for &String {
    fn into_identifier(self) -> Result<Identifier> {
        Identifier::new(self.as_str())
    }
}

impl<T: IntoIdentifier> IntoIdentifier for Option<T> {
    fn into_identifier(self) -> Result<Identifier> {
        match self {
            Some(inner) => inner.into_identifier(),
            None => Err(Error::invalid_identifier("")),
        }
    }
}
