use crate::utils::error::{GreeterError, Result};
use crate::utils::validation::validate_present_string;
use std::fmt;

/// Text supplied by a caller to be greeted. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(GreeterError::name_required());
        }
        Ok(Self(value))
    }

    /// Validates an optional value; `None` is treated the same as `""`.
    pub fn from_option(value: Option<&str>) -> Result<Self> {
        validate_present_string("name", value).map(|v| Self(v.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Name {
    type Error = GreeterError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Name {
    type Error = GreeterError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}
