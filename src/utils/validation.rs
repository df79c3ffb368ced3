use crate::utils::error::{GreeterError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects a value that is absent or has zero length. Whitespace counts as content.
pub fn validate_present_string<'a>(field_name: &str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(GreeterError::ValidationError {
            field: field_name.to_string(),
        }),
    }
}
