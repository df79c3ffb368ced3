use crate::core::{Name, Result};

pub const GREETING_PREFIX: &str = "Hello";

/// Greets `name`, failing with a validation error when it is absent or empty.
///
/// ```
/// assert_eq!(greeter::greet(Some("John")).unwrap(), "Hello John");
/// assert!(greeter::greet(None).is_err());
/// ```
pub fn greet(name: Option<&str>) -> Result<String> {
    let name = Name::from_option(name)?;
    Ok(greet_name(&name))
}

pub fn greet_name(name: &Name) -> String {
    format!("{} {}", GREETING_PREFIX, name)
}
