use thiserror::Error;

/// Fixed message reported when a name is missing or empty.
pub const NAME_REQUIRED_MESSAGE: &str = r#""name" must be a String with some length"#;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GreeterError {
    #[error("{}", NAME_REQUIRED_MESSAGE)]
    ValidationError { field: String },
}

impl GreeterError {
    pub fn name_required() -> Self {
        Self::ValidationError {
            field: "name".to_string(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field } => field,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        self.to_string()
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ValidationError { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;
