use crate::utils::error::{GreeterError, Result};
use serde::{Deserialize, Serialize};

/// What the binary prints for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CliOutput {
    Greeting { greeting: String },
    Error { error: String },
}

impl CliOutput {
    pub fn from_result(result: &Result<String>) -> Self {
        match result {
            Ok(greeting) => Self::Greeting {
                greeting: greeting.clone(),
            },
            Err(e) => Self::from_error(e),
        }
    }

    pub fn from_error(error: &GreeterError) -> Self {
        Self::Error {
            error: error.user_friendly_message(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn render(&self, json: bool) -> String {
        if json {
            // both variants are plain string maps, serialization cannot fail
            serde_json::to_string(self).unwrap_or_default()
        } else {
            match self {
                Self::Greeting { greeting } => greeting.clone(),
                Self::Error { error } => error.clone(),
            }
        }
    }
}
