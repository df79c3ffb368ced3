#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::CliOutput, CliConfig};

pub use crate::core::greeter::{greet, greet_name, GREETING_PREFIX};
pub use crate::domain::model::Name;
pub use crate::utils::error::{GreeterError, Result, NAME_REQUIRED_MESSAGE};
