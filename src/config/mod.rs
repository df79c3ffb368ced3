pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_present_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "greeter")]
#[command(about = "Greets a name")]
pub struct CliConfig {
    /// Name to greet
    pub name: Option<String>,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_present_string("name", self.name.as_deref()).map(|_| ())
    }
}
