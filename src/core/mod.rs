pub mod greeter;

pub use crate::domain::model::Name;
pub use crate::utils::error::Result;
