//! UCI protocol handling for vantage.

pub mod command;
pub mod engine;
pub mod error;

pub use command::{Command, GoParams, UciOption, parse_command};
pub use engine::{UciEngine, limits_from_go};
pub use error::UciError;
