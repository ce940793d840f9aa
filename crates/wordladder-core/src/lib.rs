//! Word Ladder Core — shared error type and configuration.

pub mod config;
pub mod error;

pub use config::LadderConfig;
pub use error::{Error, Result};
