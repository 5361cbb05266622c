//! Core abstractions for diagram generation
//!
//! Configuration, error handling, logging, and the indentation-aware writer
//! that the UML tree serializes itself through.

mod config;
mod error;
mod indent;
pub mod logging;

pub use config::*;
pub use error::*;
pub use indent::*;
pub use logging::*;
