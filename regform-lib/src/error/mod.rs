//! Error types

mod config;
mod driver;

pub use config::*;
pub use driver::*;
