pub mod config;
pub mod error;
pub mod prediction;
pub mod presenter;
pub mod session;
pub mod terminal;
pub mod ui;

pub use error::{Error, Result};
