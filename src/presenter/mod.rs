mod render;
mod types;

pub use render::{EXPORT_DISCLAIMER, export_filename, format_timestamp, render, to_export_text};
pub use types::*;
