//! Permission export loading and parsing.

pub mod parser;
pub mod reader;

pub use parser::parse_export;
pub use reader::load_export;
