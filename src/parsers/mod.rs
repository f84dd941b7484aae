pub mod line;

pub use line::{parse_line, ParsedFields, ERROR_MARKER, WARNING_MARKER};
