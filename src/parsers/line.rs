/// Literal marker flagging a line as an error
pub const ERROR_MARKER: &str = "[ERROR]";
/// Literal marker flagging a line as a warning
pub const WARNING_MARKER: &str = "[WARNING]";

/// Fields extracted from one access-log line
///
/// Expected shape is `<address> <...tokens...> <status>`. Address and status
/// borrow from the line and are `None` only when the line has no tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedFields<'a> {
    pub source_address: Option<&'a str>,
    pub has_error_marker: bool,
    pub has_warning_marker: bool,
    pub status_code: Option<&'a str>,
}

impl ParsedFields<'_> {
    /// True when the line carried no tokens at all
    pub fn is_blank(&self) -> bool {
        self.source_address.is_none()
    }
}

/// Parse a single line. Never fails; degenerate lines yield empty fields.
pub fn parse_line(line: &str) -> ParsedFields<'_> {
    let mut tokens = line.split_whitespace();
    let source_address = tokens.next();
    // A single-token line reports that token as both address and status
    let status_code = tokens.next_back().or(source_address);

    ParsedFields {
        source_address,
        // Markers are matched on the raw line, independent of tokenization
        has_error_marker: line.contains(ERROR_MARKER),
        has_warning_marker: line.contains(WARNING_MARKER),
        status_code,
    }
}
