/// ANSI color codes for stderr diagnostics
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub error: &'static str, // Bright red for errors
    pub info: &'static str,  // Cyan for informational messages
    pub stats: &'static str, // Dim for the processing summary
    pub reset: &'static str, // Reset to default color
}

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if use_colors {
            Self {
                error: "\x1b[91m",
                info: "\x1b[36m",
                stats: "\x1b[2m",
                reset: "\x1b[0m",
            }
        } else {
            // All empty strings for no-color mode
            Self {
                error: "",
                info: "",
                stats: "",
                reset: "",
            }
        }
    }
}
