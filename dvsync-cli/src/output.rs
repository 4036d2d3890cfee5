//! Output formatting for the CLI.
//!
//! Handles human-readable and JSON output formats.

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Output handler for CLI commands.
pub struct Output {
    format: OutputFormat,
}

impl Output {
    /// Create a new output handler.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if JSON output is selected.
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Print a line to stdout.
    pub fn println(&self, msg: &str) {
        println!("{}", msg);
    }

    /// Print a success message (green in human format).
    pub fn success(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("\x1b[32m{}\x1b[0m", msg),
            OutputFormat::Json => {
                println!("{{\"type\":\"success\",\"message\":\"{}\"}}", escape_json(msg))
            }
        }
    }

    /// Print an error message (red in human format), tagged with a stable
    /// error type string in JSON format.
    pub fn error(&self, error_type: &str, msg: &str) {
        match self.format {
            OutputFormat::Human => eprintln!("\x1b[31merror: {}\x1b[0m", msg),
            OutputFormat::Json => eprintln!(
                "{{\"type\":\"error\",\"error_type\":\"{}\",\"message\":\"{}\"}}",
                escape_json(error_type),
                escape_json(msg)
            ),
        }
    }
}

/// Escape a string for JSON output.
fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
