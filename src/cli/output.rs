//! Output formatting for help and errors

use serde::{Deserialize, Serialize};

use crate::command::{Help, HelpLayout};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    layout: HelpLayout,
}

impl Output {
    pub fn new(format: OutputFormat, layout: HelpLayout) -> Self {
        Self { format, layout }
    }

    /// Prints help to stdout
    pub fn help(&self, help: &Help) {
        println!("{}", self.format_help(help));
    }

    /// Prints an error followed by help to stderr
    pub fn failure(&self, message: &str, help: &Help) {
        eprintln!("{}", self.format_failure(message, help));
    }

    fn format_help(&self, help: &Help) -> String {
        match self.format {
            OutputFormat::Text => help.render(&self.layout),
            OutputFormat::Json => serde_json::to_string(help).unwrap_or_default(),
        }
    }

    /// Text mode prints the error line and the help; JSON mode one object
    fn format_failure(&self, message: &str, help: &Help) -> String {
        match self.format {
            OutputFormat::Text => format!("Error: {}\n{}", message, help.render(&self.layout)),
            OutputFormat::Json => serde_json::json!({
                "success": false,
                "error": message,
                "help": help
            })
            .to_string(),
        }
    }
}
