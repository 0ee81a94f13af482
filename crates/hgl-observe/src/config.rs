use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::{LogFilter, LogFormat};

/// Logging configuration of the hosting process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub format: LogFormat,
    pub filter: LogFilter,
    /// Include the event target (module path) in each record.
    pub with_targets: bool,
    /// Colorize text output when stdout is a terminal.
    pub use_color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            filter: LogFilter::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LogConfig {
    /// Color is used only when enabled and stdout is a terminal.
    pub fn ansi(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}
