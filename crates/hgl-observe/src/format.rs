use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::LogError;

/// Where and how log records are written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogFormat {
    /// Human-readable lines on stdout.
    #[default]
    Text,
    /// One JSON object per record on stdout.
    Json,
    /// systemd-journald (Linux only).
    Journald,
}

impl FromStr for LogFormat {
    type Err = LogError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "journald" | "journal" if cfg!(target_os = "linux") => Ok(Self::Journald),
            "journald" | "journal" => Err(LogError::JournaldNotSupported),
            _ => Err(LogError::InvalidFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for LogFormat {
    type Error = LogError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LogFormat> for String {
    fn from(f: LogFormat) -> Self {
        f.to_string()
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
            LogFormat::Journald => "journald",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitive() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!(" JSON ".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn rejects_unknown() {
        for input in ["", "xml", "logfmt"] {
            assert!(
                matches!(input.parse::<LogFormat>(), Err(LogError::InvalidFormat(_))),
                "expected InvalidFormat for {input:?}"
            );
        }
    }

    #[test]
    fn journald_depends_on_platform() {
        let parsed = "journald".parse::<LogFormat>();
        if cfg!(target_os = "linux") {
            assert_eq!(parsed.unwrap(), LogFormat::Journald);
        } else {
            assert!(matches!(parsed, Err(LogError::JournaldNotSupported)));
        }
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&LogFormat::Json).unwrap();
        assert_eq!(json, r#""json""#);

        let parsed: LogFormat = serde_json::from_str(r#""Text""#).unwrap();
        assert_eq!(parsed, LogFormat::Text);

        assert!(serde_json::from_str::<LogFormat>(r#""yaml""#).is_err());
    }
}
