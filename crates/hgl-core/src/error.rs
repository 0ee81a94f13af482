use thiserror::Error;

/// Fatal host group configuration errors.
///
/// None of these leave a partially applied mapping behind.
#[derive(Debug, Error)]
pub enum HostGroupError {
    #[error("host group labels file {location} not found")]
    NotFound { location: String },

    #[error("bad host group labels file {location}: {reason}")]
    Malformed { location: String, reason: String },

    #[error("failed to read host group labels file {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

impl HostGroupError {
    pub(crate) fn not_found(location: &str) -> Self {
        Self::NotFound {
            location: location.to_string(),
        }
    }

    pub(crate) fn malformed(location: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            location: location.to_string(),
            reason: reason.into(),
        }
    }

    /// Location of the resource the error refers to.
    pub fn location(&self) -> &str {
        match self {
            Self::NotFound { location }
            | Self::Malformed { location, .. }
            | Self::Io { location, .. } => location,
        }
    }
}

pub type HostGroupResult<T> = Result<T, HostGroupError>;
