use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown task role: {0} (expected: map|reduce)")]
    UnknownRole(String),
}
