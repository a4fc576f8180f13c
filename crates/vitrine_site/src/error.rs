use std::path::PathBuf;

use thiserror::Error;

use crate::contact::ContactField;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize site config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A contact form that cannot be sent as filled in
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    Missing(ContactField),

    #[error("`{0}` is not an email address")]
    InvalidEmail(String),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("submission rejected: {0}")]
    Rejected(String),
}
