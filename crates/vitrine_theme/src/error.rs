use thiserror::Error;

/// A string did not name a known color scheme or theme mode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseThemeError {
    #[error("unknown color scheme `{0}` (expected one of cyan, purple, blue, orange, green)")]
    UnknownScheme(String),

    #[error("unknown theme mode `{0}` (expected dark or light)")]
    UnknownMode(String),
}

/// Failure reading or writing persisted preferences
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference storage i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed preference file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
}
