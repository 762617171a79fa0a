/// Errors while loading a reactor input file.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse file: {0}")]
    ParseError(String),

    #[error("unknown file format: {0}")]
    UnknownFormat(String),

    #[error("file version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },
}

/// Errors while writing a reactor file or manifest.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
