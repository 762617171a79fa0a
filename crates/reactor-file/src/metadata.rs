use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identification stamped on manifests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactorMetadata {
    /// Human-readable reactor name.
    pub name: String,
    /// When the manifest was produced.
    pub created: DateTime<Utc>,
}

impl ReactorMetadata {
    /// Metadata with the given name, stamped now.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created: Utc::now(),
        }
    }
}
