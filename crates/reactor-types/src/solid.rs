use serde::{Deserialize, Serialize};

/// Unique name of one solid in an assembly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolidName(pub String);

impl SolidName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SolidName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SolidName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Passthrough data the export layer needs for one solid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub name: String,
    pub material_tag: String,
    pub stp_filename: String,
    pub stl_filename: String,
}

impl ExportMetadata {
    /// Metadata following the `<name>_mat`, `<name>.stp`, `<name>.stl` convention.
    pub fn for_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            material_tag: format!("{name}_mat"),
            stp_filename: format!("{name}.stp"),
            stl_filename: format!("{name}.stl"),
        }
    }
}
