use reactor_types::{LayoutConstants, ParameterSet};
use serde::Deserialize;

use crate::errors::LoadError;
use crate::save::{FORMAT_VERSION, REACTOR_FORMAT};

/// A loaded reactor input file.
#[derive(Debug, Clone, Deserialize)]
pub struct ReactorFile {
    pub format: String,
    pub version: u32,
    pub name: String,
    pub parameters: ParameterSet,
    /// Omitted constants fall back to the standard oversize values.
    #[serde(default)]
    pub constants: LayoutConstants,
}

/// Deserialize reactor inputs from a JSON string.
///
/// Validates the format identifier and version. Parameter values are not
/// checked here; that is the layout engine's job.
pub fn load_reactor(json: &str) -> Result<ReactorFile, LoadError> {
    let file: ReactorFile =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if file.format != REACTOR_FORMAT {
        return Err(LoadError::UnknownFormat(file.format));
    }

    if file.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: file.version,
            supported_version: FORMAT_VERSION,
        });
    }

    Ok(file)
}
