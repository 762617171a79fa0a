use reactor_types::{LayoutConstants, ParameterSet};
use serde::Serialize;

use crate::errors::SaveError;

/// Current reactor file format version.
pub const FORMAT_VERSION: u32 = 1;

/// Format identifier of reactor input files.
pub const REACTOR_FORMAT: &str = "reactor-layout";

#[derive(Debug, Serialize)]
struct ReactorFileOut<'a> {
    format: &'static str,
    version: u32,
    name: &'a str,
    parameters: &'a ParameterSet,
    constants: &'a LayoutConstants,
}

/// Serialize reactor inputs to a pretty-printed JSON string.
pub fn save_reactor(
    name: &str,
    parameters: &ParameterSet,
    constants: &LayoutConstants,
) -> Result<String, SaveError> {
    let file = ReactorFileOut {
        format: REACTOR_FORMAT,
        version: FORMAT_VERSION,
        name,
        parameters,
        constants,
    };
    Ok(serde_json::to_string_pretty(&file)?)
}
