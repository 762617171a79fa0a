use serde::{Deserialize, Serialize};

/// Advisory finding that does not stop the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A full 360 degree sweep is accepted but tends to make kernels fail
    /// later with construction errors.
    FullSweepRotation { rotation_angle: f64 },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::FullSweepRotation { rotation_angle } => write!(
                f,
                "{rotation_angle} degree rotation may result in kernel construction errors"
            ),
        }
    }
}

/// A success value together with any advisory diagnostics raised on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Validated<T> {
    pub fn with_diagnostics(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }
}
