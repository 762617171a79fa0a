use reactor_kernel::KernelError;
use reactor_types::{ShapeKind, SolidName, ZoneId};

/// Which side of the plasma zone the apex fell off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApexBound {
    TooSmall,
    TooLarge,
    NotFinite,
}

impl std::fmt::Display for ApexBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApexBound::TooSmall => f.write_str("too small"),
            ApexBound::TooLarge => f.write_str("too large"),
            ApexBound::NotFinite => f.write_str("not finite"),
        }
    }
}

/// Errors from the layout engine.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LayoutError {
    #[error("plasma high point x = {apex_x} is {bound}, it must lie within [{plasma_start}, {plasma_end}]")]
    ApexOutOfRange {
        apex_x: f64,
        plasma_start: f64,
        plasma_end: f64,
        bound: ApexBound,
    },

    #[error("zone {zone} is not in the ledger")]
    MissingZone { zone: ZoneId },

    #[error("{solid} references {referenced}, which is not a {expected:?}")]
    IncompatibleReference {
        solid: SolidName,
        referenced: SolidName,
        expected: ShapeKind,
    },

    #[error("{referenced_by} needs {solid}, which has not been built")]
    MissingOutput {
        solid: SolidName,
        referenced_by: SolidName,
    },

    #[error("descriptor graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("kernel failed building {solid}: {source}")]
    Kernel {
        solid: SolidName,
        #[source]
        source: KernelError,
    },
}

/// Structural problems in a descriptor set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("solid {name} is declared more than once")]
    DuplicateName { name: SolidName },

    #[error("{from} references unknown solid {to}")]
    UnknownReference { from: SolidName, to: SolidName },

    #[error("dependency cycle among {involved:?}")]
    Cycle { involved: Vec<SolidName> },

    #[error("composition target {name} is emitted before its final cut")]
    TargetNotDeferred { name: SolidName },
}
