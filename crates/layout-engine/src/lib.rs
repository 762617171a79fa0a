//! Parametric layout and composition engine for a center-column study reactor.
//!
//! Thickness inputs flow through the zone ledger (radial then vertical
//! accumulation), the apex validation gate, descriptor resolution and a
//! dependency-ordered build against an external kernel, and finish with
//! the boolean composition stage that produces the final assembly.

pub mod builder;
pub mod composition;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod graph;
pub mod layout;
pub mod ledger;
pub mod validation;

pub use builder::{BuildOutputs, BuiltSolid};
pub use composition::{Assembly, CompositionStep};
pub use descriptor::{
    BooleanKind, Emission, PostOp, ResolvedSolid, Scalar, ShapeBinding, SolidDescriptor,
};
pub use diagnostics::{Diagnostic, Validated};
pub use error::{ApexBound, GraphError, LayoutError};
pub use graph::DescriptorGraph;
pub use layout::{build_reactor, ReactorBuild, ReactorLayout};
pub use ledger::{ContiguityViolation, ZoneLedger};
