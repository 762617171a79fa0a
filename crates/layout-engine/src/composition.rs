//! Boolean composition stage.
//!
//! Runs after every primary solid exists. A composition step cuts one
//! built solid by another; solids deferred by their descriptor join the
//! assembly only once all steps have run, so a target is never emitted in
//! its pre-cut form.

use reactor_kernel::Kernel;
use reactor_types::{ShapeKind, SolidName};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::builder::{BuildOutputs, BuiltSolid};
use crate::descriptor::{names, BooleanKind, Emission, PostOp};
use crate::error::LayoutError;

/// Replace `target` with `target <op> tool`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionStep {
    pub target: SolidName,
    pub op: PostOp,
}

/// The divertor was intersected from the uncut blanket; now the blanket
/// gives that volume up so the two are disjoint.
pub fn reactor_composition() -> Vec<CompositionStep> {
    vec![CompositionStep {
        target: SolidName::new(names::BLANKET),
        op: PostOp::cut_by(names::DIVERTOR),
    }]
}

/// Final ordered solids, frozen once produced.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    solids: Vec<BuiltSolid>,
}

impl Assembly {
    pub fn solids(&self) -> &[BuiltSolid] {
        &self.solids
    }

    pub fn len(&self) -> usize {
        self.solids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&BuiltSolid> {
        self.solids.iter().find(|s| s.name.as_str() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.solids.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn count_of(&self, kind: ShapeKind) -> usize {
        self.solids
            .iter()
            .filter(|s| s.definition.kind() == kind)
            .count()
    }
}

/// Apply `steps` in order, then emit the assembly: immediate solids in
/// build order followed by deferred solids in build order.
#[instrument(skip_all, fields(steps = steps.len()))]
pub fn compose(
    mut outputs: BuildOutputs,
    steps: &[CompositionStep],
    kernel: &mut dyn Kernel,
) -> Result<Assembly, LayoutError> {
    for step in steps {
        let target = outputs.handle(&step.target, &step.target)?;
        let tool = outputs.handle(&step.op.tool, &step.target)?;
        let result = match step.op.kind {
            BooleanKind::Subtract => kernel.boolean_subtract(target, tool),
            BooleanKind::Intersect => kernel.boolean_intersect(target, tool),
        }
        .map_err(|source| LayoutError::Kernel {
            solid: step.target.clone(),
            source,
        })?;
        info!(
            solid = %step.target,
            tool = %step.op.tool,
            kind = ?step.op.kind,
            "composition applied"
        );
        outputs.replace_handle(&step.target, result);
    }

    let built = outputs.into_ordered();
    let (immediate, rest): (Vec<_>, Vec<_>) = built
        .into_iter()
        .partition(|s| s.emission == Emission::Immediate);
    let deferred = rest
        .into_iter()
        .filter(|s| s.emission == Emission::AfterComposition);

    let mut solids = immediate;
    solids.extend(deferred);
    Ok(Assembly { solids })
}
