//! Dependency-ordered builder.
//!
//! Executes resolved solids strictly in graph order. Each step hands back
//! its own output; the builder collects them so later steps can read
//! earlier handles. Kernel failures abort the build immediately.

use std::collections::HashMap;

use reactor_kernel::{Kernel, KernelSolidHandle};
use reactor_types::{ExportMetadata, PlasmaShape, ShapeDefinition, SolidName};
use tracing::{info, instrument};

use crate::descriptor::{BooleanKind, Emission, ResolvedSolid};
use crate::error::LayoutError;

/// A kernel solid together with its passthrough metadata.
#[derive(Debug, Clone)]
pub struct BuiltSolid {
    pub name: SolidName,
    pub handle: KernelSolidHandle,
    pub definition: ShapeDefinition,
    pub emission: Emission,
    pub metadata: Option<ExportMetadata>,
}

/// What one build step produces.
#[derive(Debug)]
pub struct StepOutput {
    pub solid: BuiltSolid,
    /// Only the plasma step reports shape scalars.
    pub plasma_shape: Option<PlasmaShape>,
}

/// Everything the builder produced, owned until composition takes it.
#[derive(Debug, Default)]
pub struct BuildOutputs {
    solids: HashMap<SolidName, BuiltSolid>,
    order: Vec<SolidName>,
    pub plasma_shape: Option<PlasmaShape>,
}

impl BuildOutputs {
    pub fn get(&self, name: &SolidName) -> Option<&BuiltSolid> {
        self.solids.get(name)
    }

    /// Names in the order they were built.
    pub fn order(&self) -> &[SolidName] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub(crate) fn handle(
        &self,
        name: &SolidName,
        referenced_by: &SolidName,
    ) -> Result<&KernelSolidHandle, LayoutError> {
        self.solids
            .get(name)
            .map(|s| &s.handle)
            .ok_or_else(|| LayoutError::MissingOutput {
                solid: name.clone(),
                referenced_by: referenced_by.clone(),
            })
    }

    pub(crate) fn replace_handle(&mut self, name: &SolidName, handle: KernelSolidHandle) {
        if let Some(solid) = self.solids.get_mut(name) {
            solid.handle = handle;
        }
    }

    /// Take the solids out in build order.
    pub(crate) fn into_ordered(mut self) -> Vec<BuiltSolid> {
        self.order
            .iter()
            .filter_map(|name| self.solids.remove(name))
            .collect()
    }

    fn push(&mut self, step: StepOutput) {
        if step.plasma_shape.is_some() {
            self.plasma_shape = step.plasma_shape;
        }
        self.order.push(step.solid.name.clone());
        self.solids.insert(step.solid.name.clone(), step.solid);
    }
}

/// Build every solid of `plan`, which must already be in dependency order.
#[instrument(skip_all, fields(solids = plan.len(), rotation_angle = rotation_angle))]
pub fn build_all(
    plan: &[ResolvedSolid],
    rotation_angle: f64,
    kernel: &mut dyn Kernel,
) -> Result<BuildOutputs, LayoutError> {
    let mut outputs = BuildOutputs::default();
    for solid in plan {
        let step = build_step(solid, rotation_angle, &outputs, kernel)?;
        info!(solid = %step.solid.name, kind = ?step.solid.definition.kind(), "solid built");
        outputs.push(step);
    }
    Ok(outputs)
}

/// Construct one solid and apply its post-build booleans.
pub fn build_step(
    solid: &ResolvedSolid,
    rotation_angle: f64,
    built: &BuildOutputs,
    kernel: &mut dyn Kernel,
) -> Result<StepOutput, LayoutError> {
    let kernel_err = |source| LayoutError::Kernel {
        solid: solid.name.clone(),
        source,
    };

    let mut handle = kernel
        .make_solid(&solid.definition, rotation_angle)
        .map_err(kernel_err)?;

    for op in &solid.post_ops {
        let tool = built.handle(&op.tool, &solid.name)?;
        handle = match op.kind {
            BooleanKind::Subtract => kernel.boolean_subtract(&handle, tool),
            BooleanKind::Intersect => kernel.boolean_intersect(&handle, tool),
        }
        .map_err(kernel_err)?;
    }

    let plasma_shape = match &solid.definition {
        ShapeDefinition::PlasmaFromPoints(points) => Some(PlasmaShape::from_points(points)),
        _ => None,
    };

    Ok(StepOutput {
        solid: BuiltSolid {
            name: solid.name.clone(),
            handle,
            definition: solid.definition.clone(),
            emission: solid.emission,
            metadata: solid.metadata.clone(),
        },
        plasma_shape,
    })
}
