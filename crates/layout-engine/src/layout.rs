//! Top-level pipeline: plan without a kernel, then build against one.

use std::collections::HashMap;

use reactor_kernel::{Kernel, KernelSolidHandle};
use reactor_types::{LayoutConstants, ParameterSet, PlasmaShape, ShapeDefinition, SolidName};
use tracing::{info, instrument};

use crate::builder::build_all;
use crate::composition::{compose, reactor_composition, Assembly, CompositionStep};
use crate::descriptor::{reactor_descriptors, ResolvedSolid};
use crate::diagnostics::Diagnostic;
use crate::error::LayoutError;
use crate::graph::DescriptorGraph;
use crate::ledger::ZoneLedger;
use crate::validation;

/// A fully resolved, validated layout. Building it is the only step that
/// touches the kernel.
#[derive(Debug, Clone)]
pub struct ReactorLayout {
    pub parameters: ParameterSet,
    pub constants: LayoutConstants,
    pub ledger: ZoneLedger,
    pub graph: DescriptorGraph,
    /// Resolved solids in build order.
    pub plan: Vec<ResolvedSolid>,
    pub composition: Vec<CompositionStep>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct ReactorBuild {
    pub assembly: Assembly,
    pub ledger: ZoneLedger,
    /// Order in which solids were built, including construction aids.
    pub build_order: Vec<SolidName>,
    pub plasma: PlasmaShape,
    pub diagnostics: Vec<Diagnostic>,
    /// Every built solid's handle as the builder left it, before the
    /// composition stage cut anything.
    pub pre_composition: HashMap<SolidName, KernelSolidHandle>,
}

impl ReactorBuild {
    /// Handle of `name` before composition, construction aids included.
    pub fn built_handle(&self, name: &str) -> Option<&KernelSolidHandle> {
        self.pre_composition.get(&SolidName::new(name))
    }
}

impl ReactorLayout {
    /// Zone ledger, validation gate, descriptor graph and resolution.
    /// Fails fast on input errors; never calls a kernel.
    #[instrument(skip_all, fields(rotation_angle = parameters.rotation_angle))]
    pub fn plan(
        parameters: ParameterSet,
        constants: LayoutConstants,
    ) -> Result<Self, LayoutError> {
        let ledger = ZoneLedger::from_parameters(&parameters, &constants);
        let validated = validation::validate(&parameters, &ledger)?;

        let graph = DescriptorGraph::new(reactor_descriptors(&parameters, &constants))?;
        let composition = reactor_composition();
        graph.check_composition(&composition)?;

        let mut definitions: HashMap<SolidName, ShapeDefinition> = HashMap::new();
        let mut plan = Vec::with_capacity(graph.len());
        for descriptor in graph.ordered() {
            let definition = descriptor.resolve(&ledger, &definitions)?;
            definitions.insert(descriptor.name.clone(), definition.clone());
            plan.push(ResolvedSolid {
                name: descriptor.name.clone(),
                definition,
                post_ops: descriptor.post_ops.clone(),
                emission: descriptor.emission,
                metadata: descriptor.metadata.clone(),
            });
        }

        info!(
            solids = plan.len(),
            diagnostics = validated.diagnostics.len(),
            "layout planned"
        );

        Ok(Self {
            parameters,
            constants,
            ledger,
            graph,
            plan,
            composition,
            diagnostics: validated.diagnostics,
        })
    }

    /// Resolved definition of one solid.
    pub fn definition(&self, name: &str) -> Option<&ShapeDefinition> {
        self.plan
            .iter()
            .find(|s| s.name.as_str() == name)
            .map(|s| &s.definition)
    }

    /// Run the builder and the composition stage. Any kernel failure
    /// aborts the whole build; no partial assembly is returned.
    #[instrument(skip_all, fields(solids = self.plan.len()))]
    pub fn build(&self, kernel: &mut dyn Kernel) -> Result<ReactorBuild, LayoutError> {
        let outputs = build_all(&self.plan, self.parameters.rotation_angle, kernel)?;
        let build_order = outputs.order().to_vec();
        let pre_composition: HashMap<_, _> = build_order
            .iter()
            .filter_map(|name| Some((name.clone(), outputs.get(name)?.handle.clone())))
            .collect();
        let plasma = outputs.plasma_shape.ok_or_else(|| LayoutError::MissingOutput {
            solid: SolidName::new(crate::descriptor::names::PLASMA),
            referenced_by: SolidName::new("assembly"),
        })?;

        let assembly = compose(outputs, &self.composition, kernel)?;
        info!(solids = assembly.len(), "assembly complete");

        Ok(ReactorBuild {
            assembly,
            ledger: self.ledger.clone(),
            build_order,
            plasma,
            diagnostics: self.diagnostics.clone(),
            pre_composition,
        })
    }
}

/// Plan and build in one call with the default oversize constants.
pub fn build_reactor(
    parameters: ParameterSet,
    kernel: &mut dyn Kernel,
) -> Result<ReactorBuild, LayoutError> {
    ReactorLayout::plan(parameters, LayoutConstants::default())?.build(kernel)
}
