//! ReactorHarness: fluent API for planning, building and checking reactors
//! in tests.
//!
//! Drives `ReactorLayout::plan` and `ReactorLayout::build` against a
//! `MockKernel`. The build's pre-composition handles let oracles compare a
//! solid before and after its final cut.

use layout_engine::descriptor::names;
use layout_engine::{ReactorBuild, ReactorLayout};
use reactor_file::{load_reactor, save_manifest, ReactorMetadata};
use reactor_kernel::{KernelSolidHandle, MockKernel};
use reactor_types::{LayoutConstants, ParameterSet};
use tracing::info;

use crate::helpers::*;
use crate::oracle::{self, OracleVerdict, DEFAULT_SAMPLES};

/// A fluent driver for building and verifying one reactor in tests.
pub struct ReactorHarness {
    pub parameters: ParameterSet,
    pub constants: LayoutConstants,
    kernel: MockKernel,
    build: Option<ReactorBuild>,
}

impl ReactorHarness {
    /// Reference parameters with the apex inside the plasma zone.
    pub fn mock() -> Self {
        Self::with_kernel(MockKernel::new())
    }

    /// Reference parameters on a kernel that rejects full sweeps.
    pub fn strict() -> Self {
        Self::with_kernel(MockKernel::with_full_sweep_failures())
    }

    pub fn with_kernel(kernel: MockKernel) -> Self {
        Self {
            parameters: reference_parameters(4.0),
            constants: LayoutConstants::default(),
            kernel,
            build: None,
        }
    }

    /// Load parameters and constants from a reactor file.
    pub fn load(mut self, json: &str) -> Result<Self, HarnessError> {
        let file = load_reactor(json)?;
        self.parameters = file.parameters;
        self.constants = file.constants;
        Ok(self)
    }

    // ── Inputs ──────────────────────────────────────────────────────────

    pub fn apex(mut self, x: f64, z: f64) -> Self {
        self.parameters.plasma_high_point = (x, z);
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.parameters.rotation_angle = degrees;
        self
    }

    pub fn constants(mut self, constants: LayoutConstants) -> Self {
        self.constants = constants;
        self
    }

    pub fn edit(mut self, f: impl FnOnce(&mut ParameterSet)) -> Self {
        f(&mut self.parameters);
        self
    }

    // ── Pipeline ────────────────────────────────────────────────────────

    /// Plan without touching the kernel.
    pub fn plan(&self) -> Result<ReactorLayout, HarnessError> {
        Ok(ReactorLayout::plan(
            self.parameters.clone(),
            self.constants.clone(),
        )?)
    }

    /// Plan, then build and compose on the harness kernel.
    pub fn build(&mut self) -> Result<&ReactorBuild, HarnessError> {
        self.build = None;
        let build = self.plan()?.build(&mut self.kernel)?;
        info!(solids = build.assembly.len(), "harness build complete");
        Ok(&*self.build.insert(build))
    }

    // ── Queries ─────────────────────────────────────────────────────────

    pub fn kernel(&self) -> &MockKernel {
        &self.kernel
    }

    pub fn result(&self) -> Result<&ReactorBuild, HarnessError> {
        self.build.as_ref().ok_or(HarnessError::NotBuilt)
    }

    /// Handle of an assembled solid.
    pub fn solid_handle(&self, name: &str) -> Result<KernelSolidHandle, HarnessError> {
        self.result()?
            .assembly
            .get(name)
            .map(|s| s.handle.clone())
            .ok_or_else(|| HarnessError::SolidNotFound {
                name: name.to_string(),
            })
    }

    /// Handle of a solid as the builder left it, before composition.
    pub fn built_handle(&self, name: &str) -> Result<KernelSolidHandle, HarnessError> {
        self.result()?
            .built_handle(name)
            .cloned()
            .ok_or_else(|| HarnessError::SolidNotFound {
                name: name.to_string(),
            })
    }

    pub fn manifest(&self, name: &str) -> Result<String, HarnessError> {
        Ok(save_manifest(self.result()?, &ReactorMetadata::new(name))?)
    }

    // ── Checks ──────────────────────────────────────────────────────────

    /// The composition properties of the reactor: the divertor came out of
    /// the cut blanket, and the final blanket and divertor do not overlap.
    pub fn check_composition(&self) -> Result<Vec<OracleVerdict>, HarnessError> {
        let divertor = self.solid_handle(names::DIVERTOR)?;
        let pre_cut = self.built_handle(names::BLANKET)?;
        let blanket = self.solid_handle(names::BLANKET)?;
        Ok(vec![
            oracle::check_non_empty(&self.kernel, &divertor, DEFAULT_SAMPLES),
            oracle::check_subset(&self.kernel, &divertor, &pre_cut, DEFAULT_SAMPLES),
            oracle::check_disjoint(&self.kernel, &divertor, &blanket, DEFAULT_SAMPLES),
            oracle::check_non_empty(&self.kernel, &blanket, DEFAULT_SAMPLES),
        ])
    }

    /// Every oracle that applies to the finished build.
    pub fn check_all(&self) -> Result<Vec<OracleVerdict>, HarnessError> {
        let build = self.result()?;
        let mut verdicts = vec![
            oracle::check_zone_contiguity(&build.ledger),
            oracle::check_emission_order(&build.assembly),
            oracle::check_rotation_angle(
                &self.kernel,
                &build.assembly,
                self.parameters.rotation_angle,
            ),
        ];
        for solid in build.assembly.solids() {
            verdicts.extend(oracle::run_solid_checks(&self.kernel, &solid.handle));
        }
        verdicts.extend(self.check_composition()?);
        Ok(verdicts)
    }

    /// Fail on the first oracle that did not pass.
    pub fn assert_all_pass(&self) -> Result<&Self, HarnessError> {
        for verdict in self.check_all()? {
            if !verdict.passed {
                return Err(HarnessError::OracleFailure {
                    oracle: verdict.oracle_name,
                    detail: verdict.detail,
                });
            }
        }
        Ok(self)
    }
}
