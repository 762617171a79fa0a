//! MockKernel: deterministic test double implementing Kernel + KernelIntrospect.
//!
//! Solids are kept as membership trees over the `(r, z)` cross-section:
//! primitives answer point queries analytically and booleans combine their
//! operands' answers. Every call is recorded so tests can assert exactly
//! which kernel operations ran, and in what order.

use std::collections::HashMap;

use reactor_types::{ShapeDefinition, ShapeKind};
use tracing::debug;

use crate::primitives;
use crate::traits::{Kernel, KernelIntrospect};
use crate::types::*;

/// One recorded kernel invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelCall {
    MakeSolid { kind: ShapeKind, rotation_angle: f64 },
    Subtract { a: u64, b: u64 },
    Intersect { a: u64, b: u64 },
}

#[derive(Debug, Clone)]
enum MockNode {
    Primitive(ShapeDefinition),
    Subtract(u64, u64),
    Intersect(u64, u64),
}

#[derive(Debug, Clone)]
struct MockSolid {
    node: MockNode,
    bbox: BoundingBox,
    rotation_angle: f64,
}

/// Deterministic test double for the geometry kernel.
/// Implements both Kernel and KernelIntrospect.
pub struct MockKernel {
    next_handle: u64,
    solids: HashMap<u64, MockSolid>,
    calls: Vec<KernelCall>,
    /// Reject 360 degree sweeps the way real kernels tend to.
    fail_full_sweep: bool,
    /// Shape kinds whose construction is forced to fail.
    failing_kinds: Vec<ShapeKind>,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            solids: HashMap::new(),
            calls: Vec::new(),
            fail_full_sweep: false,
            failing_kinds: Vec::new(),
        }
    }

    /// A kernel that fails every full 360 degree sweep with a degenerate-seam error.
    pub fn with_full_sweep_failures() -> Self {
        Self {
            fail_full_sweep: true,
            ..Self::new()
        }
    }

    /// Force construction of `kind` to fail.
    pub fn fail_on(mut self, kind: ShapeKind) -> Self {
        self.failing_kinds.push(kind);
        self
    }

    /// Every call made so far, oldest first.
    pub fn calls(&self) -> &[KernelCall] {
        &self.calls
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Shape kinds passed to `make_solid`, in call order.
    pub fn built_kinds(&self) -> Vec<ShapeKind> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                KernelCall::MakeSolid { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect()
    }

    fn alloc_handle(&mut self) -> KernelSolidHandle {
        let h = KernelSolidHandle(self.next_handle);
        self.next_handle += 1;
        h
    }

    fn get(&self, handle: &KernelSolidHandle) -> Result<&MockSolid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::UnknownHandle { id: handle.id() })
    }

    fn insert(&mut self, solid: MockSolid) -> KernelSolidHandle {
        let handle = self.alloc_handle();
        self.solids.insert(handle.id(), solid);
        handle
    }

    fn node_contains(&self, id: u64, r: f64, z: f64) -> bool {
        let Some(solid) = self.solids.get(&id) else {
            return false;
        };
        if !solid.bbox.contains(r, z) {
            return false;
        }
        match &solid.node {
            MockNode::Primitive(shape) => primitives::contains(shape, r, z),
            MockNode::Subtract(a, b) => {
                self.node_contains(*a, r, z) && !self.node_contains(*b, r, z)
            }
            MockNode::Intersect(a, b) => {
                self.node_contains(*a, r, z) && self.node_contains(*b, r, z)
            }
        }
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for MockKernel {
    fn make_solid(
        &mut self,
        shape: &ShapeDefinition,
        rotation_angle: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        let kind = shape.kind();
        self.calls.push(KernelCall::MakeSolid {
            kind,
            rotation_angle,
        });

        primitives::validate_rotation(rotation_angle)?;
        if self.fail_full_sweep && rotation_angle >= 360.0 {
            return Err(KernelError::Degenerate {
                reason: format!("{kind:?} sweep closes on itself at 360 degrees"),
            });
        }
        if self.failing_kinds.contains(&kind) {
            return Err(KernelError::Other {
                message: format!("injected failure building {kind:?}"),
            });
        }
        primitives::validate(shape)?;

        let bbox = primitives::bounding_box(shape);
        let handle = self.insert(MockSolid {
            node: MockNode::Primitive(shape.clone()),
            bbox,
            rotation_angle,
        });
        debug!(handle = handle.id(), ?kind, "mock solid created");
        Ok(handle)
    }

    fn boolean_subtract(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError> {
        self.calls.push(KernelCall::Subtract {
            a: a.id(),
            b: b.id(),
        });
        let (bbox, rotation_angle) = {
            let sa = self.get(a)?;
            self.get(b)?;
            (sa.bbox, sa.rotation_angle)
        };
        Ok(self.insert(MockSolid {
            node: MockNode::Subtract(a.id(), b.id()),
            bbox,
            rotation_angle,
        }))
    }

    fn boolean_intersect(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError> {
        self.calls.push(KernelCall::Intersect {
            a: a.id(),
            b: b.id(),
        });
        let (bbox, rotation_angle) = {
            let sa = self.get(a)?;
            let sb = self.get(b)?;
            let bbox = sa
                .bbox
                .intersection(&sb.bbox)
                .ok_or_else(|| KernelError::BooleanFailed {
                    reason: format!("solids {} and {} do not overlap", a.id(), b.id()),
                })?;
            (bbox, sa.rotation_angle)
        };
        Ok(self.insert(MockSolid {
            node: MockNode::Intersect(a.id(), b.id()),
            bbox,
            rotation_angle,
        }))
    }
}

impl KernelIntrospect for MockKernel {
    fn bounding_box(&self, solid: &KernelSolidHandle) -> Option<BoundingBox> {
        self.solids.get(&solid.id()).map(|s| s.bbox)
    }

    fn contains_point(&self, solid: &KernelSolidHandle, r: f64, z: f64) -> bool {
        self.node_contains(solid.id(), r, z)
    }

    fn rotation_angle(&self, solid: &KernelSolidHandle) -> Option<f64> {
        self.solids.get(&solid.id()).map(|s| s.rotation_angle)
    }
}
