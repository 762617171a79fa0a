use reactor_types::ShapeDefinition;

use crate::types::*;

/// Solid-modeling kernel boundary. Turns resolved shape definitions into
/// boundary representations and combines them with booleans.
///
/// Every call is blocking and deterministic; failures are reported, never
/// retried by the kernel.
pub trait Kernel {
    /// Sweep the cross-section described by `shape` through `rotation_angle` degrees.
    fn make_solid(
        &mut self,
        shape: &ShapeDefinition,
        rotation_angle: f64,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Boolean subtraction: a minus b.
    fn boolean_subtract(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Boolean intersection of two solids.
    fn boolean_intersect(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError>;
}

/// Read-only queries on kernel solids, in the `(r, z)` cross-section plane.
pub trait KernelIntrospect {
    /// Bounding box of the solid's cross-section.
    fn bounding_box(&self, solid: &KernelSolidHandle) -> Option<BoundingBox>;

    /// Whether the cross-section point `(r, z)` lies inside the solid.
    fn contains_point(&self, solid: &KernelSolidHandle, r: f64, z: f64) -> bool;

    /// Sweep angle the solid was built with, in degrees.
    fn rotation_angle(&self, solid: &KernelSolidHandle) -> Option<f64>;
}
