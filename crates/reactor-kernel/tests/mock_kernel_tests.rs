use reactor_kernel::{Kernel, KernelCall, KernelError, KernelIntrospect, MockKernel};
use reactor_types::{CylinderDims, ShapeDefinition, ShapeKind};

fn cylinder(inner_radius: f64, outer_radius: f64, height: f64) -> ShapeDefinition {
    ShapeDefinition::Cylinder(CylinderDims {
        inner_radius,
        outer_radius,
        height,
    })
}

// ── Construction ───────────────────────────────────────────────────────────

#[test]
fn make_solid_records_call_and_bounds() {
    let mut kernel = MockKernel::new();
    let handle = kernel.make_solid(&cylinder(1.0, 2.0, 4.0), 180.0).unwrap();

    assert_eq!(kernel.call_count(), 1);
    assert_eq!(
        kernel.calls()[0],
        KernelCall::MakeSolid {
            kind: ShapeKind::Cylinder,
            rotation_angle: 180.0
        }
    );

    let bbox = kernel.bounding_box(&handle).unwrap();
    assert_eq!((bbox.r_min, bbox.r_max), (1.0, 2.0));
    assert_eq!((bbox.z_min, bbox.z_max), (-2.0, 2.0));
    assert_eq!(kernel.rotation_angle(&handle), Some(180.0));
}

#[test]
fn degenerate_cylinder_is_rejected() {
    let mut kernel = MockKernel::new();
    let result = kernel.make_solid(&cylinder(2.0, 2.0, 4.0), 180.0);
    assert!(matches!(result, Err(KernelError::Degenerate { .. })));
    // The failed attempt is still a kernel call.
    assert_eq!(kernel.call_count(), 1);
}

#[test]
fn full_sweep_failure_mode_only_hits_360() {
    let mut kernel = MockKernel::with_full_sweep_failures();
    assert!(kernel.make_solid(&cylinder(1.0, 2.0, 4.0), 359.9).is_ok());
    let result = kernel.make_solid(&cylinder(1.0, 2.0, 4.0), 360.0);
    assert!(matches!(result, Err(KernelError::Degenerate { .. })));
}

#[test]
fn injected_failure_targets_one_kind() {
    let mut kernel = MockKernel::new().fail_on(ShapeKind::Cylinder);
    let result = kernel.make_solid(&cylinder(1.0, 2.0, 4.0), 90.0);
    assert!(matches!(result, Err(KernelError::Other { .. })));
}

// ── Booleans ───────────────────────────────────────────────────────────────

#[test]
fn subtract_removes_tool_region() {
    let mut kernel = MockKernel::new();
    let a = kernel.make_solid(&cylinder(0.0, 4.0, 4.0), 180.0).unwrap();
    let b = kernel.make_solid(&cylinder(1.0, 2.0, 10.0), 180.0).unwrap();
    let cut = kernel.boolean_subtract(&a, &b).unwrap();

    assert!(kernel.contains_point(&cut, 0.5, 0.0));
    assert!(!kernel.contains_point(&cut, 1.5, 0.0));
    assert!(kernel.contains_point(&cut, 3.0, 1.0));
    // Operands are untouched.
    assert!(kernel.contains_point(&a, 1.5, 0.0));
}

#[test]
fn intersect_keeps_common_region() {
    let mut kernel = MockKernel::new();
    let a = kernel.make_solid(&cylinder(0.0, 4.0, 4.0), 180.0).unwrap();
    let b = kernel.make_solid(&cylinder(3.0, 6.0, 10.0), 180.0).unwrap();
    let both = kernel.boolean_intersect(&a, &b).unwrap();

    assert!(kernel.contains_point(&both, 3.5, 1.0));
    assert!(!kernel.contains_point(&both, 2.0, 1.0));
    assert!(!kernel.contains_point(&both, 5.0, 1.0));

    let bbox = kernel.bounding_box(&both).unwrap();
    assert_eq!((bbox.r_min, bbox.r_max), (3.0, 4.0));
    assert_eq!((bbox.z_min, bbox.z_max), (-2.0, 2.0));
}

#[test]
fn intersect_of_disjoint_solids_fails() {
    let mut kernel = MockKernel::new();
    let a = kernel.make_solid(&cylinder(0.0, 1.0, 4.0), 180.0).unwrap();
    let b = kernel.make_solid(&cylinder(2.0, 3.0, 4.0), 180.0).unwrap();
    let result = kernel.boolean_intersect(&a, &b);
    assert!(matches!(result, Err(KernelError::BooleanFailed { .. })));
}

#[test]
fn boolean_on_foreign_handle_fails() {
    let mut kernel = MockKernel::new();
    let mut other = MockKernel::new();
    let a = kernel.make_solid(&cylinder(0.0, 1.0, 4.0), 180.0).unwrap();
    let _ = other.make_solid(&cylinder(0.0, 1.0, 4.0), 180.0).unwrap();
    let b = other.make_solid(&cylinder(0.0, 1.0, 4.0), 180.0).unwrap();

    let result = kernel.boolean_subtract(&a, &b);
    assert!(matches!(result, Err(KernelError::UnknownHandle { id: 2 })));
}
