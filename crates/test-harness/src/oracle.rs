//! Verification oracles: pure functions returning pass/fail verdicts.
//!
//! Boolean results are checked by sampling membership on a grid over a
//! solid's cross-section bounds, so any kernel that implements
//! `KernelIntrospect` can be audited. Each oracle returns an
//! `OracleVerdict` with diagnostic detail, not panics.

use layout_engine::{Assembly, Emission, ZoneLedger};
use reactor_kernel::{KernelIntrospect, KernelSolidHandle};

use crate::helpers::sample_grid;

/// Grid resolution used when a caller does not pick one.
pub const DEFAULT_SAMPLES: usize = 60;

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: Some(value),
        }
    }
}

// ── Membership Oracles ──────────────────────────────────────────────────────

/// Check that at least one sample point lies inside `solid`.
/// The value is the fraction of the bounding box grid that is filled.
pub fn check_non_empty(
    introspect: &dyn KernelIntrospect,
    solid: &KernelSolidHandle,
    steps: usize,
) -> OracleVerdict {
    let Some(bbox) = introspect.bounding_box(solid) else {
        return OracleVerdict::fail("non_empty", format!("solid {} is unknown", solid.id()));
    };

    let mut total = 0usize;
    let mut inside = 0usize;
    for (r, z) in sample_grid(&bbox, steps) {
        total += 1;
        if introspect.contains_point(solid, r, z) {
            inside += 1;
        }
    }
    let fill = inside as f64 / total as f64;

    if inside > 0 {
        OracleVerdict::pass_val(
            "non_empty",
            format!("{inside} of {total} samples inside"),
            fill,
        )
    } else {
        OracleVerdict::fail_val("non_empty", format!("no sample of {total} inside"), fill)
    }
}

/// Check that every sampled point of `inner` is also in `outer`.
pub fn check_subset(
    introspect: &dyn KernelIntrospect,
    inner: &KernelSolidHandle,
    outer: &KernelSolidHandle,
    steps: usize,
) -> OracleVerdict {
    let Some(bbox) = introspect.bounding_box(inner) else {
        return OracleVerdict::fail("subset", format!("solid {} is unknown", inner.id()));
    };

    let escaped: Vec<(f64, f64)> = sample_grid(&bbox, steps)
        .filter(|&(r, z)| {
            introspect.contains_point(inner, r, z) && !introspect.contains_point(outer, r, z)
        })
        .collect();

    if escaped.is_empty() {
        OracleVerdict::pass(
            "subset",
            format!("solid {} lies within solid {}", inner.id(), outer.id()),
        )
    } else {
        OracleVerdict::fail_val(
            "subset",
            format!(
                "{} samples of solid {} outside solid {}, first at {:?}",
                escaped.len(),
                inner.id(),
                outer.id(),
                escaped[0]
            ),
            escaped.len() as f64,
        )
    }
}

/// Check that no sampled point lies in both `a` and `b`.
/// Samples over the overlap of the two bounding boxes.
pub fn check_disjoint(
    introspect: &dyn KernelIntrospect,
    a: &KernelSolidHandle,
    b: &KernelSolidHandle,
    steps: usize,
) -> OracleVerdict {
    let (Some(box_a), Some(box_b)) = (introspect.bounding_box(a), introspect.bounding_box(b))
    else {
        return OracleVerdict::fail(
            "disjoint",
            format!("solid {} or {} is unknown", a.id(), b.id()),
        );
    };
    let Some(overlap) = box_a.intersection(&box_b) else {
        return OracleVerdict::pass("disjoint", "bounding boxes do not overlap".to_string());
    };

    let shared = sample_grid(&overlap, steps)
        .filter(|&(r, z)| introspect.contains_point(a, r, z) && introspect.contains_point(b, r, z))
        .count();

    if shared == 0 {
        OracleVerdict::pass(
            "disjoint",
            format!("solids {} and {} share no sample", a.id(), b.id()),
        )
    } else {
        OracleVerdict::fail_val(
            "disjoint",
            format!("solids {} and {} share {shared} samples", a.id(), b.id()),
            shared as f64,
        )
    }
}

/// Check that every solid was swept by the same angle.
pub fn check_rotation_angle(
    introspect: &dyn KernelIntrospect,
    assembly: &Assembly,
    expected: f64,
) -> OracleVerdict {
    let off: Vec<String> = assembly
        .solids()
        .iter()
        .filter(|s| introspect.rotation_angle(&s.handle) != Some(expected))
        .map(|s| s.name.to_string())
        .collect();

    if off.is_empty() {
        OracleVerdict::pass_val(
            "rotation_angle",
            format!("all {} solids swept {expected} degrees", assembly.len()),
            expected,
        )
    } else {
        OracleVerdict::fail("rotation_angle", format!("solids {off:?} swept differently"))
    }
}

// ── Layout Oracles ──────────────────────────────────────────────────────────

/// Check that every zone starts where its link says it should.
pub fn check_zone_contiguity(ledger: &ZoneLedger) -> OracleVerdict {
    let violations = ledger.contiguity_violations();
    if violations.is_empty() {
        OracleVerdict::pass(
            "zone_contiguity",
            format!(
                "{} radial and {} vertical zones linked",
                ledger.radial().len(),
                ledger.vertical().len()
            ),
        )
    } else {
        let first = &violations[0];
        OracleVerdict::fail_val(
            "zone_contiguity",
            format!(
                "{} violations, first: {} starts at {} (expected {})",
                violations.len(),
                first.zone,
                first.actual_start,
                first.expected_start
            ),
            violations.len() as f64,
        )
    }
}

/// Check that deferred solids close the assembly and construction aids are
/// absent from it.
pub fn check_emission_order(assembly: &Assembly) -> OracleVerdict {
    let solids = assembly.solids();
    if let Some(aid) = solids.iter().find(|s| s.emission == Emission::Never) {
        return OracleVerdict::fail(
            "emission_order",
            format!("construction aid {} was emitted", aid.name),
        );
    }

    let first_deferred = solids
        .iter()
        .position(|s| s.emission == Emission::AfterComposition)
        .unwrap_or(solids.len());
    if let Some(late) = solids[first_deferred..]
        .iter()
        .find(|s| s.emission == Emission::Immediate)
    {
        return OracleVerdict::fail(
            "emission_order",
            format!("{} emitted after a deferred solid", late.name),
        );
    }

    OracleVerdict::pass(
        "emission_order",
        format!(
            "{} immediate then {} deferred",
            first_deferred,
            solids.len() - first_deferred
        ),
    )
}

/// Run all membership oracles that apply to one solid.
pub fn run_solid_checks(
    introspect: &dyn KernelIntrospect,
    solid: &KernelSolidHandle,
) -> Vec<OracleVerdict> {
    vec![check_non_empty(introspect, solid, DEFAULT_SAMPLES)]
}
