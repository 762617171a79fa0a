//! Assertion helpers with diagnostic output.
//!
//! Every failure names what was expected and what the build produced.

use layout_engine::{ReactorBuild, ZoneLedger};
use reactor_types::{PlasmaShape, ZoneId};

use crate::helpers::HarnessError;

/// Assert the assembly holds exactly `expected`, in order.
pub fn assert_assembly_order(build: &ReactorBuild, expected: &[&str]) -> Result<(), HarnessError> {
    let actual = build.assembly.names();
    if actual == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("assembly order: expected {:?}, got {:?}", expected, actual),
        })
    }
}

/// Assert a zone's bounds within tolerance.
pub fn assert_zone(
    ledger: &ZoneLedger,
    id: ZoneId,
    start: f64,
    end: f64,
    tol: f64,
) -> Result<(), HarnessError> {
    let zone = ledger.zone(id).ok_or_else(|| HarnessError::AssertionFailed {
        detail: format!("zone {id} missing from ledger"),
    })?;
    if (zone.start - start).abs() > tol || (zone.end - end).abs() > tol {
        return Err(HarnessError::AssertionFailed {
            detail: format!(
                "zone {id}: expected [{start}, {end}], got [{}, {}] (tol={tol})",
                zone.start, zone.end
            ),
        });
    }
    Ok(())
}

/// Assert all four plasma scalars within tolerance.
pub fn assert_plasma_shape(
    actual: &PlasmaShape,
    expected: &PlasmaShape,
    tol: f64,
) -> Result<(), HarnessError> {
    let pairs = [
        ("major_radius", actual.major_radius, expected.major_radius),
        ("minor_radius", actual.minor_radius, expected.minor_radius),
        ("elongation", actual.elongation, expected.elongation),
        ("triangularity", actual.triangularity, expected.triangularity),
    ];
    for (name, a, e) in pairs {
        if (a - e).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!("plasma {name}: expected {e:.6}, got {a:.6} (tol={tol})"),
            });
        }
    }
    Ok(())
}
