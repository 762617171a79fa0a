//! Eager checks that run before any kernel call.

use reactor_types::{ParameterSet, Zone, ZoneId};
use tracing::debug;

use crate::diagnostics::{Diagnostic, Validated};
use crate::error::{ApexBound, LayoutError};
use crate::ledger::ZoneLedger;

/// Sweep angle at which kernels are prone to seam failures.
pub const FULL_SWEEP_DEGREES: f64 = 360.0;

/// The apex x coordinate must sit over the plasma zone, bounds included.
pub fn validate_apex(apex_x: f64, plasma: &Zone) -> Result<(), LayoutError> {
    let bound = if !apex_x.is_finite() {
        ApexBound::NotFinite
    } else if apex_x < plasma.start {
        ApexBound::TooSmall
    } else if apex_x > plasma.end {
        ApexBound::TooLarge
    } else {
        return Ok(());
    };
    Err(LayoutError::ApexOutOfRange {
        apex_x,
        plasma_start: plasma.start,
        plasma_end: plasma.end,
        bound,
    })
}

/// Advisory only: a full sweep is allowed but flagged.
pub fn check_rotation_angle(rotation_angle: f64) -> Vec<Diagnostic> {
    if (rotation_angle - FULL_SWEEP_DEGREES).abs() <= f64::EPSILON {
        debug!(rotation_angle, "full sweep flagged");
        vec![Diagnostic::FullSweepRotation { rotation_angle }]
    } else {
        Vec::new()
    }
}

/// Run every eager rule against a computed ledger.
pub fn validate(params: &ParameterSet, ledger: &ZoneLedger) -> Result<Validated<()>, LayoutError> {
    let plasma = ledger.zone(ZoneId::Plasma).ok_or(LayoutError::MissingZone {
        zone: ZoneId::Plasma,
    })?;
    validate_apex(params.plasma_high_point.0, plasma)?;
    Ok(Validated::with_diagnostics(
        (),
        check_rotation_angle(params.rotation_angle),
    ))
}
