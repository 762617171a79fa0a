//! Helper functions: error type, reference inputs, sampling grids, tracing.

use std::sync::Once;

use layout_engine::LayoutError;
use reactor_file::{LoadError, SaveError};
use reactor_kernel::BoundingBox;
use reactor_types::ParameterSet;
use tracing_subscriber::EnvFilter;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("solid not found: {name}")]
    SolidNotFound { name: String },

    #[error("reactor has not been built")]
    NotBuilt,

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },

    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("load error: {0}")]
    Load(#[from] LoadError),

    #[error("save error: {0}")]
    Save(#[from] SaveError),
}

// ── Reference Inputs ────────────────────────────────────────────────────────

/// The center column study reference inputs.
///
/// Radial build puts the plasma zone at [3.6, 4.6]; apex height is 3 and the
/// sweep is a half turn so nothing trips the full-sweep diagnostic.
pub fn reference_parameters(apex_x: f64) -> ParameterSet {
    ParameterSet {
        inner_bore_radial_thickness: 1.0,
        inboard_tf_leg_radial_thickness: 1.0,
        center_column_shield_radial_thickness_mid: 1.0,
        center_column_shield_radial_thickness_upper: 1.0,
        inboard_firstwall_radial_thickness: 0.1,
        divertor_radial_thickness: 2.0,
        inner_plasma_gap_radial_thickness: 0.5,
        plasma_radial_thickness: 1.0,
        outer_plasma_gap_radial_thickness: 0.5,
        center_column_arc_vertical_thickness: 2.0,
        plasma_high_point: (apex_x, 3.0),
        plasma_gap_vertical_thickness: 0.3,
        rotation_angle: 180.0,
    }
}

// ── Sampling ────────────────────────────────────────────────────────────────

/// Regular `(steps + 1) x (steps + 1)` grid of `(r, z)` points over `bbox`.
pub fn sample_grid(bbox: &BoundingBox, steps: usize) -> impl Iterator<Item = (f64, f64)> + '_ {
    let steps = steps.max(1);
    let dr = (bbox.r_max - bbox.r_min) / steps as f64;
    let dz = (bbox.z_max - bbox.z_min) / steps as f64;
    (0..=steps).flat_map(move |i| {
        (0..=steps).map(move |j| (bbox.r_min + dr * i as f64, bbox.z_min + dz * j as f64))
    })
}

// ── Tracing ─────────────────────────────────────────────────────────────────

static TRACING: Once = Once::new();

/// Install a fmt subscriber filtered by `RUST_LOG` (default `warn`).
/// Safe to call from every test.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
