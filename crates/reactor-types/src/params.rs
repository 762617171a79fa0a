use serde::{Deserialize, Serialize};

/// Default sector sweep, in degrees.
pub const DEFAULT_ROTATION_ANGLE: f64 = 360.0;

/// The flat set of user-supplied thicknesses and free points that fully
/// determines one reactor cross-section. All lengths are in metres.
///
/// Read-only input: nothing downstream writes back into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub inner_bore_radial_thickness: f64,
    pub inboard_tf_leg_radial_thickness: f64,
    pub center_column_shield_radial_thickness_mid: f64,
    pub center_column_shield_radial_thickness_upper: f64,
    pub inboard_firstwall_radial_thickness: f64,
    pub divertor_radial_thickness: f64,
    pub inner_plasma_gap_radial_thickness: f64,
    pub plasma_radial_thickness: f64,
    pub outer_plasma_gap_radial_thickness: f64,
    /// Height of the hyperbolic waist on the outer face of the shield.
    pub center_column_arc_vertical_thickness: f64,
    /// `(x, z)` of the top of the plasma.
    pub plasma_high_point: (f64, f64),
    pub plasma_gap_vertical_thickness: f64,
    /// Sector sweep in degrees, shared by every solid of the assembly.
    #[serde(default = "default_rotation_angle")]
    pub rotation_angle: f64,
}

fn default_rotation_angle() -> f64 {
    DEFAULT_ROTATION_ANGLE
}

/// Fixed oversize constants used to guarantee overlap before boolean cuts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConstants {
    /// Outboard blanket radial extent, blanket vertical extent and blanket thickness.
    #[serde(default = "default_outboard_extent")]
    pub outboard_extent: f64,
    /// Column solids (TF leg, shield) are this many times the shield end height.
    #[serde(default = "default_column_height_factor")]
    pub column_height_factor: f64,
    /// Inboard cutter height as a multiple of the firstwall end height.
    #[serde(default = "default_oversize_factor")]
    pub cutter_height_factor: f64,
    /// Divertor slab height as a multiple of the shield end height.
    #[serde(default = "default_oversize_factor")]
    pub divertor_height_factor: f64,
    /// Poloidal start angle of the blanket, in degrees.
    #[serde(default = "default_blanket_start_angle")]
    pub blanket_start_angle: f64,
    /// Poloidal stop angle of the blanket, in degrees.
    #[serde(default = "default_blanket_stop_angle")]
    pub blanket_stop_angle: f64,
}

fn default_outboard_extent() -> f64 {
    100.0
}
fn default_column_height_factor() -> f64 {
    2.0
}
fn default_oversize_factor() -> f64 {
    2.5
}
fn default_blanket_start_angle() -> f64 {
    -179.0
}
fn default_blanket_stop_angle() -> f64 {
    179.0
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            outboard_extent: default_outboard_extent(),
            column_height_factor: default_column_height_factor(),
            cutter_height_factor: default_oversize_factor(),
            divertor_height_factor: default_oversize_factor(),
            blanket_start_angle: default_blanket_start_angle(),
            blanket_stop_angle: default_blanket_stop_angle(),
        }
    }
}
