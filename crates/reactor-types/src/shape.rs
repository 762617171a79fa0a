use serde::{Deserialize, Serialize};

/// Resolved construction parameters for one solid, as handed to the kernel.
///
/// Every value is a plain number: zone bounds and references to other
/// solids have already been substituted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDefinition {
    /// Flat annular cylinder centred on the midplane.
    Cylinder(CylinderDims),
    /// Center column shield with a hyperbolic waist and flat top.
    FlatTopHyperbola(HyperbolaDims),
    /// Radial offset shell wrapped around the outer face of a shield.
    ShieldOffset(ShieldOffsetDims),
    /// Plasma cross-section through three points.
    PlasmaFromPoints(PlasmaPoints),
    /// Blanket following the plasma boundary at a set of offsets.
    BlanketFromPlasma(BlanketDims),
}

impl ShapeDefinition {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeDefinition::Cylinder(_) => ShapeKind::Cylinder,
            ShapeDefinition::FlatTopHyperbola(_) => ShapeKind::FlatTopHyperbola,
            ShapeDefinition::ShieldOffset(_) => ShapeKind::ShieldOffset,
            ShapeDefinition::PlasmaFromPoints(_) => ShapeKind::PlasmaFromPoints,
            ShapeDefinition::BlanketFromPlasma(_) => ShapeKind::BlanketFromPlasma,
        }
    }
}

/// Tag of a [`ShapeDefinition`] without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Cylinder,
    FlatTopHyperbola,
    ShieldOffset,
    PlasmaFromPoints,
    BlanketFromPlasma,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderDims {
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Full height; the solid spans `[-height / 2, height / 2]`.
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HyperbolaDims {
    pub inner_radius: f64,
    /// Outer radius at the midplane.
    pub mid_radius: f64,
    /// Outer radius above and below the waist.
    pub outer_radius: f64,
    /// Full height, symmetric about the midplane.
    pub height: f64,
    /// Vertical extent of the curved waist.
    pub arc_height: f64,
}

impl HyperbolaDims {
    /// Outer boundary radius at height `z`.
    ///
    /// Quadratic blend from `mid_radius` at the midplane to `outer_radius`
    /// at `|z| = arc_height / 2`, flat beyond that.
    pub fn outer_radius_at(&self, z: f64) -> f64 {
        let half_arc = self.arc_height / 2.0;
        let z = z.abs();
        if half_arc <= 0.0 || z >= half_arc {
            return self.outer_radius;
        }
        let t = z / half_arc;
        self.mid_radius + (self.outer_radius - self.mid_radius) * t * t
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShieldOffsetDims {
    /// Dimensions of the shield the shell wraps.
    pub shield: HyperbolaDims,
    pub thickness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlasmaPoints {
    pub inner_equatorial_x: f64,
    pub outer_equatorial_x: f64,
    /// `[x, z]` of the plasma apex.
    pub high_point: [f64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlanketDims {
    pub plasma: PlasmaPoints,
    pub thickness: f64,
    /// Offsets from the plasma, ordered inner, upper, outer, lower, inner.
    pub offsets: [f64; 5],
    /// Poloidal start angle in degrees.
    pub start_angle: f64,
    /// Poloidal stop angle in degrees.
    pub stop_angle: f64,
}

/// Derived plasma shape scalars. Reporting output only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlasmaShape {
    pub major_radius: f64,
    pub minor_radius: f64,
    pub elongation: f64,
    pub triangularity: f64,
}

impl PlasmaShape {
    pub fn from_points(points: &PlasmaPoints) -> Self {
        let minor_radius = (points.outer_equatorial_x - points.inner_equatorial_x) / 2.0;
        let major_radius = points.inner_equatorial_x + minor_radius;
        let [apex_x, apex_z] = points.high_point;
        Self {
            major_radius,
            minor_radius,
            elongation: apex_z / minor_radius,
            triangularity: (major_radius - apex_x) / minor_radius,
        }
    }
}
