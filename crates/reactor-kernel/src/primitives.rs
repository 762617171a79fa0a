//! Cross-section geometry for the five shape kinds.
//!
//! Every solid is a region of the `(r, z)` half-plane swept about the z
//! axis, so membership, bounds and validity are all 2-D questions.

use std::f64::consts::TAU;

use reactor_types::{
    BlanketDims, CylinderDims, HyperbolaDims, PlasmaPoints, PlasmaShape, ShapeDefinition,
    ShieldOffsetDims,
};

use crate::types::{BoundingBox, KernelError};

/// Number of vertices used to polygonise the plasma boundary.
pub const PLASMA_SAMPLES: usize = 180;

/// Reject definitions no kernel could sweep.
pub fn validate(shape: &ShapeDefinition) -> Result<(), KernelError> {
    match shape {
        ShapeDefinition::Cylinder(d) => validate_cylinder(d),
        ShapeDefinition::FlatTopHyperbola(d) => validate_hyperbola(d),
        ShapeDefinition::ShieldOffset(d) => {
            validate_hyperbola(&d.shield)?;
            positive("offset thickness", d.thickness)
        }
        ShapeDefinition::PlasmaFromPoints(p) => validate_plasma(p),
        ShapeDefinition::BlanketFromPlasma(d) => validate_blanket(d),
    }
}

/// Validate a sweep angle in degrees.
pub fn validate_rotation(rotation_angle: f64) -> Result<(), KernelError> {
    if !rotation_angle.is_finite() || rotation_angle <= 0.0 || rotation_angle > 360.0 {
        return Err(degenerate(format!(
            "rotation angle {rotation_angle} outside (0, 360]"
        )));
    }
    Ok(())
}

fn validate_cylinder(d: &CylinderDims) -> Result<(), KernelError> {
    non_negative("cylinder inner radius", d.inner_radius)?;
    positive("cylinder height", d.height)?;
    if d.outer_radius <= d.inner_radius {
        return Err(degenerate(format!(
            "cylinder outer radius {} not beyond inner radius {}",
            d.outer_radius, d.inner_radius
        )));
    }
    Ok(())
}

fn validate_hyperbola(d: &HyperbolaDims) -> Result<(), KernelError> {
    non_negative("shield inner radius", d.inner_radius)?;
    positive("shield height", d.height)?;
    non_negative("shield arc height", d.arc_height)?;
    if d.mid_radius <= d.inner_radius || d.outer_radius <= d.inner_radius {
        return Err(degenerate(format!(
            "shield mid/outer radius ({}, {}) not beyond inner radius {}",
            d.mid_radius, d.outer_radius, d.inner_radius
        )));
    }
    Ok(())
}

fn validate_plasma(p: &PlasmaPoints) -> Result<(), KernelError> {
    non_negative("plasma inner equatorial point", p.inner_equatorial_x)?;
    positive("plasma apex height", p.high_point[1])?;
    if p.outer_equatorial_x <= p.inner_equatorial_x {
        return Err(degenerate(format!(
            "plasma outer point {} not beyond inner point {}",
            p.outer_equatorial_x, p.inner_equatorial_x
        )));
    }
    if p.high_point[0] < p.inner_equatorial_x || p.high_point[0] > p.outer_equatorial_x {
        return Err(degenerate(format!(
            "plasma apex x {} outside [{}, {}]",
            p.high_point[0], p.inner_equatorial_x, p.outer_equatorial_x
        )));
    }
    Ok(())
}

fn validate_blanket(d: &BlanketDims) -> Result<(), KernelError> {
    validate_plasma(&d.plasma)?;
    positive("blanket thickness", d.thickness)?;
    for offset in d.offsets {
        non_negative("blanket offset", offset)?;
    }
    if d.start_angle < -180.0 || d.stop_angle > 180.0 || d.stop_angle <= d.start_angle {
        return Err(degenerate(format!(
            "blanket angles [{}, {}] are not an increasing range within [-180, 180]",
            d.start_angle, d.stop_angle
        )));
    }
    Ok(())
}

fn positive(what: &str, value: f64) -> Result<(), KernelError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(degenerate(format!("{what} must be positive, got {value}")))
    }
}

fn non_negative(what: &str, value: f64) -> Result<(), KernelError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(degenerate(format!("{what} must be non-negative, got {value}")))
    }
}

fn degenerate(reason: String) -> KernelError {
    KernelError::Degenerate { reason }
}

/// Whether `(r, z)` lies inside the cross-section of `shape`.
pub fn contains(shape: &ShapeDefinition, r: f64, z: f64) -> bool {
    if r < 0.0 {
        return false;
    }
    match shape {
        ShapeDefinition::Cylinder(d) => {
            r >= d.inner_radius && r <= d.outer_radius && z.abs() <= d.height / 2.0
        }
        ShapeDefinition::FlatTopHyperbola(d) => {
            z.abs() <= d.height / 2.0 && r >= d.inner_radius && r <= d.outer_radius_at(z)
        }
        ShapeDefinition::ShieldOffset(d) => shield_offset_contains(d, r, z),
        ShapeDefinition::PlasmaFromPoints(p) => polygon_contains(&plasma_boundary(p), r, z),
        ShapeDefinition::BlanketFromPlasma(d) => blanket_contains(d, r, z),
    }
}

fn shield_offset_contains(d: &ShieldOffsetDims, r: f64, z: f64) -> bool {
    if z.abs() > d.shield.height / 2.0 {
        return false;
    }
    let face = d.shield.outer_radius_at(z);
    r > face && r <= face + d.thickness
}

fn blanket_contains(d: &BlanketDims, r: f64, z: f64) -> bool {
    let center = [PlasmaShape::from_points(&d.plasma).major_radius, 0.0];
    let angle = poloidal_angle(center, r, z);
    if angle < d.start_angle || angle > d.stop_angle {
        return false;
    }
    let boundary = plasma_boundary(&d.plasma);
    let inner = ray_exit_distance(&boundary, center, angle) + blanket_offset_at(d, angle);
    let distance = (r - center[0]).hypot(z - center[1]);
    distance >= inner && distance <= inner + d.thickness
}

/// Cross-section bounds of `shape`.
pub fn bounding_box(shape: &ShapeDefinition) -> BoundingBox {
    match shape {
        ShapeDefinition::Cylinder(d) => BoundingBox {
            r_min: d.inner_radius,
            r_max: d.outer_radius,
            z_min: -d.height / 2.0,
            z_max: d.height / 2.0,
        },
        ShapeDefinition::FlatTopHyperbola(d) => BoundingBox {
            r_min: d.inner_radius,
            r_max: d.mid_radius.max(d.outer_radius),
            z_min: -d.height / 2.0,
            z_max: d.height / 2.0,
        },
        ShapeDefinition::ShieldOffset(d) => BoundingBox {
            r_min: d.shield.mid_radius.min(d.shield.outer_radius),
            r_max: d.shield.mid_radius.max(d.shield.outer_radius) + d.thickness,
            z_min: -d.shield.height / 2.0,
            z_max: d.shield.height / 2.0,
        },
        ShapeDefinition::PlasmaFromPoints(p) => polygon_bounds(&plasma_boundary(p)),
        ShapeDefinition::BlanketFromPlasma(d) => {
            let center = PlasmaShape::from_points(&d.plasma).major_radius;
            let plasma_reach = plasma_boundary(&d.plasma)
                .iter()
                .map(|p| (p[0] - center).hypot(p[1]))
                .fold(0.0_f64, f64::max);
            let max_offset = d.offsets.iter().copied().fold(0.0_f64, f64::max);
            let reach = plasma_reach + max_offset + d.thickness;
            BoundingBox {
                r_min: (center - reach).max(0.0),
                r_max: center + reach,
                z_min: -reach,
                z_max: reach,
            }
        }
    }
}

/// Closed polygon through the plasma boundary, counter-clockwise.
///
/// `R = R0 + a cos(t + asin(d) sin t)`, `Z = k a sin t`, which passes exactly
/// through both equatorial points and the apex.
pub fn plasma_boundary(points: &PlasmaPoints) -> Vec<[f64; 2]> {
    let shape = PlasmaShape::from_points(points);
    let skew = shape.triangularity.clamp(-1.0, 1.0).asin();
    (0..PLASMA_SAMPLES)
        .map(|i| {
            let t = TAU * i as f64 / PLASMA_SAMPLES as f64;
            [
                shape.major_radius + shape.minor_radius * (t + skew * t.sin()).cos(),
                shape.elongation * shape.minor_radius * t.sin(),
            ]
        })
        .collect()
}

/// Even-odd point-in-polygon test.
pub fn polygon_contains(polygon: &[[f64; 2]], r: f64, z: f64) -> bool {
    let mut inside = false;
    let n = polygon.len();
    for i in 0..n {
        let [ri, zi] = polygon[i];
        let [rj, zj] = polygon[(i + n - 1) % n];
        if (zi > z) != (zj > z) {
            let crossing = ri + (z - zi) * (rj - ri) / (zj - zi);
            if r < crossing {
                inside = !inside;
            }
        }
    }
    inside
}

fn polygon_bounds(polygon: &[[f64; 2]]) -> BoundingBox {
    polygon.iter().fold(
        BoundingBox {
            r_min: f64::INFINITY,
            r_max: f64::NEG_INFINITY,
            z_min: f64::INFINITY,
            z_max: f64::NEG_INFINITY,
        },
        |b, p| BoundingBox {
            r_min: b.r_min.min(p[0]),
            r_max: b.r_max.max(p[0]),
            z_min: b.z_min.min(p[1]),
            z_max: b.z_max.max(p[1]),
        },
    )
}

/// Poloidal angle of `(r, z)` around `center`, in degrees in `(-180, 180]`.
///
/// Zero on the outboard midplane, increasing clockwise (through the top),
/// so the blanket offsets run inner, upper, outer, lower, inner.
pub fn poloidal_angle(center: [f64; 2], r: f64, z: f64) -> f64 {
    (-(z - center[1])).atan2(r - center[0]).to_degrees()
}

/// Distance from `center` to where the ray at `angle` leaves `polygon`.
pub fn ray_exit_distance(polygon: &[[f64; 2]], center: [f64; 2], angle: f64) -> f64 {
    let radians = angle.to_radians();
    let dir = [radians.cos(), -radians.sin()];
    let n = polygon.len();
    let mut exit = 0.0_f64;
    for i in 0..n {
        let p = polygon[i];
        let q = polygon[(i + 1) % n];
        let edge = [q[0] - p[0], q[1] - p[1]];
        let denom = cross(dir, edge);
        if denom.abs() < 1e-15 {
            continue;
        }
        let w = [p[0] - center[0], p[1] - center[1]];
        let t = cross(w, edge) / denom;
        let s = cross(w, dir) / denom;
        if t > 0.0 && (0.0..=1.0).contains(&s) {
            exit = exit.max(t);
        }
    }
    exit
}

fn cross(a: [f64; 2], b: [f64; 2]) -> f64 {
    a[0] * b[1] - a[1] * b[0]
}

/// Offset from the plasma at `angle`, interpolated linearly between the
/// five offsets spread evenly over `[start_angle, stop_angle]`.
pub fn blanket_offset_at(d: &BlanketDims, angle: f64) -> f64 {
    let segments = (d.offsets.len() - 1) as f64;
    let spacing = (d.stop_angle - d.start_angle) / segments;
    let t = ((angle - d.start_angle) / spacing).clamp(0.0, segments);
    let i = (t.floor() as usize).min(d.offsets.len() - 2);
    let frac = t - i as f64;
    d.offsets[i] + (d.offsets[i + 1] - d.offsets[i]) * frac
}
