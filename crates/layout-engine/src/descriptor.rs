//! Solid descriptor set.
//!
//! A descriptor names one solid, says which shape kind builds it and binds
//! each parameter to a literal, a zone bound, or another solid's output.
//! Resolution against the ledger turns bindings into a plain
//! [`ShapeDefinition`] the kernel can consume.

use std::collections::HashMap;

use reactor_types::{
    BlanketDims, CylinderDims, ExportMetadata, HyperbolaDims, LayoutConstants, ParameterSet,
    PlasmaPoints, ShapeDefinition, ShapeKind, ShieldOffsetDims, SolidName, ZoneId,
};
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::ledger::ZoneLedger;

/// Names of the solids in the center column study reactor.
pub mod names {
    pub const INBOARD_TF_COILS: &str = "inboard_tf_coils";
    pub const CENTER_COLUMN_SHIELD: &str = "center_column_shield";
    pub const INBOARD_FIRSTWALL: &str = "inboard_firstwall";
    pub const PLASMA: &str = "plasma";
    pub const BLANKET_CUTTER: &str = "blanket_cutter";
    pub const BLANKET: &str = "blanket";
    pub const DIVERTOR: &str = "divertor";
}

/// A scalar parameter before resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Scalar {
    Literal { value: f64 },
    ZoneStart { zone: ZoneId },
    ZoneEnd { zone: ZoneId },
    Scaled { factor: f64, of: Box<Scalar> },
}

impl Scalar {
    pub fn literal(value: f64) -> Self {
        Scalar::Literal { value }
    }

    pub fn start(zone: ZoneId) -> Self {
        Scalar::ZoneStart { zone }
    }

    pub fn end(zone: ZoneId) -> Self {
        Scalar::ZoneEnd { zone }
    }

    pub fn scaled(factor: f64, of: Scalar) -> Self {
        Scalar::Scaled {
            factor,
            of: Box::new(of),
        }
    }

    pub fn resolve(&self, ledger: &ZoneLedger) -> Result<f64, LayoutError> {
        match self {
            Scalar::Literal { value } => Ok(*value),
            Scalar::ZoneStart { zone } => ledger
                .zone(*zone)
                .map(|z| z.start)
                .ok_or(LayoutError::MissingZone { zone: *zone }),
            Scalar::ZoneEnd { zone } => ledger
                .zone(*zone)
                .map(|z| z.end)
                .ok_or(LayoutError::MissingZone { zone: *zone }),
            Scalar::Scaled { factor, of } => Ok(factor * of.resolve(ledger)?),
        }
    }
}

/// Shape kind plus parameter bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeBinding {
    Cylinder {
        inner_radius: Scalar,
        outer_radius: Scalar,
        height: Scalar,
    },
    FlatTopHyperbola {
        inner_radius: Scalar,
        mid_radius: Scalar,
        outer_radius: Scalar,
        height: Scalar,
        arc_height: Scalar,
    },
    /// Placement comes entirely from the referenced shield's boundary.
    ShieldOffset { shield: SolidName, thickness: Scalar },
    PlasmaFromPoints {
        inner_equatorial_x: Scalar,
        outer_equatorial_x: Scalar,
        high_point: [Scalar; 2],
    },
    BlanketFromPlasma {
        plasma: SolidName,
        thickness: Scalar,
        offsets: [Scalar; 5],
        start_angle: Scalar,
        stop_angle: Scalar,
    },
}

impl ShapeBinding {
    /// Solids whose outputs this binding reads.
    pub fn references(&self) -> Vec<&SolidName> {
        match self {
            ShapeBinding::ShieldOffset { shield, .. } => vec![shield],
            ShapeBinding::BlanketFromPlasma { plasma, .. } => vec![plasma],
            _ => Vec::new(),
        }
    }
}

/// Boolean operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanKind {
    Subtract,
    Intersect,
}

/// Boolean applied right after construction, against an earlier solid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOp {
    pub kind: BooleanKind,
    pub tool: SolidName,
}

impl PostOp {
    pub fn cut_by(tool: &str) -> Self {
        Self {
            kind: BooleanKind::Subtract,
            tool: SolidName::new(tool),
        }
    }

    pub fn intersect_with(tool: &str) -> Self {
        Self {
            kind: BooleanKind::Intersect,
            tool: SolidName::new(tool),
        }
    }
}

/// When a built solid joins the assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emission {
    /// Appended as soon as it is built.
    Immediate,
    /// Held back until the composition stage has finished cutting it.
    AfterComposition,
    /// Construction aid only; never part of the assembly.
    Never,
}

/// Declarative description of one buildable solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidDescriptor {
    pub name: SolidName,
    pub binding: ShapeBinding,
    pub post_ops: Vec<PostOp>,
    pub emission: Emission,
    pub metadata: Option<ExportMetadata>,
}

impl SolidDescriptor {
    fn emitted(name: &str, binding: ShapeBinding) -> Self {
        Self {
            name: SolidName::new(name),
            binding,
            post_ops: Vec::new(),
            emission: Emission::Immediate,
            metadata: Some(ExportMetadata::for_name(name)),
        }
    }

    /// Every solid this descriptor depends on, bindings first.
    pub fn dependencies(&self) -> Vec<&SolidName> {
        let mut deps = self.binding.references();
        deps.extend(self.post_ops.iter().map(|op| &op.tool));
        deps
    }

    /// Substitute zone bounds and referenced solids' definitions.
    pub fn resolve(
        &self,
        ledger: &ZoneLedger,
        resolved: &HashMap<SolidName, ShapeDefinition>,
    ) -> Result<ShapeDefinition, LayoutError> {
        let definition = match &self.binding {
            ShapeBinding::Cylinder {
                inner_radius,
                outer_radius,
                height,
            } => ShapeDefinition::Cylinder(CylinderDims {
                inner_radius: inner_radius.resolve(ledger)?,
                outer_radius: outer_radius.resolve(ledger)?,
                height: height.resolve(ledger)?,
            }),
            ShapeBinding::FlatTopHyperbola {
                inner_radius,
                mid_radius,
                outer_radius,
                height,
                arc_height,
            } => ShapeDefinition::FlatTopHyperbola(HyperbolaDims {
                inner_radius: inner_radius.resolve(ledger)?,
                mid_radius: mid_radius.resolve(ledger)?,
                outer_radius: outer_radius.resolve(ledger)?,
                height: height.resolve(ledger)?,
                arc_height: arc_height.resolve(ledger)?,
            }),
            ShapeBinding::ShieldOffset { shield, thickness } => {
                match self.referenced(shield, resolved)? {
                    ShapeDefinition::FlatTopHyperbola(dims) => {
                        ShapeDefinition::ShieldOffset(ShieldOffsetDims {
                            shield: *dims,
                            thickness: thickness.resolve(ledger)?,
                        })
                    }
                    _ => return Err(self.incompatible(shield, ShapeKind::FlatTopHyperbola)),
                }
            }
            ShapeBinding::PlasmaFromPoints {
                inner_equatorial_x,
                outer_equatorial_x,
                high_point,
            } => ShapeDefinition::PlasmaFromPoints(PlasmaPoints {
                inner_equatorial_x: inner_equatorial_x.resolve(ledger)?,
                outer_equatorial_x: outer_equatorial_x.resolve(ledger)?,
                high_point: [high_point[0].resolve(ledger)?, high_point[1].resolve(ledger)?],
            }),
            ShapeBinding::BlanketFromPlasma {
                plasma,
                thickness,
                offsets,
                start_angle,
                stop_angle,
            } => match self.referenced(plasma, resolved)? {
                ShapeDefinition::PlasmaFromPoints(points) => {
                    let mut values = [0.0; 5];
                    for (value, offset) in values.iter_mut().zip(offsets) {
                        *value = offset.resolve(ledger)?;
                    }
                    ShapeDefinition::BlanketFromPlasma(BlanketDims {
                        plasma: *points,
                        thickness: thickness.resolve(ledger)?,
                        offsets: values,
                        start_angle: start_angle.resolve(ledger)?,
                        stop_angle: stop_angle.resolve(ledger)?,
                    })
                }
                _ => return Err(self.incompatible(plasma, ShapeKind::PlasmaFromPoints)),
            },
        };
        Ok(definition)
    }

    fn referenced<'a>(
        &self,
        name: &SolidName,
        resolved: &'a HashMap<SolidName, ShapeDefinition>,
    ) -> Result<&'a ShapeDefinition, LayoutError> {
        resolved.get(name).ok_or_else(|| LayoutError::MissingOutput {
            solid: name.clone(),
            referenced_by: self.name.clone(),
        })
    }

    fn incompatible(&self, referenced: &SolidName, expected: ShapeKind) -> LayoutError {
        LayoutError::IncompatibleReference {
            solid: self.name.clone(),
            referenced: referenced.clone(),
            expected,
        }
    }
}

/// A descriptor after resolution, ready for the builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSolid {
    pub name: SolidName,
    pub definition: ShapeDefinition,
    pub post_ops: Vec<PostOp>,
    pub emission: Emission,
    pub metadata: Option<ExportMetadata>,
}

/// The descriptor set of the center column study reactor, in declaration order.
pub fn reactor_descriptors(p: &ParameterSet, c: &LayoutConstants) -> Vec<SolidDescriptor> {
    use names::*;

    // Shield and firstwall both end at the blanket's top.
    let column_top = || Scalar::end(ZoneId::BlanketHeight);

    let tf_coils = SolidDescriptor::emitted(
        INBOARD_TF_COILS,
        ShapeBinding::Cylinder {
            inner_radius: Scalar::start(ZoneId::InboardTfCoils),
            outer_radius: Scalar::end(ZoneId::InboardTfCoils),
            height: Scalar::scaled(c.column_height_factor, column_top()),
        },
    );

    let shield = SolidDescriptor::emitted(
        CENTER_COLUMN_SHIELD,
        ShapeBinding::FlatTopHyperbola {
            inner_radius: Scalar::start(ZoneId::CenterColumnShieldUpper),
            mid_radius: Scalar::end(ZoneId::CenterColumnShieldMid),
            outer_radius: Scalar::end(ZoneId::CenterColumnShieldUpper),
            height: Scalar::scaled(c.column_height_factor, column_top()),
            arc_height: Scalar::literal(p.center_column_arc_vertical_thickness),
        },
    );

    let firstwall = SolidDescriptor::emitted(
        INBOARD_FIRSTWALL,
        ShapeBinding::ShieldOffset {
            shield: SolidName::new(CENTER_COLUMN_SHIELD),
            thickness: Scalar::literal(p.inboard_firstwall_radial_thickness),
        },
    );

    let plasma = SolidDescriptor::emitted(
        PLASMA,
        ShapeBinding::PlasmaFromPoints {
            inner_equatorial_x: Scalar::start(ZoneId::Plasma),
            outer_equatorial_x: Scalar::end(ZoneId::Plasma),
            high_point: [
                Scalar::literal(p.plasma_high_point.0),
                Scalar::end(ZoneId::PlasmaHeight),
            ],
        },
    );

    let cutter = SolidDescriptor {
        name: SolidName::new(BLANKET_CUTTER),
        binding: ShapeBinding::Cylinder {
            inner_radius: Scalar::literal(0.0),
            outer_radius: Scalar::end(ZoneId::InboardFirstwall),
            height: Scalar::scaled(c.cutter_height_factor, column_top()),
        },
        post_ops: Vec::new(),
        emission: Emission::Never,
        metadata: None,
    };

    let inner_gap = p.inner_plasma_gap_radial_thickness;
    let vertical_gap = p.plasma_gap_vertical_thickness;
    let outer_gap = p.outer_plasma_gap_radial_thickness;
    let blanket = SolidDescriptor {
        name: SolidName::new(BLANKET),
        binding: ShapeBinding::BlanketFromPlasma {
            plasma: SolidName::new(PLASMA),
            thickness: Scalar::literal(c.outboard_extent),
            // Inner gap on both ends closes the loop around the plasma.
            offsets: [
                Scalar::literal(inner_gap),
                Scalar::literal(vertical_gap),
                Scalar::literal(outer_gap),
                Scalar::literal(vertical_gap),
                Scalar::literal(inner_gap),
            ],
            start_angle: Scalar::literal(c.blanket_start_angle),
            stop_angle: Scalar::literal(c.blanket_stop_angle),
        },
        post_ops: vec![PostOp::cut_by(BLANKET_CUTTER)],
        emission: Emission::AfterComposition,
        metadata: Some(ExportMetadata::for_name(BLANKET)),
    };

    let mut divertor = SolidDescriptor::emitted(
        DIVERTOR,
        ShapeBinding::Cylinder {
            inner_radius: Scalar::start(ZoneId::Divertor),
            outer_radius: Scalar::end(ZoneId::Divertor),
            height: Scalar::scaled(c.divertor_height_factor, column_top()),
        },
    );
    divertor.post_ops.push(PostOp::intersect_with(BLANKET));

    vec![tf_coils, shield, firstwall, plasma, cutter, blanket, divertor]
}
