//! Zone ledger: the radial and vertical builds.
//!
//! Each axis is one left-to-right accumulation pass. A zone normally starts
//! where its predecessor ends; the few deliberate exceptions (the shield's
//! mid/upper overlap and the inner plasma gap restart) are recorded in the
//! zone's [`ZoneLink`] so the contiguity invariant stays checkable.

use reactor_types::{Axis, LayoutConstants, ParameterSet, Zone, ZoneId, ZoneLink};
use serde::{Deserialize, Serialize};

/// Accumulated zones for both axes. Pure function of the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneLedger {
    radial: Vec<Zone>,
    vertical: Vec<Zone>,
}

/// A zone whose start does not match what its link promises.
#[derive(Debug, Clone, PartialEq)]
pub struct ContiguityViolation {
    pub zone: ZoneId,
    pub expected_start: f64,
    pub actual_start: f64,
}

impl ZoneLedger {
    /// Run the radial build, then the vertical build.
    ///
    /// The vertical build takes the plasma apex height directly from the
    /// input, so it never waits on anything computed radially.
    pub fn from_parameters(params: &ParameterSet, constants: &LayoutConstants) -> Self {
        Self {
            radial: radial_build(params, constants),
            vertical: vertical_build(params, constants),
        }
    }

    pub fn radial(&self) -> &[Zone] {
        &self.radial
    }

    pub fn vertical(&self) -> &[Zone] {
        &self.vertical
    }

    pub fn zones(&self, axis: Axis) -> &[Zone] {
        match axis {
            Axis::Radial => &self.radial,
            Axis::Vertical => &self.vertical,
        }
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones(id.axis()).iter().find(|z| z.id == id)
    }

    /// Height at which the center column shield ends: the blanket's top.
    pub fn center_column_shield_end_height(&self) -> Option<f64> {
        self.zone(ZoneId::BlanketHeight).map(|z| z.end)
    }

    /// Height at which the inboard firstwall ends: the blanket's top.
    pub fn inboard_firstwall_end_height(&self) -> Option<f64> {
        self.zone(ZoneId::BlanketHeight).map(|z| z.end)
    }

    /// Every zone whose start disagrees with its recorded link.
    pub fn contiguity_violations(&self) -> Vec<ContiguityViolation> {
        self.radial
            .iter()
            .chain(self.vertical.iter())
            .filter_map(|zone| {
                let expected_start = match zone.link {
                    ZoneLink::Origin => 0.0,
                    ZoneLink::Follows { zone: prev } => self.zone(prev)?.end,
                    ZoneLink::Overlaps { zone: other } => self.zone(other)?.start,
                    ZoneLink::Restart { zone: from, offset } => self.zone(from)?.end + offset,
                };
                (expected_start != zone.start).then_some(ContiguityViolation {
                    zone: zone.id,
                    expected_start,
                    actual_start: zone.start,
                })
            })
            .collect()
    }
}

fn radial_build(p: &ParameterSet, c: &LayoutConstants) -> Vec<Zone> {
    let mut radial = AxisBuild::new(Axis::Radial);

    let bore = radial.origin(ZoneId::InnerBore, p.inner_bore_radial_thickness);
    let tf = radial.follow(bore, ZoneId::InboardTfCoils, p.inboard_tf_leg_radial_thickness);
    let shield_upper = radial.follow(
        tf,
        ZoneId::CenterColumnShieldUpper,
        p.center_column_shield_radial_thickness_upper,
    );
    let shield_mid = radial.overlap(
        shield_upper,
        ZoneId::CenterColumnShieldMid,
        p.center_column_shield_radial_thickness_mid,
    );
    let firstwall = radial.follow(
        shield_upper,
        ZoneId::InboardFirstwall,
        p.inboard_firstwall_radial_thickness,
    );
    radial.follow(firstwall, ZoneId::Divertor, p.divertor_radial_thickness);

    // The plasma side of the firstwall sits on the shield's waist, not its top.
    let inner_gap = radial.restart(
        shield_mid,
        p.inboard_firstwall_radial_thickness,
        ZoneId::InnerPlasmaGap,
        p.inner_plasma_gap_radial_thickness,
    );
    let plasma = radial.follow(inner_gap, ZoneId::Plasma, p.plasma_radial_thickness);
    let outer_gap = radial.follow(
        plasma,
        ZoneId::OuterPlasmaGap,
        p.outer_plasma_gap_radial_thickness,
    );
    radial.follow(outer_gap, ZoneId::OutboardBlanket, c.outboard_extent);

    radial.finish()
}

fn vertical_build(p: &ParameterSet, c: &LayoutConstants) -> Vec<Zone> {
    let mut vertical = AxisBuild::new(Axis::Vertical);

    let plasma = vertical.origin(ZoneId::PlasmaHeight, p.plasma_high_point.1);
    let gap = vertical.follow(
        plasma,
        ZoneId::PlasmaToBlanketGap,
        p.plasma_gap_vertical_thickness,
    );
    vertical.follow(gap, ZoneId::BlanketHeight, c.outboard_extent);

    vertical.finish()
}

/// Single-axis accumulator. Each push returns the new zone so the next
/// push can name exactly which zone it is measured from.
struct AxisBuild {
    axis: Axis,
    zones: Vec<Zone>,
}

impl AxisBuild {
    fn new(axis: Axis) -> Self {
        Self {
            axis,
            zones: Vec::new(),
        }
    }

    fn push(&mut self, id: ZoneId, start: f64, thickness: f64, link: ZoneLink) -> Zone {
        let zone = Zone {
            id,
            axis: self.axis,
            start,
            end: start + thickness,
            link,
        };
        self.zones.push(zone);
        zone
    }

    fn origin(&mut self, id: ZoneId, thickness: f64) -> Zone {
        self.push(id, 0.0, thickness, ZoneLink::Origin)
    }

    fn follow(&mut self, prev: Zone, id: ZoneId, thickness: f64) -> Zone {
        self.push(id, prev.end, thickness, ZoneLink::Follows { zone: prev.id })
    }

    fn overlap(&mut self, with: Zone, id: ZoneId, thickness: f64) -> Zone {
        self.push(id, with.start, thickness, ZoneLink::Overlaps { zone: with.id })
    }

    fn restart(&mut self, from: Zone, offset: f64, id: ZoneId, thickness: f64) -> Zone {
        self.push(
            id,
            from.end + offset,
            thickness,
            ZoneLink::Restart {
                zone: from.id,
                offset,
            },
        )
    }

    fn finish(self) -> Vec<Zone> {
        self.zones
    }
}
