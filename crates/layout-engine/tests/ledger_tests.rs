mod common;

use approx::assert_relative_eq;
use layout_engine::ZoneLedger;
use proptest::prelude::*;
use reactor_types::{Axis, LayoutConstants, ParameterSet, ZoneId, ZoneLink};

use common::reference_parameters;

fn ledger(params: &ParameterSet) -> ZoneLedger {
    ZoneLedger::from_parameters(params, &LayoutConstants::default())
}

fn bounds(ledger: &ZoneLedger, id: ZoneId) -> (f64, f64) {
    let zone = ledger.zone(id).unwrap();
    (zone.start, zone.end)
}

// ── Reference build ────────────────────────────────────────────────────────

#[test]
fn radial_build_matches_reference_chain() {
    let ledger = ledger(&reference_parameters(4.0, 180.0));

    let expected = [
        (ZoneId::InnerBore, 0.0, 1.0),
        (ZoneId::InboardTfCoils, 1.0, 2.0),
        (ZoneId::CenterColumnShieldUpper, 2.0, 3.0),
        (ZoneId::CenterColumnShieldMid, 2.0, 3.0),
        (ZoneId::InboardFirstwall, 3.0, 3.1),
        (ZoneId::Divertor, 3.1, 5.1),
        (ZoneId::InnerPlasmaGap, 3.1, 3.6),
        (ZoneId::Plasma, 3.6, 4.6),
        (ZoneId::OuterPlasmaGap, 4.6, 5.1),
        (ZoneId::OutboardBlanket, 5.1, 105.1),
    ];
    assert_eq!(ledger.radial().len(), expected.len());
    for (zone, (id, start, end)) in ledger.radial().iter().zip(expected) {
        assert_eq!(zone.id, id);
        assert_eq!(zone.axis, Axis::Radial);
        assert_relative_eq!(zone.start, start, epsilon = 1e-12);
        assert_relative_eq!(zone.end, end, epsilon = 1e-12);
    }
}

#[test]
fn vertical_build_matches_reference_chain() {
    let ledger = ledger(&reference_parameters(4.0, 180.0));

    let (plasma_start, plasma_end) = bounds(&ledger, ZoneId::PlasmaHeight);
    let (gap_start, gap_end) = bounds(&ledger, ZoneId::PlasmaToBlanketGap);
    let (blanket_start, blanket_end) = bounds(&ledger, ZoneId::BlanketHeight);

    assert_eq!(plasma_start, 0.0);
    assert_eq!(plasma_end, 3.0);
    assert_eq!(gap_start, 3.0);
    assert_relative_eq!(gap_end, 3.3, epsilon = 1e-12);
    assert_eq!(blanket_start, gap_end);
    assert_relative_eq!(blanket_end, 103.3, epsilon = 1e-12);

    assert_eq!(ledger.center_column_shield_end_height(), Some(blanket_end));
    assert_eq!(ledger.inboard_firstwall_end_height(), Some(blanket_end));
}

#[test]
fn deliberate_breaks_are_recorded_as_links() {
    let ledger = ledger(&reference_parameters(4.0, 180.0));

    assert_eq!(
        ledger.zone(ZoneId::CenterColumnShieldMid).unwrap().link,
        ZoneLink::Overlaps {
            zone: ZoneId::CenterColumnShieldUpper
        }
    );
    assert_eq!(
        ledger.zone(ZoneId::InnerPlasmaGap).unwrap().link,
        ZoneLink::Restart {
            zone: ZoneId::CenterColumnShieldMid,
            offset: 0.1
        }
    );
    assert_eq!(
        ledger.zone(ZoneId::InboardFirstwall).unwrap().link,
        ZoneLink::Follows {
            zone: ZoneId::CenterColumnShieldUpper
        }
    );
}

#[test]
fn inner_gap_restarts_from_shield_waist() {
    let mut params = reference_parameters(4.0, 180.0);
    params.center_column_shield_radial_thickness_mid = 0.6;
    let ledger = ledger(&params);

    // Firstwall and divertor still hang off the shield's upper radius.
    assert_relative_eq!(bounds(&ledger, ZoneId::InboardFirstwall).0, 3.0);
    // The plasma side follows the thinner waist.
    assert_relative_eq!(bounds(&ledger, ZoneId::InnerPlasmaGap).0, 2.7, epsilon = 1e-12);
    assert_relative_eq!(bounds(&ledger, ZoneId::Plasma).0, 3.2, epsilon = 1e-12);
    assert!(ledger.contiguity_violations().is_empty());
}

#[test]
fn outboard_extent_comes_from_constants() {
    let constants = LayoutConstants {
        outboard_extent: 20.0,
        ..LayoutConstants::default()
    };
    let ledger = ZoneLedger::from_parameters(&reference_parameters(4.0, 180.0), &constants);
    assert_relative_eq!(bounds(&ledger, ZoneId::OutboardBlanket).1, 25.1, epsilon = 1e-12);
    assert_relative_eq!(bounds(&ledger, ZoneId::BlanketHeight).1, 23.3, epsilon = 1e-12);
}

#[test]
fn apex_height_only_moves_vertical_zones() {
    let low = ledger(&reference_parameters(4.0, 180.0));
    let mut params = reference_parameters(4.0, 180.0);
    params.plasma_high_point.1 = 5.0;
    let high = ledger(&params);

    assert_eq!(low.radial(), high.radial());
    assert_ne!(low.vertical(), high.vertical());
    assert_eq!(bounds(&high, ZoneId::PlasmaHeight).1, 5.0);
}

#[test]
fn full_sweep_does_not_change_zones() {
    assert_eq!(
        ledger(&reference_parameters(4.0, 360.0)),
        ledger(&reference_parameters(4.0, 359.9))
    );
}

// ── Properties ─────────────────────────────────────────────────────────────

fn arb_thickness() -> impl Strategy<Value = f64> {
    0.01f64..10.0
}

prop_compose! {
    fn arb_parameters()(t in prop::array::uniform12(arb_thickness())) -> ParameterSet {
        ParameterSet {
            inner_bore_radial_thickness: t[0],
            inboard_tf_leg_radial_thickness: t[1],
            center_column_shield_radial_thickness_mid: t[2],
            center_column_shield_radial_thickness_upper: t[3],
            inboard_firstwall_radial_thickness: t[4],
            divertor_radial_thickness: t[5],
            inner_plasma_gap_radial_thickness: t[6],
            plasma_radial_thickness: t[7],
            outer_plasma_gap_radial_thickness: t[8],
            center_column_arc_vertical_thickness: t[9],
            plasma_high_point: (0.0, t[10]),
            plasma_gap_vertical_thickness: t[11],
            rotation_angle: 180.0,
        }
    }
}

proptest! {
    #[test]
    fn links_always_hold(params in arb_parameters()) {
        let ledger = ledger(&params);
        let violations = ledger.contiguity_violations();
        prop_assert!(violations.is_empty(), "violations: {:?}", violations);
    }

    #[test]
    fn followed_chains_never_decrease(params in arb_parameters()) {
        let ledger = ledger(&params);
        for axis in [Axis::Radial, Axis::Vertical] {
            for zone in ledger.zones(axis) {
                prop_assert!(zone.start >= 0.0);
                prop_assert!(zone.end > zone.start);
                if let ZoneLink::Follows { zone: prev } = zone.link {
                    let prev = ledger.zone(prev).unwrap();
                    prop_assert_eq!(prev.end, zone.start);
                    prop_assert!(prev.start <= zone.start);
                }
            }
        }
    }

    #[test]
    fn plasma_zone_is_sum_of_inboard_thicknesses(params in arb_parameters()) {
        let ledger = ledger(&params);
        let plasma = ledger.zone(ZoneId::Plasma).unwrap();
        let expected_start = params.inner_bore_radial_thickness
            + params.inboard_tf_leg_radial_thickness
            + params.center_column_shield_radial_thickness_mid
            + params.inboard_firstwall_radial_thickness
            + params.inner_plasma_gap_radial_thickness;
        prop_assert!((plasma.start - expected_start).abs() < 1e-9);
        prop_assert!((plasma.thickness() - params.plasma_radial_thickness).abs() < 1e-9);
    }

    #[test]
    fn ledger_is_deterministic(params in arb_parameters()) {
        prop_assert_eq!(ledger(&params), ledger(&params));
    }
}
