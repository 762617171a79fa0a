use reactor_types::ParameterSet;

/// Reference center column study inputs with the given apex x and sweep.
pub fn reference_parameters(apex_x: f64, rotation_angle: f64) -> ParameterSet {
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
        rotation_angle,
    }
}
