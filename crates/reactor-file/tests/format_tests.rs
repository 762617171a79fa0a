use layout_engine::build_reactor;
use reactor_file::{
    load_reactor, save_manifest, save_reactor, AssemblyManifest, LoadError, ReactorMetadata,
    FORMAT_VERSION, MANIFEST_FORMAT,
};
use reactor_kernel::MockKernel;
use reactor_types::{LayoutConstants, ParameterSet, ShapeKind, DEFAULT_ROTATION_ANGLE};

// ── Helper Functions ─────────────────────────────────────────────────────

fn reference_parameters() -> ParameterSet {
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
        plasma_high_point: (4.0, 3.0),
        plasma_gap_vertical_thickness: 0.3,
        rotation_angle: 180.0,
    }
}

const MINIMAL_FILE: &str = r#"{
    "format": "reactor-layout",
    "version": 1,
    "name": "center column study",
    "parameters": {
        "inner_bore_radial_thickness": 1.0,
        "inboard_tf_leg_radial_thickness": 1.0,
        "center_column_shield_radial_thickness_mid": 1.0,
        "center_column_shield_radial_thickness_upper": 1.0,
        "inboard_firstwall_radial_thickness": 0.1,
        "divertor_radial_thickness": 2.0,
        "inner_plasma_gap_radial_thickness": 0.5,
        "plasma_radial_thickness": 1.0,
        "outer_plasma_gap_radial_thickness": 0.5,
        "center_column_arc_vertical_thickness": 2.0,
        "plasma_high_point": [4.0, 3.0],
        "plasma_gap_vertical_thickness": 0.3
    }
}"#;

// ── Loading ──────────────────────────────────────────────────────────────

#[test]
fn minimal_file_takes_defaults() {
    let file = load_reactor(MINIMAL_FILE).unwrap();
    assert_eq!(file.name, "center column study");
    assert_eq!(file.version, FORMAT_VERSION);
    assert_eq!(file.parameters.plasma_high_point, (4.0, 3.0));
    assert_eq!(file.parameters.rotation_angle, DEFAULT_ROTATION_ANGLE);
    assert_eq!(file.constants, LayoutConstants::default());
}

#[test]
fn partial_constants_keep_remaining_defaults() {
    let json = MINIMAL_FILE.replace(
        "\"parameters\"",
        "\"constants\": { \"outboard_extent\": 50.0 },\n    \"parameters\"",
    );
    let file = load_reactor(&json).unwrap();
    assert_eq!(file.constants.outboard_extent, 50.0);
    assert_eq!(file.constants.cutter_height_factor, 2.5);
    assert_eq!(file.constants.blanket_start_angle, -179.0);
}

#[test]
fn save_then_load_preserves_inputs() {
    let params = reference_parameters();
    let constants = LayoutConstants {
        divertor_height_factor: 3.0,
        ..LayoutConstants::default()
    };
    let json = save_reactor("saved", &params, &constants).unwrap();
    let file = load_reactor(&json).unwrap();
    assert_eq!(file.name, "saved");
    assert_eq!(file.parameters, params);
    assert_eq!(file.constants, constants);
}

#[test]
fn unknown_format_is_rejected() {
    let json = MINIMAL_FILE.replace("reactor-layout", "waffle-iron");
    match load_reactor(&json) {
        Err(LoadError::UnknownFormat(format)) => assert_eq!(format, "waffle-iron"),
        other => panic!("expected UnknownFormat, got {other:?}"),
    }
}

#[test]
fn future_version_is_rejected() {
    let json = MINIMAL_FILE.replace("\"version\": 1", "\"version\": 7");
    match load_reactor(&json) {
        Err(LoadError::FutureVersion {
            file_version,
            supported_version,
        }) => {
            assert_eq!(file_version, 7);
            assert_eq!(supported_version, FORMAT_VERSION);
        }
        other => panic!("expected FutureVersion, got {other:?}"),
    }
}

#[test]
fn missing_parameter_is_a_parse_error() {
    let json = MINIMAL_FILE.replace("\"plasma_radial_thickness\": 1.0,", "");
    let err = load_reactor(&json).unwrap_err();
    assert!(matches!(err, LoadError::ParseError(_)));
    assert!(err.to_string().contains("plasma_radial_thickness"));
}

#[test]
fn garbage_is_a_parse_error() {
    assert!(matches!(
        load_reactor("not json"),
        Err(LoadError::ParseError(_))
    ));
}

// ── Manifest ─────────────────────────────────────────────────────────────

#[test]
fn manifest_lists_assembly_in_order() {
    let mut kernel = MockKernel::new();
    let build = build_reactor(reference_parameters(), &mut kernel).unwrap();
    let metadata = ReactorMetadata::new("reference");

    let json = save_manifest(&build, &metadata).unwrap();
    let manifest: AssemblyManifest = serde_json::from_str(&json).unwrap();

    assert_eq!(manifest.format, MANIFEST_FORMAT);
    assert_eq!(manifest.version, FORMAT_VERSION);
    assert_eq!(manifest.metadata.name, "reference");
    assert_eq!(manifest.metadata.created, metadata.created);

    let names: Vec<&str> = manifest.solids.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "inboard_tf_coils",
            "center_column_shield",
            "inboard_firstwall",
            "plasma",
            "divertor",
            "blanket",
        ]
    );
    let blanket = manifest.solids.last().unwrap();
    assert_eq!(blanket.shape, ShapeKind::BlanketFromPlasma);
    assert_eq!(blanket.material_tag.as_deref(), Some("blanket_mat"));
    assert_eq!(blanket.stl_filename.as_deref(), Some("blanket.stl"));

    assert_eq!(manifest.radial.len(), build.ledger.radial().len());
    assert_eq!(manifest.vertical.len(), 3);
    assert_eq!(manifest.plasma, build.plasma);
    assert!(manifest.diagnostics.is_empty());
}

#[test]
fn manifest_carries_full_sweep_diagnostic() {
    let mut params = reference_parameters();
    params.rotation_angle = 360.0;
    let mut kernel = MockKernel::new();
    let build = build_reactor(params, &mut kernel).unwrap();

    let json = save_manifest(&build, &ReactorMetadata::new("full sweep")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["diagnostics"][0]["type"], "full_sweep_rotation");
    assert_eq!(value["diagnostics"][0]["rotation_angle"], 360.0);
}
