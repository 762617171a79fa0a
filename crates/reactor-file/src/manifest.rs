//! Assembly manifest: the hand-off document for the export layer.
//!
//! Carries names, material tags and file names of the final solids in
//! assembly order, plus enough of the layout to audit it. No geometry.

use layout_engine::{Diagnostic, ReactorBuild};
use reactor_types::{PlasmaShape, ShapeKind, Zone};
use serde::{Deserialize, Serialize};

use crate::errors::SaveError;
use crate::metadata::ReactorMetadata;
use crate::save::FORMAT_VERSION;

/// Format identifier of assembly manifests.
pub const MANIFEST_FORMAT: &str = "reactor-manifest";

/// One assembled solid as the export layer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestSolid {
    pub name: String,
    pub shape: ShapeKind,
    pub material_tag: Option<String>,
    pub stp_filename: Option<String>,
    pub stl_filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyManifest {
    pub format: String,
    pub version: u32,
    pub metadata: ReactorMetadata,
    /// In assembly order.
    pub solids: Vec<ManifestSolid>,
    pub radial: Vec<Zone>,
    pub vertical: Vec<Zone>,
    pub plasma: PlasmaShape,
    pub diagnostics: Vec<Diagnostic>,
}

impl AssemblyManifest {
    pub fn from_build(build: &ReactorBuild, metadata: &ReactorMetadata) -> Self {
        let solids = build
            .assembly
            .solids()
            .iter()
            .map(|solid| {
                let export = solid.metadata.as_ref();
                ManifestSolid {
                    name: solid.name.to_string(),
                    shape: solid.definition.kind(),
                    material_tag: export.map(|m| m.material_tag.clone()),
                    stp_filename: export.map(|m| m.stp_filename.clone()),
                    stl_filename: export.map(|m| m.stl_filename.clone()),
                }
            })
            .collect();

        Self {
            format: MANIFEST_FORMAT.to_string(),
            version: FORMAT_VERSION,
            metadata: metadata.clone(),
            solids,
            radial: build.ledger.radial().to_vec(),
            vertical: build.ledger.vertical().to_vec(),
            plasma: build.plasma,
            diagnostics: build.diagnostics.clone(),
        }
    }
}

/// Serialize a finished build's manifest to pretty-printed JSON.
pub fn save_manifest(
    build: &ReactorBuild,
    metadata: &ReactorMetadata,
) -> Result<String, SaveError> {
    let manifest = AssemblyManifest::from_build(build, metadata);
    Ok(serde_json::to_string_pretty(&manifest)?)
}
