//! Structured text reports of a finished build.

use std::fmt;

use layout_engine::ReactorBuild;
use reactor_types::{Axis, PlasmaShape, Zone};

use crate::oracle::OracleVerdict;

/// A complete build report with all sections.
pub struct ReactorReport {
    pub radial: Vec<Zone>,
    pub vertical: Vec<Zone>,
    pub solids: Vec<SolidEntry>,
    pub plasma: PlasmaShape,
    pub diagnostics: Vec<String>,
    pub oracle_results: Vec<OracleVerdict>,
}

/// One assembled solid's report entry.
pub struct SolidEntry {
    pub index: usize,
    pub name: String,
    pub shape: String,
    pub material: Option<String>,
}

impl ReactorReport {
    pub fn from_build(build: &ReactorBuild) -> Self {
        let solids = build
            .assembly
            .solids()
            .iter()
            .enumerate()
            .map(|(index, solid)| SolidEntry {
                index,
                name: solid.name.to_string(),
                shape: format!("{:?}", solid.definition.kind()),
                material: solid.metadata.as_ref().map(|m| m.material_tag.clone()),
            })
            .collect();

        Self {
            radial: build.ledger.zones(Axis::Radial).to_vec(),
            vertical: build.ledger.zones(Axis::Vertical).to_vec(),
            solids,
            plasma: build.plasma,
            diagnostics: build.diagnostics.iter().map(ToString::to_string).collect(),
            oracle_results: Vec::new(),
        }
    }

    pub fn with_oracles(mut self, verdicts: Vec<OracleVerdict>) -> Self {
        self.oracle_results = verdicts;
        self
    }

    /// Format the report as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Reactor Build Report ===\n\n");

        for (title, zones) in [("Radial", &self.radial), ("Vertical", &self.vertical)] {
            out.push_str(&format!("{} Build ({} zones):\n", title, zones.len()));
            for zone in zones {
                out.push_str(&format!(
                    "  {:<28} {:>9.3} -> {:>9.3}\n",
                    zone.id.as_str(),
                    zone.start,
                    zone.end,
                ));
            }
            out.push('\n');
        }

        out.push_str(&format!("Assembly ({} solids):\n", self.solids.len()));
        for entry in &self.solids {
            let material = entry.material.as_deref().unwrap_or("-");
            out.push_str(&format!(
                "  [{}] {} ({}) material={}\n",
                entry.index, entry.name, entry.shape, material,
            ));
        }

        let p = &self.plasma;
        out.push_str(&format!(
            "\nPlasma: major={:.3} minor={:.3} elongation={:.3} triangularity={:.3}\n",
            p.major_radius, p.minor_radius, p.elongation, p.triangularity,
        ));

        if !self.oracle_results.is_empty() {
            out.push_str(&format!(
                "\nOracle Results ({} checks):\n",
                self.oracle_results.len()
            ));
            for v in &self.oracle_results {
                let status = if v.passed { "PASS" } else { "FAIL" };
                out.push_str(&format!("  [{}] {}: {}\n", status, v.oracle_name, v.detail));
            }
        }

        if self.diagnostics.is_empty() {
            out.push_str("\nDiagnostics: none\n");
        } else {
            out.push_str(&format!("\nDiagnostics ({}):\n", self.diagnostics.len()));
            for d in &self.diagnostics {
                out.push_str(&format!("  {}\n", d));
            }
        }

        out
    }
}

impl fmt::Display for ReactorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

/// Plain text summary of a build.
pub fn describe(build: &ReactorBuild) -> String {
    ReactorReport::from_build(build).to_text()
}
