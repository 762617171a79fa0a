use serde::{Deserialize, Serialize};

/// One of the two independent 1-D coordinate axes of the cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Radial,
    Vertical,
}

/// Named coordinate interval produced by the radial or vertical build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneId {
    // Radial build
    InnerBore,
    InboardTfCoils,
    CenterColumnShieldUpper,
    CenterColumnShieldMid,
    InboardFirstwall,
    Divertor,
    InnerPlasmaGap,
    Plasma,
    OuterPlasmaGap,
    OutboardBlanket,
    // Vertical build
    PlasmaHeight,
    PlasmaToBlanketGap,
    BlanketHeight,
}

impl ZoneId {
    pub fn axis(self) -> Axis {
        match self {
            ZoneId::PlasmaHeight | ZoneId::PlasmaToBlanketGap | ZoneId::BlanketHeight => {
                Axis::Vertical
            }
            _ => Axis::Radial,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ZoneId::InnerBore => "inner_bore",
            ZoneId::InboardTfCoils => "inboard_tf_coils",
            ZoneId::CenterColumnShieldUpper => "center_column_shield_upper",
            ZoneId::CenterColumnShieldMid => "center_column_shield_mid",
            ZoneId::InboardFirstwall => "inboard_firstwall",
            ZoneId::Divertor => "divertor",
            ZoneId::InnerPlasmaGap => "inner_plasma_gap",
            ZoneId::Plasma => "plasma",
            ZoneId::OuterPlasmaGap => "outer_plasma_gap",
            ZoneId::OutboardBlanket => "outboard_blanket",
            ZoneId::PlasmaHeight => "plasma_height",
            ZoneId::PlasmaToBlanketGap => "plasma_to_blanket_gap",
            ZoneId::BlanketHeight => "blanket_height",
        }
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a zone's start was derived during accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ZoneLink {
    /// First zone of its axis; starts at 0.
    Origin,
    /// Starts exactly where the named zone ends.
    Follows { zone: ZoneId },
    /// Shares its start with the named zone and overlaps it on purpose.
    Overlaps { zone: ZoneId },
    /// Restarts from the end of the named zone plus a fixed offset,
    /// breaking the contiguous chain on purpose.
    Restart { zone: ZoneId, offset: f64 },
}

/// A `[start, end)` interval on one axis. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub axis: Axis,
    pub start: f64,
    pub end: f64,
    pub link: ZoneLink,
}

impl Zone {
    pub fn thickness(&self) -> f64 {
        self.end - self.start
    }

    /// Closed-interval membership: both bounds count as inside.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && x <= self.end
    }
}
