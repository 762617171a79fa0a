use serde::{Deserialize, Serialize};

/// Opaque handle to a solid in the geometry kernel.
/// NEVER persisted. Valid only for the current kernel session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KernelSolidHandle(pub(crate) u64);

impl KernelSolidHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Errors from kernel operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("degenerate geometry: {reason}")]
    Degenerate { reason: String },

    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("unknown solid handle: {id}")]
    UnknownHandle { id: u64 },

    #[error("kernel error: {message}")]
    Other { message: String },
}

/// Axis-aligned box in the `(r, z)` half-plane of the cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub r_min: f64,
    pub r_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl BoundingBox {
    /// Overlap of two boxes, or `None` if they share no area.
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        let r_min = self.r_min.max(other.r_min);
        let r_max = self.r_max.min(other.r_max);
        let z_min = self.z_min.max(other.z_min);
        let z_max = self.z_max.min(other.z_max);
        if r_min < r_max && z_min < z_max {
            Some(BoundingBox {
                r_min,
                r_max,
                z_min,
                z_max,
            })
        } else {
            None
        }
    }

    pub fn contains(&self, r: f64, z: f64) -> bool {
        r >= self.r_min && r <= self.r_max && z >= self.z_min && z <= self.z_max
    }
}
