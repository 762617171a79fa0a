pub mod errors;
pub mod load;
pub mod manifest;
pub mod metadata;
pub mod save;

pub use errors::{LoadError, SaveError};
pub use load::{load_reactor, ReactorFile};
pub use manifest::{save_manifest, AssemblyManifest, ManifestSolid, MANIFEST_FORMAT};
pub use metadata::ReactorMetadata;
pub use save::{save_reactor, FORMAT_VERSION, REACTOR_FORMAT};
