pub mod params;
pub mod shape;
pub mod solid;
pub mod zone;

pub use params::*;
pub use shape::*;
pub use solid::*;
pub use zone::*;
