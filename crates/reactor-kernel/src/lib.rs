pub mod mock_kernel;
pub mod primitives;
pub mod traits;
pub mod types;

pub use mock_kernel::{KernelCall, MockKernel};
pub use traits::*;
pub use types::*;
