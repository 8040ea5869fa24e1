pub mod drag;
pub mod pointer;
pub mod positioner;

pub use pointer::{PointerInput, PointerSource};
pub use positioner::{PhotoPositioner, PhotoView};
