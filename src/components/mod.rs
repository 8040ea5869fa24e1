pub mod photo_positioner;

pub use photo_positioner::{PhotoPositionerProps, PhotoPositionerView};
