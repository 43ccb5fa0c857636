//! # Rendering
//!
//! Turns images into printer bitmaps.
//!
//! - [`raster`]: binarization, bit packing and the `GS v 0` raster command
//! - [`qr`]: QR symbols rendered to bitmaps for image-based printing

pub mod qr;
pub mod raster;

pub use raster::{RasterCommand, Threshold};
