#![doc = include_str!("../README.md")]
//!
//! ## Feature flags
#![doc = document_features::document_features!()]

pub use convolution::{
    convolve, horiz_convolution_interleaved, horiz_convolution_planar,
    vert_convolution_interleaved, vert_convolution_planar, Axis,
};
pub use errors::*;
pub use kernel::{Kernel, Kernel1d};
pub use shape::{ImageShape, PixelLayout};
pub use transpose::{interleaved_to_planar, planar_to_interleaved, transpose_planar};

mod convolution;
mod errors;
mod kernel;
mod shape;
#[cfg(feature = "testing")]
pub mod testing;
mod transpose;
