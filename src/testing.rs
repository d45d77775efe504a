//! Helpers for tests and benchmarks.
use num_traits::Float;
use rand::distr::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Axis, ImageShape, PixelLayout};

/// Creates a generator which gives the same sequence of values for the same seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Fills the buffer by random values from range `[0, 1]`.
pub fn fill_random<T, R>(buffer: &mut [T], rng: &mut R)
where
    T: Float + SampleUniform,
    R: Rng,
{
    for sample in buffer.iter_mut() {
        *sample = rng.random_range(T::zero()..=T::one());
    }
}

/// Creates an image filled by random values from range `[0, 1]`.
pub fn random_image<T>(shape: ImageShape, seed: u64) -> Vec<T>
where
    T: Float + SampleUniform,
{
    let len = shape.samples_count().unwrap_or(0);
    let mut buffer = vec![T::zero(); len];
    fill_random(&mut buffer, &mut seeded_rng(seed));
    buffer
}

/// Straightforward convolution of one sample of the image.
///
/// Returns `None` for samples that have no full kernel window
/// around them along the `axis`.
#[allow(clippy::too_many_arguments)]
pub fn reference_sample<T: Float>(
    weights: &[T],
    src: &[T],
    shape: ImageShape,
    layout: PixelLayout,
    axis: Axis,
    channel: u32,
    row: u32,
    col: u32,
) -> Option<T> {
    let center = (weights.len() / 2) as u32;
    let (pos, len) = match axis {
        Axis::Horizontal => (col, shape.width),
        Axis::Vertical => (row, shape.height),
    };
    if pos < center || pos + center >= len {
        return None;
    }
    let mut ss = T::zero();
    for (k, &weight) in weights.iter().enumerate() {
        let shifted = pos - center + k as u32;
        let index = match axis {
            Axis::Horizontal => layout.index(&shape, channel, row, shifted),
            Axis::Vertical => layout.index(&shape, channel, shifted, col),
        };
        ss = ss + weight * src[index];
    }
    Some(ss)
}
