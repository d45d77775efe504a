use num_traits::Float;

pub use interleaved::*;
pub use planar::*;

use crate::{ConvolutionError, ImageShape, Kernel, PixelLayout};

mod interleaved;
mod planar;

/// Direction of 1D convolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along rows of the image.
    Horizontal,
    /// Along columns of the image.
    Vertical,
}

/// Convolves one channel of the image with the kernel using
/// the function that matches `layout` and `axis`.
pub fn convolve<T, K>(
    kernel: &K,
    src: &[T],
    shape: ImageShape,
    layout: PixelLayout,
    axis: Axis,
    channel: u32,
    dst: &mut [T],
) -> Result<(), ConvolutionError>
where
    T: Float,
    K: Kernel<Weight = T> + ?Sized,
{
    match (layout, axis) {
        (PixelLayout::Planar, Axis::Horizontal) => {
            horiz_convolution_planar(kernel, src, shape, channel, dst)
        }
        (PixelLayout::Planar, Axis::Vertical) => {
            vert_convolution_planar(kernel, src, shape, channel, dst)
        }
        (PixelLayout::Interleaved, Axis::Horizontal) => {
            horiz_convolution_interleaved(kernel, src, shape, channel, dst)
        }
        (PixelLayout::Interleaved, Axis::Vertical) => {
            vert_convolution_interleaved(kernel, src, shape, channel, dst)
        }
    }
}

/// Positions of samples of one channel visited by a convolution pass.
///
/// The channel is split into `lines` (rows for horizontal pass, columns
/// for vertical one). The kernel window slides along every line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StridedPass {
    /// Index of the first sample of the channel.
    pub offset: usize,
    pub lines: usize,
    pub line_stride: usize,
    /// Count of samples in one line.
    pub line_len: usize,
    /// Distance between adjacent samples of one line.
    pub sample_stride: usize,
}

impl StridedPass {
    /// Writes convolution results for interior samples of every line.
    ///
    /// Caller must guarantee that every visited index is inside `src` and `dst`.
    pub fn run<T: Float>(&self, weights: &[T], src: &[T], dst: &mut [T]) {
        let window_size = weights.len();
        if window_size == 0 || self.line_len < window_size {
            // Window doesn't fit into a line, there is no interior.
            return;
        }
        let center = window_size / 2;
        for line in 0..self.lines {
            let line_start = self.offset + line * self.line_stride;
            for pos in center..self.line_len - center {
                let window_start = line_start + (pos - center) * self.sample_stride;
                let src_samples = src[window_start..].iter().step_by(self.sample_stride);
                let mut ss = T::zero();
                for (&k, &sample) in weights.iter().zip(src_samples) {
                    ss = ss + k * sample;
                }
                dst[line_start + pos * self.sample_stride] = ss;
            }
        }
    }
}
