use num_traits::Float;

use super::StridedPass;
use crate::shape::check_convolution_args;
use crate::{ConvolutionError, ImageShape, Kernel};

/// Performs 1D horizontal convolution of one channel of interleaved image.
///
/// Samples of one channel are `shape.channels` apart, so the kernel window
/// walks through the row with this stride. Border columns and other
/// channels of `dst` are left untouched.
///
/// Failures are the same as in [horiz_convolution_planar](crate::horiz_convolution_planar).
pub fn horiz_convolution_interleaved<T, K>(
    kernel: &K,
    src: &[T],
    shape: ImageShape,
    channel: u32,
    dst: &mut [T],
) -> Result<(), ConvolutionError>
where
    T: Float,
    K: Kernel<Weight = T> + ?Sized,
{
    check_convolution_args(kernel, src.len(), &shape, channel, dst.len())?;

    let px_stride = shape.channels as usize;
    let row_stride = px_stride * shape.width as usize;
    StridedPass {
        offset: channel as usize,
        lines: shape.height as usize,
        line_stride: row_stride,
        line_len: shape.width as usize,
        sample_stride: px_stride,
    }
    .run(kernel.weights(), src, dst);
    Ok(())
}

/// Performs 1D vertical convolution of one channel of interleaved image.
///
/// The kernel window walks through a column with the stride of one row
/// (`width * channels` samples). Border rows are left untouched.
pub fn vert_convolution_interleaved<T, K>(
    kernel: &K,
    src: &[T],
    shape: ImageShape,
    channel: u32,
    dst: &mut [T],
) -> Result<(), ConvolutionError>
where
    T: Float,
    K: Kernel<Weight = T> + ?Sized,
{
    check_convolution_args(kernel, src.len(), &shape, channel, dst.len())?;

    let px_stride = shape.channels as usize;
    let row_stride = px_stride * shape.width as usize;
    StridedPass {
        offset: channel as usize,
        lines: shape.width as usize,
        line_stride: px_stride,
        line_len: shape.height as usize,
        sample_stride: row_stride,
    }
    .run(kernel.weights(), src, dst);
    Ok(())
}
