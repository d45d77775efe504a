use num_traits::Float;

use super::StridedPass;
use crate::shape::check_convolution_args;
use crate::{ConvolutionError, ImageShape, Kernel};

/// Performs 1D horizontal convolution of one channel of planar image.
///
/// Only samples of the channel `channel` in columns from `center` to
/// `width - center` (exclusive) are written into `dst`, where `center`
/// is the index of the center tap of the kernel. All other samples of `dst`
/// keep their values.
///
/// Returns an error without touching `dst` if the kernel has even length,
/// the channel index is out of range, `dst` is shorter than `src`
/// or `src` is too small for the given shape.
pub fn horiz_convolution_planar<T, K>(
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

    let width = shape.width as usize;
    let plane_len = shape.height as usize * width;
    StridedPass {
        offset: channel as usize * plane_len,
        lines: shape.height as usize,
        line_stride: width,
        line_len: width,
        sample_stride: 1,
    }
    .run(kernel.weights(), src, dst);
    Ok(())
}

/// Performs 1D vertical convolution of one channel of planar image.
///
/// Only samples of the channel `channel` in rows from `center` to
/// `height - center` (exclusive) are written into `dst`.
/// Failures are the same as in [horiz_convolution_planar].
pub fn vert_convolution_planar<T, K>(
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

    let width = shape.width as usize;
    let plane_len = shape.height as usize * width;
    StridedPass {
        offset: channel as usize * plane_len,
        lines: width,
        line_stride: 1,
        line_len: shape.height as usize,
        sample_stride: width,
    }
    .run(kernel.weights(), src, dst);
    Ok(())
}
