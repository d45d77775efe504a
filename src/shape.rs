use crate::{ConvolutionError, Kernel, TransposeError};

/// Dimensions of an image stored in a flat buffer of samples.
///
/// The shape is not stored in the buffer, so it has to be passed
/// together with the buffer into every function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageShape {
    pub height: u32,
    pub width: u32,
    pub channels: u32,
}

impl ImageShape {
    pub fn new(height: u32, width: u32, channels: u32) -> Self {
        Self {
            height,
            width,
            channels,
        }
    }

    /// Shape with swapped height and width.
    pub fn transposed(&self) -> Self {
        Self {
            height: self.width,
            width: self.height,
            channels: self.channels,
        }
    }

    /// Count of samples in one channel of a planar image.
    ///
    /// Returns `None` if the value doesn't fit into `usize`.
    pub fn plane_len(&self) -> Option<usize> {
        (self.height as usize).checked_mul(self.width as usize)
    }

    /// Count of samples required to store the image.
    ///
    /// Returns `None` if the value doesn't fit into `usize`.
    pub fn samples_count(&self) -> Option<usize> {
        self.plane_len()?.checked_mul(self.channels as usize)
    }

    #[inline]
    pub fn planar_index(&self, channel: u32, row: u32, col: u32) -> usize {
        let (height, width) = (self.height as usize, self.width as usize);
        channel as usize * height * width + row as usize * width + col as usize
    }

    #[inline]
    pub fn interleaved_index(&self, channel: u32, row: u32, col: u32) -> usize {
        let (width, channels) = (self.width as usize, self.channels as usize);
        row as usize * width * channels + col as usize * channels + channel as usize
    }

    /// Checks that a buffer with `len` samples can store the image.
    #[inline]
    pub fn fits_into(&self, len: usize) -> bool {
        self.samples_count().is_some_and(|count| count <= len)
    }
}

/// Order of samples of a multi-channel image in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// All samples of one channel are stored before the next channel begins.
    Planar,
    /// All channels of one pixel are stored before the next pixel begins.
    Interleaved,
}

impl PixelLayout {
    #[inline]
    pub fn index(self, shape: &ImageShape, channel: u32, row: u32, col: u32) -> usize {
        match self {
            Self::Planar => shape.planar_index(channel, row, col),
            Self::Interleaved => shape.interleaved_index(channel, row, col),
        }
    }
}

pub(crate) fn check_convolution_args<K: Kernel + ?Sized>(
    kernel: &K,
    src_len: usize,
    shape: &ImageShape,
    channel: u32,
    dst_len: usize,
) -> Result<(), ConvolutionError> {
    if !kernel.is_valid() {
        return Err(ConvolutionError::EvenKernelLength);
    }
    if channel >= shape.channels {
        return Err(ConvolutionError::ChannelOutOfRange);
    }
    if dst_len < src_len {
        return Err(ConvolutionError::DestinationTooSmall);
    }
    if !shape.fits_into(src_len) {
        return Err(ConvolutionError::ShapeExceedsBuffer);
    }
    Ok(())
}

pub(crate) fn check_relocation_args(
    src_len: usize,
    shape: &ImageShape,
    dst_len: usize,
) -> Result<(), TransposeError> {
    if dst_len < src_len {
        return Err(TransposeError::DestinationTooSmall);
    }
    if !shape.fits_into(src_len) {
        return Err(TransposeError::ShapeExceedsBuffer);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes() {
        let shape = ImageShape::new(4, 5, 3);
        assert_eq!(shape.planar_index(0, 0, 0), 0);
        assert_eq!(shape.planar_index(0, 1, 2), 7);
        assert_eq!(shape.planar_index(2, 3, 4), 2 * 20 + 3 * 5 + 4);
        assert_eq!(shape.interleaved_index(0, 0, 1), 3);
        assert_eq!(shape.interleaved_index(2, 3, 4), 3 * 15 + 4 * 3 + 2);
        assert_eq!(
            PixelLayout::Interleaved.index(&shape, 1, 1, 1),
            shape.interleaved_index(1, 1, 1)
        );
        assert_eq!(
            PixelLayout::Planar.index(&shape, 1, 1, 1),
            shape.planar_index(1, 1, 1)
        );
    }

    #[test]
    fn test_samples_count() {
        let shape = ImageShape::new(4, 5, 3);
        assert_eq!(shape.plane_len(), Some(20));
        assert_eq!(shape.samples_count(), Some(60));
        assert!(shape.fits_into(60));
        assert!(!shape.fits_into(59));
        assert_eq!(shape.transposed(), ImageShape::new(5, 4, 3));

        let huge = ImageShape::new(u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(huge.samples_count(), None);
        assert!(!huge.fits_into(usize::MAX));
    }

    #[test]
    fn test_validation_order() {
        let shape = ImageShape::new(2, 2, 1);
        // Every argument is wrong, the kernel is checked first
        assert_eq!(
            check_convolution_args(&[1f32; 2], 10, &shape, 1, 0),
            Err(ConvolutionError::EvenKernelLength)
        );
        assert_eq!(
            check_convolution_args(&[1f32; 3], 10, &shape, 1, 0),
            Err(ConvolutionError::ChannelOutOfRange)
        );
        assert_eq!(
            check_convolution_args(&[1f32; 3], 3, &shape, 0, 0),
            Err(ConvolutionError::DestinationTooSmall)
        );
        assert_eq!(
            check_convolution_args(&[1f32; 3], 3, &shape, 0, 3),
            Err(ConvolutionError::ShapeExceedsBuffer)
        );
        assert_eq!(check_convolution_args(&[1f32; 3], 4, &shape, 0, 4), Ok(()));

        assert_eq!(
            check_relocation_args(3, &shape, 2),
            Err(TransposeError::DestinationTooSmall)
        );
        assert_eq!(
            check_relocation_args(3, &shape, 3),
            Err(TransposeError::ShapeExceedsBuffer)
        );
        assert_eq!(check_relocation_args(4, &shape, 4), Ok(()));
    }
}
