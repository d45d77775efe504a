use crate::shape::check_relocation_args;
use crate::{ImageShape, TransposeError};

/// Transposes every channel of planar image.
///
/// The result is a planar image with shape `shape.transposed()`.
/// Vertical convolution can be computed by the horizontal one over
/// the transposed image.
pub fn transpose_planar<T: Copy>(
    src: &[T],
    shape: ImageShape,
    dst: &mut [T],
) -> Result<(), TransposeError> {
    check_relocation_args(src.len(), &shape, dst.len())?;

    let height = shape.height as usize;
    let width = shape.width as usize;
    let plane_len = height * width;
    if plane_len == 0 {
        return Ok(());
    }

    let src_planes = src.chunks_exact(plane_len);
    let dst_planes = dst.chunks_exact_mut(plane_len);
    for (src_plane, dst_plane) in src_planes.zip(dst_planes).take(shape.channels as usize) {
        for (src_row_index, src_row) in src_plane.chunks_exact(width).enumerate() {
            for (src_col_index, &sample) in src_row.iter().enumerate() {
                dst_plane[src_col_index * height + src_row_index] = sample;
            }
        }
    }
    Ok(())
}

/// Converts planar image into interleaved one.
pub fn planar_to_interleaved<T: Copy>(
    src: &[T],
    shape: ImageShape,
    dst: &mut [T],
) -> Result<(), TransposeError> {
    check_relocation_args(src.len(), &shape, dst.len())?;

    let channels = shape.channels as usize;
    let Some(plane_len) = shape.plane_len().filter(|&len| len > 0) else {
        return Ok(());
    };
    for (channel, src_plane) in src.chunks_exact(plane_len).take(channels).enumerate() {
        let dst_samples = dst[channel..].iter_mut().step_by(channels);
        for (dst_sample, &sample) in dst_samples.zip(src_plane) {
            *dst_sample = sample;
        }
    }
    Ok(())
}

/// Converts interleaved image into planar one.
pub fn interleaved_to_planar<T: Copy>(
    src: &[T],
    shape: ImageShape,
    dst: &mut [T],
) -> Result<(), TransposeError> {
    check_relocation_args(src.len(), &shape, dst.len())?;

    let channels = shape.channels as usize;
    let Some(plane_len) = shape.plane_len().filter(|&len| len > 0) else {
        return Ok(());
    };
    for (channel, dst_plane) in dst.chunks_exact_mut(plane_len).take(channels).enumerate() {
        let src_samples = src[channel..].iter().step_by(channels);
        for (dst_sample, &sample) in dst_plane.iter_mut().zip(src_samples) {
            *dst_sample = sample;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_two_channels() {
        let shape = ImageShape::new(2, 3, 2);
        let src = [
            1, 2, 3, //
            4, 5, 6, //
            10, 20, 30, //
            40, 50, 60,
        ];
        let mut dst = [0; 12];
        transpose_planar(&src, shape, &mut dst).unwrap();
        assert_eq!(
            dst,
            [
                1, 4, //
                2, 5, //
                3, 6, //
                10, 40, //
                20, 50, //
                30, 60,
            ]
        );
    }

    #[test]
    fn test_transpose_keeps_tail_of_dst() {
        let shape = ImageShape::new(1, 2, 1);
        let src = [1, 2, 3];
        let mut dst = [0; 4];
        transpose_planar(&src, shape, &mut dst).unwrap();
        assert_eq!(dst, [1, 2, 0, 0]);
    }

    #[test]
    fn test_layout_conversion() {
        let shape = ImageShape::new(1, 2, 3);
        let planar = [1, 2, 10, 20, 100, 200];
        let mut interleaved = [0; 6];
        planar_to_interleaved(&planar, shape, &mut interleaved).unwrap();
        assert_eq!(interleaved, [1, 10, 100, 2, 20, 200]);

        let mut restored = [0; 6];
        interleaved_to_planar(&interleaved, shape, &mut restored).unwrap();
        assert_eq!(restored, planar);
    }

    #[test]
    fn test_empty_image() {
        let shape = ImageShape::new(0, 5, 3);
        let mut dst: [f32; 0] = [];
        assert!(transpose_planar(&[], shape, &mut dst).is_ok());
        assert!(planar_to_interleaved(&[], shape, &mut dst).is_ok());
        assert!(interleaved_to_planar(&[], shape, &mut dst).is_ok());
    }
}
