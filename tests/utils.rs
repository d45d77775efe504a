#![allow(dead_code)]

use separable_conv::ImageShape;

pub const BLUR3: [f32; 3] = [1. / 3., 1. / 3., 1. / 3.];

/// 4x4 image with two interleaved channels, the second channel is zero.
pub const INTERLEAVED_2CH: [f32; 32] = [
    1.0, 0., 2.0, 0., 3.0, 0., 1.0, 0., //
    2.0, 0., 6.0, 0., 7.0, 0., 2.0, 0., //
    3.5, 0., 2.5, 0., 3.5, 0., 3.5, 0., //
    4.5, 0., 6.5, 0., 7.5, 0., 4.5, 0.,
];

pub fn interleaved_2ch_shape() -> ImageShape {
    ImageShape::new(4, 4, 2)
}

pub fn assert_close(actual: &[f32], expected: &[f32], tolerance: f32) {
    assert_eq!(actual.len(), expected.len(), "lengths of buffers");
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tolerance,
            "sample {}: actual {}, expected {}",
            i,
            a,
            e
        );
    }
}
