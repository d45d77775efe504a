use separable_conv::testing::random_image;
use separable_conv::{
    interleaved_to_planar, planar_to_interleaved, transpose_planar, ImageShape, TransposeError,
};
use utils::{interleaved_2ch_shape, INTERLEAVED_2CH};

mod utils;

#[test]
fn transpose_twice_gives_source_image() {
    for (seed, shape) in [
        ImageShape::new(1, 1, 1),
        ImageShape::new(1, 17, 2),
        ImageShape::new(13, 7, 3),
        ImageShape::new(32, 32, 4),
    ]
    .into_iter()
    .enumerate()
    {
        let src = random_image::<f32>(shape, seed as u64);
        let mut transposed = vec![0f32; src.len()];
        let mut restored = vec![0f32; src.len()];
        transpose_planar(&src, shape, &mut transposed).unwrap();
        transpose_planar(&transposed, shape.transposed(), &mut restored).unwrap();
        assert_eq!(restored, src, "{shape:?}");
    }
}

#[test]
fn transpose_moves_every_sample_once() {
    let shape = ImageShape::new(3, 5, 2);
    let src: Vec<f32> = (0..30).map(|v| v as f32).collect();
    let mut dst = vec![-1f32; src.len()];
    transpose_planar(&src, shape, &mut dst).unwrap();

    let dst_shape = shape.transposed();
    for channel in 0..shape.channels {
        for row in 0..shape.height {
            for col in 0..shape.width {
                assert_eq!(
                    dst[dst_shape.planar_index(channel, col, row)],
                    src[shape.planar_index(channel, row, col)],
                );
            }
        }
    }
    let mut sorted = dst.clone();
    sorted.sort_by(f32::total_cmp);
    assert_eq!(sorted, src);
}

#[test]
fn transpose_does_not_write_on_failure() {
    let src = [1f32; 12];

    let mut dst = [0f32; 11];
    let res = transpose_planar(&src, ImageShape::new(2, 3, 2), &mut dst);
    assert_eq!(res, Err(TransposeError::DestinationTooSmall));
    assert!(dst.iter().all(|&v| v == 0.));

    let mut dst = [0f32; 12];
    let res = transpose_planar(&src, ImageShape::new(3, 3, 2), &mut dst);
    assert_eq!(res, Err(TransposeError::ShapeExceedsBuffer));
    assert!(dst.iter().all(|&v| v == 0.));
}

#[test]
fn layout_conversion() {
    let shape = interleaved_2ch_shape();
    let mut planar = vec![0f32; INTERLEAVED_2CH.len()];
    interleaved_to_planar(&INTERLEAVED_2CH, shape, &mut planar).unwrap();
    assert_eq!(
        planar[..16],
        [1.0, 2.0, 3.0, 1.0, 2.0, 6.0, 7.0, 2.0, 3.5, 2.5, 3.5, 3.5, 4.5, 6.5, 7.5, 4.5]
    );
    assert!(planar[16..].iter().all(|&v| v == 0.));

    let mut interleaved = vec![0f32; planar.len()];
    planar_to_interleaved(&planar, shape, &mut interleaved).unwrap();
    assert_eq!(interleaved, INTERLEAVED_2CH);

    let mut small = vec![0f32; 4];
    assert_eq!(
        planar_to_interleaved(&planar, shape, &mut small),
        Err(TransposeError::DestinationTooSmall)
    );
    assert_eq!(
        interleaved_to_planar(&planar[..8], shape, &mut interleaved),
        Err(TransposeError::ShapeExceedsBuffer)
    );
}
