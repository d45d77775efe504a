use std::time::Instant;

use anyhow::{Context, Result};
use log::debug;
use separable_conv as sc;
use separable_conv::{ConvolutionError, ImageShape, Kernel1d, TransposeError};

pub type ConvolutionFn =
    fn(&[f32], &[f32], ImageShape, u32, &mut [f32]) -> Result<(), ConvolutionError>;
pub type TransposeFn = fn(&[f32], ImageShape, &mut [f32]) -> Result<(), TransposeError>;

/// Seconds spent in every pass of a blur.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RuntimeInfo {
    pub horizontal: f64,
    pub transpose: f64,
    pub vertical: f64,
}

impl RuntimeInfo {
    pub fn total(&self) -> f64 {
        self.horizontal + self.transpose + self.vertical
    }

    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{}",
            self.horizontal,
            self.transpose,
            self.vertical,
            self.total()
        )
    }

    fn accumulate(&mut self, other: &RuntimeInfo) {
        self.horizontal += other.horizontal;
        self.transpose += other.transpose;
        self.vertical += other.vertical;
    }

    fn mean(mut self, count: u32) -> Self {
        let count = count.max(1) as f64;
        self.horizontal /= count;
        self.transpose /= count;
        self.vertical /= count;
        self
    }
}

/// Set of functions used to blur all channels of an image.
///
/// If `transpose` is present, the vertical pass is computed as
/// the horizontal one over the transposed image.
#[derive(Clone, Copy)]
pub struct BlurStrategy {
    pub name: &'static str,
    pub kernel_size: usize,
    pub horizontal: ConvolutionFn,
    pub transpose: Option<TransposeFn>,
    pub vertical: ConvolutionFn,
}

impl BlurStrategy {
    fn interleaved(name: &'static str, kernel_size: usize) -> Self {
        Self {
            name,
            kernel_size,
            horizontal: sc::horiz_convolution_interleaved::<f32, [f32]>,
            transpose: None,
            vertical: sc::vert_convolution_interleaved::<f32, [f32]>,
        }
    }

    fn planar(name: &'static str, kernel_size: usize) -> Self {
        Self {
            name,
            kernel_size,
            horizontal: sc::horiz_convolution_planar::<f32, [f32]>,
            transpose: None,
            vertical: sc::vert_convolution_planar::<f32, [f32]>,
        }
    }

    fn with_transpose(mut self, transpose: TransposeFn) -> Self {
        self.transpose = Some(transpose);
        self
    }
}

pub fn default_strategies() -> Vec<BlurStrategy> {
    vec![
        BlurStrategy::interleaved("interleaved3", 3),
        BlurStrategy::planar("planar3", 3),
        BlurStrategy::interleaved("interleaved7", 7),
        BlurStrategy::planar("planar7", 7),
        BlurStrategy::planar("planar7withTranspose", 7)
            .with_transpose(sc::transpose_planar::<f32>),
    ]
}

/// Measures time of blurring all channels of `src` by a box kernel.
///
/// `dst` is zeroed before the horizontal pass. The vertical pass uses
/// the result of the horizontal one as source, its result is stored in `dst`.
pub fn measure_blur(
    strategy: &BlurStrategy,
    src: &[f32],
    shape: ImageShape,
    dst: &mut [f32],
) -> Result<RuntimeInfo> {
    let kernel = Kernel1d::<f32>::box_blur(strategy.kernel_size)
        .with_context(|| format!("Failed to create kernel for '{}'", strategy.name))?;
    let weights = kernel.into_vec();
    let mut runtime_info = RuntimeInfo::default();

    dst.fill(0.);

    let horiz_start = Instant::now();
    for channel in 0..shape.channels {
        (strategy.horizontal)(&weights, src, shape, channel, dst).with_context(|| {
            format!(
                "Failed horizontal pass of '{}' in channel {}",
                strategy.name, channel
            )
        })?;
    }
    runtime_info.horizontal = horiz_start.elapsed().as_secs_f64();

    if let Some(transpose) = strategy.transpose {
        let transposed_shape = shape.transposed();
        let mut transposed = vec![0f32; dst.len()];
        let mut blurred = vec![0f32; dst.len()];

        let transpose_start = Instant::now();
        transpose(dst, shape, &mut transposed)
            .with_context(|| format!("Failed to transpose image in '{}'", strategy.name))?;
        runtime_info.transpose = transpose_start.elapsed().as_secs_f64();

        let vert_start = Instant::now();
        for channel in 0..shape.channels {
            (strategy.horizontal)(&weights, &transposed, transposed_shape, channel, &mut blurred)
                .with_context(|| {
                    format!(
                        "Failed vertical pass of '{}' in channel {}",
                        strategy.name, channel
                    )
                })?;
        }
        runtime_info.vertical = vert_start.elapsed().as_secs_f64();

        let transpose_start = Instant::now();
        transpose(&blurred, transposed_shape, dst)
            .with_context(|| format!("Failed to transpose image in '{}'", strategy.name))?;
        runtime_info.transpose += transpose_start.elapsed().as_secs_f64();
    } else {
        // Convolution is out-of-place, so the vertical pass writes into
        // a temporary buffer. Copying back is a part of the pass.
        let mut temp = vec![0f32; dst.len()];

        let vert_start = Instant::now();
        for channel in 0..shape.channels {
            (strategy.vertical)(&weights, dst, shape, channel, &mut temp).with_context(|| {
                format!(
                    "Failed vertical pass of '{}' in channel {}",
                    strategy.name, channel
                )
            })?;
        }
        dst.copy_from_slice(&temp);
        runtime_info.vertical = vert_start.elapsed().as_secs_f64();
    }

    Ok(runtime_info)
}

/// Runs the strategy `iterations` times and returns mean runtime.
pub fn measure_blur_mean(
    strategy: &BlurStrategy,
    src: &[f32],
    shape: ImageShape,
    dst: &mut [f32],
    iterations: u32,
) -> Result<RuntimeInfo> {
    let mut sum = RuntimeInfo::default();
    for iteration in 0..iterations.max(1) {
        let runtime_info = measure_blur(strategy, src, shape, dst)?;
        debug!(
            "{} #{}: {:.6}s",
            strategy.name,
            iteration,
            runtime_info.total()
        );
        sum.accumulate(&runtime_info);
    }
    Ok(sum.mean(iterations))
}
