use num_traits::{Float, NumCast};

use crate::KernelError;

/// Ordered weights of 1D convolution kernel.
///
/// Implemented for `[T; N]`, `[T]`, `Vec<T>`, references to them and
/// [Kernel1d]. Only kernels with odd length have a unique center tap,
/// convolution functions reject others.
pub trait Kernel {
    type Weight: Copy;

    fn weights(&self) -> &[Self::Weight];

    #[inline]
    fn len(&self) -> usize {
        self.weights().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.weights().is_empty()
    }

    /// Index of the tap aligned with the output position.
    #[inline]
    fn center(&self) -> usize {
        self.len() / 2
    }

    #[inline]
    fn is_valid(&self) -> bool {
        self.len() % 2 == 1
    }
}

impl<T: Copy, const N: usize> Kernel for [T; N] {
    type Weight = T;

    #[inline]
    fn weights(&self) -> &[T] {
        self
    }
}

impl<T: Copy> Kernel for [T] {
    type Weight = T;

    #[inline]
    fn weights(&self) -> &[T] {
        self
    }
}

impl<T: Copy> Kernel for Vec<T> {
    type Weight = T;

    #[inline]
    fn weights(&self) -> &[T] {
        self
    }
}

impl<K: Kernel + ?Sized> Kernel for &K {
    type Weight = K::Weight;

    #[inline]
    fn weights(&self) -> &[K::Weight] {
        (**self).weights()
    }
}

/// Owned kernel which always has odd length.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel1d<T> {
    weights: Vec<T>,
}

impl<T> Kernel1d<T> {
    pub fn new(weights: Vec<T>) -> Result<Self, KernelError> {
        if weights.len() % 2 != 1 {
            return Err(KernelError::EvenLength);
        }
        Ok(Self { weights })
    }

    pub fn into_vec(self) -> Vec<T> {
        self.weights
    }
}

impl<T: Float> Kernel1d<T> {
    /// Kernel with `size` equal weights `1 / size`.
    pub fn box_blur(size: usize) -> Result<Self, KernelError> {
        if size % 2 != 1 {
            return Err(KernelError::EvenLength);
        }
        let contribution = T::one() / from_usize(size);
        Ok(Self {
            weights: vec![contribution; size],
        })
    }

    /// Gaussian kernel normalized to unit sum.
    ///
    /// The radius of the kernel is `ceil(3 * sigma)` but not less than 1,
    /// so the length is `2 * radius + 1`.
    pub fn gaussian(sigma: T) -> Result<Self, KernelError> {
        if !sigma.is_finite() || sigma <= T::zero() {
            return Err(KernelError::InvalidSigma);
        }
        let three = from_usize::<T>(3);
        let radius = (three * sigma).ceil().to_usize().unwrap_or(1).max(1);
        let two_sigma2 = from_usize::<T>(2) * sigma * sigma;

        let mut weights: Vec<T> = (0..2 * radius + 1)
            .map(|i| {
                let x = from_usize::<T>(i) - from_usize::<T>(radius);
                (-(x * x) / two_sigma2).exp()
            })
            .collect();
        let sum = weights.iter().fold(T::zero(), |acc, &w| acc + w);
        weights.iter_mut().for_each(|w| *w = *w / sum);
        Ok(Self { weights })
    }
}

impl<T: Copy> Kernel for Kernel1d<T> {
    type Weight = T;

    #[inline]
    fn weights(&self) -> &[T] {
        &self.weights
    }
}

impl<T> TryFrom<Vec<T>> for Kernel1d<T> {
    type Error = KernelError;

    fn try_from(weights: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(weights)
    }
}

#[inline]
fn from_usize<T: Float>(v: usize) -> T {
    <T as NumCast>::from(v).unwrap_or_else(T::nan)
}
