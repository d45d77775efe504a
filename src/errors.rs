use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvolutionError {
    #[error("Length of the kernel is not odd")]
    EvenKernelLength,
    #[error("Index of the channel is out of range of the image channels")]
    ChannelOutOfRange,
    #[error("Size of destination buffer is smaller than size of source buffer")]
    DestinationTooSmall,
    #[error("Size of the image is greater than size of source buffer")]
    ShapeExceedsBuffer,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransposeError {
    #[error("Size of destination buffer is smaller than size of source buffer")]
    DestinationTooSmall,
    #[error("Size of the image is greater than size of source buffer")]
    ShapeExceedsBuffer,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    #[error("Length of the kernel is not odd")]
    EvenLength,
    #[error("Sigma of the gaussian kernel must be positive and finite")]
    InvalidSigma,
}
