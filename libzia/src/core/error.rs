use thiserror::Error;

use super::types::SampleWidth;

/// Errors returned by the transforms and the container.
///
/// The first group are caller contract violations; they are reported
/// instead of truncating or producing garbage output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZiaError {
    #[error("model order must be at least 2, got {order}")]
    InvalidOrder { order: usize },
    #[error("signal of length {len} is shorter than model order {order}")]
    SignalTooShort { len: usize, order: usize },
    #[error("training sample budget must be at least 1")]
    InvalidTrainingSamples,
    #[error("{coefficients} coefficients do not match {seed} seed values (expected seed + 1)")]
    CoefficientMismatch { coefficients: usize, seed: usize },
    #[error("run lengths cover {expected} samples but {actual} were supplied")]
    RunLengthMismatch { expected: usize, actual: usize },
    #[error("invalid zia container: {0}")]
    InvalidContainer(String),
    #[error("payload checksum mismatch: header {expected:#010x}, computed {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
    #[error("container holds {actual:?} samples, caller asked for {expected:?}")]
    WidthMismatch {
        expected: SampleWidth,
        actual: SampleWidth,
    },
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<rmp_serde::encode::Error> for ZiaError {
    fn from(e: rmp_serde::encode::Error) -> Self {
        ZiaError::Serialization(e.to_string())
    }
}

impl From<rmp_serde::decode::Error> for ZiaError {
    fn from(e: rmp_serde::decode::Error) -> Self {
        ZiaError::Serialization(e.to_string())
    }
}

/// result type for zia stuff
pub type ZiaResult<T> = Result<T, ZiaError>;
