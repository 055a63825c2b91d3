//! Container encoding for the transforms.
//!
//! Chains segmentation, prediction or delta coding, serialises the artifacts
//! with MessagePack and wraps them in a checksummed header. Entropy coding of
//! the residuals is left to the caller.

pub mod decoder;
pub mod encoder;
pub mod frame;

pub use decoder::Decoder;
pub use encoder::{Encoder, Mode};
pub use frame::{DenseBody, SparseFrame};
