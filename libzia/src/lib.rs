#![allow(clippy::needless_range_loop)]

//! Lossless preprocessing transforms for integer signal compression.
//!
//! - [`markov`]: order-M linear predictor. `fit_predict` emits coefficients,
//!   seed values and integer residuals; `reconstruct` inverts it bit-exactly.
//! - [`runs`]: zero-run segmentation into alternating run lengths stored at
//!   the narrowest sufficient width.
//! - [`codec`]: chains the transforms and stores their artifacts in a small
//!   checksummed container.

use serde::Serialize;

pub mod codec;
pub mod core;
pub mod delta;
pub mod markov;
pub mod runs;

mod reader;
mod writer;

pub use crate::core::{
    compute_crc32, FrameKind, Header, Sample, SampleWidth, ZiaError, ZiaFile, ZiaResult,
    DEFAULT_ORDER, DEFAULT_TRAINING_SAMPLES, HEADER_SIZE, MAGIC, MIN_ZERO_RUN, VERSION_MAJOR,
    VERSION_MINOR,
};
pub use codec::{Decoder, DenseBody, Encoder, Mode, SparseFrame};
pub use delta::{delta_decode, delta_encode, DeltaFrame};
pub use markov::{fit_predict, reconstruct, MarkovConfig, MarkovFrame};
pub use reader::Reader;
pub use runs::{merge_sparse, segment_runs, split_sparse, RunLengths, RunWidth};
pub use writer::Writer;

/// info about a zia container
#[derive(Debug, Clone, Serialize)]
pub struct FrameInfo {
    /// version string like "1.0"
    pub version: String,
    /// Bits per sample of the original signal
    pub sample_bits: u8,
    /// Transform chain name
    pub kind: String,
    /// Samples in the original signal
    pub signal_len: u64,
    /// Payload size in bytes
    pub payload_size: u64,
    /// Container size in bytes
    pub file_size: usize,
    /// Raw signal size / container size
    pub compression_ratio: f64,
    /// Is CRC valid?
    pub crc_valid: bool,
}

/// Read container header fields without decoding the payload.
pub fn info(data: &[u8]) -> ZiaResult<FrameInfo> {
    let reader = Reader::new();
    let header = reader.read_header_only(data)?;

    let start = MAGIC.len() + HEADER_SIZE;
    let end = start.saturating_add(header.payload_size as usize);
    let crc_valid = end <= data.len() && compute_crc32(&data[start..end]) == header.payload_crc32;

    let raw_size = header.signal_len as f64 * (header.width.bits() / 8) as f64;
    let compression_ratio = if data.is_empty() {
        0.0
    } else {
        raw_size / data.len() as f64
    };

    Ok(FrameInfo {
        version: format!("{}.{}", header.version_major, header.version_minor),
        sample_bits: header.width.bits(),
        kind: header.kind.name().to_string(),
        signal_len: header.signal_len,
        payload_size: header.payload_size,
        file_size: data.len(),
        compression_ratio,
        crc_valid,
    })
}
