//! rezia - raw signal converter library
//!
//! Reads headerless little-endian integer signals, runs them through the
//! libzia transforms and writes `.zia` containers (and back).

pub mod raw;

use anyhow::{bail, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use libzia::{Decoder, Encoder, Sample};

/// Re-export libzia types
pub use libzia::{FrameInfo, Mode, RunLengths, SampleWidth};

/// Get information about a zia container
pub fn get_info(data: &[u8]) -> Result<FrameInfo> {
    libzia::info(data).context("Failed to read zia container")
}

/// Validate a zia container
pub fn validate(data: &[u8]) -> Result<bool> {
    let info = get_info(data)?;
    Ok(info.crc_valid)
}

/// Encoding options for converting raw signals to zia containers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Width of the raw input samples
    pub width: SampleWidth,
    /// Transform chain
    pub mode: Mode,
    /// Predictor order (window length including the bias term)
    pub order: usize,
    /// Upper bound on windows used to fit the predictor
    pub training_samples: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            width: SampleWidth::Bits16,
            mode: Mode::Markov,
            order: libzia::DEFAULT_ORDER,
            training_samples: libzia::DEFAULT_TRAINING_SAMPLES,
        }
    }
}

impl EncodeOptions {
    /// Plain predictive transform
    pub fn markov(width: SampleWidth) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Zero-run split, then the predictive transform on the dense part
    pub fn sparse(width: SampleWidth) -> Self {
        Self {
            width,
            mode: Mode::MarkovSparse,
            ..Default::default()
        }
    }

    /// First-difference transform
    pub fn delta(width: SampleWidth) -> Self {
        Self {
            width,
            mode: Mode::Delta,
            ..Default::default()
        }
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    pub fn with_training_samples(mut self, training_samples: usize) -> Self {
        self.training_samples = training_samples;
        self
    }

    fn encoder(&self) -> Encoder {
        Encoder::new(self.order)
            .with_training_samples(self.training_samples)
            .with_mode(self.mode)
    }
}

/// Parse a width given in bits (16 or 32)
pub fn parse_width(bits: u8) -> Result<SampleWidth> {
    match SampleWidth::from_bits(bits) {
        Some(width) => Ok(width),
        None => bail!("Unsupported sample width: {}. Use: 16, 32", bits),
    }
}

/// Parse a transform chain name
pub fn parse_mode(name: &str) -> Result<Mode> {
    match name.to_lowercase().as_str() {
        "markov" => Ok(Mode::Markov),
        "sparse" | "markov-sparse" => Ok(Mode::MarkovSparse),
        "delta" => Ok(Mode::Delta),
        _ => bail!("Invalid mode: {}. Use: markov, sparse, delta", name),
    }
}

/// Encode a raw little-endian signal to a zia container
///
/// # Arguments
/// * `raw_bytes` - Headerless samples at `options.width`
/// * `options` - Encoding options
///
/// # Returns
/// Raw bytes of the zia container
pub fn encode_raw(raw_bytes: &[u8], options: &EncodeOptions) -> Result<Vec<u8>> {
    match options.width {
        SampleWidth::Bits16 => encode_samples(&raw::read_samples::<i16>(raw_bytes)?, options),
        SampleWidth::Bits32 => encode_samples(&raw::read_samples::<i32>(raw_bytes)?, options),
    }
}

/// Encode decoded samples to a zia container
///
/// `options.width` is ignored; the container records the width of `T`.
pub fn encode_samples<T: Sample>(samples: &[T], options: &EncodeOptions) -> Result<Vec<u8>> {
    info!(
        "encoding {} samples ({}-bit, {:?}, order {})",
        samples.len(),
        T::WIDTH.bits(),
        options.mode,
        options.order
    );

    options
        .encoder()
        .encode(samples)
        .context("Failed to encode signal")
}

/// Decode a zia container back to raw little-endian bytes
pub fn decode_to_raw(data: &[u8]) -> Result<Vec<u8>> {
    let info = get_info(data)?;
    let decoder = Decoder::new();

    let bytes = match parse_width(info.sample_bits)? {
        SampleWidth::Bits16 => raw::write_samples(
            &decoder
                .decode::<i16>(data)
                .context("Failed to decode container")?,
        ),
        SampleWidth::Bits32 => raw::write_samples(
            &decoder
                .decode::<i32>(data)
                .context("Failed to decode container")?,
        ),
    };

    info!("decoded {} samples", info.signal_len);
    Ok(bytes)
}

/// Zero-run layout of a raw signal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Bits per stored run length (8, 16 or 32)
    pub run_bits: u8,
    /// Alternating non-zero / zero run lengths
    pub runs: Vec<u32>,
    /// Samples in the signal
    pub signal_len: usize,
    /// Samples covered by zero runs
    pub zero_samples: usize,
}

/// Segment a raw little-endian signal into zero runs
pub fn runs_of_raw(raw_bytes: &[u8], width: SampleWidth) -> Result<RunSummary> {
    let runs = match width {
        SampleWidth::Bits16 => libzia::segment_runs(&raw::read_samples::<i16>(raw_bytes)?),
        SampleWidth::Bits32 => libzia::segment_runs(&raw::read_samples::<i32>(raw_bytes)?),
    };

    let signal_len = runs.total();
    Ok(RunSummary {
        run_bits: runs.width().bits(),
        zero_samples: signal_len - runs.non_zero_total(),
        signal_len,
        runs: runs.to_u32_vec(),
    })
}
