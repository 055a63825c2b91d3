//! common types for the zia container and transforms

use serde::{Deserialize, Serialize};

// constants

/// Magic number "ZIA!"
pub const MAGIC: [u8; 4] = [0x5a, 0x49, 0x41, 0x21];

/// header size (excludes magic)
pub const HEADER_SIZE: usize = 24;

/// format version
pub const VERSION_MAJOR: u8 = 1;
pub const VERSION_MINOR: u8 = 0;

/// Default predictor order
pub const DEFAULT_ORDER: usize = 6;

/// Default cap on the number of windows the least-squares fit sees
pub const DEFAULT_TRAINING_SAMPLES: usize = 10_000;

/// Minimum length of a zero stretch that is emitted as its own run
pub const MIN_ZERO_RUN: usize = 10;

// types

/// integer width of signal samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum SampleWidth {
    Bits16 = 16,
    Bits32 = 32,
}

impl SampleWidth {
    pub fn bits(self) -> u8 {
        self as u8
    }

    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            16 => Some(SampleWidth::Bits16),
            32 => Some(SampleWidth::Bits32),
            _ => None,
        }
    }
}

/// payload kind
///
/// | Value | Kind          | Payload                    |
/// |-------|---------------|----------------------------|
/// | 0     | Markov        | `MarkovFrame`              |
/// | 1     | MarkovSparse  | `SparseFrame`              |
/// | 2     | Delta         | `DeltaFrame`               |
/// | 255   | Reserved      | Future use                 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum FrameKind {
    Markov = 0,
    MarkovSparse = 1,
    Delta = 2,
    Reserved = 255,
}

impl From<u8> for FrameKind {
    fn from(v: u8) -> Self {
        match v {
            0 => FrameKind::Markov,
            1 => FrameKind::MarkovSparse,
            2 => FrameKind::Delta,
            _ => FrameKind::Reserved,
        }
    }
}

impl FrameKind {
    pub fn name(self) -> &'static str {
        match self {
            FrameKind::Markov => "markov",
            FrameKind::MarkovSparse => "markov-sparse",
            FrameKind::Delta => "delta",
            FrameKind::Reserved => "reserved",
        }
    }
}

// data structures

/// zia container header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub version_major: u8,
    pub version_minor: u8,
    pub width: SampleWidth,
    pub kind: FrameKind,
    pub signal_len: u64,
    pub payload_crc32: u32,
    pub payload_size: u64,
}

/// parsed container: header plus the still-encoded msgpack payload
#[derive(Debug, Clone)]
pub struct ZiaFile {
    pub header: Header,
    pub payload: Vec<u8>,
}
