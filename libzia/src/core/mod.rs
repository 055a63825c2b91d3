pub mod crc32;
pub mod error;
pub mod sample;
pub mod types;

pub use crc32::compute as compute_crc32;
pub use error::{ZiaError, ZiaResult};
pub use sample::Sample;
pub use types::*;
