use crate::core::{FrameKind, Sample, ZiaError, ZiaFile, ZiaResult};
use crate::delta::{delta_decode, DeltaFrame};
use crate::markov::MarkovFrame;
use crate::{FrameInfo, Reader};

use super::frame::SparseFrame;

/// decoder for zia containers
pub struct Decoder;

impl Decoder {
    pub fn new() -> Self {
        Decoder
    }

    /// decode a container back into its samples
    pub fn decode<T: Sample>(&self, data: &[u8]) -> ZiaResult<Vec<T>> {
        let reader = Reader::new();
        let file = reader.read(data)?;
        self.decode_file(&file)
    }

    /// header fields of a container, without decoding the payload
    pub fn info(&self, data: &[u8]) -> ZiaResult<FrameInfo> {
        crate::info(data)
    }

    /// decode from a parsed file
    pub fn decode_file<T: Sample>(&self, file: &ZiaFile) -> ZiaResult<Vec<T>> {
        let header = &file.header;
        if header.width != T::WIDTH {
            return Err(ZiaError::WidthMismatch {
                expected: T::WIDTH,
                actual: header.width,
            });
        }

        let declared = header.signal_len;
        let samples = match header.kind {
            FrameKind::Markov => {
                let frame: MarkovFrame<T> = rmp_serde::from_slice(&file.payload)?;
                check_signal_len(declared, frame.signal_len())?;
                frame.reconstruct()?
            }
            FrameKind::MarkovSparse => {
                let frame: SparseFrame<T> = rmp_serde::from_slice(&file.payload)?;
                // run lengths come from the payload, so check them before expanding
                check_signal_len(declared, frame.signal_len())?;
                frame.reconstruct()?
            }
            FrameKind::Delta => {
                let frame: DeltaFrame<T> = rmp_serde::from_slice(&file.payload)?;
                check_signal_len(declared, frame.signal_len())?;
                delta_decode(&frame)
            }
            FrameKind::Reserved => {
                return Err(ZiaError::InvalidContainer("reserved payload kind".to_string()))
            }
        };

        check_signal_len(declared, samples.len())?;
        Ok(samples)
    }
}

fn check_signal_len(declared: u64, actual: usize) -> ZiaResult<()> {
    if actual as u64 != declared {
        return Err(ZiaError::InvalidContainer(format!(
            "header declares {} samples, payload holds {}",
            declared, actual
        )));
    }
    Ok(())
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
