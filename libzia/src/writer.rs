use log::trace;

use crate::core::{crc32, FrameKind, SampleWidth, MAGIC, VERSION_MAJOR, VERSION_MINOR};

/// binary writer for the zia container
pub struct Writer {
    buffer: Vec<u8>,
}

impl Writer {
    /// new writer
    pub fn new() -> Self {
        Writer { buffer: Vec::new() }
    }

    /// write a complete container around an already serialized payload
    pub fn write(
        mut self,
        width: SampleWidth,
        kind: FrameKind,
        signal_len: u64,
        payload: &[u8],
    ) -> Vec<u8> {
        let payload_crc32 = crc32::compute(payload);

        self.write_header(width, kind, signal_len, payload_crc32, payload.len() as u64);
        self.buffer.extend_from_slice(payload);

        trace!(
            "wrote {} container: {} samples, {} payload bytes",
            kind.name(),
            signal_len,
            payload.len()
        );
        self.buffer
    }

    fn write_header(
        &mut self,
        width: SampleWidth,
        kind: FrameKind,
        signal_len: u64,
        payload_crc32: u32,
        payload_size: u64,
    ) {
        // Magic "ZIA!"
        self.buffer.extend_from_slice(&MAGIC);

        // Version (u8, u8)
        self.buffer.push(VERSION_MAJOR);
        self.buffer.push(VERSION_MINOR);

        // Sample width in bits (u8)
        self.buffer.push(width.bits());

        // Payload kind (u8)
        self.buffer.push(kind as u8);

        // Signal length (u64 LE)
        self.buffer.extend_from_slice(&signal_len.to_le_bytes());

        // Payload CRC32 (u32 LE)
        self.buffer.extend_from_slice(&payload_crc32.to_le_bytes());

        // Payload size (u64 LE)
        self.buffer.extend_from_slice(&payload_size.to_le_bytes());
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}
