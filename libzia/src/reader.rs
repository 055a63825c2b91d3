use crate::core::{
    crc32, FrameKind, Header, SampleWidth, ZiaError, ZiaFile, ZiaResult, MAGIC, VERSION_MAJOR,
};

/// binary reader for the zia container
pub struct Reader;

impl Reader {
    /// new reader
    pub fn new() -> Self {
        Reader
    }

    /// read and validate a container, leaving the payload encoded
    pub fn read(&self, data: &[u8]) -> ZiaResult<ZiaFile> {
        let mut cursor = Cursor::new(data);

        // magic
        let magic = cursor.read_bytes(4)?;
        if magic != MAGIC {
            return Err(invalid("bad magic"));
        }

        let header = self.read_header(&mut cursor)?;

        let payload = cursor.read_bytes(header.payload_size as usize)?;
        let actual = crc32::compute(&payload);
        if actual != header.payload_crc32 {
            return Err(ZiaError::ChecksumMismatch {
                expected: header.payload_crc32,
                actual,
            });
        }

        Ok(ZiaFile { header, payload })
    }

    /// read only the header, without touching the payload
    pub fn read_header_only(&self, data: &[u8]) -> ZiaResult<Header> {
        let mut cursor = Cursor::new(data);
        if cursor.read_bytes(4)? != MAGIC {
            return Err(invalid("bad magic"));
        }
        self.read_header(&mut cursor)
    }

    fn read_header(&self, cursor: &mut Cursor) -> ZiaResult<Header> {
        let version_major = cursor.read_u8()?;
        if version_major != VERSION_MAJOR {
            return Err(invalid(&format!("unsupported version {}", version_major)));
        }
        let version_minor = cursor.read_u8()?;

        let bits = cursor.read_u8()?;
        let width = SampleWidth::from_bits(bits)
            .ok_or_else(|| invalid(&format!("unsupported sample width {}", bits)))?;

        let kind = FrameKind::from(cursor.read_u8()?);
        if kind == FrameKind::Reserved {
            return Err(invalid("reserved payload kind"));
        }

        Ok(Header {
            version_major,
            version_minor,
            width,
            kind,
            signal_len: cursor.read_u64_le()?,
            payload_crc32: cursor.read_u32_le()?,
            payload_size: cursor.read_u64_le()?,
        })
    }
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(msg: &str) -> ZiaError {
    ZiaError::InvalidContainer(msg.to_string())
}

// cursor helper

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Cursor { data, pos: 0 }
    }

    fn read_bytes(&mut self, count: usize) -> ZiaResult<Vec<u8>> {
        if count > self.data.len() - self.pos {
            return Err(invalid("unexpected end of data"));
        }
        let bytes = self.data[self.pos..self.pos + count].to_vec();
        self.pos += count;
        Ok(bytes)
    }

    fn read_u8(&mut self) -> ZiaResult<u8> {
        if self.pos >= self.data.len() {
            return Err(invalid("unexpected end of data"));
        }
        let val = self.data[self.pos];
        self.pos += 1;
        Ok(val)
    }

    fn read_u32_le(&mut self) -> ZiaResult<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_u64_le(&mut self) -> ZiaResult<u64> {
        let bytes = self.read_bytes(8)?;
        Ok(u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }
}
