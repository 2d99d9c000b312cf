use super::error::SwfError;

/// Little-endian cursor over a byte slice.
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], SwfError> {
        if len > self.remaining() {
            return Err(SwfError::UnexpectedEof {
                offset: self.data.len(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// All bytes left, consuming them.
    pub fn rest(&mut self) -> &'a [u8] {
        let bytes = &self.data[self.pos..];
        self.pos = self.data.len();
        bytes
    }

    pub fn skip(&mut self, len: usize) -> Result<(), SwfError> {
        self.read_bytes(len).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8, SwfError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, SwfError> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, SwfError> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Variable-length ABC integer (u30, u32 and s32 share the encoding).
    pub fn read_u30(&mut self) -> Result<u32, SwfError> {
        let mut value = 0u32;
        for i in 0..5 {
            let byte = self.read_u8()?;
            value |= u32::from(byte & 0x7f) << (7 * i);
            if byte & 0x80 == 0 {
                break;
            }
        }
        Ok(value)
    }

    /// NUL-terminated string.
    pub fn read_cstr(&mut self) -> Result<String, SwfError> {
        let rest = &self.data[self.pos..];
        let Some(end) = rest.iter().position(|&b| b == 0) else {
            return Err(SwfError::UnexpectedEof {
                offset: self.data.len(),
            });
        };
        self.pos += end + 1;
        Ok(String::from_utf8_lossy(&rest[..end]).into_owned())
    }

    /// String prefixed by a one-byte length, with trailing NULs dropped.
    pub fn read_short_str(&mut self) -> Result<String, SwfError> {
        let len = self.read_u8()? as usize;
        let bytes = self.read_bytes(len)?;
        let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        Ok(String::from_utf8_lossy(&bytes[..end]).into_owned())
    }

    /// Skip a RECT record: a 5-bit field width followed by four fields.
    pub fn skip_rect(&mut self) -> Result<(), SwfError> {
        let Some(&first) = self.data.get(self.pos) else {
            return Err(SwfError::UnexpectedEof {
                offset: self.data.len(),
            });
        };
        let bits = 5 + 4 * usize::from(first >> 3);
        self.skip(bits.div_ceil(8))
    }
}
