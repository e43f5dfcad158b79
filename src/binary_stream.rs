use std::io;
use std::io::Read;

/// Cursor for reading little-endian values out of a fixed byte block
pub struct ByteReader<'a> {
    /// the underlying bytes
    bytes: &'a [u8],
    /// index of the next unread byte
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> ByteReader<'a> {
        ByteReader { bytes, position: 0 }
    }

    /// take the next `N` bytes
    ///
    /// returns None, without advancing, if fewer than `N`
    /// bytes are left
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let end = self.position.checked_add(N)?;
        let chunk: [u8; N] = self.bytes.get(self.position..end)?.try_into().ok()?;
        self.position = end;
        Some(chunk)
    }

    pub fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[byte]| byte)
    }

    pub fn read_i16_le(&mut self) -> Option<i16> {
        self.take::<2>().map(i16::from_le_bytes)
    }

    pub fn read_u32_le(&mut self) -> Option<u32> {
        self.take::<4>().map(u32::from_le_bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        self.take::<N>()
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }
}

/// Read from `reader` until `buf` is full or the stream ends.
///
/// Unlike `read_exact`, a short stream is not an error: the
/// number of bytes actually read is returned so callers can
/// report how much was missing.
pub fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
