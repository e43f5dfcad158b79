use std::fmt::Display;

use crate::error::Error;

/// Supported pixel depths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BytesPerPixel {
    /// 8 bit gray (or an 8 bit color map index)
    Gray = 1,
    /// 24 bit, stored as blue, green, red
    Rgb = 3,
    /// 32 bit, stored as blue, green, red, alpha
    Rgba = 4,
}

impl BytesPerPixel {
    pub fn count(self) -> usize {
        self as usize
    }

    pub fn bits(self) -> u8 {
        (self as u8) << 3
    }

    pub fn from_bits(bits_per_pixel: u8) -> Option<Self> {
        if bits_per_pixel % 8 != 0 {
            return None;
        }
        Self::try_from(bits_per_pixel >> 3).ok()
    }
}

impl TryFrom<u8> for BytesPerPixel {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Gray),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            other => Err(Error::UnsupportedDepth(other)),
        }
    }
}

impl Display for BytesPerPixel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gray => write!(f, "8 bit gray"),
            Self::Rgb => write!(f, "24 bit RGB"),
            Self::Rgba => write!(f, "32 bit RGBA"),
        }
    }
}

/// A single pixel value as it is laid out in a TGA pixel buffer.
///
/// Only the first `bytes_per_pixel` raw bytes carry meaning. For
/// 4 byte values the raw order is blue, green, red, alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    raw: [u8; 4],
    bytes_per_pixel: BytesPerPixel,
}

impl Color {
    pub fn from_channels(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Color {
            raw: [blue, green, red, alpha],
            bytes_per_pixel: BytesPerPixel::Rgba,
        }
    }

    /// Stores the little-endian bytes of `value`. Bytes beyond the
    /// depth are cleared.
    pub fn from_packed(value: u32, bytes_per_pixel: BytesPerPixel) -> Self {
        let mut raw = value.to_le_bytes();
        raw[bytes_per_pixel.count()..].fill(0);
        Color {
            raw,
            bytes_per_pixel,
        }
    }

    /// The all-zero value of the given depth.
    pub fn zero(bytes_per_pixel: BytesPerPixel) -> Self {
        Self::from_packed(0, bytes_per_pixel)
    }

    /// Copies exactly `bytes_per_pixel` bytes from `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than the depth.
    pub fn from_raw_bytes(bytes: &[u8], bytes_per_pixel: BytesPerPixel) -> Self {
        let count = bytes_per_pixel.count();
        if bytes.len() < count {
            panic!(
                "Raw color needs {} bytes, but only {} were given",
                count,
                bytes.len()
            );
        }
        let mut raw = [0; 4];
        raw[..count].copy_from_slice(&bytes[..count]);
        Color {
            raw,
            bytes_per_pixel,
        }
    }

    pub fn bytes_per_pixel(&self) -> BytesPerPixel {
        self.bytes_per_pixel
    }

    /// The meaningful raw bytes, in buffer order.
    pub fn raw(&self) -> &[u8] {
        &self.raw[..self.bytes_per_pixel.count()]
    }

    pub fn packed(&self) -> u32 {
        u32::from_le_bytes(self.raw)
    }

    pub fn blue(&self) -> u8 {
        self.raw[0]
    }

    pub fn green(&self) -> u8 {
        self.raw[1]
    }

    pub fn red(&self) -> u8 {
        self.raw[2]
    }

    pub fn alpha(&self) -> u8 {
        self.raw[3]
    }
}
