use crate::color::{BytesPerPixel, Color};
use crate::error::Error;

/// Row-major pixel storage of `width * height * bytes_per_pixel` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    bytes_per_pixel: BytesPerPixel,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocates a zero filled buffer.
    pub fn allocate(width: i32, height: i32, bytes_per_pixel: u8) -> crate::Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions(width, height));
        }
        let bytes_per_pixel = BytesPerPixel::try_from(bytes_per_pixel)?;
        let width = width as usize;
        let height = height as usize;
        let length = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(bytes_per_pixel.count()))
            .filter(|length| *length <= isize::MAX as usize)
            .ok_or(Error::InvalidDimensions(width as i32, height as i32))?;
        let mut data = Vec::new();
        data.try_reserve_exact(length)
            .map_err(|_| Error::InvalidDimensions(width as i32, height as i32))?;
        data.resize(length, 0);
        Ok(PixelBuffer {
            width,
            height,
            bytes_per_pixel,
            data,
        })
    }

    /// Wraps existing pixel bytes, which must be exactly
    /// `width * height * bytes_per_pixel` long.
    pub fn from_bytes(
        width: i32,
        height: i32,
        bytes_per_pixel: u8,
        data: Vec<u8>,
    ) -> crate::Result<Self> {
        let mut buffer = Self::allocate(width, height, bytes_per_pixel)?;
        if data.len() != buffer.data.len() {
            return Err(Error::TruncatedPayload {
                expected: buffer.data.len(),
                actual: data.len(),
            });
        }
        buffer.data = data;
        Ok(buffer)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bytes_per_pixel(&self) -> BytesPerPixel {
        self.bytes_per_pixel
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((x + y * self.width) * self.bytes_per_pixel.count())
    }

    /// Out of range coordinates read as the zero color.
    pub fn get(&self, x: i32, y: i32) -> Color {
        match self.offset(x, y) {
            Some(offset) => Color::from_raw_bytes(&self.data[offset..], self.bytes_per_pixel),
            None => Color::zero(self.bytes_per_pixel),
        }
    }

    /// Returns false, leaving the buffer untouched, for out of
    /// range coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the depth of `color` differs from the buffer's.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> bool {
        if color.bytes_per_pixel() != self.bytes_per_pixel {
            panic!(
                "Color of depth {:?} cannot be stored in a buffer of depth {:?}",
                color.bytes_per_pixel(),
                self.bytes_per_pixel
            );
        }
        let Some(offset) = self.offset(x, y) else {
            log::warn!(
                "Ignoring write to ({}, {}) outside of {}x{} image",
                x,
                y,
                self.width,
                self.height
            );
            return false;
        };
        let count = self.bytes_per_pixel.count();
        self.data[offset..offset + count].copy_from_slice(color.raw());
        true
    }
}
