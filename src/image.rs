use crate::color::{BytesPerPixel, Color};
use crate::error::Error;

pub mod footer;
pub mod format;
pub mod header;
pub mod pixel_buffer;
pub mod reader;
pub mod writer;

use header::Header;
use pixel_buffer::PixelBuffer;

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<TgaImage>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageState {
    /// pixel data was released
    Empty,
    Loaded,
}

/// A decoded TGA image owning its pixel buffer.
#[derive(Clone, Debug)]
pub struct TgaImage {
    header: Header,
    image_id: Vec<u8>,
    pixels: Option<PixelBuffer>,
}

impl TgaImage {
    /// Wraps a buffer with a freshly derived uncompressed header.
    ///
    /// Fails if the buffer is too large to be described by a TGA header.
    pub fn new(pixels: PixelBuffer) -> crate::Result<Self> {
        let (width, height) = match (
            i16::try_from(pixels.width()),
            i16::try_from(pixels.height()),
        ) {
            (Ok(width), Ok(height)) => (width, height),
            _ => {
                return Err(Error::InvalidDimensions(
                    pixels.width() as i32,
                    pixels.height() as i32,
                ))
            }
        };
        let header = Header::uncompressed(width, height, pixels.bytes_per_pixel());
        Ok(Self::from_parts(header, Vec::new(), pixels))
    }

    pub(crate) fn from_parts(header: Header, image_id: Vec<u8>, pixels: PixelBuffer) -> Self {
        TgaImage {
            header,
            image_id,
            pixels: Some(pixels),
        }
    }

    /// The header the image was read with.
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn image_id(&self) -> &[u8] {
        &self.image_id
    }

    pub fn data_type_code(&self) -> u8 {
        self.header.data_type_code
    }

    pub fn data_type_name(&self) -> &'static str {
        format::format_name_or_unknown(self.header.data_type_code)
    }

    pub fn state(&self) -> ImageState {
        match self.pixels {
            Some(_) => ImageState::Loaded,
            None => ImageState::Empty,
        }
    }

    pub fn pixels(&self) -> crate::Result<&PixelBuffer> {
        self.pixels.as_ref().ok_or(Error::ImageReleased)
    }

    pub fn pixels_mut(&mut self) -> crate::Result<&mut PixelBuffer> {
        self.pixels.as_mut().ok_or(Error::ImageReleased)
    }

    pub fn width(&self) -> usize {
        self.header.width as usize
    }

    pub fn height(&self) -> usize {
        self.header.height as usize
    }

    pub fn bytes_per_pixel(&self) -> Option<BytesPerPixel> {
        BytesPerPixel::from_bits(self.header.bits_per_pixel)
    }

    /// Reads a pixel. A released image reads as out of range.
    pub fn get(&self, x: i32, y: i32) -> Color {
        match (&self.pixels, self.bytes_per_pixel()) {
            (Some(pixels), _) => pixels.get(x, y),
            (None, Some(bytes_per_pixel)) => Color::zero(bytes_per_pixel),
            (None, None) => Color::zero(BytesPerPixel::Gray),
        }
    }

    /// Writes a pixel, returning false if it was not stored.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.pixels.as_mut() {
            Some(pixels) => pixels.set(x, y, color),
            None => false,
        }
    }

    /// Frees the pixel buffer. Calling it again does nothing.
    pub fn release(&mut self) {
        if let Some(pixels) = self.pixels.take() {
            log::debug!(
                "Released {} bytes of pixel data",
                pixels.as_bytes().len()
            );
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ImageState, TgaImage};
    use crate::color::{BytesPerPixel, Color};
    use crate::error::Error;
    use crate::image::pixel_buffer::PixelBuffer;

    fn gray_image() -> TgaImage {
        TgaImage::new(PixelBuffer::from_bytes(2, 1, 1, vec![7, 9]).unwrap()).unwrap()
    }

    #[test]
    fn new_image_derives_header() {
        let image = gray_image();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 1);
        assert_eq!(image.data_type_code(), 3);
        assert_eq!(image.data_type_name(), "Uncompressed, black and white images.");
        assert_eq!(image.bytes_per_pixel(), Some(BytesPerPixel::Gray));
        assert_eq!(image.state(), ImageState::Loaded);
    }

    #[test]
    fn get_and_set_delegate_to_buffer() {
        let mut image = gray_image();
        assert_eq!(image.get(1, 0).raw(), &[9]);
        assert!(image.set(0, 0, Color::from_packed(42, BytesPerPixel::Gray)));
        assert_eq!(image.pixels().unwrap().as_bytes(), &[42, 9]);
    }

    #[test]
    fn new_rejects_oversized_buffer() {
        let pixels = PixelBuffer::allocate(40_000, 1, 1).unwrap();
        assert!(matches!(
            TgaImage::new(pixels),
            Err(Error::InvalidDimensions(40_000, 1))
        ));
    }

    #[test]
    fn release_is_idempotent() {
        let mut image = gray_image();
        image.release();
        assert_eq!(image.state(), ImageState::Empty);
        image.release();
        assert_eq!(image.state(), ImageState::Empty);
        assert!(matches!(image.pixels(), Err(Error::ImageReleased)));
        assert_eq!(image.get(0, 0), Color::zero(BytesPerPixel::Gray));
        assert!(!image.set(0, 0, Color::zero(BytesPerPixel::Gray)));
    }
}
