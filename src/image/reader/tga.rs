use std::io::{self, Read};

use super::super::format::{format_name, is_compressed};
use super::super::header::Header;
use super::super::pixel_buffer::PixelBuffer;
use super::super::{ImageReader, TgaImage};
use crate::binary_stream::read_up_to;
use crate::error::Error;

pub struct TgaImageReader<T: Read> {
    reader: T,
}

impl<T: Read> TgaImageReader<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }

    fn read_image_id(&mut self, header: &Header) -> crate::Result<Vec<u8>> {
        let mut image_id = vec![0; header.id_length as usize];
        let actual = read_up_to(&mut self.reader, &mut image_id)?;
        if actual != image_id.len() {
            return Err(Error::TruncatedInput {
                expected: image_id.len(),
                actual,
            });
        }
        Ok(image_id)
    }

    fn skip_color_map(&mut self, header: &Header) -> crate::Result<()> {
        let expected = header.color_map_size();
        if expected == 0 {
            return Ok(());
        }
        log::debug!("Skipping {} bytes of color map", expected);
        let mut color_map = (&mut self.reader).take(expected as u64);
        let actual = io::copy(&mut color_map, &mut io::sink())? as usize;
        if actual != expected {
            return Err(Error::TruncatedInput { expected, actual });
        }
        Ok(())
    }

    fn read_pixel_data(&mut self, pixels: &mut PixelBuffer) -> crate::Result<()> {
        let data = pixels.as_bytes_mut();
        let expected = data.len();
        let actual = read_up_to(&mut self.reader, data)?;
        if actual != expected {
            return Err(Error::TruncatedPayload { expected, actual });
        }
        Ok(())
    }

    fn check_payload_is_uncompressed(header: &Header) -> crate::Result<()> {
        if is_compressed(header.data_type_code) {
            return Err(Error::NotImplemented("decoding of compressed pixel data"));
        }
        Ok(())
    }

    fn log_data_type(data_type_code: u8) {
        match format_name(data_type_code) {
            Some(name) => log::info!("TGA format {} used: {}", data_type_code, name),
            None => log::warn!("TGA format number {} not found", data_type_code),
        }
    }
}

impl<T: Read> ImageReader for TgaImageReader<T> {
    fn read_image(&mut self) -> crate::Result<TgaImage> {
        let header = Header::read_from(&mut self.reader)?;
        let bytes_per_pixel = header.validate()?;
        Self::check_payload_is_uncompressed(&header)?;
        let image_id = self.read_image_id(&header)?;
        self.skip_color_map(&header)?;
        let mut pixels = PixelBuffer::allocate(
            header.width as i32,
            header.height as i32,
            bytes_per_pixel as u8,
        )?;
        self.read_pixel_data(&mut pixels)?;
        Self::log_data_type(header.data_type_code);
        Ok(TgaImage::from_parts(header, image_id, pixels))
    }
}

/// Decodes one image from the current position of `source`.
pub fn read_from_stream<R: Read>(source: R) -> crate::Result<TgaImage> {
    TgaImageReader::new(source).read_image()
}
