use std::io::Write;

use super::super::header::Header;
use super::super::{ImageWriter, TgaImage};
use crate::error::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TgaWriteOptions {
    /// run-length encode the pixel data; not supported yet
    pub rle: bool,
}

/// Writes an image as uncompressed TGA: the derived header followed
/// by the raw pixel bytes. No image id, color map or footer is written.
pub struct TgaImageWriter<'a, T: Write> {
    writer: T,
    image: &'a TgaImage,
    options: &'a TgaWriteOptions,
}

impl<'a, T: Write> TgaImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a TgaImage, options: &'a TgaWriteOptions) -> Self {
        Self {
            writer,
            image,
            options,
        }
    }
}

impl<T: Write> ImageWriter for TgaImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        if self.options.rle {
            return Err(Error::NotImplemented("run-length encoding"));
        }
        let pixels = self.image.pixels()?;
        let header = Header::uncompressed(
            self.image.header().width,
            self.image.header().height,
            pixels.bytes_per_pixel(),
        );
        self.writer.write_all(&header.encode())?;
        self.writer.write_all(pixels.as_bytes())?;
        self.writer.flush()?;
        log::debug!(
            "Wrote {}x{} image of {} pixel bytes",
            header.width,
            header.height,
            pixels.as_bytes().len()
        );
        Ok(())
    }
}

pub fn write_to_stream<W: Write>(image: &TgaImage, sink: W, rle: bool) -> crate::Result<()> {
    let options = TgaWriteOptions { rle };
    TgaImageWriter::new(sink, image, &options).write_image()
}

#[cfg(test)]
mod test {
    use super::write_to_stream;
    use crate::color::{BytesPerPixel, Color};
    use crate::error::Error;
    use crate::image::header::{Header, HEADER_SIZE};
    use crate::image::pixel_buffer::PixelBuffer;
    use crate::image::reader::tga::read_from_stream;
    use crate::image::TgaImage;

    fn rgba_image() -> TgaImage {
        let mut pixels = PixelBuffer::allocate(2, 1, 4).unwrap();
        pixels.set(0, 0, Color::from_channels(1, 2, 3, 4));
        pixels.set(1, 0, Color::from_channels(5, 6, 7, 8));
        TgaImage::new(pixels).unwrap()
    }

    #[test]
    fn writes_header_then_pixels() {
        let mut output = Vec::new();
        write_to_stream(&rgba_image(), &mut output, false).unwrap();
        assert_eq!(output.len(), HEADER_SIZE + 8);
        let header = Header::decode(&output).unwrap();
        assert_eq!(header, Header::uncompressed(2, 1, BytesPerPixel::Rgba));
        assert_eq!(&output[HEADER_SIZE..], &[3, 2, 1, 4, 7, 6, 5, 8]);
    }

    #[test]
    fn header_is_rederived_from_buffer() {
        let header = Header {
            id_length: 2,
            data_type_code: 1,
            x_origin: 10,
            image_descriptor: 0x20,
            ..Header::uncompressed(1, 1, BytesPerPixel::Gray)
        };
        let mut bytes = header.encode().to_vec();
        bytes.extend_from_slice(&[b'i', b'd', 0x42]);
        let image = read_from_stream(bytes.as_slice()).unwrap();

        let mut output = Vec::new();
        write_to_stream(&image, &mut output, false).unwrap();
        let mut expected = Header::uncompressed(1, 1, BytesPerPixel::Gray).encode().to_vec();
        expected.push(0x42);
        assert_eq!(output, expected);
    }

    #[test]
    fn edited_image_is_written_back() {
        let header = Header::uncompressed(2, 1, BytesPerPixel::Rgb);
        let mut bytes = header.encode().to_vec();
        bytes.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        let mut image = read_from_stream(bytes.as_slice()).unwrap();

        let pixels = image.pixels_mut().unwrap();
        pixels.as_bytes_mut()[0] = 0xAA;
        assert!(pixels.set(1, 0, Color::from_packed(0x00CCBBAA, BytesPerPixel::Rgb)));

        let mut output = Vec::new();
        write_to_stream(&image, &mut output, false).unwrap();
        assert_eq!(&output[HEADER_SIZE..], &[0xAA, 2, 3, 0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn released_image_has_no_mutable_pixels() {
        let mut image = rgba_image();
        image.release();
        assert!(matches!(image.pixels_mut(), Err(Error::ImageReleased)));
    }

    #[test]
    fn rle_is_not_implemented() {
        let mut output = Vec::new();
        let result = write_to_stream(&rgba_image(), &mut output, true);
        assert!(matches!(result, Err(Error::NotImplemented(_))));
        assert!(output.is_empty(), "nothing should be written");
    }

    #[test]
    fn released_image_cannot_be_written() {
        let mut image = rgba_image();
        image.release();
        let mut output = Vec::new();
        let result = write_to_stream(&image, &mut output, false);
        assert!(matches!(result, Err(Error::ImageReleased)));
        assert!(output.is_empty());
    }

    #[test]
    fn two_by_two_rgb_scenario() {
        #[rustfmt::skip]
        let data = vec![
            0x00, 0x00, 0xFF,  0xFF, 0x00, 0x00,
            0x00, 0xFF, 0x00,  0xFF, 0xFF, 0xFF,
        ];
        let image = TgaImage::new(PixelBuffer::from_bytes(2, 2, 3, data.clone()).unwrap()).unwrap();
        let mut output = Vec::new();
        write_to_stream(&image, &mut output, false).unwrap();

        let reread = read_from_stream(output.as_slice()).unwrap();
        assert_eq!(reread.get(0, 0).raw(), &[0x00, 0x00, 0xFF]);
        assert_eq!(reread.get(1, 1).raw(), &[0xFF, 0xFF, 0xFF]);
        assert_eq!(reread.pixels().unwrap().as_bytes(), data.as_slice());
    }

    #[test]
    fn arbitrary_buffers_survive_a_write_and_read() {
        for (width, height, depth) in [(1, 1, 1), (3, 5, 3), (7, 2, 4), (16, 16, 1)] {
            let length = (width * height * depth as i32) as usize;
            let data = (0..length)
                .map(|index| (index * 31 % 251) as u8)
                .collect::<Vec<u8>>();
            let pixels = PixelBuffer::from_bytes(width, height, depth, data).unwrap();
            let image = TgaImage::new(pixels.clone()).unwrap();
            let mut output = Vec::new();
            write_to_stream(&image, &mut output, false).unwrap();
            let reread = read_from_stream(output.as_slice()).unwrap();
            assert_eq!(reread.pixels().unwrap(), &pixels);
        }
    }
}
