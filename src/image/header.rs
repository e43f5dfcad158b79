use std::io::Read;

use crate::binary_stream::{read_up_to, ByteReader};
use crate::color::BytesPerPixel;
use crate::error::{Error, InvalidHeaderReason};
use crate::logger::log_bytes;

pub const HEADER_SIZE: usize = 18;

const TOP_LEFT_ORIGIN_BIT: u8 = 0b0010_0000;
const ALPHA_BITS_MASK: u8 = 0b0000_1111;

/// The fixed 18 byte header every TGA file starts with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub id_length: u8,
    pub color_map_type: u8,
    pub data_type_code: u8,
    pub color_map_origin: i16,
    pub color_map_length: i16,
    pub color_map_depth: u8,
    pub x_origin: i16,
    pub y_origin: i16,
    pub width: i16,
    pub height: i16,
    pub bits_per_pixel: u8,
    pub image_descriptor: u8,
}

impl Header {
    /// Header for an uncompressed image of the given size, as
    /// emitted by the writer.
    pub fn uncompressed(width: i16, height: i16, bytes_per_pixel: BytesPerPixel) -> Self {
        let data_type_code = match bytes_per_pixel {
            BytesPerPixel::Gray => 3,
            BytesPerPixel::Rgb | BytesPerPixel::Rgba => 2,
        };
        Header {
            data_type_code,
            width,
            height,
            bits_per_pixel: bytes_per_pixel.bits(),
            ..Default::default()
        }
    }

    pub fn decode(bytes: &[u8]) -> crate::Result<Header> {
        let mut reader = ByteReader::new(bytes);
        let available = reader.remaining();
        Self::decode_fields(&mut reader).ok_or(Error::TruncatedInput {
            expected: HEADER_SIZE,
            actual: available,
        })
    }

    fn decode_fields(reader: &mut ByteReader) -> Option<Header> {
        Some(Header {
            id_length: reader.read_u8()?,
            color_map_type: reader.read_u8()?,
            data_type_code: reader.read_u8()?,
            color_map_origin: reader.read_i16_le()?,
            color_map_length: reader.read_i16_le()?,
            color_map_depth: reader.read_u8()?,
            x_origin: reader.read_i16_le()?,
            y_origin: reader.read_i16_le()?,
            width: reader.read_i16_le()?,
            height: reader.read_i16_le()?,
            bits_per_pixel: reader.read_u8()?,
            image_descriptor: reader.read_u8()?,
        })
    }

    /// Reads and decodes the next 18 bytes of `reader`.
    pub fn read_from<R: Read>(reader: &mut R) -> crate::Result<Header> {
        let mut bytes = [0; HEADER_SIZE];
        let actual = read_up_to(reader, &mut bytes)?;
        log_bytes("TGA header", &bytes[..actual]);
        Self::decode(&bytes[..actual])
    }

    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0; HEADER_SIZE];
        bytes[0] = self.id_length;
        bytes[1] = self.color_map_type;
        bytes[2] = self.data_type_code;
        bytes[3..5].copy_from_slice(&self.color_map_origin.to_le_bytes());
        bytes[5..7].copy_from_slice(&self.color_map_length.to_le_bytes());
        bytes[7] = self.color_map_depth;
        bytes[8..10].copy_from_slice(&self.x_origin.to_le_bytes());
        bytes[10..12].copy_from_slice(&self.y_origin.to_le_bytes());
        bytes[12..14].copy_from_slice(&self.width.to_le_bytes());
        bytes[14..16].copy_from_slice(&self.height.to_le_bytes());
        bytes[16] = self.bits_per_pixel;
        bytes[17] = self.image_descriptor;
        bytes
    }

    /// Checks dimensions and depth, returning the pixel depth on success.
    pub fn validate(&self) -> crate::Result<BytesPerPixel> {
        if self.width <= 0 {
            return Err(Error::InvalidHeader(InvalidHeaderReason::NonPositiveWidth(
                self.width,
            )));
        }
        if self.height <= 0 {
            return Err(Error::InvalidHeader(
                InvalidHeaderReason::NonPositiveHeight(self.height),
            ));
        }
        BytesPerPixel::from_bits(self.bits_per_pixel).ok_or(Error::InvalidHeader(
            InvalidHeaderReason::UnsupportedBitsPerPixel(self.bits_per_pixel),
        ))
    }

    /// Number of palette bytes following the image id.
    pub fn color_map_size(&self) -> usize {
        if self.color_map_type != 1 || self.color_map_length <= 0 {
            return 0;
        }
        let entry_size = (self.color_map_depth as usize).div_ceil(8);
        self.color_map_length as usize * entry_size
    }

    pub fn alpha_bits(&self) -> u8 {
        self.image_descriptor & ALPHA_BITS_MASK
    }

    pub fn is_top_left_origin(&self) -> bool {
        self.image_descriptor & TOP_LEFT_ORIGIN_BIT != 0
    }
}
