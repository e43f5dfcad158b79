use std::fmt::Display;
use std::io::{Read, Seek, SeekFrom};

use crate::binary_stream::{read_up_to, ByteReader};
use crate::error::Error;
use crate::logger::log_bytes;

pub const FOOTER_SIZE: usize = 26;
pub const SIGNATURE: &[u8; 16] = b"TRUEVISION-XFILE";

/// The trailer identifying a version 2 TGA file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footer {
    pub extension_area_offset: u32,
    pub developer_directory_offset: u32,
}

impl Footer {
    pub fn new(extension_area_offset: u32, developer_directory_offset: u32) -> Self {
        Self {
            extension_area_offset,
            developer_directory_offset,
        }
    }

    /// Returns None if the signature does not match byte for byte.
    pub fn decode(bytes: &[u8; FOOTER_SIZE]) -> Option<Footer> {
        let mut reader = ByteReader::new(bytes);
        let extension_area_offset = reader.read_u32_le()?;
        let developer_directory_offset = reader.read_u32_le()?;
        let signature = reader.read_array::<16>()?;
        if &signature != SIGNATURE {
            return None;
        }
        Some(Footer {
            extension_area_offset,
            developer_directory_offset,
        })
    }

    pub fn encode(&self) -> [u8; FOOTER_SIZE] {
        let mut bytes = [0; FOOTER_SIZE];
        bytes[0..4].copy_from_slice(&self.extension_area_offset.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.developer_directory_offset.to_le_bytes());
        bytes[8..24].copy_from_slice(SIGNATURE);
        bytes[24] = b'.';
        bytes[25] = 0;
        bytes
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TgaVersion {
    /// no footer, original format
    Legacy,
    /// footer with signature present
    Modern(Footer),
}

impl Display for TgaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "Original TGA format (version 1)"),
            Self::Modern(footer) => write!(
                f,
                "New TGA format (version 2), extension area offset {}, developer directory offset {}",
                footer.extension_area_offset, footer.developer_directory_offset
            ),
        }
    }
}

/// Classifies `source` by its trailing 26 bytes.
///
/// A source shorter than a footer is `NotATga`; seek and read
/// failures are reported as `Io`. The stream position is left
/// at the end of the source.
pub fn classify<R: Read + Seek>(source: &mut R) -> crate::Result<TgaVersion> {
    let length = source.seek(SeekFrom::End(0))?;
    if length < FOOTER_SIZE as u64 {
        log::debug!("Source of {} bytes cannot hold a footer", length);
        return Err(Error::NotATga);
    }
    source.seek(SeekFrom::Start(length - FOOTER_SIZE as u64))?;
    let mut bytes = [0; FOOTER_SIZE];
    let actual = read_up_to(source, &mut bytes)?;
    if actual != FOOTER_SIZE {
        return Err(Error::NotATga);
    }
    log_bytes("TGA footer", &bytes);
    Ok(match Footer::decode(&bytes) {
        Some(footer) => TgaVersion::Modern(footer),
        None => TgaVersion::Legacy,
    })
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::{classify, Footer, TgaVersion, FOOTER_SIZE};
    use crate::error::Error;

    fn file_with_footer(footer: &[u8; FOOTER_SIZE]) -> Vec<u8> {
        let mut bytes = vec![0x55; 40];
        bytes.extend_from_slice(footer);
        bytes
    }

    #[test]
    fn encoded_footer_layout() {
        let bytes = Footer::new(0x01020304, 7).encode();
        assert_eq!(&bytes[0..4], &[4, 3, 2, 1]);
        assert_eq!(&bytes[4..8], &[7, 0, 0, 0]);
        assert_eq!(&bytes[8..24], b"TRUEVISION-XFILE");
        assert_eq!(bytes[24], b'.');
        assert_eq!(bytes[25], 0);
    }

    #[test]
    fn classify_modern() {
        let footer = Footer::new(1234, 5678);
        let mut source = Cursor::new(file_with_footer(&footer.encode()));
        let version = classify(&mut source).unwrap();
        assert_eq!(version, TgaVersion::Modern(footer));
    }

    #[test]
    fn classify_exactly_footer_sized_source() {
        let footer = Footer::new(0, 0);
        let mut source = Cursor::new(footer.encode().to_vec());
        assert_eq!(classify(&mut source).unwrap(), TgaVersion::Modern(footer));
    }

    #[test]
    fn any_signature_mutation_is_legacy() {
        let encoded = Footer::new(10, 20).encode();
        for index in 8..24 {
            let mut mutated = encoded;
            mutated[index] ^= 0x20;
            let mut source = Cursor::new(file_with_footer(&mutated));
            assert_eq!(
                classify(&mut source).unwrap(),
                TgaVersion::Legacy,
                "mutation at byte {} not detected",
                index
            );
        }
    }

    #[test]
    fn lower_case_signature_is_legacy() {
        let mut bytes = Footer::new(0, 0).encode();
        bytes[8..24].copy_from_slice(b"truevision-xfile");
        let mut source = Cursor::new(file_with_footer(&bytes));
        assert_eq!(classify(&mut source).unwrap(), TgaVersion::Legacy);
    }

    #[test]
    fn no_footer_is_legacy() {
        let mut source = Cursor::new(vec![0_u8; 100]);
        assert_eq!(classify(&mut source).unwrap(), TgaVersion::Legacy);
    }

    #[test]
    fn short_source_is_not_a_tga() {
        for length in [0, 1, 25] {
            let mut source = Cursor::new(vec![0_u8; length]);
            if let Err(Error::NotATga) = classify(&mut source) {
                continue;
            }
            panic!("Source of {} bytes was not rejected", length);
        }
    }
}
