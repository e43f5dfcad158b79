use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidHeaderReason {
    NonPositiveWidth(i16),
    NonPositiveHeight(i16),
    UnsupportedBitsPerPixel(u8),
}

impl Display for InvalidHeaderReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveWidth(width) => write!(f, "width {} is not positive", width),
            Self::NonPositiveHeight(height) => write!(f, "height {} is not positive", height),
            Self::UnsupportedBitsPerPixel(bits) => {
                write!(f, "{} bits per pixel is not one of 8, 24 or 32", bits)
            }
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    TruncatedInput { expected: usize, actual: usize },
    TruncatedPayload { expected: usize, actual: usize },
    InvalidHeader(InvalidHeaderReason),
    InvalidDimensions(i32, i32),
    UnsupportedDepth(u8),
    NotATga,
    NotImplemented(&'static str),
    ImageReleased,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "I/O error: {}", error),
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::TruncatedInput { expected, actual } => {
                write!(
                    f,
                    "Input is truncated. Expected {} bytes, but only {} were available.",
                    expected, actual
                )
            }
            Self::TruncatedPayload { expected, actual } => {
                write!(
                    f,
                    "Pixel data is truncated. Expected {} bytes, but only {} were available.",
                    expected, actual
                )
            }
            Self::InvalidHeader(reason) => write!(f, "Invalid TGA header: {}", reason),
            Self::InvalidDimensions(width, height) => {
                write!(f, "Invalid image dimensions {}x{}", width, height)
            }
            Self::UnsupportedDepth(bytes_per_pixel) => {
                write!(
                    f,
                    "Unsupported depth of {} bytes per pixel. Expected 1, 3 or 4.",
                    bytes_per_pixel
                )
            }
            Self::NotATga => write!(f, "Input is too short to be a TGA file"),
            Self::NotImplemented(feature) => write!(f, "{} is not implemented", feature),
            Self::ImageReleased => write!(f, "Pixel data of the image was already released"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error)
            | Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
