use std::{
    fmt::Display,
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter, Seek, SeekFrom},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use color::{BytesPerPixel, Color};
pub use error::{Error, InvalidHeaderReason};
pub use image::{
    footer::{classify, Footer, TgaVersion},
    format::{format_name, format_name_or_unknown},
    header::Header,
    pixel_buffer::PixelBuffer,
    reader::tga::{read_from_stream, TgaImageReader},
    writer::tga::{write_to_stream, TgaImageWriter, TgaWriteOptions},
    ImageReader, ImageState, ImageWriter, TgaImage,
};

pub mod binary_stream;
mod cli;
mod color;
mod error;
mod image;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: Option<PathBuf>,
    rle: bool,
}

impl Arguments {
    pub fn input_file(&self) -> &Path {
        &self.input_file
    }
}

/// What was learned about a TGA file.
pub struct Inspection {
    pub version: TgaVersion,
    pub width: usize,
    pub height: usize,
    pub bytes_per_pixel: BytesPerPixel,
    pub data_type_code: u8,
    pub data_type_name: &'static str,
    pub written_to: Option<PathBuf>,
}

impl Display for Inspection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.version)?;
        writeln!(
            f,
            "TGA format {} used: {}",
            self.data_type_code, self.data_type_name
        )?;
        write!(
            f,
            "{}x{} pixels, {}",
            self.width, self.height, self.bytes_per_pixel
        )?;
        if let Some(path) = &self.written_to {
            write!(f, "\nWritten as uncompressed TGA to '{}'", path.display())?;
        }
        Ok(())
    }
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e)
        })
}

pub fn read_tga_file(file_path: &Path) -> Result<(TgaVersion, TgaImage)> {
    let mut input_file = open_input_file(file_path)?;
    let version = classify(&mut input_file)?;
    input_file.seek(SeekFrom::Start(0))?;
    let image = read_from_stream(BufReader::new(&input_file))?;
    Ok((version, image))
}

pub fn write_tga_file(file_path: &Path, image: &TgaImage, options: &TgaWriteOptions) -> Result<()> {
    if options.rle {
        return Err(Error::NotImplemented("run-length encoding"));
    }
    let output_file = open_output_file(file_path)?;
    let mut writer = TgaImageWriter::new(BufWriter::new(&output_file), image, options);
    writer.write_image()
}

pub fn inspect_tga_file(arguments: &Arguments) -> Result<Inspection> {
    let (version, mut image) = read_tga_file(&arguments.input_file)?;
    let pixels = image.pixels()?;
    let mut inspection = Inspection {
        version,
        width: pixels.width(),
        height: pixels.height(),
        bytes_per_pixel: pixels.bytes_per_pixel(),
        data_type_code: image.data_type_code(),
        data_type_name: image.data_type_name(),
        written_to: None,
    };
    if let Some(output_file) = &arguments.output_file {
        let options = TgaWriteOptions { rle: arguments.rle };
        write_tga_file(output_file, &image, &options)?;
        inspection.written_to = Some(output_file.clone());
    }
    image.release();
    Ok(inspection)
}
