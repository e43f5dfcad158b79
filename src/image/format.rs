const UNKNOWN_FORMAT_NAME: &str = "unknown";

const TARGA_FORMATS: [(u8, &str); 9] = [
    (0, "No image data included."),
    (1, "Uncompressed, color-mapped images."),
    (2, "Uncompressed, RGB images."),
    (3, "Uncompressed, black and white images."),
    (9, "Runlength encoded color-mapped images."),
    (10, "Runlength encoded RGB images."),
    (11, "Compressed, black and white images."),
    (
        32,
        "Compressed color-mapped data, using Huffman, Delta, and runlength encoding.",
    ),
    (
        33,
        "Compressed color-mapped data, using Huffman, Delta, and runlength encoding.  4-pass quadtree-type process.",
    ),
];

pub fn format_name(data_type_code: u8) -> Option<&'static str> {
    TARGA_FORMATS
        .iter()
        .find(|(code, _)| *code == data_type_code)
        .map(|(_, name)| *name)
}

pub fn format_name_or_unknown(data_type_code: u8) -> &'static str {
    format_name(data_type_code).unwrap_or(UNKNOWN_FORMAT_NAME)
}

/// Whether the payload of this data type is stored compressed.
pub fn is_compressed(data_type_code: u8) -> bool {
    matches!(data_type_code, 9 | 10 | 11 | 32 | 33)
}
