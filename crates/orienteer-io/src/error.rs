use std::path::PathBuf;

/// Failures while reading or writing input and output files.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot write image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A field that does not parse as the expected number type.
    #[error("line {line}, field {field}: {value:?} is not a valid {expected}")]
    Number {
        line: usize,
        field: usize,
        value: String,
        expected: &'static str,
    },

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("image of {width}x{height} pixels is too large")]
    TooLarge { width: u32, height: u32 },

    #[error(transparent)]
    Core(#[from] orienteer_core::Error),
}
