//! Error types for DF3 encoding and decoding

use std::path::PathBuf;

use thiserror::Error;

/// Every failure the codec can report.
/// Nothing is retried, errors go straight back to the caller.
#[derive(Error, Debug)]
pub enum Df3Error {
    #[error("no input layers: {0}")]
    NoInput(String),

    #[error("layer {index} is {found_width}x{found_height}, expected {width}x{height}")]
    DimensionMismatch {
        index: usize,
        width: u32,
        height: u32,
        found_width: u32,
        found_height: u32,
    },

    #[error("{field} {value} out of range <1;65535>")]
    DimensionOutOfRange { field: &'static str, value: u64 },

    #[error("cannot decode image {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot encode image {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("header needs 6 bytes, got {0}")]
    TruncatedHeader(usize),

    #[error("volume {width}x{height}x{depth} has no voxels")]
    EmptyVolume { width: u16, height: u16, depth: u16 },

    #[error(
        "payload of {actual} bytes is not a multiple of {voxels} voxels (expected {lower} or {upper} bytes)"
    )]
    MalformedPayload {
        voxels: usize,
        actual: usize,
        lower: usize,
        upper: usize,
    },

    #[error("unsupported voxel resolution of {0} bytes")]
    UnsupportedByteWidth(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Df3Error {
    /// Stable name of the error kind, for reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            Df3Error::NoInput(_) => "NoInput",
            Df3Error::DimensionMismatch { .. } => "DimensionMismatch",
            Df3Error::DimensionOutOfRange { .. } => "DimensionOutOfRange",
            Df3Error::Decode { .. } => "Decode",
            Df3Error::Encode { .. } => "Encode",
            Df3Error::TruncatedHeader(_) => "TruncatedHeader",
            Df3Error::EmptyVolume { .. } => "EmptyVolume",
            Df3Error::MalformedPayload { .. } => "MalformedPayload",
            Df3Error::UnsupportedByteWidth(_) => "UnsupportedByteWidth",
            Df3Error::Io(_) => "Io",
        }
    }
}

impl From<tempfile::PersistError> for Df3Error {
    fn from(err: tempfile::PersistError) -> Self {
        Df3Error::Io(err.error)
    }
}

pub type Result<T> = std::result::Result<T, Df3Error>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(Df3Error::NoInput("x".into()).kind(), "NoInput");
        assert_eq!(Df3Error::TruncatedHeader(3).kind(), "TruncatedHeader");
        assert_eq!(Df3Error::UnsupportedByteWidth(5).kind(), "UnsupportedByteWidth");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(Df3Error::from(io).kind(), "Io");
    }

    #[test]
    fn malformed_message_lists_lengths() {
        let err = Df3Error::MalformedPayload {
            voxels: 12,
            actual: 13,
            lower: 12,
            upper: 24,
        };
        let msg = err.to_string();
        assert!(msg.contains("13 bytes"));
        assert!(msg.contains("12 or 24"));
    }
}
