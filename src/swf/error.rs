use thiserror::Error;

/// A problem found while indexing a SWF file.
#[derive(Debug, Error)]
pub enum SwfError {
    #[error("not a SWF file (signature {0:?})")]
    InvalidSignature(String),

    #[error("LZMA compressed SWF files are not supported")]
    UnsupportedCompression,

    #[error("failed to decompress SWF body: {0}")]
    Inflate(#[source] std::io::Error),

    #[error("unexpected end of data at offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("tag {code} at offset {offset} declares {length} bytes but only {available} remain")]
    TagOverrun {
        code: u16,
        offset: usize,
        length: usize,
        available: usize,
    },

    #[error("malformed tag {code} at offset {offset}: {reason}")]
    MalformedTag {
        code: u16,
        offset: usize,
        reason: Box<SwfError>,
    },

    #[error("unknown multiname kind 0x{0:02x}")]
    UnknownMultinameKind(u8),

    #[error("unknown trait kind 0x{0:02x}")]
    UnknownTraitKind(u8),
}
