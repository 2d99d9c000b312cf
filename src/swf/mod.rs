//! SWF name index reader.
//!
//! Reads just enough of a SWF file to list the names it declares:
//! ActionScript classes, exported symbols and embedded font names. Nothing
//! else in the file is interpreted.

mod abc;
mod error;
mod reader;
mod tags;
#[cfg(test)]
pub(crate) mod test_support;

use std::{borrow::Cow, fs, io::Read};

use anyhow::{Context, Result, bail};
use flate2::read::ZlibDecoder;

use crate::{
    core::{DeclarationSource, Declarations, MARKER_PREFIX},
    reporter::Reporter,
};

pub use error::SwfError;

const HEADER_LEN: usize = 8;

/// Result of indexing one SWF file.
#[derive(Debug, Default)]
pub struct Decoded {
    pub declarations: Declarations,
    /// Every problem found; names gathered before a problem are kept.
    pub errors: Vec<SwfError>,
}

/// Index the names declared by a SWF file held in memory.
pub fn decode(bytes: &[u8]) -> Decoded {
    let body = match body(bytes) {
        Ok(body) => body,
        Err(err) => {
            return Decoded {
                errors: vec![err],
                ..Default::default()
            };
        }
    };
    let scan = tags::scan(&body);
    Decoded {
        declarations: scan.declarations,
        errors: scan.errors,
    }
}

/// The tag stream following the 8-byte header, decompressed if needed.
fn body(bytes: &[u8]) -> Result<Cow<'_, [u8]>, SwfError> {
    if bytes.len() < HEADER_LEN {
        return Err(SwfError::UnexpectedEof {
            offset: bytes.len(),
        });
    }
    match &bytes[..3] {
        b"FWS" => Ok(Cow::Borrowed(&bytes[HEADER_LEN..])),
        b"CWS" => {
            let mut body = Vec::new();
            ZlibDecoder::new(&bytes[HEADER_LEN..])
                .read_to_end(&mut body)
                .map_err(SwfError::Inflate)?;
            Ok(Cow::Owned(body))
        }
        b"ZWS" => Err(SwfError::UnsupportedCompression),
        other => Err(SwfError::InvalidSignature(
            String::from_utf8_lossy(other).into_owned(),
        )),
    }
}

/// Reads SWF files from disk, announcing each read through the reporter.
pub struct SwfSource<'r> {
    reporter: &'r Reporter,
}

impl<'r> SwfSource<'r> {
    pub fn new(reporter: &'r Reporter) -> Self {
        Self { reporter }
    }
}

impl DeclarationSource for SwfSource<'_> {
    fn read(&self, source_id: &str) -> Result<Declarations> {
        self.reporter.reading(source_id);

        let bytes =
            fs::read(source_id).with_context(|| format!("Failed to read {}", source_id))?;
        let decoded = decode(&bytes);
        if !decoded.errors.is_empty() {
            let details = decoded
                .errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            bail!("Failed to parse {}:\n{}", source_id, details);
        }

        let mut declarations = decoded.declarations;
        let dropped = declarations.drop_reserved_names();
        if dropped > 0 {
            self.reporter.warning(&format!(
                "Skipped {} name(s) starting with '{}' in {}",
                dropped, MARKER_PREFIX, source_id
            ));
        }

        self.reporter.found(source_id, &declarations);
        Ok(declarations)
    }
}
