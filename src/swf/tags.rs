//! Walks the tag stream of an uncompressed SWF body.

use super::{abc, error::SwfError, reader::ByteReader};
use crate::core::Declarations;

pub const END: u16 = 0;
pub const DEFINE_FONT_INFO: u16 = 13;
pub const DEFINE_FONT2: u16 = 48;
pub const EXPORT_ASSETS: u16 = 56;
pub const DEFINE_FONT_INFO2: u16 = 62;
pub const DO_ABC: u16 = 72;
pub const DEFINE_FONT3: u16 = 75;
pub const SYMBOL_CLASS: u16 = 76;
pub const DO_ABC2: u16 = 82;
pub const DEFINE_FONT4: u16 = 91;

/// Exported names with this prefix are ActionScript 2 classes.
const AS2_CLASS_PREFIX: &str = "__Packages.";

/// Names collected from a tag stream plus every problem met on the way.
#[derive(Debug, Default)]
pub struct TagScan {
    pub declarations: Declarations,
    pub errors: Vec<SwfError>,
}

/// Scan the tags following the SWF header.
///
/// Problems inside a tag are recorded and scanning moves on to the next tag.
/// A tag that runs past the end of the data stops the scan.
pub fn scan(body: &[u8]) -> TagScan {
    let mut result = TagScan::default();
    let mut r = ByteReader::new(body);

    if let Err(err) = r.skip_rect().and_then(|_| r.skip(4)) {
        result.errors.push(err);
        return result;
    }

    while !r.is_empty() {
        let offset = r.position();
        let (code, data) = match read_tag(&mut r, offset) {
            Ok(tag) => tag,
            Err(err) => {
                result.errors.push(err);
                break;
            }
        };
        if code == END {
            break;
        }
        if let Err(err) = visit(code, data, &mut result.declarations) {
            result.errors.push(SwfError::MalformedTag {
                code,
                offset,
                reason: Box::new(err),
            });
        }
    }
    result
}

fn read_tag<'a>(r: &mut ByteReader<'a>, offset: usize) -> Result<(u16, &'a [u8]), SwfError> {
    let header = r.read_u16()?;
    let code = header >> 6;
    let mut length = usize::from(header & 0x3f);
    if length == 0x3f {
        length = r.read_u32()? as usize;
    }
    if length > r.remaining() {
        return Err(SwfError::TagOverrun {
            code,
            offset,
            length,
            available: r.remaining(),
        });
    }
    Ok((code, r.read_bytes(length)?))
}

fn visit(code: u16, data: &[u8], declarations: &mut Declarations) -> Result<(), SwfError> {
    let mut r = ByteReader::new(data);
    match code {
        EXPORT_ASSETS => {
            for _ in 0..r.read_u16()? {
                let _id = r.read_u16()?;
                let name = r.read_cstr()?;
                match name.strip_prefix(AS2_CLASS_PREFIX) {
                    Some(class) => push_name(&mut declarations.classes, class.to_string()),
                    None => push_name(&mut declarations.symbols, name),
                }
            }
        }
        SYMBOL_CLASS => {
            for _ in 0..r.read_u16()? {
                let id = r.read_u16()?;
                let name = r.read_cstr()?;
                // id 0 links the document class
                if id != 0 {
                    push_name(&mut declarations.symbols, name);
                }
            }
        }
        DEFINE_FONT2 | DEFINE_FONT3 => {
            // font id, flags, language code
            r.skip(4)?;
            push_name(&mut declarations.fonts, r.read_short_str()?);
        }
        DEFINE_FONT_INFO | DEFINE_FONT_INFO2 => {
            r.skip(2)?;
            push_name(&mut declarations.fonts, r.read_short_str()?);
        }
        DEFINE_FONT4 => {
            r.skip(3)?;
            push_name(&mut declarations.fonts, r.read_cstr()?);
        }
        DO_ABC => {
            declarations.classes.extend(abc::class_names(data)?);
        }
        DO_ABC2 => {
            let _flags = r.read_u32()?;
            let _name = r.read_cstr()?;
            declarations.classes.extend(abc::class_names(r.rest())?);
        }
        _ => {}
    }
    Ok(())
}

fn push_name(list: &mut Vec<String>, name: String) {
    if !name.is_empty() {
        list.push(name);
    }
}
