//! Class names from ActionScript 3 bytecode blocks.
//!
//! Only the constant pool and the instance table are interpreted. Method
//! signatures, metadata and traits are skipped over to reach the next
//! instance; method bodies are never touched.

use super::{error::SwfError, reader::ByteReader};

const NS_PACKAGE: u8 = 0x16;
const NS_PACKAGE_INTERNAL: u8 = 0x17;

const METHOD_HAS_OPTIONAL: u8 = 0x08;
const METHOD_HAS_PARAM_NAMES: u8 = 0x80;

const INSTANCE_PROTECTED_NS: u8 = 0x08;

const TRAIT_ATTR_METADATA: u8 = 0x04;

#[derive(Debug, Clone, Copy)]
enum Multiname {
    QName { namespace: u32, name: u32 },
    Other,
}

#[derive(Debug, Clone, Copy)]
struct Namespace {
    kind: u8,
    name: u32,
}

#[derive(Debug, Default)]
struct ConstantPool {
    strings: Vec<String>,
    namespaces: Vec<Namespace>,
    multinames: Vec<Multiname>,
}

/// Qualified names (`pkg.Name`) of the package-level classes defined in an
/// ABC block, in definition order.
pub fn class_names(abc: &[u8]) -> Result<Vec<String>, SwfError> {
    let mut r = ByteReader::new(abc);
    // minor_version, major_version
    r.skip(4)?;

    let pool = ConstantPool::read(&mut r)?;
    skip_methods(&mut r)?;
    skip_metadata(&mut r)?;

    let class_count = r.read_u30()?;
    let mut names = Vec::new();
    for _ in 0..class_count {
        let name = r.read_u30()?;
        let _super_name = r.read_u30()?;
        let flags = r.read_u8()?;
        if flags & INSTANCE_PROTECTED_NS != 0 {
            r.read_u30()?;
        }
        let interface_count = r.read_u30()?;
        for _ in 0..interface_count {
            r.read_u30()?;
        }
        let _iinit = r.read_u30()?;
        skip_traits(&mut r)?;

        if let Some(qualified) = pool.qualified_name(name) {
            names.push(qualified);
        }
    }
    Ok(names)
}

impl ConstantPool {
    fn read(r: &mut ByteReader<'_>) -> Result<Self, SwfError> {
        let mut pool = ConstantPool::default();

        // ints, uints
        for _ in 0..2 {
            for _ in 1..r.read_u30()? {
                r.read_u30()?;
            }
        }
        // doubles
        for _ in 1..r.read_u30()? {
            r.skip(8)?;
        }
        for _ in 1..r.read_u30()? {
            let len = r.read_u30()? as usize;
            let bytes = r.read_bytes(len)?;
            pool.strings.push(String::from_utf8_lossy(bytes).into_owned());
        }
        for _ in 1..r.read_u30()? {
            let kind = r.read_u8()?;
            let name = r.read_u30()?;
            pool.namespaces.push(Namespace { kind, name });
        }
        // namespace sets
        for _ in 1..r.read_u30()? {
            for _ in 0..r.read_u30()? {
                r.read_u30()?;
            }
        }
        for _ in 1..r.read_u30()? {
            pool.multinames.push(read_multiname(r)?);
        }
        Ok(pool)
    }

    fn string(&self, index: u32) -> Option<&str> {
        let i = (index as usize).checked_sub(1)?;
        self.strings.get(i).map(String::as_str)
    }

    fn qualified_name(&self, index: u32) -> Option<String> {
        let i = (index as usize).checked_sub(1)?;
        let Multiname::QName { namespace, name } = *self.multinames.get(i)? else {
            return None;
        };
        let name = self.string(name)?;
        let ns = self.namespaces.get((namespace as usize).checked_sub(1)?)?;
        if !matches!(ns.kind, NS_PACKAGE | NS_PACKAGE_INTERNAL) {
            return None;
        }
        match self.string(ns.name) {
            Some(package) if !package.is_empty() => Some(format!("{}.{}", package, name)),
            _ => Some(name.to_string()),
        }
    }
}

fn read_multiname(r: &mut ByteReader<'_>) -> Result<Multiname, SwfError> {
    let kind = r.read_u8()?;
    let multiname = match kind {
        // QName, QNameA
        0x07 | 0x0d => Multiname::QName {
            namespace: r.read_u30()?,
            name: r.read_u30()?,
        },
        // RTQName, RTQNameA
        0x0f | 0x10 => {
            r.read_u30()?;
            Multiname::Other
        }
        // RTQNameL, RTQNameLA
        0x11 | 0x12 => Multiname::Other,
        // Multiname, MultinameA
        0x09 | 0x0e => {
            r.read_u30()?;
            r.read_u30()?;
            Multiname::Other
        }
        // MultinameL, MultinameLA
        0x1b | 0x1c => {
            r.read_u30()?;
            Multiname::Other
        }
        // TypeName
        0x1d => {
            r.read_u30()?;
            for _ in 0..r.read_u30()? {
                r.read_u30()?;
            }
            Multiname::Other
        }
        other => return Err(SwfError::UnknownMultinameKind(other)),
    };
    Ok(multiname)
}

fn skip_methods(r: &mut ByteReader<'_>) -> Result<(), SwfError> {
    for _ in 0..r.read_u30()? {
        let param_count = r.read_u30()?;
        let _return_type = r.read_u30()?;
        for _ in 0..param_count {
            r.read_u30()?;
        }
        let _name = r.read_u30()?;
        let flags = r.read_u8()?;
        if flags & METHOD_HAS_OPTIONAL != 0 {
            for _ in 0..r.read_u30()? {
                r.read_u30()?;
                r.read_u8()?;
            }
        }
        if flags & METHOD_HAS_PARAM_NAMES != 0 {
            for _ in 0..param_count {
                r.read_u30()?;
            }
        }
    }
    Ok(())
}

fn skip_metadata(r: &mut ByteReader<'_>) -> Result<(), SwfError> {
    for _ in 0..r.read_u30()? {
        let _name = r.read_u30()?;
        // keys then values
        for _ in 0..r.read_u30()? {
            r.read_u30()?;
            r.read_u30()?;
        }
    }
    Ok(())
}

fn skip_traits(r: &mut ByteReader<'_>) -> Result<(), SwfError> {
    for _ in 0..r.read_u30()? {
        let _name = r.read_u30()?;
        let kind = r.read_u8()?;
        match kind & 0x0f {
            // Slot, Const
            0 | 6 => {
                r.read_u30()?;
                r.read_u30()?;
                if r.read_u30()? != 0 {
                    r.read_u8()?;
                }
            }
            // Method, Getter, Setter, Class, Function
            1..=5 => {
                r.read_u30()?;
                r.read_u30()?;
            }
            _ => return Err(SwfError::UnknownTraitKind(kind)),
        }
        if (kind >> 4) & TRAIT_ATTR_METADATA != 0 {
            for _ in 0..r.read_u30()? {
                r.read_u30()?;
            }
        }
    }
    Ok(())
}
