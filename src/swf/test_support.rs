//! Builders for small SWF files used by unit and CLI tests.
#![allow(dead_code)]

use std::io::Write;

use flate2::{Compression, write::ZlibEncoder};

pub const NS_PACKAGE: u8 = 0x16;
pub const NS_PRIVATE: u8 = 0x05;

/// Builds an ABC block declaring one instance per class.
///
/// Every instance carries a slot trait and a method trait with metadata,
/// and the pool holds one entry of every numeric kind plus a method and a
/// metadata entry, so readers have to skip each section properly.
#[derive(Default)]
pub struct AbcBuilder {
    classes: Vec<(u8, String, String)>,
    extra_multinames: Vec<Vec<u8>>,
}

impl AbcBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(self, package: &str, name: &str) -> Self {
        self.class_in(NS_PACKAGE, package, name)
    }

    pub fn class_in(mut self, kind: u8, namespace: &str, name: &str) -> Self {
        self.classes
            .push((kind, namespace.to_string(), name.to_string()));
        self
    }

    /// Append a pre-encoded multiname entry to the pool.
    pub fn raw_multiname(mut self, bytes: &[u8]) -> Self {
        self.extra_multinames.push(bytes.to_vec());
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut strings: Vec<String> = vec!["field".into(), "run".into(), "Inject".into()];
        let mut intern = |value: &str| -> u32 {
            match strings.iter().position(|s| s == value) {
                Some(i) => i as u32 + 1,
                None => {
                    strings.push(value.to_string());
                    strings.len() as u32
                }
            }
        };

        let mut namespaces: Vec<(u8, u32)> = Vec::new();
        let mut multinames: Vec<Vec<u8>> = Vec::new();
        let mut instance_names = Vec::new();
        for (kind, namespace, name) in &self.classes {
            let ns_name = intern(namespace);
            let name_index = intern(name);
            namespaces.push((*kind, ns_name));
            let mut mn = vec![0x07];
            write_u30(&mut mn, namespaces.len() as u32);
            write_u30(&mut mn, name_index);
            multinames.push(mn);
            instance_names.push(multinames.len() as u32);
        }
        // multiname kinds that carry no class name
        multinames.push(vec![0x09, 1, 1]);
        multinames.push(vec![0x11]);
        multinames.push(vec![0x1d, 1, 1, 1]);
        multinames.extend(self.extra_multinames.iter().cloned());

        let mut out = Vec::new();
        out.extend(16u16.to_le_bytes());
        out.extend(46u16.to_le_bytes());

        // ints, uints, doubles
        out.extend([2, 0x2a, 2, 0x80, 0x01, 2]);
        out.extend(1.5f64.to_le_bytes());

        write_u30(&mut out, strings.len() as u32 + 1);
        for s in &strings {
            write_u30(&mut out, s.len() as u32);
            out.extend(s.as_bytes());
        }
        write_u30(&mut out, namespaces.len() as u32 + 1);
        for (kind, name) in &namespaces {
            out.push(*kind);
            write_u30(&mut out, *name);
        }
        // one namespace set holding the first namespace
        out.extend([2, 1, 1]);
        write_u30(&mut out, multinames.len() as u32 + 1);
        for mn in &multinames {
            out.extend(mn);
        }

        // one method: one param, optional value, param names
        out.extend([1, 1, 0, 0, 0, 0x88, 1, 0, 0x0c, 0]);
        // one metadata entry with one key/value pair
        out.extend([1, 3, 1, 1, 2]);

        write_u30(&mut out, instance_names.len() as u32);
        for name in &instance_names {
            write_u30(&mut out, *name);
            // super, flags (sealed + protected ns), protected ns, no interfaces, iinit
            out.extend([0, 0x09, 1, 0, 0]);
            // traits: slot without value, method with metadata
            out.extend([2, 1, 0x00, 0, 0, 0, 2, 0x41, 0, 0, 1, 0]);
        }
        for _ in &instance_names {
            // cinit, no traits
            out.extend([0, 0]);
        }
        // scripts, method bodies
        out.extend([0, 0]);
        out
    }
}

/// Builds an SWF file from a list of tags.
pub struct SwfBuilder {
    version: u8,
    tags: Vec<(u16, Vec<u8>)>,
}

impl Default for SwfBuilder {
    fn default() -> Self {
        Self {
            version: 10,
            tags: Vec::new(),
        }
    }
}

impl SwfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(mut self, code: u16, body: Vec<u8>) -> Self {
        self.tags.push((code, body));
        self
    }

    pub fn export_assets(self, names: &[&str]) -> Self {
        let mut body = Vec::new();
        body.extend((names.len() as u16).to_le_bytes());
        for (i, name) in names.iter().enumerate() {
            body.extend((i as u16 + 1).to_le_bytes());
            push_cstr(&mut body, name);
        }
        self.tag(56, body)
    }

    pub fn symbol_class(self, links: &[(u16, &str)]) -> Self {
        let mut body = Vec::new();
        body.extend((links.len() as u16).to_le_bytes());
        for (id, name) in links {
            body.extend(id.to_le_bytes());
            push_cstr(&mut body, name);
        }
        self.tag(76, body)
    }

    /// DefineFont3 header; glyph data is omitted.
    pub fn define_font3(self, name: &str) -> Self {
        let mut body = vec![1, 0, 0x80, 1];
        body.push(name.len() as u8 + 1);
        body.extend(name.as_bytes());
        body.push(0);
        body.extend([0, 0]);
        self.tag(75, body)
    }

    pub fn define_font4(self, name: &str) -> Self {
        let mut body = vec![2, 0, 0];
        push_cstr(&mut body, name);
        self.tag(91, body)
    }

    pub fn define_font_info(self, name: &str) -> Self {
        let mut body = vec![3, 0];
        body.push(name.len() as u8);
        body.extend(name.as_bytes());
        body.push(0);
        self.tag(13, body)
    }

    pub fn do_abc(self, abc: &[u8]) -> Self {
        let mut body = 1u32.to_le_bytes().to_vec();
        push_cstr(&mut body, "frame1");
        body.extend(abc);
        self.tag(82, body)
    }

    pub fn do_abc_v1(self, abc: &[u8]) -> Self {
        self.tag(72, abc.to_vec())
    }

    /// DoABC2 block declaring each `pkg.Name` class.
    pub fn with_classes(self, classes: &[&str]) -> Self {
        let abc = classes
            .iter()
            .fold(AbcBuilder::new(), |abc, class| match class.rsplit_once('.') {
                Some((package, name)) => abc.class(package, name),
                None => abc.class("", class),
            })
            .build();
        self.do_abc(&abc)
    }

    fn body(&self) -> Vec<u8> {
        // RECT with 15-bit fields, frame rate 24, one frame
        let mut body = vec![0x78, 0, 0x05, 0x5f, 0, 0, 0x0f, 0xa0, 0];
        body.extend([0, 24, 1, 0]);
        for (code, data) in &self.tags {
            write_tag_header(&mut body, *code, data.len());
            body.extend(data);
        }
        write_tag_header(&mut body, 0, 0);
        body
    }

    pub fn build(&self) -> Vec<u8> {
        let body = self.body();
        let mut out = b"FWS".to_vec();
        out.push(self.version);
        out.extend((body.len() as u32 + 8).to_le_bytes());
        out.extend(body);
        out
    }

    pub fn build_compressed(&self) -> Vec<u8> {
        let body = self.body();
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&body).expect("write to memory");
        let compressed = encoder.finish().expect("finish zlib stream");

        let mut out = b"CWS".to_vec();
        out.push(self.version);
        out.extend((body.len() as u32 + 8).to_le_bytes());
        out.extend(compressed);
        out
    }
}

fn write_tag_header(out: &mut Vec<u8>, code: u16, len: usize) {
    if len < 0x3f {
        out.extend(((code << 6) | len as u16).to_le_bytes());
    } else {
        out.extend(((code << 6) | 0x3f).to_le_bytes());
        out.extend((len as u32).to_le_bytes());
    }
}

fn push_cstr(out: &mut Vec<u8>, value: &str) {
    out.extend(value.as_bytes());
    out.push(0);
}

fn write_u30(out: &mut Vec<u8>, mut value: u32) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}
