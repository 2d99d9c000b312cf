use std::path::PathBuf;

use anyhow::{Context, Result};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, Event},
};

use super::Sink;
use crate::{reporter::Reporter, utils::write_atomic};

const ROOT_ELEMENT: &str = "excludeAssets";
const ASSET_ELEMENT: &str = "asset";
const NAME_ATTRIBUTE: &str = "name";

/// XML manifest listing assets to leave out of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeManifest {
    pub path: PathBuf,
}

impl ExcludeManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Sink for ExcludeManifest {
    fn emit(&self, items: &[String], reporter: &Reporter) -> Result<()> {
        let xml = render_manifest(items)?;
        write_atomic(&self.path, xml.as_bytes())
            .with_context(|| format!("Failed to write exclude XML: {}", self.path.display()))?;
        reporter.wrote("exclude XML", &self.path);
        Ok(())
    }

    fn requires_merge(&self) -> bool {
        true
    }
}

/// Render names as an indented `<excludeAssets>` document.
pub fn render_manifest(names: &[String]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
    for name in names {
        let mut asset = BytesStart::new(ASSET_ELEMENT);
        asset.push_attribute((NAME_ATTRIBUTE, name.as_str()));
        writer.write_event(Event::Empty(asset))?;
    }
    writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

    let mut xml = String::from_utf8(writer.into_inner()).context("Manifest is not UTF-8")?;
    xml.push('\n');
    Ok(xml)
}
