use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};

use super::Sink;
use crate::{reporter::Reporter, utils::write_atomic};

/// Plain text file, one item per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFile {
    pub path: PathBuf,
}

impl ListFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Sink for ListFile {
    fn emit(&self, items: &[String], reporter: &Reporter) -> Result<()> {
        let mut contents = Vec::new();
        write_list_to(items, &mut contents)?;
        write_atomic(&self.path, &contents)
            .with_context(|| format!("Failed to write list: {}", self.path.display()))?;
        reporter.wrote("list", &self.path);
        Ok(())
    }
}

/// Items streamed to standard output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StdoutList;

impl Sink for StdoutList {
    fn emit(&self, items: &[String], _reporter: &Reporter) -> Result<()> {
        let mut stdout = io::stdout().lock();
        write_list_to(items, &mut stdout)?;
        stdout.flush().context("Failed to write to standard output")
    }

    fn is_stdout(&self) -> bool {
        true
    }
}

/// Write each item followed by a newline.
pub fn write_list_to<W: Write>(items: &[String], writer: &mut W) -> io::Result<()> {
    for item in items {
        writeln!(writer, "{}", item)?;
    }
    Ok(())
}
