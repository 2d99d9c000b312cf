//! Declarations found in a source file and the contract for reading them.

use anyhow::Result;

use super::engine::is_reserved_name;

/// Names declared by one source file, grouped by category.
///
/// Lists are in discovery order and may contain duplicates; consumers
/// must not assume they are sorted or unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    pub classes: Vec<String>,
    pub fonts: Vec<String>,
    pub symbols: Vec<String>,
}

impl Declarations {
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.fonts.is_empty() && self.symbols.is_empty()
    }

    /// Remove names that would read as source markers in an item list.
    ///
    /// Returns how many were removed.
    pub fn drop_reserved_names(&mut self) -> usize {
        let mut dropped = 0;
        for list in [&mut self.classes, &mut self.fonts, &mut self.symbols] {
            let before = list.len();
            list.retain(|name| !is_reserved_name(name));
            dropped += before - list.len();
        }
        dropped
    }
}

/// Anything that can turn a source id into its declarations.
///
/// Implementations must fail the whole read when the source produced any
/// decode error, carrying every error message for that source.
pub trait DeclarationSource {
    fn read(&self, source_id: &str) -> Result<Declarations>;
}

impl<T: DeclarationSource + ?Sized> DeclarationSource for &T {
    fn read(&self, source_id: &str) -> Result<Declarations> {
        (**self).read(source_id)
    }
}
