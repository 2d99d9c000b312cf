use std::fmt;

use super::declarations::Declarations;

/// Which kind of declaration an output action reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Classes,
    Fonts,
    Symbols,
}

impl Category {
    /// Select the names of this category from a decoded source.
    pub fn pick(self, declarations: &Declarations) -> &[String] {
        match self {
            Category::Classes => &declarations.classes,
            Category::Fonts => &declarations.fonts,
            Category::Symbols => &declarations.symbols,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Classes => write!(f, "classes"),
            Category::Fonts => write!(f, "fonts"),
            Category::Symbols => write!(f, "symbols"),
        }
    }
}
