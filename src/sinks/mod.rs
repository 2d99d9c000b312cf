//! Destinations for computed item lists.
//!
//! - `ListFile`: one item per line in a file
//! - `ExcludeManifest`: `<excludeAssets>` XML document
//! - `StdoutList`: one item per line on standard output

mod list;
mod manifest;

use anyhow::Result;
use enum_dispatch::enum_dispatch;

use crate::reporter::Reporter;

pub use list::{ListFile, StdoutList, write_list_to};
pub use manifest::{ExcludeManifest, render_manifest};

/// Consumes one computed item list.
#[enum_dispatch]
pub trait Sink {
    /// Write the items, replacing any previous content of the destination.
    fn emit(&self, items: &[String], reporter: &Reporter) -> Result<()>;

    /// Whether this destination only makes sense for the merged shape.
    fn requires_merge(&self) -> bool {
        false
    }

    /// Whether this destination writes to standard output.
    fn is_stdout(&self) -> bool {
        false
    }
}

/// Every supported destination.
#[enum_dispatch(Sink)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    ListFile(ListFile),
    ExcludeManifest(ExcludeManifest),
    StdoutList(StdoutList),
}
