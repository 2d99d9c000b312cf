//! Item aggregation core.
//!
//! - `category`: which declaration list an action reports
//! - `declarations`: what a source yields and the trait that reads it
//! - `engine`: merge, marker and omit/only filtering rules
//! - `source_scanner`: turns command-line entries into source ids

pub mod category;
pub mod declarations;
pub mod engine;
pub mod source_scanner;

pub use category::Category;
pub use declarations::{DeclarationSource, Declarations};
pub use engine::{ItemQuery, MARKER_PREFIX, compute_item_list};
