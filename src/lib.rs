//! swftrawl - list the names declared in SWF files
//!
//! swftrawl reads compiled SWF files and extracts the ActionScript classes,
//! exported symbols and embedded fonts they declare. The names are combined
//! across files, optionally filtered against other files, and written as
//! plain lists or as an exclude XML manifest for builds.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (flags, validation, actions)
//! - `config`: Configuration file loading and parsing
//! - `core`: Item aggregation engine and source resolution
//! - `reporter`: Status, warning and error output
//! - `sinks`: List file, exclude manifest and standard output writers
//! - `swf`: SWF name index reader
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod reporter;
pub mod sinks;
pub mod swf;
pub mod utils;
