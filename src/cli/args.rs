//! CLI argument definitions using clap.
//!
//! swftrawl takes flat flags: where the sources come from, how they are
//! combined and filtered, and which outputs to produce. Every output flag
//! adds one action; several may be given in a single invocation.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, builder::BoolishValueParser};

const AFTER_HELP: &str = "\
Files can be provided with --swf, or piped in with --swfpipe:
    find . -name '*.swf' | swftrawl --swfpipe --exclude exclude.xml

Without --merge, and with more than one source, each source's items are
preceded by a line holding the source path prefixed with '#'.";

#[derive(Debug, Default, Parser)]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Arguments {
    /// SWF files to read; directories are scanned recursively
    #[arg(long, value_name = "PATH", num_args = 1..)]
    pub swf: Vec<String>,

    /// Read more SWF paths from standard input, one per line
    #[arg(long)]
    pub swfpipe: bool,

    /// Leave out every item declared in these SWFs
    #[arg(long, value_name = "PATH", num_args = 0..)]
    pub omititemsfrom: Option<Vec<String>>,

    /// Keep only items declared in these SWFs
    #[arg(long, value_name = "PATH", num_args = 0..)]
    pub onlyitemsfrom: Option<Vec<String>>,

    /// Output one list of distinct items over all SWFs
    #[arg(long)]
    pub merge: bool,

    /// Write an exclude XML file of classes (implies --merge)
    #[arg(long, value_name = "FILE")]
    pub exclude: Option<PathBuf>,

    /// Write a list of classes found
    #[arg(long, value_name = "FILE")]
    pub classlist: Option<PathBuf>,

    /// Write a list of classes to standard output
    #[arg(long)]
    pub classlistout: bool,

    /// Write a list of fonts found
    #[arg(long, value_name = "FILE")]
    pub fontlist: Option<PathBuf>,

    /// Write a list of fonts to standard output
    #[arg(long)]
    pub fontlistout: bool,

    /// Write a list of symbols found
    #[arg(long, value_name = "FILE")]
    pub symbollist: Option<PathBuf>,

    /// Write a list of symbols to standard output
    #[arg(long)]
    pub symbollistout: bool,

    /// Create a default .swftrawlrc.json in the current directory
    #[arg(long)]
    pub init: bool,

    /// Suppress status messages
    #[arg(short, long, env = "SWFTRAWL_QUIET", value_parser = BoolishValueParser::new())]
    pub quiet: bool,

    /// Print how many names each source declares
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Print the generated help text to standard output.
    pub fn print_help() {
        Self::command().print_help().ok();
        println!();
    }

    fn has_stdout_output(&self) -> bool {
        self.classlistout || self.fontlistout || self.symbollistout
    }

    fn has_file_output(&self) -> bool {
        self.exclude.is_some()
            || self.classlist.is_some()
            || self.fontlist.is_some()
            || self.symbollist.is_some()
    }

    /// Every problem with the combination of flags, in a fixed order.
    ///
    /// Empty when the invocation can run.
    pub fn usage_errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if !self.swfpipe && self.swf.is_empty() {
            errors.push("No valid input swf provided.");
        }
        if !self.has_file_output() && !self.has_stdout_output() {
            errors.push("No valid outputs were chosen.");
        }
        let empty_filter = |list: &Option<Vec<String>>| list.as_ref().is_some_and(Vec::is_empty);
        if empty_filter(&self.omititemsfrom) || empty_filter(&self.onlyitemsfrom) {
            errors.push("Please provide paths to swfs when using 'omit' and 'only' filters.");
        }
        errors
    }
}
