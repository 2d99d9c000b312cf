use std::process::ExitCode;

use clap::Parser;
use swftrawl::{
    cli::{Arguments, ExitStatus},
    reporter::print_error,
};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match swftrawl::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            print_error(&err);
            ExitStatus::Error.into()
        }
    }
}
