//! Command-line layer: argument parsing, validation and action execution.

mod args;
mod exit_status;
mod plan;
mod run;

use anyhow::{Result, anyhow};

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use plan::{Action, default_merge, plan_actions, writes_to_stdout};

use crate::reporter::{Reporter, print_error};

/// Run one invocation.
///
/// Usage problems are all reported together after the help text and yield
/// `ExitStatus::Usage` without touching any file. Runtime failures are
/// returned as errors for the caller to print.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let actions = plan_actions(&args);
    let reporter =
        Reporter::new(args.quiet, args.verbose).with_stdout_data(writes_to_stdout(&actions));

    if args.init {
        run::init(&reporter)?;
        return Ok(ExitStatus::Success);
    }

    let errors = args.usage_errors();
    if !errors.is_empty() {
        Arguments::print_help();
        for message in errors {
            print_error(&anyhow!(message));
        }
        return Ok(ExitStatus::Usage);
    }

    run::run(&args, &actions, &reporter)?;
    Ok(ExitStatus::Success)
}
