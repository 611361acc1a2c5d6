pub mod list;
pub mod run;

use crate::cli::Cli;
use crate::errors::HazResult;

pub fn handle_command(cli: Cli) -> HazResult<()> {
    if cli.list {
        return list::handle(cli.verbose);
    }

    // clap already enforces the positional argument when --list is absent;
    // this is the documented fail-fast for the missing-argument case.
    let input = cli.input.ok_or("an untrusted input argument is required")?;
    run::handle(&input)
}
