use clap::Parser;

#[derive(Parser)]
#[command(name = "hazcat")]
#[command(about = "A deliberately vulnerable fixture exercising a fixed hazard catalogue")]
#[command(version)]
pub struct Cli {
    /// Untrusted input fed, unmodified, into every hazard case
    #[arg(required_unless_present = "list")]
    pub(crate) input: Option<String>,

    /// List the catalogued cases instead of running them
    #[arg(long)]
    pub(crate) list: bool,

    /// Show operations and trigger conditions in the listing
    #[arg(short, long, requires = "list")]
    pub(crate) verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn input_is_required_without_list() {
        assert!(Cli::try_parse_from(["hazcat"]).is_err());
        assert!(Cli::try_parse_from(["hazcat", "--list"]).is_ok());
        assert!(Cli::try_parse_from(["hazcat", "AAAA"]).is_ok());
    }
}
