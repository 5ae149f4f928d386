use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use specterms::core::models::configuration::ElectronConfiguration;
use specterms::core::models::term::TermSymbol;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const CONFIGURATION_HELP: &str = "Electron configuration, e.g. 'p2', '3d2', '1s1 2p1' or '3d5.4s1'";

#[derive(Parser, Debug)]
#[command(
    author = "Sim4SpecTerms contributors",
    version,
    about = "specterms - derive Russell-Saunders term symbols from electron configurations by microstate enumeration.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress display
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used when analysing several configurations.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Path to a configuration file in TOML format.
    /// Defaults to 'config.toml' in the user configuration directory, if present.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S analysis.max-rows=1000000
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,

    /// Output format, overriding `output.format` from the config file.
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the term symbols of one or more configurations.
    Terms(TermsArgs),
    /// Show the microstates of a configuration with their spin-orbital diagrams.
    Rows(RowsArgs),
    /// Show how many microstates share each (Ml, Ms) pair with Ml, Ms >= 0.
    Table(TableArgs),
    /// Write the microstates and terms of a configuration to CSV files.
    Export(ExportArgs),
}

/// Arguments for the `terms` subcommand.
#[derive(Args, Debug)]
pub struct TermsArgs {
    #[arg(required = true, value_name = "CONFIG", help = CONFIGURATION_HELP)]
    pub configurations: Vec<ElectronConfiguration>,
}

/// Arguments for the `rows` subcommand.
#[derive(Args, Debug)]
pub struct RowsArgs {
    #[arg(value_name = "CONFIG", help = CONFIGURATION_HELP)]
    pub configuration: ElectronConfiguration,

    /// Only show microstates inside the (Ml, Ms) block of this term, e.g. '3P'.
    /// Can be used multiple times.
    #[arg(short, long = "term", value_name = "SYMBOL")]
    pub terms: Vec<TermSymbol>,

    /// Number of matching microstates to skip.
    #[arg(long, default_value_t = 0, value_name = "INT")]
    pub start: usize,

    /// Maximum number of microstates to show. Defaults to `output.page-size`.
    #[arg(long, value_name = "INT", conflicts_with = "all")]
    pub length: Option<usize>,

    /// Show every matching microstate.
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the `table` subcommand.
#[derive(Args, Debug)]
pub struct TableArgs {
    #[arg(value_name = "CONFIG", help = CONFIGURATION_HELP)]
    pub configuration: ElectronConfiguration,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(value_name = "CONFIG", help = CONFIGURATION_HELP)]
    pub configuration: ElectronConfiguration,

    /// Output path for the microstate rows.
    #[arg(long, required = true, value_name = "PATH")]
    pub rows: PathBuf,

    /// Output path for the term list.
    #[arg(long, required = true, value_name = "PATH")]
    pub terms: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn terms_accepts_several_configurations() {
        let cli = Cli::try_parse_from(["specterms", "terms", "p2", "3d2", "1s1 2p1"]).unwrap();
        let Commands::Terms(args) = cli.command else {
            panic!("expected the terms command");
        };
        assert_eq!(args.configurations.len(), 3);
        assert_eq!(args.configurations[2], ElectronConfiguration::new(1, 1, 0, 0).unwrap());
    }

    #[test]
    fn rows_parses_term_filters_and_paging() {
        let cli = Cli::try_parse_from([
            "specterms", "rows", "p2", "--term", "3P", "-t", "1D", "--start", "2", "--length", "4",
        ])
        .unwrap();
        let Commands::Rows(args) = cli.command else {
            panic!("expected the rows command");
        };
        assert_eq!(args.terms.len(), 2);
        assert_eq!(args.terms[0].to_string(), "3P");
        assert_eq!(args.start, 2);
        assert_eq!(args.length, Some(4));
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "specterms", "table", "d2", "--format", "json", "-S", "analysis.max-rows=10", "-j", "2",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.set_values, vec!["analysis.max-rows=10".to_string()]);
        assert_eq!(cli.threads, Some(2));
    }

    #[test]
    fn invalid_configuration_is_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["specterms", "terms", "p7"]).is_err());
        assert!(Cli::try_parse_from(["specterms", "terms", "x2"]).is_err());
    }

    #[test]
    fn export_requires_both_paths() {
        assert!(Cli::try_parse_from(["specterms", "export", "p2", "--rows", "r.csv"]).is_err());
    }
}
