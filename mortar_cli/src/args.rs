use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mortar")]
#[command(version)]
#[command(about = "Convert stored Mortar grid values into resolved documents")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Runtime preferences (TOML); defaults come from MORTAR_* variables
    #[arg(long, global = true, value_name = "TOML")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a stored value file, or every *.json file under a directory
    Convert(ConvertArgs),

    /// List content types the grid editor may embed
    ContentTypes(ContentTypesArgs),

    /// Show the editor configuration of a data type
    PreValues(PreValuesArgs),
}

#[derive(Debug, Clone, Args)]
pub struct HostArgs {
    /// Host fixture describing schemas, content and data types
    #[arg(long = "host", value_name = "FIXTURE")]
    pub fixture: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Stored value file or directory
    pub path: PathBuf,

    #[command(flatten)]
    pub host: HostArgs,

    /// Page being rendered; defaults to the fixture's current page
    #[arg(long)]
    pub page_id: Option<i32>,

    /// Convert in preview mode
    #[arg(long)]
    pub preview: bool,

    /// Print compact JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ContentTypesArgs {
    #[command(flatten)]
    pub host: HostArgs,

    /// Alias pattern (regex); repeatable, any match admits a content type
    #[arg(long = "allow", value_name = "REGEX")]
    pub allow: Vec<String>,
}

#[derive(Debug, Clone, Args)]
pub struct PreValuesArgs {
    #[command(flatten)]
    pub host: HostArgs,

    /// Data type id or GUID
    pub dtd_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::parse_from([
            "mortar", "convert", "grid.json", "--host", "host.json", "--page-id", "1200", "--preview", "-vv",
        ]);

        assert_eq!(cli.verbose, 2);
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.path, PathBuf::from("grid.json"));
                assert_eq!(args.host.fixture, PathBuf::from("host.json"));
                assert_eq!(args.page_id, Some(1200));
                assert!(args.preview);
                assert!(!args.compact);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_repeated_allow() {
        let cli = Cli::parse_from([
            "mortar", "content-types", "--host", "h.json", "--allow", "^grid", "--allow", "Quote$",
        ]);

        match cli.command {
            Commands::ContentTypes(args) => assert_eq!(args.allow, vec!["^grid", "Quote$"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_host_is_required() {
        assert!(Cli::try_parse_from(["mortar", "pre-values", "1040"]).is_err());
    }
}
