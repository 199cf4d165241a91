use std::path::PathBuf;

use clap::Parser;
use refute::config::Config;
use serde::Serialize;

/// The clauses refuted against when none are given.
pub const DEFAULT_CLAUSES: [&str; 4] = ["C|P", "!C|R", "!P|H", "!H"];

/// Determines whether a literal is entailed by a formula of short clauses, by resolution refutation
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// A clause of at most two literals, e.g. '!C|R'. May be given more than once
    #[arg(short, long = "clause")]
    clauses: Vec<String>,

    /// A file of clauses, one per line, read before any clause given with --clause
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// The literal to check
    #[arg(short, long, default_value = "R")]
    query: String,

    /// How much to display
    #[arg(short, long, default_value_t, value_enum)]
    detail: Detail,

    /// Print this reference as markdown
    #[arg(long, hide = true, default_value_t = false)]
    pub markdown_help: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Detail {
    /// Only the result
    Quiet,
    #[default]
    /// The clauses, the literal checked, and the result
    Summary,
    /// As summary, followed by each resolution step
    Derivation,
}

/// A collection of configuration options relevant only to the CLI.
#[derive(Debug)]
pub struct CliConfig {
    pub clauses: Vec<String>,
    pub file: Option<PathBuf>,
    pub query: String,
    pub detail: Detail,
}

/// Splits parsed arguments into a library [Config] and a [CliConfig].
pub fn config_from_args(args: Args) -> (Config, CliConfig) {
    let config = Config {
        record_derivation: args.detail == Detail::Derivation,
    };

    let clauses = match args.clauses.is_empty() && args.file.is_none() {
        true => DEFAULT_CLAUSES.iter().map(|text| text.to_string()).collect(),
        false => args.clauses,
    };

    let cli_config = CliConfig {
        clauses,
        file: args.file,
        query: args.query,
        detail: args.detail,
    };

    (config, cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["refute"]);
        let (config, cli_config) = config_from_args(args);

        assert!(!config.record_derivation);
        assert_eq!(cli_config.clauses, DEFAULT_CLAUSES);
        assert_eq!(cli_config.query, "R");
        assert_eq!(cli_config.detail, Detail::Summary);
    }

    #[test]
    fn given_clauses() {
        let args = Args::parse_from(["refute", "-c", "p|q", "--clause", "!p", "-q", "q", "-d", "derivation"]);
        let (config, cli_config) = config_from_args(args);

        assert!(config.record_derivation);
        assert_eq!(cli_config.clauses, vec!["p|q", "!p"]);
        assert_eq!(cli_config.query, "q");
    }

    #[test]
    fn file_replaces_defaults() {
        let args = Args::parse_from(["refute", "--file", "formula.txt"]);
        let (_, cli_config) = config_from_args(args);

        assert!(cli_config.clauses.is_empty());
        assert_eq!(cli_config.file, Some(PathBuf::from("formula.txt")));
    }
}
