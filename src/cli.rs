use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Build and query a package vulnerability database from ALT Linux OVAL feeds
#[derive(Parser, Debug)]
#[command(name = "alt-vulndb")]
#[command(version)]
#[command(about = "Build and query a package vulnerability database from ALT Linux OVAL feeds", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rebuild the database from a vuln-list-alt checkout
    Update(UpdateArgs),
    /// Print the advisories affecting a package on a platform
    Lookup(LookupArgs),
}

#[derive(ClapArgs, Debug)]
pub struct UpdateArgs {
    /// Directory containing vuln-list-alt/oval
    #[arg(short, long)]
    pub feed_dir: Option<PathBuf>,

    /// Database file (defaults to alt-vulndb.json)
    #[arg(short, long)]
    pub db_path: Option<PathBuf>,

    /// Parse and merge everything, but write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Config file (defaults to ./alt-vulndb.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct LookupArgs {
    /// Source package name, e.g. libfoo
    pub package: String,

    /// Platform CPE, e.g. cpe:/o:alt:kworkstation:10
    #[arg(short, long)]
    pub platform: String,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Database file (defaults to alt-vulndb.json)
    #[arg(short, long)]
    pub db_path: Option<PathBuf>,

    /// Config file (defaults to ./alt-vulndb.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parses arguments, returning clap's error instead of exiting
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_update() {
        let args = Args::try_parse_from([
            "alt-vulndb",
            "update",
            "--feed-dir",
            "/cache",
            "--db-path",
            "db.json",
            "--dry-run",
        ])
        .unwrap();

        match args.command {
            Command::Update(update) => {
                assert_eq!(update.feed_dir, Some(PathBuf::from("/cache")));
                assert_eq!(update.db_path, Some(PathBuf::from("db.json")));
                assert!(update.dry_run);
                assert!(update.config.is_none());
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_lookup() {
        let args = Args::try_parse_from([
            "alt-vulndb",
            "lookup",
            "libfoo",
            "--platform",
            "cpe:/o:alt:kworkstation:10",
            "--format",
            "md",
        ])
        .unwrap();

        match args.command {
            Command::Lookup(lookup) => {
                assert_eq!(lookup.package, "libfoo");
                assert_eq!(lookup.platform, "cpe:/o:alt:kworkstation:10");
                assert_eq!(lookup.format, Some(OutputFormat::Markdown));
                assert!(lookup.output.is_none());
            }
            other => panic!("expected lookup, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_requires_platform() {
        assert!(Args::try_parse_from(["alt-vulndb", "lookup", "libfoo"]).is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Args::try_parse_from([
            "alt-vulndb",
            "lookup",
            "libfoo",
            "--platform",
            "cpe",
            "--format",
            "xml",
        ]);
        assert!(result.is_err());
    }
}
