//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Maagar content engine CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file name (default: maagar.toml)
    #[arg(short = 'C', long, default_value = "maagar.toml")]
    pub config: PathBuf,

    /// Posts directory path (overrides [content] dir)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Content locale (overrides [base] locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List published posts, newest first
    List {
        /// Restrict to one category (finance, real-estate, tech, stock-market)
        #[arg(short, long)]
        category: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single post by slug
    Show {
        /// The post slug (file stem)
        slug: String,

        /// Run the body through the component render table
        #[arg(short, long)]
        render: bool,

        /// Emit JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Search posts by substring (title, excerpt, tags, category, body)
    Search {
        /// The query string, matched literally and case-insensitively
        query: String,

        /// Emit JSON instead of highlighted output
        #[arg(long)]
        json: bool,
    },

    /// List all distinct tags of a locale
    Tags,

    /// Print the full slug/locale matrix for static path generation
    Paths {
        /// Emit JSON instead of one path per line
        #[arg(long)]
        json: bool,
    },

    /// Project compound-interest growth and chart it
    Project {
        /// Initial investment
        #[arg(long, default_value_t = 10_000.0, value_parser = bounded_f64::<0, 1_000_000>)]
        initial: f64,

        /// Monthly contribution
        #[arg(long, default_value_t = 500.0, value_parser = bounded_f64::<0, 10_000>)]
        monthly: f64,

        /// Annual interest rate in percent
        #[arg(long, default_value_t = 8.0, value_parser = bounded_f64::<1, 20>)]
        rate: f64,

        /// Investment period in years
        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=50))]
        years: u32,

        /// Emit JSON instead of a chart
        #[arg(long)]
        json: bool,
    },
}

/// Parse a finite f64 within an inclusive bound.
///
/// The bounds mirror the reference UI's slider ranges; they are input
/// affordances, not engine constraints.
fn bounded_f64<const MIN: i64, const MAX: i64>(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if !value.is_finite() {
        return Err(format!("`{s}` is not finite"));
    }
    if value < MIN as f64 || value > MAX as f64 {
        return Err(format!("`{s}` is out of range [{MIN}, {MAX}]"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_f64_accepts_in_range() {
        assert_eq!(bounded_f64::<0, 100>("50").unwrap(), 50.0);
        assert_eq!(bounded_f64::<0, 100>("0").unwrap(), 0.0);
        assert_eq!(bounded_f64::<0, 100>("100").unwrap(), 100.0);
        assert_eq!(bounded_f64::<1, 20>("8.5").unwrap(), 8.5);
    }

    #[test]
    fn test_bounded_f64_rejects_out_of_range() {
        assert!(bounded_f64::<0, 100>("-1").is_err());
        assert!(bounded_f64::<0, 100>("101").is_err());
        assert!(bounded_f64::<0, 100>("NaN").is_err());
        assert!(bounded_f64::<0, 100>("inf").is_err());
        assert!(bounded_f64::<0, 100>("abc").is_err());
    }

    #[test]
    fn test_cli_parses_project_defaults() {
        let cli = Cli::try_parse_from(["maagar", "project"]).unwrap();
        match cli.command {
            Commands::Project {
                initial,
                monthly,
                rate,
                years,
                json,
            } => {
                assert_eq!(initial, 10_000.0);
                assert_eq!(monthly, 500.0);
                assert_eq!(rate, 8.0);
                assert_eq!(years, 20);
                assert!(!json);
            }
            _ => panic!("expected project subcommand"),
        }
    }

    #[test]
    fn test_cli_rejects_out_of_range_years() {
        assert!(Cli::try_parse_from(["maagar", "project", "--years", "51"]).is_err());
        assert!(Cli::try_parse_from(["maagar", "project", "--years", "0"]).is_err());
    }

    #[test]
    fn test_cli_parses_search() {
        let cli = Cli::try_parse_from(["maagar", "-l", "en", "search", "ריבית"]).unwrap();
        assert_eq!(cli.locale.as_deref(), Some("en"));
        match cli.command {
            Commands::Search { query, json } => {
                assert_eq!(query, "ריבית");
                assert!(!json);
            }
            _ => panic!("expected search subcommand"),
        }
    }
}
