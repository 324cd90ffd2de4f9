//! Maagar - content engine for a bilingual portfolio blog.

mod chart;
mod cli;
mod commands;
mod config;
mod content;
mod locale;
mod logger;
mod projection;
mod render;
mod search;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use locale::Locale;
use projection::ProjectionParams;
use std::str::FromStr;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let locale = resolve_locale(&cli, &config)?;

    match &cli.command {
        Commands::List { category, json } => {
            commands::list(&config, locale, category.as_deref(), *json)
        }
        Commands::Show { slug, render, json } => {
            commands::show(&config, locale, slug, *render, *json)
        }
        Commands::Search { query, json } => commands::search(&config, locale, query, *json),
        Commands::Tags => commands::tags(&config, locale),
        Commands::Paths { json } => commands::paths(&config, *json),
        Commands::Project {
            initial,
            monthly,
            rate,
            years,
            json,
        } => {
            let params = ProjectionParams {
                initial: *initial,
                monthly_contribution: *monthly,
                annual_rate_pct: *rate,
                years: *years,
            };
            commands::project(&params, locale, *json)
        }
    }
}

/// Load configuration from the config file if present, apply CLI
/// overrides, and validate. A missing config file means all defaults.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let mut config = if cli.config.exists() {
        SiteConfig::from_path(&cli.config)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;
    Ok(config)
}

/// Locale precedence: CLI flag, then config default.
fn resolve_locale(cli: &Cli, config: &SiteConfig) -> Result<Locale> {
    match &cli.locale {
        Some(code) => Locale::from_str(code),
        None => config.default_locale(),
    }
}
