//! Subcommand implementations: repository listings, search output,
//! projection tables. Presentation only; all data comes from the
//! `content`, `search` and `projection` modules.

use crate::{
    chart,
    config::SiteConfig,
    content::{
        self,
        post::{Category, Post, PostMeta},
    },
    locale::Locale,
    log,
    projection::{self, ProjectionParams},
    render::RenderTable,
    search,
};
use anyhow::{Result, bail};
use colored::Colorize;
use serde::Serialize;
use std::str::FromStr;

/// Length budget for body snippets under search results.
const SNIPPET_LEN: usize = 150;

// ============================================================================
// Repository Commands
// ============================================================================

pub fn list(config: &SiteConfig, locale: Locale, category: Option<&str>, json: bool) -> Result<()> {
    let posts = match category {
        Some(raw) => {
            let category = Category::from_str(raw)?;
            content::posts_by_category(config, category, locale)?
        }
        None => content::list_posts(config, locale)?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    log!("content"; "{} post(s) in `{locale}`", posts.len());
    for post in &posts {
        print_meta_line(post);
    }
    Ok(())
}

pub fn show(config: &SiteConfig, locale: Locale, slug: &str, render: bool, json: bool) -> Result<()> {
    let Some(mut post) = content::get_post(config, slug, locale) else {
        // The CLI's 404: a clean message and a non-zero exit
        bail!("post not found: `{slug}` in locale `{locale}`");
    };

    if render {
        post.body = RenderTable::with_defaults().render_body(&post.body);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
        return Ok(());
    }

    println!("{}", post.meta.title.bold());
    println!(
        "{} · {} · {} min read",
        post.meta.date,
        post.meta.category,
        post.meta.reading_time
    );
    if !post.meta.tags.is_empty() {
        println!("tags: {}", post.meta.tags.join(", "));
    }
    println!();
    println!("{}", post.body);
    Ok(())
}

pub fn tags(config: &SiteConfig, locale: Locale) -> Result<()> {
    for tag in content::all_tags(config, locale)? {
        println!("{tag}");
    }
    Ok(())
}

pub fn paths(config: &SiteConfig, json: bool) -> Result<()> {
    let paths = content::all_post_paths(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
        return Ok(());
    }

    for path in &paths {
        println!("{}/{}", path.locale, path.slug);
    }
    Ok(())
}

// ============================================================================
// Search Command
// ============================================================================

/// A search result for JSON output: the post metadata plus a body snippet
/// when the match is in the body.
#[derive(Serialize)]
struct SearchHit<'a> {
    #[serde(flatten)]
    meta: &'a PostMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    snippet: Option<String>,
}

pub fn search(config: &SiteConfig, locale: Locale, query: &str, json: bool) -> Result<()> {
    let posts = content::load_posts(config, locale)?;
    let hits = search::filter(&posts, query);

    if json {
        let hits: Vec<SearchHit> = hits
            .iter()
            .map(|post| SearchHit {
                meta: &post.meta,
                snippet: body_snippet(post, query),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    log!("search"; "{} result(s) for `{query}` in `{locale}`", hits.len());
    for post in hits {
        println!();
        println!("{}", highlighted(&post.meta.title, query));
        println!("  {}", highlighted(&post.meta.excerpt, query));
        if let Some(snippet) = body_snippet(post, query) {
            println!("  {}", highlighted(&snippet, query).dimmed());
        }
    }
    Ok(())
}

/// Snippet of the body around the match, only when no metadata field
/// already explains why this post matched.
fn body_snippet(post: &Post, query: &str) -> Option<String> {
    if meta_matches(&post.meta, query) {
        return None;
    }
    search::find_snippet(&post.body, query, SNIPPET_LEN).map(|s| s.display())
}

fn meta_matches(meta: &PostMeta, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    meta.title.to_lowercase().contains(&needle)
        || meta.excerpt.to_lowercase().contains(&needle)
        || meta.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        || meta.category.as_str().contains(&needle)
}

/// Re-assemble text with match spans emphasized.
fn highlighted(text: &str, query: &str) -> String {
    search::highlight(text, query)
        .into_iter()
        .map(|span| {
            if span.matched {
                span.text.bright_yellow().bold().to_string()
            } else {
                span.text.to_owned()
            }
        })
        .collect()
}

// ============================================================================
// Projection Command
// ============================================================================

pub fn project(params: &ProjectionParams, locale: Locale, json: bool) -> Result<()> {
    let projection = projection::project(params);

    if json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
        return Ok(());
    }

    let summary = &projection.summary;
    log!(
        "project";
        "{} initial, {} monthly at {}% over {} year(s)",
        chart::format_currency(params.initial.round() as i64, locale),
        chart::format_currency(params.monthly_contribution.round() as i64, locale),
        params.annual_rate_pct,
        params.years
    );

    chart::print(&chart::layout(&projection.series, locale, 40));

    println!();
    println!(
        "total value:          {}",
        chart::format_currency(summary.final_balance.round() as i64, locale)
    );
    println!(
        "total contributions:  {}",
        chart::format_currency(summary.final_contributions.round() as i64, locale)
    );
    println!(
        "total interest:       {}",
        chart::format_currency(summary.total_interest.round() as i64, locale)
    );
    println!("growth multiplier:    {:.1}x", summary.growth_multiplier);
    Ok(())
}

fn print_meta_line(post: &PostMeta) {
    println!(
        "{}  {:<12}  {:>2} min  {}  {}",
        post.date,
        post.category.as_str(),
        post.reading_time,
        post.slug.bold(),
        post.title
    );
}
