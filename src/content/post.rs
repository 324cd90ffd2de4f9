//! Post data types: category taxonomy, parsed metadata and full posts.

use crate::utils::date::Date;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Words-per-minute figure behind the reading-time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// The closed category taxonomy of the blog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Finance,
    RealEstate,
    Tech,
    StockMarket,
}

impl Category {
    pub const ALL: [Self; 4] = [
        Self::Finance,
        Self::RealEstate,
        Self::Tech,
        Self::StockMarket,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::RealEstate => "real-estate",
            Self::Tech => "tech",
            Self::StockMarket => "stock-market",
        }
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "finance" => Ok(Self::Finance),
            "real-estate" => Ok(Self::RealEstate),
            "tech" => Ok(Self::Tech),
            "stock-market" => Ok(Self::StockMarket),
            other => anyhow::bail!(
                "unknown category `{other}` (expected one of: {})",
                Self::ALL.map(Self::as_str).join(", ")
            ),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Front matter block of a content file, as written by authors.
///
/// The `date` stays a string here and is parsed into [`Date`] when the
/// post is assembled, so a bad date is reported with the file context.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrontMatter {
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub draft: bool,
}

/// Metadata of a single post, derived from its content file on every read.
#[derive(Debug, Clone, Serialize)]
pub struct PostMeta {
    /// Unique identifier within a locale partition, the file stem.
    pub slug: String,
    pub title: String,
    pub date: Date,
    pub excerpt: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Drafts are hidden from listings but still reachable by slug.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,
}

/// A full post: metadata plus the raw markup body.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    #[serde(flatten)]
    pub meta: PostMeta,
    pub body: String,
}

impl PostMeta {
    /// Assemble post metadata from a parsed front matter block and body.
    ///
    /// Fails only when the front matter date does not parse; every other
    /// field is trusted as-is.
    pub fn from_parts(slug: &str, front: FrontMatter, body: &str) -> anyhow::Result<Self> {
        let date = Date::parse(&front.date)
            .ok_or_else(|| anyhow::anyhow!("invalid date `{}`", front.date))?;

        Ok(Self {
            slug: slug.to_owned(),
            title: front.title,
            date,
            excerpt: front.excerpt,
            category: front.category,
            tags: front.tags,
            reading_time: reading_time(body),
            image: front.image,
            draft: front.draft,
        })
    }
}

/// Estimated reading time in minutes: `ceil(word_count / 200)`.
///
/// Words are whitespace-separated runs. An empty body reads in 0 minutes
/// (strict ceil-of-zero); any non-empty body takes at least 1.
pub fn reading_time(body: &str) -> u32 {
    let words = body.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE) as u32
}
