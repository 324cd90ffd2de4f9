//! Post repository: locale-partitioned content tree access.
//!
//! Every operation re-reads the filesystem; there is no cache layer or
//! invalidation to get wrong. The content tree is assumed static for the
//! duration of a build or request.
//!
//! # Layout
//!
//! ```text
//! <posts_dir>/
//!   he/
//!     my-first-post.md
//!   en/
//!     my-first-post.md
//! ```
//!
//! A missing locale partition is created on first access and treated as
//! "zero posts", never an error. A file that fails to parse is logged and
//! skipped, so one bad post cannot take a listing down.

pub mod front_matter;
pub mod post;

use crate::{config::SiteConfig, locale::Locale, log};
use anyhow::{Context, Result};
use post::{Category, Post, PostMeta};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// A (locale, slug) pair from the full content matrix.
///
/// Consumed by static path generation, one page per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPath {
    pub locale: Locale,
    pub slug: String,
}

/// Path of a locale's partition directory.
fn partition_dir(config: &SiteConfig, locale: Locale) -> PathBuf {
    config.content.dir.join(locale.dir_name())
}

/// Ensure the partition directory exists, creating it if needed.
fn ensure_partition(config: &SiteConfig, locale: Locale) -> Result<PathBuf> {
    let dir = partition_dir(config, locale);
    fs::create_dir_all(&dir)
        .with_context(|| format!("creating posts directory `{}`", dir.display()))?;
    Ok(dir)
}

/// List all published posts of a locale, sorted by date descending.
///
/// Slug (ascending) breaks date ties so the ordering is total. Drafts are
/// excluded; fetch them directly by slug instead.
pub fn list_posts(config: &SiteConfig, locale: Locale) -> Result<Vec<PostMeta>> {
    Ok(load_posts(config, locale)?
        .into_iter()
        .map(|post| post.meta)
        .collect())
}

/// Load all published posts of a locale with bodies, sorted by date descending.
///
/// Same listing as [`list_posts`], kept separate so callers that only need
/// metadata do not haul every body around.
pub fn load_posts(config: &SiteConfig, locale: Locale) -> Result<Vec<Post>> {
    let dir = ensure_partition(config, locale)?;
    let extension = config.content.extension.as_str();

    let mut posts: Vec<Post> = WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .filter_map(|entry| {
            let path = entry.path();
            let slug = path.file_stem()?.to_string_lossy().into_owned();
            match read_post(path, &slug) {
                Ok(post) => Some(post),
                Err(err) => {
                    log!("content"; "skipping `{}`: {err:#}", path.display());
                    None
                }
            }
        })
        .filter(|post| !post.meta.draft)
        .collect();

    posts.sort_by(|a, b| {
        b.meta
            .date
            .cmp(&a.meta.date)
            .then_with(|| a.meta.slug.cmp(&b.meta.slug))
    });

    Ok(posts)
}

/// Fetch a single post by slug.
///
/// Returns `None` when the file does not exist or fails to parse; the
/// caller turns that into its not-found response. Parse failures are
/// logged since they usually mean a broken content file rather than a
/// genuinely absent post. Drafts are returned here.
pub fn get_post(config: &SiteConfig, slug: &str, locale: Locale) -> Option<Post> {
    let path = partition_dir(config, locale).join(format!("{slug}.{}", config.content.extension));

    if !path.is_file() {
        return None;
    }

    match read_post(&path, slug) {
        Ok(post) => Some(post),
        Err(err) => {
            log!("content"; "failed to read `{}`: {err:#}", path.display());
            None
        }
    }
}

/// Published posts of a locale restricted to one category.
pub fn posts_by_category(
    config: &SiteConfig,
    category: Category,
    locale: Locale,
) -> Result<Vec<PostMeta>> {
    Ok(list_posts(config, locale)?
        .into_iter()
        .filter(|post| post.category == category)
        .collect())
}

/// All distinct tags of a locale, sorted alphabetically.
pub fn all_tags(config: &SiteConfig, locale: Locale) -> Result<Vec<String>> {
    let mut tags: Vec<String> = list_posts(config, locale)?
        .into_iter()
        .flat_map(|post| post.tags)
        .collect();
    tags.sort();
    tags.dedup();
    Ok(tags)
}

/// The full slug/locale matrix across every partition.
pub fn all_post_paths(config: &SiteConfig) -> Result<Vec<PostPath>> {
    let mut paths = Vec::new();
    for locale in Locale::ALL {
        for post in list_posts(config, locale)? {
            paths.push(PostPath {
                locale,
                slug: post.slug,
            });
        }
    }
    Ok(paths)
}

/// Read and parse one content file into a full post.
fn read_post(path: &Path, slug: &str) -> Result<Post> {
    let raw = fs::read_to_string(path)?;
    let (front, body) = front_matter::parse(&raw)?;
    let meta = PostMeta::from_parts(slug, front, body)?;

    Ok(Post {
        meta,
        body: body.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn test_config(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.content.dir = root.join("posts");
        config
    }

    fn write_post(dir: &Path, slug: &str, date: &str, extra: &str) {
        let raw = format!(
            "+++\ntitle = \"{slug} title\"\ndate = \"{date}\"\nexcerpt = \"about {slug}\"\ncategory = \"tech\"\ntags = [\"sample\"]\n{extra}+++\n\nSome body text for {slug}.\n"
        );
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(format!("{slug}.md")), raw).unwrap();
    }

    #[test]
    fn test_list_posts_missing_partition_is_empty() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        let posts = list_posts(&config, Locale::En).unwrap();
        assert!(posts.is_empty());

        // The partition was auto-created, not treated as an error
        assert!(tmp.path().join("posts/en").is_dir());
    }

    #[test]
    fn test_list_posts_sorted_date_descending() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        let dir = tmp.path().join("posts/en");

        write_post(&dir, "oldest", "2023-01-01", "");
        write_post(&dir, "newest", "2024-06-01", "");
        write_post(&dir, "middle", "2023-12-15", "");

        let posts = list_posts(&config, Locale::En).unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_list_posts_date_tie_breaks_on_slug() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        let dir = tmp.path().join("posts/en");

        write_post(&dir, "bravo", "2024-01-01", "");
        write_post(&dir, "alpha", "2024-01-01", "");

        let posts = list_posts(&config, Locale::En).unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["alpha", "bravo"]);
    }

    #[test]
    fn test_list_posts_skips_drafts_and_broken_files() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        let dir = tmp.path().join("posts/en");

        write_post(&dir, "live", "2024-01-01", "");
        write_post(&dir, "wip", "2024-02-01", "draft = true\n");
        fs::write(dir.join("broken.md"), "no front matter at all").unwrap();
        fs::write(dir.join("notes.txt"), "wrong extension").unwrap();

        let posts = list_posts(&config, Locale::En).unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["live"]);
    }

    #[test]
    fn test_locales_are_partitioned() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        write_post(&tmp.path().join("posts/he"), "shalom", "2024-01-01", "");
        write_post(&tmp.path().join("posts/en"), "hello", "2024-01-01", "");

        let he = list_posts(&config, Locale::He).unwrap();
        let en = list_posts(&config, Locale::En).unwrap();
        assert_eq!(he.len(), 1);
        assert_eq!(he[0].slug, "shalom");
        assert_eq!(en.len(), 1);
        assert_eq!(en[0].slug, "hello");
    }

    #[test]
    fn test_get_post_found() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        write_post(&tmp.path().join("posts/en"), "hello", "2024-01-01", "");

        let post = get_post(&config, "hello", Locale::En).unwrap();
        assert_eq!(post.meta.slug, "hello");
        assert_eq!(post.meta.title, "hello title");
        assert!(post.body.contains("Some body text"));
        assert_eq!(post.meta.reading_time, 1);
    }

    #[test]
    fn test_get_post_absent_slug() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        assert!(get_post(&config, "nonexistent-slug", Locale::En).is_none());
    }

    #[test]
    fn test_get_post_unparseable_file_is_absent() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        let dir = tmp.path().join("posts/en");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("broken.md"), "+++\ntitle = \"x\"\n+++\nbody").unwrap();

        assert!(get_post(&config, "broken", Locale::En).is_none());
    }

    #[test]
    fn test_get_post_returns_drafts() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        write_post(
            &tmp.path().join("posts/en"),
            "wip",
            "2024-01-01",
            "draft = true\n",
        );

        let post = get_post(&config, "wip", Locale::En).unwrap();
        assert!(post.meta.draft);
    }

    #[test]
    fn test_posts_by_category() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        let dir = tmp.path().join("posts/en");
        fs::create_dir_all(&dir).unwrap();

        write_post(&dir, "techy", "2024-01-02", "");
        fs::write(
            dir.join("money.md"),
            "+++\ntitle = \"Money\"\ndate = \"2024-01-01\"\nexcerpt = \"e\"\ncategory = \"finance\"\n+++\nbody",
        )
        .unwrap();

        let finance = posts_by_category(&config, Category::Finance, Locale::En).unwrap();
        assert_eq!(finance.len(), 1);
        assert_eq!(finance[0].slug, "money");

        let real_estate = posts_by_category(&config, Category::RealEstate, Locale::En).unwrap();
        assert!(real_estate.is_empty());
    }

    #[test]
    fn test_all_tags_sorted_and_deduped() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        let dir = tmp.path().join("posts/en");
        fs::create_dir_all(&dir).unwrap();

        fs::write(
            dir.join("a.md"),
            "+++\ntitle = \"A\"\ndate = \"2024-01-01\"\nexcerpt = \"e\"\ncategory = \"tech\"\ntags = [\"rust\", \"blog\"]\n+++\nbody",
        )
        .unwrap();
        fs::write(
            dir.join("b.md"),
            "+++\ntitle = \"B\"\ndate = \"2024-01-02\"\nexcerpt = \"e\"\ncategory = \"tech\"\ntags = [\"blog\", \"career\"]\n+++\nbody",
        )
        .unwrap();

        let tags = all_tags(&config, Locale::En).unwrap();
        assert_eq!(tags, ["blog", "career", "rust"]);
    }

    #[test]
    fn test_all_post_paths_matrix() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        write_post(&tmp.path().join("posts/he"), "shalom", "2024-01-01", "");
        write_post(&tmp.path().join("posts/en"), "hello", "2024-01-01", "");
        write_post(&tmp.path().join("posts/en"), "again", "2024-02-01", "");

        let paths = all_post_paths(&config).unwrap();
        assert_eq!(paths.len(), 3);
        assert!(paths.contains(&PostPath {
            locale: Locale::He,
            slug: "shalom".into()
        }));
        assert!(paths.contains(&PostPath {
            locale: Locale::En,
            slug: "again".into()
        }));
    }
}
