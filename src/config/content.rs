//! `[content]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[content]` section in maagar.toml - where posts live and how they are
/// named.
///
/// # Example
/// ```toml
/// [content]
/// dir = "content/posts"
/// extension = "md"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Root of the posts tree; locale partitions live directly below it.
    #[serde(default = "defaults::content::dir")]
    #[educe(Default = defaults::content::dir())]
    pub dir: PathBuf,

    /// Content file extension, without the leading dot.
    #[serde(default = "defaults::content::extension")]
    #[educe(Default = defaults::content::extension())]
    pub extension: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_content_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.content.dir, PathBuf::from("content/posts"));
        assert_eq!(config.content.extension, "md");
    }

    #[test]
    fn test_content_config_override() {
        let config = r#"
            [content]
            dir = "articles"
            extension = "mdx"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert_eq!(config.content.dir, PathBuf::from("articles"));
        assert_eq!(config.content.extension, "mdx");
    }
}
