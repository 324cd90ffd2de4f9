//! `[base]` section configuration.
//!
//! Basic site information: title, author, canonical URL, default locale.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in maagar.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "My Portfolio"
/// description = "Personal site and blog"
/// author = "Alice"
/// url = "https://example.com"
/// locale = "he"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title displayed in listings and headers.
    pub title: String,

    /// Author name for page metadata.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Site description.
    #[serde(default)]
    pub description: String,

    /// Canonical base URL for absolute links.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// Default content locale when none is given on the command line.
    /// Must be one of the supported locale codes.
    #[serde(default = "defaults::base::locale")]
    #[educe(Default = defaults::base::locale())]
    pub locale: String,
}
