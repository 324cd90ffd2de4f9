//! Typed locale handling for the bilingual content tree.
//!
//! The site ships in exactly two languages, so locales are a closed enum
//! rather than free-form strings. Unknown codes are rejected at the CLI
//! boundary instead of falling back silently.

use serde::Serialize;
use std::{fmt, str::FromStr};

/// A content locale. One subdirectory of the posts tree per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    He,
    En,
}

impl Locale {
    /// All supported locales, in the order used for the slug/locale matrix.
    pub const ALL: [Self; 2] = [Self::He, Self::En];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::He => "he",
            Self::En => "en",
        }
    }

    /// Name of this locale's partition directory under the posts dir.
    pub const fn dir_name(self) -> &'static str {
        self.as_str()
    }

    /// Currency symbol used when formatting amounts for this locale.
    pub const fn currency_symbol(self) -> &'static str {
        match self {
            Self::He => "₪",
            Self::En => "$",
        }
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "he" => Ok(Self::He),
            "en" => Ok(Self::En),
            other => anyhow::bail!("unsupported locale `{other}` (expected `he` or `en`)"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
