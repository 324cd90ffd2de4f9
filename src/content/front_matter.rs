//! `+++`-delimited TOML front matter parsing.
//!
//! A content file looks like:
//!
//! ```text
//! +++
//! title = "Why index funds win"
//! date = "2024-05-20"
//! excerpt = "The quiet case for doing less."
//! category = "finance"
//! tags = ["investing", "index-funds"]
//! +++
//!
//! Markup body...
//! ```

use super::post::FrontMatter;
use anyhow::{Result, bail};

/// Front matter delimiter, on its own line.
const DELIMITER: &str = "+++";

/// Split a content file into its parsed front matter and body.
///
/// The body is returned with a single leading newline (if any) stripped,
/// so the delimiter line does not bleed into word counts.
pub fn parse(raw: &str) -> Result<(FrontMatter, &str)> {
    let (front, body) = split(raw)?;
    let front = toml::from_str(front)?;
    Ok((front, body))
}

/// Split raw file contents into the front matter TOML and the body.
fn split(raw: &str) -> Result<(&str, &str)> {
    // Tolerate a UTF-8 BOM from Windows editors
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let Some(rest) = raw.strip_prefix(DELIMITER) else {
        bail!("missing opening `{DELIMITER}` delimiter");
    };
    let rest = rest.strip_prefix('\r').unwrap_or(rest);
    let Some(rest) = rest.strip_prefix('\n') else {
        bail!("opening `{DELIMITER}` must be on its own line");
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let front = &rest[..offset];
            let body = &rest[offset + line.len()..];
            let body = body.strip_prefix('\n').unwrap_or(body);
            return Ok((front, body));
        }
        offset += line.len();
    }

    bail!("missing closing `{DELIMITER}` delimiter")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::post::Category;

    const SAMPLE: &str = r#"+++
title = "Hello"
date = "2024-01-15"
excerpt = "A greeting"
category = "tech"
tags = ["intro", "meta"]
+++

Body text here.
"#;

    #[test]
    fn test_parse_full_file() {
        let (front, body) = parse(SAMPLE).unwrap();
        assert_eq!(front.title, "Hello");
        assert_eq!(front.date, "2024-01-15");
        assert_eq!(front.category, Category::Tech);
        assert_eq!(front.tags, vec!["intro", "meta"]);
        assert_eq!(front.image, None);
        assert!(!front.draft);
        assert_eq!(body, "Body text here.\n");
    }

    #[test]
    fn test_parse_optional_fields() {
        let raw = r#"+++
title = "Hello"
date = "2024-01-15"
excerpt = "A greeting"
category = "finance"
image = "/images/cover.png"
draft = true
+++
body"#;
        let (front, body) = parse(raw).unwrap();
        assert!(front.tags.is_empty());
        assert_eq!(front.image.as_deref(), Some("/images/cover.png"));
        assert!(front.draft);
        assert_eq!(body, "body");
    }

    #[test]
    fn test_parse_missing_opening_delimiter() {
        let err = parse("title = \"x\"\n").unwrap_err();
        assert!(err.to_string().contains("opening"));
    }

    #[test]
    fn test_parse_missing_closing_delimiter() {
        let err = parse("+++\ntitle = \"x\"\n").unwrap_err();
        assert!(err.to_string().contains("closing"));
    }

    #[test]
    fn test_parse_missing_required_field() {
        let raw = "+++\ntitle = \"x\"\n+++\nbody";
        assert!(parse(raw).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let raw = r#"+++
title = "x"
date = "2024-01-15"
excerpt = "e"
category = "tech"
publish_status = "live"
+++
body"#;
        assert!(parse(raw).is_err());
    }

    #[test]
    fn test_split_crlf_and_bom() {
        let raw = "\u{feff}+++\r\ntitle = \"x\"\r\n+++\r\nbody";
        let (front, body) = split(raw).unwrap();
        assert!(front.contains("title"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_empty_body() {
        let raw = "+++\ntitle = \"x\"\ndate = \"2024-01-15\"\nexcerpt = \"e\"\ncategory = \"tech\"\n+++\n";
        let (_, body) = parse(raw).unwrap();
        assert_eq!(body, "");
    }
}
