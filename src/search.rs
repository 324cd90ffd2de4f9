//! Client-side style search over an in-memory post list.
//!
//! Matching is literal case-insensitive substring containment over title,
//! excerpt, tags, category and body; no tokenizing, no fuzziness. The
//! caller debounces keystrokes; this module just answers one query at a
//! time against whatever list it is handed.

use crate::content::post::Post;
use regex::Regex;

/// Filter posts down to those containing `query`, preserving order.
///
/// An empty or whitespace-only query matches everything. Filtering an
/// already-filtered result by the same query is a no-op.
pub fn filter<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    let query = query.trim();
    if query.is_empty() {
        return posts.iter().collect();
    }

    let needle = query.to_lowercase();
    posts.iter().filter(|post| matches(post, &needle)).collect()
}

/// Case-insensitive substring test against every searchable field.
fn matches(post: &Post, needle: &str) -> bool {
    let meta = &post.meta;

    meta.title.to_lowercase().contains(needle)
        || meta.excerpt.to_lowercase().contains(needle)
        || meta.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
        || meta.category.as_str().contains(needle)
        || post.body.to_lowercase().contains(needle)
}

/// A slice of highlighted text. Spans cover the input contiguously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Split `text` into spans marking each case-insensitive occurrence of
/// `query`. The query is treated as literal text; regex metacharacters
/// are escaped. An empty query yields one unmatched span.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Span<'a>> {
    let query = query.trim();
    if query.is_empty() || text.is_empty() {
        return vec![Span {
            text,
            matched: false,
        }];
    }

    let Ok(pattern) = Regex::new(&format!("(?i){}", regex::escape(query))) else {
        return vec![Span {
            text,
            matched: false,
        }];
    };

    let mut spans = Vec::new();
    let mut cursor = 0;
    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            spans.push(Span {
                text: &text[cursor..found.start()],
                matched: false,
            });
        }
        spans.push(Span {
            text: found.as_str(),
            matched: true,
        });
        cursor = found.end();
    }
    if cursor < text.len() {
        spans.push(Span {
            text: &text[cursor..],
            matched: false,
        });
    }

    spans
}

/// A bounded excerpt around the first match of a query inside a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub text: String,
    /// Content was clipped before the window.
    pub truncated_start: bool,
    /// Content was clipped after the window.
    pub truncated_end: bool,
}

impl Snippet {
    /// Render with ellipsis markers on the clipped sides.
    pub fn display(&self) -> String {
        let lead = if self.truncated_start { "..." } else { "" };
        let tail = if self.truncated_end { "..." } else { "" };
        format!("{lead}{}{tail}", self.text)
    }
}

/// Find the first case-insensitive occurrence of `query` in `content` and
/// return a window of at most roughly `max_len` characters around it, with
/// about a third of the budget spent before the match. Returns `None` when
/// the query is empty or absent.
///
/// Window edges are clamped to UTF-8 character boundaries, which matters
/// for the Hebrew half of the content tree.
pub fn find_snippet(content: &str, query: &str, max_len: usize) -> Option<Snippet> {
    let query = query.trim();
    if query.is_empty() || content.is_empty() {
        return None;
    }

    let index = content.to_lowercase().find(&query.to_lowercase())?;
    // Lowercasing can shift byte offsets for a handful of characters;
    // clamp so the window is always a valid slice of the original.
    let index = floor_char_boundary(content, index.min(content.len()));

    let lead = max_len / 3;
    let start = floor_char_boundary(content, index.saturating_sub(lead));
    let end = floor_char_boundary(
        content,
        (index + query.len() + (max_len - lead)).min(content.len()),
    );

    Some(Snippet {
        text: content[start..end].to_owned(),
        truncated_start: start > 0,
        truncated_end: end < content.len(),
    })
}

/// Largest char boundary at or below `index`.
fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
