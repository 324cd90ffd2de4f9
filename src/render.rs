//! Renderer capability table for rich tags in post bodies.
//!
//! Post bodies may embed capitalized component tags such as
//! `<Callout type="warning">...</Callout>` or `<YouTube id="abc" />`.
//! Instead of injecting components dynamically, rendering is driven by a
//! statically declared table mapping tag names to render functions, with
//! an explicit fallback: unrecognized tags pass through unchanged (and
//! are logged once per tag), never rendered as silent nothing.
//!
//! Plain lowercase markup (`<em>`, `<a href=...>`) is not component
//! territory and is left alone entirely.

use crate::log;
use regex::Regex;
use std::{collections::HashSet, sync::OnceLock};

/// A parsed component tag occurrence inside a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInvocation {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    /// Inner text between the opening and closing tag; empty for
    /// self-closing tags.
    pub inner: String,
}

impl TagInvocation {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A render function for one tag kind.
pub type RenderFn = fn(&TagInvocation) -> String;

/// Statically declared tag -> render function table.
pub struct RenderTable {
    handlers: Vec<(&'static str, RenderFn)>,
}

impl RenderTable {
    pub const fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// The default capability table of the site.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.register("Callout", render_callout);
        table.register("YouTube", render_youtube);
        table
    }

    pub fn register(&mut self, tag: &'static str, handler: RenderFn) {
        self.handlers.push((tag, handler));
    }

    fn get(&self, tag: &str) -> Option<RenderFn> {
        self.handlers
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, handler)| *handler)
    }

    /// Apply the table to a body, replacing each known component tag with
    /// its handler's output. Unknown tags and unclosed tags are kept
    /// verbatim.
    pub fn render_body(&self, body: &str) -> String {
        let open = open_tag_pattern();
        let mut output = String::with_capacity(body.len());
        let mut cursor = 0;
        let mut unknown_seen: HashSet<String> = HashSet::new();

        while let Some(captures) = open.captures_at(body, cursor) {
            let Some(open_match) = captures.get(0) else {
                break;
            };
            let name = &captures[1];
            let self_closing = &captures[3] == "/";

            output.push_str(&body[cursor..open_match.start()]);

            let (inner, next_cursor) = if self_closing {
                (String::new(), open_match.end())
            } else {
                let closing = format!("</{name}>");
                match body[open_match.end()..].find(&closing) {
                    Some(rel) => {
                        let inner_end = open_match.end() + rel;
                        (
                            body[open_match.end()..inner_end].to_owned(),
                            inner_end + closing.len(),
                        )
                    }
                    None => {
                        // Unclosed component tag: keep it verbatim
                        output.push_str(open_match.as_str());
                        cursor = open_match.end();
                        continue;
                    }
                }
            };

            let invocation = TagInvocation {
                name: name.to_owned(),
                attrs: parse_attrs(&captures[2]),
                inner,
            };
            match self.get(&invocation.name) {
                Some(handler) => output.push_str(&handler(&invocation)),
                None => {
                    if unknown_seen.insert(invocation.name.clone()) {
                        log!("render"; "no handler for <{}>, passing through", invocation.name);
                    }
                    output.push_str(&body[open_match.start()..next_cursor]);
                }
            }
            cursor = next_cursor;
        }

        output.push_str(&body[cursor..]);
        output
    }
}

impl Default for RenderTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Opening component tag: capitalized name, quoted attributes, optional
/// self-close.
fn open_tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"<([A-Z][A-Za-z0-9]*)((?:\s+[a-zA-Z][\w-]*="[^"]*")*)\s*(/?)>"#)
            .expect("valid pattern")
    })
}

fn parse_attrs(raw: &str) -> Vec<(String, String)> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN
        .get_or_init(|| Regex::new(r#"([a-zA-Z][\w-]*)="([^"]*)""#).expect("valid pattern"));

    pattern
        .captures_iter(raw)
        .map(|c| (c[1].to_owned(), c[2].to_owned()))
        .collect()
}

/// `<Callout type="warning">text</Callout>` -> bracketed note line.
fn render_callout(invocation: &TagInvocation) -> String {
    let kind = invocation.attr("type").unwrap_or("info");
    format!("[{}] {}", kind.to_uppercase(), invocation.inner.trim())
}

/// `<YouTube id="abc" />` -> plain watch link.
fn render_youtube(invocation: &TagInvocation) -> String {
    match invocation.attr("id") {
        Some(id) => format!("https://www.youtube.com/watch?v={id}"),
        None => String::new(),
    }
}
