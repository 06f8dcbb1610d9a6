//! RFC 8288 Link header parsing
//!
//! Format: `<https://host/applications?_page=2&_limit=5>; rel="next", <...>; rel="last"`

use super::types::{Link, PaginationMetadata};

/// Relation that marks a following page
const NEXT_REL: &str = "next";

/// Derive next-page availability from an optional Link header.
///
/// Absent or malformed input yields `has_next_page = false`.
pub fn parse_link_header(header: Option<&str>) -> PaginationMetadata {
    let has_next_page = header.is_some_and(|h| parse_links(h).iter().any(Link::is_next));
    PaginationMetadata { has_next_page }
}

/// Split a Link header into its entries.
///
/// Only quoted `rel` values (single or double) are recognised.
pub fn parse_links(header: &str) -> Vec<Link> {
    header
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_entry)
        .collect()
}

/// Target URL of the `next` relation, if any
pub fn next_link(header: &str) -> Option<String> {
    parse_links(header)
        .into_iter()
        .find(Link::is_next)
        .and_then(|link| link.url)
}

fn parse_entry(part: &str) -> Link {
    let mut url = None;
    let mut rel = None;

    for segment in part.split(';') {
        let segment = segment.trim();
        if segment.starts_with('<') && segment.ends_with('>') && segment.len() >= 2 {
            url = Some(segment[1..segment.len() - 1].to_string());
        } else if let Some(value) = rel_value(segment) {
            rel = Some(value);
        }
    }

    Link { url, rel }
}

/// Extract a quoted `rel` parameter value, case-insensitively
fn rel_value(segment: &str) -> Option<String> {
    let lower = segment.to_ascii_lowercase();
    let raw = lower.strip_prefix("rel=")?;
    unquote(raw).map(str::to_string)
}

fn unquote(raw: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|q| {
        raw.strip_prefix(q)
            .and_then(|rest| rest.strip_suffix(q))
    })
}

impl Link {
    /// Whether this entry points at the next page
    pub fn is_next(&self) -> bool {
        self.rel.as_deref() == Some(NEXT_REL)
    }
}
