//! Shared link discovery and rewriting
//!
//! Two patterns drive the whole pipeline:
//!
//! - [`extract_shared_link_ids`] finds every `://1drv.ms/i/<id>?...` link in a
//!   file and returns the distinct identifiers.
//! - [`rewrite_shared_links`] finds every double-quoted string holding such a
//!   link and appends `#<resolved path>` before the closing quote.
//!
//! A quoted link that already carries a `#` fragment is never touched again,
//! so rewriting is idempotent.
//!
//! ```
//! use std::str::FromStr;
//! use sharelink_core::domain::{LinkMap, ResolvedPath, SharedLinkId};
//! use sharelink_core::links::{extract_shared_link_ids, rewrite_shared_links};
//!
//! let html = r#"<img src="https://1drv.ms/i/s!ABC?embed=1" />"#;
//! let ids = extract_shared_link_ids(html);
//! assert_eq!(ids.len(), 1);
//!
//! let mut links = LinkMap::new();
//! links.insert(
//!     SharedLinkId::from_str("s!ABC").unwrap(),
//!     ResolvedPath::from_str("Pictures/foo.jpg").unwrap(),
//! );
//! let rewrite = rewrite_shared_links(html, &links);
//! assert!(rewrite.changed());
//! ```

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::warn;

use crate::domain::{LinkMap, ResolvedPath, SharedLinkId};

/// Host and path prefix of an image shared link
const SHARED_IMAGE_PREFIX: &str = "://1drv.ms/i/";

/// Matches a shared image link and captures everything up to the first `?`
///
/// The capture stops at the end of the quoted value, so a link without a
/// query string never swallows the markup that follows it.
static SHARED_LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"://1drv\.ms/i/([^?"\s]+)\?"#).unwrap());

/// Matches a double-quoted string that contains a shared image link
static QUOTED_LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*://1drv\.ms/i/[^"]*)""#).unwrap());

/// Returns the distinct shared link identifiers found in `content`
///
/// Links without a `?` after the identifier are not collected, since the
/// rewrite never annotates them. Every other capture becomes an identifier
/// and is left to the resolver to accept or reject.
pub fn extract_shared_link_ids(content: &str) -> BTreeSet<SharedLinkId> {
    SHARED_LINK_PATTERN
        .captures_iter(content)
        .filter_map(|caps| match SharedLinkId::from_str(&caps[1]) {
            Ok(id) => Some(id),
            Err(err) => {
                warn!(error = %err, "Skipping malformed shared link");
                None
            }
        })
        .collect()
}

/// Result of rewriting one file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The new content (identical to the input when nothing changed)
    pub content: String,
    /// Number of quoted links that received a fragment
    pub replacements: usize,
}

impl Rewrite {
    /// Returns true if at least one link was rewritten
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Appends `#<resolved path>` to every quoted shared link found in `links`
///
/// Quoted links that already contain `#`, that have no `?` after the
/// identifier, or whose identifier is missing from `links` are left as-is.
pub fn rewrite_shared_links(content: &str, links: &LinkMap) -> Rewrite {
    let mut replacements = 0;

    let rewritten = QUOTED_LINK_PATTERN.replace_all(content, |caps: &Captures<'_>| {
        let quoted = &caps[1];
        match fragment_target(quoted, links) {
            Some(path) => {
                replacements += 1;
                format!("\"{quoted}#{path}\"")
            }
            None => caps[0].to_string(),
        }
    });

    Rewrite {
        content: rewritten.into_owned(),
        replacements,
    }
}

/// Looks up the resolved path for the link inside a quoted string
fn fragment_target<'a>(quoted: &str, links: &'a LinkMap) -> Option<&'a ResolvedPath> {
    if quoted.contains('#') {
        return None;
    }

    let (_, after_prefix) = quoted.split_once(SHARED_IMAGE_PREFIX)?;
    let (id, _) = after_prefix.split_once('?')?;
    links.get(id)
}
