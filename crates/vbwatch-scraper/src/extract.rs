//! HTML fragment extraction for the timed-missions page.
//!
//! The page nests each mission line inside `div.news-link div.infonotice`.
//! Rather than pulling in a full HTML parser for one fixed shape, the
//! fragments are located with regexes, inner tags are stripped, and the
//! text is whitespace-collapsed.

use regex::Regex;

use vbwatch_core::MissionRecord;

use crate::filter::is_skipped;
use crate::parse::parse_fragment;

/// Extracts trimmed mission fragments from the page HTML in document order.
///
/// Only `infonotice` divs that appear under a `news-link` div are
/// considered; anything else on the page is ignored.
#[must_use]
pub fn extract_fragments(html: &str) -> Vec<String> {
    let news_link_re = Regex::new(r#"(?i)<div[^>]*class="[^"]*\bnews-link\b[^"]*""#)
        .expect("valid news-link regex");
    let infonotice_re =
        Regex::new(r#"(?is)<div[^>]*class="[^"]*\binfonotice\b[^"]*"[^>]*>(.*?)</div>"#)
            .expect("valid infonotice regex");

    let block_starts: Vec<usize> = news_link_re.find_iter(html).map(|m| m.start()).collect();

    let mut fragments = Vec::new();
    for (i, &start) in block_starts.iter().enumerate() {
        let end = block_starts.get(i + 1).copied().unwrap_or(html.len());
        for cap in infonotice_re.captures_iter(&html[start..end]) {
            if let Some(inner) = cap.get(1) {
                let text = clean_fragment(inner.as_str());
                if !text.is_empty() {
                    fragments.push(text);
                }
            }
        }
    }
    fragments
}

/// Runs the full filter + extraction pipeline over the page HTML.
#[must_use]
pub fn parse_missions(html: &str) -> Vec<MissionRecord> {
    extract_fragments(html)
        .iter()
        .filter(|fragment| !is_skipped(fragment))
        .filter_map(|fragment| parse_fragment(fragment))
        .collect()
}

/// Strips inline tags, decodes the entities the page actually uses, and
/// collapses runs of whitespace into single spaces.
fn clean_fragment(inner: &str) -> String {
    let tag_re = Regex::new(r"(?s)<[^>]+>").expect("valid tag regex");
    let without_tags = tag_re.replace_all(inner, " ");
    let decoded = decode_entities(&without_tags);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}
