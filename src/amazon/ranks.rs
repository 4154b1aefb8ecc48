//! "Best Sellers Rank" parsing.

use regex_lite::Regex;
use std::sync::LazyLock;

/// "(See Top 100 in ...)" links that trail a rank.
static SEE_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(See .*?\)").unwrap());

/// Splits a rank blob into `#<n> in <category>` entries, in page order.
///
/// Text before the first `#` is commentary and is dropped, as is every
/// "(See ...)" annotation. A blob without `#` yields no entries.
pub fn parse_ranks(blob: &str) -> Vec<String> {
    blob.split('#').skip(1).map(|segment| format!("#{}", strip_annotation(segment).trim())).collect()
}

fn strip_annotation(segment: &str) -> String {
    SEE_ANNOTATION.replace_all(segment, "").into_owned()
}
