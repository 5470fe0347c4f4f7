use regex::Regex;
use std::{collections::HashMap, sync::LazyLock};

use crate::error::VimeoResult;

static ATTRIBUTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\S+)="([^"]*)""#).unwrap());

/// Collects the double-quoted attributes of every `<tag ...>` in `html`.
///
/// Values are entity-decoded, so `href="a?b=1&amp;c=2"` becomes `a?b=1&c=2`.
pub fn find_tags(tag: &str, html: &str) -> VimeoResult<Vec<HashMap<String, String>>> {
    let tag_regex = Regex::new(&format!(r"<{}\s[^>]+>", regex::escape(tag)))?;

    Ok(tag_regex
        .find_iter(html)
        .map(|element| {
            ATTRIBUTE_REGEX
                .captures_iter(element.as_str())
                .map(|cap| {
                    (
                        cap[1].to_string(),
                        html_escape::decode_html_entities(&cap[2]).to_string(),
                    )
                })
                .collect()
        })
        .collect())
}
