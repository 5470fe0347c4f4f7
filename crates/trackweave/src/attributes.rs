use regex::Regex;
use std::{collections::BTreeMap, sync::LazyLock};

use crate::error::{TrackweaveError, TrackweaveResult};

/// Attribute name (always lowercase) to unquoted, trimmed value.
pub type Attributes = BTreeMap<String, String>;

static KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*([^=]+?)\s*=\s*").unwrap());
static QUOTED_VALUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"\s*([^"]*?)\s*"\s*(?:,\s*|$)"#).unwrap());
static PLAIN_VALUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*(?:,\s*|$)").unwrap());

/// Parses the text after a tag name, e.g. `TYPE=AUDIO,GROUP-ID="a1",URI="a.m3u8"`.
///
/// Values may be quoted (`KEY="a, b"`) or plain (`KEY=VALUE`). An empty input yields an
/// empty map, which callers treat as a line to skip.
pub fn parse_attribute_list(text: &str) -> TrackweaveResult<Attributes> {
    let mut attributes = Attributes::new();
    let mut rest = text.trim();

    while !rest.is_empty() {
        let key = KEY_REGEX
            .captures(rest)
            .ok_or_else(|| TrackweaveError::ParseError(text.to_string()))?;
        let name = key[1].to_lowercase();
        rest = &rest[key[0].len()..];

        let value_regex = if rest.starts_with('"') {
            &QUOTED_VALUE_REGEX
        } else {
            &PLAIN_VALUE_REGEX
        };
        let value = value_regex
            .captures(rest)
            .ok_or_else(|| TrackweaveError::ParseError(text.to_string()))?;
        attributes.insert(name, value[1].to_string());
        rest = &rest[value[0].len()..];
    }

    Ok(attributes)
}
