//! Text clean-up helpers

use once_cell::sync::Lazy;
use regex::Regex;

/// Level marker preceding an attribute, e.g. `【レベル】3、`
static LEVEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"【レベル】\d+、").expect("Invalid LEVEL_RE regex"));

/// Marker for a katakana reading
static KANA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"【＠】").expect("Invalid KANA_RE regex"));

const KANA_LABEL: &str = "【カナ】";

/// Drop level markers and spell out the kana marker of an attribute line
pub fn clean_attribute(text: &str) -> String {
    let without_level = LEVEL_RE.replace_all(text, "");
    KANA_RE.replace_all(&without_level, KANA_LABEL).into_owned()
}

/// Label printed in front of the 1-based list item `index`
pub fn index_label(index: usize) -> String {
    format!("{}.", index)
}

/// Line break replacement for a list item: a newline, then enough spaces to
/// line the continuation up with the text after `label` and its space.
pub fn continuation_break(label: &str) -> String {
    format!("\n{}", " ".repeat(label.len() + 1))
}
