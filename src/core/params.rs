//! Free-text `key=value` parameter extraction.

use crate::models::param_key::ParamKey;
use crate::utils::text::sanitize_field;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// A key must open the text or follow whitespace. The value alternatives are
/// tried left to right: double-quoted, single-quoted, bare token.
static PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|\s)(кайт|from|to)\s*=\s*(?:"([^"]*)"|'([^']*)'|(\S+))"#)
        .expect("parameter pattern is valid")
});

/// Recognized parameters found in a command, last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<ParamKey, String>,
}

impl Params {
    pub fn get(&self, key: ParamKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys from `required` that are absent or empty, in the order given.
    pub fn missing(&self, required: &[ParamKey]) -> Vec<ParamKey> {
        required
            .iter()
            .copied()
            .filter(|k| self.get(*k).is_none_or(str::is_empty))
            .collect()
    }
}

/// Extract `кайт`, `from` and `to` from free text.
pub fn parse_params(text: &str) -> Params {
    let mut values = BTreeMap::new();

    for caps in PARAM_RE.captures_iter(text) {
        let Some(key) = caps.get(1).and_then(|m| ParamKey::from_key(m.as_str())) else {
            continue;
        };
        let raw = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str())
            .unwrap_or_default();

        values.insert(key, sanitize_field(raw));
    }

    Params { values }
}
