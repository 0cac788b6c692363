//! Syntactic repair of chart payload text.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::error::ChartError;

/// Ordered textual substitutions. Later passes rely on earlier ones: bare
/// keys are quoted last so the `+` stripping still sees `: +3.4`.
fn passes() -> &'static [(Regex, &'static str)] {
    static PASSES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PASSES.get_or_init(|| {
        [
            // leading `+` on numbers
            (r":\s*\+([0-9]+\.?[0-9]*)", ": ${1}"),
            (r",\s*\+([0-9]+\.?[0-9]*)", ", ${1}"),
            (r"\[\s*\+([0-9]+\.?[0-9]*)", "[${1}"),
            // concatenated objects
            (r"\}\s*\{", "},{"),
            // trailing commas
            (r",\s*\]", "]"),
            (r",\s*\}", "}"),
            // bare object keys
            (r"([{,]\s*)([\p{L}_$][\p{L}\p{N}_$]*)\s*:", r#"${1}"${2}":"#),
        ]
        .into_iter()
        .map(|(p, rep)| (Regex::new(p).expect("Invalid chart repair regex"), rep))
        .collect()
    })
}

/// Applies the repair passes to `text`.
pub fn repair(text: &str) -> Cow<'_, str> {
    let mut out = Cow::Borrowed(text);
    for (re, rep) in passes() {
        let replaced = match re.replace_all(&out, *rep) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        if let Some(s) = replaced {
            out = Cow::Owned(s);
        }
    }
    out
}

/// Parses chart payload text.
///
/// Valid JSON is taken as-is. Otherwise the repaired text is parsed as JSON,
/// then the original text as JSON5 (the repairs may have touched string
/// contents), then the repaired text as JSON5. If all fail the JSON error of
/// the repaired text is returned.
pub fn parse_payload(text: &str) -> Result<Value, ChartError> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }
    let repaired = repair(text);
    let json_error = match serde_json::from_str::<Value>(&repaired) {
        Ok(value) => {
            log::debug!("chart payload parsed after repair");
            return Ok(value);
        }
        Err(err) => err,
    };
    json5::from_str::<Value>(text)
        .or_else(|_| json5::from_str::<Value>(&repaired))
        .map(|value| {
            log::debug!("chart payload parsed as JSON5");
            value
        })
        .map_err(|json5_error| {
            log::debug!("chart payload rejected: JSON ({json_error}); JSON5 ({json5_error})");
            ChartError::Syntax(json_error)
        })
}
