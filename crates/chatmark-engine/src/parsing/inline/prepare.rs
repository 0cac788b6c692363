use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

fn passes() -> &'static [(Regex, &'static str)] {
    static PASSES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PASSES.get_or_init(|| {
        [
            (r"(?i)<br\s*/?>", "\n"),
            (r"(?m)^#{1,6}\s+", ""),
            (r"(?m)^#{1,6}\s*\*\*", ""),
            (r"(?m)^[ \t]*\*\*[ \t]*$", ""),
        ]
        .into_iter()
        .map(|(p, rep)| (Regex::new(p).expect("Invalid inline preparation regex"), rep))
        .collect()
    })
}

/// Cleans a fragment before inline resolution: `<br>` tags become newlines,
/// leading heading markers are removed per line, and lines holding only
/// `**` are emptied. Span offsets refer to the returned text.
pub fn prepare_inline_text(text: &str) -> Cow<'_, str> {
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
