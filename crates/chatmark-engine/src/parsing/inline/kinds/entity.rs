use crate::error::RulesError;
use crate::parsing::inline::{InlineSpan, SpanKind, cursor::Cursor};

/// Known entity names, matched longest first.
#[derive(Debug, Clone)]
pub struct EntityDictionary {
    names: Vec<String>,
}

impl EntityDictionary {
    pub fn new(names: &[String]) -> Result<Self, RulesError> {
        let mut sorted: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if name.is_empty() {
                return Err(RulesError::EmptyEntry("entity_names"));
            }
            if !sorted.contains(name) {
                sorted.push(name.clone());
            }
        }
        // stable: equal-length names keep their configured order
        sorted.sort_by_key(|n| std::cmp::Reverse(n.chars().count()));
        Ok(Self { names: sorted })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Leftmost scan; at each position the longest name wins and scanning
    /// resumes after it.
    pub fn find(&self, text: &str) -> Vec<InlineSpan> {
        let mut cur = Cursor::new(text);
        let mut out = vec![];
        while !cur.eof() {
            if let Some(name) = self.names.iter().find(|n| cur.starts_with(n)) {
                let start = cur.pos();
                cur.bump_n(name.len());
                out.push(InlineSpan {
                    start,
                    end: cur.pos(),
                    kind: SpanKind::Entity { name: name.clone() },
                });
                continue;
            }
            cur.bump();
        }
        out
    }
}
