use serde::Serialize;

/// One item of a bullet or ordinal list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub text: String,
    /// Indentation depth, 0 for top-level items.
    pub level: usize,
}

/// One `- [ ]` / `- [x]` line of a checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub checked: bool,
    pub text: String,
}

/// One step of a step-flow run: `title` is the marker before the colon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub title: String,
    pub text: String,
}

/// Tone of a block quote, derived from keywords in its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteVariant {
    Info,
    Tip,
    Warning,
    Success,
}

/// A block-level element of an answer.
///
/// Text fields keep raw inline markers (`**`, `【】`, links, ...); resolving
/// them is the inline resolver's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentBlock {
    Paragraph {
        text: String,
    },
    Heading {
        level: u8,
        text: String,
    },
    List {
        items: Vec<ListItem>,
        ordered: bool,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Code {
        language: String,
        text: String,
    },
    Quote {
        text: String,
        variant: QuoteVariant,
    },
    Divider,
    Checklist {
        items: Vec<ChecklistItem>,
    },
    StepFlow {
        steps: Vec<Step>,
    },
}

impl ContentBlock {
    /// Short lowercase name of the block kind, as used in serialized output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::List { .. } => "list",
            ContentBlock::Table { .. } => "table",
            ContentBlock::Code { .. } => "code",
            ContentBlock::Quote { .. } => "quote",
            ContentBlock::Divider => "divider",
            ContentBlock::Checklist { .. } => "checklist",
            ContentBlock::StepFlow { .. } => "step-flow",
        }
    }

    /// The text fragments a renderer passes to the inline resolver, in
    /// reading order. Code blocks and dividers have none.
    pub fn inline_fragments(&self) -> Vec<&str> {
        match self {
            ContentBlock::Paragraph { text }
            | ContentBlock::Heading { text, .. }
            | ContentBlock::Quote { text, .. } => vec![text.as_str()],
            ContentBlock::List { items, .. } => items.iter().map(|i| i.text.as_str()).collect(),
            ContentBlock::Table { headers, rows } => headers
                .iter()
                .chain(rows.iter().flatten())
                .map(String::as_str)
                .collect(),
            ContentBlock::Checklist { items } => items.iter().map(|i| i.text.as_str()).collect(),
            ContentBlock::StepFlow { steps } => steps
                .iter()
                .flat_map(|s| [s.title.as_str(), s.text.as_str()])
                .collect(),
            ContentBlock::Code { .. } | ContentBlock::Divider => vec![],
        }
    }

    /// Body of a `data` or `chart` code fence, which carries a chart payload.
    pub fn chart_payload(&self) -> Option<&str> {
        match self {
            ContentBlock::Code { language, text }
                if language.eq_ignore_ascii_case("data")
                    || language.eq_ignore_ascii_case("chart") =>
            {
                Some(text.as_str())
            }
            _ => None,
        }
    }
}
