use serde::Serialize;

use crate::parsing::{
    blocks::ContentBlock,
    inline::{InlineResolver, InlineSegment},
};

#[derive(Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Serialize)]
pub struct BlockSnap {
    pub kind: String,
    pub fragments: Vec<FragmentSnap>,
}

#[derive(Serialize)]
pub struct FragmentSnap {
    pub text: String,
    pub inline: Vec<InlineSnap>,
}

#[derive(Serialize)]
pub struct InlineSnap {
    pub kind: String,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

fn block_kind(b: &ContentBlock) -> String {
    match b {
        ContentBlock::Heading { level, .. } => format!("Heading({level})"),
        ContentBlock::List { items, ordered } => {
            let levels: Vec<String> = items.iter().map(|i| i.level.to_string()).collect();
            let marker = if *ordered { "ordered" } else { "bullet" };
            format!("List({marker}; {})", levels.join(","))
        }
        ContentBlock::Table { headers, rows } => {
            format!("Table({}x{})", rows.len(), headers.len())
        }
        ContentBlock::Code { language, .. } => format!("Code({language})"),
        ContentBlock::Quote { variant, .. } => format!("Quote({variant:?})"),
        ContentBlock::Checklist { items } => {
            let marks: String = items
                .iter()
                .map(|i| if i.checked { 'x' } else { '-' })
                .collect();
            format!("Checklist({marks})")
        }
        ContentBlock::StepFlow { steps } => format!("StepFlow({})", steps.len()),
        ContentBlock::Paragraph { .. } => "Paragraph".to_string(),
        ContentBlock::Divider => "Divider".to_string(),
    }
}

fn inline_snap(fragment: &str, seg: &InlineSegment) -> InlineSnap {
    match seg {
        InlineSegment::Text(t) => InlineSnap {
            kind: "text".into(),
            start: t.start,
            end: t.end,
            text: t.text.clone(),
        },
        InlineSegment::Span(s) => InlineSnap {
            kind: s.kind_name().into(),
            start: s.start,
            end: s.end,
            text: fragment[s.start..s.end].to_string(),
        },
    }
}

/// Normalizes blocks, resolving every inline fragment with `resolver`.
pub fn normalize(blocks: &[ContentBlock], resolver: &InlineResolver) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| {
            let fragments = b
                .inline_fragments()
                .into_iter()
                .map(|fragment| FragmentSnap {
                    text: fragment.to_string(),
                    inline: resolver
                        .segments(fragment)
                        .iter()
                        .map(|seg| inline_snap(fragment, seg))
                        .collect(),
                })
                .collect();
            BlockSnap {
                kind: block_kind(b),
                fragments,
            }
        })
        .collect();

    Snap { blocks }
}
