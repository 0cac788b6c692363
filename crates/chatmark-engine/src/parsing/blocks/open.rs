use super::{
    classify::LineClass,
    kinds::{BlockQuote, Checklist, CodeFence, Divider, Heading, List, StepFlow, Table},
};

/// A block-start decision for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    Fence { language: String },
    Quote,
    Heading { level: u8, text: String },
    Divider,
    Table,
    Checklist,
    StepFlow,
    List { ordered: bool },
}

/// Decides whether `line` opens a block. `next` is the following line, used
/// by tables to look for their separator.
///
/// Precedence matters: tables are tried before lists and step markers before
/// lists, since both can start with plain word characters.
pub fn try_open(
    line: &LineClass,
    next: Option<&LineClass>,
    step_flow: &StepFlow,
) -> Option<BlockOpen> {
    let t = line.trimmed;
    if t.is_empty() {
        return None;
    }
    if let Some(language) = CodeFence::sig(t) {
        return Some(BlockOpen::Fence {
            language: language.to_string(),
        });
    }
    if BlockQuote::is_quote(t) {
        return Some(BlockOpen::Quote);
    }
    if let Some((level, text)) = Heading::parse(t) {
        return Some(BlockOpen::Heading { level, text });
    }
    if Divider::is_divider(t) {
        return Some(BlockOpen::Divider);
    }
    if Table::opens(t, next.map(|n| n.raw)) {
        return Some(BlockOpen::Table);
    }
    if Checklist::opens(t) {
        return Some(BlockOpen::Checklist);
    }
    if step_flow.opens(t) {
        return Some(BlockOpen::StepFlow);
    }
    if let Some(ordered) = List::opens(t) {
        return Some(BlockOpen::List { ordered });
    }
    None
}
