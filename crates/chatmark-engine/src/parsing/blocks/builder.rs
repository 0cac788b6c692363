use super::{
    BlockRules,
    classify::LineClass,
    kinds::{BlockQuote, Checklist, CodeFence, List, Paragraph, StepFlow, Table},
    open::{BlockOpen, try_open},
    types::{ChecklistItem, ContentBlock, ListItem, Step},
};

#[derive(Debug)]
enum OpenState {
    None,
    Paragraph {
        text: String,
    },
    Fence {
        language: String,
        body: Vec<String>,
    },
    Quote {
        lines: Vec<String>,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        awaiting_separator: bool,
    },
    Checklist {
        items: Vec<ChecklistItem>,
    },
    StepFlow {
        steps: Vec<Step>,
    },
    List {
        ordered: bool,
        items: Vec<ListItem>,
    },
}

/// Phase 2 of block parsing: a forward state machine fed one classified
/// line at a time (plus one line of lookahead).
pub struct BlockBuilder<'r> {
    rules: &'r BlockRules,
    step_flow: &'r StepFlow,
    state: OpenState,
    out: Vec<ContentBlock>,
}

impl<'r> BlockBuilder<'r> {
    pub fn new(rules: &'r BlockRules, step_flow: &'r StepFlow) -> Self {
        Self {
            rules,
            step_flow,
            state: OpenState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass, next: Option<&LineClass>) {
        if self.continue_open(c, next) {
            return;
        }
        self.dispatch(c, next);
    }

    pub fn finish(mut self) -> Vec<ContentBlock> {
        // EOF flush; an unterminated fence still becomes a code block
        self.flush();
        self.out
    }

    /// Feeds `c` to the open block. Returns `true` if the line was consumed;
    /// `false` means the open block was closed and `c` must be dispatched.
    fn continue_open(&mut self, c: &LineClass, next: Option<&LineClass>) -> bool {
        match &mut self.state {
            OpenState::None => false,
            OpenState::Fence { body, .. } => {
                if CodeFence::closes(c.trimmed) {
                    self.flush();
                } else {
                    body.push(c.raw.to_string());
                }
                true
            }
            OpenState::Quote { lines } => {
                if BlockQuote::is_quote(c.trimmed) {
                    lines.push(BlockQuote::strip_prefix(c.trimmed).to_string());
                    true
                } else {
                    self.flush();
                    false
                }
            }
            OpenState::Table {
                rows,
                awaiting_separator,
                ..
            } => {
                if *awaiting_separator {
                    *awaiting_separator = false;
                    true
                } else if Table::continues(c.raw) {
                    let row = Table::split_row(c.trimmed);
                    if !row.is_empty() {
                        rows.push(row);
                    }
                    true
                } else {
                    self.flush();
                    false
                }
            }
            OpenState::Checklist { items } => {
                if let Some(item) = Checklist::item(c.trimmed) {
                    items.push(item);
                    true
                } else {
                    // a blank line is consumed with the list, anything else is redispatched
                    self.flush();
                    c.is_blank
                }
            }
            OpenState::StepFlow { steps } => {
                if c.is_blank {
                    self.flush();
                } else if let Some(step) = self.step_flow.step(c.trimmed) {
                    steps.push(step);
                } else if let Some(last) = steps.last_mut() {
                    StepFlow::append(last, c.trimmed);
                }
                true
            }
            OpenState::List { items, .. } => {
                if c.is_blank {
                    self.flush();
                } else if let Some(item) = List::item(c) {
                    items.push(item);
                } else if let Some(last) = items.last_mut() {
                    last.text.push(' ');
                    last.text.push_str(c.trimmed);
                }
                true
            }
            OpenState::Paragraph { text } => {
                if c.is_blank {
                    self.flush();
                    true
                } else if try_open(c, next, self.step_flow).is_some() {
                    self.flush();
                    false
                } else {
                    Paragraph::append(text, c.trimmed);
                    true
                }
            }
        }
    }

    fn dispatch(&mut self, c: &LineClass, next: Option<&LineClass>) {
        if c.is_blank {
            return;
        }
        let Some(open) = try_open(c, next, self.step_flow) else {
            log::trace!("line {}: paragraph", c.index);
            let mut text = String::new();
            Paragraph::append(&mut text, c.trimmed);
            self.state = OpenState::Paragraph { text };
            return;
        };
        log::trace!("line {}: {:?}", c.index, open);

        self.state = match open {
            BlockOpen::Fence { language } => OpenState::Fence {
                language,
                body: vec![],
            },
            BlockOpen::Quote => OpenState::Quote {
                lines: vec![BlockQuote::strip_prefix(c.trimmed).to_string()],
            },
            BlockOpen::Heading { level, text } => {
                self.out.push(ContentBlock::Heading { level, text });
                OpenState::None
            }
            BlockOpen::Divider => {
                self.out.push(ContentBlock::Divider);
                OpenState::None
            }
            BlockOpen::Table => OpenState::Table {
                headers: Table::split_row(c.trimmed),
                rows: vec![],
                awaiting_separator: true,
            },
            BlockOpen::Checklist => OpenState::Checklist {
                items: Checklist::item(c.trimmed).into_iter().collect(),
            },
            BlockOpen::StepFlow => OpenState::StepFlow {
                steps: self.step_flow.step(c.trimmed).into_iter().collect(),
            },
            BlockOpen::List { ordered } => OpenState::List {
                ordered,
                items: List::item(c).into_iter().collect(),
            },
        };
    }

    fn flush(&mut self) {
        let block = match std::mem::replace(&mut self.state, OpenState::None) {
            OpenState::None => return,
            OpenState::Paragraph { text } => ContentBlock::Paragraph { text },
            OpenState::Fence { language, body } => ContentBlock::Code {
                language,
                text: body.join("\n"),
            },
            OpenState::Quote { lines } => {
                let text = lines.join(" ");
                let variant = BlockQuote::variant(&text, self.rules);
                ContentBlock::Quote { text, variant }
            }
            OpenState::Table { headers, rows, .. } => ContentBlock::Table { headers, rows },
            OpenState::Checklist { items } => ContentBlock::Checklist { items },
            OpenState::StepFlow { steps } => ContentBlock::StepFlow { steps },
            OpenState::List { ordered, items } => ContentBlock::List { items, ordered },
        };
        self.out.push(block);
    }
}
