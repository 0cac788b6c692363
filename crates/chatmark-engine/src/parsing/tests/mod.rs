//! Block parser behaviour tests.
//!
//! Fixture documents and their snapshots live in the crate's `tests/`
//! directory; these tests pin down individual termination rules.

mod invariants;

use pretty_assertions::assert_eq;

use crate::error::RulesError;
use crate::parsing::{
    BlockParser, parse_blocks,
    blocks::{BlockRules, ChecklistItem, ContentBlock, ListItem, QuoteVariant, Step},
};

fn para(text: &str) -> ContentBlock {
    ContentBlock::Paragraph {
        text: text.to_string(),
    }
}

fn item(text: &str, level: usize) -> ListItem {
    ListItem {
        text: text.to_string(),
        level,
    }
}

fn step(title: &str, text: &str) -> Step {
    Step {
        title: title.to_string(),
        text: text.to_string(),
    }
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[test]
fn table_round_trip() {
    assert_eq!(
        parse_blocks("|A|B|\n|-|-|\n|1|2|"),
        vec![ContentBlock::Table {
            headers: row(&["A", "B"]),
            rows: vec![row(&["1", "2"])],
        }]
    );
}

#[test]
fn table_without_body_rows() {
    assert_eq!(
        parse_blocks("intro\n| A | B |\n|---|---|"),
        vec![
            para("intro"),
            ContentBlock::Table {
                headers: row(&["A", "B"]),
                rows: vec![],
            }
        ]
    );
}

#[test]
fn table_ends_at_line_without_pipe() {
    assert_eq!(
        parse_blocks("|A|\n|-|\n|1|\ntext"),
        vec![
            ContentBlock::Table {
                headers: row(&["A"]),
                rows: vec![row(&["1"])],
            },
            para("text"),
        ]
    );
}

#[test]
fn table_drops_rows_without_cells() {
    let blocks = parse_blocks("|A|B|\n|-|-|\n| | |\n|1|2|");
    assert_eq!(
        blocks,
        vec![ContentBlock::Table {
            headers: row(&["A", "B"]),
            rows: vec![row(&["1", "2"])],
        }]
    );
}

#[test]
fn pipe_without_separator_stays_in_paragraph() {
    assert_eq!(parse_blocks("a\nb | c"), vec![para("a b | c")]);
}

#[test]
fn list_nesting_levels() {
    assert_eq!(
        parse_blocks("- a\n  - b\n    - c"),
        vec![ContentBlock::List {
            items: vec![item("a", 0), item("b", 1), item("c", 2)],
            ordered: false,
        }]
    );
}

#[test]
fn tab_indented_list() {
    assert_eq!(
        parse_blocks("* a\n\t* b\n\t\t* c"),
        vec![ContentBlock::List {
            items: vec![item("a", 0), item("b", 1), item("c", 2)],
            ordered: false,
        }]
    );
}

#[test]
fn ordered_list() {
    assert_eq!(
        parse_blocks("1. one\n2. two"),
        vec![ContentBlock::List {
            items: vec![item("one", 0), item("two", 0)],
            ordered: true,
        }]
    );
}

#[test]
fn list_continuation_line_joins_previous_item() {
    assert_eq!(
        parse_blocks("- a\n  continued\n- b"),
        vec![ContentBlock::List {
            items: vec![item("a continued", 0), item("b", 0)],
            ordered: false,
        }]
    );
}

#[test]
fn blank_line_ends_list() {
    let blocks = parse_blocks("- a\n\n- b");
    assert_eq!(blocks.len(), 2);
    assert!(blocks.iter().all(|b| b.kind_name() == "list"));
}

#[test]
fn checklist_parsing() {
    assert_eq!(
        parse_blocks("- [x] done\n- [ ] todo"),
        vec![ContentBlock::Checklist {
            items: vec![
                ChecklistItem {
                    checked: true,
                    text: "done".to_string(),
                },
                ChecklistItem {
                    checked: false,
                    text: "todo".to_string(),
                },
            ],
        }]
    );
}

#[test]
fn checklist_then_plain_bullet() {
    let blocks = parse_blocks("- [ ] a\n- b");
    let kinds: Vec<&str> = blocks.iter().map(ContentBlock::kind_name).collect();
    assert_eq!(kinds, vec!["checklist", "list"]);
}

#[test]
fn code_fence_keeps_raw_lines() {
    assert_eq!(
        parse_blocks("```sql\nSELECT 1;\n  - not a list\n```\nafter"),
        vec![
            ContentBlock::Code {
                language: "sql".to_string(),
                text: "SELECT 1;\n  - not a list".to_string(),
            },
            para("after"),
        ]
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    assert_eq!(
        parse_blocks("```\nx\n# not a heading"),
        vec![ContentBlock::Code {
            language: String::new(),
            text: "x\n# not a heading".to_string(),
        }]
    );
}

#[test]
fn chart_fence_exposes_payload() {
    let blocks = parse_blocks("```chart\n{\"type\":\"bar\"}\n```");
    assert_eq!(blocks[0].chart_payload(), Some("{\"type\":\"bar\"}"));
    let blocks = parse_blocks("```json\n{}\n```");
    assert_eq!(blocks[0].chart_payload(), None);
}

#[test]
fn quote_lines_join_and_classify() {
    assert_eq!(
        parse_blocks("> 建议\n> 关注门店\nnext"),
        vec![
            ContentBlock::Quote {
                text: "建议 关注门店".to_string(),
                variant: QuoteVariant::Tip,
            },
            para("next"),
        ]
    );
}

#[test]
fn plain_quote_is_info() {
    assert_eq!(
        parse_blocks(">just a note"),
        vec![ContentBlock::Quote {
            text: "just a note".to_string(),
            variant: QuoteVariant::Info,
        }]
    );
}

#[test]
fn headings_and_dividers() {
    assert_eq!(
        parse_blocks("# T\n---\n## **S**\n━━━"),
        vec![
            ContentBlock::Heading {
                level: 1,
                text: "T".to_string(),
            },
            ContentBlock::Divider,
            ContentBlock::Heading {
                level: 2,
                text: "S".to_string(),
            },
            ContentBlock::Divider,
        ]
    );
}

#[test]
fn paragraph_lines_join_until_blank() {
    assert_eq!(
        parse_blocks("line one\n  line two\n\n\nline three"),
        vec![para("line one line two"), para("line three")]
    );
}

#[test]
fn paragraph_ends_at_block_opener() {
    let blocks = parse_blocks("intro\n- a\n\ntext\n# H\ntext\n> q");
    let kinds: Vec<&str> = blocks.iter().map(ContentBlock::kind_name).collect();
    assert_eq!(
        kinds,
        vec!["paragraph", "list", "paragraph", "heading", "paragraph", "quote"]
    );
}

#[test]
fn step_flow_collects_steps() {
    assert_eq!(
        parse_blocks("Point 1: load\nSELECT * FROM t\nmore\nPoint 2: check\n\nafter"),
        vec![
            ContentBlock::StepFlow {
                steps: vec![
                    step("Point 1", "load\nSELECT * FROM t more"),
                    step("Point 2", "check"),
                ],
            },
            para("after"),
        ]
    );
}

#[test]
fn step_flow_with_domain_keywords() {
    assert_eq!(
        parse_blocks("实体抽取：门店、日期\nSQL生成: 生成查询"),
        vec![ContentBlock::StepFlow {
            steps: vec![step("实体抽取", "门店、日期"), step("SQL生成", "生成查询")],
        }]
    );
}

#[test]
fn custom_step_keywords_replace_defaults() {
    let rules = BlockRules {
        step_keywords: vec!["Stage".to_string()],
        ..BlockRules::default()
    };
    let parser = BlockParser::new(&rules).unwrap();
    assert_eq!(
        parser.parse("Stage: go"),
        vec![ContentBlock::StepFlow {
            steps: vec![step("Stage", "go")],
        }]
    );
    assert_eq!(parser.parse("SQL生成: x"), vec![para("SQL生成: x")]);
}

#[test]
fn empty_step_keyword_is_an_error() {
    let rules = BlockRules {
        step_keywords: vec![String::new()],
        ..BlockRules::default()
    };
    assert!(matches!(
        BlockParser::new(&rules),
        Err(RulesError::EmptyEntry("step_keywords"))
    ));
}

#[test]
fn directive_tags_stay_literal() {
    let text = r#"结果如下 [chart:{"type":"bar","data":[]}]"#;
    assert_eq!(parse_blocks(text), vec![para(text)]);
}

#[test]
fn blank_input_has_no_blocks() {
    assert!(parse_blocks("").is_empty());
    assert!(parse_blocks("\n  \n\t\n").is_empty());
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        parse_blocks("# T\r\nbody\r\n"),
        vec![
            ContentBlock::Heading {
                level: 1,
                text: "T".to_string(),
            },
            para("body"),
        ]
    );
}

#[test]
fn parsing_is_idempotent() {
    let text = "# 概览\n\n| 门店 | 销售额 |\n|---|---|\n| A | 100 |\n\n- a\n  - b\n\n> 注意风险";
    assert_eq!(parse_blocks(text), parse_blocks(text));
}
