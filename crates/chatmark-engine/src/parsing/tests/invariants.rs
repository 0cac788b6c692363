use crate::parsing::{
    BlockParser, InlineResolver,
    blocks::{BlockRules, ContentBlock},
    inline::InlineRules,
    snapshot,
};

fn resolver() -> InlineResolver {
    InlineResolver::new(&InlineRules::default()).unwrap()
}

#[test]
fn parsed_documents_hold_invariants() {
    let parser = BlockParser::new(&BlockRules::default()).unwrap();
    let blocks = parser.parse(
        "# **Q3** 复盘\n\n销售额 +12%，【华东】由 Kevin 负责。\n\n| 区域 | 变化 |\n|---|---|\n| 华北 | -3% |\n\n- [x] 核对\n> 建议 ** 跟进",
    );
    snapshot::invariants(&blocks, &resolver());
}

#[test]
#[should_panic(expected = "heading level out of range")]
fn heading_level_zero_is_rejected() {
    let blocks = vec![ContentBlock::Heading {
        level: 0,
        text: "x".to_string(),
    }];
    snapshot::invariants(&blocks, &resolver());
}

#[test]
#[should_panic(expected = "empty paragraph")]
fn empty_paragraph_is_rejected() {
    let blocks = vec![ContentBlock::Paragraph {
        text: String::new(),
    }];
    snapshot::invariants(&blocks, &resolver());
}
