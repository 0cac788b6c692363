use serde::{Deserialize, Serialize};

use crate::{chart::ChartRules, parsing::blocks::BlockRules, parsing::inline::InlineRules};

/// Every lookup table the engine consults, grouped by component.
///
/// Missing sections deserialize to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub blocks: BlockRules,
    pub inline: InlineRules,
    pub chart: ChartRules,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let rules: Rules = serde_json::from_str("{}").unwrap();
        assert_eq!(rules, Rules::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let rules: Rules =
            serde_json::from_str(r#"{"inline": {"entity_names": ["Ada"]}}"#).unwrap();
        assert_eq!(rules.inline.entity_names, vec!["Ada".to_string()]);
        assert_eq!(rules.blocks, BlockRules::default());
        assert_eq!(rules.chart, ChartRules::default());
    }
}
