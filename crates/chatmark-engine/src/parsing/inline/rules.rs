use serde::{Deserialize, Serialize};

/// Vocabulary for the inline resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineRules {
    /// Names rendered as entity chips. Matching is case-sensitive, so list
    /// every casing that should match.
    pub entity_names: Vec<String>,
}

const ENTITY_NAMES: &[&str] = &[
    "Alisa",
    "alisa",
    "Nora",
    "nora",
    "归因哥",
    "可视化小王",
    "小王",
    "Emily",
    "emily",
    "Lisa",
    "lisa",
    "预测君",
    "Kevin",
    "kevin",
    "运营小美",
    "小美",
    "数据卫士",
    "福尔摩斯",
    "水晶球大师",
    "Excel忍者",
    "焦虑分析师",
    "Chill哥",
    "MC数据",
    "时光旅人",
    "数据大厨",
    "数据八卦王",
    "百胜专家",
    "百胜",
];

impl Default for InlineRules {
    fn default() -> Self {
        Self {
            entity_names: ENTITY_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
