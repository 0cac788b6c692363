use serde::{Deserialize, Serialize};

/// Keyword tables used while segmenting blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockRules {
    /// Quote text containing any of these is a [`QuoteVariant::Tip`](super::QuoteVariant::Tip).
    pub tip_keywords: Vec<String>,
    /// Checked after tips.
    pub warning_keywords: Vec<String>,
    /// Checked after warnings.
    pub success_keywords: Vec<String>,
    /// Bare prefixes (besides `Point N`, `步骤N`, `第N步`) that open a step
    /// when followed by `:` or `：`.
    pub step_keywords: Vec<String>,
}

impl Default for BlockRules {
    fn default() -> Self {
        fn owned(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| (*w).to_string()).collect()
        }
        Self {
            tip_keywords: owned(&["建议", "提示"]),
            warning_keywords: owned(&["警告", "注意", "风险"]),
            success_keywords: owned(&["成功", "完成"]),
            step_keywords: owned(&[
                "实体抽取",
                "SQL生成",
                "质量保障",
                "语法验证",
                "语义验证",
                "性能验证",
                "安全验证",
                "权限验证",
            ]),
        }
    }
}
