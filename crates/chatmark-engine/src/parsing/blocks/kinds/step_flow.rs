use std::sync::OnceLock;

use regex::Regex;

use crate::error::RulesError;
use crate::parsing::blocks::Step;

/// Step-flow marker lines such as `Point 1: ...`, `步骤2：...`, `第三步: ...`
/// or `<keyword>: ...` for each configured step keyword.
#[derive(Debug, Clone)]
pub struct StepFlow {
    pattern: Regex,
}

/// Built-in ordinal prefixes, matched case-insensitively.
const ORDINAL_MARKERS: &str = r"Point\s*\d+|步骤\s*\d+|第\s*[一二三四五六七八九十\d]+\s*[步点项]";

impl StepFlow {
    pub fn new(keywords: &[String]) -> Result<Self, RulesError> {
        let mut alternatives = vec![ORDINAL_MARKERS.to_string()];
        for keyword in keywords {
            let keyword = keyword.trim();
            if keyword.is_empty() {
                return Err(RulesError::EmptyEntry("step_keywords"));
            }
            alternatives.push(regex::escape(keyword));
        }
        let pattern = Regex::new(&format!(
            r"(?i)^(?P<title>{})[:：]\s*(?P<text>.+)$",
            alternatives.join("|")
        ))?;
        Ok(Self { pattern })
    }

    /// Parses a marker line into a step with the marker as title.
    pub fn step(&self, trimmed: &str) -> Option<Step> {
        let caps = self.pattern.captures(trimmed)?;
        Some(Step {
            title: caps["title"].trim().to_string(),
            text: caps["text"].trim().to_string(),
        })
    }

    pub fn opens(&self, trimmed: &str) -> bool {
        self.pattern.is_match(trimmed)
    }

    /// Code-like continuation lines (a fence, or an uppercase keyword such as
    /// `SELECT ...`) keep their own line inside the step text.
    pub fn is_code_like(trimmed: &str) -> bool {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let keyword = PATTERN
            .get_or_init(|| Regex::new(r"^[A-Z]+\s+").expect("Invalid step keyword regex"));
        trimmed.starts_with("```") || keyword.is_match(trimmed)
    }

    /// Appends a continuation line to a step.
    pub fn append(step: &mut Step, trimmed: &str) {
        let sep = if Self::is_code_like(trimmed) { '\n' } else { ' ' };
        step.text.push(sep);
        step.text.push_str(trimmed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::BlockRules;
    use rstest::rstest;

    fn default_flow() -> StepFlow {
        StepFlow::new(&BlockRules::default().step_keywords).unwrap()
    }

    #[rstest]
    #[case("Point 1: load data", "Point 1", "load data")]
    #[case("point2: lower case", "point2", "lower case")]
    #[case("步骤1：准备数据", "步骤1", "准备数据")]
    #[case("第三步: 校验", "第三步", "校验")]
    #[case("第 2 项：汇总", "第 2 项", "汇总")]
    #[case("SQL生成: SELECT 1", "SQL生成", "SELECT 1")]
    fn marker_lines(#[case] line: &str, #[case] title: &str, #[case] text: &str) {
        let step = default_flow().step(line).unwrap();
        assert_eq!(step.title, title);
        assert_eq!(step.text, text);
    }

    #[rstest]
    #[case("Point: missing number")]
    #[case("步骤1：")]
    #[case("Summary: plain label")]
    fn non_marker_lines(#[case] line: &str) {
        assert!(!default_flow().opens(line));
    }

    #[test]
    fn custom_keywords_are_escaped() {
        let flow = StepFlow::new(&["Stage (a)".to_string()]).unwrap();
        assert!(flow.opens("Stage (a): go"));
        assert!(!flow.opens("Stage a: go"));
    }

    #[test]
    fn empty_keyword_is_rejected() {
        assert!(matches!(
            StepFlow::new(&["  ".to_string()]),
            Err(RulesError::EmptyEntry("step_keywords"))
        ));
    }

    #[test]
    fn code_like_lines_keep_line_breaks() {
        let mut step = Step {
            title: "SQL生成".to_string(),
            text: "query".to_string(),
        };
        StepFlow::append(&mut step, "SELECT * FROM t");
        StepFlow::append(&mut step, "where ok");
        assert_eq!(step.text, "query\nSELECT * FROM t where ok");
    }
}
