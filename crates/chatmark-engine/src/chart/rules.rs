use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Candidate key lists, labels and palette used to complete chart specs.
///
/// Lists are ordered: the first matching candidate wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartRules {
    /// Category axis candidates for every type except scatter and quadrant.
    pub x_key_candidates: Vec<String>,
    /// Keys never picked by the "first non-numeric field" x fallback.
    pub x_fallback_excluded: Vec<String>,
    /// Numeric series candidates for line, area and bar charts.
    pub y_key_candidates: Vec<String>,
    pub scatter_x_candidates: Vec<String>,
    pub scatter_y_candidates: Vec<String>,
    /// Display names for generated series, by key.
    pub series_labels: BTreeMap<String, String>,
    /// Prefix of generated names for exploded `values` arrays (`系列1`, ...).
    pub series_name_prefix: String,
    /// Display name of a single numeric `values` series.
    pub values_label: String,
    pub palette: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ChartRules {
    fn default() -> Self {
        Self {
            x_key_candidates: strings(&[
                "date", "month", "time", "name", "region", "category", "x", "label", "key", "xAxis",
            ]),
            x_fallback_excluded: strings(&["value", "y", "yAxis"]),
            y_key_candidates: strings(&["value", "sales", "amount", "count", "y", "data"]),
            scatter_x_candidates: strings(&[
                "翻台率",
                "turnoverRate",
                "坪效",
                "salesPerSqm",
                "客单价",
                "avgOrderValue",
                "x",
                "xAxis",
            ]),
            scatter_y_candidates: strings(&[
                "客单价",
                "avgOrderValue",
                "翻台率",
                "turnoverRate",
                "坪效",
                "salesPerSqm",
                "y",
                "yAxis",
                "value",
                "sales",
                "amount",
            ]),
            series_labels: [("value", "数值"), ("sales", "销售额"), ("amount", "金额")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            series_name_prefix: "系列".to_string(),
            values_label: "数值".to_string(),
            palette: strings(&[
                "#3370FF", "#34C724", "#FF8800", "#7B61FF", "#19B9E3", "#F54A45",
            ]),
        }
    }
}

impl ChartRules {
    /// Display name of a series key; unknown keys are shown as-is.
    pub fn label(&self, key: &str) -> String {
        self.series_labels
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Palette color for the `index`-th series, cycling.
    pub fn color(&self, index: usize) -> Option<String> {
        if self.palette.is_empty() {
            return None;
        }
        Some(self.palette[index % self.palette.len()].clone())
    }
}
