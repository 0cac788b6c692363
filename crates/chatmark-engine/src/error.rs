use crate::chart::ChartType;

/// Why a chart payload could not be normalized.
///
/// Callers usually only need `Option<ChartSpec>`; the variants exist so a
/// renderer can say *which* configuration problem to show the user.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("chart payload is not valid JSON after repair: {0}")]
    Syntax(#[source] serde_json::Error),
    #[error("chart payload must be a JSON object")]
    NotAnObject,
    #[error("chart data is missing or empty")]
    MissingData,
    #[error("year-comparison chart needs both currentYear and lastYear")]
    MissingYearComparison,
    #[error("could not determine {field} for {chart_type} chart")]
    UnresolvedKey {
        chart_type: ChartType,
        field: &'static str,
    },
    #[error("box-plot data needs min, q1, median, q3 and max")]
    BoxPlotStats,
}

/// An injected vocabulary that cannot be used to build a parser.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("empty {0} entry in rules")]
    EmptyEntry(&'static str),
    #[error("invalid pattern built from rules: {0}")]
    Pattern(#[from] regex::Error),
}
