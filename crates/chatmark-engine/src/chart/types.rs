use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// The chart kinds a renderer knows how to draw.
///
/// `Table` is produced only by the fallback for unknown types whose data has
/// no plottable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartType {
    Line,
    Bar,
    Pie,
    Scatter,
    Funnel,
    BoxPlot,
    Map,
    Quadrant,
    YearComparison,
    Area,
    Table,
}

impl ChartType {
    pub const ALL: [ChartType; 11] = [
        ChartType::Line,
        ChartType::Bar,
        ChartType::Pie,
        ChartType::Scatter,
        ChartType::Funnel,
        ChartType::BoxPlot,
        ChartType::Map,
        ChartType::Quadrant,
        ChartType::YearComparison,
        ChartType::Area,
        ChartType::Table,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Pie => "pie",
            ChartType::Scatter => "scatter",
            ChartType::Funnel => "funnel",
            ChartType::BoxPlot => "box-plot",
            ChartType::Map => "map",
            ChartType::Quadrant => "quadrant",
            ChartType::YearComparison => "year-comparison",
            ChartType::Area => "area",
            ChartType::Table => "table",
        }
    }

    /// Looks up a type name, accepting the `-chart` suffixed aliases
    /// (`bar-chart`, ...). Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<ChartType> {
        let name = name.trim().to_ascii_lowercase();
        let base = name.strip_suffix("-chart").unwrap_or(&name);
        let t = ChartType::ALL.into_iter().find(|t| t.as_str() == base)?;
        // only the plain plotting types take the suffix
        let aliased = base.len() != name.len();
        if aliased
            && matches!(t, ChartType::BoxPlot | ChartType::YearComparison | ChartType::Table)
        {
            return None;
        }
        Some(t)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One plotted series of a line or area chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesKey {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Any other fields given for the series, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SeriesKey {
    pub fn new(key: impl Into<String>, name: impl Into<String>, color: Option<String>) -> Self {
        Self {
            key: key.into(),
            name: Some(name.into()),
            color,
            extra: Map::new(),
        }
    }

    /// Reads a series from a bare key string or a `{key, name?, color?}` object.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(key) if !key.is_empty() => Some(Self {
                key: key.clone(),
                name: None,
                color: None,
                extra: Map::new(),
            }),
            Value::Object(obj) => {
                let mut extra = obj.clone();
                let key = match extra.remove("key") {
                    Some(Value::String(k)) if !k.is_empty() => k,
                    _ => return None,
                };
                let name = take_string(&mut extra, "name");
                let color = take_string(&mut extra, "color");
                Some(Self {
                    key,
                    name,
                    color,
                    extra,
                })
            }
            _ => None,
        }
    }
}

fn take_string(obj: &mut Map<String, Value>, field: &str) -> Option<String> {
    match obj.remove(field)? {
        Value::String(s) => Some(s),
        other => {
            obj.insert(field.to_string(), other);
            None
        }
    }
}

/// A fully specified chart.
///
/// Only produced by normalization, so the keys its type needs are always
/// present. Serializes to the flat camelCase shape renderers consume, with
/// unrecognised input fields carried through.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub(crate) chart_type: ChartType,
    pub(crate) data: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) x_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) y_key: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) y_keys: Vec<SeriesKey>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) summary: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) current_year: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) last_year: Option<Value>,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}

impl ChartSpec {
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn data(&self) -> &[Value] {
        &self.data
    }

    pub fn x_key(&self) -> Option<&str> {
        self.x_key.as_deref()
    }

    pub fn y_key(&self) -> Option<&str> {
        self.y_key.as_deref()
    }

    pub fn y_keys(&self) -> &[SeriesKey] {
        &self.y_keys
    }

    /// Column order of a `Table` fallback.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn summary(&self) -> Option<&Value> {
        self.summary.as_ref()
    }

    pub fn current_year(&self) -> Option<&Value> {
        self.current_year.as_ref()
    }

    pub fn last_year(&self) -> Option<&Value> {
        self.last_year.as_ref()
    }

    /// An input field the normalizer does not interpret (`showPercent`,
    /// `quadrants`, ...).
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Raw chart input: text gets syntactic repair first, a value is completed
/// directly.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartInput {
    Text(String),
    Value(Value),
}

impl From<&str> for ChartInput {
    fn from(s: &str) -> Self {
        ChartInput::Text(s.to_string())
    }
}

impl From<String> for ChartInput {
    fn from(s: String) -> Self {
        ChartInput::Text(s)
    }
}

impl From<Value> for ChartInput {
    fn from(v: Value) -> Self {
        ChartInput::Value(v)
    }
}
