//! Semantic completion of a parsed chart payload.
//!
//! Each missing field has one ordered list of rules, evaluated top to bottom;
//! the first rule that yields a value wins. Fields given by the payload are
//! never overwritten.

use serde_json::{Map, Value};

use super::{
    ChartRules,
    types::{ChartSpec, ChartType, SeriesKey},
};
use crate::error::ChartError;

type Record = Map<String, Value>;

/// A chart payload whose keys may still be missing.
///
/// Promoted to a [`ChartSpec`] only once its type and every key that type
/// needs are known.
#[derive(Debug, Default)]
pub(crate) struct PartialChart {
    requested: Option<String>,
    data: Option<Value>,
    x_key: Option<String>,
    y_key: Option<String>,
    y_keys: Vec<SeriesKey>,
    columns: Vec<String>,
    title: Option<String>,
    summary: Option<Value>,
    current_year: Option<Value>,
    last_year: Option<Value>,
    extra: Record,
}

fn take(obj: &mut Record, field: &str) -> Option<Value> {
    obj.remove(field).filter(|v| !v.is_null())
}

/// A key-naming field: only a non-empty string counts.
fn explicit_key(field: &str, value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        other => {
            log::warn!("ignoring chart {field}: expected a non-empty string, got {other}");
            None
        }
    }
}

/// Removes and reads `field` when `read` understands its shape. A value it
/// does not understand stays in `obj` and is carried through verbatim; an
/// explicit `null` counts as missing.
fn take_with<T>(
    obj: &mut Record,
    field: &str,
    read: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let parsed = match obj.get(field)? {
        Value::Null => None,
        value => {
            let parsed = read(value);
            if parsed.is_none() {
                log::debug!("keeping chart {field} verbatim: {value}");
                return None;
            }
            parsed
        }
    };
    obj.remove(field);
    parsed
}

fn read_columns(value: &Value) -> Option<Vec<String>> {
    value.as_array()?.iter().map(value_to_string).collect()
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn is_present(value: &Value) -> bool {
    !matches!(value, Value::Null) && value.as_str() != Some("")
}

impl PartialChart {
    pub(crate) fn from_object(mut obj: Record) -> Self {
        let requested = explicit_key("type", take(&mut obj, "type"));
        let data = take(&mut obj, "data");
        let x_key = explicit_key("xKey", take(&mut obj, "xKey"));
        let y_key = explicit_key("yKey", take(&mut obj, "yKey"));
        let y_keys = match take(&mut obj, "yKeys") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| {
                    let series = SeriesKey::from_value(item);
                    if series.is_none() {
                        log::warn!("ignoring chart series without a key: {item}");
                    }
                    series
                })
                .collect(),
            Some(other) => {
                log::warn!("ignoring chart yKeys: expected an array, got {other}");
                vec![]
            }
            None => vec![],
        };
        let columns = take_with(&mut obj, "columns", read_columns).unwrap_or_default();
        let title = take_with(&mut obj, "title", value_to_string);
        let summary = take(&mut obj, "summary");
        let current_year = take(&mut obj, "currentYear").filter(is_present);
        let last_year = take(&mut obj, "lastYear").filter(is_present);

        Self {
            requested,
            data,
            x_key,
            y_key,
            y_keys,
            columns,
            title,
            summary,
            current_year,
            last_year,
            extra: obj,
        }
    }

    fn into_spec(self, chart_type: ChartType, data: Vec<Value>) -> ChartSpec {
        ChartSpec {
            chart_type,
            data,
            x_key: self.x_key,
            y_key: self.y_key,
            y_keys: self.y_keys,
            columns: self.columns,
            title: self.title,
            summary: self.summary,
            current_year: self.current_year,
            last_year: self.last_year,
            extra: self.extra,
        }
    }

    fn unresolved(chart_type: ChartType, field: &'static str) -> ChartError {
        ChartError::UnresolvedKey { chart_type, field }
    }
}

fn first_record(data: &[Value]) -> Option<&Record> {
    data.first().and_then(Value::as_object)
}

fn is_numeric(record: &Record, key: &str) -> bool {
    record.get(key).is_some_and(Value::is_number)
}

fn first_numeric<'a>(record: &'a Record, exclude: &[Option<&str>]) -> Option<&'a str> {
    record
        .iter()
        .find(|(k, v)| v.is_number() && !exclude.contains(&Some(k.as_str())))
        .map(|(k, _)| k.as_str())
}

/// `data` must be a non-empty array. Box plots also accept a single
/// statistics object; year comparisons need their two years instead.
fn take_data(
    chart: &mut PartialChart,
    chart_type: Option<ChartType>,
) -> Result<Vec<Value>, ChartError> {
    let year_comparison = chart_type == Some(ChartType::YearComparison);
    if year_comparison && (chart.current_year.is_none() || chart.last_year.is_none()) {
        return Err(ChartError::MissingYearComparison);
    }
    match chart.data.take() {
        Some(Value::Array(items)) if !items.is_empty() => Ok(items),
        Some(Value::Object(stats)) if chart_type == Some(ChartType::BoxPlot) => {
            Ok(vec![Value::Object(stats)])
        }
        _ if year_comparison => Ok(vec![]),
        _ => Err(ChartError::MissingData),
    }
}

fn infer_type(chart: &PartialChart, first: Option<&Record>) -> ChartType {
    let has = |key: &str| first.is_some_and(|r| r.contains_key(key));
    if chart.x_key.is_some() && !chart.y_keys.is_empty() {
        ChartType::Line
    } else if chart.x_key.is_some() && chart.y_key.is_some() {
        ChartType::Bar
    } else if has("value") && has("name") {
        ChartType::Pie
    } else if has("stage") {
        ChartType::Funnel
    } else {
        ChartType::Line
    }
}

/// Category axis: first candidate present in the record, else the first
/// non-numeric field not excluded from the fallback.
fn fill_x(chart: &mut PartialChart, first: Option<&Record>, rules: &ChartRules) {
    if chart.x_key.is_some() {
        return;
    }
    let Some(record) = first else {
        return;
    };
    chart.x_key = rules
        .x_key_candidates
        .iter()
        .find(|k| record.contains_key(k.as_str()))
        .cloned()
        .or_else(|| {
            record
                .iter()
                .find(|(k, v)| !v.is_number() && !rules.x_fallback_excluded.contains(k))
                .map(|(k, _)| k.clone())
        });
}

/// Line/area series: every numeric candidate, else the first numeric field
/// other than the x key.
fn infer_series(
    first: Option<&Record>,
    x_key: Option<&str>,
    colored: bool,
    rules: &ChartRules,
) -> Vec<SeriesKey> {
    let Some(record) = first else {
        return vec![];
    };
    let color = |i: usize| if colored { rules.color(i) } else { None };
    let found: Vec<SeriesKey> = rules
        .y_key_candidates
        .iter()
        .filter(|k| Some(k.as_str()) != x_key && is_numeric(record, k))
        .enumerate()
        .map(|(i, k)| SeriesKey::new(k.as_str(), rules.label(k), color(i)))
        .collect();
    if !found.is_empty() {
        return found;
    }
    first_numeric(record, &[x_key])
        .map(|k| vec![SeriesKey::new(k, k, color(0))])
        .unwrap_or_default()
}

/// Bar value: first numeric candidate, else the first numeric field other
/// than the x key.
fn infer_bar_y(record: &Record, x_key: Option<&str>, rules: &ChartRules) -> Option<String> {
    rules
        .y_key_candidates
        .iter()
        .find(|k| Some(k.as_str()) != x_key && is_numeric(record, k))
        .map(|k| k.to_string())
        .or_else(|| first_numeric(record, &[x_key]).map(str::to_string))
}

/// Scatter and quadrant axes are both numeric and never the same field.
fn fill_scatter_keys(chart: &mut PartialChart, first: Option<&Record>, rules: &ChartRules) {
    let Some(record) = first else {
        return;
    };
    if chart.x_key.is_none() {
        let y = chart.y_key.as_deref();
        chart.x_key = rules
            .scatter_x_candidates
            .iter()
            .find(|k| Some(k.as_str()) != y && is_numeric(record, k))
            .map(|k| k.to_string())
            .or_else(|| first_numeric(record, &[y]).map(str::to_string));
    }
    if chart.y_key.is_none() {
        let x = chart.x_key.as_deref();
        chart.y_key = rules
            .scatter_y_candidates
            .iter()
            .find(|k| Some(k.as_str()) != x && is_numeric(record, k))
            .map(|k| k.to_string())
            .or_else(|| first_numeric(record, &[x]).map(str::to_string));
    }
}

/// Area data whose records carry `values`: a numeric array is exploded into
/// `series_1..series_n`, a single number becomes the `values` series.
fn expand_area_values(chart: &mut PartialChart, data: &mut [Value], rules: &ChartRules) {
    let values = first_record(data).and_then(|r| r.get("values"));
    let series = match values {
        Some(Value::Array(items)) if !items.is_empty() && items.iter().all(Value::is_number) => {
            Some(items.len())
        }
        _ => None,
    };
    let single = values.is_some_and(Value::is_number);

    if let Some(n) = series {
        for record in data.iter_mut().filter_map(Value::as_object_mut) {
            let Some(Value::Array(items)) = record.get("values").cloned() else {
                continue;
            };
            for (i, v) in items.into_iter().take(n).enumerate() {
                record.insert(format!("series_{}", i + 1), v);
            }
        }
        if chart.y_keys.is_empty() {
            chart.y_keys = (0..n)
                .map(|i| {
                    SeriesKey::new(
                        format!("series_{}", i + 1),
                        format!("{}{}", rules.series_name_prefix, i + 1),
                        rules.color(i),
                    )
                })
                .collect();
        }
    } else if single && chart.y_keys.is_empty() {
        chart.y_keys = vec![SeriesKey::new(
            "values",
            rules.values_label.as_str(),
            rules.color(0),
        )];
    }
}

const BOX_PLOT_STATS: [&str; 5] = ["min", "q1", "median", "q3", "max"];

fn columns_of(first: Option<&Record>) -> Vec<String> {
    first.map(|r| r.keys().cloned().collect()).unwrap_or_default()
}

/// Completes `chart` into a [`ChartSpec`].
pub(crate) fn complete(
    mut chart: PartialChart,
    rules: &ChartRules,
) -> Result<ChartSpec, ChartError> {
    // None: no type given; Some(None): a name the renderer does not know
    let requested = chart.requested.as_deref().map(ChartType::from_name);
    let mut data = take_data(&mut chart, requested.flatten())?;

    let chart_type = match requested {
        Some(Some(t)) => t,
        Some(None) => return Ok(fallback(chart, data, rules)),
        None => {
            let t = infer_type(&chart, first_record(&data));
            log::debug!("inferred chart type {t} from data shape");
            t
        }
    };

    if chart_type == ChartType::Area {
        expand_area_values(&mut chart, &mut data, rules);
    }
    let first = first_record(&data);

    match chart_type {
        ChartType::Line | ChartType::Area => {
            fill_x(&mut chart, first, rules);
            if chart.y_keys.is_empty() {
                let colored = chart_type == ChartType::Area;
                chart.y_keys = infer_series(first, chart.x_key.as_deref(), colored, rules);
            }
            if chart.x_key.is_none() {
                return Err(PartialChart::unresolved(chart_type, "xKey"));
            }
            if chart.y_keys.is_empty() {
                return Err(PartialChart::unresolved(chart_type, "yKeys"));
            }
        }
        ChartType::Bar => {
            fill_x(&mut chart, first, rules);
            if chart.y_key.is_none() {
                chart.y_key = first.and_then(|r| infer_bar_y(r, chart.x_key.as_deref(), rules));
            }
            if chart.x_key.is_none() {
                return Err(PartialChart::unresolved(chart_type, "xKey"));
            }
            if chart.y_key.is_none() {
                return Err(PartialChart::unresolved(chart_type, "yKey"));
            }
        }
        ChartType::Scatter | ChartType::Quadrant => {
            fill_scatter_keys(&mut chart, first, rules);
            if chart.x_key.is_none() {
                return Err(PartialChart::unresolved(chart_type, "xKey"));
            }
            if chart.y_key.is_none() {
                return Err(PartialChart::unresolved(chart_type, "yKey"));
            }
        }
        ChartType::BoxPlot => {
            let complete = first.is_some_and(|r| BOX_PLOT_STATS.iter().all(|k| r.contains_key(*k)));
            if !complete {
                return Err(ChartError::BoxPlotStats);
            }
        }
        ChartType::Table => {
            if chart.columns.is_empty() && !chart.extra.contains_key("columns") {
                chart.columns = columns_of(first);
            }
        }
        ChartType::Pie | ChartType::Funnel | ChartType::Map | ChartType::YearComparison => {
            fill_x(&mut chart, first, rules);
        }
    }

    Ok(chart.into_spec(chart_type, data))
}

/// Best effort for an unknown type name; never fails.
///
/// Rules, first match wins: explicit series → line (area when the name
/// mentions "area" or "filled"); explicit value key → bar; one numeric field
/// → bar; several → line/area over all of them; `name` + `value` → pie;
/// anything else → table. Line and bar need a category axis.
fn fallback(mut chart: PartialChart, data: Vec<Value>, rules: &ChartRules) -> ChartSpec {
    let name = chart.requested.clone().unwrap_or_default();
    let first = first_record(&data);
    fill_x(&mut chart, first, rules);

    let lower = name.to_ascii_lowercase();
    let series_type = if lower.contains("area") || lower.contains("filled") {
        ChartType::Area
    } else {
        ChartType::Line
    };
    let x_key = chart.x_key.clone();
    let numeric: Vec<&str> = first
        .map(|r| {
            r.iter()
                .filter(|(k, v)| v.is_number() && Some(k.as_str()) != x_key.as_deref())
                .map(|(k, _)| k.as_str())
                .collect()
        })
        .unwrap_or_default();

    let chart_type = if x_key.is_some() && !chart.y_keys.is_empty() {
        series_type
    } else if x_key.is_some() && chart.y_key.is_some() {
        ChartType::Bar
    } else if x_key.is_some() && numeric.len() == 1 {
        chart.y_key = Some(numeric[0].to_string());
        ChartType::Bar
    } else if x_key.is_some() && numeric.len() > 1 {
        chart.y_keys = numeric
            .iter()
            .enumerate()
            .map(|(i, k)| SeriesKey::new(*k, rules.label(k), rules.color(i)))
            .collect();
        series_type
    } else if first.is_some_and(|r| r.contains_key("name") && r.contains_key("value")) {
        ChartType::Pie
    } else {
        if chart.columns.is_empty() && !chart.extra.contains_key("columns") {
            chart.columns = columns_of(first);
        }
        ChartType::Table
    };
    log::debug!("unknown chart type {name:?}, rendering as {chart_type}");

    if chart.title.is_none() && !chart.extra.contains_key("title") {
        chart.title = Some(name);
    }
    chart.into_spec(chart_type, data)
}
