//! # Chart Schema Normalization
//!
//! Turns a loosely specified chart descriptor into a complete [`ChartSpec`].
//!
//! ## Phases
//!
//! 1. **Repair** (`repair`, text input only): ordered textual fixes for
//!    common syntax slips (`+3.4`, `}{`, trailing commas, bare keys), then
//!    JSON, then JSON5.
//! 2. **Completion** (`infer`): fills the type and the axis/series keys the
//!    type needs from the shape of `data`, never overwriting given fields.
//!
//! A failure in either phase is final: no partially filled spec escapes.

pub mod repair;
pub mod rules;
pub mod types;

mod infer;

use std::sync::OnceLock;

use serde_json::Value;

use crate::error::ChartError;

pub use rules::ChartRules;
pub use types::{ChartInput, ChartSpec, ChartType, SeriesKey};

/// Normalizes chart payloads against one [`ChartRules`] vocabulary.
#[derive(Debug, Clone, Default)]
pub struct ChartNormalizer {
    rules: ChartRules,
}

impl ChartNormalizer {
    pub fn new(rules: ChartRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ChartRules {
        &self.rules
    }

    /// Normalizes `input`, reporting why it could not be completed.
    pub fn try_normalize(&self, input: impl Into<ChartInput>) -> Result<ChartSpec, ChartError> {
        let value = match input.into() {
            ChartInput::Text(text) => repair::parse_payload(&text)?,
            ChartInput::Value(value) => value,
        };
        let Value::Object(obj) = value else {
            return Err(ChartError::NotAnObject);
        };
        infer::complete(infer::PartialChart::from_object(obj), &self.rules)
    }

    /// Normalizes `input`; `None` means the caller should show a chart
    /// configuration error.
    pub fn normalize(&self, input: impl Into<ChartInput>) -> Option<ChartSpec> {
        match self.try_normalize(input) {
            Ok(spec) => Some(spec),
            Err(err) => {
                log::debug!("chart not normalized: {err}");
                None
            }
        }
    }
}

fn default_normalizer() -> &'static ChartNormalizer {
    static NORMALIZER: OnceLock<ChartNormalizer> = OnceLock::new();
    NORMALIZER.get_or_init(ChartNormalizer::default)
}

/// Normalizes `input` with the built-in vocabulary.
pub fn normalize_chart(input: impl Into<ChartInput>) -> Option<ChartSpec> {
    default_normalizer().normalize(input)
}

/// Like [`normalize_chart`], with the failure reason.
pub fn try_normalize_chart(input: impl Into<ChartInput>) -> Result<ChartSpec, ChartError> {
    default_normalizer().try_normalize(input)
}
