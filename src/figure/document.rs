use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// The figure document carried by the page contract.
///
/// `data` (the trace sequence) and `layout` (the presentation object) are
/// opaque to this crate: they are decoded, handed to the renderer, and never
/// inspected or transformed. An explicit JSON `null` is a present field
/// (`Some(Value::Null)`) and is passed through and re-encoded as `null`;
/// `None` means the field was absent. Any other top-level fields pass
/// through encode round trips in their original order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FigureDocument {
    #[serde(
        default,
        deserialize_with = "present_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub layout: Option<Value>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Marks a field present even when its value is `null`, so absence and
/// explicit `null` stay distinguishable.
fn present_field<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl FigureDocument {
    /// Decodes a document from the designated element's text.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(ChartError::MalformedFigure)
    }

    /// Encodes the document for embedding into a page element.
    pub fn to_json_string(&self) -> ChartResult<String> {
        serde_json::to_string(self).map_err(ChartError::MalformedFigure)
    }

    pub fn to_json_string_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(ChartError::MalformedFigure)
    }
}
