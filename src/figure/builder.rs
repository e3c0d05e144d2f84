use serde_json::{Value, json};

use crate::core::OhlcBar;
use crate::figure::FigureDocument;

/// Assembles the figure document the hosting page embeds.
///
/// Traces land in the document's `data` sequence; the title and one dashed
/// horizontal line per significant level land in `layout`.
#[derive(Debug, Clone, Default)]
pub struct FigureBuilder {
    traces: Vec<Value>,
    shapes: Vec<Value>,
    title: Option<String>,
}

impl FigureBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a candlestick trace with RFC 3339 UTC timestamps on the x axis.
    #[must_use]
    pub fn with_candlestick_trace(mut self, name: &str, bars: &[OhlcBar]) -> Self {
        let x: Vec<String> = bars.iter().map(OhlcBar::time_rfc3339).collect();
        let open: Vec<f64> = bars.iter().map(|bar| bar.open).collect();
        let high: Vec<f64> = bars.iter().map(|bar| bar.high).collect();
        let low: Vec<f64> = bars.iter().map(|bar| bar.low).collect();
        let close: Vec<f64> = bars.iter().map(|bar| bar.close).collect();

        self.traces.push(json!({
            "type": "candlestick",
            "name": name,
            "x": x,
            "open": open,
            "high": high,
            "low": low,
            "close": close,
        }));
        self
    }

    /// Appends one full-width dashed horizontal line per level.
    #[must_use]
    pub fn with_level_lines(mut self, levels: &[f64]) -> Self {
        for &level in levels {
            self.shapes.push(json!({
                "type": "line",
                "xref": "paper",
                "x0": 0,
                "x1": 1,
                "y0": level,
                "y1": level,
                "line": { "color": "yellow", "dash": "dash", "width": 1 },
            }));
        }
        self
    }

    #[must_use]
    pub fn build(self) -> FigureDocument {
        let mut layout = serde_json::Map::new();
        if let Some(title) = self.title {
            layout.insert("title".to_owned(), json!({ "text": title }));
        }
        if !self.shapes.is_empty() {
            layout.insert("shapes".to_owned(), Value::Array(self.shapes));
        }

        FigureDocument {
            data: Some(Value::Array(self.traces)),
            layout: Some(Value::Object(layout)),
            ..FigureDocument::default()
        }
    }
}
