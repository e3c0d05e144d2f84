//! levelplot: significant price levels and embedded-chart bootstrap.
//!
//! This crate detects significant price levels from OHLC candles, assembles
//! the Plotly-style figure document a hosting page embeds, and provides the
//! one-shot bootstrapper that hands that document to a rendering backend.

pub mod bootstrap;
pub mod core;
pub mod error;
pub mod figure;
pub mod telemetry;

pub use bootstrap::{BootstrapOutcome, ChartBootstrapper, DocumentHost, FigureRenderer};
pub use error::{ChartError, ChartResult};
pub use figure::FigureDocument;
