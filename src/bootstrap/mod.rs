//! One-shot chart bootstrap: reads the embedded figure document from the
//! hosting page and hands it to the rendering backend exactly once.

mod null_renderer;

pub use null_renderer::NullRenderer;

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::ChartResult;
use crate::figure::FigureDocument;

/// Element holding the embedded figure JSON in the reference page contract.
pub const FIGURE_SOURCE_ELEMENT_ID: &str = "graphJSON";
/// Element the chart is rendered into.
pub const CHART_TARGET_ELEMENT_ID: &str = "chart";

/// Read-only view of the hosting page.
///
/// An absent element yields `None`; the bootstrapper folds that into the
/// same silent no-op as an element with empty text.
pub trait DocumentHost {
    fn element_text(&self, element_id: &str) -> Option<String>;
}

/// Contract implemented by the external rendering routine.
///
/// The bootstrapper supplies exactly the target identifier and the
/// document's `data` and `layout` fields, verbatim and uninspected, and
/// takes no action based on the outcome beyond propagating it.
pub trait FigureRenderer {
    fn render(
        &mut self,
        target_id: &str,
        data: Option<&Value>,
        layout: Option<&Value>,
    ) -> ChartResult<()>;
}

/// What a single `on_ready` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The figure document was decoded and handed to the renderer.
    Rendered,
    /// The source element was absent or empty; nothing to render.
    SkippedEmpty,
    /// The ready signal already fired for this bootstrapper.
    AlreadyRan,
}

/// Bridges a server-embedded figure document to one client-side render call.
///
/// The host application invokes [`ChartBootstrapper::on_ready`] once when its
/// surface is mounted (the moral equivalent of a document-ready listener).
/// The bootstrapper has two observable states, not-yet-run and run; any
/// completed call (rendered, skipped, or errored) is the single transition,
/// and later calls are inert.
#[derive(Debug)]
pub struct ChartBootstrapper<H, R> {
    host: H,
    renderer: R,
    source_id: String,
    target_id: String,
    has_run: bool,
}

impl<H: DocumentHost, R: FigureRenderer> ChartBootstrapper<H, R> {
    /// Creates a bootstrapper wired to the reference page contract
    /// (`graphJSON` source, `chart` target).
    pub fn new(host: H, renderer: R) -> Self {
        Self::with_element_ids(host, renderer, FIGURE_SOURCE_ELEMENT_ID, CHART_TARGET_ELEMENT_ID)
    }

    /// Creates a bootstrapper against a page with different well-known ids.
    pub fn with_element_ids(
        host: H,
        renderer: R,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
    ) -> Self {
        Self {
            host,
            renderer,
            source_id: source_id.into(),
            target_id: target_id.into(),
            has_run: false,
        }
    }

    /// Runs the bootstrap once.
    ///
    /// Empty or absent source text is not an error: the call returns
    /// [`BootstrapOutcome::SkippedEmpty`] without touching the renderer.
    /// Malformed figure text propagates as
    /// [`crate::ChartError::MalformedFigure`] with no render call.
    pub fn on_ready(&mut self) -> ChartResult<BootstrapOutcome> {
        if self.has_run {
            trace!(source = %self.source_id, "ready signal ignored, bootstrap already ran");
            return Ok(BootstrapOutcome::AlreadyRan);
        }
        self.has_run = true;

        let text = self.host.element_text(&self.source_id).unwrap_or_default();
        if text.is_empty() {
            debug!(source = %self.source_id, "no embedded figure, skipping render");
            return Ok(BootstrapOutcome::SkippedEmpty);
        }

        let document = FigureDocument::from_json_str(&text)?;
        debug!(
            target = %self.target_id,
            has_data = document.data.is_some(),
            has_layout = document.layout.is_some(),
            "rendering embedded figure"
        );
        self.renderer
            .render(&self.target_id, document.data.as_ref(), document.layout.as_ref())?;
        Ok(BootstrapOutcome::Rendered)
    }

    #[must_use]
    pub fn has_run(&self) -> bool {
        self.has_run
    }

    /// Gives the renderer back, consuming the bootstrapper.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
