use serde_json::Value;

use crate::bootstrap::FigureRenderer;
use crate::error::ChartResult;

/// No-op renderer used by tests and headless hosts.
///
/// It records the arguments of the last render call so callers can assert
/// the pass-through contract without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub call_count: usize,
    pub last_target_id: Option<String>,
    pub last_data: Option<Value>,
    pub last_layout: Option<Value>,
}

impl FigureRenderer for NullRenderer {
    fn render(
        &mut self,
        target_id: &str,
        data: Option<&Value>,
        layout: Option<&Value>,
    ) -> ChartResult<()> {
        self.call_count += 1;
        self.last_target_id = Some(target_id.to_owned());
        self.last_data = data.cloned();
        self.last_layout = layout.cloned();
        Ok(())
    }
}
