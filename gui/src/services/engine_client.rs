// Client wrapper over the engine's refresh pipeline.
//
// The GUI talks to the engine through this seam only; the engine runs
// in-process, so the wrapper just owns the service behind an Arc so it can
// be cloned into Dioxus tasks.
use anyhow::Result;
use engine::config::settings::EngineSettings;
use engine::services::DvolService;
use shared::models::{Currency, DvolSnapshot};
use std::sync::Arc;

#[derive(Clone)]
pub struct EngineClient {
    service: Arc<DvolService>,
}

impl EngineClient {
    pub fn new(settings: EngineSettings) -> Self {
        EngineClient {
            service: Arc::new(DvolService::new(settings)),
        }
    }

    /// Runs one refresh cycle for `currency` and returns the snapshot, or
    /// the pipeline's failure as an opaque error for display.
    pub async fn refresh(&self, currency: Currency) -> Result<DvolSnapshot> {
        let snapshot = self.service.refresh(currency).await?;
        Ok(snapshot)
    }

    /// Query window the engine uses, as (start, end) epoch milliseconds.
    pub fn window(&self) -> (i64, i64) {
        self.service.window()
    }
}
