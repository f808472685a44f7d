//! Bridge between the egui thread and the async HTTP client
//!
//! Pages spawn request futures on the shared tokio runtime and receive
//! results over their own mpsc channels, drained once per frame. Every
//! completed task requests a repaint so the response is rendered on the
//! next pass rather than on the next input event.

use std::future::Future;
use std::sync::Arc;

use crate::api::ApiClient;

#[derive(Clone)]
pub struct Backend {
    runtime: tokio::runtime::Handle,
    client: Arc<ApiClient>,
    egui_ctx: egui::Context,
}

impl Backend {
    pub fn new(
        runtime: tokio::runtime::Handle,
        client: ApiClient,
        egui_ctx: egui::Context,
    ) -> Self {
        Self {
            runtime,
            client: Arc::new(client),
            egui_ctx,
        }
    }

    pub fn client(&self) -> Arc<ApiClient> {
        Arc::clone(&self.client)
    }

    /// Run a request future to completion on the runtime, then wake the UI.
    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let ctx = self.egui_ctx.clone();
        self.runtime.spawn(async move {
            task.await;
            ctx.request_repaint();
        });
    }
}
