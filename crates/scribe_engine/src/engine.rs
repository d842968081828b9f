use std::sync::{mpsc, Arc};
use std::thread;

use scribe_logging::{scribe_info, scribe_warn};

use crate::client::{ClientSettings, GenerateApi, ReqwestApiClient};
use crate::{EngineEvent, GenerateRequest};

enum EngineCommand {
    SubmitGeneration {
        request: GenerateRequest,
    },
    SaveArticle {
        article_number: u32,
        original: String,
        replaced: String,
    },
    CheckHealth,
}

/// Handle to the background engine thread. Commands go in over a channel;
/// events come back out and are drained with `try_recv` from the UI loop.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(ReqwestApiClient::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit_generation(&self, request: GenerateRequest) {
        let _ = self.cmd_tx.send(EngineCommand::SubmitGeneration { request });
    }

    pub fn save_article(&self, article_number: u32, original: String, replaced: String) {
        let _ = self.cmd_tx.send(EngineCommand::SaveArticle {
            article_number,
            original,
            replaced,
        });
    }

    pub fn check_health(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CheckHealth);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn GenerateApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::SubmitGeneration { request } => {
            scribe_info!(
                "submitting generation: {} article(s), delay {}s, auto_save={}",
                request.article_count,
                request.delay_seconds,
                request.auto_save
            );
            let result = api.generate(&request).await;
            if let Err(err) = &result {
                scribe_warn!("generation request failed: {err}");
            }
            let _ = event_tx.send(EngineEvent::GenerationCompleted { result });
        }
        EngineCommand::SaveArticle {
            article_number,
            original,
            replaced,
        } => {
            let result = api.save_article(&original, &replaced, article_number).await;
            if let Err(err) = &result {
                scribe_warn!("save of article {article_number} failed: {err}");
            }
            let _ = event_tx.send(EngineEvent::SaveCompleted {
                article_number,
                result,
            });
        }
        EngineCommand::CheckHealth => {
            let result = api.health().await;
            let _ = event_tx.send(EngineEvent::HealthChecked { result });
        }
    }
}
