use std::path::PathBuf;

use chrono::Utc;
use scribe_core::{ArticleRecord, Effect, Msg};
use scribe_engine::{
    write_report, ClientSettings, EngineEvent, EngineHandle, GenerateRequest, GenerationResult,
};
use scribe_logging::{scribe_info, scribe_warn};

use crate::settings::AppSettings;

/// Executes core effects against the engine and maps engine events back into
/// core messages.
pub struct EffectRunner {
    engine: EngineHandle,
    egui_ctx: egui::Context,
    output_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(egui_ctx: egui::Context, settings: &AppSettings) -> Self {
        let engine = EngineHandle::new(ClientSettings {
            base_url: settings.base_url.clone(),
            ..ClientSettings::default()
        });
        // One probe at startup; the result lands as a HealthProbed message.
        engine.check_health();

        Self {
            engine,
            egui_ctx,
            output_dir: settings.output_dir.clone(),
        }
    }

    /// Runs effects. Effects that settle synchronously return their
    /// completion messages immediately; the rest surface later via `poll`.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut immediate = Vec::new();
        for effect in effects {
            match effect {
                Effect::SubmitGeneration { request } => {
                    scribe_info!(
                        "SubmitGeneration prompt_len={} articles={}",
                        request.prompt.len(),
                        request.article_count
                    );
                    self.engine.submit_generation(map_request(request));
                }
                Effect::CopyToClipboard { text } => {
                    self.egui_ctx.copy_text(text);
                    immediate.push(Msg::CopyCompleted { outcome: Ok(()) });
                }
                Effect::SaveArticle {
                    article_number,
                    original,
                    replaced,
                } => {
                    self.engine.save_article(article_number, original, replaced);
                }
                Effect::ExportReport { prompt, articles } => {
                    let results: Vec<GenerationResult> =
                        articles.iter().map(map_record_out).collect();
                    let generated_utc = Utc::now().to_rfc3339();
                    let outcome = write_report(&self.output_dir, &prompt, &generated_utc, &results)
                        .map(|summary| summary.output_path.display().to_string())
                        .map_err(|err| err.to_string());
                    immediate.push(Msg::ExportCompleted { outcome });
                }
            }
        }
        immediate
    }

    /// Drains pending engine events into core messages.
    pub fn poll(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            let msg = match event {
                EngineEvent::GenerationCompleted { result } => match result {
                    Ok(results) => Msg::GenerationFinished {
                        articles: results.into_iter().map(map_record_in).collect(),
                    },
                    Err(err) => {
                        scribe_warn!("generation failed: {err}");
                        Msg::GenerationFailed {
                            message: err.to_string(),
                        }
                    }
                },
                EngineEvent::SaveCompleted {
                    article_number,
                    result,
                } => Msg::SaveCompleted {
                    article_number,
                    outcome: result
                        .map(|record| record.saved_file_path)
                        .map_err(|err| err.to_string()),
                },
                EngineEvent::HealthChecked { result } => Msg::HealthProbed {
                    outcome: result.map_err(|err| err.to_string()),
                },
            };
            msgs.push(msg);
        }
        msgs
    }
}

fn map_request(request: scribe_core::GenerationRequest) -> GenerateRequest {
    GenerateRequest {
        prompt: request.prompt,
        article_count: request.article_count,
        delay_seconds: request.delay_seconds,
        auto_save: request.auto_save,
    }
}

fn map_record_in(result: GenerationResult) -> ArticleRecord {
    ArticleRecord {
        article_number: result.article_number,
        success: result.success,
        message: result.message,
        original_content: result.original_content,
        replaced_content: result.replaced_content,
        saved_file_path: result.saved_file_path,
    }
}

fn map_record_out(record: &ArticleRecord) -> GenerationResult {
    GenerationResult {
        article_number: record.article_number,
        success: record.success,
        message: record.message.clone(),
        original_content: record.original_content.clone(),
        replaced_content: record.replaced_content.clone(),
        saved_file_path: record.saved_file_path.clone(),
    }
}
