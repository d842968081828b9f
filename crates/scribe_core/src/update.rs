use crate::{AppState, ContentPanel, Effect, GenerationRequest, Msg, NoticeKind, ServerStatus};

pub const MIN_ARTICLES: i32 = 1;
pub const MAX_ARTICLES: i32 = 10;

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PromptChanged(prompt) => {
            state.set_prompt(prompt);
            Vec::new()
        }
        Msg::ArticleCountChanged(count) => {
            state.set_article_count(count);
            Vec::new()
        }
        Msg::DelaySecondsChanged(seconds) => {
            state.set_delay_seconds(seconds);
            Vec::new()
        }
        Msg::AutoSaveToggled(auto_save) => {
            state.set_auto_save(auto_save);
            Vec::new()
        }
        Msg::GenerateClicked => handle_generate(&mut state),
        Msg::StopClicked => {
            // Cosmetic reset: flips enablement and tells the user, but sends
            // nothing to the server. A late response still renders.
            if state.is_generating() {
                state.stop_generation();
                state.raise_notice(
                    NoticeKind::Info,
                    "Generation stopped. The request already sent keeps running on the server.",
                );
            }
            Vec::new()
        }
        Msg::GenerationFinished { articles } => {
            state.apply_results(articles);
            Vec::new()
        }
        Msg::GenerationFailed { message } => {
            state.raise_notice(
                NoticeKind::Error,
                format!("Article generation failed: {message}"),
            );
            state.finish_generation();
            Vec::new()
        }
        Msg::CopyClicked { index, panel } => copy_effect(&state, index, panel),
        Msg::CopyCompleted { outcome } => {
            match outcome {
                Ok(()) => state.raise_notice(NoticeKind::Info, "Copied to clipboard."),
                Err(err) => {
                    state.raise_notice(NoticeKind::Error, format!("Copy failed: {err}"))
                }
            }
            Vec::new()
        }
        Msg::SaveClicked { index } => save_effect(&state, index),
        Msg::SaveCompleted {
            article_number,
            outcome,
        } => {
            match outcome {
                Ok(path) => {
                    let text = match path.as_deref() {
                        Some(path) => format!("Saved: {path}"),
                        None => "Article saved.".to_string(),
                    };
                    state.set_saved_path(article_number, path);
                    state.raise_notice(NoticeKind::Info, text);
                }
                Err(err) => {
                    state.raise_notice(NoticeKind::Error, format!("Save failed: {err}"))
                }
            }
            Vec::new()
        }
        Msg::ExportClicked => {
            if state.results().is_empty() {
                Vec::new()
            } else {
                vec![Effect::ExportReport {
                    prompt: state.submitted_prompt().to_string(),
                    articles: state.results().to_vec(),
                }]
            }
        }
        Msg::ExportCompleted { outcome } => {
            match outcome {
                Ok(path) => {
                    state.raise_notice(NoticeKind::Info, format!("Report written to {path}"))
                }
                Err(err) => {
                    state.raise_notice(NoticeKind::Error, format!("Export failed: {err}"))
                }
            }
            Vec::new()
        }
        Msg::HealthProbed { outcome } => {
            let status = match outcome {
                Ok(detail) => ServerStatus::Online { detail },
                Err(detail) => ServerStatus::Offline { detail },
            };
            state.set_server_status(status);
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.dismiss_notice();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn handle_generate(state: &mut AppState) -> Vec<Effect> {
    if state.is_generating() {
        return Vec::new();
    }

    let prompt = state.form().prompt.trim().to_string();
    if prompt.is_empty() {
        state.raise_notice(NoticeKind::Error, "Please enter a prompt.");
        return Vec::new();
    }

    let count = state.form().article_count;
    if !(MIN_ARTICLES..=MAX_ARTICLES).contains(&count) {
        state.raise_notice(
            NoticeKind::Error,
            format!("Article count must be between {MIN_ARTICLES} and {MAX_ARTICLES}."),
        );
        return Vec::new();
    }

    // The delay field is not validated; negative input is clamped.
    let delay_seconds = state.form().delay_seconds.max(0) as u32;
    let auto_save = state.form().auto_save;
    state.begin_generation(prompt.clone(), count as usize);

    vec![Effect::SubmitGeneration {
        request: GenerationRequest {
            prompt,
            article_count: count as u32,
            delay_seconds,
            auto_save,
        },
    }]
}

fn copy_effect(state: &AppState, index: usize, panel: ContentPanel) -> Vec<Effect> {
    let Some(record) = state.result(index) else {
        return Vec::new();
    };
    let text = match panel {
        ContentPanel::Original => record.original_content.clone(),
        ContentPanel::Replaced => record.replaced_content.clone(),
    };
    match text {
        Some(text) => vec![Effect::CopyToClipboard { text }],
        None => Vec::new(),
    }
}

fn save_effect(state: &AppState, index: usize) -> Vec<Effect> {
    let Some(record) = state.result(index) else {
        return Vec::new();
    };
    if !record.success || record.saved_file_path.is_some() {
        return Vec::new();
    }
    let (Some(original), Some(replaced)) = (
        record.original_content.clone(),
        record.replaced_content.clone(),
    ) else {
        return Vec::new();
    };
    vec![Effect::SaveArticle {
        article_number: record.article_number,
        original,
        replaced,
    }]
}
