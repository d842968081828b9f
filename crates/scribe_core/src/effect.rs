use crate::state::ArticleRecord;

/// Request payload for one generation submission. Built fresh per click from
/// validated form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub article_count: u32,
    pub delay_seconds: u32,
    pub auto_save: bool,
}

/// Side effects requested by `update`.
///
/// There is deliberately no cancel variant: the Stop control resets local UI
/// state only and the outstanding request keeps running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitGeneration { request: GenerationRequest },
    CopyToClipboard { text: String },
    SaveArticle {
        article_number: u32,
        original: String,
        replaced: String,
    },
    ExportReport {
        prompt: String,
        articles: Vec<ArticleRecord>,
    },
}
