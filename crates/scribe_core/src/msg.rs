use crate::state::{ArticleRecord, ContentPanel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the prompt input.
    PromptChanged(String),
    /// User edited the article-count field.
    ArticleCountChanged(i32),
    /// User edited the inter-article delay field.
    DelaySecondsChanged(i32),
    /// User toggled server-side auto-save.
    AutoSaveToggled(bool),
    /// User clicked Generate.
    GenerateClicked,
    /// User clicked Stop.
    StopClicked,
    /// The generation request settled with an ordered result list.
    GenerationFinished { articles: Vec<ArticleRecord> },
    /// The generation request failed in transport or decoding.
    GenerationFailed { message: String },
    /// User clicked a copy action on a result row.
    CopyClicked { index: usize, panel: ContentPanel },
    /// The clipboard write settled.
    CopyCompleted { outcome: Result<(), String> },
    /// User clicked Save on a result row.
    SaveClicked { index: usize },
    /// A manual save settled; `Ok` carries the saved-file path the backend
    /// reported for the article.
    SaveCompleted {
        article_number: u32,
        outcome: Result<Option<String>, String>,
    },
    /// User clicked Export report.
    ExportClicked,
    /// The report export settled; `Ok` carries the written path.
    ExportCompleted { outcome: Result<String, String> },
    /// The startup health probe settled.
    HealthProbed { outcome: Result<String, String> },
    /// User dismissed the modal notice.
    NoticeDismissed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
