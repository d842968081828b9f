//! Scribe core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, GenerationRequest};
pub use msg::Msg;
pub use state::{
    AppState, ArticleRecord, ContentPanel, FormState, Notice, NoticeKind, Progress, ServerStatus,
};
pub use update::{update, MAX_ARTICLES, MIN_ARTICLES};
pub use view_model::{
    AppViewModel, NoticeView, ProgressView, ResultBlockView, ServerStatusView,
};
