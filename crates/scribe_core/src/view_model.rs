/// Everything the shell needs to draw one frame, derived from `AppState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub prompt: String,
    pub article_count: i32,
    pub delay_seconds: i32,
    pub auto_save: bool,
    pub generate_enabled: bool,
    pub stop_enabled: bool,
    pub progress: Option<ProgressView>,
    pub results_visible: bool,
    pub results: Vec<ResultBlockView>,
    pub notice: Option<NoticeView>,
    pub server_status: Option<ServerStatusView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressView {
    pub done: usize,
    pub total: usize,
    pub completed: bool,
}

/// One rendered result block, tagged success/failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBlockView {
    pub index: usize,
    /// Article number label, e.g. "Article 3".
    pub title: String,
    pub success: bool,
    pub status_label: &'static str,
    /// Failure message; only present on failure blocks.
    pub message: Option<String>,
    pub original_content: Option<String>,
    pub replaced_content: Option<String>,
    pub saved_file_path: Option<String>,
    pub can_copy: bool,
    pub can_save: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub is_error: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerStatusView {
    pub online: bool,
    pub detail: String,
}
