use crate::view_model::{
    AppViewModel, NoticeView, ProgressView, ResultBlockView, ServerStatusView,
};

/// One generated article's outcome as displayed by the client.
///
/// Mirrors the backend's result record; content fields are absent on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    pub article_number: u32,
    pub success: bool,
    pub message: Option<String>,
    pub original_content: Option<String>,
    pub replaced_content: Option<String>,
    pub saved_file_path: Option<String>,
}

/// Which content panel of a success row an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentPanel {
    Original,
    Replaced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Modal notice shown over the rest of the UI until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Editable form fields. The article count and delay stay signed so the UI
/// can hold out-of-range values; submission validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub prompt: String,
    pub article_count: i32,
    pub delay_seconds: i32,
    pub auto_save: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            article_count: 1,
            delay_seconds: 0,
            auto_save: false,
        }
    }
}

/// Progress counter for the current or most recent generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
    /// Once set, the indicator shows its completed visual state even if
    /// `done` never reached `total`.
    pub completed: bool,
}

/// Result of the startup health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerStatus {
    Online { detail: String },
    Offline { detail: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    form: FormState,
    /// In-flight flag: set before the submit effect is emitted, cleared when
    /// the response settles. Stop clears it early without cancelling anything.
    generating: bool,
    /// Prompt of the last submitted request, used for report export.
    submitted_prompt: String,
    progress: Option<Progress>,
    results: Vec<ArticleRecord>,
    results_visible: bool,
    notice: Option<Notice>,
    server_status: Option<ServerStatus>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            prompt: self.form.prompt.clone(),
            article_count: self.form.article_count,
            delay_seconds: self.form.delay_seconds,
            auto_save: self.form.auto_save,
            generate_enabled: !self.generating,
            stop_enabled: self.generating,
            progress: self.progress.map(|p| ProgressView {
                done: p.done,
                total: p.total,
                completed: p.completed,
            }),
            results_visible: self.results_visible,
            results: self
                .results
                .iter()
                .enumerate()
                .map(|(index, record)| result_block(index, record))
                .collect(),
            notice: self.notice.as_ref().map(|notice| NoticeView {
                is_error: notice.kind == NoticeKind::Error,
                text: notice.text.clone(),
            }),
            server_status: self.server_status.as_ref().map(|status| match status {
                ServerStatus::Online { detail } => ServerStatusView {
                    online: true,
                    detail: detail.clone(),
                },
                ServerStatus::Offline { detail } => ServerStatusView {
                    online: false,
                    detail: detail.clone(),
                },
            }),
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub(crate) fn form(&self) -> &FormState {
        &self.form
    }

    pub(crate) fn results(&self) -> &[ArticleRecord] {
        &self.results
    }

    pub(crate) fn result(&self, index: usize) -> Option<&ArticleRecord> {
        self.results.get(index)
    }

    pub(crate) fn submitted_prompt(&self) -> &str {
        &self.submitted_prompt
    }

    pub(crate) fn set_prompt(&mut self, prompt: String) {
        if self.form.prompt != prompt {
            self.form.prompt = prompt;
            self.dirty = true;
        }
    }

    pub(crate) fn set_article_count(&mut self, count: i32) {
        if self.form.article_count != count {
            self.form.article_count = count;
            self.dirty = true;
        }
    }

    pub(crate) fn set_delay_seconds(&mut self, seconds: i32) {
        if self.form.delay_seconds != seconds {
            self.form.delay_seconds = seconds;
            self.dirty = true;
        }
    }

    pub(crate) fn set_auto_save(&mut self, auto_save: bool) {
        if self.form.auto_save != auto_save {
            self.form.auto_save = auto_save;
            self.dirty = true;
        }
    }

    /// Flips the in-flight flag, clears previous results and initializes the
    /// progress counter to 0/total.
    pub(crate) fn begin_generation(&mut self, prompt: String, total: usize) {
        self.generating = true;
        self.submitted_prompt = prompt;
        self.results.clear();
        self.results_visible = false;
        self.progress = Some(Progress {
            done: 0,
            total,
            completed: false,
        });
        self.dirty = true;
    }

    /// Applies an ordered result list, advancing the progress counter per
    /// appended row so it reads len/len when the last row is in place.
    pub(crate) fn apply_results(&mut self, articles: Vec<ArticleRecord>) {
        self.results.clear();
        let total = articles.len();
        for (index, article) in articles.into_iter().enumerate() {
            self.results.push(article);
            self.progress = Some(Progress {
                done: index + 1,
                total,
                completed: false,
            });
        }
        self.results_visible = true;
        self.finish_generation();
    }

    /// Clears the in-flight flag and forces the progress indicator into its
    /// completed visual state.
    pub(crate) fn finish_generation(&mut self) {
        self.generating = false;
        if let Some(progress) = self.progress.as_mut() {
            progress.completed = true;
        }
        self.dirty = true;
    }

    /// Stop is a local reset only: the outstanding request keeps running and
    /// its eventual response is still applied.
    pub(crate) fn stop_generation(&mut self) {
        self.generating = false;
        self.dirty = true;
    }

    pub(crate) fn raise_notice(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            text: text.into(),
        });
        self.dirty = true;
    }

    pub(crate) fn dismiss_notice(&mut self) {
        if self.notice.take().is_some() {
            self.dirty = true;
        }
    }

    pub(crate) fn set_server_status(&mut self, status: ServerStatus) {
        self.server_status = Some(status);
        self.dirty = true;
    }

    pub(crate) fn set_saved_path(&mut self, article_number: u32, path: Option<String>) {
        if let Some(record) = self
            .results
            .iter_mut()
            .find(|record| record.article_number == article_number)
        {
            record.saved_file_path = path;
            self.dirty = true;
        }
    }
}

fn result_block(index: usize, record: &ArticleRecord) -> ResultBlockView {
    let success = record.success;
    ResultBlockView {
        index,
        title: format!("Article {}", record.article_number),
        success,
        status_label: if success { "Success" } else { "Failed" },
        // The backend sets a message on success too; it is only surfaced on
        // failure rows, matching the rendering contract.
        message: if success { None } else { record.message.clone() },
        original_content: if success {
            record.original_content.clone()
        } else {
            None
        },
        replaced_content: if success {
            record.replaced_content.clone()
        } else {
            None
        },
        saved_file_path: record.saved_file_path.clone(),
        can_copy: success,
        can_save: success && record.saved_file_path.is_none(),
    }
}
