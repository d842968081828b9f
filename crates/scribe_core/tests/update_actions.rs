use scribe_core::{update, AppState, ArticleRecord, ContentPanel, Effect, Msg};

fn state_with_results(articles: Vec<ArticleRecord>) -> AppState {
    let state = AppState::new();
    let (state, _) = update(state, Msg::PromptChanged("write about rust".to_string()));
    let (state, _) = update(state, Msg::ArticleCountChanged(articles.len().max(1) as i32));
    let (state, _) = update(state, Msg::GenerateClicked);
    let (state, _) = update(state, Msg::GenerationFinished { articles });
    state
}

fn success_record(article_number: u32) -> ArticleRecord {
    ArticleRecord {
        article_number,
        success: true,
        message: None,
        original_content: Some(format!("original {article_number}")),
        replaced_content: Some(format!("replaced {article_number}")),
        saved_file_path: None,
    }
}

fn failure_record(article_number: u32) -> ArticleRecord {
    ArticleRecord {
        article_number,
        success: false,
        message: Some("upstream error".to_string()),
        original_content: None,
        replaced_content: None,
        saved_file_path: None,
    }
}

#[test]
fn copy_emits_selected_panel_text() {
    let state = state_with_results(vec![success_record(1), success_record(2)]);

    let (state, effects) = update(
        state,
        Msg::CopyClicked {
            index: 1,
            panel: ContentPanel::Replaced,
        },
    );
    assert_eq!(
        effects,
        vec![Effect::CopyToClipboard {
            text: "replaced 2".to_string()
        }]
    );

    let (_state, effects) = update(
        state,
        Msg::CopyClicked {
            index: 0,
            panel: ContentPanel::Original,
        },
    );
    assert_eq!(
        effects,
        vec![Effect::CopyToClipboard {
            text: "original 1".to_string()
        }]
    );
}

#[test]
fn copy_on_failure_row_or_bad_index_is_ignored() {
    let state = state_with_results(vec![failure_record(1)]);

    let (state, effects) = update(
        state,
        Msg::CopyClicked {
            index: 0,
            panel: ContentPanel::Original,
        },
    );
    assert!(effects.is_empty());

    let (_state, effects) = update(
        state,
        Msg::CopyClicked {
            index: 9,
            panel: ContentPanel::Original,
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn copy_completion_raises_notice_without_touching_results() {
    let state = state_with_results(vec![success_record(1)]);
    let before = state.view().results.clone();

    let (state, _) = update(state, Msg::CopyCompleted { outcome: Ok(()) });
    let view = state.view();
    assert!(!view.notice.as_ref().expect("copy notice").is_error);
    assert_eq!(view.results, before);

    let (state, _) = update(state, Msg::NoticeDismissed);
    let (state, _) = update(
        state,
        Msg::CopyCompleted {
            outcome: Err("clipboard unavailable".to_string()),
        },
    );
    let view = state.view();
    let notice = view.notice.expect("copy failure notice");
    assert!(notice.is_error);
    assert!(notice.text.contains("clipboard unavailable"));
    assert_eq!(view.results, before);
    assert!(view.generate_enabled);
}

#[test]
fn save_emits_effect_and_completion_updates_row() {
    let state = state_with_results(vec![success_record(3)]);

    let (state, effects) = update(state, Msg::SaveClicked { index: 0 });
    assert_eq!(
        effects,
        vec![Effect::SaveArticle {
            article_number: 3,
            original: "original 3".to_string(),
            replaced: "replaced 3".to_string(),
        }]
    );

    let (state, effects) = update(
        state,
        Msg::SaveCompleted {
            article_number: 3,
            outcome: Ok(Some("/out/article_3.txt".to_string())),
        },
    );
    assert!(effects.is_empty());
    let view = state.view();
    let block = &view.results[0];
    assert_eq!(block.saved_file_path.as_deref(), Some("/out/article_3.txt"));
    assert!(!block.can_save);
    assert!(view.notice.expect("save notice").text.contains("article_3"));
}

#[test]
fn save_on_already_saved_row_is_ignored() {
    let mut record = success_record(1);
    record.saved_file_path = Some("/out/article_1.txt".to_string());
    let state = state_with_results(vec![record]);

    let (_state, effects) = update(state, Msg::SaveClicked { index: 0 });
    assert!(effects.is_empty());
}

#[test]
fn export_carries_submitted_prompt_and_rows() {
    let state = state_with_results(vec![success_record(1), failure_record(2)]);

    let (_state, effects) = update(state, Msg::ExportClicked);
    match effects.as_slice() {
        [Effect::ExportReport { prompt, articles }] => {
            assert_eq!(prompt, "write about rust");
            assert_eq!(articles.len(), 2);
        }
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn export_with_no_results_is_ignored() {
    let state = AppState::new();
    let (_state, effects) = update(state, Msg::ExportClicked);
    assert!(effects.is_empty());
}

#[test]
fn export_completion_raises_notice() {
    let state = state_with_results(vec![success_record(1)]);
    let (state, _) = update(
        state,
        Msg::ExportCompleted {
            outcome: Ok("reports/write_about_rust--a1b2c3d4.html".to_string()),
        },
    );
    let notice = state.view().notice.expect("export notice");
    assert!(!notice.is_error);
    assert!(notice.text.contains("a1b2c3d4"));
}
