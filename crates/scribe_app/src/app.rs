use std::path::PathBuf;
use std::time::Duration;

use scribe_core::{update, AppState, AppViewModel, Msg};

use crate::effects::EffectRunner;
use crate::settings::AppSettings;
use crate::ui;

pub struct ScribeApp {
    state: AppState,
    /// View model of the last dirty state; redrawn every frame.
    view: AppViewModel,
    runner: EffectRunner,
    settings: AppSettings,
    settings_path: PathBuf,
}

impl ScribeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: AppSettings,
        settings_path: PathBuf,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let runner = EffectRunner::new(cc.egui_ctx.clone(), &settings);
        let mut state = AppState::new();
        state.consume_dirty();
        let view = state.view();

        Self {
            state,
            view,
            runner,
            settings,
            settings_path,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
        }
        self.state = state;

        for msg in self.runner.run(effects) {
            self.dispatch(msg);
        }
    }
}

impl eframe::App for ScribeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain engine events first so this frame renders their outcome.
        for msg in self.runner.poll() {
            self.dispatch(msg);
        }

        let mut msgs = Vec::new();
        ui::render(ctx, &self.view, &mut msgs);
        for msg in msgs {
            self.dispatch(msg);
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.settings.save(&self.settings_path);
        }

        // Engine events arrive on a channel; poll for them between frames.
        ctx.request_repaint_after(Duration::from_millis(200));
    }
}
