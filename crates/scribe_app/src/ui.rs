//! egui rendering of the core view model.
//!
//! This module is deliberately dumb: it draws the `AppViewModel` and pushes
//! `Msg`s for every interaction; all behavior lives in `scribe_core::update`.

use egui::{Color32, RichText};
use scribe_core::{AppViewModel, ContentPanel, Msg, ResultBlockView};

const SUCCESS_COLOR: Color32 = Color32::from_rgb(0x28, 0xa7, 0x45);
const ERROR_COLOR: Color32 = Color32::from_rgb(0xdc, 0x35, 0x45);
const MUTED: Color32 = Color32::from_rgb(0x9c, 0xa2, 0xad);

pub fn render(ctx: &egui::Context, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    header(ctx, view);

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_salt("main_scroll")
            .show(ui, |ui| {
                form_section(ui, view, msgs);
                progress_section(ui, view);
                results_section(ui, view, msgs);
            });
    });

    notice_modal(ctx, view, msgs);
}

fn header(ctx: &egui::Context, view: &AppViewModel) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Scribe");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match &view.server_status {
                    Some(status) if status.online => {
                        ui.label(RichText::new("● Server online").color(SUCCESS_COLOR))
                            .on_hover_text(&status.detail);
                    }
                    Some(status) => {
                        ui.label(RichText::new("● Server offline").color(ERROR_COLOR))
                            .on_hover_text(&status.detail);
                    }
                    None => {
                        ui.label(RichText::new("Checking server...").color(MUTED));
                    }
                }
            });
        });
    });
}

fn form_section(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    ui.add_space(4.0);
    ui.label("Prompt");
    let mut prompt = view.prompt.clone();
    let response = ui.add(
        egui::TextEdit::multiline(&mut prompt)
            .desired_rows(4)
            .desired_width(f32::INFINITY)
            .hint_text("Describe the article to generate"),
    );
    if response.changed() {
        msgs.push(Msg::PromptChanged(prompt));
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label("Articles");
        let mut count = view.article_count;
        if ui.add(egui::DragValue::new(&mut count).speed(0.1)).changed() {
            msgs.push(Msg::ArticleCountChanged(count));
        }
        ui.add_space(12.0);
        ui.label("Delay (s)");
        let mut delay = view.delay_seconds;
        if ui.add(egui::DragValue::new(&mut delay).speed(0.1)).changed() {
            msgs.push(Msg::DelaySecondsChanged(delay));
        }
        ui.add_space(12.0);
        let mut auto_save = view.auto_save;
        if ui.checkbox(&mut auto_save, "Auto-save on server").changed() {
            msgs.push(Msg::AutoSaveToggled(auto_save));
        }
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(view.generate_enabled, egui::Button::new("Generate"))
            .clicked()
        {
            msgs.push(Msg::GenerateClicked);
        }
        if ui
            .add_enabled(view.stop_enabled, egui::Button::new("Stop"))
            .clicked()
        {
            msgs.push(Msg::StopClicked);
        }
        if view.stop_enabled {
            ui.spinner();
            ui.label(RichText::new("Waiting for the server...").color(MUTED));
        }
    });
    ui.add_space(8.0);
    ui.separator();
}

fn progress_section(ui: &mut egui::Ui, view: &AppViewModel) {
    let Some(progress) = view.progress else {
        return;
    };
    let fraction = if progress.completed {
        1.0
    } else if progress.total > 0 {
        progress.done as f32 / progress.total as f32
    } else {
        0.0
    };

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let bar = egui::ProgressBar::new(fraction)
            .desired_width(ui.available_width() - 64.0)
            .corner_radius(3.0);
        ui.add(bar);
        ui.label(
            RichText::new(format!("{} / {}", progress.done, progress.total)).color(MUTED),
        );
    });
}

fn results_section(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    if !view.results_visible {
        return;
    }

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.heading("Results");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(!view.results.is_empty(), egui::Button::new("Export report"))
                .clicked()
            {
                msgs.push(Msg::ExportClicked);
            }
        });
    });
    ui.add_space(6.0);

    for block in &view.results {
        result_block(ui, block, msgs);
    }
}

fn result_block(ui: &mut egui::Ui, block: &ResultBlockView, msgs: &mut Vec<Msg>) {
    let accent = if block.success { SUCCESS_COLOR } else { ERROR_COLOR };

    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, accent))
        .corner_radius(4.0)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&block.title).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(block.status_label).color(accent));
                });
            });

            if !block.success {
                let message = block.message.as_deref().unwrap_or("generation failed");
                ui.add_space(6.0);
                ui.label(RichText::new(message).color(ERROR_COLOR));
                return;
            }

            ui.add_space(6.0);
            ui.columns(2, |columns| {
                content_panel(
                    &mut columns[0],
                    "Original draft",
                    block.original_content.as_deref().unwrap_or(""),
                    ("original", block.index),
                );
                content_panel(
                    &mut columns[1],
                    "Replaced draft",
                    block.replaced_content.as_deref().unwrap_or(""),
                    ("replaced", block.index),
                );
            });

            if let Some(path) = &block.saved_file_path {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Saved: {path}")).small().color(MUTED));
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if block.can_copy {
                    if ui.button("Copy original").clicked() {
                        msgs.push(Msg::CopyClicked {
                            index: block.index,
                            panel: ContentPanel::Original,
                        });
                    }
                    if ui.button("Copy replaced").clicked() {
                        msgs.push(Msg::CopyClicked {
                            index: block.index,
                            panel: ContentPanel::Replaced,
                        });
                    }
                }
                if block.can_save {
                    if ui.button("Save to server").clicked() {
                        msgs.push(Msg::SaveClicked { index: block.index });
                    }
                }
            });
        });
    ui.add_space(8.0);
}

fn content_panel(ui: &mut egui::Ui, title: &str, text: &str, salt: (&str, usize)) {
    ui.label(RichText::new(title).small().color(MUTED));
    egui::ScrollArea::vertical()
        .id_salt(salt)
        .max_height(200.0)
        .show(ui, |ui| {
            ui.label(RichText::new(text).monospace());
        });
}

fn notice_modal(ctx: &egui::Context, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    let Some(notice) = &view.notice else {
        return;
    };

    let modal = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui| {
        ui.set_width(360.0);
        let title = if notice.is_error { "Error" } else { "Notice" };
        let color = if notice.is_error {
            ERROR_COLOR
        } else {
            ui.visuals().strong_text_color()
        };
        ui.label(RichText::new(title).color(color).strong());
        ui.add_space(6.0);
        ui.label(&notice.text);
        ui.add_space(10.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("OK").clicked() {
                msgs.push(Msg::NoticeDismissed);
            }
        });
    });
    if modal.should_close() {
        msgs.push(Msg::NoticeDismissed);
    }
}
