mod app;
mod effects;
mod logging;
mod settings;
mod ui;

use scribe_logging::scribe_info;

use app::ScribeApp;

fn main() -> eframe::Result<()> {
    logging::initialize(logging::LogDestination::Both);

    let settings_path = settings::settings_path();
    let app_settings = settings::AppSettings::load(&settings_path);
    scribe_info!(
        "Scribe starting, backend {}, reports under {:?}",
        app_settings.base_url,
        app_settings.output_dir
    );

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1080.0, 760.0))
        .with_min_inner_size([820.0, 560.0])
        .with_title("Scribe");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Scribe",
        options,
        Box::new(move |cc| Ok(Box::new(ScribeApp::new(cc, app_settings, settings_path)))),
    )
}
