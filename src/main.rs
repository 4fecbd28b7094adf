mod app;
mod ui;

use std::path::PathBuf;

use app::DegreeGuideApp;
use degree_guide::data::model::Catalog;
use degree_guide::data::{loader, SAMPLE_CATALOG};
use degree_guide::state::AppState;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional first argument: catalog file to open instead of the sample.
    let state = initial_state(std::env::args_os().nth(1).map(PathBuf::from));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "DegreeGuide – University Finder",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render png/jpg/etc.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DegreeGuideApp::new(state)))
        }),
    )
}

fn initial_state(path: Option<PathBuf>) -> AppState {
    let mut error = None;

    if let Some(path) = path {
        match loader::load_file(&path) {
            Ok(catalog) => {
                log::info!("Loaded {} universities from {}", catalog.len(), path.display());
                return AppState::new(catalog);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                error = Some(format!("Error: {e:#}"));
            }
        }
    }

    let catalog = match loader::parse_json(SAMPLE_CATALOG) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Bundled catalog is invalid: {e:#}");
            error.get_or_insert_with(|| format!("Error: {e:#}"));
            Catalog::default()
        }
    };
    log::info!("Using bundled sample catalog ({} universities)", catalog.len());

    let mut state = AppState::new(catalog);
    state.status_message = error;
    state
}
