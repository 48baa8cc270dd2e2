mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::PokedexApp;
use clap::Parser;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::parse();
    log::debug!("{config:?}");

    let mut state = AppState {
        top_n: config.top,
        ..AppState::default()
    };
    if let Err(e) = state.load(&config.data) {
        // Keep the window usable; File → Open… can pick another table.
        log::error!("Startup load failed: {e:#}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pokémon World",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render png/jpg/etc.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(PokedexApp::new(state)))
        }),
    )
}
