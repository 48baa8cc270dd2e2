use eframe::egui;

use crate::state::{AppState, Mode};
use crate::ui::{charts, panels, portrait::PortraitCache, views};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PokedexApp {
    pub state: AppState,
    portraits: PortraitCache,
}

impl PokedexApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            portraits: PortraitCache::default(),
        }
    }
}

impl eframe::App for PokedexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: mode and selectors ----
        egui::SidePanel::left("options_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the selected view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Pokémon World");
            ui.separator();
            match self.state.mode {
                Mode::Info => views::info_view(ui, &self.state, &mut self.portraits),
                Mode::Stats => charts::stats_view(ui, &self.state),
                Mode::Compare => views::compare_view(ui, &self.state, &mut self.portraits),
            }
        });
    }
}
