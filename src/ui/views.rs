use eframe::egui::{self, ScrollArea, Ui};

use crate::data::compare::CompareError;
use crate::data::model::{Pokedex, Record, Stat};
use crate::data::query::members_of_type;
use crate::state::{AppState, InfoTarget};
use crate::ui::charts::comparison_chart;
use crate::ui::portrait::PortraitCache;

const GALLERY_IMAGE_WIDTH: f32 = 100.0;

// ---------------------------------------------------------------------------
// Info view: one record in detail
// ---------------------------------------------------------------------------

pub fn info_view(ui: &mut Ui, state: &AppState, portraits: &mut PortraitCache) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to browse Pokémon  (File → Open…)");
        });
        return;
    };

    match state.info_target() {
        InfoTarget::Row(row) => match dataset.get(row) {
            Ok(record) => record_details(ui, record, portraits),
            Err(e) => {
                log::error!("{e}");
                ui.label(e.to_string());
            }
        },
        InfoTarget::NotFound => {
            ui.label("No Pokémon found with that name.");
        }
        InfoTarget::Nothing => {
            ui.label("The table has no Pokémon.");
        }
    }
}

fn record_details(ui: &mut Ui, record: &Record, portraits: &mut PortraitCache) {
    ui.heading(format!("Name: {}", record.name));
    ui.label(format!(
        "Type 1: {}, Type 2: {}",
        record.primary_type, record.secondary_type
    ));
    ui.label(format!("Total Stats: {}", record.total));
    ui.label(format!(
        "HP: {}, Attack: {}, Defense: {}",
        record.stat(Stat::Hp),
        record.stat(Stat::Attack),
        record.stat(Stat::Defense)
    ));
    ui.label(format!(
        "SP. Atk: {}, SP. Def: {}, Speed: {}",
        record.stat(Stat::SpecialAttack),
        record.stat(Stat::SpecialDefense),
        record.stat(Stat::Speed)
    ));
    ui.add_space(8.0);

    match portraits.image_for(record) {
        Some(image) => {
            ui.add(image.max_height(320.0).corner_radius(4.0));
            ui.label(egui::RichText::new(&record.name).weak());
        }
        None => {
            ui.label(format!("Image not found for {}", record.name));
        }
    }
}

// ---------------------------------------------------------------------------
// Compare view: average-stat chart plus both galleries
// ---------------------------------------------------------------------------

pub fn compare_view(ui: &mut Ui, state: &AppState, portraits: &mut PortraitCache) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to compare types  (File → Open…)");
        });
        return;
    };

    let comparison = match &state.comparison {
        Some(Ok(comparison)) => comparison,
        Some(Err(CompareError::SameType)) => {
            ui.colored_label(
                ui.visuals().warn_fg_color,
                "Please select two different types.",
            );
            return;
        }
        Some(Err(e)) => {
            ui.colored_label(ui.visuals().warn_fg_color, e.to_string());
            return;
        }
        None => {
            ui.label("Select two types to compare.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            comparison_chart(ui, comparison, &state.type_colors);
            for group in &comparison.groups {
                ui.add_space(12.0);
                ui.heading(format!("Pokémon of Type: {}", group.primary_type));
                gallery(ui, dataset, &members_of_type(dataset, &group.primary_type), portraits);
            }
        });
}

/// Names and small portraits for the given rows, in order.
fn gallery(ui: &mut Ui, dataset: &Pokedex, rows: &[usize], portraits: &mut PortraitCache) {
    for &row in rows {
        let Ok(record) = dataset.get(row) else {
            continue;
        };
        ui.label(&record.name);
        match portraits.image_for(record) {
            Some(image) => {
                ui.add(image.max_width(GALLERY_IMAGE_WIDTH));
            }
            None => {
                ui.label("Image not found.");
            }
        }
    }
}
