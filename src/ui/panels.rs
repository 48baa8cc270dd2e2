use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Mode};

// ---------------------------------------------------------------------------
// Left side panel – mode and selectors
// ---------------------------------------------------------------------------

/// Render the left options panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Options");
    ui.separator();

    ui.strong("Choose what to display:");
    egui::ComboBox::from_id_salt("display_mode")
        .selected_text(state.mode.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for mode in Mode::ALL {
                ui.selectable_value(&mut state.mode, mode, mode.label());
            }
        });
    ui.separator();

    let Some(len) = state.dataset.as_ref().map(|ds| ds.len()) else {
        ui.label("No dataset loaded.");
        return;
    };

    match state.mode {
        Mode::Info => info_controls(ui, state, len),
        Mode::Stats => {}
        Mode::Compare => compare_controls(ui, state),
    }
}

fn info_controls(ui: &mut Ui, state: &mut AppState, len: usize) {
    let mut query = state.search.clone();
    ui.label("Search Pokémon by name");
    if ui
        .add(egui::TextEdit::singleline(&mut query).hint_text("e.g. pika"))
        .changed()
    {
        state.set_search(&query);
    }
    ui.add_space(6.0);

    if state.is_searching() {
        hit_selector(ui, state);
        return;
    }

    if len == 0 {
        ui.label("The table is empty.");
        return;
    }
    let mut index = state.browse_index;
    ui.label("Select Pokémon Index");
    if ui
        .add(egui::Slider::new(&mut index, 0..=len - 1))
        .changed()
    {
        state.set_browse_index(index);
    }
}

/// Second stage of a name search: pick one row among the matches.
fn hit_selector(ui: &mut Ui, state: &mut AppState) {
    let Some(ds) = &state.dataset else {
        return;
    };
    if state.search_hits.is_empty() {
        return;
    }

    let label_for = |row: usize| {
        ds.get(row)
            .map(|r| format!("{row}: {}", r.name))
            .unwrap_or_else(|_| row.to_string())
    };
    let current = state.selected_hit;
    let mut picked = None;

    ui.label(format!("Select Pokémon ({} matches)", state.search_hits.len()));
    egui::ComboBox::from_id_salt("search_hits")
        .selected_text(current.map(&label_for).unwrap_or_default())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for &row in &state.search_hits {
                if ui
                    .selectable_label(current == Some(row), label_for(row))
                    .clicked()
                {
                    picked = Some(row);
                }
            }
        });

    if let Some(row) = picked {
        state.select_hit(row);
    }
}

fn compare_controls(ui: &mut Ui, state: &mut AppState) {
    if let Some(label) = type_selector(
        ui,
        "Select First Type",
        "compare_first",
        &state.primary_options,
        state.compare_first.as_deref(),
    ) {
        state.set_compare_first(label);
    }
    ui.add_space(6.0);
    if let Some(label) = type_selector(
        ui,
        "Select Second Type",
        "compare_second",
        &state.secondary_options,
        state.compare_second.as_deref(),
    ) {
        state.set_compare_second(label);
    }
}

/// Combo box over `options`; returns the newly picked label, if any.
fn type_selector(
    ui: &mut Ui,
    title: &str,
    id: &str,
    options: &[String],
    current: Option<&str>,
) -> Option<String> {
    let mut picked = None;
    ui.label(title);
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.unwrap_or_default())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in options {
                if ui
                    .selectable_label(current == Some(option.as_str()), option)
                    .clicked()
                {
                    picked = Some(option.clone());
                }
            }
        });
    picked.filter(|p| Some(p.as_str()) != current)
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let source = state
                .source
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            ui.label(format!("{} Pokémon loaded from {source}", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open Pokédex table")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.load(&path) {
            log::error!("Failed to load file: {e:#}");
        }
    }
}
