use eframe::egui::{RichText, ScrollArea, Stroke, Ui};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Plot, Points};

use crate::color::TypeColors;
use crate::data::compare::TypeComparison;
use crate::data::model::Stat;
use crate::data::summary::{attack_defense_by_type, speed_by_type, top_totals};
use crate::state::AppState;

const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Stats view: three fixed charts over the whole table
// ---------------------------------------------------------------------------

pub fn stats_view(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view stats  (File → Open…)");
        });
        return;
    };
    let colors = &state.type_colors;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Totals of the first N records ----
            let bars = top_totals(dataset, state.top_n);
            ui.heading(format!("Total Stats of First {} Pokémon", bars.len()));
            let names: Vec<String> = bars.iter().map(|b| b.name.clone()).collect();

            Plot::new("top_totals")
                .height(CHART_HEIGHT)
                .legend(Legend::default())
                .x_axis_label("Name")
                .y_axis_label("Total Stats")
                .x_axis_formatter(move |mark: GridMark, _range| label_at(&names, mark.value))
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    for primary_type in &state.primary_options {
                        let group: Vec<Bar> = bars
                            .iter()
                            .filter(|b| &b.primary_type == primary_type)
                            .map(|b| {
                                Bar::new(b.index as f64, b.total)
                                    .name(&b.name)
                                    .fill(colors.color_for(primary_type))
                                    .width(0.7)
                            })
                            .collect();
                        if !group.is_empty() {
                            plot_ui.bar_chart(
                                BarChart::new(group)
                                    .name(primary_type)
                                    .color(colors.color_for(primary_type)),
                            );
                        }
                    }
                });
            ui.add_space(12.0);

            // ---- Attack vs defense ----
            ui.heading("Attack vs Defense by Pokémon Type");
            let groups = attack_defense_by_type(dataset);
            let hover = groups.clone();

            Plot::new("attack_defense")
                .height(CHART_HEIGHT)
                .legend(Legend::default())
                .x_axis_label("Attack")
                .y_axis_label("Defense")
                .label_formatter(move |series, point| {
                    let coords = format!("Attack: {:.0}\nDefense: {:.0}", point.x, point.y);
                    let names = hover
                        .iter()
                        .find(|g| g.primary_type == series)
                        .map(|g| g.names_at(point.x, point.y).join(", "))
                        .unwrap_or_default();
                    if names.is_empty() {
                        coords
                    } else {
                        format!("{names} ({series})\n{coords}")
                    }
                })
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    for group in groups {
                        plot_ui.points(
                            Points::new(group.points)
                                .name(&group.primary_type)
                                .color(colors.color_for(&group.primary_type))
                                .radius(3.0),
                        );
                    }
                });
            ui.add_space(12.0);

            // ---- Speed distribution ----
            ui.heading("Speed Distribution by Type 1");
            let spreads = speed_by_type(dataset);
            let labels: Vec<String> = spreads.iter().map(|s| s.primary_type.clone()).collect();

            Plot::new("speed_by_type")
                .height(CHART_HEIGHT)
                .legend(Legend::default())
                .x_axis_label("Type 1")
                .y_axis_label("Speed")
                .x_axis_formatter(move |mark: GridMark, _range| label_at(&labels, mark.value))
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    for (pos, spread) in spreads.iter().enumerate() {
                        let color = colors.color_for(&spread.primary_type);
                        let s = &spread.summary;
                        let elem = BoxElem::new(
                            pos as f64,
                            BoxSpread::new(s.lower_whisker, s.q1, s.median, s.q3, s.upper_whisker),
                        )
                        .name(&spread.primary_type)
                        .fill(color.gamma_multiply(0.4))
                        .stroke(Stroke::new(1.5, color))
                        .box_width(0.6);
                        plot_ui.box_plot(BoxPlot::new(vec![elem]).name(&spread.primary_type));

                        if !s.outliers.is_empty() {
                            let outliers: Vec<[f64; 2]> =
                                s.outliers.iter().map(|&v| [pos as f64, v]).collect();
                            plot_ui.points(
                                Points::new(outliers)
                                    .name(&spread.primary_type)
                                    .color(color)
                                    .radius(2.5),
                            );
                        }
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Compare view: grouped bars of average stats
// ---------------------------------------------------------------------------

pub fn comparison_chart(ui: &mut Ui, comparison: &TypeComparison, colors: &TypeColors) {
    let [first, second] = &comparison.groups;
    ui.heading(format!(
        "Average Stats Comparison: {} vs {}",
        first.primary_type, second.primary_type
    ));
    ui.label(
        RichText::new(format!(
            "{} has {} Pokémon, {} has {}",
            first.primary_type, first.members, second.primary_type, second.members
        ))
        .weak(),
    );

    let stat_names: Vec<String> = Stat::ALL.iter().map(|s| s.column().to_string()).collect();

    Plot::new("type_comparison")
        .height(CHART_HEIGHT + 80.0)
        .legend(Legend::default())
        .x_axis_label("Stat")
        .y_axis_label("Average Stats")
        .x_axis_formatter(move |mark: GridMark, _range| label_at(&stat_names, mark.value))
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (offset, group) in [(-0.2, first), (0.2, second)] {
                let color = colors.color_for(&group.primary_type);
                let bars: Vec<Bar> = group
                    .iter()
                    .map(|(stat, mean)| {
                        Bar::new(stat.index() as f64 + offset, mean)
                            .name(format!("{} {stat}", group.primary_type))
                            .fill(color)
                            .width(0.4)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name(&group.primary_type).color(color));
            }
        });
}

/// Axis label for a category placed at an integer position.
fn label_at(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}
