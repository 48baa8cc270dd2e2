//! Presentation: egui panels and egui_plot charts over the data layer.

pub mod charts;
pub mod panels;
pub mod portrait;
pub mod views;
