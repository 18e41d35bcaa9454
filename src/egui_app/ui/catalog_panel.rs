use super::*;
use crate::egui_app::view_model::{self, SampleRowView};
use crate::scoring::SampleCatalog;

const TIME_WIDTH: f32 = 70.0;
const AMOUNT_WIDTH: f32 = 90.0;
const V_WIDTH: f32 = 90.0;
const ROW_HEIGHT: f32 = 24.0;

impl EguiApp {
    pub(super) fn render_catalog(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.label(RichText::new("Sample Transactions").strong().size(16.0));
        ui.add_space(6.0);
        let catalog = match self.controller.catalog() {
            CatalogState::NotRequested | CatalogState::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Loading samples...").color(palette.text_muted));
                });
                return;
            }
            CatalogState::Degraded => {
                ui.label(
                    RichText::new("Samples unavailable. You can still enter values manually.")
                        .color(palette.text_muted),
                );
                return;
            }
            CatalogState::Loaded(catalog) => catalog.clone(),
        };
        self.render_sample_table(ui, &catalog);
        ui.add_space(10.0);
        render_explanations(ui, &catalog);
    }

    fn render_sample_table(&mut self, ui: &mut Ui, catalog: &SampleCatalog) {
        if catalog.samples.is_empty() {
            ui.label(RichText::new("No samples available.").color(style::palette().text_muted));
            return;
        }
        render_header(ui);
        for (index, sample) in catalog.samples.iter().enumerate() {
            let row = view_model::sample_row(sample);
            let clicked = ui
                .push_id(("sample_row", index), |ui| render_row(ui, &row))
                .inner;
            if clicked {
                self.controller.apply_sample(sample);
            }
        }
    }
}

fn render_header(ui: &mut Ui) {
    let muted = style::palette().text_muted;
    ui.horizontal(|ui| {
        ui.add_space(6.0);
        cell(ui, TIME_WIDTH, RichText::new("Time").strong().color(muted));
        cell(ui, AMOUNT_WIDTH, RichText::new("Amount ($)").strong().color(muted));
        for name in ["V1", "V2", "V3", "V4"] {
            cell(ui, V_WIDTH, RichText::new(name).strong().color(muted));
        }
        ui.label(RichText::new("Action").strong().color(muted));
    });
}

/// Returns true when the row's apply button was clicked.
fn render_row(ui: &mut Ui, row: &SampleRowView) -> bool {
    Frame::new()
        .fill(style::sample_row_fill(row.fraud))
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                cell(ui, TIME_WIDTH, RichText::new(&row.time));
                cell(ui, AMOUNT_WIDTH, RichText::new(&row.amount));
                for value in &row.v {
                    cell(ui, V_WIDTH, RichText::new(value));
                }
                ui.button("Use This Transaction").clicked()
            })
            .inner
        })
        .inner
}

fn cell(ui: &mut Ui, width: f32, text: RichText) {
    ui.add_sized([width, ROW_HEIGHT], egui::Label::new(text).truncate());
}

fn render_explanations(ui: &mut Ui, catalog: &SampleCatalog) {
    let palette = style::palette();
    Frame::new()
        .fill(palette.bg_secondary)
        .stroke(style::card_stroke())
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.label(RichText::new("Field Explanations").strong());
            for line in view_model::explanation_lines(&catalog.explanations) {
                ui.label(RichText::new(line).color(palette.text_muted));
            }
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                legend_swatch(ui, style::sample_row_fill(false));
                ui.label("Legitimate transaction");
                ui.add_space(12.0);
                legend_swatch(ui, style::sample_row_fill(true));
                ui.label("Fraudulent transaction");
            });
        });
}

fn legend_swatch(ui: &mut Ui, fill: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, fill);
}
