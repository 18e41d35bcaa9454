//! egui renderer for the application UI.

mod catalog_panel;
mod form_panel;
mod result_panel;
mod status_bar;
pub mod style;

use crate::egui_app::controller::EguiController;
use crate::egui_app::state::*;
use eframe::egui::{self, CornerRadius, Frame, Margin, RichText, Ui, Vec2};
use std::time::Duration;

/// Smallest window the layout stays usable at.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(720.0, 560.0);

/// Repaint cadence while a background request is outstanding.
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

/// Renders the egui UI using the controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Wrap a controller and start its catalog load and health probe.
    pub fn new(mut controller: EguiController) -> Self {
        controller.start();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::light();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .stroke(style::card_stroke())
                    .inner_margin(Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Fraud Detection").strong());
                    ui.separator();
                    ui.label(
                        RichText::new("Score a card transaction against the fraud model")
                            .color(palette.text_muted),
                    );
                });
            });
    }

    fn render_center(&mut self, ui: &mut Ui) {
        egui::ScrollArea::vertical()
            .id_salt("main_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.render_form(ui);
                ui.add_space(12.0);
                self.render_result(ui);
                ui.add_space(16.0);
                self.render_catalog(ui);
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_jobs();
        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(style::palette().bg_primary)
                    .inner_margin(Margin::same(16)),
            )
            .show(ctx, |ui| self.render_center(ui));
        if self.controller.has_pending_jobs() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}
