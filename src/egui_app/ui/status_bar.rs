use super::*;
use eframe::egui::StrokeKind;

impl EguiApp {
    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .stroke(style::card_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui().status;
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(badge_rect, 2.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        2.0,
                        style::card_stroke(),
                        StrokeKind::Inside,
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    let response =
                        ui.label(RichText::new(&status.text).color(palette.text_primary));
                    if !status.log.is_empty() {
                        response.on_hover_text(status.log_text());
                    }
                });
            });
    }
}
