use super::*;
use crate::transaction::FeatureField;

const FIELD_WIDTH: f32 = 200.0;

impl EguiApp {
    pub(super) fn render_form(&mut self, ui: &mut Ui) {
        let pending = self.controller.outcome().is_pending();
        Frame::new()
            .fill(style::palette().bg_secondary)
            .stroke(style::card_stroke())
            .corner_radius(CornerRadius::same(6))
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.label(RichText::new("Transaction Details").strong().size(16.0));
                ui.add_space(8.0);
                let mut submit_requested = false;
                egui::Grid::new("transaction_form")
                    .num_columns(2)
                    .spacing([16.0, 8.0])
                    .show(ui, |ui| {
                        for field in FeatureField::ALL {
                            ui.label(field.label());
                            submit_requested |= self.render_field_input(ui, field);
                            ui.end_row();
                        }
                    });
                ui.add_space(10.0);
                let label = if pending {
                    "Analyzing..."
                } else {
                    "Analyze Transaction"
                };
                let button = ui.add_enabled(
                    !pending,
                    egui::Button::new(RichText::new(label).strong())
                        .min_size(egui::vec2(FIELD_WIDTH, 28.0)),
                );
                if button.clicked() || submit_requested {
                    self.controller.submit();
                }
            });
    }

    /// Returns true when Enter was pressed inside the input.
    fn render_field_input(&mut self, ui: &mut Ui, field: FeatureField) -> bool {
        let mut value = self.controller.field(field).to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut value)
                .hint_text(field.hint())
                .desired_width(FIELD_WIDTH),
        );
        if response.changed() {
            self.controller.update_field(field, value);
        }
        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
    }
}
