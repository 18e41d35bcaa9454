use super::*;

impl EguiApp {
    pub(super) fn render_result(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        match self.controller.outcome() {
            SubmissionOutcome::Unset => {}
            SubmissionOutcome::Pending => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Analyzing transaction...").color(palette.text_muted));
                });
            }
            SubmissionOutcome::Succeeded { verdict, .. } => {
                let fraud = matches!(verdict, crate::transaction::Verdict::Fraud);
                let color = style::verdict_color(fraud);
                let probability = self
                    .controller
                    .outcome()
                    .probability_label()
                    .unwrap_or_default();
                Frame::new()
                    .fill(style::sample_row_fill(fraud))
                    .stroke(egui::Stroke::new(1.0, color))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(Margin::same(12))
                    .show(ui, |ui| {
                        ui.label(RichText::new(verdict.headline()).strong().size(18.0).color(color));
                        ui.label(format!("Fraud Probability: {probability}"));
                    });
            }
            SubmissionOutcome::Failed(message) => {
                Frame::new()
                    .fill(style::sample_row_fill(true))
                    .stroke(egui::Stroke::new(1.0, palette.fraud))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(Margin::same(12))
                    .show(ui, |ui| {
                        ui.label(RichText::new(format!("Error: {message}")).color(palette.fraud));
                    });
            }
        }
    }
}
