use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Maximum number of entries kept in the rolling status log.
const MAX_LOG_ENTRIES: usize = 50;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
    /// Rolling status log entries, oldest first.
    pub log: Vec<String>,
}

impl StatusBarState {
    /// Status shown before anything has happened.
    pub fn idle() -> Self {
        Self {
            text: "Enter transaction details or pick a sample".into(),
            badge_label: StatusTone::Idle.label().into(),
            badge_color: style::status_badge_color(StatusTone::Idle),
            log: Vec::new(),
        }
    }

    pub(crate) fn set(&mut self, text: String, tone: StatusTone) {
        self.badge_label = tone.label().into();
        self.badge_color = style::status_badge_color(tone);
        self.log.push(text.clone());
        if self.log.len() > MAX_LOG_ENTRIES {
            let excess = self.log.len() - MAX_LOG_ENTRIES;
            self.log.drain(..excess);
        }
        self.text = text;
    }

    /// Concatenate log entries into a single displayable string.
    pub fn log_text(&self) -> String {
        self.log.join("\n")
    }
}
