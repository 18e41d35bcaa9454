use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_input: Color32,
    pub outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub fraud: Color32,
    pub legitimate: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(245, 242, 237),
        bg_secondary: Color32::from_rgb(236, 232, 225),
        bg_input: Color32::from_rgb(255, 255, 255),
        outline: Color32::from_rgb(200, 194, 184),
        text_primary: Color32::from_rgb(26, 26, 26),
        text_muted: Color32::from_rgb(96, 92, 86),
        accent: Color32::from_rgb(26, 26, 26),
        fraud: Color32::from_rgb(198, 40, 40),
        legitimate: Color32::from_rgb(46, 125, 50),
    }
}

/// Severity of the message shown in the status bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

impl StatusTone {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Busy => "Working",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => Color32::from_rgb(140, 136, 128),
        StatusTone::Busy => Color32::from_rgb(31, 110, 200),
        StatusTone::Info => Color32::from_rgb(64, 140, 112),
        StatusTone::Warning => Color32::from_rgb(192, 138, 43),
        StatusTone::Error => Color32::from_rgb(192, 57, 43),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.dark_mode = false;
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_input;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.fraud;
    visuals.warn_fg_color = status_badge_color(StatusTone::Warning);
    visuals.selection.bg_fill = palette.outline;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_primary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_flat(&mut visuals.widgets.inactive, palette);
    set_flat(&mut visuals.widgets.hovered, palette);
    set_flat(&mut visuals.widgets.active, palette);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.accent);
    visuals.window_corner_radius = CornerRadius::same(4);
    visuals.popup_shadow = Shadow::NONE;
}

fn set_flat(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(4);
    vis.bg_fill = palette.bg_secondary;
    vis.weak_bg_fill = palette.bg_secondary;
    vis.bg_stroke = Stroke::new(1.0, palette.outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Background tint for a catalog row.
pub fn sample_row_fill(fraud: bool) -> Color32 {
    if fraud {
        Color32::from_rgb(253, 236, 234)
    } else {
        Color32::from_rgb(232, 245, 233)
    }
}

pub fn verdict_color(fraud: bool) -> Color32 {
    let palette = palette();
    if fraud { palette.fraud } else { palette.legitimate }
}

pub fn card_stroke() -> Stroke {
    Stroke::new(1.0, palette().outline)
}
