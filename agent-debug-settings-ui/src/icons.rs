//! Glyphs and colors shared by the debug panels.
//!
//! Glyphs come from egui's bundled emoji font so no extra font loading is
//! needed.

use egui::Color32;

/// Leading icon of the vision panel.
pub const EYE: &str = "👁";

/// Help affordance next to panel titles.
pub const HELP_CIRCLE: &str = "❓";

/// Accent of the vision panel icon (#6938EF).
pub const EYE_COLOR: Color32 = Color32::from_rgb(0x69, 0x38, 0xEF);

/// Muted gray of help icons (#9CA3AF).
pub const HELP_COLOR: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);

/// Thin header dividers (#E5E7EB).
pub const DIVIDER_COLOR: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);

pub const EYE_SIZE: f32 = 16.0;

pub const HELP_SIZE: f32 = 14.0;

/// Icons a feature panel header can lead with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelIcon {
    Eye,
}

impl PanelIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            PanelIcon::Eye => EYE,
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            PanelIcon::Eye => EYE_COLOR,
        }
    }

    pub fn size(&self) -> f32 {
        match self {
            PanelIcon::Eye => EYE_SIZE,
        }
    }

    /// Rich text ready to be passed to `ui.label`.
    pub fn rich_text(&self) -> egui::RichText {
        egui::RichText::new(self.glyph())
            .color(self.color())
            .size(self.size())
    }
}
