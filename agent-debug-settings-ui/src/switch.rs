//! Binary toggle control.
//!
//! ```rust,no_run
//! # fn demo(ui: &mut egui::Ui) {
//! use agent_debug_settings_ui::{Switch, SwitchSize};
//!
//! let mut on = false;
//! if ui.add(Switch::new(&mut on).size(SwitchSize::Md)).changed() {
//!     // `on` already holds the new value
//! }
//! # }
//! ```

use egui::{Color32, Response, Sense, Ui, Vec2, Widget, WidgetInfo, WidgetType};

/// Track color when on (#155EEF).
const ON_COLOR: Color32 = Color32::from_rgb(0x15, 0x5E, 0xEF);

/// Track color when off (#E5E7EB).
const OFF_COLOR: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);

/// Knob diameter relative to the track height.
const KNOB_RATIO: f32 = 0.75;

/// Track dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl SwitchSize {
    pub fn track_size(&self) -> Vec2 {
        match self {
            SwitchSize::Sm => Vec2::new(20.0, 12.0),
            SwitchSize::Md => Vec2::new(28.0, 16.0),
            SwitchSize::Lg => Vec2::new(36.0, 20.0),
        }
    }
}

/// A pill-shaped on/off switch bound to a `bool`.
///
/// Clicking flips the value and marks the response as changed.
#[must_use = "You should put this widget in a ui with `ui.add(widget);`"]
pub struct Switch<'a> {
    on: &'a mut bool,
    size: SwitchSize,
}

impl<'a> Switch<'a> {
    pub fn new(on: &'a mut bool) -> Self {
        Self {
            on,
            size: SwitchSize::default(),
        }
    }

    pub fn size(mut self, size: SwitchSize) -> Self {
        self.size = size;
        self
    }
}

impl Widget for Switch<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, mut response) = ui.allocate_exact_size(self.size.track_size(), Sense::click());

        if response.clicked() {
            *self.on = !*self.on;
            response.mark_changed();
        }
        let on = *self.on;
        response.widget_info(|| WidgetInfo::selected(WidgetType::Checkbox, ui.is_enabled(), on, ""));

        if ui.is_rect_visible(rect) {
            let how_on = ui.ctx().animate_bool_responsive(response.id, on);
            let radius = 0.5 * rect.height();

            let mut track = if on { ON_COLOR } else { OFF_COLOR };
            if !ui.is_enabled() {
                track = track.gamma_multiply(0.5);
            }
            if response.hovered() {
                track = track.gamma_multiply(0.9);
            }

            let painter = ui.painter();
            painter.rect_filled(rect, radius, track);

            let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
            painter.circle_filled(
                egui::pos2(knob_x, rect.center().y),
                KNOB_RATIO * radius,
                Color32::WHITE,
            );
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size_is_md() {
        assert_eq!(SwitchSize::default(), SwitchSize::Md);
    }

    #[test]
    fn test_track_sizes_grow() {
        let sm = SwitchSize::Sm.track_size();
        let md = SwitchSize::Md.track_size();
        let lg = SwitchSize::Lg.track_size();
        assert!(sm.x < md.x && md.x < lg.x);
        assert!(sm.y < md.y && md.y < lg.y);
        for size in [sm, md, lg] {
            assert!(size.x > size.y, "Track should be wider than tall");
        }
    }

    #[test]
    fn test_render_without_input_keeps_value() {
        let ctx = egui::Context::default();
        let mut on = true;
        let mut changed = false;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                changed |= ui.add(Switch::new(&mut on).size(SwitchSize::Lg)).changed();
            });
        });
        assert!(on);
        assert!(!changed);
    }
}
