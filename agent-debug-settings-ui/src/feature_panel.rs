//! Titled container used by every feature of the debug configuration view.
//!
//! Layout:
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ [icon] title ...                 header_right │
//! ├───────────────────────────────────────────────┤
//! │ body (optional)                               │
//! └───────────────────────────────────────────────┘
//! ```

use egui::{Align, Layout, Margin, Response, RichText, Ui};

/// Corner radius of the outer frame
const PANEL_RADIUS: f32 = 12.0;

/// Padding of the header row and, unless suppressed, the body
const PANEL_PADDING: Margin = Margin::symmetric(12, 8);

/// Minimum height of the header row
const HEADER_HEIGHT: f32 = 28.0;

/// Builder for a titled feature panel.
pub struct FeaturePanel<'a> {
    id_salt: &'a str,
    header_icon: Option<RichText>,
    top_spacing: f32,
    no_body_spacing: bool,
}

impl<'a> FeaturePanel<'a> {
    pub fn new(id_salt: &'a str) -> Self {
        Self {
            id_salt,
            header_icon: None,
            top_spacing: 0.0,
            no_body_spacing: false,
        }
    }

    /// Icon drawn before the title.
    pub fn header_icon(mut self, icon: RichText) -> Self {
        self.header_icon = Some(icon);
        self
    }

    /// Vertical space added above the panel.
    pub fn top_spacing(mut self, spacing: f32) -> Self {
        self.top_spacing = spacing;
        self
    }

    /// Drop the body padding.
    pub fn no_body_spacing(mut self, no_body_spacing: bool) -> Self {
        self.no_body_spacing = no_body_spacing;
        self
    }

    /// Show a panel that has only a header.
    pub fn show(
        self,
        ui: &mut Ui,
        title: impl FnOnce(&mut Ui),
        header_right: impl FnOnce(&mut Ui),
    ) -> Response {
        self.show_inner(ui, title, header_right, None::<fn(&mut Ui)>)
    }

    /// Show a panel with a header and a body.
    ///
    /// `header_right` is laid out right to left, so widgets added first end
    /// up rightmost.
    pub fn show_with_body(
        self,
        ui: &mut Ui,
        title: impl FnOnce(&mut Ui),
        header_right: impl FnOnce(&mut Ui),
        body: impl FnOnce(&mut Ui),
    ) -> Response {
        self.show_inner(ui, title, header_right, Some(body))
    }

    fn show_inner(
        self,
        ui: &mut Ui,
        title: impl FnOnce(&mut Ui),
        header_right: impl FnOnce(&mut Ui),
        body: Option<impl FnOnce(&mut Ui)>,
    ) -> Response {
        if self.top_spacing > 0.0 {
            ui.add_space(self.top_spacing);
        }

        let header_icon = self.header_icon;
        let body_margin = if self.no_body_spacing {
            Margin::ZERO
        } else {
            PANEL_PADDING
        };

        ui.push_id(self.id_salt, |ui| {
            egui::Frame::group(ui.style())
                .corner_radius(PANEL_RADIUS)
                .inner_margin(Margin::ZERO)
                .show(ui, |ui| {
                    egui::Frame::new().inner_margin(PANEL_PADDING).show(ui, |ui| {
                        ui.set_min_height(HEADER_HEIGHT);
                        ui.horizontal(|ui| {
                            if let Some(icon) = header_icon {
                                ui.label(icon);
                            }
                            title(ui);
                            ui.with_layout(Layout::right_to_left(Align::Center), header_right);
                        });
                    });

                    if let Some(body) = body {
                        egui::Frame::new().inner_margin(body_margin).show(ui, body);
                    }
                })
                .response
        })
        .inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    /// Lay out one panel with a body and return the rect the body was given.
    fn body_rect(no_body_spacing: bool) -> egui::Rect {
        let ctx = egui::Context::default();
        ctx.options_mut(|options| options.max_passes = NonZeroUsize::MIN);

        let mut rect = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                FeaturePanel::new("test-panel")
                    .no_body_spacing(no_body_spacing)
                    .show_with_body(
                        ui,
                        |ui| {
                            ui.label("Title");
                        },
                        |ui| {
                            ui.label("right");
                        },
                        |ui| {
                            rect = Some(ui.max_rect());
                            ui.label("body");
                        },
                    );
            });
        });
        rect.expect("Body was not shown")
    }

    #[test]
    fn test_no_body_spacing_drops_body_padding() {
        let padded = body_rect(false);
        let flush = body_rect(true);

        let inset = padded.left() - flush.left();
        assert!((inset - PANEL_PADDING.left as f32).abs() < 0.5);
        let inset = padded.top() - flush.top();
        assert!((inset - PANEL_PADDING.top as f32).abs() < 0.5);
    }

    #[test]
    fn test_show_without_body_lays_out_header() {
        let ctx = egui::Context::default();
        ctx.options_mut(|options| options.max_passes = NonZeroUsize::MIN);

        let mut header_shown = false;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = FeaturePanel::new("test-panel").top_spacing(16.0).show(
                    ui,
                    |ui| {
                        ui.label("Title");
                    },
                    |ui| {
                        header_shown = true;
                        ui.label("right");
                    },
                );
                assert!(response.rect.height() >= HEADER_HEIGHT);
            });
        });
        assert!(header_shown);
    }
}
