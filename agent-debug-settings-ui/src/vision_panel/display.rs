//! egui rendering of the vision panel.

use egui::{RichText, Sense, Ui, Vec2};

use super::view::{HeaderItem, PANEL_TOP_SPACING, PanelChild, PanelView, TOOLTIP_WIDTH};
use super::{PanelResponse, VisionConfigPanel, VisionPanelLayout};
use crate::feature_panel::FeaturePanel;
use crate::icons;
use crate::switch::Switch;

/// Divider geometry: 1 px wide, 14 px tall, 16 px before and 12 px after.
const DIVIDER_SIZE: Vec2 = Vec2::new(1.0, 14.0);
const DIVIDER_SPACE_BEFORE: f32 = 16.0;
const DIVIDER_SPACE_AFTER: f32 = 12.0;

impl VisionConfigPanel {
    /// Render the panel for this frame.
    pub fn show(&mut self, ui: &mut Ui) -> PanelResponse {
        self.sync_visibility();
        let key = self.render_key();
        let view = self.view();
        self.last_rendered = Some(key);

        let mut response = PanelResponse::default();
        let PanelView::Composed(children) = view else {
            return response;
        };
        response.visible = true;

        for child in &children {
            match child {
                PanelChild::ParamSummary => self.summary.show(ui),
                PanelChild::FeaturePanel(layout) => {
                    response.toggled = self.show_feature_panel(ui, layout);
                }
            }
        }

        if let Some(disabled) = response.toggled {
            self.set_disabled(disabled);
            ui.ctx().request_repaint();
        }
        response
    }

    fn show_feature_panel(&mut self, ui: &mut Ui, layout: &VisionPanelLayout) -> Option<bool> {
        let trigger = &mut self.trigger;
        let mut toggled = None;

        FeaturePanel::new(layout.tooltip_id)
            .header_icon(layout.header_icon.rich_text())
            .top_spacing(PANEL_TOP_SPACING)
            .no_body_spacing(layout.no_body_spacing)
            .show(
                ui,
                |ui| show_title(ui, layout),
                |ui| {
                    // Right-to-left layout: add from the rightmost item
                    for item in layout.header_right.iter().rev() {
                        match *item {
                            HeaderItem::ParamConfigTrigger => trigger.show(ui),
                            HeaderItem::Divider => show_divider(ui),
                            HeaderItem::Switch { on, size } => {
                                let mut value = on;
                                if ui.add(Switch::new(&mut value).size(size)).changed() {
                                    toggled = Some(value);
                                }
                            }
                        }
                    }
                },
            );

        toggled
    }
}

fn show_title(ui: &mut Ui, layout: &VisionPanelLayout) {
    ui.add_space(4.0);
    ui.label(RichText::new(&layout.title).strong());
    ui.add_space(4.0);

    ui.add(
        egui::Label::new(
            RichText::new(icons::HELP_CIRCLE)
                .color(icons::HELP_COLOR)
                .size(icons::HELP_SIZE),
        )
        .sense(Sense::hover()),
    )
    .on_hover_ui(|ui| {
        ui.set_max_width(TOOLTIP_WIDTH);
        ui.label(&layout.description);
    });
}

fn show_divider(ui: &mut Ui) {
    // Items are added right to left, so "after" comes first
    ui.add_space(DIVIDER_SPACE_AFTER);
    let (rect, _) = ui.allocate_exact_size(DIVIDER_SIZE, Sense::hover());
    ui.painter().rect_filled(rect, 0.0, icons::DIVIDER_COLOR);
    ui.add_space(DIVIDER_SPACE_BEFORE);
}
