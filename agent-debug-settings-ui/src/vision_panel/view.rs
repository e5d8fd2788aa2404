//! Description of what the vision panel renders for a given input.
//!
//! Building the view touches no egui state, which keeps the visibility
//! contract testable without a frame.

use agent_debug_config::Localizer;
use agent_debug_config::i18n::{VISION_DESCRIPTION, VISION_NAME};

use crate::icons::PanelIcon;
use crate::switch::SwitchSize;

/// Id salt of the panel and its help tooltip.
pub const TOOLTIP_ID: &str = "config-vision-tooltip";

/// Vertical space above the titled panel.
pub const PANEL_TOP_SPACING: f32 = 16.0;

/// Width of the help tooltip body.
pub const TOOLTIP_WIDTH: f32 = 180.0;

/// Rendered output of the vision panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    /// Vision disabled: nothing is drawn and no collaborator is mounted
    Empty,
    /// Vision enabled: children in render order
    Composed(Vec<PanelChild>),
}

/// Top-level children of a composed view.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelChild {
    /// The parameter summary collaborator
    ParamSummary,
    /// The titled panel
    FeaturePanel(VisionPanelLayout),
}

/// Items of the header-right region, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderItem {
    /// The parameter editor trigger collaborator
    ParamConfigTrigger,
    Divider,
    Switch { on: bool, size: SwitchSize },
}

/// Contents of the titled panel.
#[derive(Debug, Clone, PartialEq)]
pub struct VisionPanelLayout {
    pub header_icon: PanelIcon,
    pub title: String,
    /// Shown when hovering the help icon
    pub description: String,
    pub tooltip_id: &'static str,
    pub header_right: Vec<HeaderItem>,
    pub no_body_spacing: bool,
}

impl PanelView {
    /// Build the view for the given store flag, toggle value and locale.
    pub fn build(enable: bool, disabled: bool, i18n: &Localizer) -> PanelView {
        if !enable {
            return PanelView::Empty;
        }

        let layout = VisionPanelLayout {
            header_icon: PanelIcon::Eye,
            title: i18n.t(VISION_NAME),
            description: i18n.t(VISION_DESCRIPTION),
            tooltip_id: TOOLTIP_ID,
            header_right: vec![
                HeaderItem::ParamConfigTrigger,
                HeaderItem::Divider,
                HeaderItem::Switch {
                    on: disabled,
                    size: SwitchSize::Md,
                },
            ],
            no_body_spacing: true,
        };

        PanelView::Composed(vec![
            PanelChild::ParamSummary,
            PanelChild::FeaturePanel(layout),
        ])
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PanelView::Empty)
    }

    pub fn children(&self) -> &[PanelChild] {
        match self {
            PanelView::Empty => &[],
            PanelView::Composed(children) => children,
        }
    }

    /// The titled panel, if the view is composed.
    pub fn feature_panel(&self) -> Option<&VisionPanelLayout> {
        self.children().iter().find_map(|child| match child {
            PanelChild::FeaturePanel(layout) => Some(layout),
            PanelChild::ParamSummary => None,
        })
    }

    pub fn summary_count(&self) -> usize {
        self.children()
            .iter()
            .filter(|child| matches!(child, PanelChild::ParamSummary))
            .count()
    }
}

impl VisionPanelLayout {
    /// Value shown by the toggle.
    pub fn switch_on(&self) -> Option<bool> {
        self.header_right.iter().find_map(|item| match item {
            HeaderItem::Switch { on, .. } => Some(*on),
            _ => None,
        })
    }

    pub fn has_trigger(&self) -> bool {
        self.header_right.contains(&HeaderItem::ParamConfigTrigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_debug_config::Locale;

    #[test]
    fn test_disabled_store_builds_empty_view() {
        let i18n = Localizer::default();
        for disabled in [false, true] {
            let view = PanelView::build(false, disabled, &i18n);
            assert!(view.is_empty());
            assert!(view.children().is_empty());
            assert!(view.feature_panel().is_none());
            assert_eq!(view.summary_count(), 0);
        }
    }

    #[test]
    fn test_enabled_store_builds_summary_then_panel() {
        let i18n = Localizer::new(Locale::EnUs);
        let view = PanelView::build(true, false, &i18n);

        assert!(matches!(
            view.children(),
            [PanelChild::ParamSummary, PanelChild::FeaturePanel(_)]
        ));

        let layout = view.feature_panel().expect("Expected a feature panel");
        assert_eq!(layout.header_icon, PanelIcon::Eye);
        assert_eq!(layout.title, "Vision");
        assert!(layout.description.starts_with("Enable Vision"));
        assert_eq!(layout.tooltip_id, TOOLTIP_ID);
        assert!(layout.no_body_spacing);
        assert_eq!(
            layout.header_right,
            vec![
                HeaderItem::ParamConfigTrigger,
                HeaderItem::Divider,
                HeaderItem::Switch {
                    on: false,
                    size: SwitchSize::Md
                },
            ]
        );
    }

    #[test]
    fn test_switch_reflects_local_value() {
        let i18n = Localizer::default();
        let view = PanelView::build(true, true, &i18n);
        let layout = view.feature_panel().expect("Expected a feature panel");
        assert_eq!(layout.switch_on(), Some(true));
        assert!(layout.has_trigger());
    }

    #[test]
    fn test_build_is_idempotent() {
        let i18n = Localizer::new(Locale::JaJp);
        assert_eq!(
            PanelView::build(true, true, &i18n),
            PanelView::build(true, true, &i18n)
        );
        assert_eq!(
            PanelView::build(false, false, &i18n),
            PanelView::build(false, false, &i18n)
        );
    }
}
