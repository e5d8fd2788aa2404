//! egui panels for the agent debug configuration surface.
//!
//! Panels read shared state through the accessor traits of
//! `agent-debug-config` and host collaborator widgets supplied by the
//! embedding application through [`ConfigWidget`].

// Trait interfaces for collaborator widgets
mod traits;
pub use traits::*;

pub mod feature_panel;
pub mod icons;
pub mod switch;
pub mod vision_panel;

pub use feature_panel::FeaturePanel;
pub use switch::{Switch, SwitchSize};
pub use vision_panel::{
    HeaderItem, LocalToggleState, PanelChild, PanelResponse, PanelView, PanelVisibility,
    RenderKey, VisionConfigPanel, VisionPanelLayout,
};

// Re-export types that panel hosts need
pub use agent_debug_config::{
    self as config, ConfigStore, Locale, Localizer, VisionConfig, VisionConfigSource,
};
