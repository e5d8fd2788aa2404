//! Per-instance state of the vision panel.

use agent_debug_config::Locale;

/// Toggle state owned by one panel instance.
///
/// Starts off when the panel is constructed and is only changed through
/// [`super::VisionConfigPanel::set_disabled`]. It is independent of the
/// store's `enable` flag and never written back to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalToggleState {
    disabled: bool,
}

impl LocalToggleState {
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Returns `true` if the value changed.
    pub(crate) fn set_disabled(&mut self, disabled: bool) -> bool {
        std::mem::replace(&mut self.disabled, disabled) != disabled
    }
}

/// Whether the panel's subtree is mounted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelVisibility {
    /// Vision disabled in the store; nothing is rendered
    #[default]
    Hidden,
    /// Vision enabled; summary, header and toggle are rendered
    Visible,
}

impl PanelVisibility {
    pub fn from_enabled(enable: bool) -> Self {
        if enable {
            PanelVisibility::Visible
        } else {
            PanelVisibility::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, PanelVisibility::Visible)
    }
}

/// Every input the rendered output depends on.
///
/// Two frames with equal keys produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderKey {
    pub enable: bool,
    pub disabled: bool,
    pub locale: Locale,
    /// Covers translation overrides loaded without a locale switch
    pub locale_revision: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_starts_off() {
        assert!(!LocalToggleState::default().disabled());
    }

    #[test]
    fn test_set_disabled_reports_change() {
        let mut state = LocalToggleState::default();
        assert!(state.set_disabled(true));
        assert!(state.disabled());
        assert!(!state.set_disabled(true));
        assert!(state.set_disabled(false));
        assert!(!state.disabled());
    }

    #[test]
    fn test_visibility_follows_enable_flag() {
        assert_eq!(PanelVisibility::from_enabled(false), PanelVisibility::Hidden);
        assert_eq!(PanelVisibility::from_enabled(true), PanelVisibility::Visible);
        assert!(!PanelVisibility::default().is_visible());
    }
}
