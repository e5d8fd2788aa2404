//! Vision configuration panel.
//!
//! Shown only while vision is enabled in the shared store. When visible it
//! renders the parameter summary collaborator followed by a titled panel
//! with a help tooltip, the parameter editor trigger, a divider and a local
//! on/off switch.
//!
//! The switch state belongs to the panel instance alone. Flipping it changes
//! what the switch draws and nothing else; the store's `enable` flag stays
//! the only thing that decides whether the panel is shown.

mod display;
mod state;
mod view;

use std::sync::Arc;

use agent_debug_config::{Localizer, VisionConfigSource};

use crate::ConfigWidget;

pub use state::{LocalToggleState, PanelVisibility, RenderKey};
pub use view::{HeaderItem, PanelChild, PanelView, TOOLTIP_ID, VisionPanelLayout};

/// What happened while showing the panel for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelResponse {
    /// Whether anything was drawn
    pub visible: bool,
    /// New switch value if the user flipped it this frame
    pub toggled: Option<bool>,
}

/// Conditional vision settings panel.
pub struct VisionConfigPanel {
    store: Arc<dyn VisionConfigSource>,
    i18n: Arc<Localizer>,
    summary: Box<dyn ConfigWidget>,
    trigger: Box<dyn ConfigWidget>,
    toggle: LocalToggleState,
    visibility: PanelVisibility,
    last_rendered: Option<RenderKey>,
}

impl std::fmt::Debug for VisionConfigPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisionConfigPanel")
            .field("toggle", &self.toggle)
            .field("visibility", &self.visibility)
            .field("last_rendered", &self.last_rendered)
            .finish_non_exhaustive()
    }
}

impl VisionConfigPanel {
    /// Create the panel.
    ///
    /// `summary` is the parameter summary shown above the panel and
    /// `trigger` the parameter editor opener placed in the header. Both are
    /// mounted right away if vision is already enabled.
    pub fn new(
        store: Arc<dyn VisionConfigSource>,
        i18n: Arc<Localizer>,
        summary: Box<dyn ConfigWidget>,
        trigger: Box<dyn ConfigWidget>,
    ) -> Self {
        let mut panel = Self {
            store,
            i18n,
            summary,
            trigger,
            toggle: LocalToggleState::default(),
            visibility: PanelVisibility::Hidden,
            last_rendered: None,
        };
        panel.sync_visibility();
        panel
    }

    /// Visibility as of the last sync with the store.
    pub fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    /// Current value of the local switch.
    pub fn disabled(&self) -> bool {
        self.toggle.disabled()
    }

    /// Change handler of the switch.
    ///
    /// Updates local state only; the store is not touched.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.toggle.set_disabled(disabled) {
            log::debug!("Vision panel switch set to {}", disabled);
        }
    }

    /// Inputs the next frame would render from.
    pub fn render_key(&self) -> RenderKey {
        RenderKey {
            enable: self.store.is_vision_enabled(),
            disabled: self.toggle.disabled(),
            locale: self.i18n.locale(),
            locale_revision: self.i18n.revision(),
        }
    }

    /// Whether the store, the switch or the locale changed since the last frame.
    pub fn needs_repaint(&self) -> bool {
        self.last_rendered != Some(self.render_key())
    }

    /// Describe what the panel renders right now.
    pub fn view(&self) -> PanelView {
        PanelView::build(
            self.store.is_vision_enabled(),
            self.toggle.disabled(),
            &self.i18n,
        )
    }

    /// Mount or unmount collaborators to match the store's flag.
    ///
    /// Returns the resulting visibility.
    pub fn sync_visibility(&mut self) -> PanelVisibility {
        let next = PanelVisibility::from_enabled(self.store.is_vision_enabled());
        if next == self.visibility {
            return next;
        }

        match next {
            PanelVisibility::Visible => {
                self.summary.on_mount();
                self.trigger.on_mount();
            }
            PanelVisibility::Hidden => {
                self.summary.on_unmount();
                self.trigger.on_unmount();
            }
        }
        log::debug!(
            "Vision panel visibility: {:?} -> {:?}",
            self.visibility,
            next
        );
        self.visibility = next;
        next
    }
}

impl Drop for VisionConfigPanel {
    fn drop(&mut self) {
        if self.visibility.is_visible() {
            self.summary.on_unmount();
            self.trigger.on_unmount();
        }
    }
}
