//! Trait definitions for collaborator widgets.
//!
//! Panels place collaborators without knowing what they render. The host
//! application implements these traits for its parameter editor, summary
//! views and similar widgets.

/// A widget a panel mounts, shows and unmounts.
///
/// `on_mount` and `on_unmount` bracket the period during which the owning
/// panel is visible. `show` is called once per frame while mounted.
pub trait ConfigWidget {
    /// Render the widget into `ui`.
    fn show(&mut self, ui: &mut egui::Ui);

    /// The owning panel became visible.
    fn on_mount(&mut self) {}

    /// The owning panel was hidden or dropped.
    fn on_unmount(&mut self) {}
}

impl<F> ConfigWidget for F
where
    F: FnMut(&mut egui::Ui),
{
    fn show(&mut self, ui: &mut egui::Ui) {
        self(ui)
    }
}
