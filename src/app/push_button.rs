//! Push button demo: a button that flips between pressed and released

use super::icons::IconCache;
use crate::types::IconKind;
use crate::ui::components::icon_button;
use eframe::egui;
use tracing::debug;

/// Picks the icon for a button from its pressed state
pub type ButtonIcon = fn(bool) -> IconKind;

pub fn lock_icon(pressed: bool) -> IconKind {
    if pressed {
        IconKind::Lock
    } else {
        IconKind::Unlock
    }
}

pub struct PushButton {
    label: String,
    icon: ButtonIcon,
    pressed: bool,
}

impl PushButton {
    pub fn new(label: impl Into<String>, icon: ButtonIcon) -> Self {
        Self { label: label.into(), icon, pressed: false }
    }

    pub fn lock() -> Self {
        Self::new("lock", lock_icon)
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn icon(&self) -> IconKind {
        (self.icon)(self.pressed)
    }

    pub fn activate(&mut self) {
        self.pressed = !self.pressed;
        debug!(label = %self.label, pressed = self.pressed, "Button toggled");
    }

    pub fn show(&mut self, ui: &mut egui::Ui, icons: &mut IconCache) -> egui::Response {
        let response = icon_button(ui, icons, self.icon(), &self.label, self.pressed);
        if response.clicked() {
            self.activate();
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;
    use std::cell::Cell;
    use crate::ui::test_support::{click_at, layout, panel_frame};
    use tempfile::tempdir;

    #[test]
    fn toggles_without_drift() {
        let mut button = PushButton::lock();
        assert!(!button.pressed());
        assert_eq!(button.icon(), IconKind::Unlock);

        button.activate();
        assert!(button.pressed());
        assert_eq!(button.icon(), IconKind::Lock);

        button.activate();
        assert!(!button.pressed());
        assert_eq!(button.icon(), IconKind::Unlock);
    }

    #[test]
    fn instances_are_independent() {
        let mut a = PushButton::lock();
        let b = PushButton::lock();
        a.activate();
        assert!(a.pressed());
        assert!(!b.pressed());
    }

    #[test]
    fn custom_icon_function() {
        let done_icon: ButtonIcon = |p| if p { IconKind::Done } else { IconKind::Pending };
        let mut button = PushButton::new("finish", done_icon);
        assert_eq!(button.icon(), IconKind::Pending);
        button.activate();
        assert_eq!(button.icon(), IconKind::Done);
    }

    #[test]
    fn clicking_toggles_pressed() {
        let dir = tempdir().unwrap();
        let mut icons = IconCache::new(dir.path().to_path_buf());
        let mut button = PushButton::lock();
        let ctx = egui::Context::default();
        theme::install_fonts(&ctx);

        let rect = Cell::new(egui::Rect::NOTHING);
        let mut states = Vec::new();
        let mut frame = panel_frame(|ui| {
            rect.set(button.show(ui, &mut icons).rect);
            states.push(button.pressed());
        });
        layout(&ctx, &mut frame);
        let target = rect.get().center();
        click_at(&ctx, target, &mut frame);
        click_at(&ctx, target, &mut frame);
        drop(frame);

        // layout, press, release, press, release
        assert_eq!(states, vec![false, false, true, true, false]);
        assert!(!button.pressed());
    }
}
