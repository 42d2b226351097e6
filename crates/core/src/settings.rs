use serde::{Deserialize, Serialize};

use crate::theme::{Palette, ThemeMode};

/// User preferences from the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: ThemeMode,
    /// Remind staff before their assigned events.
    pub event_reminders: bool,
    /// Let staff see events they are not assigned to.
    pub event_visibility: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            event_reminders: true,
            event_visibility: true,
        }
    }
}

impl Settings {
    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    /// Switches between light and dark and returns the new mode.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggle();
        self.theme
    }

    /// Palette for the current theme, to hand to renderers.
    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.theme)
    }
}
