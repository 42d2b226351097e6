//! Theme colours and the mapping from domain state to presentation tokens.
//!
//! The palette is an explicit value handed to whatever renders it; nothing
//! here is global.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar::DayClassification;
use crate::events::Priority;

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the opposite mode.
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

/// Colour tokens for one theme mode. Values are CSS hex colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub mode: ThemeMode,
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub secondary_text: &'static str,
    pub border: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
    pub highlight: &'static str,
    pub input_background: &'static str,
    pub low_priority_bg: &'static str,
    pub medium_priority_bg: &'static str,
    pub high_priority_bg: &'static str,
    pub low_priority_text: &'static str,
    pub medium_priority_text: &'static str,
    pub high_priority_text: &'static str,
    pub tab_bar_background: &'static str,
    /// Assignment preview backgrounds.
    pub event_highlight: &'static str,
    pub time_off_highlight: &'static str,
    pub conflict_highlight: &'static str,
}

const LIGHT: Palette = Palette {
    mode: ThemeMode::Light,
    background: "#1B1916",
    card: "#1B1916",
    text: "#FFFFFF",
    secondary_text: "#6B7280",
    border: "#AFACA7",
    primary: "#F3A326",
    secondary: "#9CA3AF",
    success: "#059669",
    warning: "#FBBF24",
    danger: "#EF4444",
    highlight: "#4169E1",
    input_background: "#000000",
    low_priority_bg: "#DCF3E5",
    medium_priority_bg: "#EBF5FF",
    high_priority_bg: "#FEE2E2",
    low_priority_text: "#059669",
    medium_priority_text: "#4169E1",
    high_priority_text: "#DC2626",
    tab_bar_background: "#1B1916",
    event_highlight: "#EBF5FF",
    time_off_highlight: "#FEE2E2",
    conflict_highlight: "#F3E8FF",
};

const DARK: Palette = Palette {
    mode: ThemeMode::Dark,
    background: "#111827",
    card: "#1F2937",
    text: "#F9FAFB",
    secondary_text: "#D1D5DB",
    border: "#374151",
    primary: "#B7922A",
    secondary: "#9CA3AF",
    success: "#10B981",
    warning: "#FBBF24",
    danger: "#EF4444",
    highlight: "#B7922A",
    input_background: "#374151",
    low_priority_bg: "#065F46",
    medium_priority_bg: "#1E3A8A",
    high_priority_bg: "#991B1B",
    low_priority_text: "#34D399",
    medium_priority_text: "#93C5FD",
    high_priority_text: "#FCA5A5",
    tab_bar_background: "#0F172A",
    event_highlight: "#1E3A8A",
    time_off_highlight: "#991B1B",
    conflict_highlight: "#7E22CE",
};

/// Month-grid fills; identical in both modes.
const GRID_EVENT: &str = "#4169E1";
const GRID_TIME_OFF: &str = "#EF4444";
const GRID_CONFLICT: &str = "#9333EA";

/// How a classified day should be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayStyle {
    pub token: &'static str,
    /// Background fill, `None` for an undecorated day.
    pub background: Option<&'static str>,
    /// Whether the day number is drawn highlighted.
    pub emphasized: bool,
    /// Small badges shown under the day number.
    pub badges: &'static [&'static str],
}

impl Palette {
    /// Returns the palette for `mode`.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }

    /// Style for a day in the month-grid calendar.
    pub fn day_style(&self, classification: DayClassification) -> DayStyle {
        let (background, badges): (Option<&'static str>, &'static [&'static str]) =
            match classification {
                DayClassification::Plain => (None, &[]),
                DayClassification::EventOnly => (Some(GRID_EVENT), &[]),
                DayClassification::TimeOffOnly => (Some(GRID_TIME_OFF), &[]),
                DayClassification::Conflict => (Some(GRID_CONFLICT), &["!"]),
            };
        DayStyle {
            token: classification.token(),
            background,
            emphasized: classification != DayClassification::Plain,
            badges,
        }
    }

    /// Style for a day in the assignment-flow schedule preview.
    pub fn preview_style(&self, classification: DayClassification) -> DayStyle {
        let (background, badges): (Option<&'static str>, &'static [&'static str]) =
            match classification {
                DayClassification::Plain => (None, &[]),
                DayClassification::EventOnly => (Some(self.event_highlight), &["Event"]),
                DayClassification::TimeOffOnly => (Some(self.time_off_highlight), &["Off"]),
                DayClassification::Conflict => {
                    (Some(self.conflict_highlight), &["Event", "Off"])
                }
            };
        DayStyle {
            token: classification.token(),
            background,
            emphasized: classification != DayClassification::Plain,
            badges,
        }
    }

    /// Legend dot colour for a classification, matching the fill that
    /// `style_of` gives the same day. Undecorated days use the secondary text colour.
    pub fn legend_color(
        &self,
        classification: DayClassification,
        style_of: fn(&Palette, DayClassification) -> DayStyle,
    ) -> &'static str {
        style_of(self, classification)
            .background
            .unwrap_or(self.secondary_text)
    }

    /// Tag background and text colour for an event priority.
    pub fn priority_colors(&self, priority: Priority) -> (&'static str, &'static str) {
        match priority {
            Priority::Low => (self.low_priority_bg, self.low_priority_text),
            Priority::Medium => (self.medium_priority_bg, self.medium_priority_text),
            Priority::High => (self.high_priority_bg, self.high_priority_text),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_parse() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert_eq!("DARK".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }

    #[test]
    fn test_palette_follows_mode() {
        assert_eq!(Palette::for_mode(ThemeMode::Dark).primary, "#B7922A");
        assert_eq!(Palette::for_mode(ThemeMode::Light).primary, "#F3A326");
        assert_eq!(Palette::default().mode, ThemeMode::Light);
    }

    #[test]
    fn test_legend_matches_day_fills() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let palette = Palette::for_mode(mode);
            for style_of in [Palette::day_style, Palette::preview_style] {
                for c in DayClassification::ALL {
                    if let Some(background) = style_of(&palette, c).background {
                        assert_eq!(palette.legend_color(c, style_of), background);
                    }
                }
                assert_eq!(
                    palette.legend_color(DayClassification::Plain, style_of),
                    palette.secondary_text
                );
            }
        }

        let light = Palette::for_mode(ThemeMode::Light);
        assert_eq!(
            light.legend_color(DayClassification::EventOnly, Palette::day_style),
            "#4169E1"
        );
        assert_eq!(
            light.legend_color(DayClassification::Conflict, Palette::day_style),
            "#9333EA"
        );
    }

    #[test]
    fn test_day_styles_are_distinct_in_both_surfaces() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let palette = Palette::for_mode(mode);
            for style_of in [Palette::day_style, Palette::preview_style] {
                let mut backgrounds: Vec<_> = DayClassification::ALL
                    .iter()
                    .map(|c| style_of(&palette, *c).background)
                    .collect();
                backgrounds.sort();
                backgrounds.dedup();
                assert_eq!(backgrounds.len(), 4, "mode {mode}");
            }
        }
    }

    #[test]
    fn test_styles_carry_classification_token() {
        let palette = Palette::default();
        for classification in DayClassification::ALL {
            assert_eq!(
                palette.day_style(classification).token,
                classification.token()
            );
            assert_eq!(
                palette.preview_style(classification).token,
                classification.token()
            );
        }
    }

    #[test]
    fn test_conflict_preview_shows_both_badges() {
        let style = Palette::for_mode(ThemeMode::Dark).preview_style(DayClassification::Conflict);
        assert_eq!(style.background, Some("#7E22CE"));
        assert_eq!(style.badges, &["Event", "Off"]);
        assert!(style.emphasized);
    }

    #[test]
    fn test_plain_day_is_undecorated() {
        let style = Palette::default().day_style(DayClassification::Plain);
        assert_eq!(style.background, None);
        assert!(!style.emphasized);
        assert!(style.badges.is_empty());
    }

    #[test]
    fn test_priority_colors() {
        let palette = Palette::for_mode(ThemeMode::Light);
        assert_eq!(
            palette.priority_colors(Priority::High),
            ("#FEE2E2", "#DC2626")
        );
    }
}
