//! Built-in theme presets
//!
//! Each preset is a complete, constant token snapshot with a light and a dark
//! palette. "wrapped" uses a larger corner radius than the rest.

use std::fmt::{Display, Formatter};

use crate::tokens::{Density, DesignTokens, LayoutTokens, Mode};

/// A color/background/accent triple for one color scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub color: &'static str,
    pub background: &'static str,
    pub accent: &'static str,
}

const fn palette(color: &'static str, background: &'static str, accent: &'static str) -> Palette {
    Palette {
        color,
        background,
        accent,
    }
}

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    Default,
    Midnight,
    Nord,
    Paper,
    Wrapped,
}

impl ThemePreset {
    /// Stable preset id, used as the `theme` parameter value.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Midnight => "midnight",
            Self::Nord => "nord",
            Self::Paper => "paper",
            Self::Wrapped => "wrapped",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Midnight => "Midnight",
            Self::Nord => "Nord",
            Self::Paper => "Paper",
            Self::Wrapped => "Wrapped",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 5] = [
            ThemePreset::Default,
            ThemePreset::Midnight,
            ThemePreset::Nord,
            ThemePreset::Paper,
            ThemePreset::Wrapped,
        ];
        &PRESETS
    }

    /// Look up a preset by id.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "default" => Some(Self::Default),
            "midnight" => Some(Self::Midnight),
            "nord" => Some(Self::Nord),
            "paper" => Some(Self::Paper),
            "wrapped" => Some(Self::Wrapped),
            _ => None,
        }
    }

    /// Palette for one color scheme.
    pub fn palette(self, mode: Mode) -> Palette {
        match (self, mode) {
            (Self::Default, Mode::Light) => palette("#1F2937", "#FFFFFF", "#2563EB"),
            (Self::Default, Mode::Dark) => palette("#E5E7EB", "#020617", "#1D4ED8"),
            (Self::Midnight, Mode::Light) => palette("#1F2937", "#F9FAFB", "#2563EB"),
            (Self::Midnight, Mode::Dark) => palette("#E5E7EB", "#020617", "#1D4ED8"),
            (Self::Nord, Mode::Light) => palette("#2E3440", "#ECEFF4", "#5E81AC"),
            (Self::Nord, Mode::Dark) => palette("#ECEFF4", "#2E3440", "#5E81AC"),
            (Self::Paper, Mode::Light) => palette("#1F2937", "#F9FAFB", "#3B82F6"),
            (Self::Paper, Mode::Dark) => palette("#E5E7EB", "#1F2937", "#60A5FA"),
            (Self::Wrapped, Mode::Light) => palette("#1F2937", "#FDF2F8", "#EC4899"),
            (Self::Wrapped, Mode::Dark) => palette("#EC4899", "#020617", "#7B58C9"),
        }
    }

    /// Scheme the preset snapshot is authored in.
    pub fn default_mode(self) -> Mode {
        match self {
            Self::Paper => Mode::Light,
            _ => Mode::Dark,
        }
    }

    /// Corner radius override, where a preset departs from the shared default.
    pub fn radius_override(self) -> Option<i32> {
        match self {
            Self::Wrapped => Some(20),
            _ => None,
        }
    }

    /// Complete token snapshot for this preset.
    pub fn tokens(self) -> DesignTokens {
        let mode = self.default_mode();
        let base = self.palette(mode);
        let light = self.palette(Mode::Light);
        let dark = self.palette(Mode::Dark);

        DesignTokens {
            theme: self.id().to_string(),
            color: base.color.to_string(),
            background: base.background.to_string(),
            accent: base.accent.to_string(),
            font_family: "system-ui".to_string(),
            radius: self.radius_override().unwrap_or(16),
            padding: 16,
            density: Density::Comfortable,
            mode,
            color_light: Some(light.color.to_string()),
            color_dark: Some(dark.color.to_string()),
            background_light: Some(light.background.to_string()),
            background_dark: Some(dark.background.to_string()),
            accent_light: Some(light.accent.to_string()),
            accent_dark: Some(dark.accent.to_string()),
            radix_accent_color: None,
            radix_gray_color: None,
            radix_radius: None,
            radix_scaling: None,
            layout: LayoutTokens::default(),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
