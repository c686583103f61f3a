//! Resolved design token set

use serde::{Deserialize, Serialize};

use crate::tokens::LayoutTokens;

/// Light/dark color scheme selector
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Rendering density
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    Comfortable,
}

impl Density {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Comfortable => "comfortable",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "compact" => Some(Self::Compact),
            "comfortable" => Some(Self::Comfortable),
            _ => None,
        }
    }
}

/// Fully resolved visual design configuration
///
/// A `DesignTokens` value is a fresh snapshot produced per resolution call;
/// there is no shared state behind it. Color fields hold the literal strings
/// handed to the rendering layer (normally `#RRGGBB`, but malformed overrides
/// are passed through as-is).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignTokens {
    pub theme: String,
    pub color: String,
    pub background: String,
    pub accent: String,
    pub font_family: String,
    pub radius: i32,
    pub padding: i32,
    pub density: Density,
    pub mode: Mode,

    // Light/dark variant colors; when set, they override the base colors for
    // the matching mode
    pub color_light: Option<String>,
    pub color_dark: Option<String>,
    pub background_light: Option<String>,
    pub background_dark: Option<String>,
    pub accent_light: Option<String>,
    pub accent_dark: Option<String>,

    // Radix UI theme tokens, recorded verbatim when supplied
    pub radix_accent_color: Option<String>,
    pub radix_gray_color: Option<String>,
    pub radix_radius: Option<String>,
    pub radix_scaling: Option<String>,

    pub layout: LayoutTokens,
}

impl DesignTokens {
    /// Copy of the tokens projected for `mode`.
    ///
    /// The base color/background/accent are re-derived from that mode's
    /// variant fields where present. The receiver is left untouched.
    pub fn for_mode(&self, mode: Mode) -> Self {
        let mut tokens = self.clone();
        tokens.mode = mode;

        let (color, background, accent) = match mode {
            Mode::Light => (&self.color_light, &self.background_light, &self.accent_light),
            Mode::Dark => (&self.color_dark, &self.background_dark, &self.accent_dark),
        };
        if let Some(color) = color {
            tokens.color = color.clone();
        }
        if let Some(background) = background {
            tokens.background = background.clone();
        }
        if let Some(accent) = accent {
            tokens.accent = accent.clone();
        }

        tokens
    }

    /// Copy of the tokens with light mode applied
    pub fn light_mode(&self) -> Self {
        self.for_mode(Mode::Light)
    }

    /// Copy of the tokens with dark mode applied
    pub fn dark_mode(&self) -> Self {
        self.for_mode(Mode::Dark)
    }
}
