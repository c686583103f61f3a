//! Parameter resolution
//!
//! Turns a flat string key/value map (typically parsed URL query parameters)
//! into fully resolved token sets. Resolution is a pure function: it never
//! fails, reads no shared state, and silently ignores unrecognized keys and
//! malformed values.
//!
//! Candidate values are collected into a staging record with explicit
//! light/dark slots first; the final mode is settled afterwards and every
//! mode-dependent field is projected from the slots in one last pass.

use std::collections::HashMap;

use statcard_core::Color;

use crate::presets::ThemePreset;
use crate::radix;
use crate::tokens::{Density, DesignTokens, Mode, MotionLevel, MotionTokens};

/// One light/dark pair of staged color values.
#[derive(Clone, Debug)]
struct Slot {
    light: String,
    dark: String,
}

impl Slot {
    fn set(&mut self, light: impl Into<String>, dark: impl Into<String>) {
        self.light = light.into();
        self.dark = dark.into();
    }

    fn get(&self, mode: Mode) -> &str {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// Staged overrides collected before the final mode is known.
struct Staging {
    color: Slot,
    background: Slot,
    accent: Slot,
    /// Mode established by the preset/theme steps, used when neither an
    /// explicit `mode` parameter nor a theme suffix decides.
    mode: Mode,
    /// Mode carried by a `-light`/`-dark` theme suffix.
    theme_suffix: Option<Mode>,
}

impl Staging {
    fn new(preset: ThemePreset) -> Self {
        let light = preset.palette(Mode::Light);
        let dark = preset.palette(Mode::Dark);
        Self {
            color: Slot {
                light: light.color.to_string(),
                dark: dark.color.to_string(),
            },
            background: Slot {
                light: light.background.to_string(),
                dark: dark.background.to_string(),
            },
            accent: Slot {
                light: light.accent.to_string(),
                dark: dark.accent.to_string(),
            },
            mode: preset.default_mode(),
            theme_suffix: None,
        }
    }

    fn apply_preset(&mut self, preset: ThemePreset) {
        let light = preset.palette(Mode::Light);
        let dark = preset.palette(Mode::Dark);
        self.color.set(light.color, dark.color);
        self.background.set(light.background, dark.background);
        self.accent.set(light.accent, dark.accent);
    }

    /// Stamp the settled mode and derive every mode-dependent field from the
    /// slots.
    fn project(self, tokens: &mut DesignTokens, mode: Mode) {
        tokens.mode = mode;
        tokens.color = self.color.get(mode).to_string();
        tokens.background = self.background.get(mode).to_string();
        tokens.accent = self.accent.get(mode).to_string();

        tokens.color_light = Some(self.color.light);
        tokens.color_dark = Some(self.color.dark);
        tokens.background_light = Some(self.background.light);
        tokens.background_dark = Some(self.background.dark);
        tokens.accent_light = Some(self.accent.light);
        tokens.accent_dark = Some(self.accent.dark);
    }
}

/// Non-empty parameter lookup. Empty values are treated as absent.
fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

/// Resolve design tokens from string key/value parameters.
///
/// Unrecognized keys are ignored; malformed values degrade to defaults. The
/// result is a fresh snapshot with the light/dark variant fields always
/// populated and `layout` always present.
pub fn resolve(params: &HashMap<String, String>) -> DesignTokens {
    let mut tokens = ThemePreset::Default.tokens();
    let mut staging = Staging::new(ThemePreset::Default);

    // Radix theme tokens are recorded first and take precedence over the
    // classic theme key.
    if let Some(accent) = param(params, "accentColor") {
        tokens.radix_accent_color = Some(accent.to_string());
        match radix::accent_palette(accent) {
            Some(palette) => staging.accent.set(palette.light, palette.dark),
            None => tracing::debug!(accent, "unknown Radix accent color ignored"),
        }
    }
    if let Some(gray) = param(params, "grayColor") {
        tokens.radix_gray_color = Some(gray.to_string());
        match radix::gray_palette(gray) {
            Some(palette) => {
                staging.background.set(palette.light_bg, palette.dark_bg);
                staging.color.set(palette.light_fg, palette.dark_fg);
            }
            None => tracing::debug!(gray, "unknown Radix gray color ignored"),
        }
    }
    if let Some(radius) = param(params, "radius") {
        if radix::is_radius_keyword(radius) {
            // Keyword radii are translated once scaling is known.
            tokens.radix_radius = Some(radius.to_string());
        } else if let Ok(r) = radius.parse::<i32>() {
            tokens.radius = r;
        } else {
            tracing::debug!(radius, "unrecognized radius value ignored");
        }
    }
    if let Some(scaling) = param(params, "scaling") {
        tokens.radix_scaling = Some(scaling.to_string());
    }

    // Classic theme key. A Radix accent suppresses the palette lookup, but a
    // mode suffix still counts for the final mode decision.
    if let Some(theme) = param(params, "theme") {
        let (name, suffix) = split_mode_suffix(theme);
        staging.theme_suffix = suffix;
        if tokens.radix_accent_color.is_none() {
            if let Some(preset) = ThemePreset::from_id(name) {
                staging.apply_preset(preset);
                // A suffixed known theme pins the provisional mode, so an
                // invalid `mode` value later still resolves to the suffix.
                if let Some(suffix) = suffix {
                    staging.mode = suffix;
                }
                tokens.theme = preset.id().to_string();
                if let Some(radius) = preset.radius_override() {
                    tokens.radius = radius;
                }
            } else {
                tracing::debug!(theme, "unknown theme name ignored");
            }
        }
    }

    // Explicit color overrides, either a single value or a LIGHT/DARK pair.
    if let Some(value) = param(params, "color") {
        let (light, dark) = parse_color_pair(value);
        staging.color.set(light, dark);
    }
    if let Some(value) = param(params, "background") {
        let (light, dark) = parse_color_pair(value);
        staging.background.set(light, dark);
    }
    if let Some(value) = param(params, "accent") {
        let (light, dark) = parse_color_pair(value);
        staging.accent.set(light, dark);
    }

    // Deprecated singular variant keys still override the matching slot.
    if let Some(value) = param(params, "color_light") {
        staging.color.light = normalize_color(value);
    }
    if let Some(value) = param(params, "color_dark") {
        staging.color.dark = normalize_color(value);
    }
    if let Some(value) = param(params, "background_light") {
        staging.background.light = normalize_color(value);
    }
    if let Some(value) = param(params, "background_dark") {
        staging.background.dark = normalize_color(value);
    }
    if let Some(value) = param(params, "accent_light") {
        staging.accent.light = normalize_color(value);
    }
    if let Some(value) = param(params, "accent_dark") {
        staging.accent.dark = normalize_color(value);
    }

    if let Some(value) = param(params, "density") {
        match Density::parse(value) {
            Some(density) => tokens.density = density,
            None => tracing::debug!(density = value, "unrecognized density ignored"),
        }
    }

    // Settle the final mode: a valid explicit `mode` wins; a present but
    // invalid one keeps the mode established so far (a known theme's suffix
    // is already folded in); otherwise a theme suffix decides, then the mode
    // the earlier steps established.
    let mode = match param(params, "mode") {
        Some(value) => Mode::parse(value).unwrap_or(staging.mode),
        None => staging.theme_suffix.unwrap_or(staging.mode),
    };

    // Deferred Radix radius keyword.
    if let Some(keyword) = tokens.radix_radius.as_deref() {
        tokens.radius = radix::radius_px(keyword);
    }

    // Radix scaling multiplies padding, and radius when positive.
    if let Some(scaling) = tokens.radix_scaling.as_deref() {
        let scale = radix::scaling_factor(scaling);
        tokens.padding = (tokens.padding as f64 * scale) as i32;
        if tokens.radius > 0 {
            tokens.radius = (tokens.radius as f64 * scale) as i32;
        }
    }

    staging.project(&mut tokens, mode);
    tokens
}

/// Resolve one light and one dark snapshot from a single parameter map.
///
/// Both resolutions are independent: the input is cloned with `mode` forced
/// per copy, a bare theme name is pinned to the matching variant, and
/// LIGHT/DARK pair values are pre-selected per copy.
pub fn resolve_both_modes(params: &HashMap<String, String>) -> (DesignTokens, DesignTokens) {
    let mut light_params = params.clone();
    let mut dark_params = params.clone();

    light_params.insert("mode".to_string(), "light".to_string());
    dark_params.insert("mode".to_string(), "dark".to_string());

    if let Some(theme) = param(params, "theme") {
        let (_, suffix) = split_mode_suffix(theme);
        if suffix.is_none() {
            light_params.insert("theme".to_string(), format!("{theme}-light"));
            dark_params.insert("theme".to_string(), format!("{theme}-dark"));
        }
    }

    for key in ["color", "background", "accent"] {
        if let Some(value) = param(params, key) {
            light_params.insert(key.to_string(), select_mode_half(value, Mode::Light));
            dark_params.insert(key.to_string(), select_mode_half(value, Mode::Dark));
        }
    }

    (resolve(&light_params), resolve(&dark_params))
}

/// Resolve motion tokens from string key/value parameters.
///
/// Starts from the subtle baseline; an unrecognized `motion` value keeps it.
pub fn resolve_motion(params: &HashMap<String, String>) -> MotionTokens {
    let mut level = MotionLevel::Subtle;
    if let Some(value) = param(params, "motion") {
        match MotionLevel::parse(value) {
            Some(parsed) => level = parsed,
            None => tracing::debug!(motion = value, "unrecognized motion level ignored"),
        }
    }
    MotionTokens::for_level(level)
}

/// Split a trailing `-light`/`-dark` mode suffix off a theme name.
fn split_mode_suffix(theme: &str) -> (&str, Option<Mode>) {
    if let Some(name) = theme.strip_suffix("-light") {
        (name, Some(Mode::Light))
    } else if let Some(name) = theme.strip_suffix("-dark") {
        (name, Some(Mode::Dark))
    } else {
        (theme, None)
    }
}

/// Parse a color override: `VALUE` applies to both modes, `LIGHT/DARK`
/// splits. Values with more than one `/` are treated as a single literal.
fn parse_color_pair(value: &str) -> (String, String) {
    let parts: Vec<&str> = value.split('/').collect();
    if parts.len() == 2 {
        (normalize_color(parts[0]), normalize_color(parts[1]))
    } else {
        let single = normalize_color(value);
        (single.clone(), single)
    }
}

/// Prefix a bare value with `#` (query strings never carry one, it delimits
/// the URL fragment) and validate informationally. Malformed values are kept
/// as-is.
fn normalize_color(value: &str) -> String {
    let value = value.trim();
    let color = if value.starts_with('#') {
        value.to_string()
    } else {
        format!("#{value}")
    };
    if let Err(err) = Color::parse(&color) {
        tracing::debug!(%err, "color override failed validation, storing literal");
    }
    color
}

/// Pick the half of a `LIGHT/DARK` pair matching `mode`; single values pass
/// through normalized.
fn select_mode_half(value: &str, mode: Mode) -> String {
    let parts: Vec<&str> = value.split('/').collect();
    if parts.len() == 2 {
        match mode {
            Mode::Light => normalize_color(parts[0]),
            Mode::Dark => normalize_color(parts[1]),
        }
    } else {
        normalize_color(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_known_mode_suffixes() {
        assert_eq!(split_mode_suffix("nord-light"), ("nord", Some(Mode::Light)));
        assert_eq!(split_mode_suffix("nord-dark"), ("nord", Some(Mode::Dark)));
        assert_eq!(split_mode_suffix("nord"), ("nord", None));
        assert_eq!(split_mode_suffix("-light"), ("", Some(Mode::Light)));
    }

    #[test]
    fn color_pairs_split_on_single_slash_only() {
        assert_eq!(
            parse_color_pair("AAAAAA/BBBBBB"),
            ("#AAAAAA".to_string(), "#BBBBBB".to_string())
        );
        assert_eq!(
            parse_color_pair("AAAAAA"),
            ("#AAAAAA".to_string(), "#AAAAAA".to_string())
        );
        // Two slashes: not a pair, kept literal for both modes.
        assert_eq!(
            parse_color_pair("A/B/C"),
            ("#A/B/C".to_string(), "#A/B/C".to_string())
        );
    }

    #[test]
    fn normalize_keeps_existing_hash_prefix() {
        assert_eq!(normalize_color("#AABBCC"), "#AABBCC");
        assert_eq!(normalize_color(" AABBCC "), "#AABBCC");
    }

    #[test]
    fn select_mode_half_picks_the_matching_side() {
        assert_eq!(select_mode_half("AAA/BBB", Mode::Light), "#AAA");
        assert_eq!(select_mode_half("AAA/BBB", Mode::Dark), "#BBB");
        assert_eq!(select_mode_half("AAA", Mode::Dark), "#AAA");
    }
}
