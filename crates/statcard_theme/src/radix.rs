//! Radix UI theme token translation
//!
//! Maps the Radix theme vocabulary (named accent and gray colors, radius
//! keywords, scaling percentages) onto concrete hex and pixel values. The
//! mappings are approximate and fixed; unknown names are left for the caller
//! to ignore.

/// Light/dark accent pair for a named Radix accent color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentPalette {
    pub light: &'static str,
    pub dark: &'static str,
}

/// Background/foreground pairs for a named Radix gray color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrayPalette {
    pub light_bg: &'static str,
    pub light_fg: &'static str,
    pub dark_bg: &'static str,
    pub dark_fg: &'static str,
}

/// Look up a Radix accent color by name.
pub fn accent_palette(name: &str) -> Option<AccentPalette> {
    let (light, dark) = match name {
        "pink" => ("#EC4899", "#F472B6"),
        "blue" => ("#3B82F6", "#60A5FA"),
        "green" => ("#10B981", "#34D399"),
        "purple" => ("#8B5CF6", "#A78BFA"),
        "red" => ("#EF4444", "#F87171"),
        "orange" => ("#F97316", "#FB923C"),
        "yellow" => ("#EAB308", "#FCD34D"),
        "cyan" => ("#06B6D4", "#22D3EE"),
        "violet" => ("#7C3AED", "#8B5CF6"),
        "indigo" => ("#6366F1", "#818CF8"),
        _ => return None,
    };
    Some(AccentPalette { light, dark })
}

/// Look up a Radix gray color by name.
pub fn gray_palette(name: &str) -> Option<GrayPalette> {
    let (light_bg, light_fg, dark_bg, dark_fg) = match name {
        "mauve" => ("#FDFCFD", "#1A1523", "#1A1523", "#EDE9FE"),
        "slate" => ("#FBFCFD", "#1E293B", "#0F172A", "#F1F5F9"),
        "gray" => ("#FBFBFB", "#1C1C1F", "#111113", "#E4E4E7"),
        "sage" => ("#FBFDFC", "#1C211C", "#141716", "#ECEDEC"),
        "olive" => ("#FCFDFC", "#1C211C", "#181B18", "#ECEDEC"),
        "sand" => ("#FAF9F6", "#1C1C1A", "#161615", "#E8E6E1"),
        _ => return None,
    };
    Some(GrayPalette {
        light_bg,
        light_fg,
        dark_bg,
        dark_fg,
    })
}

/// Whether a `radius` parameter value is a Radix radius keyword rather than a
/// numeric pixel count.
pub fn is_radius_keyword(value: &str) -> bool {
    matches!(value, "none" | "small" | "medium" | "large" | "full")
}

/// Convert a Radix radius keyword to pixels. Unrecognized keywords map to the
/// medium radius.
pub fn radius_px(keyword: &str) -> i32 {
    match keyword {
        "none" => 0,
        "small" => 4,
        "medium" => 8,
        "large" => 16,
        "full" => 9999,
        _ => 8,
    }
}

/// Convert a Radix scaling percentage string (`"105%"`) to a multiplier.
/// Unparsable or zero values yield the neutral multiplier.
pub fn scaling_factor(scaling: &str) -> f64 {
    let trimmed = scaling.trim().trim_end_matches('%');
    let scale: f64 = trimmed.parse().unwrap_or(0.0);
    if scale == 0.0 {
        1.0
    } else {
        scale / 100.0
    }
}
