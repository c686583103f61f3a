use std::collections::HashMap;

use statcard_theme::{
    resolve, resolve_both_modes, Density, DesignTokens, Mode, ThemePreset,
};

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn empty_params_yield_the_default_preset() {
    assert_eq!(resolve(&params(&[])), ThemePreset::Default.tokens());
}

#[test]
fn unrecognized_keys_are_ignored() {
    let resolved = resolve(&params(&[("wat", "x"), ("utm_source", "readme")]));
    assert_eq!(resolved, ThemePreset::Default.tokens());
}

#[test]
fn resolution_is_idempotent() {
    let input = params(&[
        ("theme", "wrapped"),
        ("color", "AAAAAA/BBBBBB"),
        ("scaling", "110%"),
    ]);
    assert_eq!(resolve(&input), resolve(&input));
}

#[test]
fn dual_color_value_fills_both_variants() {
    let resolved = resolve(&params(&[("color", "AAAAAA/BBBBBB")]));
    assert_eq!(resolved.color_light.as_deref(), Some("#AAAAAA"));
    assert_eq!(resolved.color_dark.as_deref(), Some("#BBBBBB"));
    // Default mode is dark, so the base color takes the dark half.
    assert_eq!(resolved.color, "#BBBBBB");

    let resolved = resolve(&params(&[("color", "AAAAAA/BBBBBB"), ("mode", "light")]));
    assert_eq!(resolved.color, "#AAAAAA");
}

#[test]
fn single_color_value_applies_to_both_modes() {
    let resolved = resolve(&params(&[("background", "112233")]));
    assert_eq!(resolved.background_light.as_deref(), Some("#112233"));
    assert_eq!(resolved.background_dark.as_deref(), Some("#112233"));
    assert_eq!(resolved.background, "#112233");
}

#[test]
fn malformed_color_is_stored_as_is() {
    let resolved = resolve(&params(&[("color", "zzz")]));
    assert_eq!(resolved.color, "#zzz");
}

#[test]
fn deprecated_singular_keys_set_one_variant() {
    let resolved = resolve(&params(&[("color_dark", "112233")]));
    assert_eq!(resolved.color_dark.as_deref(), Some("#112233"));
    assert_eq!(resolved.color, "#112233");
    // The light slot keeps the default preset's light foreground.
    assert_eq!(resolved.color_light.as_deref(), Some("#1F2937"));

    let resolved = resolve(&params(&[("accent_light", "445566"), ("mode", "light")]));
    assert_eq!(resolved.accent, "#445566");
}

#[test]
fn theme_suffix_pins_the_mode() {
    let resolved = resolve(&params(&[("theme", "nord-light")]));
    assert_eq!(resolved.mode, Mode::Light);
    assert_eq!(resolved.background, "#ECEFF4");

    let resolved = resolve(&params(&[("theme", "paper-dark")]));
    assert_eq!(resolved.mode, Mode::Dark);
    assert_eq!(resolved.background, "#1F2937");
}

#[test]
fn explicit_mode_beats_a_theme_suffix() {
    let resolved = resolve(&params(&[("theme", "nord-light"), ("mode", "dark")]));
    assert_eq!(resolved.mode, Mode::Dark);
    // Colors follow the settled mode, not the suffix.
    assert_eq!(resolved.background, "#2E3440");
}

#[test]
fn invalid_mode_value_falls_back_to_a_known_theme_suffix() {
    let resolved = resolve(&params(&[("theme", "nord-light"), ("mode", "bogus")]));
    assert_eq!(resolved.mode, Mode::Light);
    assert_eq!(resolved.background, "#ECEFF4");

    // An unknown theme name never pins the provisional mode.
    let resolved = resolve(&params(&[("theme", "zelda-light"), ("mode", "bogus")]));
    assert_eq!(resolved.mode, Mode::Dark);

    // Neither does a suffix when a Radix accent suppressed the theme.
    let resolved = resolve(&params(&[
        ("accentColor", "pink"),
        ("theme", "nord-light"),
        ("mode", "bogus"),
    ]));
    assert_eq!(resolved.mode, Mode::Dark);
}

#[test]
fn unknown_theme_name_is_a_no_op() {
    let resolved = resolve(&params(&[("theme", "zelda")]));
    assert_eq!(resolved, ThemePreset::Default.tokens());

    // The mode suffix still counts even when the base name is unknown.
    let resolved = resolve(&params(&[("theme", "zelda-light")]));
    assert_eq!(resolved.mode, Mode::Light);
    assert_eq!(resolved.background, "#FFFFFF");
}

#[test]
fn numeric_radius_overrides_directly() {
    assert_eq!(resolve(&params(&[("radius", "7")])).radius, 7);
}

#[test]
fn radius_keywords_translate_to_pixels() {
    assert_eq!(resolve(&params(&[("radius", "large")])).radius, 16);
    assert_eq!(resolve(&params(&[("radius", "none")])).radius, 0);
    assert_eq!(resolve(&params(&[("radius", "full")])).radius, 9999);
    // Neither keyword nor numeric: ignored.
    assert_eq!(resolve(&params(&[("radius", "huge")])).radius, 16);
}

#[test]
fn scaling_multiplies_padding_and_radius() {
    let resolved = resolve(&params(&[("scaling", "105%")]));
    assert_eq!(resolved.padding, (16.0_f64 * 1.05) as i32);

    let resolved = resolve(&params(&[("scaling", "150%")]));
    assert_eq!(resolved.padding, 24);
    assert_eq!(resolved.radius, 24);

    let resolved = resolve(&params(&[("radius", "7"), ("scaling", "150%")]));
    assert_eq!(resolved.radius, 10);

    // Zero and unparsable scalings are neutral.
    assert_eq!(resolve(&params(&[("scaling", "0%")])).padding, 16);
    assert_eq!(resolve(&params(&[("scaling", "wide")])).padding, 16);
}

#[test]
fn scaling_does_not_scale_a_zero_radius() {
    let resolved = resolve(&params(&[("radius", "none"), ("scaling", "150%")]));
    assert_eq!(resolved.radius, 0);
    assert_eq!(resolved.padding, 24);
}

#[test]
fn density_accepts_only_known_values() {
    assert_eq!(
        resolve(&params(&[("density", "compact")])).density,
        Density::Compact
    );
    assert_eq!(
        resolve(&params(&[("density", "cozy")])).density,
        Density::Comfortable
    );
}

#[test]
fn radix_accent_translates_per_mode() {
    let resolved = resolve(&params(&[("accentColor", "pink")]));
    assert_eq!(resolved.accent, "#F472B6");
    assert_eq!(resolved.radix_accent_color.as_deref(), Some("pink"));

    let resolved = resolve(&params(&[("accentColor", "pink"), ("mode", "light")]));
    assert_eq!(resolved.accent, "#EC4899");
}

#[test]
fn radix_gray_sets_background_and_foreground() {
    let resolved = resolve(&params(&[("grayColor", "slate")]));
    assert_eq!(resolved.background, "#0F172A");
    assert_eq!(resolved.color, "#F1F5F9");

    let resolved = resolve(&params(&[("grayColor", "slate"), ("mode", "light")]));
    assert_eq!(resolved.background, "#FBFCFD");
    assert_eq!(resolved.color, "#1E293B");
}

#[test]
fn radix_accent_suppresses_the_classic_theme() {
    let resolved = resolve(&params(&[("accentColor", "pink"), ("theme", "nord")]));
    assert_eq!(resolved.accent, "#F472B6");
    // Nord's palette is skipped; the default background remains.
    assert_eq!(resolved.background, "#020617");
    assert_eq!(resolved.theme, "default");

    // The theme's mode suffix still decides the mode.
    let resolved = resolve(&params(&[("accentColor", "pink"), ("theme", "nord-light")]));
    assert_eq!(resolved.mode, Mode::Light);
    assert_eq!(resolved.accent, "#EC4899");
}

#[test]
fn radix_gray_alone_does_not_suppress_the_theme() {
    let resolved = resolve(&params(&[("grayColor", "slate"), ("theme", "nord")]));
    assert_eq!(resolved.background, "#2E3440");
    assert_eq!(resolved.radix_gray_color.as_deref(), Some("slate"));
}

#[test]
fn explicit_color_params_still_apply_after_radix() {
    let resolved = resolve(&params(&[("accentColor", "pink"), ("accent", "123456")]));
    assert_eq!(resolved.accent, "#123456");
}

#[test]
fn unknown_radix_names_keep_defaults() {
    let resolved = resolve(&params(&[("accentColor", "magenta"), ("grayColor", "graphite")]));
    assert_eq!(resolved.accent, "#1D4ED8");
    assert_eq!(resolved.background, "#020617");
    // The raw names are still recorded.
    assert_eq!(resolved.radix_accent_color.as_deref(), Some("magenta"));
}

#[test]
fn mode_projection_does_not_mutate_the_receiver() {
    let resolved = resolve(&params(&[("color", "AAAAAA/BBBBBB")]));
    let before = resolved.clone();

    let light = resolved.light_mode();
    assert_eq!(resolved, before);
    assert_eq!(light.mode, Mode::Light);
    assert_eq!(light.color, "#AAAAAA");

    let dark = light.dark_mode();
    assert_eq!(light.mode, Mode::Light);
    assert_eq!(dark.color, "#BBBBBB");
}

#[test]
fn both_modes_resolve_a_bare_theme_to_its_variants() {
    let (light, dark) = resolve_both_modes(&params(&[("theme", "nord")]));
    assert_eq!(light.mode, Mode::Light);
    assert_eq!(dark.mode, Mode::Dark);
    assert_eq!(light.background, "#ECEFF4");
    assert_eq!(dark.background, "#2E3440");
    assert_eq!(light.theme, "nord");
    assert_eq!(dark.theme, "nord");
}

#[test]
fn both_modes_split_dual_color_values() {
    let (light, dark) = resolve_both_modes(&params(&[("color", "AAAAAA/BBBBBB")]));
    assert_eq!(light.color, "#AAAAAA");
    assert_eq!(dark.color, "#BBBBBB");
}

#[test]
fn both_modes_respect_an_existing_suffix() {
    let (light, dark) = resolve_both_modes(&params(&[("theme", "nord-dark")]));
    // The forced mode param wins over the pinned suffix per copy.
    assert_eq!(light.mode, Mode::Light);
    assert_eq!(dark.mode, Mode::Dark);
    assert_eq!(light.background, "#ECEFF4");
}

#[test]
fn resolved_tokens_round_trip_through_serde() {
    let resolved = resolve(&params(&[("theme", "wrapped"), ("density", "compact")]));
    let json = serde_json::to_string(&resolved).unwrap();
    let back: DesignTokens = serde_json::from_str(&json).unwrap();
    assert_eq!(back, resolved);
}
