use aw_theme::tokens::ShadowTokens;
use aw_theme::{ColorScheme, HeroBackground, ThemeField, ThemePreset};
use pretty_assertions::assert_eq;

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(
        ids,
        vec![
            "amberTerminal",
            "commodore",
            "dark",
            "forest",
            "gameBoy",
            "greenPhosphor",
            "light",
            "neonNoir",
            "ocean",
            "sepia",
        ]
    );
}

#[test]
fn preset_ids_resolve_back() {
    for preset in ThemePreset::all() {
        assert_eq!(ThemePreset::from_id(preset.id()), Some(*preset));
    }
    assert_eq!(ThemePreset::from_id("solarized"), None);
}

#[test]
fn light_and_dark_have_distinct_accents() {
    let light = ThemePreset::Light.record();
    let dark = ThemePreset::Dark.record();
    assert_ne!(light.data.accent_pri, dark.data.accent_pri);
    assert_eq!(light.scheme(), ColorScheme::Light);
    assert_eq!(dark.scheme(), ColorScheme::Dark);
}

#[test]
fn every_preset_value_is_legal() {
    for preset in ThemePreset::all() {
        let record = preset.record();
        for field in ThemeField::ALL {
            let value = record.data.get(*field);
            assert!(
                field.check(&value).is_ok(),
                "preset={preset:?} field={field:?} value={value:?}"
            );
        }
    }
}

#[test]
fn dark_presets_use_dark_shadows() {
    let dark_md = ShadowTokens::dark().shadow_md.to_css();
    let light_md = ShadowTokens::light().shadow_md.to_css();

    for preset in ThemePreset::all() {
        let record = preset.record();
        let expected = match preset.palette().scheme() {
            ColorScheme::Dark => &dark_md,
            ColorScheme::Light => &light_md,
        };
        assert_eq!(&record.data.box_shadow, expected, "preset={preset:?}");
    }
}

#[test]
fn neon_noir_runs_a_shader_hero() {
    let record = ThemePreset::NeonNoir.record();
    assert_eq!(record.key, "neonNoir");
    assert_eq!(record.name, "Neon Noir");
    assert_eq!(record.data.hero_background, HeroBackground::Shader);
}
