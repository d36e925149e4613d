//! Built-in theme presets
//!
//! A preset is a palette plus the option choices that give the theme its
//! character (the neon theme runs a shader hero and a scrambling headline,
//! the terminal themes use a typewriter and retro sounds, ...).

use std::fmt::{Display, Formatter};

use crate::defaults::compose;
use crate::options::*;
use crate::palettes::{self, ColorPalette, ColorScheme};
use crate::record::{ThemePatch, ThemeRecord};
use crate::tokens::{DesignTokens, ShadowTokens};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    Light,
    Dark,
    NeonNoir,
    AmberTerminal,
    GreenPhosphor,
    Commodore,
    GameBoy,
    Sepia,
    Ocean,
    Forest,
}

impl ThemePreset {
    /// Stable registry key.
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::NeonNoir => "neonNoir",
            Self::AmberTerminal => "amberTerminal",
            Self::GreenPhosphor => "greenPhosphor",
            Self::Commodore => "commodore",
            Self::GameBoy => "gameBoy",
            Self::Sepia => "sepia",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::NeonNoir => "Neon Noir",
            Self::AmberTerminal => "Amber Terminal",
            Self::GreenPhosphor => "Green Phosphor",
            Self::Commodore => "Commodore",
            Self::GameBoy => "Game Boy",
            Self::Sepia => "Sepia",
            Self::Ocean => "Ocean",
            Self::Forest => "Forest",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 10] = [
            ThemePreset::Light,
            ThemePreset::Dark,
            ThemePreset::NeonNoir,
            ThemePreset::AmberTerminal,
            ThemePreset::GreenPhosphor,
            ThemePreset::Commodore,
            ThemePreset::GameBoy,
            ThemePreset::Sepia,
            ThemePreset::Ocean,
            ThemePreset::Forest,
        ];
        &PRESETS
    }

    pub fn from_id(id: &str) -> Option<ThemePreset> {
        Self::all().iter().copied().find(|p| p.id() == id)
    }

    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Light => palettes::light(),
            Self::Dark => palettes::dark(),
            Self::NeonNoir => palettes::neon_noir(),
            Self::AmberTerminal => palettes::amber_terminal(),
            Self::GreenPhosphor => palettes::green_phosphor(),
            Self::Commodore => palettes::commodore(),
            Self::GameBoy => palettes::game_boy(),
            Self::Sepia => palettes::sepia(),
            Self::Ocean => palettes::ocean(),
            Self::Forest => palettes::forest(),
        }
    }

    /// Option choices layered over the composed defaults.
    fn overrides(self) -> ThemePatch {
        match self {
            Self::Light | Self::Dark => ThemePatch::default(),
            Self::NeonNoir => ThemePatch {
                hero_type: Some(HeroType::Fullscreen),
                hero_background: Some(HeroBackground::Shader),
                shader_effect: Some(ShaderEffect::GradientMesh),
                text_animation: Some(TextAnimation::CharRandom),
                scroll_animation: Some(ScrollAnimation::Reveal),
                cursor: Some(CursorStyle::Ring),
                card_style: Some(CardStyle::Glass),
                button_variant: Some(ButtonVariant::Glow),
                nav_variant: Some(NavVariant::Pill),
                nav_position: Some(NavPosition::Floating),
                glow_intensity: Some(0.6),
                noise_opacity: Some(0.08),
                font_family_secondary: Some("\"Orbitron\", system-ui, sans-serif".into()),
                ..ThemePatch::default()
            },
            Self::AmberTerminal | Self::GreenPhosphor => ThemePatch {
                hero_type: Some(HeroType::Minimal),
                hero_background: Some(HeroBackground::Solid),
                text_animation: Some(TextAnimation::Typewriter),
                scroll_animation: Some(ScrollAnimation::None),
                image_hover: Some(ImageHover::Grayscale),
                cursor: Some(CursorStyle::Dot),
                card_style: Some(CardStyle::Outlined),
                button_variant: Some(ButtonVariant::Outline),
                grid_layout: Some(GridLayout::List),
                blog_layout: Some(BlogLayout::List),
                footer_layout: Some(FooterLayout::Minimal),
                font_family_primary: Some("\"VT323\", ui-monospace, monospace".into()),
                font_family_secondary: Some("\"VT323\", ui-monospace, monospace".into()),
                border_radius: Some("0px".into()),
                button_radius: Some("0px".into()),
                noise_opacity: Some(0.12),
                glow_intensity: Some(0.4),
                sound_theme: Some(SoundName::Retro),
                ..ThemePatch::default()
            },
            Self::Commodore | Self::GameBoy => ThemePatch {
                hero_type: Some(HeroType::Minimal),
                text_animation: Some(TextAnimation::Glitch),
                cursor: Some(CursorStyle::Trail),
                card_style: Some(CardStyle::Flat),
                button_variant: Some(ButtonVariant::Swap),
                grid_layout: Some(GridLayout::Bento),
                font_family_primary: Some("\"Press Start 2P\", ui-monospace, monospace".into()),
                font_family_secondary: Some("\"Press Start 2P\", ui-monospace, monospace".into()),
                line_height: Some(1.8),
                border_radius: Some("0px".into()),
                button_radius: Some("0px".into()),
                sound_theme: Some(SoundName::Retro),
                ..ThemePatch::default()
            },
            Self::Sepia => ThemePatch {
                text_align: Some(Alignment::Left),
                heading_align: Some(Alignment::Center),
                blog_layout: Some(BlogLayout::Magazine),
                card_style: Some(CardStyle::Flat),
                text_animation: Some(TextAnimation::FadeIn),
                font_family_primary: Some("\"Lora\", Georgia, serif".into()),
                font_family_secondary: Some("\"Playfair Display\", Georgia, serif".into()),
                sound_theme: Some(SoundName::Typewriter),
                ..ThemePatch::default()
            },
            Self::Ocean => ThemePatch {
                hero_background: Some(HeroBackground::CssGradient),
                shader_effect: Some(ShaderEffect::Waves),
                scroll_animation: Some(ScrollAnimation::Parallax),
                grid_layout: Some(GridLayout::Masonry),
                card_style: Some(CardStyle::Glass),
                sound_theme: Some(SoundName::Bubble),
                ..ThemePatch::default()
            },
            Self::Forest => ThemePatch {
                hero_background: Some(HeroBackground::Particles),
                text_animation: Some(TextAnimation::SlideUp),
                scroll_animation: Some(ScrollAnimation::Stagger),
                image_hover: Some(ImageHover::Tilt),
                cursor: Some(CursorStyle::Blend),
                sound_theme: Some(SoundName::Chime),
                ..ThemePatch::default()
            },
        }
    }

    /// Compose palette, tokens and option choices into a record.
    pub fn record(self) -> ThemeRecord {
        let palette = self.palette();
        let tokens = DesignTokens {
            shadows: match palette.scheme() {
                ColorScheme::Light => ShadowTokens::light(),
                ColorScheme::Dark => ShadowTokens::dark(),
            },
            ..DesignTokens::default()
        };

        let data = compose(&palette, &tokens);
        ThemeRecord::new(self.id(), self.display_name(), data.merged(&self.overrides()))
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_record(preset: ThemePreset) -> ThemeRecord {
    preset.record()
}
