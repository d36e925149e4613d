//! Default table
//!
//! [`baseline`] holds exactly one default per theme field. Projection and
//! deserialization read defaults from here and nowhere else.

use std::sync::OnceLock;

use crate::options::*;
use crate::palettes::{self, ColorPalette};
use crate::record::{ThemeData, ThemeField, ThemeValue};
use crate::tokens::{px, DesignTokens};

static BASELINE: OnceLock<ThemeData> = OnceLock::new();

/// The default record: the `light` palette, default tokens and the default
/// choice for every option.
pub fn baseline() -> &'static ThemeData {
    BASELINE.get_or_init(|| compose(&palettes::light(), &DesignTokens::default()))
}

/// Default value for one field.
pub fn get_default(field: ThemeField) -> ThemeValue {
    baseline().get(field)
}

/// Build a full record from a palette and a token set, with every option at
/// its default choice.
pub fn compose(palette: &ColorPalette, tokens: &DesignTokens) -> ThemeData {
    let typography = &tokens.typography;
    let spacing = &tokens.spacing;
    let radii = &tokens.radii;
    let animations = &tokens.animations;
    let p = palette.clone();

    ThemeData {
        body_background_color: p.body_background_color,
        background_color: p.background_color,
        surface1: p.surface1,
        surface2: p.surface2,
        surface3: p.surface3,
        heading_color: p.heading_color,
        text_color: p.text_color,
        subtext_color: p.subtext_color,
        accent_pri: p.accent_pri,
        accent_sec: p.accent_sec,
        nav_bg: p.nav_bg,
        nav_text_color: p.nav_text_color,
        button_bg: p.button_bg,
        button_text_color: p.button_text_color,
        border_color: p.border_color,
        link_color: p.link_color,
        link_hover_color: p.link_hover_color,
        cursor_color: p.cursor_color,
        selection_bg: p.selection_bg,
        gradient_start: p.gradient_start,
        gradient_end: p.gradient_end,
        shadow_color: p.shadow_color,
        overlay_color: p.overlay_color,
        footer_bg: p.footer_bg,
        code_bg: p.code_bg,

        font_family_primary: typography.font_family_primary.clone(),
        font_family_secondary: typography.font_family_secondary.clone(),
        font_size_base: px(typography.base_size),
        heading_scale: typography.scale_ratio,
        line_height: typography.line_height,
        letter_spacing: typography.letter_spacing.clone(),
        heading_weight: typography.heading_weight,
        text_align: Alignment::Left,
        heading_align: Alignment::Left,

        hero_type: HeroType::Default,
        hero_height: "80vh".into(),
        hero_background: HeroBackground::Solid,
        nav_position: NavPosition::Top,
        nav_variant: NavVariant::Standard,
        nav_height: px(spacing.unit * 16.0),
        grid_layout: GridLayout::Uniform,
        grid_columns: 3.0,
        grid_gap: px(spacing.unit * 6.0),
        container_width: px(spacing.container_width),
        section_padding: px(spacing.unit * 24.0),
        blog_layout: BlogLayout::Grid,
        footer_layout: FooterLayout::Columns,
        border_radius: px(radii.radius_md),
        button_radius: px(radii.radius_full),
        card_style: CardStyle::Elevated,
        button_variant: ButtonVariant::Solid,
        box_shadow: tokens.shadows.shadow_md.to_css(),

        text_animation: TextAnimation::FadeIn,
        scroll_animation: ScrollAnimation::Fade,
        image_hover: ImageHover::Zoom,
        animation_speed: 1.0,
        transition_duration: format!("{}ms", animations.duration_normal),
        easing: animations.easing_standard.clone(),

        cursor: CursorStyle::Default,
        cursor_size: 16.0,
        shader_effect: ShaderEffect::None,
        shader_speed: 1.0,
        noise_opacity: 0.0,
        glow_intensity: 0.0,
        blur_amount: px(spacing.unit * 3.0),

        sound_enabled: false,
        sound_theme: SoundName::Click,
        sound_volume: 0.5,
    }
}
