//! Named color palettes
//!
//! Each palette fully specifies every semantic color role; palettes never
//! inherit from one another. A palette is composed with the design tokens and
//! option choices into a theme record by [`ThemePreset`](crate::ThemePreset).

mod retro;

use serde::{Deserialize, Serialize};

use crate::color::{Color, CssColor};

pub use retro::{amber_terminal, commodore, game_boy, green_phosphor};

/// Light or dark, derived from the palette background
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Semantic color roles for one theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub body_background_color: CssColor,
    pub background_color: CssColor,
    pub surface1: CssColor,
    pub surface2: CssColor,
    pub surface3: CssColor,
    pub heading_color: CssColor,
    pub text_color: CssColor,
    pub subtext_color: CssColor,
    pub accent_pri: CssColor,
    pub accent_sec: CssColor,
    pub nav_bg: CssColor,
    pub nav_text_color: CssColor,
    pub button_bg: CssColor,
    pub button_text_color: CssColor,
    pub border_color: CssColor,
    pub link_color: CssColor,
    pub link_hover_color: CssColor,
    pub cursor_color: CssColor,
    pub selection_bg: CssColor,
    pub gradient_start: CssColor,
    pub gradient_end: CssColor,
    pub shadow_color: CssColor,
    pub overlay_color: CssColor,
    pub footer_bg: CssColor,
    pub code_bg: CssColor,
}

impl ColorPalette {
    /// Classify the palette by the luminance of its background.
    pub fn scheme(&self) -> ColorScheme {
        match self.background_color.to_color() {
            Ok(c) if c.is_dark() => ColorScheme::Dark,
            Ok(_) => ColorScheme::Light,
            Err(_) => ColorScheme::Light,
        }
    }

    /// Every role, in declaration order, as `(camelCase role, color)`.
    pub fn roles(&self) -> [(&'static str, &CssColor); 25] {
        [
            ("bodyBackgroundColor", &self.body_background_color),
            ("backgroundColor", &self.background_color),
            ("surface1", &self.surface1),
            ("surface2", &self.surface2),
            ("surface3", &self.surface3),
            ("headingColor", &self.heading_color),
            ("textColor", &self.text_color),
            ("subtextColor", &self.subtext_color),
            ("accentPri", &self.accent_pri),
            ("accentSec", &self.accent_sec),
            ("navBg", &self.nav_bg),
            ("navTextColor", &self.nav_text_color),
            ("buttonBg", &self.button_bg),
            ("buttonTextColor", &self.button_text_color),
            ("borderColor", &self.border_color),
            ("linkColor", &self.link_color),
            ("linkHoverColor", &self.link_hover_color),
            ("cursorColor", &self.cursor_color),
            ("selectionBg", &self.selection_bg),
            ("gradientStart", &self.gradient_start),
            ("gradientEnd", &self.gradient_end),
            ("shadowColor", &self.shadow_color),
            ("overlayColor", &self.overlay_color),
            ("footerBg", &self.footer_bg),
            ("codeBg", &self.code_bg),
        ]
    }
}

pub(crate) fn c(value: &str) -> CssColor {
    CssColor::new(value)
}

/// Blend two palette literals, used for derived roles like link hover.
pub(crate) fn mix(a: &str, b: &str, t: f32) -> CssColor {
    match (Color::parse(a), Color::parse(b)) {
        (Ok(a), Ok(b)) => CssColor::from(Color::lerp(&a, &b, t)),
        _ => CssColor::new(a),
    }
}

pub fn light() -> ColorPalette {
    ColorPalette {
        body_background_color: c("#ffffff"),
        background_color: c("#fafafa"),
        surface1: c("#f4f4f5"),
        surface2: c("#e4e4e7"),
        surface3: c("#d4d4d8"),
        heading_color: c("#09090b"),
        text_color: c("#27272a"),
        subtext_color: c("#71717a"),
        accent_pri: c("#2563eb"),
        accent_sec: c("#db2777"),
        nav_bg: c("rgba(255,255,255,0.85)"),
        nav_text_color: c("#18181b"),
        button_bg: c("#18181b"),
        button_text_color: c("#fafafa"),
        border_color: c("#e4e4e7"),
        link_color: c("#2563eb"),
        link_hover_color: mix("#2563eb", "#000000", 0.2),
        cursor_color: c("#18181b"),
        selection_bg: c("rgba(37,99,235,0.2)"),
        gradient_start: c("#dbeafe"),
        gradient_end: c("#fce7f3"),
        shadow_color: c("rgba(0,0,0,0.1)"),
        overlay_color: c("rgba(9,9,11,0.5)"),
        footer_bg: c("#f4f4f5"),
        code_bg: c("#f4f4f5"),
    }
}

pub fn dark() -> ColorPalette {
    ColorPalette {
        body_background_color: c("#09090b"),
        background_color: c("#0f0f12"),
        surface1: c("#18181b"),
        surface2: c("#27272a"),
        surface3: c("#3f3f46"),
        heading_color: c("#fafafa"),
        text_color: c("#e4e4e7"),
        subtext_color: c("#a1a1aa"),
        accent_pri: c("#60a5fa"),
        accent_sec: c("#f472b6"),
        nav_bg: c("rgba(9,9,11,0.85)"),
        nav_text_color: c("#fafafa"),
        button_bg: c("#fafafa"),
        button_text_color: c("#09090b"),
        border_color: c("#27272a"),
        link_color: c("#60a5fa"),
        link_hover_color: mix("#60a5fa", "#ffffff", 0.2),
        cursor_color: c("#fafafa"),
        selection_bg: c("rgba(96,165,250,0.3)"),
        gradient_start: c("#1e3a8a"),
        gradient_end: c("#831843"),
        shadow_color: c("rgba(0,0,0,0.4)"),
        overlay_color: c("rgba(0,0,0,0.6)"),
        footer_bg: c("#0f0f12"),
        code_bg: c("#18181b"),
    }
}

pub fn neon_noir() -> ColorPalette {
    ColorPalette {
        body_background_color: c("#05010d"),
        background_color: c("#0a0414"),
        surface1: c("#140a24"),
        surface2: c("#1f1035"),
        surface3: c("#2d1850"),
        heading_color: c("#f5f3ff"),
        text_color: c("#ddd6fe"),
        subtext_color: c("#a78bfa"),
        accent_pri: c("#ff2a6d"),
        accent_sec: c("#05d9e8"),
        nav_bg: c("rgba(10,4,20,0.8)"),
        nav_text_color: c("#f5f3ff"),
        button_bg: c("#ff2a6d"),
        button_text_color: c("#05010d"),
        border_color: c("#2d1850"),
        link_color: c("#05d9e8"),
        link_hover_color: c("#ff2a6d"),
        cursor_color: c("#05d9e8"),
        selection_bg: c("rgba(255,42,109,0.35)"),
        gradient_start: c("#ff2a6d"),
        gradient_end: c("#05d9e8"),
        shadow_color: c("rgba(255,42,109,0.35)"),
        overlay_color: c("rgba(5,1,13,0.7)"),
        footer_bg: c("#05010d"),
        code_bg: c("#140a24"),
    }
}

pub fn sepia() -> ColorPalette {
    ColorPalette {
        body_background_color: c("#f4ecd8"),
        background_color: c("#f7f0df"),
        surface1: c("#ede3c8"),
        surface2: c("#e2d5b3"),
        surface3: c("#d6c69c"),
        heading_color: c("#3b2f20"),
        text_color: c("#5b4636"),
        subtext_color: c("#8a7358"),
        accent_pri: c("#a0522d"),
        accent_sec: c("#6b8e23"),
        nav_bg: c("rgba(244,236,216,0.9)"),
        nav_text_color: c("#3b2f20"),
        button_bg: c("#5b4636"),
        button_text_color: c("#f4ecd8"),
        border_color: c("#d6c69c"),
        link_color: c("#a0522d"),
        link_hover_color: mix("#a0522d", "#000000", 0.2),
        cursor_color: c("#5b4636"),
        selection_bg: c("rgba(160,82,45,0.2)"),
        gradient_start: c("#f4ecd8"),
        gradient_end: c("#e2c99b"),
        shadow_color: c("rgba(59,47,32,0.15)"),
        overlay_color: c("rgba(59,47,32,0.5)"),
        footer_bg: c("#ede3c8"),
        code_bg: c("#ede3c8"),
    }
}

pub fn ocean() -> ColorPalette {
    ColorPalette {
        body_background_color: c("#f0f9ff"),
        background_color: c("#f8fcff"),
        surface1: c("#e0f2fe"),
        surface2: c("#bae6fd"),
        surface3: c("#7dd3fc"),
        heading_color: c("#082f49"),
        text_color: c("#0c4a6e"),
        subtext_color: c("#0369a1"),
        accent_pri: c("#0284c7"),
        accent_sec: c("#14b8a6"),
        nav_bg: c("rgba(240,249,255,0.85)"),
        nav_text_color: c("#082f49"),
        button_bg: c("#0284c7"),
        button_text_color: c("#f0f9ff"),
        border_color: c("#bae6fd"),
        link_color: c("#0284c7"),
        link_hover_color: mix("#0284c7", "#000000", 0.2),
        cursor_color: c("#0284c7"),
        selection_bg: c("rgba(2,132,199,0.2)"),
        gradient_start: c("#38bdf8"),
        gradient_end: c("#2dd4bf"),
        shadow_color: c("rgba(8,47,73,0.12)"),
        overlay_color: c("rgba(8,47,73,0.5)"),
        footer_bg: c("#e0f2fe"),
        code_bg: c("#e0f2fe"),
    }
}

pub fn forest() -> ColorPalette {
    ColorPalette {
        body_background_color: c("#0f1a14"),
        background_color: c("#13211a"),
        surface1: c("#1a2e23"),
        surface2: c("#22402f"),
        surface3: c("#2d543e"),
        heading_color: c("#ecfdf5"),
        text_color: c("#d1fae5"),
        subtext_color: c("#86b59b"),
        accent_pri: c("#34d399"),
        accent_sec: c("#fbbf24"),
        nav_bg: c("rgba(15,26,20,0.85)"),
        nav_text_color: c("#ecfdf5"),
        button_bg: c("#34d399"),
        button_text_color: c("#0f1a14"),
        border_color: c("#22402f"),
        link_color: c("#34d399"),
        link_hover_color: mix("#34d399", "#ffffff", 0.2),
        cursor_color: c("#fbbf24"),
        selection_bg: c("rgba(52,211,153,0.3)"),
        gradient_start: c("#065f46"),
        gradient_end: c("#1a2e23"),
        shadow_color: c("rgba(0,0,0,0.4)"),
        overlay_color: c("rgba(15,26,20,0.7)"),
        footer_bg: c("#0f1a14"),
        code_bg: c("#1a2e23"),
    }
}
