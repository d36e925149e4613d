//! Retro computer palettes

use super::{c, ColorPalette};

/// Amber monochrome CRT
pub fn amber_terminal() -> ColorPalette {
    ColorPalette {
        body_background_color: c("#0d0800"),
        background_color: c("#120b00"),
        surface1: c("#1f1300"),
        surface2: c("#2e1c00"),
        surface3: c("#3d2600"),
        heading_color: c("#ffcc66"),
        text_color: c("#ffb000"),
        subtext_color: c("#b37b00"),
        accent_pri: c("#ffb000"),
        accent_sec: c("#ff8c00"),
        nav_bg: c("#0d0800"),
        nav_text_color: c("#ffb000"),
        button_bg: c("#ffb000"),
        button_text_color: c("#0d0800"),
        border_color: c("#664600"),
        link_color: c("#ffcc66"),
        link_hover_color: c("#ffe0a3"),
        cursor_color: c("#ffb000"),
        selection_bg: c("rgba(255,176,0,0.3)"),
        gradient_start: c("#1f1300"),
        gradient_end: c("#0d0800"),
        shadow_color: c("rgba(255,176,0,0.25)"),
        overlay_color: c("rgba(13,8,0,0.8)"),
        footer_bg: c("#0d0800"),
        code_bg: c("#1f1300"),
    }
}

/// Green phosphor monochrome CRT
pub fn green_phosphor() -> ColorPalette {
    ColorPalette {
        body_background_color: c("#000d02"),
        background_color: c("#001204"),
        surface1: c("#001f08"),
        surface2: c("#002e0c"),
        surface3: c("#003d10"),
        heading_color: c("#66ff8c"),
        text_color: c("#33ff66"),
        subtext_color: c("#1fa844"),
        accent_pri: c("#33ff66"),
        accent_sec: c("#b3ff33"),
        nav_bg: c("#000d02"),
        nav_text_color: c("#33ff66"),
        button_bg: c("#33ff66"),
        button_text_color: c("#000d02"),
        border_color: c("#0f6626"),
        link_color: c("#66ff8c"),
        link_hover_color: c("#a3ffbb"),
        cursor_color: c("#33ff66"),
        selection_bg: c("rgba(51,255,102,0.3)"),
        gradient_start: c("#001f08"),
        gradient_end: c("#000d02"),
        shadow_color: c("rgba(51,255,102,0.25)"),
        overlay_color: c("rgba(0,13,2,0.8)"),
        footer_bg: c("#000d02"),
        code_bg: c("#001f08"),
    }
}

/// Commodore 64 boot screen blues
pub fn commodore() -> ColorPalette {
    ColorPalette {
        body_background_color: c("#352879"),
        background_color: c("#352879"),
        surface1: c("#40318d"),
        surface2: c("#4b3ca0"),
        surface3: c("#5648b3"),
        heading_color: c("#ffffff"),
        text_color: c("#a59ce6"),
        subtext_color: c("#7869c4"),
        accent_pri: c("#b8c76f"),
        accent_sec: c("#67b6bd"),
        nav_bg: c("#40318d"),
        nav_text_color: c("#a59ce6"),
        button_bg: c("#a59ce6"),
        button_text_color: c("#352879"),
        border_color: c("#7869c4"),
        link_color: c("#b8c76f"),
        link_hover_color: c("#d4e08f"),
        cursor_color: c("#a59ce6"),
        selection_bg: c("rgba(165,156,230,0.35)"),
        gradient_start: c("#40318d"),
        gradient_end: c("#352879"),
        shadow_color: c("rgba(0,0,0,0.35)"),
        overlay_color: c("rgba(53,40,121,0.75)"),
        footer_bg: c("#40318d"),
        code_bg: c("#40318d"),
    }
}

/// Original Game Boy four-shade green
pub fn game_boy() -> ColorPalette {
    ColorPalette {
        body_background_color: c("#9bbc0f"),
        background_color: c("#9bbc0f"),
        surface1: c("#8bac0f"),
        surface2: c("#7a9a0e"),
        surface3: c("#6a8a0d"),
        heading_color: c("#0f380f"),
        text_color: c("#0f380f"),
        subtext_color: c("#306230"),
        accent_pri: c("#306230"),
        accent_sec: c("#0f380f"),
        nav_bg: c("#8bac0f"),
        nav_text_color: c("#0f380f"),
        button_bg: c("#306230"),
        button_text_color: c("#9bbc0f"),
        border_color: c("#306230"),
        link_color: c("#0f380f"),
        link_hover_color: c("#306230"),
        cursor_color: c("#0f380f"),
        selection_bg: c("rgba(48,98,48,0.3)"),
        gradient_start: c("#9bbc0f"),
        gradient_end: c("#8bac0f"),
        shadow_color: c("rgba(15,56,15,0.3)"),
        overlay_color: c("rgba(15,56,15,0.6)"),
        footer_bg: c("#8bac0f"),
        code_bg: c("#8bac0f"),
    }
}
