//! CSS color values
//!
//! Palette entries and color fields are stored as the CSS strings authors
//! wrote (`#3366ff`, `rgba(0,0,0,0.4)`), wrapped in [`CssColor`]. Parsing into
//! [`Color`] is only needed for validation and luminance checks.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("`{0}` is not a CSS color")]
pub struct ColorParseError(pub String);

/// Linear RGBA color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)`
    /// or `transparent`.
    pub fn parse(src: &str) -> Result<Self, ColorParseError> {
        let s = src.trim();
        let err = || ColorParseError(src.to_string());

        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }

        if let Some(hex) = s.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(err());
            }
            let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map(|v| v * 17);
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
            let (r, g, b, a) = match hex.len() {
                3 => (nibble(0), nibble(1), nibble(2), Ok(255)),
                4 => (nibble(0), nibble(1), nibble(2), nibble(3)),
                6 => (byte(0), byte(2), byte(4), Ok(255)),
                8 => (byte(0), byte(2), byte(4), byte(6)),
                _ => return Err(err()),
            };
            let channel = |v: Result<u8, _>| v.map(|v| v as f32 / 255.0).map_err(|_| err());
            return Ok(Self::rgba(channel(r)?, channel(g)?, channel(b)?, channel(a)?));
        }

        let lower = s.to_ascii_lowercase();
        let args = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;

        let parts: Vec<&str> = args
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(err());
        }

        let mut rgb = [0.0f32; 3];
        for (slot, part) in rgb.iter_mut().zip(&parts) {
            let v: f32 = part.parse().map_err(|_| err())?;
            if !(0.0..=255.0).contains(&v) {
                return Err(err());
            }
            *slot = v / 255.0;
        }
        let a = match parts.get(3) {
            Some(part) => {
                let v = match part.strip_suffix('%') {
                    Some(pct) => pct.parse::<f32>().map_err(|_| err())? / 100.0,
                    None => part.parse::<f32>().map_err(|_| err())?,
                };
                if !(0.0..=1.0).contains(&v) {
                    return Err(err());
                }
                v
            }
            None => 1.0,
        };

        Ok(Self::rgba(rgb[0], rgb[1], rgb[2], a))
    }

    /// WCAG relative luminance, ignoring alpha.
    pub fn relative_luminance(&self) -> f32 {
        fn linear(c: f32) -> f32 {
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    pub fn is_dark(&self) -> bool {
        self.relative_luminance() < 0.3
    }

    /// `#rrggbb` when opaque, `rgba(r,g,b,a)` otherwise.
    pub fn to_css(&self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a < 1.0 {
            format!(
                "rgba({},{},{},{})",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                self.a
            )
        } else {
            format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A color as authored in a palette or theme: a CSS color string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssColor(String);

impl CssColor {
    /// Wrap a palette literal without validation.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Wrap a value after checking that it parses as a color.
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        Color::parse(value)?;
        Ok(Self(value.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_color(&self) -> Result<Color, ColorParseError> {
        Color::parse(&self.0)
    }

    pub fn is_valid(&self) -> bool {
        self.to_color().is_ok()
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Color> for CssColor {
    fn from(color: Color) -> Self {
        Self(color.to_css())
    }
}
