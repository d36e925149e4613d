//! Theme records
//!
//! [`ThemeData`] is a closed struct with one typed field per themeable option.
//! The field table below is the single declaration of every field's JSON key,
//! CSS custom property, editor kind and group; the struct, [`ThemePatch`],
//! [`ThemeField`] and the generic accessors are all generated from it.

use serde::{Deserialize, Serialize};

use crate::color::CssColor;
use crate::error::ThemeError;
use crate::options::*;
use crate::palettes::ColorScheme;

/// Editor grouping for theme fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldGroup {
    Colors,
    Typography,
    Layout,
    Motion,
    Effects,
    Sound,
}

impl FieldGroup {
    pub fn label(self) -> &'static str {
        match self {
            Self::Colors => "Colors",
            Self::Typography => "Typography",
            Self::Layout => "Layout",
            Self::Motion => "Motion",
            Self::Effects => "Effects",
            Self::Sound => "Sound",
        }
    }
}

/// A dynamically typed field value.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ThemeValue {
    Color(CssColor),
    Choice(&'static str),
    Number(f32),
    Text(String),
    Bool(bool),
}

impl ThemeValue {
    /// The string written into the CSS custom property.
    pub fn to_css(&self) -> String {
        match self {
            Self::Color(c) => c.to_string(),
            Self::Choice(s) => (*s).to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::Bool(b) => (if *b { "1" } else { "0" }).to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Color(c) => serde_json::Value::String(c.to_string()),
            Self::Choice(s) => serde_json::Value::String((*s).to_string()),
            Self::Number(n) => serde_json::Number::from_f64(f64::from(*n))
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Self::Text(s) => serde_json::Value::String(s.clone()),
            Self::Bool(b) => serde_json::Value::Bool(*b),
        }
    }
}

/// Conversion between a typed field and [`ThemeValue`].
pub trait FieldValue: Sized {
    fn to_value(&self) -> ThemeValue;
    fn from_value(field: ThemeField, value: ThemeValue) -> Result<Self, ThemeError>;
}

fn mismatch(field: ThemeField, value: &ThemeValue) -> ThemeError {
    ThemeError::invalid(field.key(), format!("unexpected value {value:?}"))
}

impl FieldValue for CssColor {
    fn to_value(&self) -> ThemeValue {
        ThemeValue::Color(self.clone())
    }

    fn from_value(field: ThemeField, value: ThemeValue) -> Result<Self, ThemeError> {
        match value {
            ThemeValue::Color(c) => Ok(c),
            ThemeValue::Text(s) => {
                CssColor::parse(&s).map_err(|e| ThemeError::invalid(field.key(), e.to_string()))
            }
            other => Err(mismatch(field, &other)),
        }
    }
}

impl FieldValue for f32 {
    fn to_value(&self) -> ThemeValue {
        ThemeValue::Number(*self)
    }

    fn from_value(field: ThemeField, value: ThemeValue) -> Result<Self, ThemeError> {
        match value {
            ThemeValue::Number(n) => Ok(n),
            other => Err(mismatch(field, &other)),
        }
    }
}

impl FieldValue for String {
    fn to_value(&self) -> ThemeValue {
        ThemeValue::Text(self.clone())
    }

    fn from_value(field: ThemeField, value: ThemeValue) -> Result<Self, ThemeError> {
        match value {
            ThemeValue::Text(s) => Ok(s),
            other => Err(mismatch(field, &other)),
        }
    }
}

impl FieldValue for bool {
    fn to_value(&self) -> ThemeValue {
        ThemeValue::Bool(*self)
    }

    fn from_value(field: ThemeField, value: ThemeValue) -> Result<Self, ThemeError> {
        match value {
            ThemeValue::Bool(b) => Ok(b),
            other => Err(mismatch(field, &other)),
        }
    }
}

macro_rules! choice_field_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn to_value(&self) -> ThemeValue {
                    ThemeValue::Choice(self.as_str())
                }

                fn from_value(field: ThemeField, value: ThemeValue) -> Result<Self, ThemeError> {
                    match value {
                        ThemeValue::Choice(s) => s
                            .parse()
                            .map_err(|e: UnknownOption| ThemeError::invalid(field.key(), e.to_string())),
                        ThemeValue::Text(s) => s
                            .parse()
                            .map_err(|e: UnknownOption| ThemeError::invalid(field.key(), e.to_string())),
                        other => Err(mismatch(field, &other)),
                    }
                }
            }
        )+
    };
}

choice_field_value!(
    Alignment,
    HeroType,
    HeroBackground,
    NavPosition,
    NavVariant,
    GridLayout,
    BlogLayout,
    FooterLayout,
    CardStyle,
    ButtonVariant,
    TextAnimation,
    ScrollAnimation,
    ImageHover,
    CursorStyle,
    ShaderEffect,
    SoundName,
);

macro_rules! theme_fields {
    (
        $(
            $variant:ident / $ident:ident : $ty:ty =
                $key:literal, $css:literal, $kind:expr, $group:ident;
        )+
    ) => {
        /// Resolved values for every themeable field.
        ///
        /// Deserializing fills absent keys from the default table.
        #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct ThemeData {
            $(
                #[serde(rename = $key)]
                pub $ident: $ty,
            )+
        }

        /// A partial update: `Some` fields overwrite, `None` fields are kept.
        #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
        pub struct ThemePatch {
            $(
                #[serde(rename = $key, default, skip_serializing_if = "Option::is_none")]
                pub $ident: Option<$ty>,
            )+
        }

        /// Names one field of [`ThemeData`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ThemeField {
            $($variant,)+
        }

        impl ThemeField {
            /// Every field, in declaration order.
            pub const ALL: &'static [ThemeField] = &[$(ThemeField::$variant,)+];

            /// camelCase key used in JSON and storage
            pub fn key(self) -> &'static str {
                match self {
                    $(ThemeField::$variant => $key,)+
                }
            }

            /// CSS custom property, including the `--` prefix
            pub fn css_var(self) -> &'static str {
                match self {
                    $(ThemeField::$variant => $css,)+
                }
            }

            pub fn kind(self) -> FieldKind {
                match self {
                    $(ThemeField::$variant => $kind,)+
                }
            }

            pub fn group(self) -> FieldGroup {
                match self {
                    $(ThemeField::$variant => FieldGroup::$group,)+
                }
            }
        }

        impl ThemeData {
            pub fn get(&self, field: ThemeField) -> ThemeValue {
                match field {
                    $(ThemeField::$variant => self.$ident.to_value(),)+
                }
            }

            /// Set one field after validating the value against its kind.
            pub fn set(&mut self, field: ThemeField, value: ThemeValue) -> Result<(), ThemeError> {
                field.check(&value)?;
                match field {
                    $(ThemeField::$variant => {
                        self.$ident = <$ty as FieldValue>::from_value(field, value)?;
                    })+
                }
                Ok(())
            }

            /// Shallow merge: fields present in `patch` replace ours.
            pub fn merged(&self, patch: &ThemePatch) -> ThemeData {
                let mut next = self.clone();
                $(
                    if let Some(value) = &patch.$ident {
                        next.$ident = value.clone();
                    }
                )+
                next
            }

            /// The patch that turns `self` into `other`.
            pub fn diff(&self, other: &ThemeData) -> ThemePatch {
                let mut patch = ThemePatch::default();
                $(
                    if self.$ident != other.$ident {
                        patch.$ident = Some(other.$ident.clone());
                    }
                )+
                patch
            }
        }

        impl ThemePatch {
            pub fn get(&self, field: ThemeField) -> Option<ThemeValue> {
                match field {
                    $(ThemeField::$variant => self.$ident.as_ref().map(FieldValue::to_value),)+
                }
            }

            pub fn set(&mut self, field: ThemeField, value: ThemeValue) -> Result<(), ThemeError> {
                field.check(&value)?;
                match field {
                    $(ThemeField::$variant => {
                        self.$ident = Some(<$ty as FieldValue>::from_value(field, value)?);
                    })+
                }
                Ok(())
            }

            pub fn clear(&mut self, field: ThemeField) {
                match field {
                    $(ThemeField::$variant => self.$ident = None,)+
                }
            }
        }
    };
}

theme_fields! {
    // Colors
    BodyBackgroundColor / body_background_color: CssColor =
        "bodyBackgroundColor", "--body-background-color", FieldKind::Color, Colors;
    BackgroundColor / background_color: CssColor =
        "backgroundColor", "--background-color", FieldKind::Color, Colors;
    Surface1 / surface1: CssColor = "surface1", "--surface1", FieldKind::Color, Colors;
    Surface2 / surface2: CssColor = "surface2", "--surface2", FieldKind::Color, Colors;
    Surface3 / surface3: CssColor = "surface3", "--surface3", FieldKind::Color, Colors;
    HeadingColor / heading_color: CssColor =
        "headingColor", "--heading-color", FieldKind::Color, Colors;
    TextColor / text_color: CssColor = "textColor", "--text-color", FieldKind::Color, Colors;
    SubtextColor / subtext_color: CssColor =
        "subtextColor", "--subtext-color", FieldKind::Color, Colors;
    AccentPri / accent_pri: CssColor = "accentPri", "--accent-pri", FieldKind::Color, Colors;
    AccentSec / accent_sec: CssColor = "accentSec", "--accent-sec", FieldKind::Color, Colors;
    NavBg / nav_bg: CssColor = "navBg", "--nav-bg", FieldKind::Color, Colors;
    NavTextColor / nav_text_color: CssColor =
        "navTextColor", "--nav-text-color", FieldKind::Color, Colors;
    ButtonBg / button_bg: CssColor = "buttonBg", "--button-bg", FieldKind::Color, Colors;
    ButtonTextColor / button_text_color: CssColor =
        "buttonTextColor", "--button-text-color", FieldKind::Color, Colors;
    BorderColor / border_color: CssColor =
        "borderColor", "--border-color", FieldKind::Color, Colors;
    LinkColor / link_color: CssColor = "linkColor", "--link-color", FieldKind::Color, Colors;
    LinkHoverColor / link_hover_color: CssColor =
        "linkHoverColor", "--link-hover-color", FieldKind::Color, Colors;
    CursorColor / cursor_color: CssColor =
        "cursorColor", "--cursor-color", FieldKind::Color, Colors;
    SelectionBg / selection_bg: CssColor =
        "selectionBg", "--selection-bg", FieldKind::Color, Colors;
    GradientStart / gradient_start: CssColor =
        "gradientStart", "--gradient-start", FieldKind::Color, Colors;
    GradientEnd / gradient_end: CssColor =
        "gradientEnd", "--gradient-end", FieldKind::Color, Colors;
    ShadowColor / shadow_color: CssColor =
        "shadowColor", "--shadow-color", FieldKind::Color, Colors;
    OverlayColor / overlay_color: CssColor =
        "overlayColor", "--overlay-color", FieldKind::Color, Colors;
    FooterBg / footer_bg: CssColor = "footerBg", "--footer-bg", FieldKind::Color, Colors;
    CodeBg / code_bg: CssColor = "codeBg", "--code-bg", FieldKind::Color, Colors;

    // Typography
    FontFamilyPrimary / font_family_primary: String =
        "fontFamilyPrimary", "--font-family-primary", FieldKind::Text, Typography;
    FontFamilySecondary / font_family_secondary: String =
        "fontFamilySecondary", "--font-family-secondary", FieldKind::Text, Typography;
    FontSizeBase / font_size_base: String =
        "fontSizeBase", "--font-size-base", FieldKind::Text, Typography;
    HeadingScale / heading_scale: f32 =
        "headingScale", "--heading-scale", FieldKind::number(1.0, 2.0, 0.05), Typography;
    LineHeight / line_height: f32 =
        "lineHeight", "--line-height", FieldKind::number(1.0, 2.5, 0.05), Typography;
    LetterSpacing / letter_spacing: String =
        "letterSpacing", "--letter-spacing", FieldKind::Text, Typography;
    HeadingWeight / heading_weight: f32 =
        "headingWeight", "--heading-weight", FieldKind::number(100.0, 900.0, 100.0), Typography;
    TextAlign / text_align: Alignment =
        "textAlign", "--text-align", FieldKind::Choice(OptionKind::Alignment), Typography;
    HeadingAlign / heading_align: Alignment =
        "headingAlign", "--heading-align", FieldKind::Choice(OptionKind::Alignment), Typography;

    // Layout
    HeroType / hero_type: HeroType =
        "heroType", "--hero-type", FieldKind::Choice(OptionKind::HeroType), Layout;
    HeroHeight / hero_height: String = "heroHeight", "--hero-height", FieldKind::Text, Layout;
    HeroBackground / hero_background: HeroBackground =
        "heroBackground", "--hero-background", FieldKind::Choice(OptionKind::HeroBackground), Layout;
    NavPosition / nav_position: NavPosition =
        "navPosition", "--nav-position", FieldKind::Choice(OptionKind::NavPosition), Layout;
    NavVariant / nav_variant: NavVariant =
        "navVariant", "--nav-variant", FieldKind::Choice(OptionKind::NavVariant), Layout;
    NavHeight / nav_height: String = "navHeight", "--nav-height", FieldKind::Text, Layout;
    GridLayout / grid_layout: GridLayout =
        "gridLayout", "--grid-layout", FieldKind::Choice(OptionKind::GridLayout), Layout;
    GridColumns / grid_columns: f32 =
        "gridColumns", "--grid-columns", FieldKind::number(1.0, 6.0, 1.0), Layout;
    GridGap / grid_gap: String = "gridGap", "--grid-gap", FieldKind::Text, Layout;
    ContainerWidth / container_width: String =
        "containerWidth", "--container-width", FieldKind::Text, Layout;
    SectionPadding / section_padding: String =
        "sectionPadding", "--section-padding", FieldKind::Text, Layout;
    BlogLayout / blog_layout: BlogLayout =
        "blogLayout", "--blog-layout", FieldKind::Choice(OptionKind::BlogLayout), Layout;
    FooterLayout / footer_layout: FooterLayout =
        "footerLayout", "--footer-layout", FieldKind::Choice(OptionKind::FooterLayout), Layout;
    BorderRadius / border_radius: String =
        "borderRadius", "--border-radius", FieldKind::Text, Layout;
    ButtonRadius / button_radius: String =
        "buttonRadius", "--button-radius", FieldKind::Text, Layout;
    CardStyle / card_style: CardStyle =
        "cardStyle", "--card-style", FieldKind::Choice(OptionKind::CardStyle), Layout;
    ButtonVariant / button_variant: ButtonVariant =
        "buttonVariant", "--button-variant", FieldKind::Choice(OptionKind::ButtonVariant), Layout;
    BoxShadow / box_shadow: String = "boxShadow", "--box-shadow", FieldKind::Text, Layout;

    // Motion
    TextAnimation / text_animation: TextAnimation =
        "textAnimation", "--text-animation", FieldKind::Choice(OptionKind::TextAnimation), Motion;
    ScrollAnimation / scroll_animation: ScrollAnimation =
        "scrollAnimation", "--scroll-animation", FieldKind::Choice(OptionKind::ScrollAnimation), Motion;
    ImageHover / image_hover: ImageHover =
        "imageHover", "--image-hover", FieldKind::Choice(OptionKind::ImageHover), Motion;
    AnimationSpeed / animation_speed: f32 =
        "animationSpeed", "--animation-speed", FieldKind::number(0.1, 3.0, 0.1), Motion;
    TransitionDuration / transition_duration: String =
        "transitionDuration", "--transition-duration", FieldKind::Text, Motion;
    Easing / easing: String = "easing", "--easing", FieldKind::Text, Motion;

    // Effects
    Cursor / cursor: CursorStyle =
        "cursor", "--cursor", FieldKind::Choice(OptionKind::Cursor), Effects;
    CursorSize / cursor_size: f32 =
        "cursorSize", "--cursor-size", FieldKind::number(4.0, 64.0, 1.0), Effects;
    ShaderEffect / shader_effect: ShaderEffect =
        "shaderEffect", "--shader-effect", FieldKind::Choice(OptionKind::ShaderEffect), Effects;
    ShaderSpeed / shader_speed: f32 =
        "shaderSpeed", "--shader-speed", FieldKind::number(0.0, 5.0, 0.1), Effects;
    NoiseOpacity / noise_opacity: f32 =
        "noiseOpacity", "--noise-opacity", FieldKind::number(0.0, 1.0, 0.01), Effects;
    GlowIntensity / glow_intensity: f32 =
        "glowIntensity", "--glow-intensity", FieldKind::number(0.0, 1.0, 0.05), Effects;
    BlurAmount / blur_amount: String = "blurAmount", "--blur-amount", FieldKind::Text, Effects;

    // Sound
    SoundEnabled / sound_enabled: bool =
        "soundEnabled", "--sound-enabled", FieldKind::Boolean, Sound;
    SoundTheme / sound_theme: SoundName =
        "soundTheme", "--sound-theme", FieldKind::Choice(OptionKind::Sound), Sound;
    SoundVolume / sound_volume: f32 =
        "soundVolume", "--sound-volume", FieldKind::number(0.0, 1.0, 0.05), Sound;
}

impl Default for ThemeData {
    fn default() -> Self {
        crate::defaults::baseline().clone()
    }
}

impl ThemeData {
    /// Check every field against its kind.
    ///
    /// Values built through `set` or a patch are already checked; this
    /// covers data that arrived through `Deserialize` or literal struct
    /// construction.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for field in ThemeField::ALL {
            field.check(&self.get(*field))?;
        }
        Ok(())
    }
}

impl ThemeField {
    /// Resolve a camelCase key.
    pub fn from_key(key: &str) -> Option<ThemeField> {
        use rustc_hash::FxHashMap;
        use std::sync::OnceLock;

        static BY_KEY: OnceLock<FxHashMap<&'static str, ThemeField>> = OnceLock::new();
        BY_KEY
            .get_or_init(|| Self::ALL.iter().map(|f| (f.key(), *f)).collect())
            .get(key)
            .copied()
    }

    /// Human readable label derived from the key (`accentPri` -> `Accent Pri`).
    pub fn label(self) -> String {
        let mut out = String::new();
        for (i, ch) in self.key().chars().enumerate() {
            if i == 0 {
                out.extend(ch.to_uppercase());
            } else if ch.is_ascii_uppercase() || (ch.is_ascii_digit() && !out.ends_with(' ')) {
                out.push(' ');
                out.push(ch);
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// Validate a value against this field's kind.
    pub fn check(self, value: &ThemeValue) -> Result<(), ThemeError> {
        match (self.kind(), value) {
            (FieldKind::Color, ThemeValue::Color(c)) => c
                .to_color()
                .map(|_| ())
                .map_err(|e| ThemeError::invalid(self.key(), e.to_string())),
            (FieldKind::Color, ThemeValue::Text(s)) => CssColor::parse(s)
                .map(|_| ())
                .map_err(|e| ThemeError::invalid(self.key(), e.to_string())),
            (FieldKind::Choice(option), ThemeValue::Choice(s)) => self.check_choice(option, s),
            (FieldKind::Choice(option), ThemeValue::Text(s)) => self.check_choice(option, s),
            (FieldKind::Number { min, max, .. }, ThemeValue::Number(n)) => {
                if n.is_finite() && (min..=max).contains(n) {
                    Ok(())
                } else {
                    Err(ThemeError::invalid(
                        self.key(),
                        format!("{n} is outside {min}..={max}"),
                    ))
                }
            }
            (FieldKind::Text, ThemeValue::Text(_)) => Ok(()),
            (FieldKind::Boolean, ThemeValue::Bool(_)) => Ok(()),
            (_, other) => Err(mismatch(self, other)),
        }
    }

    fn check_choice(self, option: OptionKind, value: &str) -> Result<(), ThemeError> {
        if option.contains(value) {
            Ok(())
        } else {
            Err(ThemeError::invalid(
                self.key(),
                format!("`{value}` is not one of {}", option.values().join(", ")),
            ))
        }
    }

    /// Convert a JSON value into a validated [`ThemeValue`] for this field.
    pub fn parse_json(self, value: &serde_json::Value) -> Result<ThemeValue, ThemeError> {
        use serde_json::Value;

        let parsed = match (self.kind(), value) {
            (FieldKind::Color, Value::String(s)) => CssColor::parse(s)
                .map(ThemeValue::Color)
                .map_err(|e| ThemeError::invalid(self.key(), e.to_string()))?,
            (FieldKind::Choice(option), Value::String(s)) => match option.parse(s) {
                Some(v) => ThemeValue::Choice(v),
                None => {
                    return Err(ThemeError::invalid(
                        self.key(),
                        format!("`{s}` is not one of {}", option.values().join(", ")),
                    ))
                }
            },
            (FieldKind::Number { .. }, Value::Number(n)) => match n.as_f64() {
                Some(v) => ThemeValue::Number(v as f32),
                None => return Err(ThemeError::invalid(self.key(), "not a finite number")),
            },
            (FieldKind::Number { .. }, Value::String(s)) => match s.trim().parse::<f32>() {
                Ok(v) => ThemeValue::Number(v),
                Err(_) => return Err(ThemeError::invalid(self.key(), format!("`{s}` is not a number"))),
            },
            (FieldKind::Text, Value::String(s)) => ThemeValue::Text(s.clone()),
            (FieldKind::Boolean, Value::Bool(b)) => ThemeValue::Bool(*b),
            (FieldKind::Boolean, Value::String(s)) => match s.as_str() {
                "true" => ThemeValue::Bool(true),
                "false" => ThemeValue::Bool(false),
                _ => return Err(ThemeError::invalid(self.key(), format!("`{s}` is not a boolean"))),
            },
            (_, other) => {
                return Err(ThemeError::invalid(
                    self.key(),
                    format!("unexpected json value {other}"),
                ))
            }
        };
        self.check(&parsed)?;
        Ok(parsed)
    }
}

impl ThemePatch {
    /// A patch touching a single field.
    pub fn single(field: ThemeField, value: ThemeValue) -> Result<Self, ThemeError> {
        let mut patch = Self::default();
        patch.set(field, value)?;
        Ok(patch)
    }

    /// Fields this patch overwrites, in declaration order.
    pub fn fields(&self) -> Vec<ThemeField> {
        ThemeField::ALL
            .iter()
            .copied()
            .filter(|f| self.get(*f).is_some())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        ThemeField::ALL.iter().all(|f| self.get(*f).is_none())
    }

    /// Check every present value against its field kind.
    ///
    /// Typed fields are legal by construction; this catches free-form
    /// colors that do not parse and numbers outside their range.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for field in ThemeField::ALL {
            if let Some(value) = self.get(*field) {
                field.check(&value)?;
            }
        }
        Ok(())
    }

    /// Build a patch from a JSON object, validating every known key.
    ///
    /// Returns the patch and the keys that did not name a field.
    pub fn from_json_object(
        object: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<(Self, Vec<String>), ThemeError> {
        let mut patch = Self::default();
        let mut unknown = Vec::new();
        for (key, value) in object {
            match ThemeField::from_key(key) {
                Some(field) => patch.set(field, field.parse_json(value)?)?,
                None => unknown.push(key.clone()),
            }
        }
        Ok((patch, unknown))
    }
}

/// A named theme: key, display name and resolved data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeRecord {
    pub key: String,
    pub name: String,
    pub data: ThemeData,
}

impl ThemeRecord {
    pub fn new(key: impl Into<String>, name: impl Into<String>, data: ThemeData) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            data,
        }
    }

    /// A copy of this record with `patch` shallow-merged into its data.
    pub fn patched(&self, patch: &ThemePatch) -> Self {
        Self {
            key: self.key.clone(),
            name: self.name.clone(),
            data: self.data.merged(patch),
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        match self.data.background_color.to_color() {
            Ok(c) if c.is_dark() => ColorScheme::Dark,
            _ => ColorScheme::Light,
        }
    }
}

/// Storage form of a record: its key and name next to the flattened data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedTheme {
    #[serde(default)]
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub data: ThemeData,
}

impl From<&ThemeRecord> for PersistedTheme {
    fn from(record: &ThemeRecord) -> Self {
        Self {
            key: record.key.clone(),
            name: Some(record.name.clone()),
            data: record.data.clone(),
        }
    }
}

impl PersistedTheme {
    pub fn into_record(self) -> ThemeRecord {
        let name = self.name.unwrap_or_else(|| self.key.clone());
        ThemeRecord::new(self.key, name, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kebab(key: &str) -> String {
        let mut out = String::from("--");
        for ch in key.chars() {
            if ch.is_ascii_uppercase() {
                out.push('-');
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
        }
        out
    }

    #[test]
    fn css_var_is_kebab_case_of_key() {
        for field in ThemeField::ALL {
            assert_eq!(field.css_var(), kebab(field.key()), "{field:?}");
        }
    }

    #[test]
    fn keys_are_unique_and_resolvable() {
        for field in ThemeField::ALL {
            assert_eq!(ThemeField::from_key(field.key()), Some(*field));
        }
        assert_eq!(ThemeField::from_key("accentPrimary"), None);
    }

    #[test]
    fn labels_split_camel_case() {
        assert_eq!(ThemeField::AccentPri.label(), "Accent Pri");
        assert_eq!(ThemeField::Surface1.label(), "Surface 1");
        assert_eq!(ThemeField::Cursor.label(), "Cursor");
    }

    #[test]
    fn set_rejects_out_of_range_and_bad_colors() {
        let mut data = ThemeData::default();
        assert!(data
            .set(ThemeField::LineHeight, ThemeValue::Number(9.0))
            .is_err());
        assert!(data
            .set(ThemeField::TextColor, ThemeValue::Text("bluish".into()))
            .is_err());
        assert!(data
            .set(ThemeField::HeroBackground, ThemeValue::Text("lava".into()))
            .is_err());

        data.set(ThemeField::HeroBackground, ThemeValue::Text("cssgradient".into()))
            .unwrap();
        assert_eq!(data.hero_background, HeroBackground::CssGradient);
    }

    #[test]
    fn merged_overwrites_only_patched_fields() {
        let base = ThemeData::default();
        let mut patch = ThemePatch::default();
        patch.text_color = Some(CssColor::new("#111111"));
        patch.grid_columns = Some(4.0);

        let next = base.merged(&patch);
        assert_eq!(next.text_color.as_str(), "#111111");
        assert_eq!(next.grid_columns, 4.0);
        assert_eq!(base.diff(&next), patch);
        assert_eq!(patch.fields(), vec![ThemeField::TextColor, ThemeField::GridColumns]);
    }

    #[test]
    fn missing_keys_deserialize_to_defaults() {
        let data: ThemeData = serde_json::from_str(r##"{"accentPri":"#ff0000"}"##).unwrap();
        assert_eq!(data.accent_pri.as_str(), "#ff0000");
        assert_eq!(data.text_color, ThemeData::default().text_color);
    }

    #[test]
    fn validate_catches_deserialized_values_set_would_reject() {
        assert!(ThemeData::default().validate().is_ok());

        let data: ThemeData = serde_json::from_str(
            r#"{"textColor":"bluish","gridColumns":99,"lineHeight":-4}"#,
        )
        .unwrap();
        let err = data.validate().unwrap_err();
        assert!(
            matches!(err, ThemeError::InvalidValue { field: "textColor", .. }),
            "{err:?}"
        );

        let mut data = ThemeData::default();
        data.grid_columns = 99.0;
        assert!(matches!(
            data.validate(),
            Err(ThemeError::InvalidValue { field: "gridColumns", .. })
        ));
    }

    #[test]
    fn persisted_theme_flattens_data_next_to_key() {
        let record = ThemeRecord::new("light", "Light", ThemeData::default());
        let json = serde_json::to_value(PersistedTheme::from(&record)).unwrap();
        assert_eq!(json["key"], "light");
        assert_eq!(json["textAnimation"], record.data.text_animation.as_str());

        let back: PersistedTheme = serde_json::from_value(json).unwrap();
        assert_eq!(back.into_record(), record);
    }

    #[test]
    fn parse_json_follows_field_kind() {
        use serde_json::json;

        assert_eq!(
            ThemeField::GridColumns.parse_json(&json!(3)).unwrap(),
            ThemeValue::Number(3.0)
        );
        assert_eq!(
            ThemeField::SoundEnabled.parse_json(&json!("true")).unwrap(),
            ThemeValue::Bool(true)
        );
        assert!(ThemeField::GridColumns.parse_json(&json!(12)).is_err());
        assert!(ThemeField::AccentPri.parse_json(&json!(12)).is_err());
    }
}
