//! Option registry
//!
//! Every enumerated theme dimension is a closed enum whose serialized form is
//! the legal string value (`"cssgradient"`, `"charrandom"`, ...). Fields that
//! hold one of these values are tagged [`FieldKind::Choice`] with the matching
//! [`OptionKind`], so editors and validators never infer a field's type from
//! the value it currently holds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("`{value}` is not a legal {option} value")]
pub struct UnknownOption {
    pub option: &'static str,
    pub value: String,
}

macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident: $label:literal {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    _ => Err(UnknownOption {
                        option: $label,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

option_set! {
    /// Horizontal alignment of text blocks and headings
    Alignment: "alignment" {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

option_set! {
    /// Hero section layout
    HeroType: "heroType" {
        Default => "default",
        Fullscreen => "fullscreen",
        Split => "split",
        Minimal => "minimal",
        Carousel => "carousel",
    }
}

option_set! {
    /// What fills the hero section behind its content
    HeroBackground: "heroBackground" {
        None => "none",
        Solid => "solid",
        Image => "image",
        Video => "video",
        CssGradient => "cssgradient",
        Shader => "shader",
        Particles => "particles",
    }
}

option_set! {
    NavPosition: "navPosition" {
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
        Floating => "floating",
    }
}

option_set! {
    NavVariant: "navVariant" {
        Standard => "standard",
        Centered => "centered",
        Minimal => "minimal",
        Hamburger => "hamburger",
        Pill => "pill",
    }
}

option_set! {
    GridLayout: "gridLayout" {
        Uniform => "uniform",
        Masonry => "masonry",
        Bento => "bento",
        List => "list",
    }
}

option_set! {
    BlogLayout: "blogLayout" {
        Grid => "grid",
        List => "list",
        Featured => "featured",
        Magazine => "magazine",
    }
}

option_set! {
    FooterLayout: "footerLayout" {
        Simple => "simple",
        Columns => "columns",
        Minimal => "minimal",
        Centered => "centered",
    }
}

option_set! {
    CardStyle: "cardStyle" {
        Flat => "flat",
        Elevated => "elevated",
        Outlined => "outlined",
        Glass => "glass",
    }
}

option_set! {
    ButtonVariant: "buttonVariant" {
        Solid => "solid",
        Outline => "outline",
        Ghost => "ghost",
        Swap => "swap",
        Glow => "glow",
    }
}

option_set! {
    /// Entrance animation for headings and body copy
    TextAnimation: "textAnimation" {
        None => "none",
        FadeIn => "fadein",
        CharRandom => "charrandom",
        Typewriter => "typewriter",
        SlideUp => "slideup",
        Wave => "wave",
        Glitch => "glitch",
        Scramble => "scramble",
    }
}

option_set! {
    ScrollAnimation: "scrollAnimation" {
        None => "none",
        Fade => "fade",
        Parallax => "parallax",
        Reveal => "reveal",
        Stagger => "stagger",
    }
}

option_set! {
    ImageHover: "imageHover" {
        None => "none",
        Zoom => "zoom",
        Tilt => "tilt",
        Grayscale => "grayscale",
        Reveal => "reveal",
    }
}

option_set! {
    /// Custom cursor rendered by the cursor components
    CursorStyle: "cursor" {
        Default => "default",
        Dot => "dot",
        Ring => "ring",
        Image => "image",
        Trail => "trail",
        Blend => "blend",
        None => "none",
    }
}

option_set! {
    /// Background shader effect names understood by the WebGL layer
    ShaderEffect: "shaderEffect" {
        None => "none",
        Noise => "noise",
        Waves => "waves",
        GradientMesh => "gradientmesh",
        Metaballs => "metaballs",
        Plasma => "plasma",
        Voronoi => "voronoi",
        Aurora => "aurora",
    }
}

option_set! {
    /// Interaction sound set
    SoundName: "soundTheme" {
        None => "none",
        Click => "click",
        Pop => "pop",
        Chime => "chime",
        Retro => "retro",
        Typewriter => "typewriter",
        Bubble => "bubble",
    }
}

/// Names one option dimension of the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionKind {
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
    Cursor,
    ShaderEffect,
    Sound,
}

impl OptionKind {
    pub fn all() -> &'static [OptionKind] {
        const KINDS: [OptionKind; 16] = [
            OptionKind::Alignment,
            OptionKind::HeroType,
            OptionKind::HeroBackground,
            OptionKind::NavPosition,
            OptionKind::NavVariant,
            OptionKind::GridLayout,
            OptionKind::BlogLayout,
            OptionKind::FooterLayout,
            OptionKind::CardStyle,
            OptionKind::ButtonVariant,
            OptionKind::TextAnimation,
            OptionKind::ScrollAnimation,
            OptionKind::ImageHover,
            OptionKind::Cursor,
            OptionKind::ShaderEffect,
            OptionKind::Sound,
        ];
        &KINDS
    }

    /// Legal values, in declaration order.
    pub fn values(self) -> &'static [&'static str] {
        match self {
            Self::Alignment => Alignment::VALUES,
            Self::HeroType => HeroType::VALUES,
            Self::HeroBackground => HeroBackground::VALUES,
            Self::NavPosition => NavPosition::VALUES,
            Self::NavVariant => NavVariant::VALUES,
            Self::GridLayout => GridLayout::VALUES,
            Self::BlogLayout => BlogLayout::VALUES,
            Self::FooterLayout => FooterLayout::VALUES,
            Self::CardStyle => CardStyle::VALUES,
            Self::ButtonVariant => ButtonVariant::VALUES,
            Self::TextAnimation => TextAnimation::VALUES,
            Self::ScrollAnimation => ScrollAnimation::VALUES,
            Self::ImageHover => ImageHover::VALUES,
            Self::Cursor => CursorStyle::VALUES,
            Self::ShaderEffect => ShaderEffect::VALUES,
            Self::Sound => SoundName::VALUES,
        }
    }

    /// Canonical static form of `value` if it is legal for this dimension.
    pub fn parse(self, value: &str) -> Option<&'static str> {
        self.values().iter().copied().find(|v| *v == value)
    }

    pub fn contains(self, value: &str) -> bool {
        self.parse(value).is_some()
    }
}

/// Editor/validator tag attached to every theme field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Color,
    Choice(OptionKind),
    Number { min: f32, max: f32, step: f32 },
    Text,
    Boolean,
}

impl FieldKind {
    pub const fn number(min: f32, max: f32, step: f32) -> Self {
        FieldKind::Number { min, max, step }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serialized_form_is_the_legal_value() {
        assert_eq!(
            serde_json::to_string(&HeroBackground::CssGradient).unwrap(),
            "\"cssgradient\""
        );
        let anim: TextAnimation = serde_json::from_str("\"charrandom\"").unwrap();
        assert_eq!(anim, TextAnimation::CharRandom);
        assert!(serde_json::from_str::<TextAnimation>("\"spin\"").is_err());
    }

    #[test]
    fn from_str_matches_values() {
        for kind in OptionKind::all() {
            assert!(!kind.values().is_empty());
        }
        for value in ShaderEffect::VALUES {
            let parsed: ShaderEffect = value.parse().unwrap();
            assert_eq!(parsed.as_str(), *value);
        }
        let err = "sideways".parse::<NavPosition>().unwrap_err();
        assert_eq!(err.option, "navPosition");
    }

    #[test]
    fn option_kind_parse_returns_canonical_value() {
        assert_eq!(OptionKind::Cursor.parse("ring"), Some("ring"));
        assert_eq!(OptionKind::Cursor.parse("Ring"), None);
        assert!(OptionKind::HeroBackground.contains("solid"));
    }
}
