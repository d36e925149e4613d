//! Typography tokens

use super::px;

/// Steps of the modular type scale
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontSizeToken {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    Xxl,
    Xxxl,
}

impl FontSizeToken {
    pub const ALL: [FontSizeToken; 7] = [
        FontSizeToken::Xs,
        FontSizeToken::Sm,
        FontSizeToken::Base,
        FontSizeToken::Lg,
        FontSizeToken::Xl,
        FontSizeToken::Xxl,
        FontSizeToken::Xxxl,
    ];

    /// Exponent applied to the scale ratio
    fn step(self) -> i32 {
        match self {
            Self::Xs => -2,
            Self::Sm => -1,
            Self::Base => 0,
            Self::Lg => 1,
            Self::Xl => 2,
            Self::Xxl => 3,
            Self::Xxxl => 4,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
            Self::Xxxl => "3xl",
        }
    }
}

#[derive(Clone, Debug)]
pub struct TypographyTokens {
    pub font_family_primary: String,
    pub font_family_secondary: String,
    pub font_family_mono: String,
    /// Base font size in px
    pub base_size: f32,
    /// Ratio between consecutive scale steps
    pub scale_ratio: f32,
    pub line_height: f32,
    pub heading_weight: f32,
    pub letter_spacing: String,
}

impl TypographyTokens {
    /// Font size in px for a scale step, rounded to a quarter pixel
    pub fn size(&self, token: FontSizeToken) -> f32 {
        let raw = self.base_size * self.scale_ratio.powi(token.step());
        (raw * 4.0).round() / 4.0
    }

    pub(crate) fn push_css_variables(&self, vars: &mut Vec<(String, String)>) {
        for token in FontSizeToken::ALL {
            vars.push((format!("--font-size-{}", token.suffix()), px(self.size(token))));
        }
        vars.push(("--font-family-mono".into(), self.font_family_mono.clone()));
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_family_primary: "\"Inter\", system-ui, sans-serif".into(),
            font_family_secondary: "\"Space Grotesk\", system-ui, sans-serif".into(),
            font_family_mono: "\"JetBrains Mono\", ui-monospace, monospace".into(),
            base_size: 16.0,
            scale_ratio: 1.25,
            line_height: 1.6,
            heading_weight: 700.0,
            letter_spacing: "0em".into(),
        }
    }
}
