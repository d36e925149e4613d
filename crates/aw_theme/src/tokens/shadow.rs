//! Shadow tokens for theming

use crate::color::Color;

/// Semantic shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    Sm,
    Md,
    Lg,
    Xl,
    Inner,
    None,
}

/// A box shadow definition
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
    pub inset: bool,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
            inset: false,
        }
    }

    pub const fn none() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, Color::TRANSPARENT)
    }

    pub const fn inset(mut self) -> Self {
        self.inset = true;
        self
    }

    /// CSS `box-shadow` value
    pub fn to_css(&self) -> String {
        if self.color.a == 0.0 {
            return "none".into();
        }
        format!(
            "{}{}px {}px {}px {}px {}",
            if self.inset { "inset " } else { "" },
            self.offset_x,
            self.offset_y,
            self.blur,
            self.spread,
            self.color.to_css()
        )
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Complete set of shadow tokens
#[derive(Clone, Debug)]
pub struct ShadowTokens {
    pub shadow_sm: Shadow,
    pub shadow_md: Shadow,
    pub shadow_lg: Shadow,
    pub shadow_xl: Shadow,
    pub shadow_inner: Shadow,
    pub shadow_none: Shadow,
}

impl ShadowTokens {
    /// Get a shadow by token key
    pub fn get(&self, token: ShadowToken) -> &Shadow {
        match token {
            ShadowToken::Sm => &self.shadow_sm,
            ShadowToken::Md => &self.shadow_md,
            ShadowToken::Lg => &self.shadow_lg,
            ShadowToken::Xl => &self.shadow_xl,
            ShadowToken::Inner => &self.shadow_inner,
            ShadowToken::None => &self.shadow_none,
        }
    }

    /// Create shadow tokens for a light color scheme
    pub fn light() -> Self {
        let base_color = Color::BLACK;
        Self {
            shadow_sm: Shadow::new(0.0, 1.0, 2.0, 0.0, base_color.with_alpha(0.05)),
            shadow_md: Shadow::new(0.0, 4.0, 6.0, -1.0, base_color.with_alpha(0.1)),
            shadow_lg: Shadow::new(0.0, 10.0, 15.0, -3.0, base_color.with_alpha(0.1)),
            shadow_xl: Shadow::new(0.0, 20.0, 25.0, -5.0, base_color.with_alpha(0.1)),
            shadow_inner: Shadow::new(0.0, 2.0, 4.0, 0.0, base_color.with_alpha(0.05)).inset(),
            shadow_none: Shadow::none(),
        }
    }

    /// Create shadow tokens for a dark color scheme
    pub fn dark() -> Self {
        let base_color = Color::BLACK;
        Self {
            shadow_sm: Shadow::new(0.0, 1.0, 2.0, 0.0, base_color.with_alpha(0.2)),
            shadow_md: Shadow::new(0.0, 4.0, 6.0, -1.0, base_color.with_alpha(0.3)),
            shadow_lg: Shadow::new(0.0, 10.0, 15.0, -3.0, base_color.with_alpha(0.3)),
            shadow_xl: Shadow::new(0.0, 20.0, 25.0, -5.0, base_color.with_alpha(0.3)),
            shadow_inner: Shadow::new(0.0, 2.0, 4.0, 0.0, base_color.with_alpha(0.15)).inset(),
            shadow_none: Shadow::none(),
        }
    }

    pub(crate) fn push_css_variables(&self, vars: &mut Vec<(String, String)>) {
        vars.push(("--shadow-sm".into(), self.shadow_sm.to_css()));
        vars.push(("--shadow-md".into(), self.shadow_md.to_css()));
        vars.push(("--shadow-lg".into(), self.shadow_lg.to_css()));
        vars.push(("--shadow-xl".into(), self.shadow_xl.to_css()));
        vars.push(("--shadow-inner".into(), self.shadow_inner.to_css()));
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_css_values() {
        let tokens = ShadowTokens::light();
        assert_eq!(tokens.shadow_md.to_css(), "0px 4px 6px -1px rgba(0,0,0,0.1)");
        assert!(tokens.shadow_inner.to_css().starts_with("inset "));
        assert_eq!(tokens.get(ShadowToken::None).to_css(), "none");
    }
}
