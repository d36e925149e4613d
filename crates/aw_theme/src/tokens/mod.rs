//! Design tokens
//!
//! Tokens are the constant values a theme falls back to when it omits a field,
//! and the scales presentation components read through CSS custom properties:
//! - Typography (families, base size, modular scale)
//! - Spacing (4px scale)
//! - Border radii
//! - Shadows
//! - Animation durations and easing

mod animation;
mod radius;
mod shadow;
mod spacing;
mod typography;

pub use animation::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;

/// The full token set used to build theme defaults and token variables.
#[derive(Clone, Debug, Default)]
pub struct DesignTokens {
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
    pub radii: RadiusTokens,
    pub shadows: ShadowTokens,
    pub animations: AnimationTokens,
}

impl DesignTokens {
    /// Token custom properties, `(name, value)` with the `--` prefix.
    pub fn css_variables(&self) -> Vec<(String, String)> {
        let mut vars = Vec::with_capacity(40);
        self.typography.push_css_variables(&mut vars);
        self.spacing.push_css_variables(&mut vars);
        self.radii.push_css_variables(&mut vars);
        self.shadows.push_css_variables(&mut vars);
        self.animations.push_css_variables(&mut vars);
        vars
    }
}

/// Format a pixel length without a trailing `.0`.
pub(crate) fn px(value: f32) -> String {
    format!("{}px", value)
}
