//! Spacing tokens (4px base scale)

use super::px;

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Space1,
    Space2,
    Space3,
    Space4,
    Space6,
    Space8,
    Space12,
    Space16,
    Space24,
}

impl SpacingToken {
    pub const ALL: [SpacingToken; 9] = [
        SpacingToken::Space1,
        SpacingToken::Space2,
        SpacingToken::Space3,
        SpacingToken::Space4,
        SpacingToken::Space6,
        SpacingToken::Space8,
        SpacingToken::Space12,
        SpacingToken::Space16,
        SpacingToken::Space24,
    ];

    /// Multiple of the base unit
    pub fn multiplier(self) -> f32 {
        match self {
            Self::Space1 => 1.0,
            Self::Space2 => 2.0,
            Self::Space3 => 3.0,
            Self::Space4 => 4.0,
            Self::Space6 => 6.0,
            Self::Space8 => 8.0,
            Self::Space12 => 12.0,
            Self::Space16 => 16.0,
            Self::Space24 => 24.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SpacingTokens {
    pub unit: f32,
    pub container_width: f32,
}

impl SpacingTokens {
    pub fn get(&self, token: SpacingToken) -> f32 {
        self.unit * token.multiplier()
    }

    pub(crate) fn push_css_variables(&self, vars: &mut Vec<(String, String)>) {
        for token in SpacingToken::ALL {
            vars.push((
                format!("--space-{}", token.multiplier() as u32),
                px(self.get(token)),
            ));
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            unit: 4.0,
            container_width: 1200.0,
        }
    }
}
