//! Border radius tokens

use super::px;

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    None,
    Sm,
    Md,
    Lg,
    Full,
}

#[derive(Clone, Debug)]
pub struct RadiusTokens {
    pub radius_none: f32,
    pub radius_sm: f32,
    pub radius_md: f32,
    pub radius_lg: f32,
    pub radius_full: f32,
}

impl RadiusTokens {
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::None => self.radius_none,
            RadiusToken::Sm => self.radius_sm,
            RadiusToken::Md => self.radius_md,
            RadiusToken::Lg => self.radius_lg,
            RadiusToken::Full => self.radius_full,
        }
    }

    pub(crate) fn push_css_variables(&self, vars: &mut Vec<(String, String)>) {
        vars.push(("--radius-sm".into(), px(self.radius_sm)));
        vars.push(("--radius-md".into(), px(self.radius_md)));
        vars.push(("--radius-lg".into(), px(self.radius_lg)));
        vars.push(("--radius-full".into(), px(self.radius_full)));
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            radius_none: 0.0,
            radius_sm: 4.0,
            radius_md: 8.0,
            radius_lg: 16.0,
            radius_full: 999.0,
        }
    }
}
