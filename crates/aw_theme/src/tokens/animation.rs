//! Animation tokens

#[derive(Clone, Debug)]
pub struct AnimationTokens {
    /// Durations in milliseconds
    pub duration_fast: u32,
    pub duration_normal: u32,
    pub duration_slow: u32,
    pub easing_standard: String,
    pub easing_emphasized: String,
}

impl AnimationTokens {
    pub(crate) fn push_css_variables(&self, vars: &mut Vec<(String, String)>) {
        vars.push(("--duration-fast".into(), format!("{}ms", self.duration_fast)));
        vars.push(("--duration-normal".into(), format!("{}ms", self.duration_normal)));
        vars.push(("--duration-slow".into(), format!("{}ms", self.duration_slow)));
        vars.push(("--easing-emphasized".into(), self.easing_emphasized.clone()));
    }
}

impl Default for AnimationTokens {
    fn default() -> Self {
        Self {
            duration_fast: 150,
            duration_normal: 300,
            duration_slow: 600,
            easing_standard: "cubic-bezier(0.4, 0, 0.2, 1)".into(),
            easing_emphasized: "cubic-bezier(0.2, 0, 0, 1)".into(),
        }
    }
}
