//! Style projection
//!
//! Turns a resolved [`ThemeData`] into CSS custom properties on a root style
//! target, plus the modifier class names presentation components switch on.
//! Every field is always written, so re-applying a theme over another one
//! leaves nothing stale behind.

use indexmap::IndexMap;
use tracing::{trace, warn};

use crate::error::ThemeError;
use crate::options::Alignment;
use crate::record::{ThemeData, ThemeField, ThemePatch};
use crate::tokens::DesignTokens;

/// A style target that accepts CSS custom properties.
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str);
}

/// In-process root style: an ordered map of custom properties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleMap {
    properties: IndexMap<String, String>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a property, `None` if never set.
    pub fn get_property_value(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render the properties as a CSS rule for `selector`.
    pub fn to_css_block(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for (name, value) in &self.properties {
            css.push_str("  ");
            css.push_str(name);
            css.push_str(": ");
            css.push_str(value);
            css.push_str(";\n");
        }
        css.push('}');
        css.push('\n');
        css
    }
}

impl StyleSink for StyleMap {
    fn set_property(&mut self, name: &str, value: &str) {
        match self.properties.get_mut(name) {
            Some(existing) => {
                if existing != value {
                    *existing = value.to_string();
                }
            }
            None => {
                self.properties.insert(name.to_string(), value.to_string());
            }
        }
    }
}

/// `(css var, value)` for every theme field, in declaration order.
pub fn css_variable_map(theme: &ThemeData) -> IndexMap<&'static str, String> {
    ThemeField::ALL
        .iter()
        .map(|field| (field.css_var(), theme.get(*field).to_css()))
        .collect()
}

/// Write one custom property per theme field onto `sink`.
pub fn apply_theme(theme: &ThemeData, sink: &mut impl StyleSink) {
    let vars = css_variable_map(theme);
    for (name, value) in &vars {
        sink.set_property(name, value);
    }
    trace!("apply_theme - projected {} properties", vars.len());
}

/// Write the token scales (`--space-*`, `--font-size-*`, `--radius-*`,
/// `--shadow-*`, `--duration-*`) onto `sink`.
pub fn apply_design_tokens(tokens: &DesignTokens, sink: &mut impl StyleSink) {
    let vars = tokens.css_variables();
    for (name, value) in &vars {
        sink.set_property(name, value);
    }
    trace!("apply_design_tokens - projected {} properties", vars.len());
}

/// Resolve a loosely shaped JSON object into a full record.
///
/// Absent fields take their default. Keys that name no field are skipped.
pub fn resolve_json(value: &serde_json::Value) -> Result<ThemeData, ThemeError> {
    let Some(object) = value.as_object() else {
        return Err(ThemeError::invalid(
            "theme",
            format!("expected a json object, found {value}"),
        ));
    };

    let (patch, unknown) = ThemePatch::from_json_object(object)?;
    for key in unknown.iter().filter(|k| !is_record_metadata(k)) {
        warn!("resolve_json - ignoring unknown theme key `{}`", key);
    }
    Ok(crate::defaults::baseline().merged(&patch))
}

fn is_record_metadata(key: &str) -> bool {
    matches!(key, "key" | "name")
}

/// Text alignment utility class.
pub fn alignment_class(align: Alignment) -> &'static str {
    match align {
        Alignment::Left => "text-left",
        Alignment::Center => "text-center",
        Alignment::Right => "text-right",
    }
}

/// Flex justification class matching an alignment.
pub fn justify_class(align: Alignment) -> &'static str {
    match align {
        Alignment::Left => "justify-start",
        Alignment::Center => "justify-center",
        Alignment::Right => "justify-end",
    }
}

/// Modifier classes for the option fields that change markup, not just
/// values (`hero--cssgradient`, `nav--top`, ...).
pub fn theme_class_names(theme: &ThemeData) -> Vec<String> {
    vec![
        format!("hero--{}", theme.hero_type),
        format!("hero--{}", theme.hero_background),
        format!("nav--{}", theme.nav_position),
        format!("nav--{}", theme.nav_variant),
        format!("grid--{}", theme.grid_layout),
        format!("blog--{}", theme.blog_layout),
        format!("footer--{}", theme.footer_layout),
        format!("card--{}", theme.card_style),
        format!("button--{}", theme.button_variant),
        format!("text-anim--{}", theme.text_animation),
        format!("scroll-anim--{}", theme.scroll_animation),
        format!("image-hover--{}", theme.image_hover),
        format!("cursor--{}", theme.cursor),
        format!("shader--{}", theme.shader_effect),
        alignment_class(theme.text_align).to_string(),
    ]
}
