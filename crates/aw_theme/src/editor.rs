//! Theme editor
//!
//! Control descriptors come from each field's declared kind, never from the
//! shape of its current value: a color field renders a color picker even
//! while it holds an empty or non-hex string.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::context::ThemeContext;
use crate::error::{SaveError, ThemeError};
use crate::options::FieldKind;
use crate::record::{FieldGroup, ThemeData, ThemeField, ThemePatch, ThemeRecord, ThemeValue};

/// The editing widget for one field.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ControlKind {
    Color,
    Select { options: &'static [&'static str] },
    Number { min: f32, max: f32, step: f32 },
    Text,
    Boolean,
}

impl From<FieldKind> for ControlKind {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Color => ControlKind::Color,
            FieldKind::Choice(option) => ControlKind::Select {
                options: option.values(),
            },
            FieldKind::Number { min, max, step } => ControlKind::Number { min, max, step },
            FieldKind::Text => ControlKind::Text,
            FieldKind::Boolean => ControlKind::Boolean,
        }
    }
}

/// Everything a control panel needs to render one field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ControlDescriptor {
    #[serde(skip)]
    pub field: ThemeField,
    pub key: &'static str,
    pub label: String,
    pub group: FieldGroup,
    #[serde(flatten)]
    pub kind: ControlKind,
    pub value: ThemeValue,
}

/// Controls keyed by field key, in field declaration order.
pub type ControlMap = IndexMap<&'static str, ControlDescriptor>;

pub fn control_for(field: ThemeField, data: &ThemeData) -> ControlDescriptor {
    ControlDescriptor {
        field,
        key: field.key(),
        label: field.label(),
        group: field.group(),
        kind: field.kind().into(),
        value: data.get(field),
    }
}

pub fn controls_for(data: &ThemeData) -> ControlMap {
    ThemeField::ALL
        .iter()
        .map(|field| (field.key(), control_for(*field, data)))
        .collect()
}

/// Remote destination for a finished theme.
#[async_trait]
pub trait ThemeSaver: Send + Sync {
    async fn save(&self, record: &ThemeRecord) -> Result<(), SaveError>;
}

/// Progress of the last remote save.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed(String),
}

/// Binds control changes to a [`ThemeContext`].
///
/// Every method takes `&self`, so the save status can be read while a save
/// is in flight.
pub struct ThemeEditor {
    context: Arc<ThemeContext>,
    initial: Arc<ThemeRecord>,
    status: Mutex<SaveStatus>,
}

impl ThemeEditor {
    /// Open an editor on the context's active theme. [`reset`](Self::reset)
    /// returns to this snapshot.
    pub fn new(context: Arc<ThemeContext>) -> Self {
        let initial = context.current_theme();
        Self {
            context,
            initial,
            status: Mutex::new(SaveStatus::Idle),
        }
    }

    pub fn context(&self) -> &Arc<ThemeContext> {
        &self.context
    }

    pub fn controls(&self) -> ControlMap {
        controls_for(&self.context.current_theme().data)
    }

    /// Validate one control change and patch the context with it.
    pub fn apply_change(
        &self,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<Arc<ThemeRecord>, ThemeError> {
        let field =
            ThemeField::from_key(key).ok_or_else(|| ThemeError::UnknownField(key.to_string()))?;
        let patch = ThemePatch::single(field, field.parse_json(value)?)?;
        debug!("ThemeEditor::apply_change - `{}`", key);
        self.context.update_theme(&patch)
    }

    /// Apply a typed value.
    pub fn set_value(
        &self,
        field: ThemeField,
        value: ThemeValue,
    ) -> Result<Arc<ThemeRecord>, ThemeError> {
        self.context.update_theme(&ThemePatch::single(field, value)?)
    }

    /// Undo every change made since the editor was opened.
    pub fn reset(&self) -> Result<Arc<ThemeRecord>, ThemeError> {
        let current = self.context.current_theme();
        let patch = current.data.diff(&self.initial.data);
        if patch.is_empty() {
            return Ok(current);
        }
        self.context.update_theme(&patch)
    }

    /// Send the active theme to `saver`. Local state is kept on failure.
    pub async fn save(&self, saver: &dyn ThemeSaver) -> Result<(), SaveError> {
        let record = self.context.current_theme();
        self.set_status(SaveStatus::Saving);

        let result = saver.save(&record).await;
        match &result {
            Ok(()) => {
                debug!("ThemeEditor::save - saved `{}`", record.key);
                self.set_status(SaveStatus::Saved);
            }
            Err(e) => {
                warn!("ThemeEditor::save - `{}` failed: {}", record.key, e);
                self.set_status(SaveStatus::Failed(e.to_string()));
            }
        }
        result
    }

    fn set_status(&self, status: SaveStatus) {
        *self.status.lock().unwrap() = status;
    }

    pub fn status(&self) -> SaveStatus {
        self.status.lock().unwrap().clone()
    }

    pub fn is_saving(&self) -> bool {
        *self.status.lock().unwrap() == SaveStatus::Saving
    }

    /// Message of the last failed save.
    pub fn save_error(&self) -> Option<String> {
        match &*self.status.lock().unwrap() {
            SaveStatus::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }
}
