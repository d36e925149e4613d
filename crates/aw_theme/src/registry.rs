//! Theme registry
//!
//! An explicit store of named theme records. The application root builds one
//! with [`ThemeRegistry::builtin`] and hands it to whoever needs it; nothing
//! here is global. Updates build a new record and swap it in, so a reader
//! holding an `Arc<ThemeRecord>` keeps a consistent snapshot.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::editor::{controls_for, ControlMap};
use crate::error::ThemeError;
use crate::presets::ThemePreset;
use crate::record::{ThemePatch, ThemeRecord};

#[derive(Clone, Debug, Default)]
pub struct ThemeRegistry {
    records: IndexMap<String, Arc<ThemeRecord>>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in preset.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for preset in ThemePreset::all() {
            registry.store(preset.record());
        }
        registry
    }

    /// Add or replace a record under its key.
    ///
    /// The record's data is validated first; an invalid record leaves the
    /// registry unchanged.
    pub fn insert(&mut self, record: ThemeRecord) -> Result<Arc<ThemeRecord>, ThemeError> {
        record.data.validate()?;
        debug!("ThemeRegistry::insert - registered `{}`", record.key);
        Ok(self.store(record))
    }

    fn store(&mut self, record: ThemeRecord) -> Arc<ThemeRecord> {
        let record = Arc::new(record);
        self.records.insert(record.key.clone(), Arc::clone(&record));
        record
    }

    /// Look up a theme; unknown keys are `None`.
    pub fn get(&self, key: &str) -> Option<Arc<ThemeRecord>> {
        self.records.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// Shallow-merge `patch` into the record stored under `key`.
    ///
    /// Returns the new record. Other entries are untouched.
    pub fn update(&mut self, key: &str, patch: &ThemePatch) -> Result<Arc<ThemeRecord>, ThemeError> {
        patch.validate()?;
        let slot = self
            .records
            .get_mut(key)
            .ok_or_else(|| ThemeError::UnknownTheme(key.to_string()))?;
        let next = Arc::new(slot.patched(patch));
        *slot = Arc::clone(&next);
        debug!(
            "ThemeRegistry::update - {} field(s) patched on `{}`",
            patch.fields().len(),
            key
        );
        Ok(next)
    }

    /// Editor controls for the theme under `key`.
    pub fn controls(&self, key: &str) -> Option<ControlMap> {
        self.records.get(key).map(|record| controls_for(&record.data))
    }

    /// Registered keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ThemeRecord>> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
