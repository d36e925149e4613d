//! Theme context
//!
//! `ThemeContext` owns the active theme for one site: it projects the theme
//! onto a root [`StyleMap`], persists it through a [`ThemeStorage`] with a
//! trailing-edge debounce and keeps the registry the editor patches.
//!
//! All state sits behind locks so a context can be shared as
//! `Arc<ThemeContext>`. The active record and its projected style share one
//! lock, so every change is a single read-merge-project step and the style
//! always matches the record. The change listener runs after that lock is
//! released.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::defaults;
use crate::error::ThemeError;
use crate::persist::{Debouncer, DEFAULT_DEBOUNCE};
use crate::projection::{apply_design_tokens, apply_theme, resolve_json, StyleMap};
use crate::record::{PersistedTheme, ThemePatch, ThemeRecord};
use crate::registry::ThemeRegistry;
use crate::storage::{ThemeStorage, CURRENT_THEME_KEY, CUSTOM_THEME_KEY, LAST_FETCHED_KEY};
use crate::tokens::DesignTokens;

/// Registry key of the user-authored theme.
pub const CUSTOM_THEME: &str = "custom";

type ChangeListener = Arc<dyn Fn(&ThemeRecord) + Send + Sync>;

/// Construction options for [`ThemeContext`].
#[derive(Clone, Debug)]
pub struct ContextConfig {
    /// Theme used when nothing usable is persisted.
    pub default_theme: String,
    /// Quiet period before the active theme is written to storage.
    pub debounce: Duration,
    /// Also project the design token scales onto the root style.
    pub project_tokens: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            default_theme: "light".to_string(),
            debounce: DEFAULT_DEBOUNCE,
            project_tokens: true,
        }
    }
}

/// The active record and the root style projected from it.
struct Active {
    record: Arc<ThemeRecord>,
    style: StyleMap,
}

pub struct ThemeContext {
    config: ContextConfig,
    storage: Box<dyn ThemeStorage>,
    registry: RwLock<ThemeRegistry>,
    active: RwLock<Active>,
    persister: Mutex<Debouncer<String>>,
    listener: RwLock<Option<ChangeListener>>,
    dialog_open: AtomicBool,
    needs_repaint: AtomicBool,
}

impl ThemeContext {
    /// Build a context, restoring the persisted theme synchronously.
    ///
    /// A persisted `customTheme` is registered as `custom`. An unreadable or
    /// malformed `currentTheme` is logged and replaced by the default theme.
    pub fn new(
        registry: ThemeRegistry,
        storage: impl ThemeStorage + 'static,
        config: ContextConfig,
    ) -> Self {
        let mut registry = registry;

        if let Some(custom) = load_custom(&storage) {
            if let Err(e) = registry.insert(custom) {
                warn!("ignoring invalid `{}` in theme storage: {}", CUSTOM_THEME_KEY, e);
            }
        }

        let current = load_current(&storage, &registry, &config)
            .unwrap_or_else(|| fallback_record(&registry, &config.default_theme));
        debug!("ThemeContext::new - active theme `{}`", current.key);

        let mut style = StyleMap::new();
        if config.project_tokens {
            apply_design_tokens(&DesignTokens::default(), &mut style);
        }
        apply_theme(&current.data, &mut style);

        Self {
            persister: Mutex::new(Debouncer::new(config.debounce)),
            config,
            storage: Box::new(storage),
            registry: RwLock::new(registry),
            active: RwLock::new(Active {
                record: current,
                style,
            }),
            listener: RwLock::new(None),
            dialog_open: AtomicBool::new(false),
            needs_repaint: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Snapshot of the active theme.
    pub fn current_theme(&self) -> Arc<ThemeRecord> {
        Arc::clone(&self.active.read().unwrap().record)
    }

    /// Shallow-merge `patch` into the active theme, re-project it and
    /// schedule persistence.
    ///
    /// The merge reads and replaces the active record under one lock, so
    /// concurrent patches compose.
    pub fn update_theme(&self, patch: &ThemePatch) -> Result<Arc<ThemeRecord>, ThemeError> {
        patch.validate()?;
        self.transition(|current| {
            debug!(
                "ThemeContext::update_theme - {} field(s) on `{}`",
                patch.fields().len(),
                current.key
            );
            Some(Arc::new(current.patched(patch)))
        })
    }

    /// Switch to a registered theme.
    pub fn select_theme(&self, key: &str) -> Result<Arc<ThemeRecord>, ThemeError> {
        let record = self
            .registry
            .read()
            .unwrap()
            .get(key)
            .ok_or_else(|| ThemeError::UnknownTheme(key.to_string()))?;
        debug!("ThemeContext::select_theme - switching to `{}`", key);
        self.activate(record)
    }

    /// Patch a registered theme. When it is the active one, the context
    /// switches to the patched record.
    pub fn update_registered(
        &self,
        key: &str,
        patch: &ThemePatch,
    ) -> Result<Arc<ThemeRecord>, ThemeError> {
        let record = self.registry.write().unwrap().update(key, patch)?;
        self.follow_registered(record)
    }

    /// Store the active theme's data as the `custom` theme, register it and
    /// write it to storage immediately.
    pub fn save_custom(&self) -> Result<Arc<ThemeRecord>, ThemeError> {
        let data = self.current_theme().data.clone();
        let record = ThemeRecord::new(CUSTOM_THEME, "Custom", data);
        let json = serde_json::to_string(&PersistedTheme::from(&record))?;
        self.storage.set(CUSTOM_THEME_KEY, &json)?;
        debug!("ThemeContext::save_custom - stored custom theme");
        self.registry.write().unwrap().insert(record)
    }

    pub fn is_theme_dialog_open(&self) -> bool {
        self.dialog_open.load(Ordering::SeqCst)
    }

    pub fn set_theme_dialog_open(&self, open: bool) {
        self.dialog_open.store(open, Ordering::SeqCst);
    }

    /// Copy of the root style.
    pub fn root_style(&self) -> StyleMap {
        self.active.read().unwrap().style.clone()
    }

    /// Current value of one root custom property.
    pub fn property_value(&self, name: &str) -> Option<String> {
        self.active
            .read()
            .unwrap()
            .style
            .get_property_value(name)
            .map(str::to_string)
    }

    /// Called with the new record after every theme change.
    pub fn set_change_listener(&self, listener: impl Fn(&ThemeRecord) + Send + Sync + 'static) {
        *self.listener.write().unwrap() = Some(Arc::new(listener));
    }

    pub fn registry(&self) -> RwLockReadGuard<'_, ThemeRegistry> {
        self.registry.read().unwrap()
    }

    /// Returns true once after any theme change, then clears the flag.
    pub fn take_needs_repaint(&self) -> bool {
        self.needs_repaint.swap(false, Ordering::SeqCst)
    }

    /// Write the pending theme if its debounce deadline has passed.
    ///
    /// Returns true when a write happened. A failed write stays pending and
    /// is retried by the next `tick`, `flush` or drop.
    pub fn tick(&self) -> Result<bool, ThemeError> {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&self, now: Instant) -> Result<bool, ThemeError> {
        let due = self.persister.lock().unwrap().poll_at(now);
        match due {
            Some(json) => {
                self.write_current(json, now)?;
                debug!("ThemeContext::tick - persisted current theme");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Write the pending theme now, if any. On failure it stays pending.
    pub fn flush(&self) -> Result<(), ThemeError> {
        let pending = self.persister.lock().unwrap().take();
        if let Some(json) = pending {
            self.write_current(json, Instant::now())?;
            debug!("ThemeContext::flush - persisted current theme");
        }
        Ok(())
    }

    fn write_current(&self, json: String, now: Instant) -> Result<(), ThemeError> {
        if let Err(e) = self.storage.set(CURRENT_THEME_KEY, &json) {
            self.persister.lock().unwrap().restore_at(json, now);
            return Err(e.into());
        }
        Ok(())
    }

    pub fn has_pending_write(&self) -> bool {
        self.persister.lock().unwrap().is_pending()
    }

    /// Register a remotely fetched record and stamp the fetch time.
    ///
    /// The record is validated before anything is written. When it replaces
    /// the active theme, the context switches to the fetched data.
    pub fn record_fetch(
        &self,
        record: ThemeRecord,
        now: SystemTime,
    ) -> Result<Arc<ThemeRecord>, ThemeError> {
        record.data.validate()?;
        let millis = now
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        self.storage.set(LAST_FETCHED_KEY, &millis.to_string())?;
        debug!("ThemeContext::record_fetch - imported `{}`", record.key);
        let record = self.registry.write().unwrap().insert(record)?;
        self.follow_registered(record)
    }

    /// Time of the last remote fetch, if one was recorded.
    pub fn last_fetched(&self) -> Option<SystemTime> {
        let raw = match self.storage.get(LAST_FETCHED_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("ThemeContext::last_fetched - storage read failed: {}", e);
                return None;
            }
        };
        match raw.trim().parse::<u64>() {
            Ok(millis) => Some(UNIX_EPOCH + Duration::from_millis(millis)),
            Err(_) => {
                warn!("ThemeContext::last_fetched - ignoring malformed stamp `{}`", raw);
                None
            }
        }
    }

    /// True when no fetch was recorded or the last one is older than `max_age`.
    pub fn is_fetch_stale(&self, max_age: Duration) -> bool {
        self.is_fetch_stale_at(max_age, SystemTime::now())
    }

    pub fn is_fetch_stale_at(&self, max_age: Duration, now: SystemTime) -> bool {
        match self.last_fetched() {
            Some(fetched) => now
                .duration_since(fetched)
                .map(|age| age > max_age)
                .unwrap_or(false),
            None => true,
        }
    }

    fn activate(&self, record: Arc<ThemeRecord>) -> Result<Arc<ThemeRecord>, ThemeError> {
        self.transition(|_| Some(record))
    }

    /// Switch to a replaced registry entry if it is the active theme.
    fn follow_registered(&self, record: Arc<ThemeRecord>) -> Result<Arc<ThemeRecord>, ThemeError> {
        self.transition(|current| (current.key == record.key).then(|| Arc::clone(&record)))?;
        Ok(record)
    }

    /// Replace the active record with `next(current)`, re-project it and
    /// schedule persistence, all under the active lock. `None` keeps the
    /// current record and skips the rest.
    fn transition(
        &self,
        next: impl FnOnce(&ThemeRecord) -> Option<Arc<ThemeRecord>>,
    ) -> Result<Arc<ThemeRecord>, ThemeError> {
        let record = {
            let mut active = self.active.write().unwrap();
            let Some(record) = next(active.record.as_ref()) else {
                return Ok(Arc::clone(&active.record));
            };

            let json = serde_json::to_string(&PersistedTheme::from(record.as_ref()))?;
            apply_theme(&record.data, &mut active.style);
            active.record = Arc::clone(&record);
            self.persister.lock().unwrap().schedule(json);
            record
        };
        self.needs_repaint.store(true, Ordering::SeqCst);

        let listener = self.listener.read().unwrap().clone();
        if let Some(listener) = listener {
            listener(record.as_ref());
        }
        Ok(record)
    }
}

impl Drop for ThemeContext {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            warn!("ThemeContext::drop - failed to persist theme: {}", e);
        }
    }
}

fn read_json(storage: &dyn ThemeStorage, key: &str) -> Option<serde_json::Value> {
    let raw = match storage.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!("failed to read `{}` from theme storage: {}", key, e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("ignoring malformed `{}` in theme storage: {}", key, e);
            None
        }
    }
}

fn string_field(value: &serde_json::Value, name: &str) -> Option<String> {
    value.get(name).and_then(|v| v.as_str()).map(str::to_string)
}

fn load_current(
    storage: &dyn ThemeStorage,
    registry: &ThemeRegistry,
    config: &ContextConfig,
) -> Option<Arc<ThemeRecord>> {
    let value = read_json(storage, CURRENT_THEME_KEY)?;
    let data = match resolve_json(&value) {
        Ok(data) => data,
        Err(e) => {
            warn!("ignoring invalid `{}` in theme storage: {}", CURRENT_THEME_KEY, e);
            return None;
        }
    };

    let key = string_field(&value, "key").unwrap_or_else(|| config.default_theme.clone());
    let name = string_field(&value, "name")
        .or_else(|| registry.get(&key).map(|r| r.name.clone()))
        .unwrap_or_else(|| key.clone());
    Some(Arc::new(ThemeRecord::new(key, name, data)))
}

fn load_custom(storage: &dyn ThemeStorage) -> Option<ThemeRecord> {
    let value = read_json(storage, CUSTOM_THEME_KEY)?;
    match resolve_json(&value) {
        Ok(data) => {
            let name = string_field(&value, "name").unwrap_or_else(|| "Custom".to_string());
            Some(ThemeRecord::new(CUSTOM_THEME, name, data))
        }
        Err(e) => {
            warn!("ignoring invalid `{}` in theme storage: {}", CUSTOM_THEME_KEY, e);
            None
        }
    }
}

fn fallback_record(registry: &ThemeRegistry, key: &str) -> Arc<ThemeRecord> {
    registry.get(key).unwrap_or_else(|| {
        warn!("default theme `{}` is not registered, using the baseline", key);
        Arc::new(ThemeRecord::new(key, key, defaults::baseline().clone()))
    })
}
