use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant, UNIX_EPOCH};

use aw_theme::{
    ContextConfig, CssColor, FileStorage, GridLayout, MemoryStorage, PersistedTheme, StorageError,
    ThemeContext, ThemeError, ThemePatch, ThemePreset, ThemeRecord, ThemeRegistry, ThemeStorage,
    CURRENT_THEME_KEY, CUSTOM_THEME, CUSTOM_THEME_KEY, LAST_FETCHED_KEY,
};
use pretty_assertions::assert_eq;

/// Memory storage whose writes can be switched to fail.
#[derive(Clone, Default)]
struct FlakyStorage {
    inner: MemoryStorage,
    failing: Arc<AtomicBool>,
}

impl FlakyStorage {
    fn fail_writes(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl ThemeStorage for FlakyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Write {
                key: key.to_string(),
                path: PathBuf::from("flaky"),
                source: io::Error::new(io::ErrorKind::Other, "disk full"),
            });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

fn context_with(storage: &MemoryStorage) -> ThemeContext {
    ThemeContext::new(
        ThemeRegistry::builtin(),
        storage.clone(),
        ContextConfig::default(),
    )
}

fn text_color(hex: &str) -> ThemePatch {
    ThemePatch {
        text_color: Some(CssColor::new(hex)),
        ..ThemePatch::default()
    }
}

#[test]
fn empty_storage_starts_on_light() {
    let storage = MemoryStorage::new();
    let ctx = context_with(&storage);

    assert_eq!(ctx.current_theme().key, "light");
    assert_eq!(
        ctx.property_value("--accent-pri").as_deref(),
        Some(ThemePreset::Light.record().data.accent_pri.as_str())
    );
    assert!(!ctx.has_pending_write());
}

#[test]
fn malformed_persisted_json_falls_back_to_light() {
    let storage = MemoryStorage::new();
    storage.set(CURRENT_THEME_KEY, "{not json").unwrap();

    let ctx = context_with(&storage);
    assert_eq!(ctx.current_theme().key, "light");
    assert_eq!(ctx.current_theme().data, ThemePreset::Light.record().data);
}

#[test]
fn invalid_persisted_value_falls_back_to_light() {
    let storage = MemoryStorage::new();
    storage
        .set(CURRENT_THEME_KEY, r#"{"key":"dark","heroBackground":"lava"}"#)
        .unwrap();

    let ctx = context_with(&storage);
    assert_eq!(ctx.current_theme().key, "light");
}

#[test]
fn configured_default_theme_is_used_as_fallback() {
    let storage = MemoryStorage::new();
    let ctx = ThemeContext::new(
        ThemeRegistry::builtin(),
        storage.clone(),
        ContextConfig {
            default_theme: "sepia".into(),
            ..ContextConfig::default()
        },
    );
    assert_eq!(ctx.current_theme().key, "sepia");
}

#[test]
fn persisted_theme_is_restored() {
    let storage = MemoryStorage::new();
    let mut record = ThemePreset::Ocean.record();
    record.data.grid_columns = 5.0;
    storage
        .set(
            CURRENT_THEME_KEY,
            &serde_json::to_string(&PersistedTheme::from(&record)).unwrap(),
        )
        .unwrap();

    let ctx = context_with(&storage);
    let current = ctx.current_theme();
    assert_eq!(current.key, "ocean");
    assert_eq!(current.name, "Ocean");
    assert_eq!(current.data.grid_columns, 5.0);
    assert_eq!(ctx.property_value("--grid-columns").as_deref(), Some("5"));
}

#[test]
fn update_theme_reprojects_and_debounces_persistence() {
    let storage = MemoryStorage::new();
    let ctx = context_with(&storage);

    for hex in ["#111111", "#222222", "#333333"] {
        ctx.update_theme(&text_color(hex)).unwrap();
    }
    assert_eq!(ctx.property_value("--text-color").as_deref(), Some("#333333"));

    // Nothing written until the quiet period passes
    assert!(!ctx.tick_at(Instant::now()).unwrap());
    assert_eq!(storage.write_count(), 0);

    assert!(ctx.tick_at(Instant::now() + Duration::from_secs(1)).unwrap());
    assert_eq!(storage.write_count(), 1);

    let stored = storage.get(CURRENT_THEME_KEY).unwrap().unwrap();
    let persisted: PersistedTheme = serde_json::from_str(&stored).unwrap();
    assert_eq!(persisted.key, "light");
    assert_eq!(persisted.data.text_color.as_str(), "#333333");
}

#[test]
fn update_theme_does_not_touch_the_registry() {
    let storage = MemoryStorage::new();
    let ctx = context_with(&storage);

    ctx.update_theme(&text_color("#111111")).unwrap();
    assert_eq!(
        ctx.registry().get("light").unwrap().data.text_color,
        ThemePreset::Light.record().data.text_color
    );
}

#[test]
fn invalid_patch_is_rejected() {
    let storage = MemoryStorage::new();
    let ctx = context_with(&storage);

    let err = ctx.update_theme(&text_color("nope")).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidValue { field: "textColor", .. }));
    assert!(!ctx.has_pending_write());
}

#[test]
fn drop_flushes_pending_write() {
    let storage = MemoryStorage::new();
    {
        let ctx = context_with(&storage);
        ctx.select_theme("dark").unwrap();
        assert_eq!(storage.write_count(), 0);
    }
    assert_eq!(storage.write_count(), 1);

    let ctx = context_with(&storage);
    assert_eq!(ctx.current_theme().key, "dark");
}

#[test]
fn flush_writes_immediately_once() {
    let storage = MemoryStorage::new();
    let ctx = context_with(&storage);

    ctx.select_theme("forest").unwrap();
    ctx.flush().unwrap();
    ctx.flush().unwrap();
    assert_eq!(storage.write_count(), 1);
    drop(ctx);
    assert_eq!(storage.write_count(), 1);
}

#[test]
fn select_unknown_theme_is_an_error() {
    let storage = MemoryStorage::new();
    let ctx = context_with(&storage);

    assert!(matches!(
        ctx.select_theme("solarized"),
        Err(ThemeError::UnknownTheme(_))
    ));
    assert_eq!(ctx.current_theme().key, "light");
}

#[test]
fn registry_entries_are_independent() {
    let storage = MemoryStorage::new();
    let ctx = context_with(&storage);
    let dark_before = ctx.registry().get("dark").unwrap().data.text_color.clone();

    ctx.update_registered("light", &text_color("#111111")).unwrap();

    assert_eq!(
        ctx.registry().get("light").unwrap().data.text_color.as_str(),
        "#111111"
    );
    assert_eq!(ctx.registry().get("dark").unwrap().data.text_color, dark_before);
    // light is active, so the context follows the patched record
    assert_eq!(ctx.property_value("--text-color").as_deref(), Some("#111111"));
}

#[test]
fn update_registered_on_inactive_theme_keeps_projection() {
    let storage = MemoryStorage::new();
    let ctx = context_with(&storage);
    let before = ctx.root_style();

    let patch = ThemePatch {
        grid_layout: Some(GridLayout::Masonry),
        ..ThemePatch::default()
    };
    ctx.update_registered("dark", &patch).unwrap();

    assert_eq!(ctx.root_style(), before);
    assert!(!ctx.has_pending_write());
}

#[test]
fn custom_theme_is_saved_and_registered_on_load() {
    let storage = MemoryStorage::new();
    {
        let ctx = context_with(&storage);
        ctx.update_theme(&text_color("#123456")).unwrap();
        let custom = ctx.save_custom().unwrap();
        assert_eq!(custom.key, CUSTOM_THEME);
        assert!(storage.get(CUSTOM_THEME_KEY).unwrap().is_some());
    }

    let ctx = context_with(&storage);
    let custom = ctx.registry().get(CUSTOM_THEME).unwrap();
    assert_eq!(custom.data.text_color.as_str(), "#123456");
    assert_eq!(ctx.registry().len(), ThemePreset::all().len() + 1);
}

#[test]
fn change_listener_sees_every_change() {
    let storage = MemoryStorage::new();
    let ctx = context_with(&storage);
    let calls = Arc::new(AtomicUsize::new(0));

    let seen = Arc::clone(&calls);
    ctx.set_change_listener(move |_record| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    ctx.select_theme("gameBoy").unwrap();
    ctx.update_theme(&text_color("#0f380f")).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(ctx.take_needs_repaint());
    assert!(!ctx.take_needs_repaint());
}

#[test]
fn dialog_flag_round_trips() {
    let storage = MemoryStorage::new();
    let ctx = context_with(&storage);

    assert!(!ctx.is_theme_dialog_open());
    ctx.set_theme_dialog_open(true);
    assert!(ctx.is_theme_dialog_open());
}

#[test]
fn tokens_are_projected_unless_disabled() {
    let storage = MemoryStorage::new();
    let with_tokens = context_with(&storage);
    assert!(with_tokens.property_value("--space-4").is_some());

    let without = ThemeContext::new(
        ThemeRegistry::builtin(),
        storage.clone(),
        ContextConfig {
            project_tokens: false,
            ..ContextConfig::default()
        },
    );
    assert!(without.property_value("--space-4").is_none());
    assert!(without.property_value("--accent-pri").is_some());
}

#[test]
fn fetch_stamp_and_staleness() {
    let storage = MemoryStorage::new();
    let ctx = context_with(&storage);
    assert_eq!(ctx.last_fetched(), None);
    assert!(ctx.is_fetch_stale(Duration::from_secs(60)));

    let fetched_at = UNIX_EPOCH + Duration::from_millis(1_700_000_000_000);
    let record = ThemeRecord::new("remote", "Remote", ThemePreset::Ocean.record().data);
    ctx.record_fetch(record, fetched_at).unwrap();

    assert_eq!(
        storage.get(LAST_FETCHED_KEY).unwrap().as_deref(),
        Some("1700000000000")
    );
    assert_eq!(ctx.last_fetched(), Some(fetched_at));
    assert!(ctx.registry().get("remote").is_some());

    let soon = fetched_at + Duration::from_secs(30);
    let later = fetched_at + Duration::from_secs(3600);
    assert!(!ctx.is_fetch_stale_at(Duration::from_secs(60), soon));
    assert!(ctx.is_fetch_stale_at(Duration::from_secs(60), later));
}

#[test]
fn file_storage_backs_a_context() {
    let dir = tempfile::tempdir().unwrap();
    {
        let ctx = ThemeContext::new(
            ThemeRegistry::builtin(),
            FileStorage::new(dir.path()),
            ContextConfig::default(),
        );
        ctx.select_theme("commodore").unwrap();
    }

    let ctx = ThemeContext::new(
        ThemeRegistry::builtin(),
        FileStorage::new(dir.path()),
        ContextConfig::default(),
    );
    assert_eq!(ctx.current_theme().key, "commodore");
}

#[test]
fn failed_write_stays_pending_until_storage_recovers() {
    let storage = FlakyStorage::default();
    {
        let ctx = ThemeContext::new(
            ThemeRegistry::builtin(),
            storage.clone(),
            ContextConfig::default(),
        );
        ctx.select_theme("dark").unwrap();
        storage.fail_writes(true);

        let later = Instant::now() + Duration::from_secs(1);
        assert!(matches!(ctx.tick_at(later), Err(ThemeError::Storage(_))));
        assert!(ctx.has_pending_write());
        assert!(ctx.flush().is_err());
        assert!(ctx.has_pending_write());

        // A newer edit replaces the failed payload
        ctx.update_theme(&text_color("#0a0a0a")).unwrap();
        storage.fail_writes(false);
    }

    let stored = storage.get(CURRENT_THEME_KEY).unwrap().unwrap();
    let persisted: PersistedTheme = serde_json::from_str(&stored).unwrap();
    assert_eq!(persisted.key, "dark");
    assert_eq!(persisted.data.text_color.as_str(), "#0a0a0a");
}

#[test]
fn failed_tick_is_retried_by_the_next_tick() {
    let storage = FlakyStorage::default();
    let ctx = ThemeContext::new(
        ThemeRegistry::builtin(),
        storage.clone(),
        ContextConfig::default(),
    );
    ctx.select_theme("forest").unwrap();

    let later = Instant::now() + Duration::from_secs(1);
    storage.fail_writes(true);
    assert!(ctx.tick_at(later).is_err());
    storage.fail_writes(false);
    assert!(ctx.tick_at(later).unwrap());
    assert!(!ctx.has_pending_write());
    assert_eq!(storage.inner.write_count(), 1);
}

#[test]
fn concurrent_patches_compose() {
    for _ in 0..50 {
        let storage = MemoryStorage::new();
        let ctx = Arc::new(context_with(&storage));
        let barrier = Arc::new(Barrier::new(2));

        let accent = ThemePatch {
            accent_pri: Some(CssColor::new("#fe0101")),
            ..ThemePatch::default()
        };
        let handles: Vec<_> = [text_color("#101010"), accent]
            .into_iter()
            .map(|patch| {
                let ctx = Arc::clone(&ctx);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    ctx.update_theme(&patch).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let current = ctx.current_theme();
        assert_eq!(current.data.text_color.as_str(), "#101010");
        assert_eq!(current.data.accent_pri.as_str(), "#fe0101");
        assert_eq!(ctx.property_value("--text-color").as_deref(), Some("#101010"));
        assert_eq!(ctx.property_value("--accent-pri").as_deref(), Some("#fe0101"));

        ctx.flush().unwrap();
        let stored = storage.get(CURRENT_THEME_KEY).unwrap().unwrap();
        let persisted: PersistedTheme = serde_json::from_str(&stored).unwrap();
        assert_eq!(persisted.data, current.data);
    }
}

#[test]
fn invalid_fetched_record_is_rejected() {
    let storage = MemoryStorage::new();
    let ctx = context_with(&storage);
    let record: ThemeRecord = serde_json::from_value(serde_json::json!({
        "key": "remote",
        "name": "Remote",
        "data": { "textColor": "bluish", "gridColumns": 99, "lineHeight": -4 }
    }))
    .unwrap();

    let err = ctx.record_fetch(record, UNIX_EPOCH).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidValue { .. }));
    assert!(!ctx.registry().contains("remote"));
    assert_eq!(storage.get(LAST_FETCHED_KEY).unwrap(), None);
    assert!(matches!(
        ctx.select_theme("remote"),
        Err(ThemeError::UnknownTheme(_))
    ));
}

#[test]
fn fetching_the_active_theme_reprojects_it() {
    let storage = MemoryStorage::new();
    let ctx = context_with(&storage);
    let ocean = ThemePreset::Ocean.record().data;

    ctx.record_fetch(ThemeRecord::new("light", "Light", ocean.clone()), UNIX_EPOCH)
        .unwrap();

    assert_eq!(ctx.current_theme().data, ocean);
    assert_eq!(
        ctx.property_value("--accent-pri").as_deref(),
        Some(ocean.accent_pri.as_str())
    );
    assert!(ctx.has_pending_write());
}

#[test]
fn listener_may_replace_itself() {
    let storage = MemoryStorage::new();
    let ctx = Arc::new(context_with(&storage));
    let weak = Arc::downgrade(&ctx);
    let calls = Arc::new(AtomicUsize::new(0));

    let seen = Arc::clone(&calls);
    ctx.set_change_listener(move |_record| {
        if let Some(ctx) = weak.upgrade() {
            let seen = Arc::clone(&seen);
            ctx.set_change_listener(move |_record| {
                seen.fetch_add(1, Ordering::SeqCst);
            });
        }
    });

    ctx.select_theme("dark").unwrap();
    ctx.select_theme("light").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
