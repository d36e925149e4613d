use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use aw_theme::{
    controls_for, ContextConfig, ControlKind, CssColor, HeroBackground, MemoryStorage, SaveError,
    SaveStatus, ThemeContext, ThemeData, ThemeEditor, ThemeError, ThemeField, ThemeRecord,
    ThemeRegistry, ThemeSaver, ThemeValue,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::sync::oneshot;

fn editor() -> ThemeEditor {
    let ctx = ThemeContext::new(
        ThemeRegistry::builtin(),
        MemoryStorage::new(),
        ContextConfig::default(),
    );
    ThemeEditor::new(Arc::new(ctx))
}

#[derive(Default)]
struct RecordingSaver {
    saved: Mutex<Vec<String>>,
}

#[async_trait]
impl ThemeSaver for RecordingSaver {
    async fn save(&self, record: &ThemeRecord) -> Result<(), SaveError> {
        self.saved.lock().unwrap().push(record.key.clone());
        Ok(())
    }
}

/// Holds the save open until the test releases it.
struct GatedSaver {
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

#[async_trait]
impl ThemeSaver for GatedSaver {
    async fn save(&self, _record: &ThemeRecord) -> Result<(), SaveError> {
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok(())
    }
}

struct RejectingSaver;

#[async_trait]
impl ThemeSaver for RejectingSaver {
    async fn save(&self, _record: &ThemeRecord) -> Result<(), SaveError> {
        Err(SaveError::Rejected {
            status: 403,
            message: "not allowed".into(),
        })
    }
}

#[test]
fn hex_field_is_a_color_control() {
    let mut data = ThemeData::default();
    data.accent_pri = CssColor::new("#3366ff");
    let controls = controls_for(&data);

    let accent = &controls["accentPri"];
    assert_eq!(accent.kind, ControlKind::Color);
    assert_eq!(accent.value, ThemeValue::Color(CssColor::new("#3366ff")));
    assert_eq!(accent.label, "Accent Pri");
}

#[test]
fn enum_field_is_a_select_with_legal_values() {
    let data = ThemeData::default();
    assert_eq!(data.hero_background, HeroBackground::Solid);

    let controls = controls_for(&data);
    let hero = &controls["heroBackground"];
    assert_eq!(
        hero.kind,
        ControlKind::Select {
            options: HeroBackground::VALUES
        }
    );
    assert_eq!(hero.value, ThemeValue::Choice("solid"));
}

#[test]
fn non_hex_color_fields_stay_editable() {
    let mut data = ThemeData::default();
    data.selection_bg = CssColor::new("rgba(0,0,0,0.2)");
    data.gradient_end = CssColor::new("");

    let controls = controls_for(&data);
    assert_eq!(controls["selectionBg"].kind, ControlKind::Color);
    assert_eq!(controls["gradientEnd"].kind, ControlKind::Color);
}

#[test]
fn every_field_gets_a_control_in_declaration_order() {
    let controls = controls_for(&ThemeData::default());
    let keys: Vec<&str> = controls.keys().copied().collect();
    let expected: Vec<&str> = ThemeField::ALL.iter().map(|f| f.key()).collect();
    assert_eq!(keys, expected);
    assert!(matches!(
        controls["lineHeight"].kind,
        ControlKind::Number { min, max, .. } if min == 1.0 && max == 2.5
    ));
    assert_eq!(controls["soundEnabled"].kind, ControlKind::Boolean);
    assert_eq!(controls["heroHeight"].kind, ControlKind::Text);
}

#[test]
fn apply_change_patches_the_context() {
    let editor = editor();
    editor
        .apply_change("heroBackground", &json!("cssgradient"))
        .unwrap();
    editor.apply_change("gridColumns", &json!(4)).unwrap();

    let ctx = editor.context();
    assert_eq!(ctx.current_theme().data.hero_background, HeroBackground::CssGradient);
    assert_eq!(ctx.property_value("--hero-background").as_deref(), Some("cssgradient"));
    assert_eq!(ctx.property_value("--grid-columns").as_deref(), Some("4"));
    assert!(ctx.has_pending_write());
    assert_eq!(
        editor.controls()["heroBackground"].value,
        ThemeValue::Choice("cssgradient")
    );
}

#[test]
fn apply_change_rejects_unknown_and_illegal_values() {
    let editor = editor();
    assert!(matches!(
        editor.apply_change("accentPrimary", &json!("#fff")),
        Err(ThemeError::UnknownField(_))
    ));
    assert!(matches!(
        editor.apply_change("heroBackground", &json!("lava")),
        Err(ThemeError::InvalidValue { .. })
    ));
    assert!(matches!(
        editor.apply_change("gridColumns", &json!(40)),
        Err(ThemeError::InvalidValue { .. })
    ));
    assert!(!editor.context().has_pending_write());
}

#[test]
fn reset_returns_to_the_opening_snapshot() {
    let editor = editor();
    let opened = editor.context().current_theme().data.clone();

    editor.apply_change("textColor", &json!("#111111")).unwrap();
    editor
        .set_value(ThemeField::SoundEnabled, ThemeValue::Bool(true))
        .unwrap();
    assert_ne!(editor.context().current_theme().data, opened);

    editor.reset().unwrap();
    assert_eq!(editor.context().current_theme().data, opened);
}

#[tokio::test]
async fn save_sends_the_active_theme() {
    let editor = editor();
    let saver = RecordingSaver::default();

    editor.save(&saver).await.unwrap();

    assert_eq!(*saver.saved.lock().unwrap(), vec!["light".to_string()]);
    assert_eq!(editor.status(), SaveStatus::Saved);
    assert!(!editor.is_saving());
    assert_eq!(editor.save_error(), None);
}

#[tokio::test]
async fn failed_save_surfaces_message_and_keeps_local_state() {
    let editor = editor();
    editor.apply_change("textColor", &json!("#111111")).unwrap();

    let err = editor.save(&RejectingSaver).await.unwrap_err();
    assert!(matches!(err, SaveError::Rejected { status: 403, .. }));
    assert_eq!(editor.save_error().as_deref(), Some("not allowed"));
    assert_eq!(
        editor.context().current_theme().data.text_color.as_str(),
        "#111111"
    );
}

#[tokio::test]
async fn status_reads_saving_while_the_request_is_pending() {
    let editor = editor();
    let (release, gate) = oneshot::channel();
    let saver = GatedSaver {
        gate: Mutex::new(Some(gate)),
    };
    assert_eq!(editor.status(), SaveStatus::Idle);

    let observer = &editor;
    let observe = async move {
        assert!(observer.is_saving());
        assert_eq!(observer.status(), SaveStatus::Saving);
        release.send(()).unwrap();
    };
    let (result, ()) = tokio::join!(editor.save(&saver), observe);

    result.unwrap();
    assert!(!editor.is_saving());
    assert_eq!(editor.status(), SaveStatus::Saved);
}
