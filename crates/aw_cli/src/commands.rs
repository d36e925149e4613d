//! Subcommand implementations

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use aw_theme::{
    apply_design_tokens, apply_theme, controls_for, theme_class_names, DesignTokens, FileStorage,
    HttpThemeSaver, PersistedTheme, StyleMap, ThemeContext, ThemeEditor, ThemeRecord,
    ThemeRegistry,
};

use crate::config::{AwConfig, CONFIG_FILE};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown theme `{0}`; run `awtheme list` to see registered themes")]
    UnknownTheme(String),

    #[error("expected `field=value`, got `{0}`")]
    BadAssignment(String),

    #[error("no remote endpoint; pass --endpoint or set [remote] endpoint in awtheme.toml")]
    NoEndpoint,
}

fn open_context(config: &AwConfig) -> ThemeContext {
    ThemeContext::new(
        ThemeRegistry::builtin(),
        FileStorage::new(&config.storage.dir),
        config.context_config(),
    )
}

fn lookup(ctx: &ThemeContext, key: &str) -> Result<Arc<ThemeRecord>> {
    ctx.registry()
        .get(key)
        .ok_or_else(|| CliError::UnknownTheme(key.to_string()).into())
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to encode JSON")?
    );
    Ok(())
}

/// Split `field=value`; the value is JSON when it parses, a string otherwise.
pub fn parse_assignment(raw: &str) -> Result<(String, serde_json::Value), CliError> {
    let (field, value) = raw
        .split_once('=')
        .filter(|(field, _)| !field.trim().is_empty())
        .ok_or_else(|| CliError::BadAssignment(raw.to_string()))?;
    let value = serde_json::from_str(value.trim())
        .unwrap_or_else(|_| serde_json::Value::String(value.trim().to_string()));
    Ok((field.trim().to_string(), value))
}

pub fn list(config: &AwConfig) -> Result<()> {
    let ctx = open_context(config);
    let active = ctx.current_theme().key.clone();
    for record in ctx.registry().iter() {
        let marker = if record.key == active { "*" } else { " " };
        println!(
            "{} {:<16} {:<18} {:?}",
            marker,
            record.key,
            record.name,
            record.scheme()
        );
    }
    Ok(())
}

pub fn show(config: &AwConfig, key: &str) -> Result<()> {
    let ctx = open_context(config);
    let record = lookup(&ctx, key)?;
    print_json(&PersistedTheme::from(record.as_ref()))
}

pub fn css(config: &AwConfig, key: &str, selector: &str, tokens: bool) -> Result<()> {
    let ctx = open_context(config);
    let record = lookup(&ctx, key)?;

    let mut style = StyleMap::new();
    if tokens {
        apply_design_tokens(&DesignTokens::default(), &mut style);
    }
    apply_theme(&record.data, &mut style);
    print!("{}", style.to_css_block(selector));
    Ok(())
}

pub fn classes(config: &AwConfig, key: &str) -> Result<()> {
    let ctx = open_context(config);
    let record = lookup(&ctx, key)?;
    println!("{}", theme_class_names(&record.data).join(" "));
    Ok(())
}

pub fn controls(config: &AwConfig, key: &str) -> Result<()> {
    let ctx = open_context(config);
    let record = lookup(&ctx, key)?;
    print_json(&controls_for(&record.data))
}

pub fn current(config: &AwConfig) -> Result<()> {
    let ctx = open_context(config);
    let record = ctx.current_theme();
    println!("{} ({})", record.key, record.name);
    if let Some(fetched) = ctx.last_fetched() {
        tracing::debug!("last remote fetch at {:?}", fetched);
    }
    Ok(())
}

pub fn use_theme(config: &AwConfig, key: &str) -> Result<()> {
    let ctx = open_context(config);
    if !ctx.registry().contains(key) {
        return Err(CliError::UnknownTheme(key.to_string()).into());
    }
    let record = ctx.select_theme(key)?;
    ctx.flush()
        .with_context(|| format!("Failed to persist theme to {}", config.storage.dir.display()))?;
    info!("Active theme is now `{}`", record.key);
    Ok(())
}

pub fn set(config: &AwConfig, assignments: &[String], custom: bool) -> Result<()> {
    let ctx = Arc::new(open_context(config));
    let editor = ThemeEditor::new(Arc::clone(&ctx));

    for raw in assignments {
        let (field, value) = parse_assignment(raw)?;
        editor
            .apply_change(&field, &value)
            .with_context(|| format!("Failed to apply `{raw}`"))?;
    }
    if custom {
        ctx.save_custom().context("Failed to store custom theme")?;
    }
    ctx.flush()
        .with_context(|| format!("Failed to persist theme to {}", config.storage.dir.display()))?;

    info!(
        "Updated {} field(s) on `{}`",
        assignments.len(),
        ctx.current_theme().key
    );
    Ok(())
}

pub async fn save(config: &AwConfig, endpoint: Option<String>) -> Result<()> {
    let endpoint = endpoint
        .or_else(|| config.remote.endpoint.clone())
        .ok_or(CliError::NoEndpoint)?;

    let ctx = Arc::new(open_context(config));
    let editor = ThemeEditor::new(ctx);
    let saver = HttpThemeSaver::new(&endpoint);

    info!("Saving theme to {}", saver.endpoint());
    editor
        .save(&saver)
        .await
        .with_context(|| format!("Theme save to {} failed", saver.endpoint()))?;
    info!("Theme saved");
    Ok(())
}

pub fn init(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    let content = AwConfig::default().to_toml()?;
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn assignments_parse_json_or_fall_back_to_strings() {
        assert_eq!(
            parse_assignment("gridColumns=4").unwrap(),
            ("gridColumns".to_string(), json!(4))
        );
        assert_eq!(
            parse_assignment("accentPri=#ff0000").unwrap(),
            ("accentPri".to_string(), json!("#ff0000"))
        );
        assert_eq!(
            parse_assignment("soundEnabled = true").unwrap(),
            ("soundEnabled".to_string(), json!(true))
        );
        assert!(parse_assignment("gridColumns").is_err());
        assert!(parse_assignment("=4").is_err());
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        init(dir.path(), false).unwrap();
        assert!(dir.path().join(CONFIG_FILE).exists());
        assert!(init(dir.path(), false).is_err());
        init(dir.path(), true).unwrap();
    }

    #[test]
    fn set_and_use_persist_through_storage() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AwConfig::default();
        config.storage.dir = dir.path().to_path_buf();

        use_theme(&config, "ocean").unwrap();
        set(&config, &["gridColumns=2".to_string()], true).unwrap();

        let ctx = open_context(&config);
        assert_eq!(ctx.current_theme().key, "ocean");
        assert_eq!(ctx.current_theme().data.grid_columns, 2.0);
        assert!(ctx.registry().contains(aw_theme::CUSTOM_THEME));
        assert!(use_theme(&config, "solarized").is_err());
    }
}
