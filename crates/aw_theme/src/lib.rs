//! aw theme engine
//!
//! Resolves named site themes and projects them onto CSS custom properties.
//!
//! # Overview
//!
//! - **Option registry**: closed enums for every enumerated theme dimension
//! - **Design tokens**: typography, spacing, radii, shadows, animation
//! - **Palettes**: ten fully specified color palettes
//! - **Records**: a typed [`ThemeData`] struct with one field per option
//! - **Registry**: an explicit store of named records, patched copy-on-write
//! - **Projection**: `--kebab-case` custom properties and modifier classes
//! - **Context**: the active theme with debounced local persistence
//! - **Editor**: typed control descriptors and a remote save endpoint
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use aw_theme::{ContextConfig, MemoryStorage, ThemeContext, ThemeRegistry};
//!
//! let context = ThemeContext::new(
//!     ThemeRegistry::builtin(),
//!     MemoryStorage::new(),
//!     ContextConfig::default(),
//! );
//!
//! context.select_theme("neonNoir")?;
//! let accent = context.property_value("--accent-pri");
//! ```
//!
//! # Persistence
//!
//! Theme changes are written to storage after a quiet period. Call
//! [`ThemeContext::tick`] from the host's event loop, or
//! [`ThemeContext::flush`] to write immediately. Dropping the context flushes.

pub mod color;
pub mod context;
pub mod defaults;
pub mod editor;
pub mod error;
pub mod options;
pub mod palettes;
pub mod persist;
pub mod presets;
pub mod projection;
pub mod record;
pub mod registry;
pub mod storage;
pub mod tokens;

#[cfg(feature = "remote")]
pub mod remote;

// Re-export commonly used types
pub use color::{Color, ColorParseError, CssColor};
pub use context::{ContextConfig, ThemeContext, CUSTOM_THEME};
pub use defaults::{baseline, get_default};
pub use editor::{
    control_for, controls_for, ControlDescriptor, ControlKind, ControlMap, SaveStatus,
    ThemeEditor, ThemeSaver,
};
pub use error::{SaveError, StorageError, ThemeError};
pub use options::*;
pub use palettes::{ColorPalette, ColorScheme};
pub use presets::{preset_record, ThemePreset};
pub use projection::{
    alignment_class, apply_design_tokens, apply_theme, css_variable_map, justify_class,
    resolve_json, theme_class_names, StyleMap, StyleSink,
};
pub use record::{
    FieldGroup, FieldValue, PersistedTheme, ThemeData, ThemeField, ThemePatch, ThemeRecord,
    ThemeValue,
};
pub use registry::ThemeRegistry;
pub use storage::{
    FileStorage, MemoryStorage, ThemeStorage, CURRENT_THEME_KEY, CUSTOM_THEME_KEY,
    LAST_FETCHED_KEY,
};
pub use tokens::DesignTokens;

#[cfg(feature = "remote")]
pub use remote::HttpThemeSaver;
