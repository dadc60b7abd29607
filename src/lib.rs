//! thgen - Therion layout and thconfig generation
//!
//! This library compiles a [`Settings`] value into the two text documents a
//! Therion cave-survey project is driven by: a layout definition and a
//! project configuration (thconfig).
//!
//! # Example
//!
//! ```rust
//! use thgen::{generate, Settings};
//!
//! let docs = generate(&Settings::default(), "layout.thl");
//! assert!(docs.layout.starts_with("encoding utf-8"));
//! assert!(docs.config.contains("input layout.thl"));
//! ```

pub mod color;
pub mod generator;
pub mod modules;
pub mod settings;
pub mod themes;

pub use generator::{
    generate, generate_config, generate_layout, Documents, DEFAULT_CONFIG_FILE,
    DEFAULT_LAYOUT_FILE, LAYOUT_BLOCK_NAME,
};
pub use settings::{
    ExportType, FileKind, PaperSize, Settings, SettingsError, SurveyStyle, SymbolCategory,
    SymbolOverride, UploadedFile,
};
pub use themes::Theme;
