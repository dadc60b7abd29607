//! The settings model driving document generation
//!
//! A [`Settings`] value is the single input to both generators. It is owned
//! by the caller (UI, CLI, tests), passed by reference into the generator
//! functions, and never mutated by them. Settings can be deserialized from a
//! TOML file where every field is optional and falls back to its default.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Sentinel symbol-set value meaning "no explicit set chosen"
pub const DEFAULT_SYMBOL_SET: &str = "DEFAULT";

/// Built-in symbol set used when the configured default is the sentinel
pub const FALLBACK_SYMBOL_SET: &str = "AUT";

/// Export tasks the generated thconfig can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
    Map,
    Model,
    Atlas,
}

/// Paper sizes with a page-setup preset in the layout document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PaperSize {
    A4,
    A3,
    A2,
    A1,
    A0,
}

impl PaperSize {
    /// Name of the page layout block referencing this size, e.g. `A4_Layout`
    pub fn layout_name(&self) -> String {
        format!("{:?}_Layout", self)
    }
}

/// Stroke style for the survey centreline drawing routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyStyle {
    Solid,
    Dashed,
    Dotted,
}

/// Symbol categories recognized by the symbol-* directives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolCategory {
    Point,
    Line,
    Area,
}

impl SymbolCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolCategory::Point => "point",
            SymbolCategory::Line => "line",
            SymbolCategory::Area => "area",
        }
    }
}

/// Kind of an uploaded survey file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Survey data (.th) — referenced by `source` lines in the thconfig
    Source,
    /// Scrap drawings (.th2)
    Drawing,
    /// An existing thconfig
    Config,
    /// Plain text notes
    Text,
    Other,
}

/// Metadata for a file the caller has attached to the project
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedFile {
    /// Stable identity; assigned by the caller, opaque to the generators
    pub id: String,
    pub file_name: String,
    pub kind: FileKind,
    #[serde(default)]
    pub content: Option<String>,
}

/// A per-symbol-type customization of visibility, color, or set assignment
///
/// `symbol_type` is the unique key; the sequence order in [`Settings`] is the
/// order directives are emitted in.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolOverride {
    pub symbol_type: String,
    pub category: SymbolCategory,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub symbol_set: Option<String>,
}

fn default_true() -> bool {
    true
}

/// All parameters for one generated layout/thconfig pair
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub cave_name: String,
    pub select_name: String,
    pub author: String,
    pub scale: u32,
    pub language: String,
    pub export_types: Vec<ExportType>,
    /// Id of the applied color theme, or "custom"
    pub color_scheme: String,
    pub map_bg_color: String,
    pub map_fg_color: String,
    /// Forces a neutral background regardless of `map_bg_color`
    pub print_mode: bool,
    pub paper_size: PaperSize,

    // Header & legend
    pub show_legend: bool,
    pub legend_width: f64,
    pub legend_columns: u32,
    pub header_x: f64,
    pub header_y: f64,
    pub header_anchor: String,
    pub header_bg: bool,
    pub default_symbol_set: String,

    // Logo
    pub logo_path: String,
    pub logo_width: f64,

    // TeX legend content
    pub topo_team: String,
    pub carto_team: String,
    pub explo_team: String,
    pub explo_title: String,
    pub comment: String,
    pub cave_name_font_size: u32,
    pub hide_length: bool,
    pub hide_depth: bool,
    pub show_border: bool,
    pub border_thickness: f64,

    // Survey centreline
    pub show_survey: bool,
    pub survey_color: String,
    pub survey_style: SurveyStyle,
    pub debug_station_names: bool,
    pub station_label_size: u32,

    // Presentation
    pub rotation: f64,
    pub transparency: bool,
    pub overlap: f64,
    pub scale_bar_length: u32,

    // Grid
    pub show_grid: bool,
    pub grid_size: f64,

    pub hide_passage_height: bool,
    pub hide_blocks: bool,

    pub uploaded_files: Vec<UploadedFile>,
    /// Module ids to include; unknown ids are silently ignored
    pub enabled_modules: Vec<String>,
    pub custom_modules: Vec<crate::modules::Module>,
    pub symbol_overrides: Vec<SymbolOverride>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cave_name: String::new(),
            select_name: String::new(),
            author: String::new(),
            scale: 100,
            language: "sk".to_string(),
            export_types: vec![ExportType::Map],
            color_scheme: "custom".to_string(),
            map_bg_color: "#f5f2e8".to_string(),
            map_fg_color: "#e8e2d0".to_string(),
            print_mode: false,
            paper_size: PaperSize::A4,
            show_legend: true,
            legend_width: 60.0,
            legend_columns: 3,
            header_x: 5.0,
            header_y: 5.0,
            header_anchor: "nw".to_string(),
            header_bg: true,
            default_symbol_set: FALLBACK_SYMBOL_SET.to_string(),
            logo_path: String::new(),
            logo_width: 4.0,
            topo_team: String::new(),
            carto_team: String::new(),
            explo_team: String::new(),
            explo_title: "Prieskum".to_string(),
            comment: String::new(),
            cave_name_font_size: 30,
            hide_length: false,
            hide_depth: false,
            show_border: true,
            border_thickness: 0.5,
            show_survey: true,
            survey_color: "#4a3728".to_string(),
            survey_style: SurveyStyle::Solid,
            debug_station_names: false,
            station_label_size: 8,
            rotation: 0.0,
            transparency: true,
            overlap: 5.0,
            scale_bar_length: 20,
            show_grid: false,
            grid_size: 10.0,
            hide_passage_height: false,
            hide_blocks: false,
            uploaded_files: vec![],
            enabled_modules: vec![],
            custom_modules: vec![],
            symbol_overrides: vec![],
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load settings from a TOML string
    ///
    /// Missing fields take their defaults, so a partial file like
    /// `cave_name = "Demänovská"` is valid.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// The default symbol set with the sentinel resolved to the built-in set
    pub fn resolved_symbol_set(&self) -> &str {
        if self.default_symbol_set == DEFAULT_SYMBOL_SET {
            FALLBACK_SYMBOL_SET
        } else {
            &self.default_symbol_set
        }
    }

    /// Uploaded files that contribute `source` lines to the thconfig
    pub fn source_files(&self) -> impl Iterator<Item = &UploadedFile> {
        self.uploaded_files
            .iter()
            .filter(|f| f.kind == FileKind::Source)
    }
}
