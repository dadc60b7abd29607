//! Generators for the two Therion text artifacts
//!
//! Both entry points are pure functions of a [`Settings`](crate::settings::Settings)
//! snapshot: no I/O, no shared state, byte-identical output for identical
//! input. The caller decides what to do with the returned text (write it,
//! show it, copy it).

mod config;
mod layout;
mod symbols;

pub use config::generate_config;
pub use layout::generate_layout;
pub use symbols::compile_symbol_directives;

use crate::settings::Settings;

/// Name of the main layout block; the thconfig references it by this name
pub const LAYOUT_BLOCK_NAME: &str = "custom_layout";

/// Default file name for the written layout document
pub const DEFAULT_LAYOUT_FILE: &str = "layout.thl";

/// Default file name for the written project configuration
pub const DEFAULT_CONFIG_FILE: &str = "thconfig";

/// Both generated documents for one settings snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documents {
    pub layout: String,
    pub config: String,
}

/// Generate the layout and thconfig documents together
///
/// `layout_file_name` is the name the layout document will be saved under;
/// it appears verbatim in the thconfig's `input` line.
pub fn generate(settings: &Settings, layout_file_name: &str) -> Documents {
    Documents {
        layout: generate_layout(settings),
        config: generate_config(settings, layout_file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let settings = Settings::default();
        let first = generate(&settings, DEFAULT_LAYOUT_FILE);
        let second = generate(&settings, DEFAULT_LAYOUT_FILE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_config_references_layout_file() {
        let docs = generate(&Settings::default(), "mylayout.thl");
        assert!(docs.config.contains("input mylayout.thl"));
    }
}
