//! Compilation of symbol overrides into `symbol-*` directives

use crate::color;
use crate::settings::{Settings, SymbolOverride, DEFAULT_SYMBOL_SET};

/// Compile the per-symbol overrides into ordered directive lines
///
/// Overrides are processed in their stored order; within one override the
/// directive order is assign-set, set-color, hide. An override with no
/// color, the default set, and `visible = true` produces nothing. The
/// returned lines carry the layout-block indentation.
pub fn compile_symbol_directives(settings: &Settings) -> Vec<String> {
    let mut lines = Vec::new();

    for override_ in &settings.symbol_overrides {
        compile_override(settings, override_, &mut lines);
    }

    // Whole-group visibility toggles follow the per-symbol directives
    if settings.hide_passage_height {
        lines.push("  symbol-hide point passage-height".to_string());
    }
    if settings.hide_blocks {
        lines.push("  symbol-hide area blocks".to_string());
    }

    lines
}

fn compile_override(settings: &Settings, override_: &SymbolOverride, lines: &mut Vec<String>) {
    let category = override_.category.as_str();
    let symbol_type = &override_.symbol_type;

    let set = match override_.symbol_set.as_deref() {
        None | Some(DEFAULT_SYMBOL_SET) => settings.default_symbol_set.as_str(),
        Some(explicit) => explicit,
    };
    if !set.is_empty() && set != DEFAULT_SYMBOL_SET {
        lines.push(format!("  symbol-assign {category} {symbol_type} {set}"));
    }

    if let Some(hex) = &override_.color {
        lines.push(format!(
            "  symbol-color {category} {symbol_type} {}",
            color::to_percent_triplet(hex)
        ));
    }

    if !override_.visible {
        lines.push(format!("  symbol-hide {category} {symbol_type}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SymbolCategory;

    fn override_(symbol_type: &str, category: SymbolCategory) -> SymbolOverride {
        SymbolOverride {
            symbol_type: symbol_type.to_string(),
            category,
            visible: true,
            color: None,
            symbol_set: None,
        }
    }

    #[test]
    fn test_noop_override_emits_nothing() {
        let mut settings = Settings::default();
        settings.default_symbol_set = DEFAULT_SYMBOL_SET.to_string();
        settings
            .symbol_overrides
            .push(override_("station", SymbolCategory::Point));

        assert!(compile_symbol_directives(&settings).is_empty());
    }

    #[test]
    fn test_default_set_resolves_to_global() {
        let mut settings = Settings::default();
        settings.default_symbol_set = "UIS".to_string();
        let mut ov = override_("wall", SymbolCategory::Line);
        ov.symbol_set = Some(DEFAULT_SYMBOL_SET.to_string());
        settings.symbol_overrides.push(ov);

        let lines = compile_symbol_directives(&settings);
        assert_eq!(lines, vec!["  symbol-assign line wall UIS"]);
    }

    #[test]
    fn test_hidden_override_always_emits_hide() {
        let mut settings = Settings::default();
        settings.default_symbol_set = DEFAULT_SYMBOL_SET.to_string();
        let mut ov = override_("gradient", SymbolCategory::Line);
        ov.visible = false;
        settings.symbol_overrides.push(ov);

        let lines = compile_symbol_directives(&settings);
        assert_eq!(lines, vec!["  symbol-hide line gradient"]);
    }

    #[test]
    fn test_directive_order_within_one_override() {
        let mut settings = Settings::default();
        let mut ov = override_("water-flow", SymbolCategory::Line);
        ov.symbol_set = Some("SKBB".to_string());
        ov.color = Some("#0000ff".to_string());
        ov.visible = false;
        settings.symbol_overrides.push(ov);

        let lines = compile_symbol_directives(&settings);
        assert_eq!(
            lines,
            vec![
                "  symbol-assign line water-flow SKBB",
                "  symbol-color line water-flow [0 0 100]",
                "  symbol-hide line water-flow",
            ]
        );
    }

    #[test]
    fn test_override_order_is_preserved() {
        let mut settings = Settings::default();
        settings.default_symbol_set = DEFAULT_SYMBOL_SET.to_string();
        for name in ["b_first", "a_second"] {
            let mut ov = override_(name, SymbolCategory::Point);
            ov.visible = false;
            settings.symbol_overrides.push(ov);
        }

        let lines = compile_symbol_directives(&settings);
        assert_eq!(
            lines,
            vec![
                "  symbol-hide point b_first",
                "  symbol-hide point a_second",
            ]
        );
    }

    #[test]
    fn test_group_toggles_follow_overrides() {
        let mut settings = Settings::default();
        settings.default_symbol_set = DEFAULT_SYMBOL_SET.to_string();
        settings.hide_passage_height = true;
        settings.hide_blocks = true;
        let mut ov = override_("station", SymbolCategory::Point);
        ov.visible = false;
        settings.symbol_overrides.push(ov);

        let lines = compile_symbol_directives(&settings);
        assert_eq!(
            lines,
            vec![
                "  symbol-hide point station",
                "  symbol-hide point passage-height",
                "  symbol-hide area blocks",
            ]
        );
    }

    #[test]
    fn test_malformed_override_color_falls_back() {
        let mut settings = Settings::default();
        settings.default_symbol_set = DEFAULT_SYMBOL_SET.to_string();
        let mut ov = override_("debris", SymbolCategory::Area);
        ov.color = Some("not-a-color".to_string());
        settings.symbol_overrides.push(ov);

        let lines = compile_symbol_directives(&settings);
        assert_eq!(lines, vec!["  symbol-color area debris [100 100 100]"]);
    }

    #[test]
    fn test_multibyte_override_color_falls_back() {
        let mut settings = Settings::default();
        settings.default_symbol_set = DEFAULT_SYMBOL_SET.to_string();
        let mut ov = override_("debris", SymbolCategory::Area);
        // 6 bytes of color value but with a multibyte character inside
        ov.color = Some("#aaa\u{e9}a".to_string());
        settings.symbol_overrides.push(ov);

        let lines = compile_symbol_directives(&settings);
        assert_eq!(lines, vec!["  symbol-color area debris [100 100 100]"]);
    }
}
