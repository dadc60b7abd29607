//! Drawing-routine modules and their resolution into layout code blocks
//!
//! A module is a named snippet of `code metapost`/`code tex-map` text that
//! can be switched on per project. Built-in modules are a static table;
//! custom modules arrive through [`crate::settings::Settings`]. Resolution
//! keeps built-ins before customs, preserves each list's own order, and
//! silently skips enabled ids that match nothing — a stale id in a saved
//! settings file must not break generation.

use serde::Deserialize;

/// Where a module's code ends up in the layout document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    /// MetaPost drawing routines
    Drawing,
    /// TeX typesetting overrides
    Typesetting,
    Core,
}

/// A user-supplied module
///
/// The registry performs no validation; rejecting empty names or code before
/// insertion is the caller's responsibility.
#[derive(Debug, Clone, Deserialize)]
pub struct Module {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub code: String,
    #[serde(default = "default_category")]
    pub category: ModuleCategory,
    #[serde(default = "default_is_custom")]
    pub is_custom: bool,
}

fn default_category() -> ModuleCategory {
    ModuleCategory::Drawing
}

fn default_is_custom() -> bool {
    true
}

/// A built-in module; the table below is process-wide and read-only
#[derive(Debug, Clone, Copy)]
pub struct BuiltinModule {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub code: &'static str,
    pub category: ModuleCategory,
}

/// The built-in module table, in presentation order
pub const BUILTIN_MODULES: &[BuiltinModule] = &[
    BuiltinModule {
        id: "l_section_marker",
        name: "Značka rezu (Section)",
        description: "Štandardizovaná značka pre líniu rezu s písmenami.",
        category: ModuleCategory::Drawing,
        code: r"code metapost
def l_section (expr P) =
  T:=identity;
  pickup pencircle scaled 0.5bp;
  draw P withcolor (0.5, 0, 0.5);
  pair p_start, p_end;
  p_start := point 0 of P;
  p_end := point (length P) of P;
  draw (p_start + (5pt,0)) -- (p_start - (5pt,0)) rotated (angle(direction 0 of P)) shifted p_start withcolor (0.5, 0, 0.5);
  draw (p_end + (5pt,0)) -- (p_end - (5pt,0)) rotated (angle(direction (length P) of P)) shifted p_end withcolor (0.5, 0, 0.5);
enddef;
endcode",
    },
    BuiltinModule {
        id: "a_sand_wiki",
        name: "Piesok (Jemný vzor)",
        description: "Náhodne rozložené body pre realistické znázornenie piesku.",
        category: ModuleCategory::Drawing,
        code: r"code metapost
def a_sand (expr p) =
  T:=identity;
  pickup pencircle scaled 0.1bp;
  path q; q = bbox p;
  picture tmp_pic;
  tmp_pic := image(
    for i = xpart llcorner q step 0.15u until xpart urcorner q:
      for j = ypart llcorner q step 0.15u until ypart urcorner q:
        draw origin shifted ((i,j) randomized 0.12u) withpen pencircle scaled 0.1bp;
      endfor;
    endfor;
  );
  clip tmp_pic to p;
  draw tmp_pic withcolor (0.5, 0.4, 0.2);
enddef;
endcode",
    },
    BuiltinModule {
        id: "l_u_flowstone_wiki",
        name: "Sintrovaná stena",
        description: "Vykreslí \"zúbkovanú\" líniu pre sintrom pokryté steny.",
        category: ModuleCategory::Drawing,
        code: r"code metapost
def l_u_flowstone (expr P) =
  T:=identity;
  pickup pencircle scaled 0.5bp;
  path Q; Q := P;
  for i=0 step 0.2u until (arclength P):
    pair p_at, d_at;
    p_at := point (arctime i of P) of P;
    d_at := unitvector(direction (arctime i of P) of P) rotated 90;
    draw p_at -- (p_at + d_at * 0.15u) withcolor (0.7, 0.5, 0.2);
  endfor;
  draw P withcolor (0.7, 0.5, 0.2);
enddef;
endcode",
    },
];

/// Look up a built-in module by id
pub fn builtin(id: &str) -> Option<&'static BuiltinModule> {
    BUILTIN_MODULES.iter().find(|m| m.id == id)
}

/// Resolve the enabled subset of built-in and custom modules to code text
///
/// Code blocks are joined with one blank line; an empty resolution yields an
/// empty string. Ids in `enabled_ids` that match no module contribute
/// nothing. A duplicated id cannot duplicate a block because iteration runs
/// over the modules, not the ids.
pub fn resolve_enabled(customs: &[Module], enabled_ids: &[String]) -> String {
    let enabled = |id: &str| enabled_ids.iter().any(|e| e == id);

    let builtin_codes = BUILTIN_MODULES
        .iter()
        .filter(|m| enabled(m.id))
        .map(|m| m.code.to_string());
    let custom_codes = customs
        .iter()
        .filter(|m| enabled(&m.id))
        .map(|m| m.code.clone());

    builtin_codes
        .chain(custom_codes)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(id: &str, code: &str) -> Module {
        Module {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            code: code.to_string(),
            category: ModuleCategory::Drawing,
            is_custom: true,
        }
    }

    #[test]
    fn test_builtin_lookup() {
        assert!(builtin("l_section_marker").is_some());
        assert!(builtin("a_sand_wiki").is_some());
        assert!(builtin("nope").is_none());
    }

    #[test]
    fn test_resolve_empty() {
        assert_eq!(resolve_enabled(&[], &[]), "");
    }

    #[test]
    fn test_resolve_builtin_then_custom_order() {
        let customs = vec![custom("my_mod", "code metapost\n% mine\nendcode")];
        let enabled = vec!["my_mod".to_string(), "a_sand_wiki".to_string()];

        let resolved = resolve_enabled(&customs, &enabled);
        let sand = resolved.find("a_sand").expect("builtin present");
        let mine = resolved.find("% mine").expect("custom present");
        assert!(sand < mine, "built-ins come before customs");
    }

    #[test]
    fn test_resolve_ignores_unknown_ids() {
        let enabled = vec!["ghost".to_string(), "l_section_marker".to_string()];
        let resolved = resolve_enabled(&[], &enabled);
        assert!(resolved.contains("l_section"));
        assert!(!resolved.contains("ghost"));
    }

    #[test]
    fn test_resolve_duplicate_id_emits_once() {
        let enabled = vec!["a_sand_wiki".to_string(), "a_sand_wiki".to_string()];
        let resolved = resolve_enabled(&[], &enabled);
        assert_eq!(resolved.matches("def a_sand").count(), 1);
    }

    #[test]
    fn test_blank_line_separator() {
        let customs = vec![custom("a", "codeA"), custom("b", "codeB")];
        let enabled = vec!["a".to_string(), "b".to_string()];
        assert_eq!(resolve_enabled(&customs, &enabled), "codeA\n\ncodeB");
    }

    #[test]
    fn test_registry_does_not_validate_empty_code() {
        let customs = vec![custom("empty", "")];
        let enabled = vec!["empty".to_string()];
        // Non-emptiness is enforced by the caller before insertion
        assert_eq!(resolve_enabled(&customs, &enabled), "");
    }
}
