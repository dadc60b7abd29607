//! Hex color conversions for the two Therion color notations
//!
//! Layout directives like `color map-bg` take a percentage triplet
//! `[R G B]` with each channel in 0–100; embedded MetaPost code takes a
//! unit triplet `(r, g, b)` with each channel in 0.0–1.0. Both notations
//! are produced from `#RRGGBB` strings. Malformed input never fails — it
//! falls back to a fixed neutral value, since a half-typed color in the
//! caller's form must not break generation.

/// Fallback for the percentage notation (white)
pub const FALLBACK_PERCENT: &str = "[100 100 100]";

/// Fallback for the MetaPost unit notation (black)
pub const FALLBACK_UNIT: &str = "(0.0, 0.0, 0.0)";

/// Parse a strict `#RRGGBB` string into its channels
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let rest = hex.strip_prefix('#')?;
    // Length is in bytes; the ASCII check keeps the pair slices below from
    // landing inside a multibyte character
    if rest.len() != 6 || !rest.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&rest[0..2], 16).ok()?;
    let g = u8::from_str_radix(&rest[2..4], 16).ok()?;
    let b = u8::from_str_radix(&rest[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert `#RRGGBB` to the `[R G B]` percentage triplet
///
/// Channels are rounded half away from zero, e.g. `#4a3728` → `[29 22 16]`.
pub fn to_percent_triplet(hex: &str) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => format!(
            "[{} {} {}]",
            percent(r),
            percent(g),
            percent(b)
        ),
        None => FALLBACK_PERCENT.to_string(),
    }
}

/// Convert `#RRGGBB` to the `(r, g, b)` unit triplet with 3 decimals
pub fn to_unit_triplet(hex: &str) -> String {
    match parse_hex(hex) {
        Some((r, g, b)) => format!("({:.3}, {:.3}, {:.3})", unit(r), unit(g), unit(b)),
        None => FALLBACK_UNIT.to_string(),
    }
}

fn percent(channel: u8) -> u32 {
    (f64::from(channel) / 255.0 * 100.0).round() as u32
}

fn unit(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}
