//! Color string parsing
//!
//! Accepted syntaxes (case-insensitive, surrounding whitespace ignored):
//!
//! - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb(r, g, b)` and `rgba(r, g, b, a)`; alpha may be separated by `,` or `/`
//!   and may be a percentage
//! - `hsl(h, s%, l%)` and `hsla(h, s%, l%, a)`; hue may carry a `deg` suffix
//! - CSS color keywords and `transparent`

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::{ColorError, Result};
use crate::named::named_color;
use crate::rgba::{hsl_to_rgb, Rgba};

struct Patterns {
    rgb: Regex,
    rgba: Regex,
    hsl: Regex,
    hsla: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        rgb: compile(r"^rgb\(\s*(\d{1,3})\s*,?\s*(\d{1,3})\s*,?\s*(\d{1,3})\s*\)$"),
        rgba: compile(
            r"^rgba?\(\s*(\d{1,3})\s*,?\s*(\d{1,3})\s*,?\s*(\d{1,3})\s*[,/]\s*([-+]?\d*\.?\d+%?)\s*\)$",
        ),
        hsl: compile(
            r"^hsl\(\s*(\d{0,3}\.?[0-9]+(?:deg)?)\s*,?\s*(\d{1,3}\.?[0-9]?)%\s*,?\s*(\d{1,3}\.?[0-9]?)%\s*\)$",
        ),
        hsla: compile(
            r"^hsla?\(\s*(\d{0,3}\.?[0-9]+(?:deg)?)\s*,?\s*(\d{1,3}\.?[0-9]?)%\s*,?\s*(\d{1,3}\.?[0-9]?)%\s*[,/]\s*([-+]?\d*\.?\d+%?)\s*\)$",
        ),
    })
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid color pattern")
}

/// Parse a color string into [`Rgba`]
pub fn parse(input: &str) -> Result<Rgba> {
    let invalid = || ColorError::InvalidColorFormat(input.to_string());

    let lowered = input.trim().to_ascii_lowercase();
    if lowered == "transparent" {
        return Ok(Rgba::TRANSPARENT);
    }

    let normalized = match named_color(&lowered) {
        Some(hex) => format!("#{hex}"),
        None => lowered,
    };

    if let Some(digits) = normalized.strip_prefix('#') {
        return parse_hex_digits(digits).ok_or_else(invalid);
    }

    let patterns = patterns();

    if let Some(caps) = patterns.rgb.captures(&normalized) {
        let [r, g, b] = rgb_channels(&caps).ok_or_else(invalid)?;
        return Ok(Rgba::rgb(r, g, b));
    }

    if let Some(caps) = patterns.rgba.captures(&normalized) {
        let [r, g, b] = rgb_channels(&caps).ok_or_else(invalid)?;
        let alpha = parse_alpha(&caps[4]).ok_or_else(invalid)?;
        return Ok(Rgba::new(r, g, b, alpha));
    }

    if let Some(caps) = patterns.hsl.captures(&normalized) {
        return Ok(hsl_from_captures(&caps).into());
    }

    if let Some(caps) = patterns.hsla.captures(&normalized) {
        let alpha = parse_alpha(&caps[4]).ok_or_else(invalid)?;
        return Ok(Rgba::from(hsl_from_captures(&caps)).with_alpha(alpha));
    }

    Err(invalid())
}

fn parse_hex_digits(digits: &str) -> Option<Rgba> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let pair = |s: &str| u8::from_str_radix(s, 16).ok();
    let nibble = |i: usize| pair(digits[i..=i].repeat(2).as_str());

    match digits.len() {
        3 => Some(Rgba::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Rgba::new(
            nibble(0)?,
            nibble(1)?,
            nibble(2)?,
            byte_to_alpha(nibble(3)?),
        )),
        6 => Some(Rgba::rgb(
            pair(&digits[0..2])?,
            pair(&digits[2..4])?,
            pair(&digits[4..6])?,
        )),
        8 => Some(Rgba::new(
            pair(&digits[0..2])?,
            pair(&digits[2..4])?,
            pair(&digits[4..6])?,
            byte_to_alpha(pair(&digits[6..8])?),
        )),
        _ => None,
    }
}

/// Hex alpha bytes are kept to two decimals
fn byte_to_alpha(byte: u8) -> f64 {
    (byte as f64 / 255.0 * 100.0).round() / 100.0
}

fn rgb_channels(caps: &Captures<'_>) -> Option<[u8; 3]> {
    Some([
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    ])
}

/// Values above 1 are read as percentages
fn parse_alpha(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim_end_matches('%').parse().ok()?;
    let alpha = if value > 1.0 { value / 100.0 } else { value };
    Some(alpha.clamp(0.0, 1.0))
}

fn hsl_from_captures(caps: &Captures<'_>) -> crate::rgba::Rgb {
    let hue = leading_integer(&caps[1]);
    let saturation = leading_integer(&caps[2]) / 100.0;
    let lightness = leading_integer(&caps[3]) / 100.0;
    hsl_to_rgb(hue, saturation, lightness)
}

/// Integer prefix of a numeric component; fractional digits are dropped
fn leading_integer(raw: &str) -> f64 {
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse().unwrap_or(0.0)
}
