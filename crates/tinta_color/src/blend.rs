//! Weighted mixing and channel-wise blend operators

use crate::rgba::Rgba;

/// Alpha-aware weighted average of two colors
///
/// `weight` is the share of `color`; `0.0` returns `other` untouched. When
/// either side equals [`Rgba::TRANSPARENT`] the other side is returned as-is.
/// The check is by value, so `#00000000` and `rgba(0,0,0,0)` short-circuit
/// the same as the `transparent` keyword; other zero-alpha colors are mixed.
/// Channels are floored after weighting. The channel weights include an
/// alpha-delta correction so that a more opaque input pulls harder; alpha is a
/// plain linear interpolation of the two input alphas.
pub fn mix(weight: f64, color: Rgba, other: Rgba) -> Rgba {
    if color == Rgba::TRANSPARENT {
        return other;
    }
    if other == Rgba::TRANSPARENT {
        return color;
    }
    if weight == 0.0 {
        return other;
    }

    let alpha_delta = color.a - other.a;
    let x = weight * 2.0 - 1.0;
    let y = if x * alpha_delta == -1.0 {
        x
    } else {
        x + alpha_delta
    };
    let z = 1.0 + x * alpha_delta;
    // z only vanishes for weight 1 with a fully transparent `color` over an
    // opaque `other`; the weight then belongs entirely to `color`.
    let weight1 = if z == 0.0 { 1.0 } else { (y / z + 1.0) / 2.0 };
    let weight2 = 1.0 - weight1;

    let channel = |a: u8, b: u8| -> u8 {
        (a as f64 * weight1 + b as f64 * weight2)
            .floor()
            .clamp(0.0, 255.0) as u8
    };

    Rgba::new(
        channel(color.r, other.r),
        channel(color.g, other.g),
        channel(color.b, other.b),
        other.a + (color.a - other.a) * weight,
    )
}

/// Channel-wise blend operator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Darkens: `bg * fg`
    #[default]
    Multiply,
    /// Lightens: `bg + fg - bg * fg`
    Screen,
}

impl BlendMode {
    /// Screen over dark backgrounds, multiply over light ones
    pub fn for_scheme(dark: bool) -> Self {
        if dark {
            BlendMode::Screen
        } else {
            BlendMode::Multiply
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            BlendMode::Multiply => BlendMode::Screen,
            BlendMode::Screen => BlendMode::Multiply,
        }
    }

    /// Blend `fg` onto `bg`; the result is always opaque
    pub fn apply(self, bg: Rgba, fg: Rgba) -> Rgba {
        match self {
            BlendMode::Multiply => blend_multiply(bg, fg),
            BlendMode::Screen => blend_screen(bg, fg),
        }
    }
}

/// Per-channel `bg * fg`
pub fn blend_multiply(bg: Rgba, fg: Rgba) -> Rgba {
    blend_channels(bg, fg, |b, s| b * s)
}

/// Per-channel `bg + fg - bg * fg`
pub fn blend_screen(bg: Rgba, fg: Rgba) -> Rgba {
    blend_channels(bg, fg, |b, s| b + s - b * s)
}

fn blend_channels(bg: Rgba, fg: Rgba, op: impl Fn(f64, f64) -> f64) -> Rgba {
    let channel = |b: u8, s: u8| -> u8 {
        (op(b as f64 / 255.0, s as f64 / 255.0).clamp(0.0, 1.0) * 255.0).round() as u8
    };
    Rgba::rgb(
        channel(bg.r, fg.r),
        channel(bg.g, fg.g),
        channel(bg.b, fg.b),
    )
}

/// Format `color` with `alpha` as `rgba(r,g,b,a)`
///
/// Opaque alphas degrade to the (possibly shortened) hex form.
pub fn to_rgba_string(color: Rgba, alpha: f64) -> String {
    if alpha >= 1.0 {
        color.to_hex()
    } else {
        format!("rgba({},{},{},{})", color.r, color.g, color.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Rgba = Rgba::from_hex(0x2276fc);

    #[test]
    fn mix_endpoints() {
        assert_eq!(mix(0.0, BLUE, Rgba::WHITE), Rgba::WHITE);
        assert_eq!(mix(1.0, BLUE, Rgba::WHITE), BLUE);
    }

    #[test]
    fn mix_floors_channels() {
        // 0x22 * 0.1 + 255 * 0.9 = 232.9
        let tint = mix(0.1, BLUE, Rgba::WHITE);
        assert_eq!(tint, Rgba::rgb(232, 241, 254));
        assert!(tint.is_opaque());
    }

    #[test]
    fn mix_skips_every_spelling_of_transparent() {
        for raw in ["transparent", "#00000000", "#0000", "rgba(0, 0, 0, 0)"] {
            let clear = Rgba::parse(raw).unwrap();
            assert_eq!(mix(0.3, clear, BLUE), BLUE, "{raw}");
            assert_eq!(mix(0.3, BLUE, clear), BLUE, "{raw}");
        }

        // Zero alpha on a non-black color still mixes
        let clear_white = Rgba::new(255, 255, 255, 0.0);
        assert_eq!(mix(0.5, clear_white, BLUE), BLUE.with_alpha(0.5));
    }

    #[test]
    fn mix_half_alpha_pulls_toward_opaque_side() {
        let half = Rgba::new(255, 0, 0, 0.5);
        let mixed = mix(0.5, half, Rgba::BLACK);
        // x = 0, alpha delta = -0.5: weight1 = 0.25
        assert_eq!(mixed, Rgba::new(63, 0, 0, 0.75));
    }

    #[test]
    fn mix_transparent_short_circuits() {
        assert_eq!(mix(0.3, Rgba::TRANSPARENT, BLUE), BLUE);
        assert_eq!(mix(0.3, BLUE, Rgba::TRANSPARENT), BLUE);
    }

    #[test]
    fn mix_never_produces_nan_channels() {
        let clear_red = Rgba::new(255, 0, 0, 0.0);
        let mixed = mix(1.0, clear_red, Rgba::WHITE);
        assert_eq!(mixed, Rgba::new(255, 0, 0, 0.0));
    }

    #[test]
    fn blend_operators() {
        let gray = Rgba::rgb(128, 128, 128);
        assert_eq!(blend_multiply(Rgba::WHITE, gray), gray);
        assert_eq!(blend_multiply(gray, gray), Rgba::rgb(64, 64, 64));
        assert_eq!(blend_screen(Rgba::BLACK, gray), gray);
        assert_eq!(blend_screen(gray, gray), Rgba::rgb(192, 192, 192));
    }

    #[test]
    fn blend_mode_follows_scheme() {
        assert_eq!(BlendMode::for_scheme(false), BlendMode::Multiply);
        assert_eq!(BlendMode::for_scheme(true), BlendMode::Screen);
        assert_eq!(BlendMode::Screen.inverse(), BlendMode::Multiply);
        assert_eq!(
            BlendMode::Screen.apply(Rgba::BLACK, BLUE),
            blend_screen(Rgba::BLACK, BLUE)
        );
    }

    #[test]
    fn rgba_string_degrades_when_opaque() {
        assert_eq!(to_rgba_string(BLUE, 0.4), "rgba(34,118,252,0.4)");
        assert_eq!(to_rgba_string(BLUE, 1.0), "#2276fc");
        assert_eq!(to_rgba_string(Rgba::WHITE, 1.5), "#fff");
    }
}
