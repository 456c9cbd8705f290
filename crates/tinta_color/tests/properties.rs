//! Property tests for the color primitives

use proptest::prelude::*;
use tinta_color::{
    blend_multiply, blend_screen, hex_to_rgb, mix, rgb_to_hex, Rgb, Rgba,
};

fn opaque() -> impl Strategy<Value = Rgba> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Rgba::rgb(r, g, b))
}

fn translucent() -> impl Strategy<Value = Rgba> {
    (any::<(u8, u8, u8)>(), 0.05f64..1.0).prop_map(|((r, g, b), a)| Rgba::new(r, g, b, a))
}

proptest! {
    #[test]
    fn hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let rgb = Rgb::new(r, g, b);
        prop_assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)).unwrap(), rgb);
    }

    #[test]
    fn parse_round_trips_css_rendering(color in opaque()) {
        prop_assert_eq!(Rgba::parse(&color.to_css()).unwrap(), color);
        prop_assert_eq!(Rgba::parse(&color.to_hex()).unwrap(), color);
    }

    #[test]
    fn mix_identities(a in opaque(), b in opaque()) {
        prop_assert_eq!(mix(0.0, a, b), b);
        prop_assert_eq!(mix(1.0, a, b), a);
    }

    #[test]
    fn mix_of_opaque_colors_stays_between_inputs(
        a in opaque(),
        b in opaque(),
        weight in 0.0f64..=1.0,
    ) {
        let mixed = mix(weight, a, b);
        prop_assert!(mixed.is_opaque());
        // Flooring may land one step under the lower input.
        for (m, x, y) in [(mixed.r, a.r, b.r), (mixed.g, a.g, b.g), (mixed.b, a.b, b.b)] {
            let (m, lo, hi) = (m as i16, x.min(y) as i16, x.max(y) as i16);
            prop_assert!(m >= lo - 1 && m <= hi);
        }
    }

    #[test]
    fn mix_interpolates_alpha_linearly(
        a in translucent(),
        b in prop_oneof![translucent(), opaque()],
        weight in 0.0f64..=1.0,
    ) {
        let mixed = mix(weight, a, b);
        let expected = b.a + (a.a - b.a) * weight;
        prop_assert!((mixed.a - expected).abs() < 1e-12, "{} vs {}", mixed.a, expected);
    }

    #[test]
    fn alpha_weighted_mix_stays_between_inputs(
        a in translucent(),
        b in prop_oneof![translucent(), opaque()],
        weight in 0.0f64..=1.0,
    ) {
        let mixed = mix(weight, a, b);
        for (m, x, y) in [(mixed.r, a.r, b.r), (mixed.g, a.g, b.g), (mixed.b, a.b, b.b)] {
            let (m, lo, hi) = (m as i16, x.min(y) as i16, x.max(y) as i16);
            prop_assert!(m >= lo - 1 && m <= hi, "{:?} from {:?} and {:?}", mixed, a, b);
        }
    }

    #[test]
    fn more_opaque_side_pulls_harder(
        (r, g, b) in any::<(u8, u8, u8)>(),
        a in 0.05f64..0.95,
    ) {
        // At an even weight the opaque side gets at least half the channel share
        let clear = Rgba::new(r, g, b, a);
        let mixed = mix(0.5, Rgba::WHITE, clear);
        for (m, x) in [(mixed.r, r), (mixed.g, g), (mixed.b, b)] {
            prop_assert!(m as i16 >= (255 + x as i16) / 2 - 1);
        }
    }

    #[test]
    fn blend_duality(x in opaque()) {
        prop_assert_eq!(blend_multiply(Rgba::BLACK, x), Rgba::BLACK);
        prop_assert_eq!(blend_screen(Rgba::WHITE, x), Rgba::WHITE);
        prop_assert_eq!(blend_multiply(Rgba::WHITE, x), x);
        prop_assert_eq!(blend_screen(Rgba::BLACK, x), x);
    }

    #[test]
    fn hsl_round_trip_is_close(color in opaque()) {
        let back = color.to_hsl().to_rgb();
        for (m, x) in [(back.r, color.r), (back.g, color.g), (back.b, color.b)] {
            prop_assert!((m as i16 - x as i16).abs() <= 1);
        }
    }
}
