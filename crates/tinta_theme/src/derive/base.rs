use tinta_color::Rgba;

use super::{skeleton, Deriver};
use crate::scale::Tint::*;
use crate::tokens::{BaseTokens, ShadowTokens};
use crate::tone::ToneName;

impl Deriver<'_> {
    /// Ambient colors of a `name` surface
    pub fn base(&self, name: ToneName) -> BaseTokens {
        let primary = self.tints(ToneName::Primary);
        let outline_alpha = if self.is_dark() { 0.2 } else { 0.4 };

        match name {
            ToneName::Default => {
                let transparent = self.tints(ToneName::Transparent);
                let (bg, fg) = if self.is_dark() {
                    (self.scales.darkest(), self.scales.lightest())
                } else {
                    (self.scales.lightest(), self.scales.darkest())
                };
                BaseTokens {
                    bg,
                    fg,
                    border: self.stop(transparent, T800, T200),
                    focus_ring: primary[T500],
                    shadow: self.shadow(transparent[T500], 0.4),
                    skeleton: skeleton(self.stop(transparent, T900, T100)),
                }
            }
            ToneName::Transparent => {
                let tints = self.tints(ToneName::Default);
                BaseTokens {
                    bg: self.stop(tints, T950, T50),
                    fg: self.stop(tints, T100, T900),
                    border: self.stop(tints, T800, T300),
                    focus_ring: primary[T500],
                    shadow: self.shadow(tints[T500], outline_alpha),
                    skeleton: skeleton(self.stop(tints, T800, T200)),
                }
            }
            tone => {
                let tints = self.tints(tone);
                BaseTokens {
                    bg: self.stop(tints, T950, T50),
                    fg: self.stop(tints, T100, T900),
                    border: self.stop(tints, T800, T200),
                    focus_ring: tints[T500],
                    shadow: self.shadow(tints[T500], outline_alpha),
                    skeleton: skeleton(self.stop(tints, T800, T200)),
                }
            }
        }
    }

    /// Outline tinted by `mid`; the soft layers darken to the page color in
    /// dark mode
    fn shadow(&self, mid: Rgba, outline_alpha: f64) -> ShadowTokens {
        let layer = if self.is_dark() {
            self.scales.darkest()
        } else {
            mid
        };
        ShadowTokens {
            outline: mid.with_alpha(outline_alpha),
            umbra: layer.with_alpha(0.2),
            penumbra: layer.with_alpha(0.14),
            ambient: layer.with_alpha(0.12),
        }
    }
}

#[cfg(test)]
mod tests {
    use tinta_color::Rgba;

    use crate::derive::fixtures::Fixture;
    use crate::scale::Tint;
    use crate::tone::{ColorScheme, ToneName};

    #[test]
    fn default_base_swaps_page_colors() {
        let fixture = Fixture::standard();
        let light = fixture.deriver(ColorScheme::Light).base(ToneName::Default);
        let dark = fixture.deriver(ColorScheme::Dark).base(ToneName::Default);

        assert_eq!(light.bg, Rgba::WHITE);
        assert_eq!(light.fg, Rgba::from_hex(0x101112));
        assert_eq!(dark.bg, Rgba::from_hex(0x101112));
        assert_eq!(dark.fg, Rgba::WHITE);
        assert_eq!(light.focus_ring, Rgba::from_hex(0x2276fc));
        assert_eq!(light.skeleton.to, light.skeleton.from.with_alpha(0.5));
    }

    #[test]
    fn semantic_base_reads_its_own_ladder() {
        let fixture = Fixture::standard();
        let critical = fixture.scales.get(ToneName::Critical);
        let light = fixture.deriver(ColorScheme::Light).base(ToneName::Critical);
        let dark = fixture.deriver(ColorScheme::Dark).base(ToneName::Critical);

        assert_eq!(light.bg, critical[Tint::T50]);
        assert_eq!(light.fg, critical[Tint::T900]);
        assert_eq!(dark.bg, critical[Tint::T950]);
        assert_eq!(dark.border, critical[Tint::T800]);
        assert_eq!(light.focus_ring, Rgba::from_hex(0xf03e2f));
    }

    #[test]
    fn shadows_carry_fixed_alphas() {
        let fixture = Fixture::standard();
        let light = fixture.deriver(ColorScheme::Light).base(ToneName::Primary);
        let dark = fixture.deriver(ColorScheme::Dark).base(ToneName::Transparent);

        assert_eq!(light.shadow.outline, Rgba::new(0x22, 0x76, 0xfc, 0.4));
        assert_eq!(light.shadow.ambient, Rgba::new(0x22, 0x76, 0xfc, 0.12));
        assert_eq!(dark.shadow.outline.a, 0.2);
        assert_eq!(dark.shadow.umbra, Rgba::new(0x10, 0x11, 0x12, 0.2));
        assert_eq!(dark.shadow.penumbra.to_css(), "rgba(16,17,18,0.14)");
    }

    #[test]
    fn outline_softens_in_dark_mode_except_on_the_page() {
        let fixture = Fixture::standard();
        let dark = fixture.deriver(ColorScheme::Dark);
        for tone in [ToneName::Primary, ToneName::Positive, ToneName::Caution, ToneName::Critical] {
            let base = dark.base(tone);
            assert_eq!(base.shadow.outline.a, 0.2, "{tone}");
            assert_eq!(base.shadow.outline, fixture.scales.get(tone)[Tint::T500].with_alpha(0.2));
        }
        assert_eq!(dark.base(ToneName::Default).shadow.outline.a, 0.4);
    }

    #[test]
    fn transparent_base_uses_the_default_ladder() {
        let fixture = Fixture::standard();
        let default = fixture.scales.get(ToneName::Default);
        let light = fixture.deriver(ColorScheme::Light).base(ToneName::Transparent);
        assert_eq!(light.border, default[Tint::T300]);
        assert_eq!(light.focus_ring, Rgba::from_hex(0x2276fc));
    }
}
