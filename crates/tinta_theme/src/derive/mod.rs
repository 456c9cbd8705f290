//! Token derivation
//!
//! A [`Deriver`] holds the tint ladders of a resolved palette plus the color
//! scheme being rendered, and exposes one pure function per token category.
//! Stop pairs are always written dark first: `self.stop(scale, T800, T200)`
//! reads stop 800 in the dark scheme and 200 in the light one.
//!
//! Blending follows the scheme: colors are screened onto dark backgrounds and
//! multiplied onto light ones. The inverse operator lifts secondary colors off
//! an already blended fill.

mod accent;
mod base;
mod component;
mod surface;

pub use component::SurfaceGroup;

use tinta_color::{BlendMode, Rgba};
use tracing::debug;

use crate::hues::PaletteSpec;
use crate::scale::{build_tint_scale, SpotPalette, Tint, TintScale};
use crate::tokens::SkeletonTokens;
use crate::tone::{ColorScheme, ToneName, Tones};

/// Tint ladders of the six semantic tones
#[derive(Clone, Debug, PartialEq)]
pub struct ToneScales {
    scales: Tones<TintScale>,
    lightest: Rgba,
    darkest: Rgba,
}

impl ToneScales {
    pub fn new(palette: &PaletteSpec) -> Self {
        Self {
            scales: palette.map(|_, hue| build_tint_scale(hue)),
            lightest: palette.default.lightest,
            darkest: palette.default.darkest,
        }
    }

    pub fn get(&self, tone: ToneName) -> &TintScale {
        self.scales.get(tone)
    }

    /// Look up a ladder by tone name, falling back to `default`
    pub fn lookup(&self, name: &str) -> &TintScale {
        match ToneName::from_name(name) {
            Some(tone) => self.get(tone),
            None => {
                debug!(name, "unknown tone, using default tints");
                &self.scales.default
            }
        }
    }

    /// Lightest color of the `default` hue, the page color in light mode
    pub fn lightest(&self) -> Rgba {
        self.lightest
    }

    /// Darkest color of the `default` hue, the page color in dark mode
    pub fn darkest(&self) -> Rgba {
        self.darkest
    }
}

/// Token derivation for one color scheme
#[derive(Clone, Copy, Debug)]
pub struct Deriver<'a> {
    scales: &'a ToneScales,
    spots: &'a SpotPalette,
    scheme: ColorScheme,
    blend: BlendMode,
}

impl<'a> Deriver<'a> {
    pub fn new(scales: &'a ToneScales, spots: &'a SpotPalette, scheme: ColorScheme) -> Self {
        Self {
            scales,
            spots,
            scheme,
            blend: BlendMode::for_scheme(scheme.is_dark()),
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }

    fn pick(&self, dark: Tint, light: Tint) -> Tint {
        if self.is_dark() {
            dark
        } else {
            light
        }
    }

    fn stop(&self, scale: &TintScale, dark: Tint, light: Tint) -> Rgba {
        scale[self.pick(dark, light)]
    }

    fn tints(&self, tone: ToneName) -> &'a TintScale {
        self.scales.get(tone)
    }

    /// Ladder of a sub-tone drawn inside a `name` surface
    ///
    /// The `default` sub-tone takes the color of its surface.
    fn sub_tints(&self, name: ToneName, tone: ToneName) -> &'a TintScale {
        if tone == ToneName::Default {
            self.tints(name)
        } else {
            self.tints(tone)
        }
    }

    /// Ink color for solid fills: the page color of the opposite scheme
    fn contrast(&self) -> Rgba {
        if self.is_dark() {
            self.scales.darkest()
        } else {
            self.scales.lightest()
        }
    }

    fn blend(&self, bg: Rgba, fg: Rgba) -> Rgba {
        self.blend.apply(bg, fg)
    }

    fn invert(&self, bg: Rgba, fg: Rgba) -> Rgba {
        self.blend.inverse().apply(bg, fg)
    }
}

fn skeleton(from: Rgba) -> SkeletonTokens {
    SkeletonTokens {
        from,
        to: from.with_alpha(0.5),
    }
}

fn is_neutral_pair(name: ToneName, tone: ToneName) -> bool {
    name.is_neutral() && tone.is_neutral()
}


#[cfg(test)]
mod tests {
    use super::fixtures::Fixture;
    use super::*;

    #[test]
    fn unknown_tone_names_fall_back_to_default() {
        let scales = ToneScales::new(&PaletteSpec::standard());
        assert_eq!(scales.lookup("brand"), scales.get(ToneName::Default));
        assert_eq!(scales.lookup("critical"), scales.get(ToneName::Critical));
    }

    #[test]
    fn stops_follow_the_scheme() {
        let fixture = Fixture::standard();
        let light = fixture.deriver(ColorScheme::Light);
        let dark = fixture.deriver(ColorScheme::Dark);
        assert_eq!(light.pick(Tint::T800, Tint::T200), Tint::T200);
        assert_eq!(dark.pick(Tint::T800, Tint::T200), Tint::T800);
        assert_eq!(light.contrast(), Rgba::WHITE);
        assert_eq!(dark.contrast(), Rgba::from_hex(0x101112));
    }

    #[test]
    fn default_sub_tone_takes_the_surface_color() {
        let fixture = Fixture::standard();
        let deriver = fixture.deriver(ColorScheme::Light);
        assert_eq!(
            deriver.sub_tints(ToneName::Caution, ToneName::Default),
            fixture.scales.get(ToneName::Caution)
        );
        assert_eq!(
            deriver.sub_tints(ToneName::Caution, ToneName::Positive),
            fixture.scales.get(ToneName::Positive)
        );
    }
}
