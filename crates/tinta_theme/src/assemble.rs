//! Theme assembly
//!
//! Drives the derivers over every scheme, surface tone, sub-tone, mode and
//! state and collects the results into a [`ThemeTree`].

use serde::Serialize;
use tinta_color::Rgba;
use tracing::{debug, debug_span, trace};

use crate::derive::{Deriver, SurfaceGroup, ToneScales};
use crate::error::Result;
use crate::hues::{resolve_hues, PaletteSpec, PartialPaletteSpec};
use crate::scale::SpotPalette;
use crate::tokens::{BaseTokens, InputTokens, StateTokens, SyntaxTokens};
use crate::tone::{
    ActionTones, ButtonModes, ColorScheme, InputModes, InputStates, Spots, States, ToneName, Tones,
};

/// Every token group of one surface tone in one scheme
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeColor {
    pub dark: bool,
    pub base: BaseTokens,
    pub solid: SurfaceGroup,
    pub muted: SurfaceGroup,
    pub button: ButtonModes<ActionTones<States<StateTokens>>>,
    pub card: States<StateTokens>,
    pub input: InputModes<InputStates<InputTokens>>,
    pub selectable: ActionTones<States<StateTokens>>,
    pub spot: Spots<Rgba>,
    pub syntax: SyntaxTokens,
}

/// All surface tones of one scheme
pub type SchemeTokens = Tones<ThemeColor>;

/// Complete token tree
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeTree {
    pub light: SchemeTokens,
    pub dark: SchemeTokens,
}

impl ThemeTree {
    pub fn scheme(&self, scheme: ColorScheme) -> &SchemeTokens {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    pub fn color(&self, scheme: ColorScheme, tone: ToneName) -> &ThemeColor {
        self.scheme(scheme).get(tone)
    }
}

/// Build the token tree of a resolved palette
pub fn assemble(palette: &PaletteSpec, spots: &SpotPalette) -> ThemeTree {
    let _span = debug_span!("assemble").entered();

    let scales = ToneScales::new(palette);
    let scheme = |scheme: ColorScheme| {
        let deriver = Deriver::new(&scales, spots, scheme);
        Tones::from_fn(|name| assemble_color(&deriver, name))
    };
    let tree = ThemeTree {
        light: scheme(ColorScheme::Light),
        dark: scheme(ColorScheme::Dark),
    };

    debug!(
        schemes = ColorScheme::ALL.len(),
        tones = ToneName::ALL.len(),
        "assembled theme tree"
    );
    tree
}

/// Resolve caller overrides against the built-in palette and assemble
pub fn assemble_partial(partial: &PartialPaletteSpec) -> Result<ThemeTree> {
    let palette = resolve_hues(partial, &PaletteSpec::standard())?;
    Ok(assemble(&palette, &SpotPalette::standard()))
}

fn assemble_color(deriver: &Deriver<'_>, name: ToneName) -> ThemeColor {
    trace!(scheme = %deriver.scheme(), tone = %name, "deriving tone");

    let base = deriver.base(name);
    let solid: SurfaceGroup = Tones::from_fn(|tone| {
        States::from_fn(|state| deriver.solid(&base, name, tone, state))
    });
    let muted: SurfaceGroup = Tones::from_fn(|tone| {
        States::from_fn(|state| deriver.muted(&base, name, tone, state))
    });

    let button = ButtonModes::from_fn(|mode| {
        ActionTones::from_fn(|tone| deriver.button(&base, mode, solid.get(tone), muted.get(tone)))
    });
    let card = States::from_fn(|state| deriver.card(&base, name, state, &solid, &muted));
    let input = InputModes::from_fn(|mode| {
        InputStates::from_fn(|state| deriver.input(&base, mode, state))
    });
    let selectable = ActionTones::from_fn(|tone| {
        States::from_fn(|state| deriver.selectable(&base, tone, state, &solid, &muted))
    });
    let spot = Spots::from_fn(|hue| deriver.spot(&base, hue));
    let syntax = deriver.syntax(&base);

    ThemeColor {
        dark: deriver.scheme().is_dark(),
        base,
        solid,
        muted,
        button,
        card,
        input,
        selectable,
        spot,
        syntax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Tint;

    #[test]
    fn tree_carries_the_dark_flag() {
        let tree = assemble(&PaletteSpec::standard(), &SpotPalette::standard());
        for &tone in ToneName::ALL {
            assert!(!tree.color(ColorScheme::Light, tone).dark);
            assert!(tree.color(ColorScheme::Dark, tone).dark);
        }
    }

    #[test]
    fn groups_use_their_own_surface_base() {
        let tree = assemble(&PaletteSpec::standard(), &SpotPalette::standard());
        let caution = tree.color(ColorScheme::Light, ToneName::Caution);
        let default = tree.color(ColorScheme::Light, ToneName::Default);

        assert_eq!(caution.muted.default.enabled.bg, caution.base.bg);
        assert_eq!(default.muted.default.enabled.bg, default.base.bg);
        assert_ne!(caution.base.bg, default.base.bg);
    }

    #[test]
    fn default_button_is_the_solid_group() {
        let tree = assemble(&PaletteSpec::standard(), &SpotPalette::standard());
        let color = tree.color(ColorScheme::Dark, ToneName::Primary);
        assert_eq!(color.button.default.critical, color.solid.critical);
        assert_eq!(color.button.bleed.primary.hovered.border, color.muted.primary.hovered.bg);
        assert_eq!(color.selectable.get(ToneName::Transparent), &color.selectable.default);
    }

    #[test]
    fn partial_assembly_applies_overrides() {
        let mut partial = PartialPaletteSpec::default();
        partial.entry(ToneName::Primary).mid = Some("#d946ef".into());
        let tree = assemble_partial(&partial).unwrap();

        let light = tree.color(ColorScheme::Light, ToneName::Default);
        assert_eq!(light.base.focus_ring, Rgba::from_hex(0xd946ef));
        assert_eq!(light.solid.primary.enabled.bg, Rgba::from_hex(0xd946ef));

        let scales = ToneScales::new(&resolve_hues(&partial, &PaletteSpec::standard()).unwrap());
        assert_eq!(scales.get(ToneName::Primary)[Tint::T500], Rgba::from_hex(0xd946ef));
    }
}
