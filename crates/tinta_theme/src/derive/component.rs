//! Component groups
//!
//! Buttons, cards and selectables are mostly picked out of the solid and
//! muted groups already derived for the surface. Inputs have their own table.

use super::{skeleton, Deriver};
use crate::scale::Tint::*;
use crate::tokens::{BaseTokens, CodeTokens, FgToken, InputTokens, StateTokens};
use crate::tone::{ButtonMode, InputMode, InputState, State, States, ToneName, Tones};

/// Solid or muted group of one surface, keyed by sub-tone then state
pub type SurfaceGroup = Tones<States<StateTokens>>;

impl Deriver<'_> {
    /// Button states for one tone
    pub fn button(
        &self,
        base: &BaseTokens,
        mode: ButtonMode,
        solid: &States<StateTokens>,
        muted: &States<StateTokens>,
    ) -> States<StateTokens> {
        match mode {
            ButtonMode::Default => solid.clone(),
            ButtonMode::Ghost => States {
                enabled: muted.enabled.with_border(base.border),
                disabled: muted.disabled,
                ..solid.clone()
            },
            ButtonMode::Bleed => muted.map(|_, tokens| tokens.with_border(tokens.bg)),
        }
    }

    /// Card colors of a `name` surface
    pub fn card(
        &self,
        base: &BaseTokens,
        name: ToneName,
        state: State,
        solid: &SurfaceGroup,
        muted: &SurfaceGroup,
    ) -> StateTokens {
        let lifted = if name.is_neutral() {
            ToneName::Primary
        } else {
            name
        };

        match state {
            State::Hovered => muted.get(name).hovered,
            State::Disabled => muted.get(name).disabled,
            State::Pressed => muted.get(lifted).pressed,
            State::Selected => solid.get(lifted).enabled,
            State::Enabled => {
                let tints = self.tints(name);
                StateTokens {
                    bg: base.bg,
                    bg2: self.blend(base.bg, self.stop(tints, T950, T50)),
                    border: base.border,
                    fg: base.fg,
                    muted: FgToken::new(self.blend(base.bg, self.stop(tints, T400, T600))),
                    accent: FgToken::new(self.blend(base.bg, self.stop(&self.spots.red, T400, T500))),
                    link: FgToken::new(self.blend(base.bg, self.stop(&self.spots.blue, T400, T600))),
                    code: CodeTokens {
                        bg: self.blend(base.bg, self.stop(tints, T950, T50)),
                        fg: self.stop(tints, T400, T600),
                    },
                    skeleton: skeleton(self.blend(base.bg, self.stop(tints, T900, T100))),
                }
            }
        }
    }

    /// Text input colors
    ///
    /// Invalid inputs read the `critical` ladder whatever the surface; every
    /// other state draws from the gray spot hue.
    pub fn input(&self, base: &BaseTokens, mode: InputMode, state: InputState) -> InputTokens {
        if mode == InputMode::Invalid {
            let tints = self.tints(ToneName::Critical);
            return InputTokens {
                bg: self.blend(base.bg, self.stop(tints, T950, T50)),
                fg: self.blend(base.bg, self.stop(tints, T400, T600)),
                border: self.blend(base.bg, self.stop(tints, T800, T200)),
                placeholder: self.blend(base.bg, self.stop(tints, T600, T400)),
            };
        }

        let gray = |dark, light| self.blend(base.bg, self.stop(&self.spots.gray, dark, light));
        match state {
            InputState::Enabled => InputTokens {
                bg: base.bg,
                fg: base.fg,
                border: base.border,
                placeholder: gray(T600, T400),
            },
            InputState::Hovered => InputTokens {
                bg: base.bg,
                fg: base.fg,
                border: gray(T700, T300),
                placeholder: gray(T600, T400),
            },
            InputState::Disabled => InputTokens {
                bg: gray(T950, T50),
                fg: gray(T700, T300),
                border: gray(T900, T100),
                placeholder: gray(T800, T200),
            },
            InputState::ReadOnly => InputTokens {
                bg: gray(T950, T50),
                fg: gray(T200, T800),
                border: gray(T800, T200),
                placeholder: gray(T600, T400),
            },
        }
    }

    /// List-item colors for one tone; the `default` tone is lifted to
    /// `primary` once pressed or selected
    pub fn selectable(
        &self,
        base: &BaseTokens,
        tone: ToneName,
        state: State,
        solid: &SurfaceGroup,
        muted: &SurfaceGroup,
    ) -> StateTokens {
        let lifted = if tone == ToneName::Default {
            ToneName::Primary
        } else {
            tone
        };

        match state {
            State::Enabled => muted.get(tone).enabled.with_bg(base.bg),
            State::Hovered => muted.get(tone).hovered,
            State::Pressed => muted.get(lifted).pressed,
            State::Selected => solid.get(lifted).enabled,
            State::Disabled => muted.get(tone).disabled.with_bg(base.bg),
        }
    }
}
