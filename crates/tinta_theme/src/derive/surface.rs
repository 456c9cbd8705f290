//! Solid and muted surfaces
//!
//! Both take the surface tone `name` and a sub-tone `tone`. A solid surface is
//! a strong fill blended onto `base.bg`; a muted surface stays close to
//! `base.bg` and only tints its text.

use tinta_color::Rgba;

use super::{is_neutral_pair, skeleton, Deriver};
use crate::scale::{Tint, Tint::*, TintScale};
use crate::tokens::{BaseTokens, CodeTokens, FgToken, SkeletonTokens, StateTokens};
use crate::tone::{State, ToneName};

impl<'a> Deriver<'a> {
    /// Strong fill of `tone` inside a `name` surface
    pub fn solid(&self, base: &BaseTokens, name: ToneName, tone: ToneName, state: State) -> StateTokens {
        let fg = self.blend(base.bg, self.contrast());
        let tints = self.sub_tints(name, tone);

        match state {
            State::Disabled => {
                let tints = self.tints(name);
                let bg = self.blend(base.bg, self.stop(tints, T800, T200));
                let faint = self.blend(base.bg, self.stop(tints, T950, T50));
                StateTokens {
                    bg,
                    bg2: self.invert(bg, self.stop(tints, T50, T950)),
                    border: bg,
                    fg,
                    muted: FgToken::new(faint),
                    accent: FgToken::new(faint),
                    link: FgToken::new(faint),
                    code: CodeTokens { bg, fg: faint },
                    skeleton: skeleton(self.invert(bg, self.stop(tints, T200, T800))),
                }
            }
            State::Hovered => self.solid_fill(base, fg, tints, (T300, T600), (T800, T200)),
            State::Pressed => self.solid_fill(base, fg, tints, (T200, T800), (T800, T200)),
            State::Selected => {
                let tints = self.neutral_to_primary(name, tone, tints);
                self.solid_fill(base, fg, tints, (T200, T800), (T800, T200))
            }
            State::Enabled => self.solid_fill(base, fg, tints, (T400, T500), (T900, T100)),
        }
    }

    /// Active solid states differ only in the fill stop and the stop of
    /// their secondary text
    fn solid_fill(
        &self,
        base: &BaseTokens,
        fg: Rgba,
        tints: &TintScale,
        fill: (Tint, Tint),
        text: (Tint, Tint),
    ) -> StateTokens {
        let bg = self.blend(base.bg, self.stop(tints, fill.0, fill.1));
        let soft = self.blend(base.bg, self.stop(tints, text.0, text.1));
        let accent = self.tints(ToneName::Critical);
        let link = self.tints(ToneName::Primary);

        StateTokens {
            bg,
            bg2: self.invert(bg, self.stop(tints, T50, T950)),
            border: bg,
            fg,
            muted: FgToken::new(soft),
            accent: FgToken::new(self.invert(bg, self.stop(accent, text.0, text.1))),
            link: FgToken::new(self.invert(bg, self.stop(link, text.0, text.1))),
            code: CodeTokens {
                bg: self.blend(bg, self.stop(tints, T950, T50)),
                fg: soft,
            },
            skeleton: skeleton(self.invert(bg, self.stop(tints, T200, T800))),
        }
    }

    /// Low-contrast variant of `tone` inside a `name` surface
    pub fn muted(&self, base: &BaseTokens, name: ToneName, tone: ToneName, state: State) -> StateTokens {
        let tints = self.sub_tints(name, tone);
        let critical = self.tints(ToneName::Critical);
        let primary = self.tints(ToneName::Primary);

        match state {
            State::Disabled => {
                let tints = self.tints(name);
                let bg = base.bg;
                let faint = self.blend(bg, self.stop(tints, T900, T100));
                let edge = self.blend(bg, self.stop(tints, T950, T50));
                StateTokens {
                    bg,
                    bg2: edge,
                    border: edge,
                    fg: self.blend(bg, self.stop(tints, T800, T200)),
                    muted: FgToken::new(faint),
                    accent: FgToken::new(faint),
                    link: FgToken::new(faint),
                    code: CodeTokens { bg, fg: faint },
                    skeleton: SkeletonTokens {
                        from: faint.with_alpha(0.5),
                        to: faint.with_alpha(0.25),
                    },
                }
            }
            State::Hovered => {
                let tints = self.neutral_to_primary(name, tone, tints);
                let bg = self.blend(base.bg, self.stop(tints, T950, T50));
                self.muted_tint(base, tints, MutedFill {
                    bg,
                    fg: (T200, T800),
                    text_over: base.bg,
                    accent: primary,
                })
            }
            State::Pressed | State::Selected => {
                let tints = self.neutral_to_primary(name, tone, tints);
                let bg = self.blend(base.bg, self.stop(tints, T900, T100));
                self.muted_tint(base, tints, MutedFill {
                    bg,
                    fg: (T200, T800),
                    text_over: bg,
                    accent: critical,
                })
            }
            State::Enabled => self.muted_tint(base, tints, MutedFill {
                bg: base.bg,
                fg: (T300, T700),
                text_over: base.bg,
                accent: critical,
            }),
        }
    }

    fn muted_tint(&self, base: &BaseTokens, tints: &TintScale, fill: MutedFill<'_>) -> StateTokens {
        let bg = fill.bg;
        let primary = self.tints(ToneName::Primary);

        StateTokens {
            bg,
            bg2: self.blend(bg, self.stop(tints, T950, T50)),
            border: self.blend(bg, self.stop(tints, T900, T100)),
            fg: self.blend(base.bg, self.stop(tints, fill.fg.0, fill.fg.1)),
            muted: FgToken::new(self.blend(base.bg, self.stop(tints, T400, T600))),
            accent: FgToken::new(self.blend(fill.text_over, self.stop(fill.accent, T400, T500))),
            link: FgToken::new(self.blend(fill.text_over, self.stop(primary, T400, T600))),
            code: CodeTokens {
                bg: self.blend(bg, self.stop(tints, T950, T50)),
                fg: self.blend(base.bg, self.stop(tints, T400, T600)),
            },
            skeleton: skeleton(self.blend(bg, self.stop(tints, T900, T100))),
        }
    }

    /// Neutral surfaces light up in `primary` once they are interacted with
    fn neutral_to_primary(&self, name: ToneName, tone: ToneName, tints: &'a TintScale) -> &'a TintScale {
        if is_neutral_pair(name, tone) {
            self.tints(ToneName::Primary)
        } else {
            tints
        }
    }
}

/// Per-state inputs of a muted surface
struct MutedFill<'s> {
    bg: Rgba,
    /// Stop of the main text
    fg: (Tint, Tint),
    /// Surface under the accent and link text
    text_over: Rgba,
    accent: &'s TintScale,
}
