//! Hue specifications and palette resolution

use serde::{Deserialize, Serialize};
use tinta_color::Rgba;
use tracing::trace;

use crate::error::{HueField, Result, ThemeError};
use crate::tone::{ToneName, Tones};

/// Reference colors of one tone
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HueSpec {
    pub lightest: Rgba,
    pub darkest: Rgba,
    pub mid: Rgba,
    /// Tint key at which the ladder equals `mid`
    pub mid_point: u16,
}

impl HueSpec {
    pub const fn new(lightest: Rgba, darkest: Rgba, mid: Rgba, mid_point: u16) -> Self {
        Self {
            lightest,
            darkest,
            mid,
            mid_point,
        }
    }
}

/// Resolved hues for all six semantic tones
pub type PaletteSpec = Tones<HueSpec>;

impl PaletteSpec {
    /// Built-in palette
    pub fn standard() -> Self {
        const LIGHTEST: Rgba = Rgba::WHITE;
        const DARKEST: Rgba = Rgba::from_hex(0x101112);
        let hue = |mid: u32, mid_point: u16| {
            HueSpec::new(LIGHTEST, DARKEST, Rgba::from_hex(mid), mid_point)
        };

        Tones {
            default: hue(0x8690a0, 500),
            transparent: hue(0x8690a0, 500),
            primary: hue(0x2276fc, 500),
            positive: hue(0x43d675, 400),
            caution: hue(0xfbd024, 300),
            critical: hue(0xf03e2f, 500),
        }
    }
}

/// Caller overrides for one tone; every field is optional
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialHueSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lightest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub darkest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<String>,
    #[serde(alias = "midPoint", skip_serializing_if = "Option::is_none")]
    pub mid_point: Option<u16>,
}

impl PartialHueSpec {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Caller overrides keyed by tone
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialPaletteSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<PartialHueSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transparent: Option<PartialHueSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<PartialHueSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive: Option<PartialHueSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caution: Option<PartialHueSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical: Option<PartialHueSpec>,
}

impl PartialPaletteSpec {
    pub fn get(&self, tone: ToneName) -> Option<&PartialHueSpec> {
        self.slot(tone).as_ref()
    }

    /// Overrides for `tone`, created empty when absent
    pub fn entry(&mut self, tone: ToneName) -> &mut PartialHueSpec {
        self.slot_mut(tone).get_or_insert_with(PartialHueSpec::default)
    }

    /// Layer `other` on top of `self`, field by field
    pub fn merge(&mut self, other: &PartialPaletteSpec) {
        for &tone in ToneName::ALL {
            let Some(theirs) = other.get(tone) else {
                continue;
            };
            let ours = self.entry(tone);
            if theirs.lightest.is_some() {
                ours.lightest = theirs.lightest.clone();
            }
            if theirs.darkest.is_some() {
                ours.darkest = theirs.darkest.clone();
            }
            if theirs.mid.is_some() {
                ours.mid = theirs.mid.clone();
            }
            if theirs.mid_point.is_some() {
                ours.mid_point = theirs.mid_point;
            }
        }
    }

    fn slot(&self, tone: ToneName) -> &Option<PartialHueSpec> {
        match tone {
            ToneName::Default => &self.default,
            ToneName::Transparent => &self.transparent,
            ToneName::Primary => &self.primary,
            ToneName::Positive => &self.positive,
            ToneName::Caution => &self.caution,
            ToneName::Critical => &self.critical,
        }
    }

    fn slot_mut(&mut self, tone: ToneName) -> &mut Option<PartialHueSpec> {
        match tone {
            ToneName::Default => &mut self.default,
            ToneName::Transparent => &mut self.transparent,
            ToneName::Primary => &mut self.primary,
            ToneName::Positive => &mut self.positive,
            ToneName::Caution => &mut self.caution,
            ToneName::Critical => &mut self.critical,
        }
    }
}

/// Merge caller overrides onto `defaults`, tone by tone
///
/// For each tone the effective `mid` is the caller's when given, else the
/// default. The default `mid_point` survives only while the effective `mid`
/// parses to the default color, in any notation; a different `mid` without
/// an explicit `mid_point` is centered at 500. Explicit `lightest`, `darkest`
/// and `mid_point` always win. Blank strings count as absent.
pub fn resolve_hues(partial: &PartialPaletteSpec, defaults: &PaletteSpec) -> Result<PaletteSpec> {
    Tones::try_from_fn(|tone| {
        let default = defaults.get(tone);
        let Some(overrides) = partial.get(tone) else {
            return Ok(*default);
        };
        let resolved = resolve_hue(tone, overrides, default)?;
        trace!(%tone, mid = %resolved.mid, mid_point = resolved.mid_point, "resolved hue");
        Ok(resolved)
    })
}

fn resolve_hue(tone: ToneName, overrides: &PartialHueSpec, default: &HueSpec) -> Result<HueSpec> {
    let color = |field: HueField, raw: &Option<String>| -> Result<Option<Rgba>> {
        raw.as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(|raw| {
                Rgba::parse(raw).map_err(|source| ThemeError::InvalidHue {
                    tone,
                    field,
                    source,
                })
            })
            .transpose()
    };

    let mid = color(HueField::Mid, &overrides.mid)?.unwrap_or(default.mid);
    let centered = if mid == default.mid {
        default.mid_point
    } else {
        500
    };

    Ok(HueSpec {
        lightest: color(HueField::Lightest, &overrides.lightest)?.unwrap_or(default.lightest),
        darkest: color(HueField::Darkest, &overrides.darkest)?.unwrap_or(default.darkest),
        mid,
        mid_point: overrides.mid_point.unwrap_or(centered),
    })
}
