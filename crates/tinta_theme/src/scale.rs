//! Tint ladders
//!
//! A [`TintScale`] expands one [`HueSpec`] into eleven fixed stops, light at
//! [`Tint::T50`] and dark at [`Tint::T950`], anchored on the hue's `mid` color
//! at its `mid_point`.

use std::cmp::Ordering;
use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tinta_color::{mix, Rgba};
use tracing::warn;

use crate::hues::HueSpec;
use crate::tone::Spots;

/// Tint stop keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tint {
    T50,
    T100,
    T200,
    T300,
    T400,
    T500,
    T600,
    T700,
    T800,
    T900,
    T950,
}

impl Tint {
    pub const ALL: [Tint; 11] = [
        Tint::T50,
        Tint::T100,
        Tint::T200,
        Tint::T300,
        Tint::T400,
        Tint::T500,
        Tint::T600,
        Tint::T700,
        Tint::T800,
        Tint::T900,
        Tint::T950,
    ];

    /// Numeric key on the 0..1000 lightness axis
    pub const fn value(self) -> u16 {
        match self {
            Tint::T50 => 50,
            Tint::T100 => 100,
            Tint::T200 => 200,
            Tint::T300 => 300,
            Tint::T400 => 400,
            Tint::T500 => 500,
            Tint::T600 => 600,
            Tint::T700 => 700,
            Tint::T800 => 800,
            Tint::T900 => 900,
            Tint::T950 => 950,
        }
    }

    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|tint| tint.value() == value)
    }
}

/// Eleven colors indexed by [`Tint`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TintScale([Rgba; 11]);

impl TintScale {
    pub fn from_fn(mut f: impl FnMut(Tint) -> Rgba) -> Self {
        Self(Tint::ALL.map(&mut f))
    }

    /// Build from `0xRRGGBB` literals ordered `50` to `950`
    pub fn from_hex_table(table: [u32; 11]) -> Self {
        Self(table.map(Rgba::from_hex))
    }

    /// Look up a stop by its numeric key
    pub fn get(&self, value: u16) -> Option<Rgba> {
        Tint::from_value(value).map(|tint| self[tint])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tint, Rgba)> + '_ {
        Tint::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Index<Tint> for TintScale {
    type Output = Rgba;

    fn index(&self, tint: Tint) -> &Rgba {
        &self.0[tint as usize]
    }
}

impl Serialize for TintScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (tint, color) in self.iter() {
            map.serialize_entry(&tint.value().to_string(), &color)?;
        }
        map.end()
    }
}

/// Expand a hue into its tint ladder
///
/// Stops below the mid point mix `mid` toward `lightest`, stops above mix
/// `darkest` toward `mid`. The stop equal to the mid point is `mid` itself.
pub fn build_tint_scale(spec: &HueSpec) -> TintScale {
    let mid_point = effective_mid_point(spec.mid_point);
    let anchor = f64::from(mid_point);
    let dark_size = 1000.0 - anchor;

    TintScale::from_fn(|tint| {
        let value = f64::from(tint.value());
        match tint.value().cmp(&mid_point) {
            Ordering::Equal => spec.mid,
            Ordering::Less => mix(value / anchor, spec.mid, spec.lightest),
            Ordering::Greater => mix((value - anchor) / dark_size, spec.darkest, spec.mid),
        }
    })
}

/// Mid points of 0 and 1000 leave one half of the ladder with no width
fn effective_mid_point(mid_point: u16) -> u16 {
    let clamped = mid_point.clamp(1, 999);
    if clamped != mid_point {
        warn!(mid_point, clamped, "degenerate tint mid point clamped");
    }
    clamped
}

/// Tint ladders of the nine spot hues
pub type SpotPalette = Spots<TintScale>;

impl SpotPalette {
    /// Built-in spot hue table
    pub fn standard() -> Self {
        Spots {
            gray: TintScale::from_hex_table([
                0xf2f3f5, 0xe6e8ec, 0xced2d9, 0xb6bcc6, 0x9ea6b3, 0x8690a0, 0x6e7683, 0x565d67,
                0x3f434a, 0x272a2e, 0x1b1d20,
            ]),
            blue: TintScale::from_hex_table([
                0xe8f1fe, 0xd2e3fe, 0xa6c8fd, 0x7aacfd, 0x4e91fc, 0x2276fc, 0x1e61cd, 0x1a4d9e,
                0x17396f, 0x132540, 0x111b29,
            ]),
            purple: TintScale::from_hex_table([
                0xf8e9fe, 0xf2d3fe, 0xe6a7fd, 0xd97bfd, 0xcd4efc, 0xc123fc, 0x9d1fcd, 0x7a1b9e,
                0x56186f, 0x331440, 0x211229,
            ]),
            magenta: TintScale::from_hex_table([
                0xfcebf5, 0xf9d7eb, 0xf4afd8, 0xef87c4, 0xea5fb1, 0xe5389e, 0xba3082, 0x8f2866,
                0x65204a, 0x3a182d, 0x25141f,
            ]),
            red: TintScale::from_hex_table([
                0xfdebea, 0xfcd8d5, 0xf9b1ab, 0xf68b82, 0xf36458, 0xf03e2f, 0xc33529, 0x962c23,
                0x69231d, 0x3c1a17, 0x261514,
            ]),
            orange: TintScale::from_hex_table([
                0xfef0e6, 0xfee2ce, 0xfdc59d, 0xfca86d, 0xfb8b3c, 0xe57322, 0xba5f1f, 0x904b1b,
                0x653818, 0x3a2415, 0x251a13,
            ]),
            yellow: TintScale::from_hex_table([
                0xfef7da, 0xfdefb6, 0xfcdf6d, 0xfbd024, 0xd9b421, 0xb7991e, 0x967e1c, 0x746219,
                0x534717, 0x312c14, 0x201e13,
            ]),
            green: TintScale::from_hex_table([
                0xe7f9ed, 0xd0f4dc, 0xa1eaba, 0x72e097, 0x43d675, 0x3ab564, 0x329454, 0x297343,
                0x215233, 0x183122, 0x14211a,
            ]),
            cyan: TintScale::from_hex_table([
                0xe3fafd, 0xc7f5fc, 0x90ecf9, 0x59e3f6, 0x22daf4, 0x1fb8ce, 0x1c97a8, 0x197583,
                0x16545d, 0x133237, 0x112124,
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(mid: u32, mid_point: u16) -> HueSpec {
        HueSpec {
            lightest: Rgba::WHITE,
            darkest: Rgba::from_hex(0x101112),
            mid: Rgba::from_hex(mid),
            mid_point,
        }
    }

    #[test]
    fn tint_keys() {
        assert_eq!(Tint::from_value(950), Some(Tint::T950));
        assert_eq!(Tint::from_value(550), None);
        assert!(Tint::ALL.windows(2).all(|w| w[0].value() < w[1].value()));
    }

    #[test]
    fn primary_ladder() {
        let scale = build_tint_scale(&spec(0x2276fc, 500));
        assert_eq!(scale[Tint::T500], Rgba::from_hex(0x2276fc));
        // mix(0.1, mid, white): 0x22 * 0.1 + 255 * 0.9 = 232.9
        assert_eq!(scale[Tint::T50], Rgba::rgb(232, 241, 254));
        // mix(0.9, #101112, mid)
        assert_eq!(scale[Tint::T950], Rgba::rgb(17, 27, 41));
        assert_eq!(scale.get(500), Some(Rgba::from_hex(0x2276fc)));
        assert_eq!(scale.get(42), None);
    }

    #[test]
    fn off_center_mid_point_is_anchored() {
        let scale = build_tint_scale(&spec(0xfbd024, 300));
        assert_eq!(scale[Tint::T300], Rgba::from_hex(0xfbd024));
        assert_ne!(scale[Tint::T500], Rgba::from_hex(0xfbd024));
    }

    #[test]
    fn degenerate_mid_points_are_clamped() {
        for mid_point in [0, 1000, 4000] {
            let scale = build_tint_scale(&spec(0x2276fc, mid_point));
            for (_, color) in scale.iter() {
                assert!(color.is_opaque());
            }
        }
        assert_eq!(effective_mid_point(0), 1);
        assert_eq!(effective_mid_point(1000), 999);
        assert_eq!(effective_mid_point(400), 400);
    }

    #[test]
    fn standard_spots_match_their_anchor_hues() {
        let spots = SpotPalette::standard();
        assert_eq!(spots.blue[Tint::T500], Rgba::from_hex(0x2276fc));
        assert_eq!(spots.red[Tint::T500], Rgba::from_hex(0xf03e2f));
        assert_eq!(spots.gray[Tint::T500], Rgba::from_hex(0x8690a0));
        assert_eq!(spots.green[Tint::T400], Rgba::from_hex(0x43d675));
        assert_eq!(spots.yellow[Tint::T300], Rgba::from_hex(0xfbd024));
    }

    #[test]
    fn serializes_as_keyed_map() {
        let json = serde_json::to_value(build_tint_scale(&spec(0x2276fc, 500))).unwrap();
        assert_eq!(json["500"], "#2276fc");
        assert_eq!(json.as_object().map(|map| map.len()), Some(11));
        let first = json.as_object().and_then(|map| map.keys().next().cloned());
        assert_eq!(first.as_deref(), Some("50"));
    }
}
