//! Hue query strings
//!
//! A compact, URL-safe palette encoding:
//!
//! ```text
//! default=64748b&primary=d946ef;lightest:fdf4ff;darkest:701a75&positive=43d675;400&lightest=ffffff
//! ```
//!
//! Each tone key carries `<mid>[;<midPoint>][;lightest:<color>][;darkest:<color>]`.
//! Top-level `lightest` and `darkest` keys fill in tones that did not set
//! their own. Hex colors may omit the leading `#`.

use tracing::debug;
use url::form_urlencoded;

use crate::error::{Result, ThemeError};
use crate::hues::{PartialHueSpec, PartialPaletteSpec};
use crate::tone::ToneName;

impl PartialPaletteSpec {
    /// Parse a hue query string; anything up to a `?` is ignored
    pub fn from_query(query: &str) -> Result<Self> {
        let query = query.split_once('?').map_or(query, |(_, rest)| rest);

        let mut palette = Self::default();
        let mut shared = PartialHueSpec::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "lightest" => shared.lightest = Some(color_value(&value)),
                "darkest" => shared.darkest = Some(color_value(&value)),
                other => match ToneName::from_name(other) {
                    Some(tone) => parse_hue(&value, palette.entry(tone))?,
                    None => debug!(key = other, "ignoring hue query key"),
                },
            }
        }

        if !shared.is_empty() {
            for &tone in ToneName::ALL {
                let hue = palette.entry(tone);
                if hue.lightest.is_none() {
                    hue.lightest.clone_from(&shared.lightest);
                }
                if hue.darkest.is_none() {
                    hue.darkest.clone_from(&shared.darkest);
                }
            }
        }

        Ok(palette)
    }
}

fn parse_hue(value: &str, hue: &mut PartialHueSpec) -> Result<()> {
    let mut segments = value.split(';').map(str::trim);

    if let Some(mid) = segments.next().filter(|mid| !mid.is_empty()) {
        hue.mid = Some(color_value(mid));
    }

    for segment in segments.filter(|segment| !segment.is_empty()) {
        match segment.split_once(':') {
            Some(("lightest", color)) => hue.lightest = Some(color_value(color)),
            Some(("darkest", color)) => hue.darkest = Some(color_value(color)),
            Some((field, _)) => {
                return Err(ThemeError::InvalidQuery(format!(
                    "unknown hue field `{field}` in `{value}`"
                )))
            }
            None => {
                let mid_point = segment.parse::<u16>().ok().filter(|&point| point <= 1000);
                hue.mid_point = Some(mid_point.ok_or_else(|| {
                    ThemeError::InvalidQuery(format!("invalid mid point `{segment}` in `{value}`"))
                })?);
            }
        }
    }

    Ok(())
}

/// Bare hex digits get their `#` back; anything else is left to the color parser
fn color_value(raw: &str) -> String {
    let raw = raw.trim();
    let bare_hex = matches!(raw.len(), 3 | 4 | 6 | 8) && raw.bytes().all(|b| b.is_ascii_hexdigit());
    if bare_hex {
        format!("#{raw}")
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hue(mid: &str, mid_point: Option<u16>, lightest: &str, darkest: &str) -> Option<PartialHueSpec> {
        Some(PartialHueSpec {
            lightest: Some(lightest.into()),
            darkest: Some(darkest.into()),
            mid: Some(mid.into()),
            mid_point,
        })
    }

    #[test]
    fn parses_tones_and_shared_extremes() {
        let palette = PartialPaletteSpec::from_query(
            "default=64748b&primary=d946ef;lightest:fdf4ff;darkest:701a75\
             &positive=43d675;400&lightest=ffffff&darkest=0f172a",
        )
        .unwrap();

        assert_eq!(palette.default, hue("#64748b", None, "#ffffff", "#0f172a"));
        assert_eq!(palette.primary, hue("#d946ef", None, "#fdf4ff", "#701a75"));
        assert_eq!(palette.positive, hue("#43d675", Some(400), "#ffffff", "#0f172a"));
        assert_eq!(
            palette.caution,
            Some(PartialHueSpec {
                lightest: Some("#ffffff".into()),
                darkest: Some("#0f172a".into()),
                ..Default::default()
            })
        );
    }

    #[test]
    fn strips_url_prefix_and_percent_decoding() {
        let palette = PartialPaletteSpec::from_query(
            "https://themer.example/api/hues?critical=f43f5e%3Blightest%3Afef1f2&preset=tw-cyan",
        )
        .unwrap();
        let critical = palette.critical.unwrap();
        assert_eq!(critical.mid.as_deref(), Some("#f43f5e"));
        assert_eq!(critical.lightest.as_deref(), Some("#fef1f2"));
        assert!(palette.default.is_none());
    }

    #[test]
    fn ignores_unknown_keys() {
        let palette = PartialPaletteSpec::from_query("min=0&preset=tw-cyan").unwrap();
        assert_eq!(palette, PartialPaletteSpec::default());
    }

    #[test]
    fn keeps_named_colors_verbatim() {
        let palette = PartialPaletteSpec::from_query("caution=gold;darkest:%23333").unwrap();
        let caution = palette.caution.unwrap();
        assert_eq!(caution.mid.as_deref(), Some("gold"));
        assert_eq!(caution.darkest.as_deref(), Some("#333"));
    }

    #[test]
    fn rejects_malformed_segments() {
        for query in ["primary=2276fc;middle:fff", "primary=2276fc;half", "primary=2276fc;1200"] {
            assert!(
                matches!(PartialPaletteSpec::from_query(query), Err(ThemeError::InvalidQuery(_))),
                "{query}"
            );
        }
    }
}
