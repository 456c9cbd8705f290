//! Palette resolution and output rendering

use anyhow::{Context, Result};
use tinta_theme::{
    assemble, build_tint_scale, resolve_hues, ColorScheme, PaletteSpec, PartialPaletteSpec,
    SpotPalette, ThemeTree, Tint, ToneName,
};
use tracing::debug;

use crate::config::{OutputFormat, SchemeSelection, TintaConfig};

/// Resolve the configured palette, with `query` layered on top
pub fn resolve_palette(config: &TintaConfig, query: Option<&str>) -> Result<PaletteSpec> {
    let mut partial = config.palette.clone();
    if let Some(query) = query {
        let overrides = PartialPaletteSpec::from_query(query).context("Failed to parse --query")?;
        partial.merge(&overrides);
    }
    debug!(?partial, "resolving palette");

    resolve_hues(&partial, &PaletteSpec::standard()).context("Failed to resolve palette")
}

pub fn render_tree(tree: &ThemeTree, format: OutputFormat, scheme: SchemeSelection) -> Result<String> {
    match format {
        OutputFormat::Css => Ok(tree.to_css(scheme.schemes())?),
        OutputFormat::Json => {
            let json = match scheme {
                SchemeSelection::Both => serde_json::to_string_pretty(tree),
                SchemeSelection::Light => serde_json::to_string_pretty(tree.scheme(ColorScheme::Light)),
                SchemeSelection::Dark => serde_json::to_string_pretty(tree.scheme(ColorScheme::Dark)),
            };
            json.context("Failed to serialize theme")
        }
    }
}

pub fn build(palette: &PaletteSpec, format: OutputFormat, scheme: SchemeSelection) -> Result<String> {
    render_tree(&assemble(palette, &SpotPalette::standard()), format, scheme)
}

/// One line per tint stop, the stop nearest the mid point marked with `*`
pub fn render_scale(palette: &PaletteSpec, tone: ToneName) -> String {
    let hue = palette.get(tone);
    let scale = build_tint_scale(hue);
    let anchor = hue.mid_point.clamp(1, 999);
    let nearest = Tint::ALL
        .iter()
        .copied()
        .min_by_key(|tint| tint.value().abs_diff(anchor));

    let mut out = format!("{tone} (mid {} at {})\n", hue.mid, hue.mid_point);
    for (tint, color) in scale.iter() {
        let marker = if Some(tint) == nearest { "*" } else { " " };
        out.push_str(&format!("{marker}{:>4}  {color}\n", tint.value()));
    }
    out
}
