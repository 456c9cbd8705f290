//! Tinta theme engine
//!
//! Turns a compact palette (six semantic hues, each described by a lightest,
//! darkest and mid color) into a complete tree of design tokens for every
//! surface, sub-tone, interaction state and color scheme.
//!
//! The pipeline runs leaf-first:
//!
//! 1. [`resolve_hues`] merges caller overrides onto [`PaletteSpec::standard`]
//! 2. [`build_tint_scale`] expands every hue into an eleven-stop [`TintScale`]
//! 3. [`Deriver`] computes base, solid, muted, button, card, input,
//!    selectable, spot and syntax tokens
//! 4. [`assemble`] fans the derivers out over both schemes and all tones
//!
//! # Quick Start
//!
//! ```rust
//! use tinta_theme::{assemble_partial, ColorScheme, PartialPaletteSpec, ToneName};
//!
//! let partial = PartialPaletteSpec::from_query("primary=d946ef;lightest:fdf4ff").unwrap();
//! let tree = assemble_partial(&partial).unwrap();
//!
//! let page = tree.color(ColorScheme::Light, ToneName::Default);
//! assert_eq!(page.base.bg.to_css(), "#ffffff");
//! assert_eq!(page.solid.primary.enabled.bg.to_css(), "#d946ef");
//! ```

mod assemble;
mod css;
pub mod derive;
mod error;
mod hues;
mod query;
pub mod scale;
pub mod tokens;
pub mod tone;

pub use assemble::{assemble, assemble_partial, SchemeTokens, ThemeColor, ThemeTree};
pub use derive::{Deriver, SurfaceGroup, ToneScales};
pub use error::{HueField, Result, ThemeError};
pub use hues::{resolve_hues, HueSpec, PaletteSpec, PartialHueSpec, PartialPaletteSpec};
pub use scale::{build_tint_scale, SpotPalette, Tint, TintScale};
pub use tone::{ButtonMode, ColorScheme, InputMode, InputState, SpotHue, State, ToneName};

// Re-export the color model for downstream convenience
pub use tinta_color::{self as color, Rgba};
