//! Token records
//!
//! The leaves of the theme tree. Every field is a concrete [`Rgba`]; the
//! serialized form renders each one as `#rrggbb` or `rgba(r,g,b,a)`.

use serde::Serialize;
use tinta_color::Rgba;

/// A single foreground color
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FgToken {
    pub fg: Rgba,
}

impl FgToken {
    pub const fn new(fg: Rgba) -> Self {
        Self { fg }
    }
}

/// Inline code colors
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CodeTokens {
    pub bg: Rgba,
    pub fg: Rgba,
}

/// Loading placeholder gradient
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SkeletonTokens {
    pub from: Rgba,
    pub to: Rgba,
}

/// Elevation shadow layers
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShadowTokens {
    pub outline: Rgba,
    pub umbra: Rgba,
    pub penumbra: Rgba,
    pub ambient: Rgba,
}

/// Ambient colors of one tone in one scheme
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseTokens {
    pub bg: Rgba,
    pub fg: Rgba,
    pub border: Rgba,
    pub focus_ring: Rgba,
    pub shadow: ShadowTokens,
    pub skeleton: SkeletonTokens,
}

/// Colors of a surface in one interaction state
///
/// Shared by the solid, muted, button, card and selectable groups.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StateTokens {
    pub bg: Rgba,
    pub bg2: Rgba,
    pub border: Rgba,
    pub fg: Rgba,
    pub muted: FgToken,
    pub accent: FgToken,
    pub link: FgToken,
    pub code: CodeTokens,
    pub skeleton: SkeletonTokens,
}

impl StateTokens {
    pub fn with_bg(self, bg: Rgba) -> Self {
        Self { bg, ..self }
    }

    pub fn with_border(self, border: Rgba) -> Self {
        Self { border, ..self }
    }
}

/// Colors of a text input in one state
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct InputTokens {
    pub bg: Rgba,
    pub fg: Rgba,
    pub border: Rgba,
    pub placeholder: Rgba,
}

/// Syntax highlighting colors by lexical category
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntaxTokens {
    pub atrule: Rgba,
    pub attr_name: Rgba,
    pub attr_value: Rgba,
    pub attribute: Rgba,
    pub boolean: Rgba,
    pub builtin: Rgba,
    pub cdata: Rgba,
    pub char: Rgba,
    pub class: Rgba,
    pub class_name: Rgba,
    pub comment: Rgba,
    pub constant: Rgba,
    pub deleted: Rgba,
    pub doctype: Rgba,
    pub entity: Rgba,
    pub function: Rgba,
    pub hexcode: Rgba,
    pub id: Rgba,
    pub important: Rgba,
    pub inserted: Rgba,
    pub keyword: Rgba,
    pub number: Rgba,
    pub operator: Rgba,
    pub prolog: Rgba,
    pub property: Rgba,
    pub pseudo_class: Rgba,
    pub pseudo_element: Rgba,
    pub punctuation: Rgba,
    pub regex: Rgba,
    pub selector: Rgba,
    pub string: Rgba,
    pub symbol: Rgba,
    pub tag: Rgba,
    pub unit: Rgba,
    pub url: Rgba,
    pub variable: Rgba,
}
