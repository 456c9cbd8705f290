//! Tinta color model
//!
//! The leaf crate of the Tinta workspace. Everything else derives its colors
//! through the primitives defined here:
//!
//! - **Parsing**: hex (3/4/6/8 digits), `rgb()`/`rgba()`, `hsl()`/`hsla()` and
//!   CSS color keywords into [`Rgba`]
//! - **Conversion**: hex ↔ RGB and RGB ↔ HSL
//! - **Mixing**: alpha-aware weighted average ([`mix`])
//! - **Blending**: channel-wise [`BlendMode::Multiply`] and [`BlendMode::Screen`]
//!
//! # Quick Start
//!
//! ```rust
//! use tinta_color::{mix, BlendMode, Rgba};
//!
//! let blue: Rgba = "#2276fc".parse().unwrap();
//! let tint = mix(0.1, blue, Rgba::WHITE);
//! let on_white = BlendMode::Multiply.apply(Rgba::WHITE, tint);
//! assert_eq!(on_white, tint);
//! ```

mod blend;
mod error;
mod named;
pub mod parse;
mod rgba;

pub use blend::{blend_multiply, blend_screen, mix, to_rgba_string, BlendMode};
pub use error::{ColorError, Result};
pub use rgba::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, Hsl, Rgb, Rgba};
