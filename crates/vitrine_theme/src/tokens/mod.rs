//! Style tokens
//!
//! - [`Color`]: concrete RGBA values for inline styles and CSS variables
//! - [`Swatch`], [`Hue`], [`Gradient`]: typed utility-class vocabulary

mod color;
mod swatch;

pub use color::*;
pub use swatch::*;
