//! Design tokens for theming
//!
//! Tokens are the atomic values handed to the rendering layer:
//! - Colors, radius, padding, density, and light/dark mode
//! - Layout constants (spacing scale, card dimensions, grid defaults)
//! - Motion (animation durations and amplitudes)

mod design;
mod layout;
mod motion;

pub use design::*;
pub use layout::*;
pub use motion::*;
