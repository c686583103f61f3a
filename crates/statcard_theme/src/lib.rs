//! Statcard Theme System
//!
//! Resolves a visual-styling configuration ("design tokens") from named
//! presets or flat string key/value parameters, typically a parsed URL query
//! string.
//!
//! # Overview
//!
//! - **Design tokens**: colors, spacing, radius, density, light/dark mode
//! - **Presets**: named, fully-specified token snapshots with light and dark
//!   palettes
//! - **Radix translation**: Radix UI theme vocabulary (accent/gray color
//!   names, radius keywords, scaling percentages) mapped to concrete values
//! - **Motion tokens**: animation intensity levels with fixed duration and
//!   amplitude tables
//!
//! # Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use statcard_theme::{resolve, Mode};
//!
//! let mut params = HashMap::new();
//! params.insert("theme".to_string(), "nord-light".to_string());
//!
//! let tokens = resolve(&params);
//! assert_eq!(tokens.mode, Mode::Light);
//! assert_eq!(tokens.background, "#ECEFF4");
//! ```
//!
//! Resolution is a pure function over the input map: it never fails, touches
//! no shared state, and silently ignores unrecognized keys and malformed
//! values. Concurrent callers need no coordination.

mod css;
pub mod presets;
pub mod radix;
pub mod resolve;
pub mod tokens;

// Re-export commonly used types
pub use presets::{Palette, ThemePreset};
pub use resolve::{resolve, resolve_both_modes, resolve_motion};
pub use tokens::*;
