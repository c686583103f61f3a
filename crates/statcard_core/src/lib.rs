//! Statcard core primitives
//!
//! Shared value types used by the statcard crates. The main export is
//! [`Color`], an RGBA value with a hex-string parser:
//!
//! ```rust
//! use statcard_core::Color;
//!
//! let accent = Color::parse("#1D4ED8").unwrap();
//! assert_eq!(accent, Color::from_hex(0x1D4ED8));
//!
//! assert!(Color::parse("not-a-color").is_err());
//! ```

pub mod color;

pub use color::{Color, ColorParseError};
