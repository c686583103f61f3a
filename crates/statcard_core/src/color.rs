//! RGBA color value and hex-string parsing

use nom::bytes::complete::take_while1;
use nom::character::complete::char;
use nom::error::{Error as NomError, ErrorKind, ParseError};
use nom::IResult;
use thiserror::Error;

/// Error returned when a string is not a valid hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// RGBA color (linear space)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Parse a hex color string: `#RGB`, `#RRGGBB`, or `#RRGGBBAA`.
    ///
    /// The leading `#` is required and the whole input must be consumed.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();
        match parse_hex_color::<NomError<&str>>(input) {
            Ok(("", color)) => Ok(color),
            _ => Err(ColorParseError::InvalidHex(input.to_string())),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Parse hex color: #RGB, #RRGGBB, or #RRGGBBAA
fn parse_hex_color<'a, E: ParseError<&'a str>>(input: &'a str) -> IResult<&'a str, Color, E> {
    let (input, _) = char('#')(input)?;
    let (input, hex) = take_while1(|c: char| c.is_ascii_hexdigit())(input)?;

    let hex_err = || nom::Err::Error(E::from_error_kind(input, ErrorKind::HexDigit));

    let color = match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).map_err(|_| hex_err())?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).map_err(|_| hex_err())?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).map_err(|_| hex_err())?;
            Color::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| hex_err())?;
            let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| hex_err())?;
            let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| hex_err())?;
            Color::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
        }
        8 => {
            let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| hex_err())?;
            let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| hex_err())?;
            let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| hex_err())?;
            let a = u8::from_str_radix(&hex[6..8], 16).map_err(|_| hex_err())?;
            Color::rgba(
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
                a as f32 / 255.0,
            )
        }
        _ => return Err(hex_err()),
    };

    Ok((input, color))
}
