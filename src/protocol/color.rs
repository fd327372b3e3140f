//! RGB backlight colors.

use std::fmt;
use std::str::FromStr;

use crate::error::LcdError;

/// An RGB backlight color. Components are independent, 0-255 each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a CSS-style hex color: `#rrggbb`, `#rgb`, with or without `#`.
    ///
    /// ```
    /// use serial_lcd::protocol::color::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#ff8000").unwrap(), Rgb::new(255, 128, 0));
    /// assert_eq!(Rgb::from_hex("0f0").unwrap(), Rgb::new(0, 255, 0));
    /// assert!(Rgb::from_hex("#12345").is_err());
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, LcdError> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || LcdError::InvalidArgument(format!("Invalid hex color: {}", s));

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let component = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

        match hex.len() {
            6 => Ok(Self::new(
                component(&hex[0..2])?,
                component(&hex[2..4])?,
                component(&hex[4..6])?,
            )),
            // #rgb expands each digit: #f80 == #ff8800
            3 => {
                let r = component(&hex[0..1])?;
                let g = component(&hex[1..2])?;
                let b = component(&hex[2..3])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(invalid()),
        }
    }
}

impl FromStr for Rgb {
    type Err = LcdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_long() {
        assert_eq!(Rgb::from_hex("#000000").unwrap(), Rgb::default());
        assert_eq!(Rgb::from_hex("#FFFFFF").unwrap(), Rgb::WHITE);
        assert_eq!(Rgb::from_hex("#640064").unwrap(), Rgb::new(100, 0, 100));
    }

    #[test]
    fn test_from_hex_short() {
        assert_eq!(Rgb::from_hex("#f00").unwrap(), Rgb::RED);
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::WHITE);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#gg0000").is_err());
        assert!(Rgb::from_hex("#ff00").is_err());
        assert!(Rgb::from_hex("#ff00ff00").is_err());
        assert!(Rgb::from_hex("#ééé").is_err());
        assert!(Rgb::from_hex("#+f+f+f").is_err());
    }

    #[test]
    fn test_from_hex_single_hash_only() {
        assert_eq!(Rgb::from_hex("fff").unwrap(), Rgb::WHITE);
        assert!(Rgb::from_hex("##fff").is_err());
        assert!(Rgb::from_hex("##ffffff").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let c = Rgb::new(18, 52, 86);
        assert_eq!(c.to_string(), "#123456");
        assert_eq!(c.to_string().parse::<Rgb>().unwrap(), c);
    }
}
