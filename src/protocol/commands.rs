//! # Backpack Protocol Commands
//!
//! This module implements the basic command set of the Adafruit USB/serial
//! LCD backpack: backlight, brightness, contrast, clearing, autoscroll, LCD
//! size and the startup splash.
//!
//! ## Protocol Overview
//!
//! The backpack is fire-and-forget. The host writes bytes, the backpack
//! never answers. Anything that is not a frame is printed as text.
//!
//! ## Frame Structure
//!
//! - Single opcode: `FE 58` (clear)
//! - Opcode with arguments: `FE 99 n` (brightness), `FE D0 r g b` (color)
//!
//! Some settings are *states encoded as opcodes*: autoscroll on is `FE 51`,
//! off is `FE 52`. These are modelled as `#[repr(u8)]` enums so only valid
//! opcodes can be built.
//!
//! ## Persistence
//!
//! `SET_RGB_BACKLIGHT_COLOR` and `SET_LCD_SIZE` are saved to the backpack's
//! EEPROM. Avoid calling them in tight loops on real hardware.

use crate::display::DisplayConfig;

use super::color::Rgb;

// ============================================================================
// FRAME PREFIX
// ============================================================================

/// COMMAND - Frame prefix byte
///
/// Every command frame begins with 0xFE. Any other byte is printed.
pub const COMMAND: u8 = 0xFE;

// ============================================================================
// OPCODES
// ============================================================================

/// Turn the backlight on. Followed by one ignored argument byte.
pub const BACKLIGHT_ON: u8 = 0x42;

/// Turn the backlight off.
pub const BACKLIGHT_OFF: u8 = 0x46;

/// Set backlight brightness, 0-255.
pub const BRIGHTNESS: u8 = 0x99;

/// Set contrast, 0-255.
pub const CONTRAST: u8 = 0x91;

/// Clear the display.
pub const CLEAR: u8 = 0x58;

/// Set the startup splash. Followed by one screenful of characters.
pub const SET_STARTUP_SPLASH: u8 = 0x40;

/// Set the RGB backlight color (persisted).
pub const SET_RGB_BACKLIGHT_COLOR: u8 = 0xD0;

/// Set the attached LCD's geometry (persisted).
pub const SET_LCD_SIZE: u8 = 0xD1;

// ============================================================================
// BACKLIGHT COMMANDS
// ============================================================================

/// # Backlight On (FE 42 00)
///
/// Turns the backlight on.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | Hex     | FE 42 00 |
///
/// The backpack reads one argument byte after the opcode and ignores it.
/// Leaving it out makes the backpack swallow the next byte you send.
///
/// ## Example
///
/// ```
/// use serial_lcd::protocol::commands;
///
/// assert_eq!(commands::backlight_on(), vec![0xFE, 0x42, 0x00]);
/// ```
#[inline]
pub fn backlight_on() -> Vec<u8> {
    vec![COMMAND, BACKLIGHT_ON, 0]
}

/// # Backlight Off (FE 46)
#[inline]
pub fn backlight_off() -> Vec<u8> {
    vec![COMMAND, BACKLIGHT_OFF]
}

/// Backlight on or off depending on `on`.
#[inline]
pub fn backlight(on: bool) -> Vec<u8> {
    if on { backlight_on() } else { backlight_off() }
}

/// # Set Brightness (FE 99 n)
///
/// ## Parameters
///
/// - `n`: 0 = dimmest, 255 = brightest
///
/// ## Example
///
/// ```
/// use serial_lcd::protocol::commands;
///
/// assert_eq!(commands::brightness(255), vec![0xFE, 0x99, 0xFF]);
/// ```
#[inline]
pub fn brightness(n: u8) -> Vec<u8> {
    vec![COMMAND, BRIGHTNESS, n]
}

/// # Set Contrast (FE 91 n)
///
/// The scale is panel-specific; around 200 reads well on most 16x2 panels.
#[inline]
pub fn contrast(n: u8) -> Vec<u8> {
    vec![COMMAND, CONTRAST, n]
}

/// # Set RGB Backlight Color (FE D0 r g b)
///
/// ## Protocol Details
///
/// | Format  | Bytes          |
/// |---------|----------------|
/// | Hex     | FE D0 rr gg bb |
///
/// ## Parameters
///
/// Each component is 0-255 and sent as-is, red first. Red is
/// `FE D0 FF 00 00`, white is `FE D0 FF FF FF`.
///
/// ## Persistence
///
/// The color is written to EEPROM and restored on power-up.
///
/// ## Example
///
/// ```
/// use serial_lcd::protocol::{color::Rgb, commands};
///
/// let blue = commands::rgb_backlight(Rgb::new(0, 0, 255));
/// assert_eq!(blue, vec![0xFE, 0xD0, 0x00, 0x00, 0xFF]);
/// ```
#[inline]
pub fn rgb_backlight(color: Rgb) -> Vec<u8> {
    vec![COMMAND, SET_RGB_BACKLIGHT_COLOR, color.r, color.g, color.b]
}

// ============================================================================
// DISPLAY COMMANDS
// ============================================================================

/// # Clear Display (FE 58)
///
/// Blanks every character cell. The cursor position is not reset; follow
/// with [`super::cursor::home`] before writing new text.
#[inline]
pub fn clear() -> Vec<u8> {
    vec![COMMAND, CLEAR]
}

/// Autoscroll behaviour when text runs past the last cell.
///
/// The discriminant is the opcode itself.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Autoscroll {
    /// Scroll lines up so the newest text is always on the bottom row.
    #[default]
    On = 0x51,
    /// Wrap around to the top-left cell.
    Off = 0x52,
}

impl Autoscroll {
    /// The opcode byte for this state.
    #[inline]
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Autoscroll {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

/// # Set Autoscroll (FE 51 / FE 52)
///
/// ## Example
///
/// ```
/// use serial_lcd::protocol::commands::{self, Autoscroll};
///
/// assert_eq!(commands::autoscroll(Autoscroll::Off), vec![0xFE, 0x52]);
/// ```
#[inline]
pub fn autoscroll(state: Autoscroll) -> Vec<u8> {
    vec![COMMAND, state.opcode()]
}

/// # Set LCD Size (FE D1 cols rows)
///
/// Tells the backpack what panel is attached. Saved to EEPROM, so this
/// only needs to happen once per panel.
#[inline]
pub fn lcd_size(cols: u8, rows: u8) -> Vec<u8> {
    vec![COMMAND, SET_LCD_SIZE, cols, rows]
}

/// # Set Startup Splash (FE 40 chars...)
///
/// The backpack reads exactly one screenful of characters after the opcode
/// (32 for a 16x2 panel, 80 for 20x4) and shows them at power-up.
///
/// ## Behavior
///
/// `text` is truncated to the display capacity and padded with spaces, so
/// the backpack never consumes bytes belonging to the next command. An
/// empty `text` clears the splash.
///
/// ## Example
///
/// ```
/// use serial_lcd::{display::DisplayConfig, protocol::commands};
///
/// let frame = commands::splash("Hello", &DisplayConfig::LCD_16X2);
/// assert_eq!(frame.len(), 2 + 32);
/// assert_eq!(&frame[..7], &[0xFE, 0x40, b'H', b'e', b'l', b'l', b'o']);
/// assert_eq!(frame[7], b' ');
/// ```
pub fn splash(text: &str, display: &DisplayConfig) -> Vec<u8> {
    let capacity = display.capacity();
    let mut data = Vec::with_capacity(2 + capacity);
    data.push(COMMAND);
    data.push(SET_STARTUP_SPLASH);
    data.extend(text.bytes().take(capacity));
    data.resize(2 + capacity, b' ');
    data
}

// ============================================================================
// TESTS
// ============================================================================
