//! # Serial Backpack Protocol Implementation
//!
//! This module provides low-level frame builders for the command protocol
//! spoken by the Adafruit USB/serial LCD backpack.
//!
//! ## Module Structure
//!
//! - [`commands`]: Command prefix, backlight, contrast, autoscroll, size, splash
//! - [`cursor`]: Cursor positioning and cursor style flags
//! - [`glyph`]: Custom character bitmaps and the glyph compiler
//! - [`eeprom`]: Saving and loading custom character banks
//! - [`color`]: RGB backlight colors
//!
//! ## Framing
//!
//! Every command is a single frame:
//!
//! ```text
//! ┌──────┬────────┬──────────────┐
//! │ 0xFE │ OPCODE │ ARGS (0-n)   │
//! └──────┴────────┴──────────────┘
//! ```
//!
//! Most commands take at most 9 argument bytes (a custom character takes
//! a slot and 8 rows). The splash frame is the exception: its arguments
//! are one full screen of text, `cols * rows` bytes.
//!
//! Bytes sent outside a frame are printed as literal characters at the
//! cursor position. Bytes `0x00`-`0x07` print the custom characters.
//!
//! ## Usage Example
//!
//! ```
//! use serial_lcd::protocol::{commands, cursor, glyph::{self, Glyph}};
//!
//! let mut data = Vec::new();
//! data.extend(commands::clear());
//! data.extend(glyph::create_custom_char(0, &Glyph::HEART));
//! data.extend(cursor::move_to(1, 2));
//! data.extend(b"I \x00 Rust");
//!
//! assert_eq!(&data[..2], &[0xFE, 0x58]);
//! ```
//!
//! ## Protocol Reference
//!
//! Based on the "USB + Serial Backpack Kit" command reference by Adafruit.

pub mod color;
pub mod commands;
pub mod cursor;
pub mod eeprom;
pub mod glyph;
