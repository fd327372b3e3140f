//! # Cursor Commands
//!
//! Positioning and styling of the text-entry cursor.
//!
//! ## Coordinates
//!
//! Columns and rows are **1-based**: the top-left cell is `(1, 1)`.
//!
//! ```text
//!        col 1                    col 16
//! row 1  │H│i│ │t│h│e│r│e│!│ │ │ │ │ │ │ │
//! row 2  │ │ │ │ │ │ │ │ │ │ │ │ │ │ │ │ │
//! ```
//!
//! Out-of-range positions are not checked here; the backpack clamps or
//! wraps them on its own.
//!
//! ## Cursor Styles
//!
//! The underline cursor and the blinking block cursor are independent. Each
//! state is its own opcode, so [`cursor_style`] emits two complete frames.

use super::commands::COMMAND;

/// Set cursor position (col, row), 1-based.
pub const SET_CURSOR_POSITION: u8 = 0x47;

/// Move the cursor to (1, 1).
pub const GO_HOME: u8 = 0x48;

/// Move the cursor back one cell, wrapping from (1, 1) to the last cell.
pub const CURSOR_BACK: u8 = 0x4C;

/// Move the cursor forward one cell, wrapping from the last cell to (1, 1).
pub const CURSOR_FORWARD: u8 = 0x4D;

/// Underline cursor state. The discriminant is the opcode.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnderlineCursor {
    On = 0x4A,
    #[default]
    Off = 0x4B,
}

impl UnderlineCursor {
    #[inline]
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}

/// Blinking block cursor state. The discriminant is the opcode.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockCursor {
    On = 0x53,
    #[default]
    Off = 0x54,
}

impl BlockCursor {
    #[inline]
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}

/// # Set Cursor Position (FE 47 col row)
///
/// ## Protocol Details
///
/// | Format  | Bytes           |
/// |---------|-----------------|
/// | Hex     | FE 47 col row   |
///
/// Column first, then row.
///
/// ## Example
///
/// ```
/// use serial_lcd::protocol::cursor;
///
/// // Second row, eighth column
/// assert_eq!(cursor::move_to(8, 2), vec![0xFE, 0x47, 8, 2]);
/// ```
#[inline]
pub fn move_to(col: u8, row: u8) -> Vec<u8> {
    vec![COMMAND, SET_CURSOR_POSITION, col, row]
}

/// # Go Home (FE 48)
#[inline]
pub fn home() -> Vec<u8> {
    vec![COMMAND, GO_HOME]
}

/// # Cursor Forward (FE 4D)
#[inline]
pub fn forward() -> Vec<u8> {
    vec![COMMAND, CURSOR_FORWARD]
}

/// # Cursor Back (FE 4C)
#[inline]
pub fn back() -> Vec<u8> {
    vec![COMMAND, CURSOR_BACK]
}

/// # Set Cursor Style (FE u FE b)
///
/// Two independent single-opcode frames, underline first, concatenated
/// into one buffer so they go out in a single write.
///
/// ## Example
///
/// ```
/// use serial_lcd::protocol::cursor::{self, BlockCursor, UnderlineCursor};
///
/// let hidden = cursor::cursor_style(UnderlineCursor::Off, BlockCursor::Off);
/// assert_eq!(hidden, vec![0xFE, 0x4B, 0xFE, 0x54]);
/// ```
#[inline]
pub fn cursor_style(underline: UnderlineCursor, block: BlockCursor) -> Vec<u8> {
    vec![COMMAND, underline.opcode(), COMMAND, block.opcode()]
}
