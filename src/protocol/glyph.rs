//! # Custom Characters
//!
//! The backpack has 8 RAM slots (0-7) for user-defined 5x8 characters.
//! Once defined, writing byte `0x00`-`0x07` prints the glyph in that slot.
//!
//! ## Bitmap Layout
//!
//! One byte per pixel row, top row first. Only the low 5 bits are used,
//! bit 4 is the leftmost pixel:
//!
//! ```text
//! row  pattern   byte
//!  0   .....     0b00000
//!  1   .*.*.     0b01010
//!  2   *.*.*     0b10101
//!  3   *...*     0b10001
//!  4   *...*     0b10001
//!  5   .*.*.     0b01010
//!  6   ..*..     0b00100
//!  7   .....     0b00000
//! ```
//!
//! ## Authoring
//!
//! [`Glyph::compile`] turns 8 rows of text into a glyph. A space or a
//! period is an unlit pixel, any other character is lit.

use crate::error::LcdError;

use super::commands::COMMAND;

/// Define a custom character: slot, then 8 bitmap bytes.
pub const CREATE_CUSTOM_CHARACTER: u8 = 0x4E;

/// Number of custom character slots.
pub const SLOTS: u8 = 8;

/// Pixel rows per glyph.
pub const ROWS: usize = 8;

/// Pixel columns per glyph.
pub const COLS: usize = 5;

/// A compiled 5x8 custom character bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Glyph([u8; ROWS]);

impl Glyph {
    /// A small heart, handy for checking that uploads work.
    pub const HEART: Self = Self([
        0b00000, 0b01010, 0b10101, 0b10001, 0b10001, 0b01010, 0b00100, 0b00000,
    ]);

    /// Every pixel lit.
    pub const FULL: Self = Self([0b11111; ROWS]);

    /// Wrap raw row bytes. Bits above the low 5 are sent as-is; the
    /// backpack ignores them.
    #[inline]
    pub const fn from_bytes(rows: [u8; ROWS]) -> Self {
        Self(rows)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; ROWS] {
        &self.0
    }

    /// Compile 8 text rows into a glyph.
    ///
    /// Each character shifts the row left by one bit and sets the low bit
    /// unless the character is `' '` or `'.'`. Rows are meant to be 5
    /// characters wide but are not checked: a longer row pushes its first
    /// characters out of the byte, a shorter row leaves the leftmost
    /// pixels dark and shifts the pattern right.
    ///
    /// ```
    /// use serial_lcd::protocol::glyph::Glyph;
    ///
    /// let heart = Glyph::compile([
    ///     ".....",
    ///     ".*.*.",
    ///     "*.*.*",
    ///     "*...*",
    ///     "*...*",
    ///     ".*.*.",
    ///     "..*..",
    ///     ".....",
    /// ]);
    /// assert_eq!(heart, Glyph::HEART);
    /// ```
    pub fn compile(rows: [&str; ROWS]) -> Self {
        let mut bitmap = [0u8; ROWS];
        for (byte, row) in bitmap.iter_mut().zip(rows) {
            *byte = compile_row(row);
        }
        Self(bitmap)
    }

    /// Strictly parse a glyph from text, one row per line.
    ///
    /// Unlike [`Glyph::compile`], this rejects anything that is not exactly
    /// 8 rows of exactly 5 characters. Blank lines and trailing whitespace
    /// at line ends are ignored, so files can be indented or padded.
    pub fn parse(text: &str) -> Result<Self, LcdError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();

        if rows.len() != ROWS {
            return Err(LcdError::Glyph(format!(
                "expected {} rows, found {}",
                ROWS,
                rows.len()
            )));
        }

        let mut bitmap = [0u8; ROWS];
        for (i, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != COLS {
                return Err(LcdError::Glyph(format!(
                    "row {} is {} characters wide, expected {}",
                    i + 1,
                    width,
                    COLS
                )));
            }
            bitmap[i] = compile_row(row);
        }

        Ok(Self(bitmap))
    }
}

fn compile_row(row: &str) -> u8 {
    row.chars().fold(0u8, |pixels, c| {
        let lit = c != '.' && c != ' ';
        (pixels << 1) | u8::from(lit)
    })
}

/// # Create Custom Character (FE 4E slot b0..b7)
///
/// ## Protocol Details
///
/// | Format  | Bytes                         |
/// |---------|-------------------------------|
/// | Hex     | FE 4E slot b0 b1 ... b7       |
///
/// 11 bytes total. Overwrites the RAM slot; see [`super::eeprom`] to keep
/// glyphs across power cycles.
///
/// ## Parameters
///
/// - `slot`: 0-7. Passed through unchecked.
///
/// ## Example
///
/// ```
/// use serial_lcd::protocol::glyph::{self, Glyph};
///
/// let frame = glyph::create_custom_char(0, &Glyph::default());
/// assert_eq!(frame, vec![0xFE, 0x4E, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
/// ```
pub fn create_custom_char(slot: u8, glyph: &Glyph) -> Vec<u8> {
    let mut data = Vec::with_capacity(3 + ROWS);
    data.extend([COMMAND, CREATE_CUSTOM_CHARACTER, slot]);
    data.extend(glyph.as_bytes());
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    const DARK: [&str; ROWS] = ["....."; ROWS];

    #[test]
    fn test_compile_all_off() {
        assert_eq!(Glyph::compile(DARK).as_bytes(), &[0u8; ROWS]);
        assert_eq!(Glyph::compile(["     "; ROWS]).as_bytes(), &[0u8; ROWS]);
    }

    #[test]
    fn test_compile_all_on() {
        assert_eq!(Glyph::compile(["*****"; ROWS]), Glyph::FULL);
        assert_eq!(Glyph::compile(["#X@o1"; ROWS]).as_bytes(), &[0x1F; ROWS]);
    }

    #[test]
    fn test_compile_leftmost_is_high_bit() {
        let mut rows = DARK;
        rows[0] = "*....";
        rows[7] = "....*";
        let glyph = Glyph::compile(rows);
        assert_eq!(glyph.as_bytes()[0], 0b10000);
        assert_eq!(glyph.as_bytes()[7], 0b00001);
    }

    #[test]
    fn test_compile_preserves_row_order() {
        let rows = ["*....", ".*...", "..*..", "...*.", "....*", ".....", ".....", "....."];
        assert_eq!(
            Glyph::compile(rows).as_bytes(),
            &[0x10, 0x08, 0x04, 0x02, 0x01, 0, 0, 0]
        );
    }

    #[test]
    fn test_compile_is_deterministic() {
        let rows = [".*.*.", "*****", "..*..", ".....", "*...*", ".***.", "*.*.*", "....."];
        assert_eq!(Glyph::compile(rows), Glyph::compile(rows));
    }

    #[test]
    fn test_compile_short_row_shifts_right() {
        let mut rows = DARK;
        rows[0] = "**";
        rows[1] = "";
        let glyph = Glyph::compile(rows);
        assert_eq!(glyph.as_bytes()[0], 0b00011);
        assert_eq!(glyph.as_bytes()[1], 0);
    }

    #[test]
    fn test_compile_long_row_drops_early_pixels() {
        let mut rows = DARK;
        // 9 lit pixels then 1 dark: only the last 8 survive in the byte
        rows[0] = "*********.";
        assert_eq!(Glyph::compile(rows).as_bytes()[0], 0b1111_1110);
    }

    #[test]
    fn test_parse_heart() {
        let text = "\
.....
.*.*.
*.*.*
*...*
*...*
.*.*.
..*..
.....
";
        assert_eq!(Glyph::parse(text).unwrap(), Glyph::HEART);
    }

    #[test]
    fn test_parse_rejects_row_count() {
        let err = Glyph::parse("*****\n*****\n").unwrap_err();
        assert!(matches!(err, LcdError::Glyph(_)));
        assert!(err.to_string().contains("expected 8 rows, found 2"));
    }

    #[test]
    fn test_parse_rejects_row_width() {
        let text = ".....\n.....\n......\n.....\n.....\n.....\n.....\n.....";
        let err = Glyph::parse(text).unwrap_err();
        assert!(err.to_string().contains("row 3 is 6 characters wide"));
    }

    #[test]
    fn test_parse_ignores_blank_lines() {
        let text = "\n*****\n\n*****\n*****\n*****\n*****\n*****\n*****\n*****   \n\n";
        assert_eq!(Glyph::parse(text).unwrap(), Glyph::FULL);
    }

    #[test]
    fn test_create_custom_char_layout() {
        let frame = create_custom_char(7, &Glyph::HEART);
        assert_eq!(frame.len(), 11);
        assert_eq!(&frame[..3], &[0xFE, 0x4E, 0x07]);
        assert_eq!(&frame[3..], Glyph::HEART.as_bytes());
    }

    #[test]
    fn test_create_custom_char_blank_slot_zero() {
        assert_eq!(
            create_custom_char(0, &Glyph::from_bytes([0; ROWS])),
            vec![0xFE, 0x4E, 0x00, 0, 0, 0, 0, 0, 0, 0, 0]
        );
    }
}
