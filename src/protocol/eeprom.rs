//! # Custom Character Banks
//!
//! The backpack keeps 4 EEPROM banks of 8 custom characters each. Glyphs
//! defined with [`super::glyph::create_custom_char`] live in RAM and are lost
//! at power-off; saving them to a bank keeps them, loading a bank copies
//! all 8 back into RAM.
//!
//! ## Functions
//!
//! | Opcode | Purpose |
//! |--------|---------|
//! | C1 | Save one RAM slot into a bank location |
//! | C0 | Load all 8 characters of a bank into RAM |
//!
//! Bank numbers are passed through unchecked.

use super::commands::COMMAND;

/// Save custom characters to an EEPROM bank.
pub const SAVE_CUSTOM_CHARACTER_TO_EEPROM_BANK: u8 = 0xC1;

/// Load custom characters from an EEPROM bank.
pub const LOAD_CUSTOM_CHARACTERS_FROM_EEPROM_BANK: u8 = 0xC0;

/// Number of EEPROM banks.
pub const BANKS: u8 = 4;

/// # Save Custom Characters (FE C1 bank)
///
/// ```
/// use serial_lcd::protocol::eeprom;
///
/// assert_eq!(eeprom::save_bank(1), vec![0xFE, 0xC1, 0x01]);
/// ```
#[inline]
pub fn save_bank(bank: u8) -> Vec<u8> {
    vec![COMMAND, SAVE_CUSTOM_CHARACTER_TO_EEPROM_BANK, bank]
}

/// # Load Custom Characters (FE C0 bank)
#[inline]
pub fn load_bank(bank: u8) -> Vec<u8> {
    vec![COMMAND, LOAD_CUSTOM_CHARACTERS_FROM_EEPROM_BANK, bank]
}
