//! # Display Configuration
//!
//! This module defines geometry presets for the character LCDs the backpack
//! drives.
//!
//! ## Supported Panels
//!
//! | Model | Columns | Rows | Cells |
//! |-------|---------|------|-------|
//! | 16x2  | 16      | 2    | 32    |
//! | 20x4  | 20      | 4    | 80    |
//!
//! ## Usage
//!
//! ```
//! use serial_lcd::display::DisplayConfig;
//!
//! let config = DisplayConfig::LCD_16X2;
//! println!("{}: {} cells", config.name, config.capacity());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::LcdError;

/// Geometry of an attached character LCD.
///
/// The backpack stores its own copy of this (set with
/// [`crate::protocol::commands::lcd_size`]); this struct is the host-side
/// view used to size splash screens and walk the cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Panel name
    pub name: &'static str,

    /// Characters per row
    pub cols: u8,

    /// Number of rows
    pub rows: u8,
}

impl DisplayConfig {
    /// # 16x2 Panel
    ///
    /// The panel shipped with the backpack kit.
    pub const LCD_16X2: Self = Self {
        name: "16x2",
        cols: 16,
        rows: 2,
    };

    /// # 20x4 Panel
    pub const LCD_20X4: Self = Self {
        name: "20x4",
        cols: 20,
        rows: 4,
    };

    /// Custom geometry.
    pub const fn new(cols: u8, rows: u8) -> Self {
        Self {
            name: "custom",
            cols,
            rows,
        }
    }

    /// Number of character cells.
    ///
    /// ```
    /// use serial_lcd::display::DisplayConfig;
    ///
    /// assert_eq!(DisplayConfig::LCD_16X2.capacity(), 32);
    /// assert_eq!(DisplayConfig::LCD_20X4.capacity(), 80);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// 1-based (col, row) of the `n`th cell, wrapping past the last one.
    pub fn position(&self, n: usize) -> (u8, u8) {
        let cols = (self.cols as usize).max(1);
        let rows = (self.rows as usize).max(1);
        let n = n % (cols * rows);
        ((n % cols) as u8 + 1, (n / cols) as u8 + 1)
    }

    /// List the built-in presets.
    pub fn built_in() -> Vec<Self> {
        vec![Self::LCD_16X2, Self::LCD_20X4]
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::LCD_16X2
    }
}

impl FromStr for DisplayConfig {
    type Err = LcdError;

    /// Parse `"COLSxROWS"`, e.g. `"16x2"`. Built-in sizes keep their name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if let Some(preset) = Self::built_in().into_iter().find(|p| p.name == lower) {
            return Ok(preset);
        }

        let (cols, rows) = lower.split_once('x').ok_or_else(|| {
            LcdError::InvalidArgument(format!(
                "Invalid display size '{}'. Use COLSxROWS, e.g. 16x2",
                s
            ))
        })?;

        let cols: u8 = cols
            .parse()
            .map_err(|_| LcdError::InvalidArgument(format!("Invalid columns: {}", cols)))?;
        let rows: u8 = rows
            .parse()
            .map_err(|_| LcdError::InvalidArgument(format!("Invalid rows: {}", rows)))?;

        if cols == 0 || rows == 0 {
            return Err(LcdError::InvalidArgument(format!(
                "Display size must be non-zero: {}",
                s
            )));
        }

        Ok(Self::new(cols, rows))
    }
}

impl fmt::Display for DisplayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

// ============================================================================
// TESTS
// ============================================================================
