//! # serial-lcd - Character LCD Backpack Driver
//!
//! serial-lcd drives character LCDs attached to an Adafruit USB/serial RGB
//! backpack. It provides:
//!
//! - **Protocol implementation**: frame builders for every backpack command
//! - **Glyph compiler**: custom characters from ASCII-art rows
//! - **Driver**: [`Lcd`], with [`std::io::Write`] for plain text
//! - **Transport**: serial tty and in-memory sinks
//! - **Worker**: one thread owning the display, fed by many producers
//! - **Server**: a small web control panel
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::io::Write;
//! use serial_lcd::{
//!     Lcd,
//!     protocol::{cursor::{BlockCursor, UnderlineCursor}, glyph::Glyph},
//!     transport::SerialTransport,
//! };
//!
//! let mut lcd = Lcd::new(SerialTransport::open("/dev/ttyACM0", 9600)?);
//!
//! lcd.set_size(16, 2)?;
//! lcd.set_brightness(255)?;
//! lcd.set_contrast(200)?;
//! lcd.set_cursor(UnderlineCursor::Off, BlockCursor::Off)?;
//! lcd.set_background(0, 0, 255)?;
//! lcd.create_custom_char(0, &Glyph::HEART)?;
//! lcd.clear()?;
//! lcd.home()?;
//! write!(lcd, "Hi there! \x00")?;
//! lcd.close()?;
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Backpack command frame builders |
//! | [`lcd`] | The driver and the [`lcd::Command`] value type |
//! | [`worker`] | Single-writer display thread |
//! | [`transport`] | Communication backends |
//! | [`display`] | Panel geometry presets |
//! | [`server`] | HTTP control panel |
//! | [`demo`] | Hardware smoke test |
//! | [`error`] | Error types |
//!
//! ## Supported Hardware
//!
//! Tested with the Adafruit "USB + Serial Backpack Kit" on 16x2 and 20x4
//! RGB panels. Other backpacks that speak the Matrix Orbital-style `0xFE`
//! command set should work for the commands they share.

pub mod demo;
pub mod display;
pub mod error;
pub mod lcd;
pub mod protocol;
pub mod server;
pub mod transport;
pub mod worker;

// Re-exports for convenience
pub use display::DisplayConfig;
pub use error::LcdError;
pub use lcd::Lcd;
pub use transport::SerialTransport;
