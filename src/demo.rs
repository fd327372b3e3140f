//! # Hardware Demo
//!
//! Exercises a freshly wired display: writes text, sweeps the backlight
//! through the color wheel on one thread while another draws a trail of
//! characters, then uploads a custom heart glyph and prints it.
//!
//! Both threads feed the same [`WorkerHandle`], which is what keeps their
//! frames from interleaving on the wire.
//!
//! The pacing delays are there for the hardware: the backpack drops bytes
//! if commands arrive faster than it can apply them.

use std::thread;
use std::time::Duration;

use crate::{
    display::DisplayConfig,
    error::LcdError,
    lcd::Command,
    protocol::{
        color::Rgb,
        cursor::{BlockCursor, UnderlineCursor},
        glyph::Glyph,
    },
    worker::WorkerHandle,
};

/// Number of characters drawn by [`star_trail`].
pub const TRAIL_LENGTH: usize = 100;

/// Delay between commands.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    /// After each setup command
    pub command: Duration,
    /// Between backlight color steps
    pub color_step: Duration,
    /// Between trail characters
    pub trail_step: Duration,
    /// Pauses between demo phases
    pub phase: Duration,
}

impl Pacing {
    /// Delays that work on a real backpack.
    pub const HARDWARE: Self = Self {
        command: Duration::from_millis(10),
        color_step: Duration::from_millis(1),
        trail_step: Duration::from_millis(10),
        phase: Duration::from_millis(1000),
    };

    /// No delays, for tests and dry runs.
    pub const NONE: Self = Self {
        command: Duration::ZERO,
        color_step: Duration::ZERO,
        trail_step: Duration::ZERO,
        phase: Duration::ZERO,
    };
}

impl Default for Pacing {
    fn default() -> Self {
        Self::HARDWARE
    }
}

/// Blue → red → green → blue, one step per component value.
pub fn color_wheel() -> impl Iterator<Item = Rgb> {
    let red_up = (0..255u8).map(|v| Rgb::new(v, 0, 255 - v));
    let green_up = (0..255u8).map(|v| Rgb::new(255 - v, v, 0));
    let blue_up = (0..255u8).map(|v| Rgb::new(0, 255 - v, v));
    red_up.chain(green_up).chain(blue_up)
}

/// Batches that walk every cell writing `*`, `+`, `,`, `-`, `.` in turn.
pub fn star_trail(display: &DisplayConfig) -> impl Iterator<Item = Vec<Command>> + '_ {
    (0..TRAIL_LENGTH).map(move |i| {
        let (col, row) = display.position(i);
        vec![
            Command::MoveTo { col, row },
            Command::Raw(vec![b'*' + (i % 5) as u8]),
        ]
    })
}

/// Configure the panel and print a message with the heart glyph.
pub fn setup(display: &DisplayConfig) -> Vec<Command> {
    vec![
        Command::Size {
            cols: display.cols,
            rows: display.rows,
        },
        Command::Contrast(200),
        Command::Brightness(255),
        Command::Cursor(UnderlineCursor::Off, BlockCursor::Off),
        Command::CreateChar {
            slot: 0,
            glyph: Glyph::HEART,
        },
        Command::Clear,
        Command::Home,
        Command::text(" I \x00 serial LCDs"),
        Command::MoveTo { col: 1, row: 2 },
        Command::text("   - serial-lcd"),
    ]
}

/// Run the whole demo against `lcd`.
pub fn run(lcd: &WorkerHandle, display: &DisplayConfig, pacing: Pacing) -> Result<(), LcdError> {
    lcd.run(vec![
        Command::Clear,
        Command::Backlight(true),
        Command::Cursor(UnderlineCursor::Off, BlockCursor::Off),
        Command::MoveTo { col: 8, row: 2 },
        Command::text("xyz"),
    ])?;
    thread::sleep(pacing.phase);

    let colors = {
        let lcd = lcd.clone();
        thread::spawn(move || -> Result<(), LcdError> {
            for color in color_wheel() {
                lcd.run(vec![Command::Background(color)])?;
                thread::sleep(pacing.color_step);
            }
            Ok(())
        })
    };

    for batch in star_trail(display) {
        lcd.run(batch)?;
        thread::sleep(pacing.trail_step);
    }

    thread::sleep(pacing.phase / 4);

    for command in setup(display) {
        lcd.run(vec![command])?;
        thread::sleep(pacing.command);
    }

    colors
        .join()
        .map_err(|_| LcdError::Transport(std::io::Error::other("color thread panicked")))??;

    thread::sleep(pacing.phase * 3);
    lcd.run(vec![Command::Background(Rgb::new(100, 0, 100))])
}
