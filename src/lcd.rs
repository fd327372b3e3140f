//! # LCD Driver
//!
//! [`Lcd`] wraps a [`Transport`] and turns each display operation into one
//! write of one or more complete frames.
//!
//! ## Writing Text
//!
//! `Lcd` implements [`std::io::Write`], so text goes straight to the
//! display at the cursor position:
//!
//! ```
//! use std::io::Write;
//! use serial_lcd::{Lcd, transport::MemoryTransport};
//!
//! let probe = MemoryTransport::new();
//! let mut lcd = Lcd::new(probe.clone());
//!
//! lcd.clear()?;
//! lcd.home()?;
//! write!(lcd, "Hi there!")?;
//!
//! assert_eq!(&probe.contents()[4..], b"Hi there!");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Ordering
//!
//! Methods take `&mut self`; one `Lcd` has one writer at a time. To drive a
//! display from several threads, hand it to a [`crate::worker::Worker`].

use std::io;

use crate::{
    display::DisplayConfig,
    error::LcdError,
    protocol::{
        color::Rgb,
        commands::{self, Autoscroll},
        cursor::{self, BlockCursor, UnderlineCursor},
        eeprom,
        glyph::{self, Glyph},
    },
    transport::Transport,
};

/// One display operation, as a value.
///
/// Used to move operations between threads (see [`crate::worker`]) and to
/// build request batches in the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Background(Rgb),
    Backlight(bool),
    Brightness(u8),
    Contrast(u8),
    Autoscroll(Autoscroll),
    Size { cols: u8, rows: u8 },
    Clear,
    Cursor(UnderlineCursor, BlockCursor),
    Home,
    MoveTo { col: u8, row: u8 },
    MoveForward,
    MoveBack,
    CreateChar { slot: u8, glyph: Glyph },
    SaveChars { bank: u8 },
    LoadChars { bank: u8 },
    Splash { text: String, display: DisplayConfig },
    Raw(Vec<u8>),
}

impl Command {
    /// Literal text, sent without framing.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Raw(text.into().into_bytes())
    }

    /// The exact bytes this command puts on the wire.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Background(color) => commands::rgb_backlight(*color),
            Self::Backlight(on) => commands::backlight(*on),
            Self::Brightness(n) => commands::brightness(*n),
            Self::Contrast(n) => commands::contrast(*n),
            Self::Autoscroll(state) => commands::autoscroll(*state),
            Self::Size { cols, rows } => commands::lcd_size(*cols, *rows),
            Self::Clear => commands::clear(),
            Self::Cursor(underline, block) => cursor::cursor_style(*underline, *block),
            Self::Home => cursor::home(),
            Self::MoveTo { col, row } => cursor::move_to(*col, *row),
            Self::MoveForward => cursor::forward(),
            Self::MoveBack => cursor::back(),
            Self::CreateChar { slot, glyph } => glyph::create_custom_char(*slot, glyph),
            Self::SaveChars { bank } => eeprom::save_bank(*bank),
            Self::LoadChars { bank } => eeprom::load_bank(*bank),
            Self::Splash { text, display } => commands::splash(text, display),
            Self::Raw(bytes) => bytes.clone(),
        }
    }
}

/// A character LCD behind a backpack.
///
/// Holds no protocol state: every call encodes a frame and writes it.
#[derive(Debug)]
pub struct Lcd<T: Transport> {
    transport: T,
}

impl<T: Transport> Lcd<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Give back the transport without closing it.
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Close the transport.
    pub fn close(mut self) -> Result<(), LcdError> {
        self.transport.close()?;
        Ok(())
    }

    /// Write bytes verbatim, no framing.
    pub fn raw(&mut self, bytes: &[u8]) -> Result<(), LcdError> {
        self.send(bytes)
    }

    /// Apply a [`Command`].
    pub fn apply(&mut self, command: &Command) -> Result<(), LcdError> {
        match command {
            Command::Raw(bytes) => self.send(bytes),
            other => self.send(&other.encode()),
        }
    }

    /// Set the RGB backlight color. Persisted by the backpack.
    pub fn set_background(&mut self, r: u8, g: u8, b: u8) -> Result<(), LcdError> {
        self.send(&commands::rgb_backlight(Rgb::new(r, g, b)))
    }

    pub fn backlight_on(&mut self) -> Result<(), LcdError> {
        self.send(&commands::backlight_on())
    }

    pub fn backlight_off(&mut self) -> Result<(), LcdError> {
        self.send(&commands::backlight_off())
    }

    pub fn set_backlight(&mut self, on: bool) -> Result<(), LcdError> {
        self.send(&commands::backlight(on))
    }

    /// 0 is dimmest, 255 brightest.
    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), LcdError> {
        self.send(&commands::brightness(brightness))
    }

    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), LcdError> {
        self.send(&commands::contrast(contrast))
    }

    pub fn set_autoscroll(&mut self, state: Autoscroll) -> Result<(), LcdError> {
        self.send(&commands::autoscroll(state))
    }

    /// Tell the backpack the panel geometry. Persisted by the backpack.
    pub fn set_size(&mut self, cols: u8, rows: u8) -> Result<(), LcdError> {
        self.send(&commands::lcd_size(cols, rows))
    }

    pub fn clear(&mut self) -> Result<(), LcdError> {
        self.send(&commands::clear())
    }

    /// Set both cursor styles. Both frames go out in one write; if it
    /// fails, assume neither arrived.
    pub fn set_cursor(
        &mut self,
        underline: UnderlineCursor,
        block: BlockCursor,
    ) -> Result<(), LcdError> {
        self.send(&cursor::cursor_style(underline, block))
    }

    /// Move the cursor to (1, 1).
    pub fn home(&mut self) -> Result<(), LcdError> {
        self.send(&cursor::home())
    }

    /// Move the cursor; `col` and `row` start at 1.
    pub fn move_to(&mut self, col: u8, row: u8) -> Result<(), LcdError> {
        self.send(&cursor::move_to(col, row))
    }

    pub fn move_forward(&mut self) -> Result<(), LcdError> {
        self.send(&cursor::forward())
    }

    pub fn move_back(&mut self) -> Result<(), LcdError> {
        self.send(&cursor::back())
    }

    /// Upload a glyph into RAM slot `slot` (0-7).
    pub fn create_custom_char(&mut self, slot: u8, glyph: &Glyph) -> Result<(), LcdError> {
        self.send(&glyph::create_custom_char(slot, glyph))
    }

    pub fn save_custom_chars(&mut self, bank: u8) -> Result<(), LcdError> {
        self.send(&eeprom::save_bank(bank))
    }

    pub fn load_custom_chars(&mut self, bank: u8) -> Result<(), LcdError> {
        self.send(&eeprom::load_bank(bank))
    }

    /// Set the power-up splash, padded or cut to one screenful.
    pub fn set_splash(&mut self, text: &str, display: &DisplayConfig) -> Result<(), LcdError> {
        self.send(&commands::splash(text, display))
    }

    fn send(&mut self, frame: &[u8]) -> Result<(), LcdError> {
        self.write_frame(frame)?;
        Ok(())
    }

    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        match frame {
            [commands::COMMAND, opcode, ..] => {
                tracing::debug!(opcode = *opcode, len = frame.len(), "frame");
            }
            _ => tracing::debug!(len = frame.len(), "raw"),
        }
        self.transport.write_all(frame)
    }
}

/// Raw text stream. A successful write always reports the whole buffer.
impl<T: Transport> io::Write for Lcd<T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_frame(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.transport.flush()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::transport::MemoryTransport;

    fn lcd() -> (Lcd<MemoryTransport>, MemoryTransport) {
        let probe = MemoryTransport::new();
        (Lcd::new(probe.clone()), probe)
    }

    #[test]
    fn test_each_operation_is_one_write() {
        let (mut lcd, probe) = lcd();
        lcd.set_background(1, 2, 3).unwrap();
        lcd.set_cursor(UnderlineCursor::Off, BlockCursor::Off).unwrap();
        lcd.create_custom_char(0, &Glyph::HEART).unwrap();
        assert_eq!(probe.write_count(), 3);
    }

    #[test]
    fn test_set_background() {
        let (mut lcd, probe) = lcd();
        lcd.set_background(0, 128, 255).unwrap();
        assert_eq!(probe.contents(), vec![0xFE, 0xD0, 0, 128, 255]);
    }

    #[test]
    fn test_backlight() {
        let (mut lcd, probe) = lcd();
        lcd.backlight_on().unwrap();
        lcd.backlight_off().unwrap();
        lcd.set_backlight(true).unwrap();
        assert_eq!(
            probe.contents(),
            vec![0xFE, 0x42, 0x00, 0xFE, 0x46, 0xFE, 0x42, 0x00]
        );
    }

    #[test]
    fn test_settings() {
        let (mut lcd, probe) = lcd();
        lcd.set_brightness(255).unwrap();
        lcd.set_contrast(200).unwrap();
        lcd.set_autoscroll(Autoscroll::On).unwrap();
        lcd.set_size(16, 2).unwrap();
        assert_eq!(
            probe.contents(),
            vec![0xFE, 0x99, 255, 0xFE, 0x91, 200, 0xFE, 0x51, 0xFE, 0xD1, 16, 2]
        );
    }

    #[test]
    fn test_cursor_movement() {
        let (mut lcd, probe) = lcd();
        lcd.clear().unwrap();
        lcd.home().unwrap();
        lcd.move_to(8, 2).unwrap();
        lcd.move_forward().unwrap();
        lcd.move_back().unwrap();
        assert_eq!(
            probe.contents(),
            vec![0xFE, 0x58, 0xFE, 0x48, 0xFE, 0x47, 8, 2, 0xFE, 0x4D, 0xFE, 0x4C]
        );
    }

    #[test]
    fn test_eeprom_banks() {
        let (mut lcd, probe) = lcd();
        lcd.save_custom_chars(2).unwrap();
        lcd.load_custom_chars(2).unwrap();
        assert_eq!(probe.contents(), vec![0xFE, 0xC1, 2, 0xFE, 0xC0, 2]);
    }

    #[test]
    fn test_io_write_is_raw() {
        let (mut lcd, probe) = lcd();
        write!(lcd, "Hi").unwrap();
        assert_eq!(probe.contents(), b"Hi");
    }

    #[test]
    fn test_io_write_reports_full_length() {
        let (mut lcd, _) = lcd();
        assert_eq!(io::Write::write(&mut lcd, b"hello").unwrap(), 5);
    }

    #[test]
    fn test_failure_propagates_unchanged() {
        let mut lcd = Lcd::new(MemoryTransport::failing(io::ErrorKind::BrokenPipe));
        match lcd.clear().unwrap_err() {
            LcdError::Transport(e) => {
                assert_eq!(e.kind(), io::ErrorKind::BrokenPipe);
                assert_eq!(e.to_string(), "simulated write failure");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(lcd.write(b"x").is_err());
    }

    #[test]
    fn test_apply_matches_methods() {
        let (mut by_method, method_probe) = lcd();
        let (mut by_command, command_probe) = lcd();

        by_method.set_background(9, 8, 7).unwrap();
        by_method.move_to(3, 1).unwrap();
        by_method.raw(b"ok").unwrap();

        for command in [
            Command::Background(Rgb::new(9, 8, 7)),
            Command::MoveTo { col: 3, row: 1 },
            Command::text("ok"),
        ] {
            by_command.apply(&command).unwrap();
        }

        assert_eq!(method_probe.contents(), command_probe.contents());
    }

    #[test]
    fn test_command_encode() {
        assert_eq!(Command::Clear.encode(), vec![0xFE, 0x58]);
        assert_eq!(Command::Backlight(true).encode(), vec![0xFE, 0x42, 0x00]);
        assert_eq!(
            Command::Cursor(UnderlineCursor::On, BlockCursor::Off).encode(),
            vec![0xFE, 0x4A, 0xFE, 0x54]
        );
        assert_eq!(Command::text("Hi").encode(), b"Hi".to_vec());
    }

    #[test]
    fn test_close() {
        let (lcd, probe) = lcd();
        assert!(!lcd.transport().is_closed());
        lcd.close().unwrap();
        assert!(probe.is_closed());
        assert!(probe.contents().is_empty());
    }

    #[test]
    fn test_into_inner_leaves_transport_open() {
        let (mut lcd, probe) = lcd();
        lcd.clear().unwrap();
        let transport = lcd.into_inner();
        assert!(!transport.is_closed());
        assert_eq!(transport.contents(), vec![0xFE, 0x58]);
        assert_eq!(probe.write_count(), 1);
    }

    #[derive(Clone, Default)]
    struct LogSink(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl io::Write for LogSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn debug_log(f: impl FnOnce()) -> String {
        let sink = LogSink::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = sink.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_text_writes_are_logged_like_raw() {
        let (mut lcd, probe) = lcd();
        let log = debug_log(|| write!(lcd, "Hi").unwrap());
        assert_eq!(probe.contents(), b"Hi".to_vec());
        assert!(log.contains("raw"), "log was: {log}");
        assert!(log.contains("len=2"), "log was: {log}");
    }

    #[test]
    fn test_frames_are_logged_with_opcode() {
        let (mut lcd, _probe) = lcd();
        let log = debug_log(|| lcd.clear().unwrap());
        assert!(log.contains("frame"), "log was: {log}");
        assert!(log.contains("opcode=88"), "log was: {log}");
    }
}
