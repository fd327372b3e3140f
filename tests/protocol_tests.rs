//! # Protocol Tests
//!
//! Byte-exact checks of the frames a display receives, driven through the
//! public API against an in-memory transport.

use std::io::{self, Write};

use pretty_assertions::assert_eq;
use serial_lcd::{
    DisplayConfig, Lcd, LcdError,
    lcd::Command,
    protocol::{
        commands::Autoscroll,
        cursor::{BlockCursor, UnderlineCursor},
        glyph::Glyph,
    },
    transport::MemoryTransport,
    worker::Worker,
};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn lcd() -> (Lcd<MemoryTransport>, MemoryTransport) {
    let probe = MemoryTransport::new();
    (Lcd::new(probe.clone()), probe)
}

// ============================================================================
// COMMAND ENCODER
// ============================================================================

#[test]
fn test_background_color_every_component_value() {
    let (mut lcd, probe) = lcd();
    for v in 0..=255u8 {
        let (r, g, b) = (v, v.wrapping_mul(7), 255 - v);
        lcd.set_background(r, g, b).unwrap();
        assert_eq!(probe.take(), vec![0xFE, 0xD0, r, g, b]);
    }
}

#[test]
fn test_cursor_flags_are_two_frames() {
    let (mut lcd, probe) = lcd();
    lcd.set_cursor(UnderlineCursor::Off, BlockCursor::Off).unwrap();
    assert_eq!(probe.contents(), vec![0xFE, 0x4B, 0xFE, 0x54]);
    assert_eq!(probe.write_count(), 1);
}

#[test]
fn test_create_blank_char_in_slot_zero() {
    let (mut lcd, probe) = lcd();
    lcd.create_custom_char(0, &Glyph::from_bytes([0; 8])).unwrap();
    let bytes = probe.contents();
    assert_eq!(bytes, vec![0xFE, 0x4E, 0x00, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(bytes.len(), 11);
}

#[test]
fn test_raw_text_has_no_framing() {
    let (mut lcd, probe) = lcd();
    lcd.raw(b"Hi").unwrap();
    assert_eq!(probe.take(), vec![b'H', b'i']);

    write!(lcd, "Hi").unwrap();
    assert_eq!(probe.take(), vec![b'H', b'i']);
}

#[test]
fn test_custom_char_prints_by_slot_byte() {
    let (mut lcd, probe) = lcd();
    lcd.create_custom_char(3, &Glyph::HEART).unwrap();
    probe.take();
    write!(lcd, "a\x03b").unwrap();
    assert_eq!(probe.contents(), vec![b'a', 0x03, b'b']);
}

#[test]
fn test_typical_session() {
    let (mut lcd, probe) = lcd();
    lcd.set_size(16, 2).unwrap();
    lcd.set_brightness(255).unwrap();
    lcd.set_contrast(200).unwrap();
    lcd.set_cursor(UnderlineCursor::Off, BlockCursor::Off).unwrap();
    lcd.set_background(0, 0, 255).unwrap();
    lcd.set_autoscroll(Autoscroll::Off).unwrap();
    lcd.clear().unwrap();
    lcd.home().unwrap();
    write!(lcd, "Hi there!").unwrap();

    let mut expected = vec![
        0xFE, 0xD1, 16, 2, //
        0xFE, 0x99, 255, //
        0xFE, 0x91, 200, //
        0xFE, 0x4B, 0xFE, 0x54, //
        0xFE, 0xD0, 0, 0, 255, //
        0xFE, 0x52, //
        0xFE, 0x58, //
        0xFE, 0x48,
    ];
    expected.extend(b"Hi there!");
    assert_eq!(probe.contents(), expected);
}

#[test]
fn test_splash_fills_display() {
    let (mut lcd, probe) = lcd();
    lcd.set_splash("Booting", &DisplayConfig::LCD_20X4).unwrap();
    let bytes = probe.contents();
    assert_eq!(bytes.len(), 2 + 80);
    assert_eq!(&bytes[..9], b"\xFE\x40Booting");
}

// ============================================================================
// GLYPH COMPILER
// ============================================================================

#[test]
fn test_glyph_all_off_markers() {
    assert_eq!(Glyph::compile(["....."; 8]).as_bytes(), &[0u8; 8]);
    assert_eq!(
        Glyph::compile([".. ..", " . . ", ".....", "     ", ". . .", " ... ", ".....", "....."])
            .as_bytes(),
        &[0u8; 8]
    );
}

#[test]
fn test_glyph_all_on_markers() {
    assert_eq!(Glyph::compile(["*****"; 8]).as_bytes(), &[0x1F; 8]);
}

#[test]
fn test_glyph_heart_upload() {
    let heart = Glyph::compile([
        ".....", ".*.*.", "*.*.*", "*...*", "*...*", ".*.*.", "..*..", ".....",
    ]);
    let (mut lcd, probe) = lcd();
    lcd.create_custom_char(0, &heart).unwrap();
    assert_eq!(
        probe.contents(),
        vec![0xFE, 0x4E, 0, 0x00, 0x0A, 0x15, 0x11, 0x11, 0x0A, 0x04, 0x00]
    );
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_transport_failure_is_the_same_failure() {
    let mut lcd = Lcd::new(MemoryTransport::failing(io::ErrorKind::NotConnected));

    let results = [
        lcd.set_background(1, 2, 3),
        lcd.set_cursor(UnderlineCursor::On, BlockCursor::On),
        lcd.create_custom_char(1, &Glyph::FULL),
        lcd.raw(b"Hi"),
    ];
    for result in results {
        match result {
            Err(LcdError::Transport(e)) => {
                assert_eq!(e.kind(), io::ErrorKind::NotConnected);
                assert_eq!(e.to_string(), "simulated write failure");
            }
            other => panic!("expected transport failure, got {other:?}"),
        }
    }
}

#[test]
fn test_io_write_failure_reports_no_partial_count() {
    let mut lcd = Lcd::new(MemoryTransport::failing(io::ErrorKind::BrokenPipe));
    let err = lcd.write(b"hello").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn test_write_after_close_fails() {
    let probe = MemoryTransport::new();
    Lcd::new(probe.clone()).close().unwrap();
    let err = Lcd::new(probe).clear().unwrap_err();
    assert!(matches!(err, LcdError::Transport(e) if e.kind() == io::ErrorKind::NotConnected));
}

// ============================================================================
// WORKER
// ============================================================================

#[test]
fn test_worker_preserves_submission_order() {
    let probe = MemoryTransport::new();
    let worker = Worker::spawn(Lcd::new(probe.clone()));
    let handle = worker.handle();

    for i in 0..10u8 {
        handle.submit(vec![Command::Brightness(i)]).unwrap();
    }
    drop(handle);
    worker.shutdown().unwrap();

    let expected: Vec<u8> = (0..10u8).flat_map(|i| [0xFE, 0x99, i]).collect();
    assert_eq!(probe.contents(), expected);
    assert!(probe.is_closed());
}
