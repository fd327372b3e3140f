//! # Serial Transport
//!
//! This module talks to the backpack over its USB CDC serial port
//! (`/dev/ttyACM0` on Linux, `/dev/tty.usbmodem*` on macOS).
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so frames reach the backpack untouched:
//!
//! - **No input processing**: Disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: Disable OPOST (no CR/LF translation)
//! - **8-bit characters**: CS8 (8 data bits, no parity)
//! - **No echo**: Disable ECHO, ECHONL
//! - **Non-canonical mode**: Disable ICANON (no line buffering)
//!
//! XON/XOFF must be off: `0x11` and `0x13` are valid glyph and color bytes.
//!
//! ## Baud Rate
//!
//! The backpack ships at 9600 baud. Over USB the rate is mostly ignored,
//! but the TTL serial header honours it.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::LcdError;

use super::Transport;

/// Default serial device path
pub const DEFAULT_DEVICE: &str = "/dev/ttyACM0";

/// Factory baud rate of the backpack
pub const DEFAULT_BAUD: u32 = 9600;

/// # Serial Display Transport
///
/// Manages a connection to the backpack over a serial tty.
///
/// ## Example
///
/// ```no_run
/// use serial_lcd::transport::{SerialTransport, Transport};
/// use serial_lcd::protocol::commands;
///
/// let mut transport = SerialTransport::open("/dev/ttyACM0", 9600)?;
/// transport.write_all(&commands::clear())?;
/// transport.close()?;
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct SerialTransport {
    file: Option<File>,
}

impl SerialTransport {
    /// Open a serial connection to the display.
    ///
    /// ## Errors
    ///
    /// Returns [`LcdError::Open`] if:
    /// - The device doesn't exist
    /// - Permission denied (may need the dialout/uucp group)
    /// - The baud rate is not supported
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P, baud: u32) -> Result<Self, LcdError> {
        let path = device.as_ref();
        let speed = baud_to_speed(baud)?;

        let mut options = OpenOptions::new();
        options.read(true).write(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.custom_flags(libc::O_NOCTTY);
        }

        let file = options
            .open(path)
            .map_err(|e| LcdError::Open(format!("{}: {}", path.display(), e)))?;

        configure_tty_raw(&file, speed)?;

        tracing::debug!(device = %path.display(), baud, "serial port open");

        Ok(Self { file: Some(file) })
    }

    fn file(&mut self) -> io::Result<&mut File> {
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "serial port is closed"))
    }
}

impl Transport for SerialTransport {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        Write::write_all(self.file()?, data)
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(self.file()?)
    }

    fn close(&mut self) -> io::Result<()> {
        match self.file.take() {
            Some(mut file) => Write::flush(&mut file),
            None => Ok(()),
        }
    }
}

/// The backpack never answers, but the handle is a full duplex tty.
impl Read for SerialTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file()?.read(buf)
    }
}

#[cfg(unix)]
type Speed = libc::speed_t;

#[cfg(not(unix))]
type Speed = u32;

/// Map a numeric baud rate to the termios speed constant.
#[cfg(unix)]
fn baud_to_speed(baud: u32) -> Result<Speed, LcdError> {
    let speed = match baud {
        1200 => libc::B1200,
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        other => {
            return Err(LcdError::Open(format!("Unsupported baud rate: {}", other)));
        }
    };
    Ok(speed)
}

#[cfg(not(unix))]
fn baud_to_speed(baud: u32) -> Result<Speed, LcdError> {
    Ok(baud)
}

/// Configure a tty for raw binary I/O at `speed`.
#[cfg(unix)]
fn configure_tty_raw(file: &File, speed: Speed) -> Result<(), LcdError> {
    use std::mem::MaybeUninit;
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(LcdError::Open(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    termios.c_oflag &= !libc::OPOST;

    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8 | libc::CREAD | libc::CLOCAL;

    let result = unsafe {
        let rc_in = libc::cfsetispeed(&mut termios, speed);
        let rc_out = libc::cfsetospeed(&mut termios, speed);
        if rc_in != 0 { rc_in } else { rc_out }
    };
    if result != 0 {
        return Err(LcdError::Open(format!(
            "cfsetspeed failed: {}",
            io::Error::last_os_error()
        )));
    }

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(LcdError::Open(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(not(unix))]
fn configure_tty_raw(_file: &File, _speed: Speed) -> Result<(), LcdError> {
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
