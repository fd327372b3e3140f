//! # Error Types
//!
//! This module defines error types used throughout the serial-lcd library.
//!
//! The encoder itself only ever fails with [`LcdError::Transport`]; the other
//! variants belong to the layers around it (opening a device, parsing user
//! input in the CLI and HTTP server).

use std::io;

use thiserror::Error;

/// Main error type for serial-lcd operations
#[derive(Debug, Error)]
pub enum LcdError {
    /// The transport rejected a write (disconnected device, closed port, OS error).
    ///
    /// Displayed as the underlying I/O error, verbatim.
    #[error(transparent)]
    Transport(#[from] io::Error),

    /// Opening or configuring the device failed
    #[error("Failed to open device: {0}")]
    Open(String),

    /// Glyph pattern rejected by the strict parser
    #[error("Invalid glyph: {0}")]
    Glyph(String),

    /// Invalid user-supplied argument (color, size, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for serial-lcd operations
pub type Result<T> = std::result::Result<T, LcdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_is_verbatim() {
        let err = LcdError::from(io::Error::new(io::ErrorKind::BrokenPipe, "port went away"));
        assert_eq!(err.to_string(), "port went away");
    }

    #[test]
    fn test_transport_error_keeps_kind() {
        let err = LcdError::from(io::Error::from(io::ErrorKind::NotConnected));
        match err {
            LcdError::Transport(e) => assert_eq!(e.kind(), io::ErrorKind::NotConnected),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
