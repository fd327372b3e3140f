//! # Display Transport Layer
//!
//! This module provides the byte sinks the encoder writes frames into.
//!
//! ## Available Transports
//!
//! - [`serial`]: USB/serial tty (Linux, macOS)
//! - [`memory`]: In-memory buffer for tests and dry runs
//!
//! The encoder only needs the narrow [`Transport`] capability, so anything
//! that can write bytes and be closed can drive a display.

use std::io;

pub mod memory;
pub mod serial;

pub use memory::MemoryTransport;
pub use serial::SerialTransport;

/// A byte sink connected to a display.
///
/// The backpack protocol has no acknowledgements, so a transport only
/// needs to write. Each call to [`Transport::write_all`] carries one or more
/// complete frames and must either send all of them or fail.
pub trait Transport {
    /// Write every byte of `data`, or return the error that stopped it.
    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Push any buffered bytes to the device.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Release the device. Writes after closing fail.
    fn close(&mut self) -> io::Result<()>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        (**self).write_all(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// A transport that can be moved to the worker thread.
pub type BoxedTransport = Box<dyn Transport + Send>;
