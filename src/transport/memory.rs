//! In-memory transport.
//!
//! Records every write into a shared buffer. Clones share the buffer and the
//! closed flag, so a test can hand one clone to the encoder and inspect the
//! bytes through another.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::Transport;

/// In-memory byte sink.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    buffer: Arc<Mutex<Vec<u8>>>,
    writes: Arc<Mutex<usize>>,
    fail_with: Option<io::ErrorKind>,
    closed: Arc<AtomicBool>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose every write fails with `kind`.
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            fail_with: Some(kind),
            ..Self::default()
        }
    }

    /// Copy of everything written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Take everything written so far, leaving the buffer empty.
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of successful `write_all` calls.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        // A panicking test thread must not hide the bytes from the others
        self.buffer.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Transport for MemoryTransport {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        if self.is_closed() {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "transport is closed",
            ));
        }
        if let Some(kind) = self.fail_with {
            return Err(io::Error::new(kind, "simulated write failure"));
        }
        self.lock().extend_from_slice(data);
        *self.writes.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
