//! # Display Worker
//!
//! A dedicated thread that owns an [`Lcd`] and applies batches of
//! [`Command`]s sent from any number of producers.
//!
//! The backpack has no framing recovery: two threads writing to one port
//! can splice a frame from one into the middle of a frame from the other.
//! Routing every write through one thread rules that out. A batch is
//! applied back to back, so related commands (clear, home, text) stay
//! together even while another producer is busy.
//!
//! ```
//! use serial_lcd::{Lcd, lcd::Command, transport::MemoryTransport, worker::Worker};
//!
//! let probe = MemoryTransport::new();
//! let worker = Worker::spawn(Lcd::new(probe.clone()));
//! let handle = worker.handle();
//!
//! handle.run(vec![Command::Clear, Command::text("Hi")])?;
//! worker.shutdown()?;
//!
//! assert_eq!(probe.contents(), b"\xFE\x58Hi");
//! # Ok::<(), serial_lcd::LcdError>(())
//! ```

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use tokio::sync::oneshot;

use crate::{
    error::LcdError,
    lcd::{Command, Lcd},
    transport::Transport,
};

type Reply = oneshot::Sender<Result<(), LcdError>>;

/// A batch of commands and where to report the outcome.
struct Job {
    commands: Vec<Command>,
    reply: Option<Reply>,
}

/// Cloneable sender side of a [`Worker`].
#[derive(Clone)]
pub struct WorkerHandle {
    sender: mpsc::Sender<Job>,
}

impl WorkerHandle {
    /// Queue a batch without waiting. Failures are logged.
    pub fn submit(&self, commands: Vec<Command>) -> Result<(), LcdError> {
        self.enqueue(commands, None)
    }

    /// Queue a batch and block until it has been written.
    ///
    /// Must not be called from an async context; use [`WorkerHandle::run_async`].
    pub fn run(&self, commands: Vec<Command>) -> Result<(), LcdError> {
        let (tx, rx) = oneshot::channel();
        self.enqueue(commands, Some(tx))?;
        rx.blocking_recv().map_err(|_| worker_gone())?
    }

    /// Queue a batch and wait for it to be written.
    pub async fn run_async(&self, commands: Vec<Command>) -> Result<(), LcdError> {
        let (tx, rx) = oneshot::channel();
        self.enqueue(commands, Some(tx))?;
        rx.await.map_err(|_| worker_gone())?
    }

    fn enqueue(&self, commands: Vec<Command>, reply: Option<Reply>) -> Result<(), LcdError> {
        self.sender
            .send(Job { commands, reply })
            .map_err(|_| worker_gone())
    }
}

/// Owner of the display thread.
pub struct Worker {
    handle: WorkerHandle,
    thread: JoinHandle<Result<(), LcdError>>,
}

impl Worker {
    /// Move `lcd` onto a new thread and start applying batches.
    pub fn spawn<T>(lcd: Lcd<T>) -> Self
    where
        T: Transport + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel::<Job>();
        let thread = thread::spawn(move || run_jobs(lcd, receiver));
        Self {
            handle: WorkerHandle { sender },
            thread,
        }
    }

    /// A new sender for this worker.
    pub fn handle(&self) -> WorkerHandle {
        self.handle.clone()
    }

    /// Drain the queue and close the transport.
    ///
    /// The thread exits once every [`WorkerHandle`] has been dropped.
    pub fn shutdown(self) -> Result<(), LcdError> {
        drop(self.handle);
        self.thread
            .join()
            .map_err(|_| LcdError::Transport(std::io::Error::other("display worker panicked")))?
    }
}

fn run_jobs<T: Transport>(mut lcd: Lcd<T>, receiver: mpsc::Receiver<Job>) -> Result<(), LcdError> {
    for job in receiver {
        let result = apply_batch(&mut lcd, &job.commands);
        match job.reply {
            Some(reply) => {
                // The requester may have given up waiting; nothing to do then.
                let _ = reply.send(result);
            }
            None => {
                if let Err(e) = result {
                    tracing::warn!(error = %e, "display batch failed");
                }
            }
        }
    }
    tracing::debug!("display worker stopping");
    lcd.close()
}

/// Apply commands in order, stopping at the first failure.
fn apply_batch<T: Transport>(lcd: &mut Lcd<T>, commands: &[Command]) -> Result<(), LcdError> {
    commands.iter().try_for_each(|command| lcd.apply(command))
}

fn worker_gone() -> LcdError {
    LcdError::Transport(std::io::Error::new(
        std::io::ErrorKind::BrokenPipe,
        "display worker has stopped",
    ))
}
