//! Collaborator seams for a game session
//!
//! The session never touches a terminal directly. It pulls raw text from a
//! [`GuessSource`] and pushes symbolic results to a [`Presenter`].

use super::{CancelToken, SessionStatus};
use crate::core::{Feedback, GuessError, Word};
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// How often a blocked [`ChannelSource`] re-checks its cancel token
pub const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Supplier of raw guess text, one line per call
pub trait GuessSource {
    /// Block until the next line is available
    ///
    /// # Errors
    /// Any I/O failure. End of input is reported as
    /// [`io::ErrorKind::UnexpectedEof`].
    fn read_guess(&mut self) -> io::Result<String>;
}

/// Receiver of session events, responsible for all rendering
pub trait Presenter {
    /// A new round is about to read input (`attempt` is 1-based)
    fn round_started(&mut self, _attempt: usize, _max_attempts: usize) {}

    /// Input was rejected; the attempt was not consumed
    fn rejected(&mut self, error: &GuessError);

    /// A valid guess was scored
    fn scored(&mut self, guess: &Word, feedback: &Feedback);

    /// The session reached a terminal state
    fn finished(&mut self, _status: SessionStatus, _secret: &Word, _attempts_used: usize) {}
}

/// Line reader over any buffered input
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GuessSource for LineSource<R> {
    fn read_guess(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line)
    }
}

/// Line reader that runs on a background thread so a waiting read can
/// still observe cancellation
pub struct ChannelSource {
    lines: Receiver<io::Result<String>>,
    cancel: CancelToken,
}

impl ChannelSource {
    /// Start reading lines from `reader` on a new thread
    pub fn spawn<R>(reader: R, cancel: CancelToken) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut source = LineSource::new(reader);
            loop {
                let line = source.read_guess();
                let failed = line.is_err();
                if tx.send(line).is_err() || failed {
                    break;
                }
            }
        });

        Self { lines: rx, cancel }
    }
}

impl GuessSource for ChannelSource {
    fn read_guess(&mut self) -> io::Result<String> {
        loop {
            if self.cancel.is_cancelled() {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "cancelled"));
            }
            match self.lines.recv_timeout(CANCEL_POLL_INTERVAL) {
                Ok(line) => return line,
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "input reader stopped",
                    ));
                }
            }
        }
    }
}
