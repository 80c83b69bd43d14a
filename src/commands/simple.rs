//! Simple interactive CLI mode
//!
//! Line-based game on stdin/stdout without TUI

use crate::core::Word;
use crate::game::{
    CancelToken, ChannelSource, GameConfig, GameSession, GuessSource, SessionStatus,
};
use crate::output::{ConsolePresenter, print_rules};
use anyhow::Result;
use std::io::{self, BufReader};

/// Input line that leaves the game instead of being scored
pub const QUIT_COMMAND: &str = "/quit";

/// Source wrapper that turns the quit command into a cancellation request
pub struct QuitAware<S> {
    inner: S,
    cancel: CancelToken,
}

impl<S: GuessSource> QuitAware<S> {
    pub const fn new(inner: S, cancel: CancelToken) -> Self {
        Self { inner, cancel }
    }
}

impl<S: GuessSource> GuessSource for QuitAware<S> {
    fn read_guess(&mut self) -> io::Result<String> {
        let line = self.inner.read_guess()?;
        if line.trim().eq_ignore_ascii_case(QUIT_COMMAND) {
            self.cancel.cancel();
            return Err(io::Error::new(io::ErrorKind::Interrupted, "quit requested"));
        }
        Ok(line)
    }
}

/// Run the simple interactive CLI mode
///
/// Returns the final session status. `/quit` or cancelling `cancel` (e.g.
/// from the signal handler) ends the game as aborted.
///
/// # Errors
///
/// Returns an error if the secret does not fit `config` or if reading stdin
/// fails (including end of input).
pub fn run_simple(
    secret: Word,
    config: GameConfig,
    color: bool,
    cancel: CancelToken,
) -> Result<SessionStatus> {
    let mut session = GameSession::new(secret, config)?;

    print_rules(config);

    let stdin = ChannelSource::spawn(BufReader::new(io::stdin()), cancel.clone());
    let mut source = QuitAware::new(stdin, cancel.clone());
    let mut presenter = ConsolePresenter::new(color);

    let status = session.run(&mut source, &mut presenter, &cancel)?;
    Ok(status)
}
