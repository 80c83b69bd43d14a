//! Game session orchestration
//!
//! Wires the pure scoring core to its collaborators: an input source, a
//! presenter and a cancellation token.

mod cancel;
mod config;
mod io;
mod session;

pub use cancel::CancelToken;
pub use config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig};
pub use io::{CANCEL_POLL_INTERVAL, ChannelSource, GuessSource, LineSource, Presenter};
pub use session::{GameSession, RoundOutcome, SessionError, SessionStatus};
