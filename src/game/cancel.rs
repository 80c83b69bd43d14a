//! Cooperative cancellation
//!
//! A `CancelToken` is a cheap, cloneable handle on a shared flag. Whoever
//! watches for shutdown (a key handler, the process signal handler, a test)
//! calls [`CancelToken::cancel`]; the session loop checks it between rounds
//! and input sources check it while waiting.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Cancel this token on SIGINT, SIGTERM or SIGHUP instead of letting the
    /// signal end the process
    ///
    /// Only one handler may be installed per process.
    ///
    /// # Errors
    /// Returns an error if a handler is already installed or the OS refuses it.
    pub fn cancel_on_signal(&self) -> Result<(), ctrlc::Error> {
        let token = self.clone();
        ctrlc::set_handler(move || {
            debug!("shutdown signal received");
            token.cancel();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let watcher = token.clone();
        assert!(!watcher.is_cancelled());

        token.cancel();
        assert!(watcher.is_cancelled());

        token.cancel();
        assert!(watcher.is_cancelled());
    }

    #[test]
    fn only_one_signal_handler_per_process() {
        let token = CancelToken::new();
        assert!(token.cancel_on_signal().is_ok());
        assert!(matches!(
            CancelToken::new().cancel_on_signal(),
            Err(ctrlc::Error::MultipleHandlers)
        ));
        assert!(!token.is_cancelled());
    }

    #[test]
    fn cancel_from_another_thread() {
        let token = CancelToken::new();
        let remote = token.clone();
        thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(token.is_cancelled());
    }
}
