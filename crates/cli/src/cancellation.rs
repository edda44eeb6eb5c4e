//! Ctrl+C handling for in-flight directory commands.
//!
//! Responsibilities:
//! - Provide a cloneable cancellation token shared by the signal listener and
//!   the running command.
//! - Define the `Cancelled` marker error carried through `anyhow::Result`.
//! - Provide the `cancellable!` macro that races a client call against the token.
//!
//! Does NOT handle:
//! - Choosing the exit code (see `error::ExitCode::Interrupted`).
//!
//! Invariants:
//! - Once cancelled, a token stays cancelled.

use std::fmt;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Race a client future against a [`CancellationToken`].
///
/// Evaluates to `anyhow::Result<T>`: the client's own error when the call
/// fails, or [`Cancelled`] when the token fires first.
macro_rules! cancellable {
    ($fut:expr, $cancel:expr) => {
        tokio::select! {
            result = $fut => result.map_err(anyhow::Error::from),
            _ = $cancel.cancelled() => Err(anyhow::Error::new($crate::cancellation::Cancelled)),
        }
    };
}

/// Cancellation token usable across async tasks.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the token. Repeated calls are no-ops.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Wait until the token is cancelled.
    ///
    /// The `notified()` future is created before the flag is read so a
    /// concurrent `cancel()` cannot be missed.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// Marker error for a command interrupted by the user.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}
