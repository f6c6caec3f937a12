//! Per-call cancellation and deadline

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::error::ErrorKind;

/// Bounds a single client call
///
/// A context carries a cancellation token and an optional deadline. Both
/// cover the whole exchange, from sending the request to reading the body.
/// Contexts are cheap to clone; clones share the same token.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context that is never cancelled and has no deadline
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A context cancelled through an existing token
    #[must_use]
    pub fn with_token(cancel: CancellationToken) -> Self {
        Self {
            cancel,
            deadline: None,
        }
    }

    /// Set the deadline to `timeout` from now
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Set an absolute deadline
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Deadline, if any
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Token that cancels calls made with this context
    #[must_use]
    pub const fn token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Cancel every call using this context (or a clone of it)
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether [`cancel`](Self::cancel) has been called
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Drive `exchange` to completion unless cancelled or out of time
    ///
    /// An already-cancelled context resolves without polling `exchange`.
    pub(crate) async fn run<T, F>(&self, exchange: F) -> Result<T, ErrorKind>
    where
        F: Future<Output = Result<T, ErrorKind>> + Send,
        T: Send,
    {
        let bounded = async {
            match self.deadline {
                Some(deadline) => tokio::time::timeout_at(deadline, exchange)
                    .await
                    .unwrap_or(Err(ErrorKind::Timeout)),
                None => exchange.await,
            }
        };

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(ErrorKind::Cancelled),
            result = bounded => result,
        }
    }
}
