//! Caller-supplied cancellation and deadlines.
//!
//! A [`Context`] travels with a [`Client`](crate::client::Client) and is
//! consulted before every attempt, while a request is in flight and during
//! every backoff sleep.
//!
//! ```ignore
//! let (ctx, handle) = Context::background().with_cancel();
//! let client = client.with_context(ctx.with_timeout(Duration::from_secs(10)));
//! // elsewhere: handle.cancel();
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::Instant;

use crate::error::FreshserviceError;

#[derive(Debug, Default)]
struct Signal {
    fired: AtomicBool,
    notify: Notify,
    children: Mutex<Vec<Weak<Signal>>>,
}

impl Signal {
    fn child(self: &Arc<Self>) -> Arc<Signal> {
        let child = Arc::new(Signal::default());
        let mut children = self.children.lock().unwrap_or_else(|e| e.into_inner());
        children.retain(|c| c.strong_count() > 0);
        children.push(Arc::downgrade(&child));
        drop(children);
        if self.is_fired() {
            child.fire();
        }
        child
    }

    fn is_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    fn fire(&self) {
        if self.fired.swap(true, Ordering::AcqRel) {
            return;
        }
        self.notify.notify_waiters();
        let children = std::mem::take(&mut *self.children.lock().unwrap_or_else(|e| e.into_inner()));
        for child in children.iter().filter_map(Weak::upgrade) {
            child.fire();
        }
    }

    async fn fired(&self) {
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_fired() {
            return;
        }
        notified.await;
    }
}

/// Cancellation signal plus optional deadline.
///
/// Cloning is cheap; clones observe the same signal.
#[derive(Debug, Clone, Default)]
pub struct Context {
    signal: Option<Arc<Signal>>,
    deadline: Option<Instant>,
}

/// Fires the context returned alongside it by [`Context::with_cancel`].
///
/// Dropping the handle does not cancel anything.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    signal: Arc<Signal>,
}

impl CancelHandle {
    /// Cancels the associated context and every context derived from it.
    pub fn cancel(&self) {
        self.signal.fire();
    }
}

impl Context {
    /// A context that never fires.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derives a context that can be cancelled through the returned handle.
    ///
    /// Cancelling the parent also cancels the child.
    pub fn with_cancel(&self) -> (Self, CancelHandle) {
        let signal = match &self.signal {
            Some(parent) => parent.child(),
            None => Arc::new(Signal::default()),
        };
        let ctx = Self {
            signal: Some(signal.clone()),
            deadline: self.deadline,
        };
        (ctx, CancelHandle { signal })
    }

    /// Derives a context that expires at `deadline`, or earlier if the parent does.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(existing) if existing <= deadline => existing,
            _ => deadline,
        };
        Self {
            signal: self.signal.clone(),
            deadline: Some(deadline),
        }
    }

    /// Derives a context that expires `timeout` from now.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// The effective deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the reason this context is done, or `None` while it is live.
    pub fn err(&self) -> Option<FreshserviceError> {
        if self.signal.as_ref().is_some_and(|s| s.is_fired()) {
            return Some(FreshserviceError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(FreshserviceError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Resolves once the context is done. Never resolves for a background context.
    pub async fn done(&self) -> FreshserviceError {
        let cancelled = async {
            match &self.signal {
                Some(signal) => signal.fired().await,
                None => std::future::pending::<()>().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };
        tokio::select! {
            biased;
            _ = cancelled => FreshserviceError::Cancelled,
            _ = expired => FreshserviceError::DeadlineExceeded,
        }
    }
}
