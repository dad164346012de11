//! Deadline and cancellation for client calls
//!
//! A [`CallContext`] is attached to a [`DaisyClient`](crate::DaisyClient).
//! It is checked before each request, bounds the HTTP timeout, and is
//! polled while the call waits for the service and reads the response
//! body. Decompression and XML decoding are not interrupted once they
//! have started.

use crate::error::TransportError;
use std::io::{self, Read};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Cancellation handle shared between a client and its controllers
///
/// Clones share the same cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context that never expires
    pub fn new() -> Self {
        Self::default()
    }

    /// A context expiring at `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some(deadline),
        }
    }

    /// A context expiring `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Cancel every call made under this context, present and future
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fails if the context is cancelled or its deadline has passed
    pub fn check(&self) -> Result<(), TransportError> {
        if self.is_cancelled() {
            return Err(TransportError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(TransportError::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    /// Timeout for the next request: the smaller of `timeout` and the time
    /// left before the deadline
    pub fn effective_timeout(
        &self,
        timeout: Option<Duration>,
    ) -> Result<Option<Duration>, TransportError> {
        self.check()?;

        let remaining = self
            .deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()));

        let effective = match (timeout, remaining) {
            (Some(t), Some(r)) => Some(t.min(r)),
            (t, r) => t.or(r),
        };

        match effective {
            Some(d) if d.is_zero() => Err(TransportError::DeadlineExceeded),
            other => Ok(other),
        }
    }

    /// Wrap `inner` so that reads fail once the context is done
    pub(crate) fn reader<R: Read>(&self, inner: R) -> ContextReader<'_, R> {
        ContextReader {
            context: self,
            inner,
        }
    }
}

/// Reader observing a [`CallContext`] between reads
pub(crate) struct ContextReader<'c, R> {
    context: &'c CallContext,
    inner: R,
}

impl<R: Read> Read for ContextReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if let Err(e) = self.context.check() {
            return Err(io::Error::other(e));
        }
        self.inner.read(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_never_expires() {
        let ctx = CallContext::new();
        assert!(ctx.check().is_ok());
        assert_eq!(ctx.effective_timeout(None).unwrap(), None);
        assert_eq!(
            ctx.effective_timeout(Some(Duration::from_secs(5))).unwrap(),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let ctx = CallContext::new();
        let handle = ctx.clone();
        handle.cancel();

        assert!(ctx.is_cancelled());
        assert!(matches!(ctx.check(), Err(TransportError::Cancelled)));
    }

    #[test]
    fn test_expired_deadline() {
        let ctx = CallContext::with_deadline(Instant::now() - Duration::from_millis(1));
        assert!(matches!(ctx.check(), Err(TransportError::DeadlineExceeded)));
        assert!(matches!(
            ctx.effective_timeout(Some(Duration::from_secs(1))),
            Err(TransportError::DeadlineExceeded)
        ));
    }

    #[test]
    fn test_deadline_bounds_timeout() {
        let ctx = CallContext::with_timeout(Duration::from_secs(2));

        let t = ctx.effective_timeout(Some(Duration::from_secs(30))).unwrap().unwrap();
        assert!(t <= Duration::from_secs(2));

        let t = ctx.effective_timeout(None).unwrap().unwrap();
        assert!(t <= Duration::from_secs(2));

        let t = ctx.effective_timeout(Some(Duration::from_millis(10))).unwrap();
        assert_eq!(t, Some(Duration::from_millis(10)));
    }

    #[test]
    fn test_reader_stops_after_cancel() {
        let ctx = CallContext::new();
        let data = b"abcdef";
        let mut reader = ctx.reader(&data[..]);

        let mut buf = [0u8; 3];
        assert_eq!(reader.read(&mut buf).unwrap(), 3);

        ctx.cancel();
        assert!(reader.read(&mut buf).is_err());
    }
}
