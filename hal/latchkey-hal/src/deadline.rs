//! Bounded polling of hardware transfers
//!
//! Bus transactions run from synchronous code, sometimes inside a critical
//! section. Chip HALs start the transfer as a future and spin on it here,
//! giving up once their deadline check reports expiry.

use core::future::Future;
use core::pin::pin;
use core::task::Poll;

use embassy_futures::poll_once;

/// Poll `transfer` until it completes or `expired` returns `true`
///
/// The future is polled with a no-op waker, so it must make progress by
/// re-checking hardware state on every poll. Returns `None` on expiry; the
/// transfer is dropped unfinished.
pub fn poll_until<F, E>(transfer: F, mut expired: E) -> Option<F::Output>
where
    F: Future,
    E: FnMut() -> bool,
{
    let mut transfer = pin!(transfer);
    loop {
        if let Poll::Ready(output) = poll_once(transfer.as_mut()) {
            return Some(output);
        }
        if expired() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::pin::Pin;
    use core::task::Context;

    /// Completes on the given poll
    struct ReadyAfter {
        polls: u32,
        ready_at: u32,
    }

    impl Future for ReadyAfter {
        type Output = u32;

        fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<u32> {
            self.polls += 1;
            if self.polls >= self.ready_at {
                Poll::Ready(self.polls)
            } else {
                Poll::Pending
            }
        }
    }

    #[test]
    fn test_completes_before_deadline() {
        let transfer = ReadyAfter {
            polls: 0,
            ready_at: 3,
        };
        assert_eq!(poll_until(transfer, || false), Some(3));
    }

    #[test]
    fn test_stalled_transfer_expires() {
        let mut checks = 0;
        let result = poll_until(core::future::pending::<()>(), || {
            checks += 1;
            checks == 5
        });
        assert_eq!(result, None);
        assert_eq!(checks, 5);
    }

    #[test]
    fn test_ready_transfer_ignores_expired_deadline() {
        let transfer = ReadyAfter {
            polls: 0,
            ready_at: 1,
        };
        assert_eq!(poll_until(transfer, || true), Some(1));
    }
}
