//! Deferred dispatch over an SPSC queue
//!
//! [`DeferredReceiver`] runs in the bus interrupt and only enqueues bytes;
//! [`DispatchLoop`] drains the queue from thread context and calls the
//! dispatcher. A full queue drops the incoming byte and counts it.

use heapless::spsc::{Consumer, Producer, Queue};
use latchkey_hal::TargetEvent;

use crate::dispatch::Dispatcher;

/// Interrupt half: enqueues received bytes
pub struct DeferredReceiver<'a, const N: usize> {
    producer: Producer<'a, u8, N>,
    last: Option<u8>,
    received: u32,
    dropped: u32,
}

/// Thread half: dispatches queued bytes
pub struct DispatchLoop<'a, D, const N: usize> {
    consumer: Consumer<'a, u8, N>,
    dispatcher: D,
}

/// Split a queue into its interrupt and thread halves
///
/// The queue holds `N - 1` bytes.
pub fn split<D: Dispatcher, const N: usize>(
    queue: &mut Queue<u8, N>,
    dispatcher: D,
) -> (DeferredReceiver<'_, N>, DispatchLoop<'_, D, N>) {
    let (producer, consumer) = queue.split();
    (
        DeferredReceiver {
            producer,
            last: None,
            received: 0,
            dropped: 0,
        },
        DispatchLoop {
            consumer,
            dispatcher,
        },
    )
}

impl<const N: usize> DeferredReceiver<'_, N> {
    /// Handle one bus event
    pub fn on_event(&mut self, event: TargetEvent) {
        if let TargetEvent::Received(byte) = event {
            self.last = Some(byte);
            self.received = self.received.wrapping_add(1);
            if self.producer.enqueue(byte).is_err() {
                self.dropped = self.dropped.wrapping_add(1);
                warn!("dispatch queue full, dropped {=u8:#x}", byte);
            }
        }
    }

    /// Most recently received byte
    pub fn last_byte(&self) -> Option<u8> {
        self.last
    }

    /// Bytes received since start-up, dropped ones included
    pub fn received(&self) -> u32 {
        self.received
    }

    /// Bytes lost to a full queue
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl<D: Dispatcher, const N: usize> DispatchLoop<'_, D, N> {
    /// Dispatch at most one queued byte
    pub fn poll(&mut self) -> bool {
        match self.consumer.dequeue() {
            Some(byte) => {
                self.dispatcher.dispatch(byte);
                true
            }
            None => false,
        }
    }

    /// Dispatch everything queued, returning how many bytes were handled
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while self.poll() {
            count += 1;
        }
        count
    }

    /// Whether bytes are waiting
    pub fn pending(&self) -> bool {
        self.consumer.ready()
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    #[derive(Default)]
    struct Collect(Vec<u8, 32>);

    impl Dispatcher for Collect {
        fn dispatch(&mut self, byte: u8) {
            self.0.push(byte).unwrap();
        }
    }

    fn receive(receiver: &mut DeferredReceiver<'_, 8>, bytes: &[u8]) {
        for &b in bytes {
            receiver.on_event(TargetEvent::Start);
            receiver.on_event(TargetEvent::Received(b));
            receiver.on_event(TargetEvent::Stop);
        }
    }

    #[test]
    fn test_dispatch_is_deferred() {
        let mut queue: Queue<u8, 8> = Queue::new();
        let (mut receiver, mut dispatch) = split(&mut queue, Collect::default());

        receive(&mut receiver, b"Temp");
        assert!(dispatch.dispatcher().0.is_empty());
        assert!(dispatch.pending());

        assert_eq!(dispatch.drain(), 4);
        assert_eq!(dispatch.dispatcher().0.as_slice(), b"Temp");
        assert!(!dispatch.pending());
    }

    #[test]
    fn test_overflow_drops_newest() {
        let mut queue: Queue<u8, 8> = Queue::new();
        let (mut receiver, mut dispatch) = split(&mut queue, Collect::default());

        receive(&mut receiver, b"0123456789");
        assert_eq!(receiver.received(), 10);
        assert_eq!(receiver.dropped(), 3);
        assert_eq!(receiver.last_byte(), Some(b'9'));

        dispatch.drain();
        assert_eq!(dispatch.dispatcher().0.as_slice(), b"0123456");
    }

    #[test]
    fn test_interleaved() {
        let mut queue: Queue<u8, 8> = Queue::new();
        let (mut receiver, mut dispatch) = split(&mut queue, Collect::default());

        receive(&mut receiver, b"ab");
        assert!(dispatch.poll());
        receive(&mut receiver, b"c");
        dispatch.drain();
        assert!(!dispatch.poll());
        assert_eq!(dispatch.dispatcher().0.as_slice(), b"abc");
    }
}
