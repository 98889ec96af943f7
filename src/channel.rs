//! Single-sender, single-receiver frame channel.
//!
//! A thin layer over `std::sync::mpsc` that adds what the control protocol
//! needs on top of it: a non-blocking pending check, explicit closing from
//! either end, and [`ChannelClosed`] as the only error.
//!
//! Capacity is unbounded. The producer paces itself instead, so a slow
//! renderer never stalls the reader.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::error::ChannelClosed;
use crate::frame::Frame;

/// Writing end of a frame channel. Not `Clone`: one writer per channel.
#[derive(Debug)]
pub struct FrameSender {
    tx: Sender<Frame>,
}

/// Reading end of a frame channel.
#[derive(Debug)]
pub struct FrameReceiver {
    // `None` once closed from this end; dropping the mpsc receiver makes
    // every later send on the other end fail.
    rx: Option<Receiver<Frame>>,
    peeked: Option<Frame>,
}

/// Create a new connected `(FrameSender, FrameReceiver)` pair.
pub fn channel() -> (FrameSender, FrameReceiver) {
    let (tx, rx) = mpsc::channel();
    (
        FrameSender { tx },
        FrameReceiver {
            rx: Some(rx),
            peeked: None,
        },
    )
}

impl FrameSender {
    /// Enqueue a frame. Fails once the receiving end is closed or dropped.
    pub fn send(&self, frame: Frame) -> Result<(), ChannelClosed> {
        self.tx.send(frame).map_err(|_| ChannelClosed)
    }

    /// End the stream. Frames already sent are still delivered, after which
    /// the receiver sees end-of-stream.
    pub fn close(self) {
        drop(self);
    }
}

impl FrameReceiver {
    /// Whether a frame can be received right now without blocking.
    pub fn has_pending(&mut self) -> bool {
        if self.peeked.is_some() {
            return true;
        }
        match self.try_recv_raw() {
            Ok(Some(frame)) => {
                self.peeked = Some(frame);
                true
            }
            _ => false,
        }
    }

    /// Non-blocking receive.
    ///
    /// `Ok(None)` means nothing is queued yet; `Err(ChannelClosed)` means the
    /// stream has ended and nothing more will ever arrive.
    pub fn try_recv(&mut self) -> Result<Option<Frame>, ChannelClosed> {
        if let Some(frame) = self.peeked.take() {
            return Ok(Some(frame));
        }
        self.try_recv_raw()
    }

    /// Blocking receive. Returns `None` at end-of-stream.
    pub fn recv(&mut self) -> Option<Frame> {
        if let Some(frame) = self.peeked.take() {
            return Some(frame);
        }
        self.rx.as_ref()?.recv().ok()
    }

    /// Close from the receiving end. Pending frames are discarded. Idempotent.
    pub fn close(&mut self) {
        self.peeked = None;
        self.rx = None;
    }

    fn try_recv_raw(&mut self) -> Result<Option<Frame>, ChannelClosed> {
        let rx = self.rx.as_ref().ok_or(ChannelClosed)?;
        match rx.try_recv() {
            Ok(frame) => Ok(Some(frame)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(ChannelClosed),
        }
    }
}
