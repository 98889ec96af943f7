//! Producer side of the session: pulls samples from a [`SampleSource`] and
//! forwards them to the renderer under operator control.
//!
//! The loop is a small state machine driven by triggers arriving on its own
//! receiver:
//!
//! | State     | Waits on             | Leaves on                                  |
//! | --------- | -------------------- | ------------------------------------------ |
//! | `Idle`    | triggers (blocking)  | `Start` → `Running`, `Quit` → `Stopped`    |
//! | `Running` | source, then pacing  | `Pause` → `Paused`, `Quit`/EOF → `Stopped` |
//! | `Paused`  | triggers (blocking)  | `Resume` → `Running`, `Quit` → `Stopped`   |
//!
//! A read blocked inside the source cannot be interrupted; `Quit` is only
//! observed between records.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::channel::{FrameReceiver, FrameSender};
use crate::frame::Frame;
use crate::source::SampleSource;

/// Reference delay between two forwarded samples.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Paused,
    Stopped,
}

/// Why the producer stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The operator asked to stop (or the trigger channel went away).
    Quit,
    /// The source ran out of records. No `Quit` frame is sent in this case.
    Exhausted,
    /// The renderer closed its end before the run finished.
    Disconnected,
}

/// Outcome of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProducerSummary {
    /// Data frames delivered to the renderer.
    pub sent: u64,
    /// Records skipped because they could not be parsed.
    pub skipped: u64,
    pub exit: ExitReason,
}

pub struct ProducerLoop<S: SampleSource> {
    source: S,
    frames: FrameSender,
    triggers: FrameReceiver,
    state: RunState,
    next_index: u64,
    pacing: Duration,
    sent: u64,
    skipped: u64,
    quit_sent: bool,
    exit: Option<ExitReason>,
}

impl<S: SampleSource> ProducerLoop<S> {
    /// `frames` carries output to the renderer, `triggers` carries operator input.
    pub fn new(source: S, frames: FrameSender, triggers: FrameReceiver) -> Self {
        Self {
            source,
            frames,
            triggers,
            state: RunState::Idle,
            next_index: 0,
            pacing: DEFAULT_SAMPLE_INTERVAL,
            sent: 0,
            skipped: 0,
            quit_sent: false,
            exit: None,
        }
    }

    /// Delay after each forwarded sample. Zero disables pacing.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Run the state machine to completion, then close the source and both channel ends.
    pub fn run(mut self) -> ProducerSummary {
        log::debug!("producer waiting for start");
        while self.state != RunState::Stopped {
            let next = match self.state {
                RunState::Idle => self.await_start(),
                RunState::Running => self.read_one(),
                RunState::Paused => self.await_resume(),
                RunState::Stopped => RunState::Stopped,
            };
            if next != self.state {
                log::debug!("producer {:?} -> {:?}", self.state, next);
                self.state = next;
            }
        }

        let summary = ProducerSummary {
            sent: self.sent,
            skipped: self.skipped,
            exit: self.exit.unwrap_or(ExitReason::Quit),
        };
        log::info!(
            "producer finished: {} sent, {} skipped, {:?}",
            summary.sent,
            summary.skipped,
            summary.exit
        );

        self.source.close();
        self.triggers.close();
        self.frames.close();
        summary
    }

    fn await_start(&mut self) -> RunState {
        match self.triggers.recv() {
            Some(Frame::Start) => {
                if self.frames.send(Frame::Start).is_err() {
                    return self.stop(ExitReason::Disconnected);
                }
                log::info!("producer started");
                RunState::Running
            }
            // Nothing was started, so no frame goes out.
            Some(Frame::Quit) | None => self.stop(ExitReason::Quit),
            Some(other) => {
                log::debug!("producer ignoring {} while idle", other.kind());
                RunState::Idle
            }
        }
    }

    fn read_one(&mut self) -> RunState {
        let index = match self.source.next_sample() {
            None => {
                log::info!("sample source exhausted after {} records", self.next_index);
                return self.stop(ExitReason::Exhausted);
            }
            Some(sample) => {
                let index = self.next_index;
                self.next_index += 1;
                match sample {
                    Ok(values) => {
                        if self.frames.send(Frame::Data { index, values }).is_err() {
                            log::warn!("renderer went away, stopping producer");
                            return self.stop(ExitReason::Disconnected);
                        }
                        self.sent += 1;
                        if !self.pacing.is_zero() {
                            thread::sleep(self.pacing);
                        }
                    }
                    Err(e) => {
                        log::warn!("skipping sample {}: {}", index, e);
                        self.skipped += 1;
                    }
                }
                index
            }
        };

        match self.triggers.try_recv() {
            Ok(None) => RunState::Running,
            Ok(Some(Frame::Pause)) => {
                log::info!("producer paused after sample {}", index);
                RunState::Paused
            }
            Ok(Some(Frame::Quit)) | Err(_) => self.quit(),
            Ok(Some(other)) => {
                log::debug!("producer ignoring {} while running", other.kind());
                RunState::Running
            }
        }
    }

    fn await_resume(&mut self) -> RunState {
        match self.triggers.recv() {
            Some(Frame::Resume) => {
                log::info!("producer resumed at sample {}", self.next_index);
                RunState::Running
            }
            Some(Frame::Quit) | None => self.quit(),
            Some(other) => {
                log::debug!("producer ignoring {} while paused", other.kind());
                RunState::Paused
            }
        }
    }

    /// Operator quit, explicit or implied by a closed trigger channel.
    fn quit(&mut self) -> RunState {
        if !self.quit_sent {
            self.quit_sent = true;
            // The renderer may already be gone; nothing left to tell it then.
            let _ = self.frames.send(Frame::Quit);
        }
        self.stop(ExitReason::Quit)
    }

    fn stop(&mut self, reason: ExitReason) -> RunState {
        self.exit.get_or_insert(reason);
        RunState::Stopped
    }
}

impl<S: SampleSource + Send + 'static> ProducerLoop<S> {
    /// Run the loop on a dedicated, named OS thread.
    pub fn spawn(self) -> std::io::Result<JoinHandle<ProducerSummary>> {
        thread::Builder::new()
            .name("producer".into())
            .spawn(move || self.run())
    }
}
