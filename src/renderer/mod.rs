//! Renderer side of the session.
//!
//! [`RendererState`] owns the plotted [`SeriesBuffer`] and a [`TickTimer`].
//! On every due tick it drains all frames queued by the producer, in arrival
//! order, and then issues at most one incremental redraw. Bursts that arrive
//! faster than the tick interval are therefore batched into a single update.
//!
//! The renderer never blocks on the producer: an empty queue simply ends the
//! drain, and a closed queue is handled like `Quit`.

mod canvas;
mod series;
mod timer;

pub use canvas::{Canvas, Label};
pub use series::SeriesBuffer;
pub use timer::TickTimer;

use std::time::{Duration, Instant};

use crate::channel::FrameReceiver;
use crate::frame::{Channel, ChannelValues, Frame};

/// Reference redraw cadence.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderRunState {
    Idle,
    Active,
    Stopped,
}

pub struct RendererState {
    frames: FrameReceiver,
    series: SeriesBuffer,
    state: RenderRunState,
    timer: TickTimer,
    latest: Option<(u64, ChannelValues)>,
    precision: usize,
    /// Points already handed to the canvas.
    drawn: usize,
    lines_reset: bool,
    labels_dirty: bool,
}

impl RendererState {
    pub fn new(frames: FrameReceiver) -> Self {
        Self {
            frames,
            series: SeriesBuffer::new(),
            state: RenderRunState::Idle,
            timer: TickTimer::new(DEFAULT_TICK_INTERVAL),
            latest: None,
            precision: 3,
            drawn: 0,
            lines_reset: false,
            labels_dirty: false,
        }
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.timer = TickTimer::new(interval);
        self
    }

    /// Decimal places used for the channel value labels.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn state(&self) -> RenderRunState {
        self.state
    }

    pub fn is_ticking(&self) -> bool {
        self.timer.is_running()
    }

    pub fn series(&self) -> &SeriesBuffer {
        &self.series
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        self.series.x_bounds()
    }

    /// Apply one frame to the state machine.
    pub fn handle_frame(&mut self, frame: Frame) {
        if self.state == RenderRunState::Stopped {
            log::debug!("renderer stopped, dropping {} frame", frame.kind());
            return;
        }
        match frame {
            Frame::Start => {
                self.series.clear();
                self.latest = None;
                self.drawn = 0;
                self.lines_reset = true;
                self.labels_dirty = false;
                self.state = RenderRunState::Active;
                self.timer.start();
                log::debug!("renderer active");
            }
            Frame::Data { index, values } => {
                if self.state != RenderRunState::Active {
                    log::debug!("renderer not started, dropping sample {}", index);
                    return;
                }
                self.series.push(index, values);
                self.latest = Some((index, values));
                self.labels_dirty = true;
            }
            Frame::Pause => {
                self.timer.stop();
                log::debug!("renderer paused with {} samples", self.series.len());
            }
            Frame::Resume => {
                if self.state == RenderRunState::Active {
                    self.timer.start();
                    log::debug!("renderer resumed");
                }
            }
            Frame::Quit => self.shutdown(),
        }
    }

    /// Run a tick if the timer is due. Returns whether a redraw was issued.
    pub fn poll<C: Canvas + ?Sized>(&mut self, now: Instant, canvas: &mut C) -> bool {
        if !self.timer.is_due(now) {
            return false;
        }
        self.timer.fire(now);
        self.tick(canvas)
    }

    /// Time until the next tick, `None` while not ticking.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    /// Drain every queued frame, then redraw whatever changed.
    ///
    /// Returns whether a redraw was issued.
    pub fn tick<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> bool {
        if self.state != RenderRunState::Active || !self.timer.is_running() {
            return false;
        }
        let mut drained = 0usize;
        loop {
            match self.frames.try_recv() {
                Ok(Some(frame)) => {
                    drained += 1;
                    self.handle_frame(frame);
                    // Paused or stopped: nothing more is drained this tick.
                    if self.state != RenderRunState::Active || !self.timer.is_running() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(_) => {
                    log::info!("frame stream ended, stopping renderer");
                    self.shutdown();
                    break;
                }
            }
        }
        if drained > 0 {
            log::trace!("drained {} frames", drained);
        }
        self.redraw(canvas)
    }

    fn redraw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> bool {
        let new_points = self.series.len() > self.drawn;
        if !(self.lines_reset || new_points || self.labels_dirty) {
            return false;
        }

        if self.lines_reset {
            canvas.reset_lines();
            self.lines_reset = false;
        }
        canvas.draw_patch();

        if new_points {
            let from = self.drawn;
            let indices = &self.series.indices()[from..];
            for channel in Channel::ALL {
                canvas.extend_line(channel, indices, &self.series.channel(channel)[from..]);
            }
            self.drawn = self.series.len();
            let [lo, hi] = self.series.x_bounds();
            canvas.set_x_bounds(lo, hi);
        }

        if self.labels_dirty {
            if let Some((index, values)) = self.latest {
                canvas.set_label(Label::SampleCount, &index.to_string());
                for channel in Channel::ALL {
                    let text = format!("{:.*}", self.precision, values[channel.index()]);
                    canvas.set_label(Label::Value(channel), &text);
                }
            }
            self.labels_dirty = false;
        }

        canvas.draw_idle();
        true
    }

    fn shutdown(&mut self) {
        if self.state == RenderRunState::Stopped {
            return;
        }
        self.frames.close();
        self.timer.stop();
        self.state = RenderRunState::Stopped;
        self.series.freeze();
        log::info!("renderer stopped with {} samples", self.series.len());
    }
}
