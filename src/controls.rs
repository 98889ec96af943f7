//! Start / Pause / Stop triggers and their button affordances.
//!
//! [`Controls`] lives on the same thread as the [`RendererState`]. Each
//! trigger enqueues exactly one frame for the producer and applies the local
//! part of the transition to the renderer directly (the renderer cannot drain
//! frames while its timer is stopped, so pause/resume never travel through
//! the producer).
//!
//! Widgets only read [`ButtonLook`]s; they never mutate session state.

use crate::channel::FrameSender;
use crate::error::ChannelClosed;
use crate::frame::Frame;
use crate::renderer::{RenderRunState, RendererState};

/// Fill colour role for a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    Neutral,
    Active,
    Paused,
}

/// What a button currently looks like and whether it reacts to clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLook {
    pub label: &'static str,
    pub enabled: bool,
    pub tone: ButtonTone,
}

impl ButtonLook {
    const fn new(label: &'static str, enabled: bool) -> Self {
        Self {
            label,
            enabled,
            tone: ButtonTone::Neutral,
        }
    }
}

pub struct Controls {
    triggers: FrameSender,
    paused: bool,
    start: ButtonLook,
    stop: ButtonLook,
    pause: ButtonLook,
}

impl Controls {
    pub const START_LABEL: &'static str = "Start";
    pub const STOP_LABEL: &'static str = "Stop";
    pub const PAUSE_LABEL: &'static str = "Pause";
    pub const RESUME_LABEL: &'static str = "Resume";

    pub fn new(triggers: FrameSender) -> Self {
        Self {
            triggers,
            paused: false,
            start: ButtonLook::new(Self::START_LABEL, true),
            stop: ButtonLook::new(Self::STOP_LABEL, false),
            pause: ButtonLook::new(Self::PAUSE_LABEL, false),
        }
    }

    pub fn start_button(&self) -> ButtonLook {
        self.start
    }

    pub fn stop_button(&self) -> ButtonLook {
        self.stop
    }

    pub fn pause_button(&self) -> ButtonLook {
        self.pause
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Begin the session. No-op once started.
    pub fn on_start(&mut self, renderer: &mut RendererState) -> Result<(), ChannelClosed> {
        if !self.start.enabled {
            return Ok(());
        }
        self.send(Frame::Start)?;
        renderer.handle_frame(Frame::Start);
        self.start.enabled = false;
        self.start.tone = ButtonTone::Active;
        self.stop.enabled = true;
        self.pause.enabled = true;
        log::info!("start requested");
        Ok(())
    }

    /// Ask the producer to quit. The renderer keeps ticking until it drains
    /// the producer's `Quit`, so every sample sent before it is drawn.
    pub fn on_stop(&mut self) -> Result<(), ChannelClosed> {
        if !self.stop.enabled {
            return Ok(());
        }
        self.stop.enabled = false;
        self.pause.enabled = false;
        log::info!("stop requested");
        self.send(Frame::Quit)
    }

    /// Toggle between pause and resume.
    pub fn on_pause_toggle(&mut self, renderer: &mut RendererState) -> Result<(), ChannelClosed> {
        if !self.pause.enabled {
            return Ok(());
        }
        let frame = if self.paused {
            Frame::Resume
        } else {
            Frame::Pause
        };
        if let Err(closed) = self.send(frame) {
            // Producer gone: let the renderer drain what is queued and stop.
            if self.paused {
                renderer.handle_frame(Frame::Resume);
                self.paused = false;
            }
            return Err(closed);
        }
        renderer.handle_frame(frame);
        self.paused = !self.paused;
        if self.paused {
            self.pause.label = Self::RESUME_LABEL;
            self.pause.tone = ButtonTone::Paused;
            self.stop.enabled = false;
        } else {
            self.pause.label = Self::PAUSE_LABEL;
            self.pause.tone = ButtonTone::Neutral;
            self.stop.enabled = true;
        }
        log::info!("{} requested", frame.kind());
        Ok(())
    }

    /// Disable every trigger once the renderer has stopped on its own
    /// (source exhausted or producer gone).
    pub fn sync(&mut self, renderer: &RendererState) {
        if renderer.state() == RenderRunState::Stopped {
            self.start.enabled = false;
            self.stop.enabled = false;
            self.pause.enabled = false;
        }
    }

    fn send(&mut self, frame: Frame) -> Result<(), ChannelClosed> {
        let sent = self.triggers.send(frame);
        if sent.is_err() {
            log::warn!("producer is gone, {} trigger dropped", frame.kind());
            self.start.enabled = false;
            self.stop.enabled = false;
            self.pause.enabled = false;
        }
        sent
    }
}
