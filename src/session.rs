//! Wiring of one plotting session: two channels, one producer, one renderer.

use crate::channel::channel;
use crate::config::PlotterConfig;
use crate::controls::Controls;
use crate::producer::ProducerLoop;
use crate::renderer::RendererState;
use crate::source::SampleSource;

/// The three parts of a session, connected and ready to run.
///
/// The producer goes to its own thread (see [`ProducerLoop::spawn`]); the
/// renderer and the controls stay together on the drawing thread.
pub struct Session<S: SampleSource> {
    pub producer: ProducerLoop<S>,
    pub renderer: RendererState,
    pub controls: Controls,
}

impl<S: SampleSource> Session<S> {
    pub fn new(source: S, cfg: &PlotterConfig) -> Self {
        let (frames_tx, frames_rx) = channel();
        let (triggers_tx, triggers_rx) = channel();
        Self {
            producer: ProducerLoop::new(source, frames_tx, triggers_rx)
                .with_pacing(cfg.sample_interval()),
            renderer: RendererState::new(frames_rx)
                .with_tick_interval(cfg.tick_interval())
                .with_precision(cfg.value_precision),
            controls: Controls::new(triggers_tx),
        }
    }
}
