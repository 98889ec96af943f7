//! Driving a session without a window.
//!
//! [`run_headless`] plays the operator: it presses Start, then ticks the
//! renderer on the calling thread until the stream ends. [`LogCanvas`]
//! reports each redraw through `log` instead of drawing it.

use std::thread;
use std::time::Instant;

use crate::controls::Controls;
use crate::error::ChannelClosed;
use crate::frame::{Channel, CHANNEL_COUNT};
use crate::renderer::{Canvas, Label, RenderRunState, RendererState};

/// Canvas that keeps counters and logs the latest labels.
#[derive(Debug, Default)]
pub struct LogCanvas {
    pub redraws: u64,
    pub points: u64,
    sample_count: String,
    values: [String; CHANNEL_COUNT],
}

impl Canvas for LogCanvas {
    fn reset_lines(&mut self) {
        self.points = 0;
    }

    fn draw_patch(&mut self) {}

    fn extend_line(&mut self, channel: Channel, indices: &[u64], _values: &[f64]) {
        if channel == Channel::One {
            self.points += indices.len() as u64;
        }
    }

    fn set_label(&mut self, label: Label, text: &str) {
        match label {
            Label::SampleCount => self.sample_count = text.to_string(),
            Label::Value(ch) => self.values[ch.index()] = text.to_string(),
        }
    }

    fn set_x_bounds(&mut self, _min: f64, _max: f64) {}

    fn draw_idle(&mut self) {
        self.redraws += 1;
        log::info!(
            "sample {} | {} ({} points)",
            self.sample_count,
            self.values.join(" | "),
            self.points
        );
    }
}

/// Start the session and tick until the renderer stops.
///
/// Fails only if the producer is already gone when Start is pressed.
pub fn run_headless<C: Canvas>(
    renderer: &mut RendererState,
    controls: &mut Controls,
    mut canvas: C,
) -> Result<C, ChannelClosed> {
    controls.on_start(renderer)?;
    while renderer.state() != RenderRunState::Stopped {
        match renderer.next_tick_in(Instant::now()) {
            Some(wait) if !wait.is_zero() => thread::sleep(wait),
            Some(_) => {}
            // Not ticking and nobody here to resume it.
            None => break,
        }
        renderer.poll(Instant::now(), &mut canvas);
        controls.sync(renderer);
    }
    Ok(canvas)
}
