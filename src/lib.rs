//! serialplot crate root: re-exports and module wiring.
//!
//! Streams three-channel samples from a serial device or a file and plots
//! them live. Two workers cooperate over frame channels:
//! - `producer`: reads the `source` and forwards `Data` frames, obeying
//!   start / pause / resume / quit triggers
//! - `renderer`: drains frames once per tick and redraws incrementally
//!
//! The remaining modules are plumbing:
//! - `channel` / `frame`: the transport and its message type
//! - `controls`: trigger buttons and their affordances
//! - `session`: wires the pieces for one run
//! - `app`: the egui/eframe window, `headless`: the windowless driver
//! - `config`, `error`

pub mod app;
pub mod channel;
pub mod config;
pub mod controls;
pub mod error;
pub mod frame;
pub mod headless;
pub mod producer;
pub mod renderer;
pub mod session;
pub mod source;

// Public re-exports for a compact external API
pub use app::run_plotter;
pub use channel::{channel, FrameReceiver, FrameSender};
pub use config::PlotterConfig;
pub use controls::{ButtonLook, ButtonTone, Controls};
pub use error::{ChannelClosed, ConfigError, MalformedSample};
pub use frame::{Channel, ChannelValues, Frame, CHANNEL_COUNT};
pub use headless::{run_headless, LogCanvas};
pub use producer::{ExitReason, ProducerLoop, ProducerSummary, RunState};
pub use renderer::{Canvas, Label, RenderRunState, RendererState, SeriesBuffer};
pub use session::Session;
pub use source::{parse_record, LineSource, RecordSource, SampleSource, WaveSource};
