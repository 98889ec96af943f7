#![allow(dead_code)]

use serialplot::{Canvas, Channel, Label};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, PartialEq)]
pub enum Draw {
    Reset,
    Patch,
    Extend {
        channel: Channel,
        indices: Vec<u64>,
        values: Vec<f64>,
    },
    Label(Label, String),
    XBounds(f64, f64),
    Idle,
}

/// Canvas that records every call for later inspection.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<Draw>,
}

impl RecordingCanvas {
    pub fn take(&mut self) -> Vec<Draw> {
        std::mem::take(&mut self.calls)
    }

    pub fn idle_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == Draw::Idle).count()
    }

    /// Every index handed to one channel's line, in call order.
    pub fn line_indices(&self, channel: Channel) -> Vec<u64> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Draw::Extend {
                    channel: ch,
                    indices,
                    ..
                } if *ch == channel => Some(indices.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    pub fn last_label(&self, label: Label) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            Draw::Label(l, text) if *l == label => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn reset_lines(&mut self) {
        self.calls.push(Draw::Reset);
    }

    fn draw_patch(&mut self) {
        self.calls.push(Draw::Patch);
    }

    fn extend_line(&mut self, channel: Channel, indices: &[u64], values: &[f64]) {
        self.calls.push(Draw::Extend {
            channel,
            indices: indices.to_vec(),
            values: values.to_vec(),
        });
    }

    fn set_label(&mut self, label: Label, text: &str) {
        self.calls.push(Draw::Label(label, text.to_string()));
    }

    fn set_x_bounds(&mut self, min: f64, max: f64) {
        self.calls.push(Draw::XBounds(min, max));
    }

    fn draw_idle(&mut self) {
        self.calls.push(Draw::Idle);
    }
}
