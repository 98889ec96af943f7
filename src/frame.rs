//! Frames exchanged between the UI, the producer and the renderer.
//!
//! Commands sent over a channel take one of five shapes:
//! - `Start`: begin streaming (trigger) / streaming has begun (to renderer)
//! - `Data`: one sample, tagged with its monotonic index
//! - `Pause` / `Resume`: suspend and continue reading
//! - `Quit`: user-initiated stop

use std::fmt;

/// Number of plotted channels.
pub const CHANNEL_COUNT: usize = 3;

/// One value per plotted channel.
pub type ChannelValues = [f64; CHANNEL_COUNT];

/// One of the plotted data channels (not to be confused with the transport channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    One,
    Two,
    Three,
}

impl Channel {
    pub const ALL: [Channel; CHANNEL_COUNT] = [Channel::One, Channel::Two, Channel::Three];

    /// Zero-based position of the channel inside a [`ChannelValues`] tuple.
    pub fn index(self) -> usize {
        match self {
            Channel::One => 0,
            Channel::Two => 1,
            Channel::Three => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Channel {}", self.index() + 1)
    }
}

/// A single message on a [`crate::channel`] instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    Start,
    Data { index: u64, values: ChannelValues },
    Pause,
    Resume,
    Quit,
}

impl Frame {
    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Frame::Start => "start",
            Frame::Data { .. } => "data",
            Frame::Pause => "pause",
            Frame::Resume => "resume",
            Frame::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_indices_follow_declaration_order() {
        let idx: Vec<usize> = Channel::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(idx, vec![0, 1, 2]);
        assert_eq!(Channel::Three.to_string(), "Channel 3");
    }

    #[test]
    fn kinds_name_every_frame() {
        let data = Frame::Data {
            index: 4,
            values: [1.0, 2.0, 3.0],
        };
        assert_eq!(data.kind(), "data");
        assert_eq!(Frame::Pause.kind(), "pause");
        assert_eq!(Frame::Quit.kind(), "quit");
    }
}
