use crate::frame::{Channel, ChannelValues, CHANNEL_COUNT};

/// Plotted history: one shared index axis plus one value vector per channel.
///
/// All four vectors always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesBuffer {
    indices: Vec<u64>,
    channels: [Vec<f64>; CHANNEL_COUNT],
}

impl SeriesBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: u64, values: ChannelValues) {
        self.indices.push(index);
        for (series, v) in self.channels.iter_mut().zip(values) {
            series.push(v);
        }
    }

    pub fn clear(&mut self) {
        self.indices.clear();
        for series in &mut self.channels {
            series.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[u64] {
        &self.indices
    }

    pub fn channel(&self, channel: Channel) -> &[f64] {
        &self.channels[channel.index()]
    }

    pub fn latest_index(&self) -> Option<u64> {
        self.indices.last().copied()
    }

    /// Horizontal axis range covering every stored sample: `[0, latest_index + 1]`.
    pub fn x_bounds(&self) -> [f64; 2] {
        let hi = self.latest_index().map_or(1.0, |i| i as f64 + 1.0);
        [0.0, hi]
    }

    /// Drop spare capacity once no more samples will be appended.
    pub(crate) fn freeze(&mut self) {
        self.indices.shrink_to_fit();
        for series in &mut self.channels {
            series.shrink_to_fit();
        }
    }
}
