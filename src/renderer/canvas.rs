use crate::frame::Channel;

/// Text artists shown next to the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    SampleCount,
    Value(Channel),
}

/// Drawing backend driven by [`super::RendererState`].
///
/// Calls are incremental: a line only ever receives the points appended since
/// the previous redraw, and only artists that changed are touched.
pub trait Canvas {
    /// Remove every point from every line artist.
    fn reset_lines(&mut self);

    /// Repaint the axes background patch.
    fn draw_patch(&mut self);

    /// Append points to one channel's line. `indices` and `values` have equal length.
    fn extend_line(&mut self, channel: Channel, indices: &[u64], values: &[f64]);

    fn set_label(&mut self, label: Label, text: &str);

    fn set_x_bounds(&mut self, min: f64, max: f64);

    /// Ask for a repaint at the backend's next opportunity. Must not block.
    fn draw_idle(&mut self);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn reset_lines(&mut self) {
        (**self).reset_lines()
    }
    fn draw_patch(&mut self) {
        (**self).draw_patch()
    }
    fn extend_line(&mut self, channel: Channel, indices: &[u64], values: &[f64]) {
        (**self).extend_line(channel, indices, values)
    }
    fn set_label(&mut self, label: Label, text: &str) {
        (**self).set_label(label, text)
    }
    fn set_x_bounds(&mut self, min: f64, max: f64) {
        (**self).set_x_bounds(min, max)
    }
    fn draw_idle(&mut self) {
        (**self).draw_idle()
    }
}
