use eframe::egui;
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoint};

use crate::config::PlotterConfig;
use crate::frame::{Channel, CHANNEL_COUNT};
use crate::renderer::{Canvas, Label};

/// Retained artists for the egui plot.
///
/// egui is immediate mode, so the canvas keeps the line points and label
/// texts the renderer pushed and replays them every frame in [`EguiCanvas::show`].
#[derive(Default)]
pub struct EguiCanvas {
    lines: [Vec<PlotPoint>; CHANNEL_COUNT],
    sample_count: String,
    values: [String; CHANNEL_COUNT],
    x_bounds: [f64; 2],
    ctx: Option<egui::Context>,
}

impl EguiCanvas {
    pub fn new() -> Self {
        Self {
            sample_count: "0".to_string(),
            values: std::array::from_fn(|_| "0.0".to_string()),
            x_bounds: [0.0, 1.0],
            ..Default::default()
        }
    }

    /// Context used for idle repaint requests.
    pub fn attach(&mut self, ctx: &egui::Context) {
        if self.ctx.is_none() {
            self.ctx = Some(ctx.clone());
        }
    }

    pub fn label(&self, label: Label) -> &str {
        match label {
            Label::SampleCount => &self.sample_count,
            Label::Value(ch) => &self.values[ch.index()],
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, cfg: &PlotterConfig) {
        let [x0, x1] = self.x_bounds;
        let [y0, y1] = cfg.y_range;
        Plot::new("serialplot_series")
            .legend(Legend::default())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(x0..=x1);
                plot_ui.set_plot_bounds_y(y0..=y1);
                for ch in Channel::ALL {
                    let [r, g, b] = cfg.channel_color(ch);
                    let points = self.lines[ch.index()].as_slice();
                    let line = Line::new(cfg.channel_name(ch), points)
                        .color(Color32::from_rgb(r, g, b));
                    plot_ui.line(line);
                }
            });
    }
}

impl Canvas for EguiCanvas {
    fn reset_lines(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
    }

    // egui clears the plot area on every frame.
    fn draw_patch(&mut self) {}

    fn extend_line(&mut self, channel: Channel, indices: &[u64], values: &[f64]) {
        self.lines[channel.index()].extend(
            indices
                .iter()
                .zip(values)
                .map(|(&i, &v)| PlotPoint::new(i as f64, v)),
        );
    }

    fn set_label(&mut self, label: Label, text: &str) {
        match label {
            Label::SampleCount => self.sample_count = text.to_string(),
            Label::Value(ch) => self.values[ch.index()] = text.to_string(),
        }
    }

    fn set_x_bounds(&mut self, min: f64, max: f64) {
        self.x_bounds = [min, max];
    }

    fn draw_idle(&mut self) {
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}
