//! Standalone application wrapper for a plotting session.
//!
//! [`PlotterApp`] owns the renderer, the controls and the canvas. Each frame
//! it polls the renderer's tick timer, draws the control side panel and the
//! plot, then schedules a repaint for the next tick.

use std::time::Instant;

use chrono::{DateTime, Local};
use eframe::egui;
use egui::Color32;
use egui_phosphor::regular as icons;

use crate::config::PlotterConfig;
use crate::controls::{ButtonLook, ButtonTone, Controls};
use crate::frame::Channel;
use crate::renderer::{Label, RenderRunState, RendererState};

use super::canvas::EguiCanvas;

pub struct PlotterApp {
    pub renderer: RendererState,
    pub controls: Controls,
    pub canvas: EguiCanvas,
    pub config: PlotterConfig,
    started_at: Option<DateTime<Local>>,
}

impl PlotterApp {
    pub fn new(renderer: RendererState, controls: Controls, config: PlotterConfig) -> Self {
        Self {
            renderer,
            controls,
            canvas: EguiCanvas::new(),
            config,
            started_at: None,
        }
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);

        let start = self.controls.start_button();
        if control_button(ui, start, icons::PLAY).clicked() {
            match self.controls.on_start(&mut self.renderer) {
                Ok(()) => self.started_at = Some(Local::now()),
                Err(e) => log::warn!("start failed: {}", e),
            }
        }

        let pause = self.controls.pause_button();
        let pause_icon = if self.controls.is_paused() {
            icons::PLAY
        } else {
            icons::PAUSE
        };
        if control_button(ui, pause, pause_icon).clicked() {
            if let Err(e) = self.controls.on_pause_toggle(&mut self.renderer) {
                log::warn!("pause toggle failed: {}", e);
            }
        }

        let stop = self.controls.stop_button();
        if control_button(ui, stop, icons::STOP).clicked() {
            if let Err(e) = self.controls.on_stop() {
                log::warn!("stop failed: {}", e);
            }
        }

        ui.separator();
        ui.label("Sample Count");
        ui.monospace(self.canvas.label(Label::SampleCount));
        for ch in Channel::ALL {
            let [r, g, b] = self.config.channel_color(ch);
            ui.colored_label(Color32::from_rgb(r, g, b), self.config.channel_name(ch));
            ui.monospace(self.canvas.label(Label::Value(ch)));
        }

        ui.separator();
        let status = match (self.renderer.state(), self.controls.is_paused()) {
            (RenderRunState::Idle, _) => "Idle",
            (RenderRunState::Active, true) => "Paused",
            (RenderRunState::Active, false) => "Running",
            (RenderRunState::Stopped, _) => "Stopped",
        };
        ui.label(status);
        if let Some(t) = self.started_at {
            ui.small(format!("Started {}", t.format("%H:%M:%S")));
        }
    }
}

fn control_button(ui: &mut egui::Ui, look: ButtonLook, icon: &str) -> egui::Response {
    let mut button = egui::Button::new(format!("{} {}", icon, look.label))
        .min_size(egui::vec2(110.0, 28.0));
    match look.tone {
        ButtonTone::Neutral => {}
        ButtonTone::Active => button = button.fill(Color32::from_rgb(40, 160, 60)),
        ButtonTone::Paused => button = button.fill(Color32::from_rgb(230, 190, 40)),
    }
    ui.add_enabled(look.enabled, button)
}

impl eframe::App for PlotterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.canvas.attach(ctx);
        self.renderer.poll(Instant::now(), &mut self.canvas);
        self.controls.sync(&self.renderer);

        egui::SidePanel::right("serialplot_controls")
            .resizable(false)
            .show(ctx, |ui| self.controls_ui(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.canvas.show(ui, &self.config));

        if let Some(wait) = self.renderer.next_tick_in(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
