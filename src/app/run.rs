//! Top-level entry point for running a session in a native window.

use eframe::egui;

use crate::config::PlotterConfig;
use crate::controls::Controls;
use crate::renderer::RendererState;

use super::plotter_app::PlotterApp;

/// Open the plot window and enter the eframe event loop.
///
/// The producer must already be running on its own thread. The call blocks
/// until the window is closed; dropping the app then closes the trigger
/// channel, which the producer treats as `Quit`.
pub fn run_plotter(
    renderer: RendererState,
    controls: Controls,
    cfg: PlotterConfig,
) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let [w, h] = cfg.window_size;
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size(egui::vec2(w, h)),
        ..Default::default()
    };
    let app = PlotterApp::new(renderer, controls, cfg);

    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
