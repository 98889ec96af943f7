//! Native window for a plotting session.
//!
//! | Sub-module       | Responsibility |
//! | ---------------- | -------------- |
//! | [`canvas`]       | [`EguiCanvas`]: the renderer's canvas, drawn with `egui_plot` |
//! | [`plotter_app`]  | [`PlotterApp`]: `eframe::App` with the control side panel |
//! | [`run`]          | [`run_plotter()`] entry point |

mod canvas;
mod plotter_app;
mod run;

pub use canvas::EguiCanvas;
pub use plotter_app::PlotterApp;
pub use run::run_plotter;
