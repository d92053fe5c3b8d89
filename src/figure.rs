//! Chart descriptions and the native window runner.
//!
//! A [`Figure`] is a fully-resolved chart: title, axis labels, and one
//! colored line trace per IMU axis. [`run_figures`] shows a sequence of
//! figures through a single native window: closing the window dismisses the
//! current figure and reveals the next one, and the call returns only after
//! the last figure is dismissed. winit permits one event loop per process,
//! so the sequence cannot be expressed as one window per figure; the
//! advance-on-close window preserves the sequential blocking contract of
//! the logger's capture-review workflow.

use eframe::egui;
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::table::{Column, SampleTable};

/// Fixed per-axis palette: X red, Y green, Z blue.
const AXIS_COLORS: [Color32; 3] = [Color32::RED, Color32::GREEN, Color32::BLUE];

/// Trace line width in points.
const LINE_WIDTH: f32 = 1.5;

/// Window geometry for a wide time-series view.
const FIGURE_SIZE: [f32; 2] = [1000.0, 400.0];

/// One line series with a fixed color.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: &'static str,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// A complete chart description: everything [`FigureApp`] needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub traces: Vec<Trace>,
}

impl Figure {
    /// The three-axis acceleration chart for a capture.
    pub fn acceleration(table: &SampleTable) -> Self {
        Self::three_axis(
            table,
            "Acceleration Data",
            "Acceleration (raw)",
            [
                ("Accel X", Column::AccelX),
                ("Accel Y", Column::AccelY),
                ("Accel Z", Column::AccelZ),
            ],
        )
    }

    /// The three-axis angular-velocity chart for a capture.
    pub fn angular_velocity(table: &SampleTable) -> Self {
        Self::three_axis(
            table,
            "Gyroscope Data",
            "Angular Velocity (raw)",
            [
                ("Gyro X", Column::GyroX),
                ("Gyro Y", Column::GyroY),
                ("Gyro Z", Column::GyroZ),
            ],
        )
    }

    fn three_axis(
        table: &SampleTable,
        title: &'static str,
        y_label: &'static str,
        axes: [(&'static str, Column); 3],
    ) -> Self {
        let traces = axes
            .iter()
            .zip(AXIS_COLORS)
            .map(|(&(name, col), color)| Trace {
                name,
                color,
                points: table.series(col),
            })
            .collect();
        Self {
            title,
            x_label: "Sample",
            y_label,
            traces,
        }
    }
}

/// eframe application presenting a sequence of figures one at a time.
///
/// A close request on any figure but the last is intercepted: the close is
/// cancelled, the next figure takes over the window, and the title updates.
/// The close request on the last figure ends the event loop.
pub struct FigureApp {
    figures: Vec<Figure>,
    current: usize,
}

impl FigureApp {
    pub fn new(figures: Vec<Figure>) -> Self {
        Self {
            figures,
            current: 0,
        }
    }

    /// The figure currently on screen.
    pub fn current_figure(&self) -> &Figure {
        &self.figures[self.current]
    }

    /// Step to the next figure. Returns `false` when the current figure is
    /// the last one, in which case nothing changes.
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.figures.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) && self.advance() {
            let title = self.current_figure().title;
            log::debug!("figure dismissed, showing: {title}");
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.to_owned()));
        }

        let figure = self.current_figure();
        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.heading(figure.title);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            let plot = Plot::new("figure_plot")
                .legend(Legend::default())
                .x_axis_label(figure.x_label)
                .y_axis_label(figure.y_label);
            plot.show(ui, |plot_ui| {
                for trace in &figure.traces {
                    let points: PlotPoints = trace.points.clone().into();
                    plot_ui.line(
                        Line::new(trace.name, points)
                            .color(trace.color)
                            .width(LINE_WIDTH),
                    );
                }
            });
        });
    }
}

/// Show a sequence of figures in a native window and enter the eframe event
/// loop.
///
/// The call blocks until every figure has been dismissed in order.
pub fn run_figures(figures: Vec<Figure>) -> eframe::Result<()> {
    let Some(first) = figures.first() else {
        return Ok(());
    };
    let title = first.title;
    log::debug!("opening figure window: {title}");
    let mut options = eframe::NativeOptions::default();
    options.viewport = egui::ViewportBuilder::default().with_inner_size(FIGURE_SIZE);
    let result = eframe::run_native(
        title,
        options,
        Box::new(|_cc| Ok(Box::new(FigureApp::new(figures)))),
    );
    log::debug!("figure window closed");
    result
}
