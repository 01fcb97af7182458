use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui::{self, Color32};
use tilt_viewer::TiltSeries;

use crate::color;

// ---------------------------------------------------------------------------
// Figure – what the plot area draws
// ---------------------------------------------------------------------------

/// How a trace is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceStyle {
    /// Discrete markers, one per sample.
    Points,
    /// Samples joined by a line.
    Line,
}

/// One series drawn on a figure.
#[derive(Debug, Clone)]
pub struct Trace {
    pub name: String,
    /// `[time, tilt]` pairs.
    pub points: Vec<[f64; 2]>,
    pub style: TraceStyle,
    /// `None` picks a colour from the figure's position in the list.
    pub color: Option<Color32>,
}

impl Trace {
    fn from_series(name: &str, series: &TiltSeries, style: TraceStyle) -> Self {
        Trace {
            name: name.to_string(),
            points: series.points().map(|(t, x)| [t, x]).collect(),
            style,
            color: None,
        }
    }

    fn color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }
}

/// A titled set of traces sharing one pair of axes.
#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    pub h_label: String,
    pub v_label: String,
    pub traces: Vec<Trace>,
}

impl Figure {
    fn with_traces(traces: Vec<Trace>) -> Self {
        Figure {
            title: "Tiltmeter data".to_string(),
            h_label: "time (hours)".to_string(),
            v_label: "tilt (urad)".to_string(),
            traces,
        }
    }

    /// One series as discrete points.
    pub fn points(series: &TiltSeries) -> Self {
        Self::with_traces(vec![Trace::from_series("tilt", series, TraceStyle::Points)])
    }

    /// Original (red) and despiked (blue) on the same axes.
    pub fn overlay(original: &TiltSeries, despiked: &TiltSeries) -> Self {
        Self::with_traces(vec![
            Trace::from_series("original", original, TraceStyle::Line).color(color::ORIGINAL),
            Trace::from_series("despiked", despiked, TraceStyle::Line).color(color::DESPIKED),
        ])
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn h_label(mut self, label: impl Into<String>) -> Self {
        self.h_label = label.into();
        self
    }

    pub fn v_label(mut self, label: impl Into<String>) -> Self {
        self.v_label = label.into();
        self
    }
}

// ---------------------------------------------------------------------------
// Submission to the UI thread
// ---------------------------------------------------------------------------

/// Receives finished figures. Implementations must not block.
pub trait Visualizer {
    fn show(&mut self, figure: Figure);
}

/// Collects figures in memory.
impl Visualizer for Vec<Figure> {
    fn show(&mut self, figure: Figure) {
        self.push(figure);
    }
}

/// Queues figures for the event loop, which drains them every frame.
#[derive(Clone)]
pub struct FigureQueue {
    sender: Sender<Figure>,
    ctx: Option<egui::Context>,
}

impl FigureQueue {
    /// A queue and the receiving end the app drains.
    pub fn channel() -> (Self, Receiver<Figure>) {
        let (sender, receiver) = mpsc::channel();
        (FigureQueue { sender, ctx: None }, receiver)
    }

    /// Wake the event loop on every submission from now on.
    pub fn attach(&mut self, ctx: egui::Context) {
        self.ctx = Some(ctx);
    }
}

impl Visualizer for FigureQueue {
    fn show(&mut self, figure: Figure) {
        log::debug!("Queueing figure '{}' ({} traces)", figure.title, figure.traces.len());
        if self.sender.send(figure).is_err() {
            log::warn!("Viewer has shut down; figure dropped");
            return;
        }
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}
