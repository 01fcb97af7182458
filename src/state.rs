use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use tilt_viewer::data::filter::{changed_samples, despike};
use tilt_viewer::TiltSeries;

use crate::ui::figure::{Figure, FigureQueue, Visualizer};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// A series opened from the File menu, with its despiked counterpart.
pub struct OpenedSeries {
    pub path: PathBuf,
    pub series: TiltSeries,
    pub despiked: TiltSeries,
}

impl OpenedSeries {
    /// Samples the despiker replaced.
    pub fn spikes_removed(&self) -> usize {
        changed_samples(&self.series, &self.despiked)
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Figures received so far, in submission order.
    pub figures: Vec<Figure>,

    /// Index into `figures` of the one being drawn.
    pub selected: Option<usize>,

    /// Most recent series opened from the File menu.
    pub opened: Option<OpenedSeries>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    queue: FigureQueue,
    incoming: Receiver<Figure>,
}

impl AppState {
    pub fn new(queue: FigureQueue, incoming: Receiver<Figure>) -> Self {
        Self {
            figures: Vec::new(),
            selected: None,
            opened: None,
            status_message: None,
            queue,
            incoming,
        }
    }

    /// Move queued figures into the list. Selects the first figure ever
    /// received, and the newest one when `follow` is set.
    pub fn drain_figures(&mut self, follow: bool) -> usize {
        let before = self.figures.len();
        self.figures.extend(self.incoming.try_iter());
        let received = self.figures.len() - before;

        if received > 0 && (follow || self.selected.is_none()) {
            self.selected = Some(if follow { self.figures.len() - 1 } else { 0 });
        }
        received
    }

    /// The figure currently drawn, if any.
    pub fn selected_figure(&self) -> Option<(usize, &Figure)> {
        let idx = self.selected?;
        self.figures.get(idx).map(|fig| (idx, fig))
    }

    /// Ingest a newly opened series: despike it and queue both plots.
    pub fn set_series(&mut self, path: PathBuf, series: TiltSeries) {
        let despiked = despike(&series);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        self.queue
            .show(Figure::points(&series).title(format!("Tiltmeter data ({name})")));
        self.queue.show(
            Figure::overlay(&series, &despiked).title(format!("Despiked tiltmeter data ({name})")),
        );

        let opened = OpenedSeries {
            path,
            series,
            despiked,
        };
        log::info!(
            "{name}: {} samples, {} despiked",
            opened.series.len(),
            opened.spikes_removed()
        );
        self.opened = Some(opened);
        self.status_message = None;
        self.drain_figures(true);
    }
}
