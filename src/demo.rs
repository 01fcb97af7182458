use std::path::{Path, PathBuf};

use tilt_viewer::data::filter::{changed_samples, despike};
use tilt_viewer::data::{binary, text};
use tilt_viewer::TiltSeries;

use crate::ui::figure::{Figure, Visualizer};

// ---------------------------------------------------------------------------
// Demo configuration
// ---------------------------------------------------------------------------

/// Files read and written by the start-up demo.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub text_in: PathBuf,
    pub text_out: PathBuf,
    pub binary_in: PathBuf,
    pub binary_out: PathBuf,
}

impl DemoConfig {
    /// `tilt.txt`, `tilt2.txt`, `tilt.dat` and `tilt2.dat` under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            text_in: dir.join("tilt.txt"),
            text_out: dir.join("tilt2.txt"),
            binary_in: dir.join("tilt.dat"),
            binary_out: dir.join("tilt2.dat"),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::in_dir(Path::new("data"))
    }
}

// ---------------------------------------------------------------------------
// Demo sequence
// ---------------------------------------------------------------------------

type ReadFn = fn(&Path) -> tilt_viewer::Result<TiltSeries>;
type WriteFn = fn(&TiltSeries, &Path) -> tilt_viewer::Result<()>;

/// Load, plot, re-write and reload the series in both formats, then plot the
/// last one against its despiked version.
///
/// When done, each `*2` file holds the same series as its input. The binary
/// files are byte-identical; the text files are only when the input was
/// written by this crate, since other writers may spell floats differently
/// (`3.0`, `1.0E-4`). Failures are logged and skip the steps that depend on
/// them.
/// Returns the series that was despiked.
pub fn run<V: Visualizer>(config: &DemoConfig, vis: &mut V) -> Option<TiltSeries> {
    let from_text = round_trip(&config.text_in, &config.text_out, text::read, text::write, vis);
    let from_binary = round_trip(
        &config.binary_in,
        &config.binary_out,
        binary::read,
        binary::write,
        vis,
    );

    let Some(td) = from_binary.or(from_text) else {
        log::warn!("No tilt data loaded; nothing to despike");
        return None;
    };

    let despiked = despike(&td);
    log::info!(
        "Despiking replaced {} of {} samples",
        changed_samples(&td, &despiked),
        td.len()
    );
    vis.show(styled(Figure::overlay(&td, &despiked), "Despiked tiltmeter data"));
    Some(td)
}

fn round_trip<V: Visualizer>(
    input: &Path,
    output: &Path,
    read: ReadFn,
    write: WriteFn,
    vis: &mut V,
) -> Option<TiltSeries> {
    let td = report(input, read(input))?;
    vis.show(styled(Figure::points(&td), &title_for(input)));

    if report(output, write(&td, output)).is_none() {
        return Some(td);
    }
    match report(output, read(output)) {
        Some(reloaded) => {
            vis.show(styled(Figure::points(&reloaded), &title_for(output)));
            Some(reloaded)
        }
        None => Some(td),
    }
}

fn styled(figure: Figure, title: &str) -> Figure {
    figure
        .title(title)
        .h_label("time (hours)")
        .v_label("tilt (urad)")
}

fn title_for(path: &Path) -> String {
    match path.file_name() {
        Some(name) => format!("Tiltmeter data ({})", name.to_string_lossy()),
        None => "Tiltmeter data".to_string(),
    }
}

/// Log a codec failure and turn it into "no result".
fn report<T>(path: &Path, result: tilt_viewer::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("{}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tilt_viewer::Sampling;

    use super::*;

    fn sample() -> TiltSeries {
        TiltSeries::new(
            Arc::new(Sampling::new(6, 0.25, 24.0)),
            vec![0.5, 0.75, 12.0, 1.0, 1.25, 1.5],
        )
        .unwrap()
    }

    #[test]
    fn full_run_plots_five_figures_and_round_trips_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = DemoConfig::in_dir(dir.path());
        text::write(&sample(), &config.text_in).unwrap();
        binary::write(&sample(), &config.binary_in).unwrap();

        let mut figures: Vec<Figure> = Vec::new();
        let despiked_from = run(&config, &mut figures).unwrap();

        assert_eq!(despiked_from, sample());
        assert_eq!(figures.len(), 5);
        assert_eq!(figures[1].title, "Tiltmeter data (tilt2.txt)");
        assert_eq!(figures[4].traces.len(), 2);
        assert_eq!(figures[4].traces[1].points[2], [24.5, 1.0]);

        let bytes = |p: &Path| std::fs::read(p).unwrap();
        assert_eq!(bytes(&config.text_in), bytes(&config.text_out));
        assert_eq!(bytes(&config.binary_in), bytes(&config.binary_out));
    }

    #[test]
    fn foreign_text_spelling_reloads_as_the_same_series() {
        let dir = tempfile::tempdir().unwrap();
        let config = DemoConfig::in_dir(dir.path());
        std::fs::write(&config.text_in, "3\n0.25\n24.0\n3.0\n1.0E-4\n-2.5\n").unwrap();

        let mut figures: Vec<Figure> = Vec::new();
        let td = run(&config, &mut figures).unwrap();

        assert_eq!(td.values(), &[3.0, 1.0e-4, -2.5]);
        assert_eq!(text::read(&config.text_out).unwrap(), td);
        assert_ne!(
            std::fs::read(&config.text_in).unwrap(),
            std::fs::read(&config.text_out).unwrap()
        );
    }

    #[test]
    fn missing_inputs_yield_no_figures() {
        let dir = tempfile::tempdir().unwrap();
        let mut figures: Vec<Figure> = Vec::new();
        assert!(run(&DemoConfig::in_dir(dir.path()), &mut figures).is_none());
        assert!(figures.is_empty());
    }

    #[test]
    fn text_alone_still_reaches_the_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let config = DemoConfig::in_dir(dir.path());
        text::write(&sample(), &config.text_in).unwrap();

        let mut figures: Vec<Figure> = Vec::new();
        assert!(run(&config, &mut figures).is_some());
        assert_eq!(figures.len(), 3);
        assert_eq!(figures[2].title, "Despiked tiltmeter data");
    }

    #[test]
    fn malformed_text_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config = DemoConfig::in_dir(dir.path());
        std::fs::write(&config.text_in, "5\n1.0\n0.0\n1.0\n2.0\n3.0\n").unwrap();
        binary::write(&sample(), &config.binary_in).unwrap();

        let mut figures: Vec<Figure> = Vec::new();
        run(&config, &mut figures).unwrap();
        assert_eq!(figures.len(), 3);
        assert!(!config.text_out.exists());
    }
}
