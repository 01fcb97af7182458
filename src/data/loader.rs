use std::fmt;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::TiltSeries;
use super::{binary, text};

// ---------------------------------------------------------------------------
// Format selection
// ---------------------------------------------------------------------------

/// On-disk representation of a tilt series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Whitespace-separated decimal tokens (`.txt`).
    Text,
    /// Big-endian fixed-width header and `f32` values (`.dat`, `.bin`).
    Binary,
}

impl Format {
    /// File extensions accepted for each format, for file dialogs.
    pub const TEXT_EXTENSIONS: &'static [&'static str] = &["txt"];
    pub const BINARY_EXTENSIONS: &'static [&'static str] = &["dat", "bin"];

    /// Pick the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        if Self::TEXT_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Format::Text)
        } else if Self::BINARY_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Format::Binary)
        } else {
            bail!("Unsupported file extension: .{ext}")
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Binary => write!(f, "binary"),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a tilt series from a file. Dispatch by extension.
pub fn load_file(path: &Path) -> Result<TiltSeries> {
    let format = Format::from_path(path)?;
    let series = match format {
        Format::Text => text::read(path),
        Format::Binary => binary::read(path),
    }
    .with_context(|| format!("reading {format} tilt file {}", path.display()))?;

    log::info!(
        "Loaded {} ({}) from {}",
        series.sampling(),
        format,
        path.display()
    );
    Ok(series)
}

/// Save a tilt series to a file. Dispatch by extension.
pub fn save_file(series: &TiltSeries, path: &Path) -> Result<()> {
    let format = Format::from_path(path)?;
    match format {
        Format::Text => text::write(series, path),
        Format::Binary => binary::write(series, path),
    }
    .with_context(|| format!("writing {format} tilt file {}", path.display()))?;

    log::info!("Saved {} samples to {}", series.len(), path.display());
    Ok(())
}
