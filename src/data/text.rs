use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::error::{Error, Result};
use super::model::{Sampling, TiltSeries};

// ---------------------------------------------------------------------------
// Text format
// ---------------------------------------------------------------------------

/// Text layout, whitespace separated (one token per line when written):
///
/// ```text
/// 2741        number of samples
/// 0.25        sampling interval, hours
/// 1.5         time of first sample, hours since 2004-09-01
/// 3.125       tilts, microradians, one per sample
/// ...
/// ```
pub fn read(path: &Path) -> Result<TiltSeries> {
    let bytes = std::fs::read(path)?;
    let text = std::str::from_utf8(&bytes).map_err(|e| {
        Error::parse(format!("invalid UTF-8 at byte {}", e.valid_up_to()))
    })?;
    parse(text)
}

/// Parse the text layout from an in-memory string.
pub fn parse(text: &str) -> Result<TiltSeries> {
    let mut tokens = text.split_whitespace().enumerate();

    let count: usize = next_token(&mut tokens, "sample count")?;
    let delta: f32 = next_token(&mut tokens, "sampling interval")?;
    let first: f32 = next_token(&mut tokens, "first sample time")?;

    let mut values = Vec::with_capacity(count.min(1 << 20));
    for i in 0..count {
        let value: f32 = next_token(&mut tokens, &format!("value {i} of {count}"))?;
        values.push(value);
    }

    let trailing = tokens.count();
    if trailing > 0 {
        log::warn!("Ignoring {trailing} tokens after the {count} declared values");
    }

    TiltSeries::new(Arc::new(Sampling::new(count, delta, first)), values)
}

fn next_token<'a, T, I>(tokens: &mut I, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    I: Iterator<Item = (usize, &'a str)>,
{
    let (pos, tok) = tokens
        .next()
        .ok_or_else(|| Error::parse(format!("unexpected end of input reading {what}")))?;
    tok.parse::<T>()
        .map_err(|e| Error::parse(format!("token {}: '{tok}' is not a valid {what}: {e}", pos + 1)))
}

/// Write the text layout, truncating any existing file.
pub fn write(series: &TiltSeries, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_to(series, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write the text layout to any sink.
///
/// `Display` for floats prints the shortest string that parses back to the
/// same bits, so `parse` reproduces delta, first and every value exactly.
pub fn write_to<W: Write>(series: &TiltSeries, mut out: W) -> Result<()> {
    let sampling = series.sampling();
    writeln!(out, "{}", sampling.count())?;
    writeln!(out, "{}", sampling.delta())?;
    writeln!(out, "{}", sampling.first())?;
    for value in series.values() {
        writeln!(out, "{value}")?;
    }
    Ok(())
}
