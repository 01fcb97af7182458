use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::Arc;

use super::error::{Error, Result};
use super::model::{Sampling, TiltSeries};

// ---------------------------------------------------------------------------
// Binary format (big-endian)
// ---------------------------------------------------------------------------
//
//   bytes 0..4    count   i32
//   bytes 4..8    delta   f32, hours
//   bytes 8..12   first   f32, hours since 2004-09-01
//   bytes 12..    count × f32 tilts, microradians
//
// Total size is exactly 12 + 4 * count bytes.

/// Size of the fixed header in bytes.
pub const HEADER_LEN: usize = 12;

/// Read a binary tilt file.
pub fn read(path: &Path) -> Result<TiltSeries> {
    let file = File::open(path)?;
    read_from(BufReader::new(file))
}

/// Read the binary layout from any byte stream.
pub fn read_from<R: Read>(mut reader: R) -> Result<TiltSeries> {
    let count = read_i32_be(&mut reader).map_err(|e| truncated(e, "header"))?;
    let count = usize::try_from(count)
        .map_err(|_| Error::parse(format!("negative sample count {count}")))?;
    let delta = read_f32_be(&mut reader).map_err(|e| truncated(e, "header"))?;
    let first = read_f32_be(&mut reader).map_err(|e| truncated(e, "header"))?;

    let mut values = Vec::with_capacity(count.min(1 << 20));
    for i in 0..count {
        let value = read_f32_be(&mut reader)
            .map_err(|e| truncated(e, &format!("value {i} of {count}")))?;
        values.push(value);
    }

    let mut rest = [0u8; 1];
    if reader.read(&mut rest)? > 0 {
        log::warn!("Ignoring trailing bytes after the {count} declared values");
    }

    TiltSeries::new(
        Arc::new(Sampling::new(count, delta, first)),
        values,
    )
}

/// Write the binary layout, truncating any existing file.
pub fn write(series: &TiltSeries, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_to(series, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write the binary layout to any sink.
pub fn write_to<W: Write>(series: &TiltSeries, mut out: W) -> Result<()> {
    let sampling = series.sampling();
    let count = i32::try_from(sampling.count()).map_err(|_| {
        Error::parse(format!(
            "{} samples do not fit the 32-bit count field",
            sampling.count()
        ))
    })?;
    out.write_all(&count.to_be_bytes())?;
    out.write_all(&sampling.delta().to_be_bytes())?;
    out.write_all(&sampling.first().to_be_bytes())?;
    for value in series.values() {
        out.write_all(&value.to_be_bytes())?;
    }
    Ok(())
}

#[inline]
fn read_array<const N: usize, R: Read>(reader: &mut R) -> io::Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

#[inline]
fn read_i32_be<R: Read>(reader: &mut R) -> io::Result<i32> {
    read_array::<4, _>(reader).map(i32::from_be_bytes)
}

#[inline]
fn read_f32_be<R: Read>(reader: &mut R) -> io::Result<f32> {
    read_array::<4, _>(reader).map(f32::from_be_bytes)
}

/// A short stream is malformed input, not an I/O failure.
fn truncated(err: io::Error, what: &str) -> Error {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        Error::parse(format!("stream ended while reading {what}"))
    } else {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(delta: f32, first: f32, values: Vec<f32>) -> TiltSeries {
        TiltSeries::new(Arc::new(Sampling::new(values.len(), delta, first)), values).unwrap()
    }

    #[test]
    fn layout_is_big_endian_and_fixed_width() {
        let mut buf = Vec::new();
        write_to(&series(0.5, 2.0, vec![1.0]), &mut buf).unwrap();
        assert_eq!(
            buf,
            vec![
                0x00, 0x00, 0x00, 0x01, // count
                0x3f, 0x00, 0x00, 0x00, // 0.5
                0x40, 0x00, 0x00, 0x00, // 2.0
                0x3f, 0x80, 0x00, 0x00, // 1.0
            ]
        );
    }

    #[test]
    fn file_size_is_header_plus_four_bytes_per_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tilt.dat");
        write(&series(1.0, 0.0, vec![0.0; 37]), &path).unwrap();
        let len = std::fs::metadata(&path).unwrap().len();
        assert_eq!(len as usize, HEADER_LEN + 4 * 37);
    }

    #[test]
    fn file_round_trip_is_bit_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tilt.dat");
        let original = series(
            0.25,
            -3.75,
            vec![0.1, f32::MAX, -0.0, f32::MIN_POSITIVE, 7.654321, f32::INFINITY],
        );

        write(&original, &path).unwrap();
        let back = read(&path).unwrap();

        assert_eq!(back.sampling().as_ref(), original.sampling().as_ref());
        let bits = |s: &TiltSeries| s.values().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&back), bits(&original));
    }

    #[test]
    fn empty_series_is_header_only() {
        let mut buf = Vec::new();
        write_to(&series(1.0, 0.0, vec![]), &mut buf).unwrap();
        assert_eq!(buf.len(), HEADER_LEN);
        let back = read_from(buf.as_slice()).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn truncated_values_are_a_parse_error() {
        let mut buf = Vec::new();
        write_to(&series(1.0, 0.0, vec![1.0, 2.0, 3.0]), &mut buf).unwrap();
        buf.truncate(buf.len() - 2);
        let err = read_from(buf.as_slice()).unwrap_err();
        assert!(matches!(err, Error::Parse(_)), "{err}");
        assert!(err.to_string().contains("value 2 of 3"), "{err}");
    }

    #[test]
    fn truncated_header_is_a_parse_error() {
        let err = read_from(&[0u8, 0, 0, 1, 0x3f][..]).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn negative_count_is_a_parse_error() {
        let mut buf = (-4i32).to_be_bytes().to_vec();
        buf.extend_from_slice(&[0u8; 8]);
        let err = read_from(buf.as_slice()).unwrap_err();
        assert!(err.to_string().contains("negative sample count -4"), "{err}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(read(&dir.path().join("absent.dat")), Err(Error::Io(_))));
    }
}
