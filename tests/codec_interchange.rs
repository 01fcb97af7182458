use std::sync::Arc;

use anyhow::Result;
use tilt_viewer::data::{binary, loader, text};
use tilt_viewer::{Error, Sampling, TiltSeries, despike};

fn spiky_series() -> TiltSeries {
    let values: Vec<f32> = (0..200)
        .map(|i| {
            let base = (i as f32 * 0.1).sin();
            if i % 37 == 5 { base + 25.0 } else { base }
        })
        .collect();
    TiltSeries::new(Arc::new(Sampling::new(values.len(), 0.25, 48.5)), values)
        .expect("valid series")
}

#[test]
fn text_and_binary_files_describe_the_same_series() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let txt = dir.path().join("tilt.txt");
    let dat = dir.path().join("tilt.dat");
    let series = spiky_series();

    text::write(&series, &txt)?;
    binary::write(&text::read(&txt)?, &dat)?;
    let back = binary::read(&dat)?;

    assert_eq!(back, series);
    assert_eq!(std::fs::metadata(&dat)?.len(), 12 + 4 * 200);
    Ok(())
}

#[test]
fn inexact_sampling_survives_text_to_binary() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let txt = dir.path().join("minutes.txt");
    let dat = dir.path().join("minutes.dat");
    std::fs::write(&txt, "3\n0.016666668\n2741.1\n1.0\n2.0\n3.0\n")?;

    let from_text = text::read(&txt)?;
    binary::write(&from_text, &dat)?;
    let from_binary = binary::read(&dat)?;
    assert_eq!(from_binary, from_text);

    text::write(&from_binary, &txt)?;
    assert_eq!(text::read(&txt)?, from_text);
    Ok(())
}

#[test]
fn despiking_survives_a_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("despiked.dat");
    let series = spiky_series();
    let despiked = despike(&series);

    assert!(despiked.values().iter().all(|v| v.abs() <= 1.0));
    assert_eq!(despiked.values()[0], series.values()[0]);
    assert_eq!(despiked.values()[199], series.values()[199]);

    loader::save_file(&despiked, &path)?;
    assert_eq!(loader::load_file(&path)?, despiked);
    Ok(())
}

#[test]
fn short_text_file_is_rejected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("short.txt");
    std::fs::write(&path, "5\n0.25\n0.0\n1.0\n2.0\n3.0\n")?;

    match text::read(&path) {
        Err(Error::Parse(msg)) => assert!(msg.contains("end of input"), "{msg}"),
        other => panic!("expected a parse error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn empty_series_in_every_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let empty = TiltSeries::new(Arc::new(Sampling::new(0, 1.0, 0.0)), Vec::new())?;

    for name in ["empty.txt", "empty.dat"] {
        let path = dir.path().join(name);
        loader::save_file(&empty, &path)?;
        let back = loader::load_file(&path)?;
        assert!(back.is_empty(), "{name}");
        assert!(despike(&back).is_empty());
    }
    Ok(())
}
