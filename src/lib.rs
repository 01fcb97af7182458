//! Tiltmeter data: the sampled series type, its text and binary codecs and
//! the despiking filter. Nothing in here depends on the UI.

pub mod data;

pub use data::error::{Error, Result};
pub use data::filter::despike;
pub use data::model::{Sampling, TiltSeries};
