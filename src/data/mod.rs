/// Data layer: core types, codecs, and filtering.
///
/// Architecture:
/// ```text
///   tilt.txt          tilt.dat
///      │                  │
///      ▼                  ▼
///  ┌────────┐        ┌──────────┐
///  │  text  │        │  binary  │   parse / serialize
///  └────────┘        └──────────┘
///       \               /
///        ▼             ▼
///      ┌─────────────────┐
///      │   TiltSeries    │  Arc<Sampling> + Vec<f32>
///      └─────────────────┘
///               │
///               ▼
///         ┌──────────┐
///         │  filter  │  3-point median → new TiltSeries
///         └──────────┘
/// ```
///
/// `loader` picks the codec from the file extension.

pub mod binary;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod text;
