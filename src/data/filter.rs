use super::model::TiltSeries;

// ---------------------------------------------------------------------------
// Despiking: 3-point median
// ---------------------------------------------------------------------------

/// Remove isolated noise spikes.
///
/// The first and last samples are copied. Every interior output sample is
/// the median of the input at `i-1`, `i` and `i+1`. On ties the left
/// neighbour wins, then the right neighbour, then the sample itself.
///
/// The result shares the input's sampling; the input is not modified.
pub fn despike(series: &TiltSeries) -> TiltSeries {
    let x = series.values();
    let n = x.len();

    let despiked: Vec<f32> = (0..n)
        .map(|i| {
            if i == 0 || i == n - 1 {
                return x[i];
            }
            let (a, b, c) = (x[i - 1], x[i], x[i + 1]);
            if between(a, b, c) {
                a
            } else if between(c, a, b) {
                c
            } else {
                b
            }
        })
        .collect();

    series.with_values(despiked)
}

/// Whether `v` lies between `lo` and `hi` inclusive, in either order.
#[inline]
fn between(v: f32, lo: f32, hi: f32) -> bool {
    (v <= lo && v >= hi) || (v >= lo && v <= hi)
}

/// Number of samples whose values differ between two series.
pub fn changed_samples(a: &TiltSeries, b: &TiltSeries) -> usize {
    a.values()
        .iter()
        .zip(b.values())
        .filter(|(x, y)| x.to_bits() != y.to_bits())
        .count()
}
