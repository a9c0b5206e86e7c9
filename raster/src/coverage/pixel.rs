use super::sampler::*;

use vexel_outline::*;

use itertools::*;

///
/// Fraction of the unit interval `[left, left+1)` covered by the inside spans of
/// a sorted even-odd crossing list
///
/// Crossings 2k and 2k+1 bracket an inside span. A trailing unpaired crossing
/// opens a span that never closes (the parity fallback for open sub-paths and
/// precision failures): it is counted up to the interval's right edge.
///
fn span_coverage(crossings: &[f64], left: f64) -> f64 {
    let right       = left + 1.0;
    let mut covered = 0.0;

    for (enter, exit) in crossings.iter().tuples::<(_, _)>() {
        let span_start  = enter.max(left);
        let span_end    = exit.min(right);

        if span_end > span_start {
            covered += span_end - span_start;
        }
    }

    if crossings.len() % 2 == 1 {
        let span_start = crossings[crossings.len() - 1].max(left);

        if right > span_start {
            covered += right - span_start;
        }
    }

    covered
}

///
/// The fraction of the pixel at `(x, y)` that lies inside the path, in [0, 1]
///
/// The pixel's vertical extent is divided into `VERTICAL_SAMPLES` sub-bands.
/// Each band contributes the horizontal overlap between the pixel and the
/// even-odd fill spans of one valid scanline sample taken inside the band (or
/// nothing at all if the band exhausts its candidate samples). The band results
/// are averaged and clamped, which is what anti-aliases edges that cut through
/// the pixel.
///
pub fn pixel_coverage(path: &(impl Edge + ?Sized), x: usize, y: usize) -> f64 {
    let left        = x as f64;
    let mut total   = 0.0;

    for band in 0..VERTICAL_SAMPLES {
        let band_start = (y as f64) + (band as f64) / (VERTICAL_SAMPLES as f64);

        // A band with no valid sample (or no crossings at all) contributes nothing
        let mut crossings = if let Some(crossings) = band_intercepts(path, band_start) {
            crossings
        } else {
            continue;
        };

        if crossings.is_empty() {
            continue;
        }

        crossings.sort_by(|a, b| a.total_cmp(b));
        total += span_coverage(&crossings, left);
    }

    (total / (VERTICAL_SAMPLES as f64)).clamp(0.0, 1.0)
}
