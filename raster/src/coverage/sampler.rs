use vexel_outline::*;

use smallvec::*;

/// Number of equal vertical sub-bands a pixel is divided into for anti-aliasing
pub const VERTICAL_SAMPLES: usize = 4;

/// Fine step between candidate sample lines, as a fraction of a full pixel
pub const SAMPLE_STEP: f64 = 1.0 / 256.0;

/// Number of candidate sample lines available within one sub-band
const SAMPLES_PER_BAND: usize = ((1.0 / SAMPLE_STEP) as usize) / VERTICAL_SAMPLES;

///
/// Searches one vertical sub-band of a pixel for a usable crossing list
///
/// Candidate scanlines are probed in `SAMPLE_STEP` increments starting from the
/// sub-band's lower edge at `band_start`. Samples that land on a structurally
/// significant point of the path come back degenerate and are skipped; the first
/// valid sample wins. Returns `None` when every candidate in the band was
/// degenerate, which callers treat as zero coverage for the band. The search is
/// bounded by the fixed step count, so a pathological path can never cause an
/// unbounded scan.
///
pub fn band_intercepts(path: &(impl Edge + ?Sized), band_start: f64) -> Option<SmallVec<[f64; 2]>> {
    for step in 0..SAMPLES_PER_BAND {
        let y_pos = band_start + (step as f64) * SAMPLE_STEP;

        match path.intercepts(y_pos) {
            Intercepts::Valid(crossings)    => { return Some(crossings); }
            Intercepts::Degenerate          => { /* resample slightly further down */ }
        }
    }

    None
}
