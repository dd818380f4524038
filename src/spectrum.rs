// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! Sampled spectra of calibration sources.

Frequencies are reported to 0.1 GHz and flux densities to 0.1 mJy, which is
well beyond the few-percent accuracy of the underlying flux scale.

*/

use std::fmt;

use super::{FloatRange, Result, SourceRecord};

/// Decimal places kept when displaying frequencies in GHz.
pub const FREQ_DECIMALS: i32 = 1;

/// Decimal places kept when displaying flux densities in Jy.
pub const FLUX_DECIMALS: i32 = 4;


/// One point of a spectrum.
#[derive(Copy,Clone,Debug,PartialEq)]
pub struct FluxSample {
    /// The observing frequency, in GHz.
    pub freq_ghz: f64,

    /// The predicted flux density, in Jy.
    pub flux_jy: f64,
}

impl FluxSample {
    /// Round the sample to the display precision.
    pub fn rounded(&self) -> FluxSample {
        FluxSample {
            freq_ghz: round_to(self.freq_ghz, FREQ_DECIMALS),
            flux_jy: round_to(self.flux_jy, FLUX_DECIMALS),
        }
    }
}

/// Prints as `2.0, 104.4766`, using the same rounding as [`FluxSample::rounded`].
impl fmt::Display for FluxSample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let r = self.rounded();
        write!(f, "{:.*}, {:.*}",
               FREQ_DECIMALS as usize, r.freq_ghz,
               FLUX_DECIMALS as usize, r.flux_jy)
    }
}


fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (x * scale).round() / scale
}


/// A lazy iterator evaluating one source over a grid of frequencies.
#[derive(Clone,Debug)]
pub struct Spectrum<'a> {
    source: &'a SourceRecord,
    freqs: FloatRange,
}

/// Evaluate *source* at each frequency of *freqs*.
///
/// Each item is a `Result` because the model rejects non-positive
/// frequencies; a grid that starts at or below zero will yield errors for
/// those points and carry on with the rest.
pub fn spectrum(source: &SourceRecord, freqs: FloatRange) -> Spectrum {
    Spectrum { source, freqs }
}

impl<'a> Iterator for Spectrum<'a> {
    type Item = Result<FluxSample>;

    fn next(&mut self) -> Option<Self::Item> {
        let freq_ghz = self.freqs.next()?;
        Some(self.source.flux_density(freq_ghz).map(|flux_jy| FluxSample { freq_ghz, flux_jy }))
    }
}
