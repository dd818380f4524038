// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! Evaluate the Perley & Butler log-polynomial spectral model.

No attempt is made to keep the frequency inside the range over which each
source was fit. Evaluations outside of that range are permitted, but the
numbers that come out of them should not be trusted for calibration; use
[`SourceRecord::in_fit_range`] if you care.

*/

use super::{FluxError, Result, SourceRecord};


/// Compute the flux density of *source* at *freq_ghz*, in Jy.
///
/// Fails with [`FluxError::Domain`] if the frequency is not strictly
/// positive, since the model is a polynomial in its logarithm.
pub fn evaluate(source: &SourceRecord, freq_ghz: f64) -> Result<f64> {
    if !(freq_ghz > 0.) {
        return Err(FluxError::Domain(freq_ghz));
    }

    let x = freq_ghz.log10();
    let c = source.coefficients();

    // Horner's rule, highest order first.
    let log_s = c.iter().rev().fold(0., |acc, a| acc * x + a);

    Ok(10_f64.powf(log_s))
}


impl SourceRecord {
    /// Compute the flux density of this source at *freq_ghz*, in Jy. See
    /// [`evaluate`].
    pub fn flux_density(&self, freq_ghz: f64) -> Result<f64> {
        evaluate(self, freq_ghz)
    }
}
