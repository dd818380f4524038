// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! Evenly spaced floating-point samples.

The samples are generated by repeatedly adding the step to the start value,
so rounding error accumulates: with a step like 0.1 the emitted values will
be off in the last few bits, and whether a sample lands just below or just
above the upper bound can in principle differ between platforms. Round the
values for display (see [`FluxSample::rounded`](crate::FluxSample::rounded)).

*/

use super::{FluxError, Result};


/// A lazy iterator over `start, start + step, start + 2 step, ...`, stopping
/// once the running value exceeds the (inclusive) upper bound.
///
/// Cloning the iterator gives an independent copy that resumes from the same
/// point, so a fresh clone of a new range can be used to replay it.
#[derive(Clone,Debug,PartialEq)]
pub struct FloatRange {
    current: f64,
    stop: f64,
    step: f64,
}


/// Create a [`FloatRange`] covering `[start, stop]` with spacing *step*.
///
/// The bounds must be finite and the step positive and finite. The step must
/// also be large enough to move every value in the range, which rules out
/// e.g. a step of 1 starting at 1e17. Anything else would never terminate,
/// and [`FluxError::InvalidArgument`] is returned instead. If *start* is
/// greater than *stop*, the range is valid but empty.
pub fn frange(start: f64, stop: f64, step: f64) -> Result<FloatRange> {
    if !start.is_finite() || !stop.is_finite() {
        return Err(FluxError::InvalidArgument(format!("range bounds must be finite, got {} to {}", start, stop)));
    }

    if !(step > 0.) || !step.is_finite() {
        return Err(FluxError::InvalidArgument(format!("step must be positive and finite, got {}", step)));
    }

    // Spacing is coarsest at whichever bound has the larger magnitude.
    if start <= stop && step < ulp(start.abs().max(stop.abs())) {
        return Err(FluxError::InvalidArgument(format!(
            "step {} is too small to advance through {} to {}", step, start, stop)));
    }

    Ok(FloatRange { current: start, stop, step })
}


/// The gap between nonnegative finite *x* and the next larger `f64`.
fn ulp(x: f64) -> f64 {
    let next = f64::from_bits(x.to_bits() + 1);

    if next.is_finite() {
        next - x
    } else {
        x - f64::from_bits(x.to_bits() - 1)
    }
}


impl FloatRange {
    /// The next value that would be emitted, if it is within bounds.
    pub fn peek(&self) -> Option<f64> {
        if self.current <= self.stop {
            Some(self.current)
        } else {
            None
        }
    }
}


impl Iterator for FloatRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let x = self.peek()?;
        self.current += self.step;
        Some(x)
    }
}
