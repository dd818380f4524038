// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! Predict the flux densities of standard radio calibration sources.

This crate implements the flux density scale of [Perley and Butler (2016;
DOI:10.3847/1538-4365/aa6df9)](https://arxiv.org/abs/1609.05940), in which
the spectrum of each of twenty well-studied calibrators is described by a
polynomial in log-frequency:

```text
log10(S / Jy) = a0 + a1 x + a2 x^2 + a3 x^3 + a4 x^4 + a5 x^5,    x = log10(nu / GHz)
```

The [`catalog`] module holds the fitted coefficients from Table 5 of the
paper, [`model`] evaluates them, [`sample`] generates frequency grids, and
[`spectrum`] ties the pieces together into a stream of (frequency, flux)
samples with the display precision used throughout. The [`chart`] module
renders such a stream into a small HTML page.

```
let source = pbflux::catalog::lookup("3c286").unwrap();
let s = source.flux_density(1.0).unwrap();
assert!((s - 17.7052).abs() < 1e-3);
```

*/

#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;
#[macro_use]
extern crate slog;

pub mod catalog;
pub mod chart;
pub mod logging;
pub mod model;
pub mod sample;
pub mod spectrum;

pub use catalog::SourceRecord;
pub use sample::{frange, FloatRange};
pub use spectrum::{spectrum, FluxSample, Spectrum};


/// Errors that can arise when computing flux densities.
#[derive(Debug, thiserror::Error)]
pub enum FluxError {
    /// No catalog entry has the requested name.
    #[error("source name not recognized: \"{0}\"")]
    NotFound(String),

    /// The model was evaluated at a frequency where log10 is undefined.
    #[error("frequency must be positive, got {0} GHz")]
    Domain(f64),

    /// A caller-supplied parameter is unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading a chart template or writing a chart failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A `Result` whose error type is [`FluxError`].
pub type Result<T> = std::result::Result<T, FluxError>;
