// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

//! Helpers shared by the pbflux tests and benchmarks.

extern crate pbflux;
extern crate rand;
#[macro_use] extern crate slog;

use pbflux::SourceRecord;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;


/// A logger that throws everything away, for tests that need to pass one in.
pub fn quiet_log() -> slog::Logger {
    slog::Logger::root(slog::Discard, o!())
}


/// One line of a tabulated reference spectrum.
#[derive(Clone,Debug,PartialEq)]
pub struct ReferenceRow {
    /// The canonical source name.
    pub source: String,

    /// The frequency, in GHz.
    pub freq_ghz: f64,

    /// The expected flux density, in Jy.
    pub flux_jy: f64,
}


/// Read a tab-separated table of `source`, `freq_ghz`, `flux_jy`. Lines
/// starting with `#` are skipped.
pub fn load_reference<P: AsRef<Path>>(path: P) -> io::Result<Vec<ReferenceRow>> {
    let f = BufReader::new(File::open(path)?);
    let mut rows = Vec::new();

    for line in f.lines() {
        let line = line?;

        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let bad = || io::Error::new(io::ErrorKind::InvalidData, format!("bad reference line: {:?}", line));
        let cols: Vec<&str> = line.split('\t').collect();

        if cols.len() != 3 {
            return Err(bad());
        }

        rows.push(ReferenceRow {
            source: cols[0].to_owned(),
            freq_ghz: cols[1].parse().map_err(|_| bad())?,
            flux_jy: cols[2].parse().map_err(|_| bad())?,
        });
    }

    Ok(rows)
}


/// How a [`Sampler`] spreads its draws between its bounds.
#[derive(Copy,Clone,Debug,Eq,PartialEq)]
pub enum Scale {
    /// Uniform in the value itself.
    Linear,

    /// Uniform in the logarithm of the value.
    Log,
}


/// Draws random values between two bounds.
#[derive(Copy,Clone,Debug,PartialEq)]
pub struct Sampler {
    scale: Scale,
    low: f64,
    range: f64,
}

impl Sampler {
    /// Create a new Sampler. The bounds may be given in either order.
    pub fn new(scale: Scale, a: f64, b: f64) -> Self {
        let (low, high) = match scale {
            Scale::Linear => (a.min(b), a.max(b)),
            Scale::Log => (a.min(b).ln(), a.max(b).ln()),
        };

        Sampler { scale, low, range: high - low }
    }

    /// Sample frequencies in GHz, log-uniformly, since the flux models are
    /// polynomials in log-frequency.
    pub fn frequencies(lo_ghz: f64, hi_ghz: f64) -> Self {
        Sampler::new(Scale::Log, lo_ghz, hi_ghz)
    }

    /// Sample frequencies across the range over which *source*'s fit holds.
    pub fn fit_range(source: &SourceRecord) -> Self {
        Sampler::frequencies(source.freq_min_ghz, source.freq_max_ghz)
    }

    /// Draw one value.
    pub fn get(&self) -> f64 {
        let n = self.low + rand::random::<f64>() * self.range;

        match self.scale {
            Scale::Linear => n,
            Scale::Log => n.exp(),
        }
    }

    /// Draw *n* values.
    pub fn take(&self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.get()).collect()
    }
}
