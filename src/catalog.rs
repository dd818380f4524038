// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! The catalog of calibration sources.

The coefficients are those of Table 5 of Perley & Butler (2016), with the
higher-order terms that were not fit for a given source filled in as zero.
The table is baked into the binary and never changes; the accessors below
hand out shared references to it.

*/

use super::{FluxError, Result};


/// The fitted spectral model of one calibration source.
///
/// `a0` through `a5` are the coefficients of the polynomial in
/// `log10(nu / GHz)` that gives `log10(S / Jy)`. `fit_quality` is the
/// reduced χ² of the fit and is purely descriptive. The fit is only
/// considered trustworthy between `freq_min_ghz` and `freq_max_ghz`, but
/// nothing in this crate refuses to evaluate it elsewhere.
#[derive(Copy,Clone,Debug,PartialEq)]
pub struct SourceRecord {
    /// The canonical name of the source.
    pub name: &'static str,

    /// The constant term.
    pub a0: f64,

    /// The linear term; roughly, the spectral index at 1 GHz.
    pub a1: f64,

    /// The quadratic term.
    pub a2: f64,

    /// The cubic term.
    pub a3: f64,

    /// The quartic term.
    pub a4: f64,

    /// The quintic term.
    pub a5: f64,

    /// The χ² goodness-of-fit statistic reported for this source.
    pub fit_quality: f64,

    /// The lowest frequency covered by the fit, in GHz.
    pub freq_min_ghz: f64,

    /// The highest frequency covered by the fit, in GHz.
    pub freq_max_ghz: f64,
}

impl SourceRecord {
    /// The polynomial coefficients in increasing order of power.
    pub fn coefficients(&self) -> [f64; 6] {
        [self.a0, self.a1, self.a2, self.a3, self.a4, self.a5]
    }

    /// Whether *freq_ghz* lies inside the frequency range of the fit.
    ///
    /// This is advisory. The model itself will happily evaluate the fit outside
    /// of this range.
    pub fn in_fit_range(&self, freq_ghz: f64) -> bool {
        freq_ghz >= self.freq_min_ghz && freq_ghz <= self.freq_max_ghz
    }
}


macro_rules! source {
    ($name:expr, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr,
     $chisq:expr, $fmin:expr, $fmax:expr) => {
        SourceRecord {
            name: $name,
            a0: $a0,
            a1: $a1,
            a2: $a2,
            a3: $a3,
            a4: $a4,
            a5: $a5,
            fit_quality: $chisq,
            freq_min_ghz: $fmin,
            freq_max_ghz: $fmax,
        }
    };
}

// Ordering follows the paper, which is roughly by right ascension.

static SOURCES: [SourceRecord; 20] = [
    //      name            a0       a1       a2       a3       a4       a5      χ²    fmin   fmax
    source!("J0133-3629",   1.0440, -0.6620, -0.225 ,  0.0000,  0.0000,  0.0000, 267.0, 0.20,  4.0),
    source!("3C48",         1.3253, -0.7553, -0.1914,  0.0498,  0.0000,  0.0000,   3.1, 0.05, 50.0),
    source!("Fornax A",     2.2180, -0.6610,  0.0000,  0.0000,  0.0000,  0.0000,  17.0, 0.20,  0.5),
    source!("3C123",        1.8017, -0.7884, -0.1035, -0.0248,  0.0090,  0.0000,   1.9, 0.05, 50.0),
    source!("J0444-2809",   0.9710, -0.8940, -0.118 ,  0.0000,  0.0000,  0.0000,   3.3, 0.20,  2.0),
    source!("3C138",        1.0088, -0.4981, -0.155 , -0.0100,  0.0220,  0.0000,   1.5, 0.20, 50.0),
    source!("Pictor A",     1.9380, -0.7470, -0.074 ,  0.0000,  0.0000,  0.0000,   8.1, 0.20,  4.0),
    source!("Taurus A",     2.9516, -0.2170, -0.047 , -0.0670,  0.0000,  0.0000,   1.9, 0.05,  4.0),
    source!("3C147",        1.4516, -0.6961, -0.201 ,  0.0640, -0.0460,  0.0290,   2.2, 0.05, 50.0),
    source!("3C196",        1.2872, -0.8530, -0.153 , -0.0200,  0.0201,  0.0000,   1.6, 0.05, 50.0),
    source!("Hydra A",      1.7795, -0.9176, -0.084 , -0.0139,  0.0300,  0.0000,   3.5, 0.05, 12.0),
    source!("Virgo A",      2.4466, -0.8116, -0.048 ,  0.0000,  0.0000,  0.0000,   2.0, 0.05,  3.0),
    source!("3C286",        1.2481, -0.4507, -0.1798,  0.0357,  0.0000,  0.0000,   1.9, 0.05, 50.0),
    source!("3C295",        1.4701, -0.7658, -0.2780, -0.0347,  0.0399,  0.0000,   1.6, 0.05, 50.0),
    source!("Hercules A",   1.8298, -1.0247, -0.0951,  0.0000,  0.0000,  0.0000,   2.3, 0.20, 12.0),
    source!("3C353",        1.8627, -0.6938, -0.100 , -0.0320,  0.0000,  0.0000,   2.2, 0.20,  4.0),
    source!("3C380",        1.2320, -0.7910,  0.095 ,  0.0980, -0.1800, -0.1600,   2.9, 0.05, 50.0),
    source!("Cygnus A",     3.3498, -1.0022, -0.225 ,  0.0230,  0.0430,  0.0000,   1.9, 0.05, 12.0),
    source!("3C444",        1.1064, -1.0050, -0.075 , -0.0770,  0.0000,  0.0000,   5.7, 0.20, 12.0),
    source!("Cassiopeia A", 3.3584, -0.7518, -0.035 , -0.0710,  0.0000,  0.0000,   2.1, 0.20,  4.0),
];


/// All of the sources, in the order they are listed in the paper.
pub fn sources() -> &'static [SourceRecord] {
    &SOURCES
}


/// The names of all of the sources, in catalog order.
pub fn list_names() -> Vec<&'static str> {
    SOURCES.iter().map(|s| s.name).collect()
}


/// Find a source by name, ignoring ASCII case.
///
/// Only exact matches count: "cygnus a" finds Cygnus A but "cygnus" finds
/// nothing.
pub fn lookup(name: &str) -> Result<&'static SourceRecord> {
    SOURCES.iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| FluxError::NotFound(name.to_owned()))
}
