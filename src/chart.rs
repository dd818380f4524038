// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! Render a spectrum as an HTML chart.

A chart is made by taking an HTML template and substituting two
placeholders: `$source` becomes the canonical name of the source, and `$data`
becomes the samples as a JavaScript array of `[frequency, flux]` pairs,
rounded to the display precision. The built-in template draws a line chart
with Google Charts; any other template using the same placeholders can be
supplied instead.

*/

use slog::Logger;
use std::fs;
use std::path::{Path, PathBuf};

use super::{FluxSample, Result, SourceRecord};

/// The template used when no other is provided.
pub const DEFAULT_TEMPLATE: &str = include_str!("chart_template.html");

const SOURCE_PLACEHOLDER: &str = "$source";
const DATA_PLACEHOLDER: &str = "$data";


/// A builder for an HTML chart of one source's spectrum.
#[derive(Clone,Debug)]
pub struct Chart<'a> {
    source: &'a SourceRecord,
    template: String,
    samples: Vec<FluxSample>,
}


impl<'a> Chart<'a> {
    /// Start a chart of *source* with the default template and no data.
    pub fn new(source: &'a SourceRecord) -> Self {
        Chart {
            source,
            template: DEFAULT_TEMPLATE.to_owned(),
            samples: Vec::new(),
        }
    }

    /// Use a different template.
    pub fn template<S: Into<String>>(mut self, template: S) -> Self {
        self.template = template.into();
        self
    }

    /// Use a template loaded from a file.
    pub fn template_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(self.template(text))
    }

    /// Add samples to the chart. They are rounded to the display precision.
    pub fn samples<I: IntoIterator<Item = FluxSample>>(mut self, samples: I) -> Self {
        self.samples.extend(samples.into_iter().map(|s| s.rounded()));
        self
    }

    /// The samples that will be plotted.
    pub fn data(&self) -> &[FluxSample] {
        &self.samples
    }

    /// Format the samples the way they are substituted for `$data`, e.g.
    /// `[[1.0, 21.1495], [1.5, 15.3686]]`.
    pub fn data_literal(&self) -> String {
        let pairs: Vec<String> = self.samples.iter()
            .map(|s| format!("[{:?}, {:?}]", s.freq_ghz, s.flux_jy))
            .collect();
        format!("[{}]", pairs.join(", "))
    }

    /// Produce the HTML text of the chart.
    pub fn render(&self) -> String {
        self.template
            .replace(SOURCE_PLACEHOLDER, self.source.name)
            .replace(DATA_PLACEHOLDER, &self.data_literal())
    }

    /// Render the chart and write it to *path*, returning the absolute path
    /// of the file that was written.
    pub fn write<P: AsRef<Path>>(&self, path: P, logger: &Logger) -> Result<PathBuf> {
        let path = path.as_ref();
        let html = self.render();

        debug!(logger, "writing chart";
               "source" => self.source.name,
               "n_samples" => self.samples.len(),
               "path" => %path.display(),
        );

        fs::write(path, html)?;
        let path = fs::canonicalize(path)?;
        info!(logger, "wrote chart"; "path" => %path.display());
        Ok(path)
    }
}
