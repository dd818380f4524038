// Copyright 2017-2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

//! Print and chart the flux density of a calibration source from 1 to 10
//! GHz, using the Perley & Butler (2016) flux scale.

#[macro_use]
extern crate clap;
#[macro_use]
extern crate slog;
extern crate pbflux;

use clap::{Arg, ArgAction, ArgMatches, Command};
use pbflux::chart::Chart;
use pbflux::logging::{default_log, verbosity_level};
use pbflux::{catalog, frange, spectrum, FluxError, FluxSample, SourceRecord};
use slog::Logger;
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_START: f64 = 1.;
const DEFAULT_STOP: f64 = 10.;
const DEFAULT_STEP: f64 = 0.1;
const DEFAULT_CONSOLE_STEP: f64 = 0.5;
const DEFAULT_OUTPUT: &str = "index.html";


/// Everything that controls a run apart from the source name.
#[derive(Clone,Debug,PartialEq)]
struct ChartOptions {
    start: f64,
    stop: f64,
    step: f64,
    console_step: f64,
    output: PathBuf,
    template: Option<PathBuf>,
    open_browser: bool,
}

impl ChartOptions {
    fn from_matches(matches: &ArgMatches) -> Self {
        let get = |name: &str, default: f64| matches.get_one::<f64>(name).copied().unwrap_or(default);

        ChartOptions {
            start: get("start", DEFAULT_START),
            stop: get("stop", DEFAULT_STOP),
            step: get("step", DEFAULT_STEP),
            console_step: get("console_step", DEFAULT_CONSOLE_STEP),
            output: matches.get_one::<PathBuf>("output").cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            template: matches.get_one::<PathBuf>("template").cloned(),
            open_browser: !matches.get_flag("no_browser"),
        }
    }
}


fn make_app() -> Command {
    let ghz = |id: &'static str, long: &'static str, help: &'static str, default: &'static str| {
        Arg::new(id)
            .long(long)
            .value_name("GHZ")
            .help(help)
            .value_parser(value_parser!(f64))
            .allow_negative_numbers(true)
            .default_value(default)
    };

    Command::new(crate_name!())
        .version(crate_version!())
        .about("Compute Perley & Butler (2016) flux densities of radio calibrators")
        .arg(Arg::new("SOURCE")
             .help("The name of the source; case is ignored and spaces are allowed")
             .num_args(1..)
             .index(1))
        .arg(Arg::new("list")
             .short('l')
             .long("list")
             .help("List all the available sources")
             .action(ArgAction::SetTrue))
        .arg(ghz("start", "start", "The lowest frequency to chart", "1"))
        .arg(ghz("stop", "stop", "The highest frequency to chart", "10"))
        .arg(ghz("step", "step", "The frequency spacing of the chart", "0.1"))
        .arg(ghz("console_step", "console-step", "The frequency spacing of the printed table", "0.5"))
        .arg(Arg::new("output")
             .short('o')
             .long("output")
             .value_name("PATH")
             .help("Where to write the HTML chart")
             .value_parser(value_parser!(PathBuf))
             .default_value(DEFAULT_OUTPUT))
        .arg(Arg::new("template")
             .long("template")
             .value_name("PATH")
             .help("An HTML template to use instead of the built-in one")
             .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("no_browser")
             .long("no-browser")
             .help("Do not open the chart in a web browser")
             .action(ArgAction::SetTrue))
        .arg(Arg::new("verbose")
             .short('v')
             .long("verbose")
             .help("Log more; may be repeated")
             .action(ArgAction::Count))
        .arg(Arg::new("quiet")
             .short('q')
             .long("quiet")
             .help("Log less; may be repeated")
             .action(ArgAction::Count))
}


fn print_sources<W: Write>(out: &mut W) -> io::Result<()> {
    for name in catalog::list_names() {
        writeln!(out, "{}", name)?;
    }

    Ok(())
}


/// The original tool spelled the list flag `-list`, which clap would read as
/// a cluster of short flags.
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|a| if a == "-list" { OsString::from("--list") } else { a })
        .collect()
}


/// Multi-word names arrive as separate arguments.
fn source_name(matches: &ArgMatches) -> Option<String> {
    matches.get_many::<String>("SOURCE")
        .map(|words| words.map(|w| w.as_str()).collect::<Vec<_>>().join(" "))
}


fn warn_outside_fit(source: &SourceRecord, opts: &ChartOptions, log: &Logger) {
    if !source.in_fit_range(opts.start) || !source.in_fit_range(opts.stop) {
        warn!(log, "frequency grid extends beyond the range of the fit; values there are extrapolations";
              "source" => source.name,
              "fit_min_ghz" => source.freq_min_ghz,
              "fit_max_ghz" => source.freq_max_ghz,
              "grid_start_ghz" => opts.start,
              "grid_stop_ghz" => opts.stop,
        );
    }
}


fn open_in_browser(path: &Path) -> io::Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        process::Command::new("open")
    } else if cfg!(windows) {
        let mut c = process::Command::new("cmd");
        c.args(&["/C", "start", ""]);
        c
    } else {
        process::Command::new("xdg-open")
    };

    cmd.arg(path).spawn().map(|_| ())
}


/// Print the console table for *name*, write its chart, and return the path
/// of the chart.
fn run<W: Write>(name: &str, opts: &ChartOptions, out: &mut W, log: &Logger) -> pbflux::Result<PathBuf> {
    writeln!(out, "{}", name)?;
    let source = catalog::lookup(name)?;
    debug!(log, "resolved source"; "name" => source.name, "chi2" => source.fit_quality);
    warn_outside_fit(source, opts, log);

    for sample in spectrum(source, frange(opts.start, opts.stop, opts.console_step)?) {
        writeln!(out, "{}", sample?)?;
    }

    let samples: Vec<FluxSample> = spectrum(source, frange(opts.start, opts.stop, opts.step)?)
        .collect::<pbflux::Result<_>>()?;

    for s in &samples {
        trace!(log, "chart sample"; "freq_ghz" => s.freq_ghz, "flux_jy" => s.flux_jy);
    }

    let mut chart = Chart::new(source);

    if let Some(ref t) = opts.template {
        chart = chart.template_file(t)?;
    }

    let path = chart.samples(samples).write(&opts.output, log)?;
    writeln!(out, "file://{}", path.display())?;
    Ok(path)
}


/// Report the outcome of [`run`] and pick the process exit code.
fn finish(result: pbflux::Result<PathBuf>, opts: &ChartOptions, log: &Logger) -> i32 {
    match result {
        Ok(path) => {
            if opts.open_browser {
                if let Err(e) = open_in_browser(&path) {
                    warn!(log, "could not launch a web browser"; "err" => %e);
                }
            }

            0
        },
        Err(FluxError::NotFound(_)) => {
            eprintln!("Source name not recognized");
            1
        },
        Err(e) => {
            crit!(log, "{}", e);
            1
        },
    }
}


fn main() {
    let matches = make_app().get_matches_from(normalize_args(env::args_os()));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if matches.get_flag("list") {
        print_sources(&mut out).expect("write error");
        return;
    }

    let name = match source_name(&matches) {
        Some(n) => n,
        None => {
            // Without a source there is nothing to do but show what is available.
            make_app().print_help().expect("write error");
            writeln!(out, "\nAvailable sources:").expect("write error");
            print_sources(&mut out).expect("write error");
            return;
        },
    };

    let verbosity = matches.get_count("verbose") as i32 - matches.get_count("quiet") as i32;
    let log = default_log(verbosity_level(verbosity));
    let opts = ChartOptions::from_matches(&matches);

    let result = run(&name, &opts, &mut out, &log);
    let code = finish(result, &opts, &log);

    // Let the async drain flush before exiting.
    drop(out);
    drop(log);
    process::exit(code);
}


#[cfg(test)]
mod tests {
    use slog::{Discard, Drain, Level, Logger, Never, OwnedKVList, Record};
    use std::env;
    use std::ffi::OsString;
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::sync::{Arc, Mutex};

    use pbflux::FluxError;
    use super::{finish, make_app, normalize_args, print_sources, run, source_name, ChartOptions};

    /// Keeps the level and message of everything logged.
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<(Level, String)>>>);

    impl Drain for Capture {
        type Ok = ();
        type Err = Never;

        fn log(&self, record: &Record, _: &OwnedKVList) -> Result<(), Never> {
            self.0.lock().unwrap().push((record.level(), record.msg().to_string()));
            Ok(())
        }
    }

    fn quiet_log() -> Logger {
        Logger::root(Discard, o!())
    }

    fn temp_path(tag: &str) -> PathBuf {
        let mut p = env::temp_dir();
        p.push(format!("pbflux-main-{}-{}.html", tag, process::id()));
        p
    }

    fn test_options(tag: &str) -> ChartOptions {
        ChartOptions {
            start: 1.,
            stop: 10.,
            step: 0.1,
            console_step: 0.5,
            output: temp_path(tag),
            template: None,
            open_browser: false,
        }
    }

    #[test]
    fn unknown_source() {
        let opts = test_options("unknown");
        let mut out = Vec::new();
        let result = run("Not A Real Source", &opts, &mut out, &quiet_log());

        match result {
            Err(FluxError::NotFound(ref n)) => assert_eq!(n, "Not A Real Source"),
            ref other => panic!("expected NotFound, got {:?}", other),
        }

        // The name is echoed before it is resolved, and nothing else is printed.
        assert_eq!(String::from_utf8(out).unwrap(), "Not A Real Source\n");
        assert!(!opts.output.exists());
        assert_eq!(finish(result, &opts, &quiet_log()), 1);
    }

    #[test]
    fn console_table() {
        let opts = test_options("console");
        let mut out = Vec::new();
        let path = run("fornax a", &opts, &mut out, &quiet_log()).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + 19 + 1);
        assert_eq!(lines[0], "fornax a");
        assert_eq!(lines[3], "2.0, 104.4766");
        assert!(lines[19].starts_with("10.0, "));
        assert_eq!(lines[20], format!("file://{}", path.display()));

        assert_eq!(finish(Ok(path.clone()), &opts, &quiet_log()), 0);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn custom_template() {
        let mut opts = test_options("custom");
        let template = temp_path("template");
        fs::write(&template, "<b>$source</b> $data").unwrap();
        opts.template = Some(template.clone());
        opts.start = 1.;
        opts.stop = 2.;
        opts.step = 0.5;

        let mut out = Vec::new();
        let path = run("3C286", &opts, &mut out, &quiet_log()).unwrap();
        let html = fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<b>3C286</b> [[1.0, 17.7052], [1.5, "));
        assert!(html.ends_with("]]"));

        let _ = fs::remove_file(path);
        let _ = fs::remove_file(template);
    }

    #[test]
    fn missing_template() {
        let mut opts = test_options("missing");
        opts.template = Some(PathBuf::from("/nonexistent/pbflux/template.html"));

        let mut out = Vec::new();
        let result = run("3C286", &opts, &mut out, &quiet_log());
        assert!(matches!(result, Err(FluxError::Io(_))));
        assert_eq!(finish(result, &opts, &quiet_log()), 1);
    }

    #[test]
    fn outside_fit_range_warns_and_evaluates() {
        let capture = Capture::default();
        let log = Logger::root(capture.clone().fuse(), o!());

        // Fornax A is only fit from 0.2 to 0.5 GHz.
        let opts = test_options("outside");
        let mut out = Vec::new();
        let path = run("Fornax A", &opts, &mut out, &log).unwrap();

        let records = capture.0.lock().unwrap();
        assert!(records.iter().any(|(level, msg)| {
            *level == Level::Warning && msg.contains("beyond the range of the fit")
        }));
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 21);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn inside_fit_range_is_quiet() {
        let capture = Capture::default();
        let log = Logger::root(capture.clone().fuse(), o!());

        let opts = test_options("inside");
        let mut out = Vec::new();
        let path = run("3C48", &opts, &mut out, &log).unwrap();

        let records = capture.0.lock().unwrap();
        assert!(records.iter().all(|(level, _)| *level != Level::Warning));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn unbounded_grid_is_rejected() {
        let mut opts = test_options("unbounded");
        opts.stop = ::std::f64::INFINITY;

        let mut out = Vec::new();
        let result = run("3C48", &opts, &mut out, &quiet_log());
        assert!(matches!(result, Err(FluxError::InvalidArgument(_))));
    }

    #[test]
    fn single_dash_list() {
        let args = normalize_args(vec![OsString::from("pbflux"), OsString::from("-list")]);
        let m = make_app().get_matches_from(args);
        assert!(m.get_flag("list"));
        assert_eq!(source_name(&m), None);

        let m = make_app().get_matches_from(normalize_args(vec![OsString::from("pbflux"), OsString::from("-l")]));
        assert!(m.get_flag("list"));
    }

    #[test]
    fn source_list() {
        let mut out = Vec::new();
        print_sources(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 20);
        assert_eq!(text.lines().next(), Some("J0133-3629"));
    }

    #[test]
    fn joins_name_words() {
        let m = make_app().get_matches_from(vec!["pbflux", "cygnus", "a"]);
        assert_eq!(source_name(&m).as_deref(), Some("cygnus a"));
    }

    #[test]
    fn no_name() {
        let m = make_app().get_matches_from(vec!["pbflux"]);
        assert_eq!(source_name(&m), None);
    }

    #[test]
    fn defaults() {
        let m = make_app().get_matches_from(vec!["pbflux", "3C48"]);
        let opts = ChartOptions::from_matches(&m);
        assert_eq!(opts.start, 1.);
        assert_eq!(opts.stop, 10.);
        assert_eq!(opts.step, 0.1);
        assert_eq!(opts.console_step, 0.5);
        assert_eq!(opts.output, PathBuf::from("index.html"));
        assert_eq!(opts.template, None);
        assert!(opts.open_browser);
    }

    #[test]
    fn overrides() {
        let m = make_app().get_matches_from(vec![
            "pbflux", "--start", "0.5", "--stop", "2", "--console-step", "0.25",
            "--no-browser", "-o", "out.html", "Fornax", "A",
        ]);
        let opts = ChartOptions::from_matches(&m);
        assert_eq!(opts.start, 0.5);
        assert_eq!(opts.stop, 2.);
        assert_eq!(opts.console_step, 0.25);
        assert_eq!(opts.output, PathBuf::from("out.html"));
        assert!(!opts.open_browser);
        assert_eq!(source_name(&m).as_deref(), Some("Fornax A"));
    }

    #[test]
    fn clap_definition() {
        make_app().debug_assert();
    }
}
