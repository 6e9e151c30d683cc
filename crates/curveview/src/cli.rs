use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{App, Arg, ArgMatches};

/// Viewer settings gathered from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub file: PathBuf,
    pub preserve_aspect: bool,
    pub title: String,
    /// Initial window size in logical pixels.
    pub width: f64,
    pub height: f64,
    /// env_logger filter; `None` defers to `RUST_LOG`.
    pub log_filter: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::new(),
            preserve_aspect: true,
            title: "curveview".to_string(),
            width: 800.0,
            height: 800.0,
            log_filter: None,
        }
    }
}

fn app() -> App<'static, 'static> {
    App::new("curveview")
        .about("Plots parametric cubic curves read from a file")
        .arg(Arg::with_name("FILE")
            .help("Curve file: 11 whitespace-separated reals per curve")
            .required(true)
            .index(1))
        .arg(Arg::with_name("no-aspect")
            .long("no-aspect")
            .help("Starts with aspect-ratio preservation disabled"))
        .arg(Arg::with_name("title")
            .long("title")
            .value_name("TITLE")
            .help("Sets the window title")
            .takes_value(true))
        .arg(Arg::with_name("width")
            .long("width")
            .value_name("PX")
            .help("Sets the initial window width in logical pixels")
            .takes_value(true))
        .arg(Arg::with_name("height")
            .long("height")
            .value_name("PX")
            .help("Sets the initial window height in logical pixels")
            .takes_value(true))
        .arg(Arg::with_name("log")
            .long("log")
            .value_name("FILTER")
            .help("Sets the log filter (env_logger syntax, overrides RUST_LOG)")
            .takes_value(true))
}

/// Parses the process arguments. Invalid usage prints clap's message and exits.
pub fn parse_args() -> Result<ViewerConfig> {
    config_from(&app().get_matches())
}

fn config_from(matches: &ArgMatches) -> Result<ViewerConfig> {
    let defaults = ViewerConfig::default();

    let file = matches
        .value_of("FILE")
        .map(PathBuf::from)
        .context("missing curve file argument")?;

    Ok(ViewerConfig {
        file,
        preserve_aspect: !matches.is_present("no-aspect"),
        title: matches.value_of("title").map_or(defaults.title, str::to_string),
        width: window_dimension(matches, "width", defaults.width)?,
        height: window_dimension(matches, "height", defaults.height)?,
        log_filter: matches.value_of("log").map(str::to_string),
    })
}

fn window_dimension(matches: &ArgMatches, name: &str, default: f64) -> Result<f64> {
    let Some(raw) = matches.value_of(name) else {
        return Ok(default);
    };

    let value: f64 = raw
        .parse()
        .with_context(|| format!("--{name} expects a number, got `{raw}`"))?;
    anyhow::ensure!(
        value.is_finite() && value >= 1.0,
        "--{name} must be at least 1, got {value}"
    );
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ViewerConfig> {
        let matches = app()
            .get_matches_from_safe(std::iter::once("curveview").chain(args.iter().copied()))
            .map_err(|e| anyhow::anyhow!(e.message))?;
        config_from(&matches)
    }

    #[test]
    fn file_only_uses_defaults() {
        let cfg = parse(&["curves.txt"]).unwrap();
        assert_eq!(
            cfg,
            ViewerConfig {
                file: PathBuf::from("curves.txt"),
                ..ViewerConfig::default()
            }
        );
    }

    #[test]
    fn all_options() {
        let cfg = parse(&[
            "--no-aspect",
            "--title",
            "loops",
            "--width",
            "1024",
            "--height",
            "512.5",
            "--log",
            "curveview=debug",
            "data/loops.txt",
        ])
        .unwrap();

        assert_eq!(cfg.file, PathBuf::from("data/loops.txt"));
        assert!(!cfg.preserve_aspect);
        assert_eq!(cfg.title, "loops");
        assert_eq!((cfg.width, cfg.height), (1024.0, 512.5));
        assert_eq!(cfg.log_filter.as_deref(), Some("curveview=debug"));
    }

    #[test]
    fn missing_file_is_rejected() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn bad_dimensions_are_rejected() {
        assert!(parse(&["--width", "wide", "f.txt"]).is_err());
        assert!(parse(&["--height", "0", "f.txt"]).is_err());
        assert!(parse(&["--width", "inf", "f.txt"]).is_err());
    }
}
