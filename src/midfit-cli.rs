//! Middle-ellipsis fitting for the terminal
//!
//! Fits each input line into a fixed number of columns, abbreviating in the
//! middle (`abc…hij`) when it does not fit. Lines come from the command line
//! or, if none are given, from stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use midfit::{Container, DisplaySurface, FitConfig, FitText, FixedAdvanceMeasure, FontFamilyKind, FontSpec};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "midfit-cli", version, about = "Abbreviate lines in the middle to fit a width")]
struct Args {
    /// Available width in cells (overrides the config file)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Width of one cell (overrides the config file)
    #[arg(long, value_parser = parse_advance)]
    advance: Option<f32>,

    /// Extra width per character (overrides the config file)
    #[arg(long, value_parser = parse_letter_spacing)]
    letter_spacing: Option<f32>,

    /// Config file path (default: <config dir>/midfit/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the effective settings back to the config file and exit
    #[arg(long)]
    save_config: bool,

    /// Labels to fit; stdin is read line by line when empty
    labels: Vec<String>,
}

fn parse_advance(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("advance must be a finite number above 0, got {}", value))
    }
}

fn parse_letter_spacing(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("letter spacing must be a finite number of at least 0, got {}", value))
    }
}

/// A terminal row of fixed width holding one label.
struct Row<'a> {
    width: f32,
    text: &'a str,
}

impl Container for Row<'_> {
    fn current_width(&self) -> f32 {
        self.width
    }

    fn full_text(&self) -> &str {
        self.text
    }
}

/// Writes each fitted label as one output line.
struct LineWriter<W: Write> {
    out: W,
    font: FontSpec,
    error: Option<io::Error>,
}

impl<W: Write> DisplaySurface for LineWriter<W> {
    fn font(&self) -> FontSpec {
        self.font.clone()
    }

    fn set_text(&mut self, text: &str) {
        if self.error.is_none() {
            if let Err(err) = writeln!(self.out, "{}", text) {
                self.error = Some(err);
            }
        }
    }
}

impl<W: Write> LineWriter<W> {
    fn new(out: W, config: &FitConfig) -> Self {
        Self {
            out,
            font: FontSpec {
                family: FontFamilyKind::Monospace,
                letter_spacing: config.letter_spacing,
                ..FontSpec::default()
            },
            error: None,
        }
    }

    fn check(&mut self) -> Result<()> {
        match self.error.take() {
            Some(err) => Err(err).context("Failed to write output"),
            None => Ok(()),
        }
    }
}

fn effective_config(args: &Args, path: Option<&PathBuf>) -> Result<FitConfig> {
    let mut config = FitConfig::load_or_default(path.map(|p| p.as_path()))?;
    if let Some(width) = args.width {
        config.width = width as usize;
    }
    if let Some(advance) = args.advance {
        config.advance = advance;
    }
    if let Some(letter_spacing) = args.letter_spacing {
        config.letter_spacing = letter_spacing;
    }
    if config.width == 0 {
        anyhow::bail!("width must be at least 1");
    }
    // a zero or NaN advance makes every row unsettled and nothing would print
    if !(config.advance.is_finite() && config.advance > 0.0) {
        anyhow::bail!("advance must be a finite number above 0, got {}", config.advance);
    }
    if !(config.letter_spacing.is_finite() && config.letter_spacing >= 0.0) {
        anyhow::bail!("letter spacing must be a finite number of at least 0, got {}", config.letter_spacing);
    }
    Ok(config)
}

fn fit_line<W: Write>(config: &FitConfig, label: &str, display: &mut LineWriter<W>) -> Result<()> {
    let row = Row {
        width: config.width as f32 * config.advance,
        text: label,
    };
    let mut fitter = FitText::from_container(&row, FixedAdvanceMeasure::new(config.advance));
    fitter.update(&row, display);
    if fitter.is_truncated() {
        debug!(label, shown = fitter.displayed().unwrap_or(""), "abbreviated");
    }
    display.check()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let config_path = args.config.clone().or_else(FitConfig::default_path);
    let config = effective_config(&args, config_path.as_ref())?;

    if args.save_config {
        let path = config_path.context("No config directory available; pass --config")?;
        config.save(&path)?;
        info!(path = %path.display(), "config saved");
        return Ok(());
    }

    let mut display = LineWriter::new(io::BufWriter::new(io::stdout().lock()), &config);

    if args.labels.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            fit_line(&config, &line, &mut display)?;
        }
    } else {
        for label in &args.labels {
            fit_line(&config, label, &mut display)?;
        }
    }

    display.out.flush().context("Failed to write output")?;
    Ok(())
}
