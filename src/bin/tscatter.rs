use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tscatter::render::{HtmlFile, JsonFile, Renderer, StaticImage};
use tscatter::{ChartConfig, Settings, storage};

#[derive(Parser, Debug)]
#[command(
    name = "tscatter",
    version,
    about = "Turn tabular time series into Plotly scatter charts"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a CSV/JSON table and write the chart (Plotly JSON to stdout by default).
    Plot(PlotArgs),
}

#[derive(Args, Debug)]
struct PlotArgs {
    /// Input table: CSV with the index in the first column, or JSON columns/records.
    input: PathBuf,
    /// JSON file with any of: title, xlabel, ylabel, dropdown, legend, mode.
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Chart title.
    #[arg(long)]
    title: Option<String>,
    /// X-axis label.
    #[arg(long)]
    xlabel: Option<String>,
    /// Y-axis label.
    #[arg(long)]
    ylabel: Option<String>,
    /// Add a dropdown that shows one series at a time.
    #[arg(long, default_value_t = false)]
    dropdown: bool,
    /// Hide the legend.
    #[arg(long, default_value_t = false)]
    no_legend: bool,
    /// lines, markers or lines+markers.
    #[arg(long)]
    mode: Option<String>,
    /// Column to leave out (repeatable).
    #[arg(long = "drop")]
    drop: Vec<String>,
    /// Write a standalone HTML page.
    #[arg(long)]
    html: Option<PathBuf>,
    /// Write Plotly figure JSON.
    #[arg(long)]
    json: Option<PathBuf>,
    /// Write a static chart (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the static chart (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the static chart (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Plot(args) => cmd_plot(args),
    }
}

fn load_settings(path: &Path) -> Result<Settings> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing settings {}", path.display()))
}

fn cmd_plot(args: PlotArgs) -> Result<()> {
    let mut data = storage::load_table(&args.input)?;
    for name in &args.drop {
        data.drop_column(name)?;
    }

    let settings = match args.settings.as_ref() {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    let mut chart = ChartConfig::from_settings(data, &settings)?;
    if let Some(title) = args.title {
        chart.set_title(title)?;
    }
    if let Some(xlabel) = args.xlabel {
        chart.set_xlabel(xlabel)?;
    }
    if let Some(ylabel) = args.ylabel {
        chart.set_ylabel(ylabel)?;
    }
    if args.dropdown {
        chart.set_dropdown(true)?;
    }
    if args.no_legend {
        chart.set_legend(false)?;
    }
    if let Some(mode) = args.mode {
        chart.set_mode(mode)?;
    }

    let mut renderers: Vec<Box<dyn Renderer>> = Vec::new();
    if let Some(path) = args.html {
        renderers.push(Box::new(HtmlFile::new(path)));
    }
    if let Some(path) = args.json {
        renderers.push(Box::new(JsonFile::new(path)));
    }
    if let Some(path) = args.plot {
        renderers.push(Box::new(StaticImage::new(path, args.width, args.height)));
    }

    if renderers.is_empty() {
        let spec = serde_json::to_string_pretty(&chart.figure().to_plotly_json())?;
        println!("{}", spec);
        return Ok(());
    }
    for renderer in &renderers {
        chart.show(renderer.as_ref())?;
    }
    eprintln!(
        "Charted {} series over {} rows",
        chart.data().columns().len(),
        chart.data().len()
    );
    Ok(())
}
