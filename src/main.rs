use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod chart;
mod error;
mod health;
mod loader;
mod models;
mod report;

use models::{Activity, Gender};

const DEFAULT_DATA_DIR: &str = "purrfecthealth_output";
const INPUT_FILE: &str = "cat_data.txt";
const REPORT_FILE: &str = "cat_results.txt";
const KITTENS_CHART_FILE: &str = "kittens_weight_chart.png";
const ADULTS_CHART_FILE: &str = "adults_weight_chart.png";

#[derive(Parser)]
#[command(name = "purrfect-health")]
#[command(about = "Weight status report and charts for a list of cats", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the data file, write the report and draw the charts
    Run(RunArgs),
    /// Evaluate a single cat without reading or writing any file
    Evaluate {
        #[arg(long)]
        age: f64,
        #[arg(long)]
        weight: f64,
        /// M for male, anything else is treated as female
        #[arg(long)]
        gender: String,
        #[arg(long, value_enum)]
        activity: Activity,
    },
}

#[derive(clap::Args, Default)]
struct RunArgs {
    /// Folder holding the input file and receiving every output
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Input file, defaults to <data-dir>/cat_data.txt
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    no_charts: bool,
    /// Print the run summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// Where each stage reads from and writes to.
#[derive(Debug, Clone)]
struct PipelineConfig {
    input_path: PathBuf,
    report_path: PathBuf,
    kittens_chart_path: PathBuf,
    adults_chart_path: PathBuf,
    render_charts: bool,
}

impl PipelineConfig {
    fn from_data_dir(data_dir: &Path) -> Self {
        Self {
            input_path: data_dir.join(INPUT_FILE),
            report_path: data_dir.join(REPORT_FILE),
            kittens_chart_path: data_dir.join(KITTENS_CHART_FILE),
            adults_chart_path: data_dir.join(ADULTS_CHART_FILE),
            render_charts: true,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &PipelineConfig) -> anyhow::Result<models::RunSummary> {
    let records = loader::load_records(&config.input_path)?;
    info!(count = records.len(), "records loaded");

    let rows = health::build_rows(&records);
    report::write_report(&config.report_path, &rows)?;
    info!(path = %config.report_path.display(), "report written");

    let mut chart_paths = Vec::new();
    if config.render_charts {
        let (kittens, adults) = health::partition(&rows);
        chart::render_weight_chart(&kittens, "Kittens Weight Status", &config.kittens_chart_path)?;
        chart::render_weight_chart(&adults, "Adults Weight Status", &config.adults_chart_path)?;
        info!(kittens = kittens.len(), adults = adults.len(), "charts written");
        chart_paths.push(config.kittens_chart_path.clone());
        chart_paths.push(config.adults_chart_path.clone());
    }

    Ok(report::summarize(&rows, &config.report_path, chart_paths))
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => {
            let data_dir = match args.data_dir {
                Some(dir) => dir,
                None => std::env::current_dir()
                    .context("failed to resolve the working directory")?
                    .join(DEFAULT_DATA_DIR),
            };
            std::fs::create_dir_all(&data_dir)
                .with_context(|| format!("failed to create {}", data_dir.display()))?;

            let mut config = PipelineConfig::from_data_dir(&data_dir);
            if let Some(input) = args.input {
                config.input_path = input;
            }
            config.render_charts = !args.no_charts;

            let summary = run(&config)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", report::render_summary(&summary));
            }
        }
        Commands::Evaluate {
            age,
            weight,
            gender,
            activity,
        } => {
            let evaluation = health::evaluate(age, weight, Gender::from_field(&gender), activity);
            println!("Status: {}", evaluation.status);
            println!("Diet: {}", evaluation.diet_recommendation);
            if !evaluation.activity_advice.is_empty() {
                println!("Activity: {}", evaluation.activity_advice);
            }
        }
    }

    Ok(())
}
