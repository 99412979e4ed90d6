use anyhow::Context;
use clap::Parser;
use hbr::{ChartRenderer, ConsoleSource, EngineType, GnuplotRenderer, PlotOutput, ReadingList};
use hbr::{ReadingOutcome, ReadingSource, RigConfig, TestRun};
use heat_balance_rig as hbr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Engine performance and heat balance test
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Rig description (.json); built-in constants when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Engine type (diesel or petrol); asked on the console when omitted
    #[arg(short, long)]
    engine: Option<EngineType>,

    /// Readings (.json array); entered on the console when omitted
    #[arg(short, long, value_name = "FILE")]
    readings: Option<PathBuf>,

    /// Save the charts as .png files in this folder instead of opening gnuplot windows
    #[arg(long, value_name = "DIR")]
    plot_dir: Option<PathBuf>,

    /// Skip the charts
    #[arg(long)]
    no_plot: bool,

    /// Write every accepted reading as a tab separated table
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RigConfig::from_file(&path.to_string_lossy())
            .with_context(|| format!("loading rig file {}", path.display()))?,
        None => RigConfig::default(),
    };

    let mut console = ConsoleSource::stdio()
        .with_fuel_sample_volume(config.constants.fuel_sample_volume);
    let engine = match cli.engine {
        Some(engine) => engine,
        None => console.select_engine().context("engine selection")?,
    };
    let mut run = TestRun::new(engine, config.profile(engine), config.constants);

    let mut source: Box<dyn ReadingSource> = match &cli.readings {
        Some(path) => Box::new(
            ReadingList::from_file(&path.to_string_lossy())
                .with_context(|| format!("loading readings from {}", path.display()))?,
        ),
        None => {
            console.ask_reading_count().context("number of readings")?;
            Box::new(console)
        }
    };

    run.run(source.as_mut(), |i, outcome| match outcome {
        ReadingOutcome::Accepted(record) => println!("\n[Reading {}]\n{}", i, record),
        ReadingOutcome::Rejected(err) => println!("\n[Reading {}] rejected: {}", i, err),
    })?;

    if run.records().is_empty() {
        println!("\nNo valid readings, nothing to plot.");
        return Ok(());
    }

    if let Some(path) = &cli.export {
        run.write_to_file(&path.to_string_lossy())
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if !cli.no_plot {
        let output = match &cli.plot_dir {
            Some(dir) => PlotOutput::png(dir),
            None => PlotOutput::Window,
        };
        GnuplotRenderer::new(output)
            .render(&run.charts())
            .context("rendering charts")?;
    }

    Ok(())
}
