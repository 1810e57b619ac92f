//! aerostab - linear stability and modal analysis of a fixed-wing aircraft

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aerostab::components::{Axis, FlightCase, FlightCaseSource, ModeKind};
use aerostab::rendering::{encode_png, legend, render_response};
use aerostab::resources::AnalysisSettings;
use aerostab::systems::{StabilityAnalysis, StabilityReport};

#[derive(Parser, Debug)]
#[command(name = "aerostab")]
#[command(about = "Stability derivatives, modes and transfer functions of a cruise condition")]
#[command(version)]
struct Args {
    /// Equations of motion to analyse
    #[arg(short, long, value_enum, default_value = "longitudinal")]
    axis: AxisArg,

    /// Cruise-condition JSON; without input files the business jet preset is used
    #[arg(long)]
    cruise: Option<PathBuf>,

    /// Dimensionless coefficient JSON for the chosen axis
    #[arg(long)]
    coefficients: Option<PathBuf>,

    /// Wing geometry JSON
    #[arg(long)]
    geometry: Option<PathBuf>,

    /// YAML analysis settings
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Directory for the matrix JSON and plots
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Write a PNG of every mode response
    #[arg(long)]
    plots: bool,

    /// Print every mode response as a base64 PNG
    #[arg(long)]
    print_images: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AxisArg {
    Longitudinal,
    Lateral,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Longitudinal => Axis::Longitudinal,
            AxisArg::Lateral => Axis::Lateral,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let axis = Axis::from(args.axis);

    let settings = match &args.settings {
        Some(path) => AnalysisSettings::from_file(path)
            .with_context(|| format!("reading settings from {}", path.display()))?,
        None => AnalysisSettings::default(),
    };

    let source = match (&args.cruise, &args.coefficients, &args.geometry) {
        (Some(cruise), Some(coefficients), Some(geometry)) => FlightCaseSource::Files {
            axis,
            cruise: cruise.clone(),
            coefficients: coefficients.clone(),
            geometry: geometry.clone(),
        },
        (None, None, None) => FlightCaseSource::BusinessJet(axis),
        _ => bail!("--cruise, --coefficients and --geometry must be given together"),
    };
    let case = FlightCase::new(source).context("loading flight case")?;

    let report = StabilityAnalysis::run(&case, &settings)?;
    print_report(&report, &settings);

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let matrix_path = report.write_matrices(&args.output)?;
    info!("Matrices written to {}", matrix_path.display());

    for &kind in ModeKind::for_axis(axis) {
        if args.plots {
            let response = report.mode_response(kind, &settings)?;
            let png = encode_png(&render_response(&response, &settings.plot)?)?;
            let file_name = format!("{}.png", kind.label().to_lowercase().replace(' ', "_"));
            let path = args.output.join(file_name);
            std::fs::write(&path, png).with_context(|| format!("writing {}", path.display()))?;
            info!("{} response plotted to {}", kind, path.display());
            println!("{} Mode Response ({})", kind, path.display());
            for (colour, label) in legend(&response) {
                println!("  {:<7} {}", colour, label);
            }
        }
        if args.print_images {
            println!("{}: {}", kind, report.render_mode(kind, &settings)?);
        }
    }

    Ok(())
}

fn print_report(report: &StabilityReport, settings: &AnalysisSettings) {
    let digits = settings.significant_digits;
    let axis = report.axis();

    println!("{} ({})", report.case_name, axis);
    println!("=============================\n");

    println!("Aircraft matrix A:{}", report.model.system);
    println!("Control matrix B:{}", report.model.control);

    println!("Eigenvalues:");
    for lambda in report.modal.eigenvalues.iter() {
        println!("  {:>12.6} {:+.6}i", lambda.re, lambda.im);
    }
    println!("\nCharacteristic equation:\n  {}\n", report.characteristic_equation(digits));

    for mode in &report.modes.modes {
        println!(
            "{:<13} wn = {:.6} rad/s  zeta = {:.6}",
            mode.kind.label(),
            mode.natural_frequency(),
            mode.damping_ratio()
        );
    }
    println!();

    let transfer = &report.transfer_functions;
    for (channel, labels) in transfer.channels.iter().zip(transfer.labels()) {
        for (tf, label) in channel.functions.iter().zip(labels) {
            println!("{} =\n{}\n", label, tf.format(digits));
        }
    }
}
