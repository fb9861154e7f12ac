// Entry point: installs the stderr subscriber, merges config with CLI
// overrides, and dispatches the selected summarizer.
use std::path::{Path, PathBuf};

use clap::Parser;

use boundcert::cli::{Args, Commands, Flavor, RatioMetric};
use boundcert::config::SummaryConfig;
use boundcert::core::series::SeriesSchema;
use boundcert::errors::SummaryError;
use boundcert::table::{audit, cert, plot};

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), SummaryError> {
    let config = SummaryConfig::load_or_default(&args.config);
    let root = PathBuf::from(
        args.output_root
            .unwrap_or_else(|| config.paths.output_root.clone()),
    );

    match args.command {
        Commands::Summarize {
            file_pattern,
            output_file,
            flavor,
            metric,
            batch_size,
        } => {
            let schema = match flavor {
                Flavor::Lambda => plot::lambda_schema_for_pattern(&file_pattern)?,
                Flavor::Ratio => match metric {
                    RatioMetric::Lambda => &SeriesSchema::RATIO_LAMBDA,
                    RatioMetric::Ratio => &SeriesSchema::RATIO_RATIO,
                },
            };
            let window = batch_size.unwrap_or(config.aggregation.batch_size).max(1);
            plot::run(
                &root,
                &file_pattern,
                Path::new(&output_file),
                schema,
                window,
            )
        }
        Commands::Cert {
            min_pattern,
            max_pattern,
            output_file,
            flavor,
            tail_count,
        } => {
            let schema = match flavor {
                Flavor::Lambda => &SeriesSchema::LAMBDA_ANY,
                Flavor::Ratio => &SeriesSchema::RATIO_LAMBDA,
            };
            let params = cert::CertParams {
                l11_modulus: config.targets.l11_modulus,
                l13_modulus: config.targets.l13_modulus,
                tail_count: tail_count.unwrap_or(config.aggregation.tail_count).max(1),
            };
            cert::run(
                &root,
                &min_pattern,
                &max_pattern,
                Path::new(&output_file),
                schema,
                &params,
            )
        }
        Commands::Audit {
            cert_file,
            output_file,
            tolerance,
        } => {
            let tolerance = tolerance.unwrap_or(config.audit.tolerance);
            audit::run(Path::new(&cert_file), Path::new(&output_file), tolerance)
        }
    }
}
