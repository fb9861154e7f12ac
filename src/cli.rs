use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: String,

    /// Root directory holding per-alpha run outputs (overrides config)
    #[arg(long, global = true)]
    pub output_root: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Summarize per-alpha run files into windowed extremum rows
    Summarize {
        /// File pattern with --=ALPHA=-- placeholder
        #[arg(value_name = "FILE_PATTERN")]
        file_pattern: String,

        /// Output CSV filename
        #[arg(value_name = "OUTPUT_FILE")]
        output_file: String,

        /// Input flavor; lambda patterns determine the metric column
        #[arg(long, value_enum, default_value = "lambda")]
        flavor: Flavor,

        /// Metric column to aggregate (ratio flavor only)
        #[arg(long, value_enum, default_value = "lambda")]
        metric: RatioMetric,

        /// Window size for aggregation (overrides config)
        #[arg(long)]
        batch_size: Option<usize>,
    },

    /// Build the certification table across discovered alpha directories
    Cert {
        /// Lower-series file pattern with --=ALPHA=-- placeholder
        #[arg(value_name = "MIN_PATTERN")]
        min_pattern: String,

        /// Upper-series file pattern with --=ALPHA=-- placeholder
        #[arg(value_name = "MAX_PATTERN")]
        max_pattern: String,

        /// Output CSV filename
        #[arg(value_name = "OUTPUT_FILE")]
        output_file: String,

        /// Input flavor of the two series
        #[arg(long, value_enum, default_value = "lambda")]
        flavor: Flavor,

        /// Tail size for the final-value statistics (overrides config)
        #[arg(long)]
        tail_count: Option<usize>,
    },

    /// Filter a cert table down to the audited alpha values
    Audit {
        /// Input cert CSV
        #[arg(value_name = "CERT_FILE")]
        cert_file: String,

        /// Output audit CSV
        #[arg(value_name = "OUTPUT_FILE")]
        output_file: String,

        /// Alpha match tolerance (overrides config)
        #[arg(long)]
        tolerance: Option<f64>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Single `n` index column, no undefined sentinel
    Ratio,
    /// `n_0`/`n_1`/`n` index candidates, six-decimal zero sentinel
    Lambda,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioMetric {
    Lambda,
    Ratio,
}
