//! Command-line interface definitions.
//!
//! All options can be provided via command-line flags or environment
//! variables.

use clap::Parser;

/// Command-line arguments for the closings aggregator.
///
/// # Examples
///
/// ```sh
/// # Default output location (./data/closings.json)
/// tn_closings
///
/// # Explicit output directory
/// tn_closings -o /var/www/data
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory the closings.json report is written to
    #[arg(short, long, env = "OUTPUT_DIR", default_value = "./data")]
    pub output_dir: String,
}
