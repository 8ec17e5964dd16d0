//! TCGCSV Pokemon price export CLI
//!
//! Enumerates all Pokemon groups on TCGCSV, fetches the products and prices
//! of each group and writes the merged rows to one CSV file.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tcgcsv_export::{export_groups, CsvExporter, TcgcsvClient, POKEMON_CATEGORY_ID};

/// Download Pokemon card data from the TCGCSV JSON endpoints into a CSV file
#[derive(Parser, Debug)]
#[command(name = "tcgcsv_export")]
#[command(version, about, long_about = None)]
struct Args {
    /// Output CSV file path
    #[arg(short, long)]
    output: PathBuf,

    /// Seconds to sleep after each request (0 disables)
    #[arg(long, default_value_t = 0.1)]
    sleep: f64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let delay = if args.sleep > 0.0 {
        Duration::from_secs_f64(args.sleep)
    } else {
        Duration::ZERO
    };

    let client = TcgcsvClient::new(delay);

    // A failed group enumeration is fatal, before any output is written
    let groups = match client.fetch_groups(POKEMON_CATEGORY_ID) {
        Ok(groups) => groups,
        Err(e) => {
            log::error!("Failed to fetch group list: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Found {} groups", groups.len());

    let mut exporter = match CsvExporter::create(&args.output) {
        Ok(exporter) => exporter,
        Err(e) => {
            log::error!(
                "Failed to create output file {}: {}",
                args.output.display(),
                e
            );
            std::process::exit(1);
        }
    };

    match export_groups(&client, POKEMON_CATEGORY_ID, &groups, &mut exporter) {
        Ok(summary) => {
            if summary.groups_skipped > 0 {
                log::warn!(
                    "Skipped {} group(s) due to fetch errors",
                    summary.groups_skipped
                );
            }
            log::info!(
                "Finished writing {} rows for {} groups to {}",
                summary.rows_written,
                summary.groups_processed,
                args.output.display()
            );
        }
        Err(e) => {
            log::error!("Failed to write output: {}", e);
            std::process::exit(1);
        }
    }
}
