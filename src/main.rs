//! # VCF Dashboard
//!
//! A single-shot batch tool that reads the bundled sample VCF, annotates
//! each variant with gene/impact information, and prints the result as a
//! grid table on standard output.
//!
//! ## Quick Start
//!
//! ```bash
//! vcf-dashboard
//!
//! # with debug-level logs
//! RUST_LOG=debug vcf-dashboard
//! ```

mod annotate;
mod display;
mod error;
mod parse_vcf;
mod variant;

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{error, info};
use serde_json::Value;

use crate::annotate::annotate_variants;
use crate::display::render;
use crate::error::DashboardError;
use crate::parse_vcf::parse_vcf;

#[derive(Parser)]
#[command(
    name = "vcf-dashboard",
    version = "0.1.0",
    about = "🧬 Console dashboard for annotated VCF variants",
    long_about = "Reads the bundled sample VCF file, enriches each variant with gene and impact annotations, and displays the result as a grid-formatted table. The tool takes no arguments; log verbosity is controlled through the RUST_LOG environment variable."
)]
struct Cli {}

fn sample_vcf_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("sample.vcf")
}

fn run() -> Result<(), DashboardError> {
    let vcf_path = sample_vcf_path();
    info!("processing VCF file: {}", vcf_path.display());

    let variants = parse_vcf(&vcf_path).map_err(|e| {
        error!("failed to parse {}: {e}", vcf_path.display());
        e
    })?;
    let annotated = annotate_variants(&variants);
    let report = render(&Value::Array(annotated))?;

    if !report.skipped.is_empty() {
        info!("{} records could not be displayed", report.skipped.len());
    }

    Ok(())
}

fn main() {
    let _cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("application error: {e}");
        std::process::exit(1);
    }
}
