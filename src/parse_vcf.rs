use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, info};

use crate::error::DashboardError;
use crate::variant::VcfVariant;

/// Read a VCF file (plain or gzip-compressed) and parse every data line.
///
/// Meta lines (`##`), the `#CHROM` column-title line, and blank lines are
/// skipped. Variants come back in file order. An unreadable file or a
/// malformed data line fails the whole parse.
pub fn parse_vcf(file_path: &Path) -> Result<Vec<VcfVariant>, DashboardError> {
    let file = File::open(file_path)?;
    debug!("opened {}", file_path.display());

    let reader: Box<dyn Read> = if file_path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(flate2::read::MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };
    let buffer = BufReader::new(reader);

    let mut variants = Vec::new();
    let mut line_count = 0;

    for line in buffer.lines() {
        let line_content = line?;
        line_count += 1;

        if line_content.starts_with('#') || line_content.trim().is_empty() {
            continue;
        }

        let variant = VcfVariant::from_line(&line_content).map_err(|e| match e {
            DashboardError::MalformedRecord { reason, .. } => DashboardError::MalformedRecord {
                line: line_count,
                reason,
            },
            other => other,
        })?;
        variants.push(variant);
    }

    info!(
        "read {} lines, parsed {} variants",
        line_count,
        variants.len()
    );

    Ok(variants)
}
