use crate::error::DashboardError;

/// One variant call, parsed from a single VCF data line.
///
/// Only the first eight VCF columns are kept; FORMAT and per-sample columns
/// are outside the scope of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct VcfVariant {
    pub chromosome: String,
    pub position: u64,
    pub id: Option<String>,
    pub reference: String,
    pub alternates: Vec<String>,
    pub quality: Option<f64>,
    pub filter: String,
    pub info: String,
}

impl VcfVariant {
    pub fn from_line(line: &str) -> Result<Self, DashboardError> {
        let fields: Vec<&str> = line.split('\t').collect();

        if fields.len() < 8 {
            return Err(DashboardError::MalformedRecord {
                line: 0,
                reason: format!("expected at least 8 columns, found {}", fields.len()),
            });
        }

        let chromosome = fields[0].to_string();
        let position =
            fields[1]
                .parse::<u64>()
                .map_err(|e| DashboardError::MalformedRecord {
                    line: 0,
                    reason: format!("invalid POS '{}': {e}", fields[1]),
                })?;
        let id = if fields[2] == "." {
            None
        } else {
            Some(fields[2].to_string())
        };
        let reference = fields[3].to_string();
        let alternates = fields[4].split(',').map(|s| s.to_string()).collect();
        let quality = if fields[5] == "." {
            None
        } else {
            Some(
                fields[5]
                    .parse::<f64>()
                    .map_err(|e| DashboardError::MalformedRecord {
                        line: 0,
                        reason: format!("invalid QUAL '{}': {e}", fields[5]),
                    })?,
            )
        };
        let filter = fields[6].to_string();
        let info = fields[7].to_string();

        Ok(VcfVariant {
            chromosome,
            position,
            id,
            reference,
            alternates,
            quality,
            filter,
            info,
        })
    }

    /// Look up a `KEY=VALUE` entry in the INFO column. Bare flags yield "true".
    pub fn get_info_field(&self, field_name: &str) -> Option<String> {
        for pair in self.info.split(';') {
            if let Some((key, value)) = pair.split_once('=') {
                if key == field_name {
                    return Some(value.to_string());
                }
            } else if pair == field_name {
                return Some("true".to_string());
            }
        }
        None
    }

    /// True when REF and every ALT allele are single bases.
    pub fn is_snv(&self) -> bool {
        self.reference.len() == 1 && self.alternates.iter().all(|a| a.len() == 1)
    }
}
