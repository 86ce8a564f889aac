use log::{debug, info};
use regex::Regex;
use serde_json::{Map, Value};

use crate::variant::VcfVariant;

/// Well-known gene loci (GRCh38, 1-based inclusive) used when a variant
/// carries no annotation of its own.
const GENE_LOCI: &[(&str, u64, u64, &str)] = &[
    ("7", 55_019_017, 55_211_628, "EGFR"),
    ("12", 25_205_246, 25_250_929, "KRAS"),
    ("13", 32_315_086, 32_400_268, "BRCA2"),
    ("17", 7_668_402, 7_687_550, "TP53"),
    ("17", 43_044_295, 43_125_364, "BRCA1"),
];

/// Attach gene/impact annotations to parsed variants.
///
/// Each variant becomes one loosely-typed record carrying CHROM, POS, ID,
/// REF, ALT, QUAL plus GENE and IMPACT when an annotation source matches.
/// Sources in priority order: explicit GENE=/IMPACT= INFO keys, a SnpEff
/// `ANN=` INFO entry, then the built-in gene locus table. Output order
/// equals input order.
pub fn annotate_variants(variants: &[VcfVariant]) -> Vec<Value> {
    let mut annotated = Vec::with_capacity(variants.len());
    let mut hits = 0;

    for variant in variants {
        let mut record = Map::new();
        record.insert("CHROM".to_string(), Value::from(variant.chromosome.clone()));
        record.insert("POS".to_string(), Value::from(variant.position));
        if let Some(ref id) = variant.id {
            record.insert("ID".to_string(), Value::from(id.clone()));
        }
        record.insert("REF".to_string(), Value::from(variant.reference.clone()));
        record.insert("ALT".to_string(), Value::from(variant.alternates.clone()));
        if let Some(quality) = variant.quality {
            record.insert("QUAL".to_string(), Value::from(quality));
        }

        if let Some((gene, impact)) = annotate_one(variant) {
            debug!(
                "{}:{} annotated as {gene}/{impact}",
                variant.chromosome, variant.position
            );
            record.insert("GENE".to_string(), Value::from(gene));
            record.insert("IMPACT".to_string(), Value::from(impact));
            hits += 1;
        }

        annotated.push(Value::Object(record));
    }

    info!("annotated {hits} of {} variants", variants.len());
    annotated
}

fn annotate_one(variant: &VcfVariant) -> Option<(String, String)> {
    if let Some(gene) = variant.get_info_field("GENE") {
        let impact = variant
            .get_info_field("IMPACT")
            .unwrap_or_else(|| "Unknown".to_string());
        return Some((gene, impact));
    }

    if let Some(hit) = extract_snpeff_annotation(&variant.info) {
        return Some(hit);
    }

    lookup_gene_locus(variant)
}

/// Pull gene and impact out of the first SnpEff annotation in an `ANN=`
/// INFO entry. The pipe-separated layout is
/// Allele|Annotation|Annotation_Impact|Gene_Name|...
fn extract_snpeff_annotation(info: &str) -> Option<(String, String)> {
    let re = Regex::new(r"ANN=([^;]+)").ok()?;
    let captures = re.captures(info)?;
    let first_annotation = captures.get(1)?.as_str().split(',').next()?;

    let fields: Vec<&str> = first_annotation.split('|').collect();
    let impact = fields.get(2).filter(|s| !s.is_empty())?;
    let gene = fields.get(3).filter(|s| !s.is_empty())?;

    Some((gene.to_string(), impact.to_string()))
}

fn lookup_gene_locus(variant: &VcfVariant) -> Option<(String, String)> {
    let chromosome = variant
        .chromosome
        .strip_prefix("chr")
        .unwrap_or(&variant.chromosome);

    for (locus_chrom, start, end, symbol) in GENE_LOCI {
        if chromosome == *locus_chrom && (*start..=*end).contains(&variant.position) {
            let impact = if variant.is_snv() { "MODERATE" } else { "HIGH" };
            return Some((symbol.to_string(), impact.to_string()));
        }
    }

    None
}
