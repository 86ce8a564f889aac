pub mod annotate;
pub mod display;
pub mod error;
pub mod parse_vcf;
pub mod variant;
