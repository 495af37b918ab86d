//! Rule-based field extractors for policy documents.

pub mod coverage;
pub mod patterns;
pub mod scalar;

pub use coverage::extract_coverage_details;
pub use scalar::{FieldRule, PostProcess, ScalarField, extract_scalar};
