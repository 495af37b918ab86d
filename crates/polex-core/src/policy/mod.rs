//! Policy extraction: normalization, field rules, and record assembly.

mod normalize;
mod parser;
pub mod rules;

pub use normalize::normalize_text;
pub use parser::{ParseReport, PolicyParser};
