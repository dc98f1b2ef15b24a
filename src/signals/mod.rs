//! Signal evaluation: rule-based scoring plus the supplemental addend.

pub mod engine;
pub mod scoring;
pub mod supplemental;

pub use engine::*;
pub use scoring::*;
pub use supplemental::*;
