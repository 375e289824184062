//! Extraction - raw text to an initial `ParsedQuery`.

mod engine;
mod price;

pub use engine::ExtractionEngine;
pub use price::{PriceExtractor, PriceForm, PriceMatch, MIN_BARE_AMOUNT};
