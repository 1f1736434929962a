//! Offer extraction module.

mod parser;
pub mod rules;

pub use parser::{OfferParser, ParsedOffer, QuoteParser};
