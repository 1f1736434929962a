//! Rule-based extractors for quotation documents.

pub mod patterns;
pub mod amounts;
pub mod items;
pub mod conditions;
pub mod vendor;

pub use amounts::parse_amount;
pub use conditions::extract_conditions;
pub use items::{extract_items, ItemExtraction, MAX_DESCRIPTION_LEN};
pub use vendor::{identify_vendor, UNKNOWN_VENDOR};
