// Categorizer module: grouping keys, display labels and aggregation.

pub mod grouping;
pub mod key;
pub mod label;

pub use grouping::categorize_products;
