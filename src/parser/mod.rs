// Parser module: product titles and listing pages.

pub mod listing_parser;
pub mod title_parser;
pub mod vocabulary;

pub use listing_parser::{CarrefourParser, ListingParser};
pub use title_parser::extract_product_info;
