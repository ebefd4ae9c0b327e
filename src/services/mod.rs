pub mod extractor;
pub mod scheme;

pub use extractor::{Theme, ThemeExtractor};
pub use scheme::Scheme;
