pub mod filter;
pub mod pipeline;
pub mod search;
pub mod sort;

pub use filter::{DurationBucket, FilterCriteria, PriceRange};
pub use pipeline::{discover, DiscoveryRequest};
pub use sort::SortKey;
