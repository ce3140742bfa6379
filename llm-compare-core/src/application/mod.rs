pub mod aggregator;
pub mod compare;

pub use aggregator::ResultAggregator;
pub use compare::{CompareError, ComparisonEngine};
