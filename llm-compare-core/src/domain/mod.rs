pub mod comparison;
pub mod types;

pub use comparison::{
    ComparisonRequest, ComparisonResult, ModelResult, RateLimitInfo, ResponseMetadata, TokenUsage,
};
pub use types::{ChatMessage, MessageRole};
