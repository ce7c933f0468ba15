pub mod deserialize;
pub mod error;
pub mod extractors;
pub mod feature_requests;
