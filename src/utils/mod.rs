pub mod error;
pub mod json_extract;
pub mod logger;
pub mod rate_limit;
pub mod validation;
