/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Balanced adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod config;
pub mod http;
pub mod types;

pub use config::StageConfig;

// Re-export commonly used types from http
pub use http::{
    ApiError,
    BalancedClient,
    BalancedError,
    ClientConfig,
    DEFAULT_API_ROOT,
    Environment,
    Method,
    Payload,
    Result,
};

// Re-export all types
pub use types::*;
