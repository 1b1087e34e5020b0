/*
[INPUT]:  HTTP client configuration, environment and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod accounts;
pub mod bank_accounts;
pub mod bootstrap;
pub mod cards;
pub mod client;
pub mod credits;
pub mod debits;
pub mod error;
pub mod events;
pub mod holds;
pub mod payload;
pub mod refunds;
pub mod response;

pub use error::{ApiError, BalancedError, Result};
pub use payload::{Payload, nested_key};
pub use response::{Envelope, classify};

pub use reqwest::Method;

pub use client::{BalancedClient, ClientConfig, DEFAULT_API_ROOT, Environment, USER_AGENT};
