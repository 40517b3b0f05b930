//! REST gateway for the extension blocklist backend
//!
//! Provides:
//! - The [`ExtensionGateway`] trait the panels talk to
//! - [`HttpGateway`], its reqwest implementation
//! - [`ApiError`], which folds transport failures and non-2xx statuses into
//!   one failure type so callers handle both the same way

pub mod error;
pub mod gateway;
pub mod http;

pub use error::{ApiError, Result};
pub use gateway::ExtensionGateway;
pub use http::HttpGateway;

/// Route prefix for every blocklist endpoint
pub const API_PREFIX: [&str; 2] = ["api", "extensions"];
