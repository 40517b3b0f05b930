//! # extguard-core
//!
//! Core library for the extguard blocklist panel providing:
//! - The fixed/custom extension data model as exchanged with the backend
//! - Client-side validation rules mirroring the backend's
//! - The logical message catalog (Korean reference text and English)
//! - Hierarchical configuration loading (embedded defaults, file, env)

pub mod config;
pub mod error;
pub mod messages;
pub mod types;
pub mod validation;

pub use config::{ApiConfig, ConfigLoader, PanelConfig, ToastConfig, UiLimits};
pub use error::{Error, Result};
pub use messages::{Locale, Message};
pub use types::{CustomExtension, ErrorBody, FixedExtension, DEFAULT_FIXED_EXTENSIONS};
pub use validation::{validate, ValidationError};
