//! Wire types exchanged with the blocklist backend
//!
//! Field names follow the backend's JSON (camelCase). Optional fields are
//! tolerated so lists that only carry the identifying field still decode.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Extensions the backend seeds as fixed entries on first start
pub const DEFAULT_FIXED_EXTENSIONS: [&str; 7] = ["bat", "cmd", "com", "cpl", "exe", "scr", "js"];

/// A backend-enumerated extension whose blocked state can be toggled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedExtension {
    /// Backend row id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Immutable identifier, e.g. "exe"
    pub name: String,

    /// Whether uploads with this extension are rejected
    pub blocked: bool,
}

impl FixedExtension {
    pub fn new(name: impl Into<String>, blocked: bool) -> Self {
        Self {
            id: None,
            name: name.into(),
            blocked,
        }
    }
}

/// A user-defined blocked extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomExtension {
    /// Backend row id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Unique key, lowercase alphanumeric
    pub extension: String,

    /// Creation time as reported by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

impl CustomExtension {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: extension.into(),
            created_at: None,
        }
    }
}

/// Body of `PATCH /api/extensions/fixed/{name}` and `PUT /api/extensions/fixed/{id}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FixedExtensionUpdate {
    pub blocked: bool,
}

/// Body of `POST /api/extensions/custom`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomExtensionCreate {
    pub extension: String,
}

/// Error envelope returned by the backend on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable code, e.g. `DUPLICATE_EXTENSION`
    #[serde(default)]
    pub code: Option<String>,

    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ErrorBody {
    /// Decode an error body, returning `None` for empty or non-JSON payloads
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return None;
        }
        serde_json::from_slice(bytes).ok()
    }

    /// The message, if present and non-blank
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}
