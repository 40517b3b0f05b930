//! Gateway trait definitions

use async_trait::async_trait;
use extguard_core::{CustomExtension, FixedExtension};

use crate::error::Result;

/// Calls against the blocklist backend
///
/// Any non-2xx status and any transport failure come back as `Err`.
#[async_trait]
pub trait ExtensionGateway: Send + Sync {
    /// `GET /api/extensions/fixed`
    async fn list_fixed(&self) -> Result<Vec<FixedExtension>>;

    /// `PATCH /api/extensions/fixed/{name}`
    async fn set_fixed_blocked(&self, name: &str, blocked: bool) -> Result<()>;

    /// `PUT /api/extensions/fixed/{id}`
    async fn set_fixed_blocked_by_id(&self, id: i64, blocked: bool) -> Result<FixedExtension>;

    /// `GET /api/extensions/custom`
    async fn list_custom(&self) -> Result<Vec<CustomExtension>>;

    /// `POST /api/extensions/custom`
    async fn create_custom(&self, extension: &str) -> Result<CustomExtension>;

    /// `DELETE /api/extensions/custom/{extension}`
    async fn delete_custom(&self, extension: &str) -> Result<()>;

    /// `DELETE /api/extensions/custom/id/{id}`
    async fn delete_custom_by_id(&self, id: i64) -> Result<()>;

    /// `GET /api/extensions/custom/count`
    async fn custom_count(&self) -> Result<u64>;
}
