//! Storage abstractions for durable blobs.
//!
//! The result cache is persisted as a single JSON blob; the store only has to
//! read and overwrite whole values by key.
//!
//! ## Directory Structure
//!
//! ```text
//! storage/
//! ├── config.toml             # Prober configuration and platform catalog
//! └── tracevibe_cache.json    # Result cache, keyed by username
//! ```

pub mod cache;
pub mod local;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use cache::ResultCache;
pub use local::LocalStorage;

/// Trait for key-value blob storage backends.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Read a blob, returning `None` if it does not exist.
    async fn read_bytes_optional(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Overwrite a blob.
    async fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()>;
}
