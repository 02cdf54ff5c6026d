//! Daemon access abstraction.

use async_trait::async_trait;

use crate::error::Result;
use crate::normalize::{ImageDetail, ImageSummary};

/// Read-only access to a container engine's local image store.
///
/// The production implementation talks to the Docker daemon; tests use an
/// in-memory implementation.
#[async_trait]
pub trait ImageGateway: Send + Sync {
    /// List local images. `all` includes intermediate images.
    async fn list_images(&self, all: bool) -> Result<Vec<ImageSummary>>;

    /// Fetch details for one image by ID, short ID or reference.
    async fn inspect_image(&self, id: &str) -> Result<ImageDetail>;
}
