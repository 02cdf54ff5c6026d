//! docker-imgsha core - image record model and normalization
//!
//! Turns the Docker daemon's image summaries and inspect responses into
//! records that carry both the legacy config hash and the manifest digest,
//! and filters them. No I/O happens here; daemon access goes through the
//! [`ImageGateway`] trait.

pub mod config;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod normalize;
pub mod record;

// Re-export commonly used types
pub use config::PluginMetadata;
pub use error::{ImgShaError, Result};
pub use filter::{matches_pattern, Filter};
pub use gateway::ImageGateway;
pub use normalize::{normalize_detail, normalize_summary, ImageDetail, ImageSummary};
pub use record::ImageRecord;
