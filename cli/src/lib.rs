//! docker-imgsha CLI - Docker plugin listing config SHAs next to manifest digests.

pub mod commands;
pub mod docker;
pub mod output;
pub mod plugin;
pub mod render;
pub mod template;
