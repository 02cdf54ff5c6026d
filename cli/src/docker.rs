//! Docker daemon gateway backed by `bollard`.

use async_trait::async_trait;
use bollard::errors::Error as BollardError;
use bollard::image::ListImagesOptions;
use bollard::models;
use bollard::{Docker, API_DEFAULT_VERSION};
use tracing::{debug, info};

use imgsha_core::{ImageDetail, ImageGateway, ImageSummary, ImgShaError, Result};

/// Read/write timeout for explicit `--host` connections, in seconds.
const CONNECT_TIMEOUT_SECS: u64 = 120;

/// Daemon endpoint named by `--host`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockerHost {
    /// Unix socket or Windows named pipe
    Socket(String),
    /// Plain HTTP over TCP
    Http(String),
}

/// Parse a `--host` value.
///
/// `unix://` and `npipe://` select a local socket; `tcp://`, `http://` and
/// bare `host:port` addresses select HTTP. Any other scheme is rejected.
pub fn parse_host(host: &str) -> Result<DockerHost> {
    let host = host.trim();
    if host.is_empty() {
        return Err(ImgShaError::InvalidHost(host.to_string()));
    }

    match host.split_once("://") {
        Some(("unix" | "npipe", path)) if !path.is_empty() => {
            Ok(DockerHost::Socket(host.to_string()))
        }
        Some(("tcp" | "http", addr)) if !addr.is_empty() => Ok(DockerHost::Http(host.to_string())),
        Some(_) => Err(ImgShaError::InvalidHost(host.to_string())),
        None => Ok(DockerHost::Http(host.to_string())),
    }
}

/// Image gateway talking to the local Docker daemon.
pub struct DockerGateway {
    docker: Docker,
}

impl DockerGateway {
    /// Connect to `host`, or to `DOCKER_HOST` / the platform default socket
    /// when none is given, and negotiate the API version with the daemon.
    pub async fn connect(host: Option<&str>) -> Result<Self> {
        let docker = match host {
            None => Docker::connect_with_defaults(),
            Some(host) => match parse_host(host)? {
                DockerHost::Socket(path) => {
                    Docker::connect_with_socket(&path, CONNECT_TIMEOUT_SECS, API_DEFAULT_VERSION)
                }
                DockerHost::Http(addr) => {
                    Docker::connect_with_http(&addr, CONNECT_TIMEOUT_SECS, API_DEFAULT_VERSION)
                }
            },
        }
        .map_err(classify)?;

        let docker = docker.negotiate_version().await.map_err(classify)?;
        debug!(host = ?host, api_version = ?docker.client_version(), "Connected to Docker daemon");
        Ok(Self { docker })
    }
}

#[async_trait]
impl ImageGateway for DockerGateway {
    async fn list_images(&self, all: bool) -> Result<Vec<ImageSummary>> {
        debug!("Listing images (all={})", all);

        let options = ListImagesOptions::<String> {
            all,
            ..Default::default()
        };

        let images = self
            .docker
            .list_images(Some(options))
            .await
            .map_err(classify)?;

        info!("Found {} images", images.len());
        Ok(images.into_iter().map(summary_from_api).collect())
    }

    async fn inspect_image(&self, id: &str) -> Result<ImageDetail> {
        debug!("Inspecting image: {}", id);

        let inspect = self
            .docker
            .inspect_image(id)
            .await
            .map_err(|e| match e {
                BollardError::DockerResponseServerError {
                    status_code: 404, ..
                } => ImgShaError::ImageNotFound {
                    image: id.to_string(),
                },
                other => classify(other),
            })?;

        Ok(detail_from_api(inspect))
    }
}

/// Map a client error: daemon answers become `Daemon`, everything else means
/// the daemon could not be reached.
fn classify(err: BollardError) -> ImgShaError {
    match err {
        BollardError::DockerResponseServerError {
            status_code,
            message,
        } => ImgShaError::Daemon(format!("{status_code}: {message}")),
        other => ImgShaError::DaemonUnreachable(other.to_string()),
    }
}

fn summary_from_api(image: models::ImageSummary) -> ImageSummary {
    ImageSummary {
        id: image.id,
        size: image.size,
        created: image.created,
        repo_tags: image.repo_tags,
        repo_digests: image.repo_digests,
    }
}

fn detail_from_api(inspect: models::ImageInspect) -> ImageDetail {
    let labels = inspect
        .config
        .and_then(|c| c.labels)
        .unwrap_or_default()
        .into_iter()
        .collect();

    ImageDetail {
        id: inspect.id.unwrap_or_default(),
        size: inspect.size.unwrap_or_default(),
        created: inspect.created.unwrap_or_default(),
        repo_tags: inspect.repo_tags.unwrap_or_default(),
        repo_digests: inspect.repo_digests.unwrap_or_default(),
        architecture: inspect.architecture.unwrap_or_default(),
        os: inspect.os.unwrap_or_default(),
        labels,
    }
}
