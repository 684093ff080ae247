use crate::error::Result;
use crate::models::{
    CoordinateRow, Direction, DirectionalRequest, FailureReason, FetchFailure, FetchOutcome,
    FetchedImage,
};
use crate::utils::constants::IMAGE_SIZE;
use crate::utils::filename::image_filename;
use reqwest::StatusCode;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Client for the street view imagery endpoint.
///
/// Each call to [`StreetViewClient::fetch`] issues exactly one GET. Anything short of a
/// decodable 200 response comes back as [`FetchOutcome::Failure`] so one bad heading never
/// stops a batch.
pub struct StreetViewClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl StreetViewClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder().build()?;
        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    pub fn request_url(&self, request: &DirectionalRequest) -> String {
        format!(
            "{}?size={}&location={}&fov={}&heading={}&pitch={}&return_error_code=true&key={}",
            self.endpoint,
            IMAGE_SIZE,
            request.row.location_param(),
            request.fov,
            request.heading,
            request.pitch,
            self.api_key
        )
    }

    /// Fetch one heading for `row` and store the raw bytes under `images_dir`.
    ///
    /// Only a failure to write the downloaded file is returned as an error.
    pub async fn fetch(
        &self,
        row: &CoordinateRow,
        direction: Direction,
        images_dir: &Path,
    ) -> Result<FetchOutcome> {
        let request = DirectionalRequest::new(*row, direction);
        let url = self.request_url(&request);
        debug!(
            "Requesting {} view for row {}: {}",
            direction,
            row.index,
            self.redacted(&url)
        );

        let bytes = match self.download(&url).await {
            Ok(bytes) => bytes,
            Err(reason) => return Ok(FetchOutcome::Failure(FetchFailure { request, reason })),
        };

        let image = match image::load_from_memory(&bytes) {
            Ok(image) => image,
            Err(e) => {
                return Ok(FetchOutcome::Failure(FetchFailure {
                    request,
                    reason: FailureReason::Decode(e.to_string()),
                }))
            }
        };

        let path: PathBuf = images_dir.join(image_filename(row, direction));
        tokio::fs::write(&path, &bytes).await?;

        Ok(FetchOutcome::Success(FetchedImage {
            request,
            image,
            path,
        }))
    }

    fn redacted(&self, url: &str) -> String {
        if self.api_key.is_empty() {
            url.to_string()
        } else {
            url.replace(&self.api_key, "<redacted>")
        }
    }

    async fn download(&self, url: &str) -> std::result::Result<Vec<u8>, FailureReason> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| FailureReason::Network(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FailureReason::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FailureReason::Network(e.to_string()))?;
        Ok(body.to_vec())
    }
}
