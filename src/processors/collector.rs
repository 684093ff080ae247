use crate::error::Result;
use crate::fetchers::StreetViewClient;
use crate::models::{
    select_rows, CollectorConfig, CoordinateRow, Direction, FetchOutcome, RowReport, RunSummary,
};
use crate::processors::compositor::concatenate_horizontal;
use crate::processors::viewer::{GridPreview, NoViewer, Viewer};
use crate::utils::filename::composite_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::{DownloadLog, LogRecord};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Drives the per-row fetch, log and stitch cycle.
///
/// Rows run strictly one after another, and within a row the four headings are
/// requested in [`Direction::ALL`] order with at most one request in flight.
pub struct Collector {
    config: CollectorConfig,
    client: StreetViewClient,
    viewer: Arc<dyn Viewer>,
    success_log: DownloadLog,
    failure_log: DownloadLog,
    images_dir: PathBuf,
    composite_dir: PathBuf,
}

impl Collector {
    /// Build a collector and create its output directories
    pub fn new(config: CollectorConfig) -> Result<Self> {
        let config = config.validated()?;
        let client = StreetViewClient::new(config.endpoint.clone(), config.api_key.clone())?;

        let viewer: Arc<dyn Viewer> = if config.visualize {
            Arc::new(GridPreview::new(config.preview_dir()))
        } else {
            Arc::new(NoViewer)
        };

        let images_dir = config.images_dir();
        let composite_dir = config.composite_dir();
        std::fs::create_dir_all(&images_dir)?;
        std::fs::create_dir_all(&composite_dir)?;

        Ok(Self {
            success_log: DownloadLog::new(config.success_log_path()),
            failure_log: DownloadLog::new(config.failure_log_path()),
            config,
            client,
            viewer,
            images_dir,
            composite_dir,
        })
    }

    /// Replace the display step, e.g. with a headless recorder in tests
    pub fn with_viewer(mut self, viewer: Arc<dyn Viewer>) -> Self {
        self.viewer = viewer;
        self
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    pub fn composite_dir(&self) -> &Path {
        &self.composite_dir
    }

    pub fn success_log(&self) -> &DownloadLog {
        &self.success_log
    }

    pub fn failure_log(&self) -> &DownloadLog {
        &self.failure_log
    }

    /// Process the configured `[start_row, end_row]` range of `rows`
    pub async fn run(
        &self,
        rows: &[CoordinateRow],
        progress: Option<&ProgressReporter>,
    ) -> Result<RunSummary> {
        let selected = select_rows(rows, self.config.start_row, self.config.end_row);
        let mut summary = RunSummary::default();

        for (position, row) in selected.iter().enumerate() {
            if position > 0 {
                self.pace().await;
            }

            if let Some(p) = progress {
                p.set_message(&format!(
                    "Point {}: latitude={}, longitude={}",
                    row.index, row.latitude, row.longitude
                ));
            }

            let report = self.process_row(row, progress).await?;
            summary.record(&report);

            if let Some(p) = progress {
                p.increment(1);
            }
        }

        Ok(summary)
    }

    /// Fetch, log and stitch a single row
    pub async fn process_row(
        &self,
        row: &CoordinateRow,
        progress: Option<&ProgressReporter>,
    ) -> Result<RowReport> {
        info!(
            "Processing point {}: Latitude={}, Longitude={}",
            row.index, row.latitude, row.longitude
        );

        let mut report = RowReport::new(row.index);
        let mut images = Vec::with_capacity(Direction::ALL.len());

        for (i, direction) in Direction::ALL.into_iter().enumerate() {
            if i > 0 {
                self.pace().await;
            }

            match self.client.fetch(row, direction, &self.images_dir).await? {
                FetchOutcome::Success(fetched) => {
                    self.success_log
                        .append(&LogRecord::from_request(&fetched.request))?;
                    info!("Image saved: {}", fetched.path.display());
                    report.succeeded.push(direction);
                    images.push(fetched.image);
                }
                FetchOutcome::Failure(failure) => {
                    warn!(
                        "Failed to download {} view for point {}: {}",
                        direction, row.index, failure.reason
                    );
                    report.failed.push(failure);
                }
            }
        }

        for failure in &report.failed {
            self.failure_log
                .append(&LogRecord::from_request(&failure.request))?;
        }

        if images.is_empty() {
            warn!("No images downloaded for point {}. Skipping...", row.index);
            return Ok(report);
        }

        if self.config.visualize {
            match progress {
                Some(p) => p.suspend(|| self.viewer.show(row, &images))?,
                None => self.viewer.show(row, &images)?,
            }
        }

        let composite = concatenate_horizontal(&images)?;
        let output_path = self.composite_dir.join(composite_filename(row));
        composite.save(&output_path)?;
        info!("Concatenated image saved: {}", output_path.display());
        report.composite = Some(output_path);

        Ok(report)
    }

    async fn pace(&self) {
        if !self.config.request_delay.is_zero() {
            tokio::time::sleep(self.config.request_delay).await;
        }
    }
}
