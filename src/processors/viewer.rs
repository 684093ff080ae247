use crate::error::Result;
use crate::models::CoordinateRow;
use crate::processors::compositor::grid_2x2;
use crate::utils::filename::preview_filename;
use image::DynamicImage;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tokio::runtime::{Handle, RuntimeFlavor};

/// Shows a row's fetched images before they are stitched.
///
/// Implementations may block until the user has looked at them.
pub trait Viewer: Send + Sync {
    fn show(&self, row: &CoordinateRow, images: &[DynamicImage]) -> Result<()>;
}

/// Viewer that does nothing, used for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NoViewer;

impl Viewer for NoViewer {
    fn show(&self, _row: &CoordinateRow, _images: &[DynamicImage]) -> Result<()> {
        Ok(())
    }
}

/// Writes a 2x2 preview sheet and waits for Enter on stdin
pub struct GridPreview {
    preview_dir: PathBuf,
}

impl GridPreview {
    pub fn new(preview_dir: impl Into<PathBuf>) -> Self {
        Self {
            preview_dir: preview_dir.into(),
        }
    }

    /// Build and save the preview sheet, returning where it was written
    pub fn write_preview(&self, row: &CoordinateRow, images: &[DynamicImage]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.preview_dir)?;
        let path = self.preview_dir.join(preview_filename(row));
        grid_2x2(images)?.save(&path)?;
        Ok(path)
    }
}

impl Viewer for GridPreview {
    fn show(&self, row: &CoordinateRow, images: &[DynamicImage]) -> Result<()> {
        let path = self.write_preview(row, images)?;

        let mut stdout = io::stdout();
        writeln!(stdout, "Displaying images side by side: {}", path.display())?;
        write!(stdout, "Press Enter to continue...")?;
        stdout.flush()?;

        blocking_section(|| wait_for_enter(&mut io::stdin().lock()))
    }
}

/// Block until a line (or end of input) arrives on `input`
fn wait_for_enter<R: BufRead>(input: &mut R) -> Result<()> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

/// Run blocking work without stalling other tasks on a multi-threaded runtime.
///
/// `block_in_place` is unavailable on the current-thread flavour, where `f` runs inline.
fn blocking_section<F: FnOnce() -> R, R>(f: F) -> R {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(f)
        }
        _ => f(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::TempDir;

    #[test]
    fn test_write_preview() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let preview = GridPreview::new(temp_dir.path().join("previews"));
        let row = CoordinateRow::new(3, 40.0, -73.0);
        let images = vec![DynamicImage::ImageRgb8(RgbImage::new(6, 4)); 2];

        let path = preview.write_preview(&row, &images)?;

        assert!(path.ends_with("p3_preview.jpg"));
        let written = image::open(&path)?;
        assert_eq!((written.width(), written.height()), (12, 8));
        Ok(())
    }

    #[test]
    fn test_wait_for_enter_consumes_one_line() -> Result<()> {
        let mut input = io::Cursor::new(b"\nsecond\n".to_vec());
        wait_for_enter(&mut input)?;
        assert_eq!(input.position(), 1);

        let mut empty = io::Cursor::new(Vec::new());
        wait_for_enter(&mut empty)?;
        Ok(())
    }

    #[test]
    fn test_blocking_section_outside_runtime() {
        assert_eq!(blocking_section(|| 1 + 1), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_blocking_section_on_multi_thread_runtime() {
        let mut input = io::Cursor::new(b"\n".to_vec());
        assert!(blocking_section(|| wait_for_enter(&mut input)).is_ok());
    }

    #[tokio::test]
    async fn test_blocking_section_on_current_thread_runtime() {
        assert_eq!(blocking_section(|| "inline"), "inline");
    }

    #[test]
    fn test_no_viewer_is_silent() {
        let row = CoordinateRow::new(0, 0.0, 0.0);
        assert!(NoViewer.show(&row, &[]).is_ok());
    }
}
