//! Treasury CSV documents stored on disk as `{directory}/{year}.csv`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use curveshock_core::{CurveSnapshot, ParsePolicy};
use curveshock_traits::{CurveSource, SourceType, TraitError};

use crate::parse::parse_daily_curve;

/// Directory-backed curve source, for offline runs and EOD archives.
pub struct CsvDirectorySource {
    directory: PathBuf,
    policy: ParsePolicy,
}

impl CsvDirectorySource {
    /// Creates a source reading from `directory`.
    pub fn new(directory: impl AsRef<Path>, policy: ParsePolicy) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            policy,
        }
    }

    /// File holding the document for `year`.
    pub fn path_for_year(&self, year: i32) -> PathBuf {
        self.directory.join(format!("{year}.csv"))
    }
}

#[async_trait]
impl CurveSource for CsvDirectorySource {
    fn source_type(&self) -> SourceType {
        SourceType::File
    }

    fn name(&self) -> &str {
        "csv-directory"
    }

    async fn latest_for_year(&self, year: i32) -> Result<CurveSnapshot, TraitError> {
        let path = self.path_for_year(year);
        debug!(path = %path.display(), "reading curve file");
        let text = tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                TraitError::NotFound(format!("{} does not exist", path.display()))
            }
            _ => TraitError::IoError(format!("{}: {e}", path.display())),
        })?;
        parse_daily_curve(&text, self.policy)
    }
}
