//! # Curveshock Ext Treasury
//!
//! US Treasury daily par yield curve sources for the curveshock engine.
//!
//! This crate provides:
//! - [`TreasuryHttpSource`]: the public Treasury CSV endpoint
//! - [`CsvDirectorySource`]: the same CSV format stored as `{year}.csv` files
//! - [`InMemoryCurveSource`]: fixed snapshots, for tests and manual curves
//! - [`parse_daily_curve`]: the CSV parser shared by the first two

#![warn(missing_docs)]
#![warn(clippy::all)]

mod directory;
mod http;
mod memory;
pub mod parse;

pub use directory::CsvDirectorySource;
pub use http::TreasuryHttpSource;
pub use memory::InMemoryCurveSource;
pub use parse::{parse_daily_curve, tenor_for_column, NO_DATA, TENOR_COLUMNS};

use std::sync::Arc;

use curveshock_config::{SourceConfig, SourceKind};
use curveshock_traits::{CurveSource, TraitError};

/// Create the curve source described by the `[source]` configuration section.
pub fn create_curve_source(config: &SourceConfig) -> Result<Arc<dyn CurveSource>, TraitError> {
    match config.kind {
        SourceKind::Treasury => Ok(Arc::new(TreasuryHttpSource::from_config(config)?)),
        SourceKind::Directory => {
            let directory = config.directory.as_ref().ok_or_else(|| {
                TraitError::InvalidInput("directory source requires source.directory".to_string())
            })?;
            Ok(Arc::new(CsvDirectorySource::new(
                directory,
                config.parse_policy,
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curveshock_traits::SourceType;

    #[test]
    fn test_create_curve_source() {
        let treasury = create_curve_source(&SourceConfig::default()).unwrap();
        assert_eq!(treasury.source_type(), SourceType::Snapshot);

        let mut config = SourceConfig {
            kind: SourceKind::Directory,
            ..SourceConfig::default()
        };
        assert!(matches!(
            create_curve_source(&config),
            Err(TraitError::InvalidInput(_))
        ));

        config.directory = Some("/tmp".into());
        let dir = create_curve_source(&config).unwrap();
        assert_eq!(dir.source_type(), SourceType::File);
        assert_eq!(dir.name(), "csv-directory");
    }
}
