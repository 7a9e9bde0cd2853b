//! Parse policy for upstream curve documents.

use serde::{Deserialize, Serialize};

/// How a source treats a tenor cell that is neither empty, the `ND` marker, nor a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Omit the cell; a partially populated curve is valid output.
    #[default]
    Lenient,
    /// Fail the whole document.
    Strict,
}
