//! # Curveshock Traits
//!
//! Trait definitions for the curveshock engine.
//!
//! This crate contains ONLY trait definitions with ZERO runtime dependencies.
//! Implementations live in extension crates (`curveshock-ext-treasury`).
//!
//! ## Module Structure
//!
//! - [`source`]: Traits for yield curve sources (one document per reference year)
//! - [`error`]: Error type shared by all sources
//!
//! ## Dependency Injection
//!
//! The curve provider takes its source as a trait object:
//!
//! ```ignore
//! CurveProviderBuilder::new()
//!     .with_source(Arc::new(TreasuryHttpSource::new(config)?))
//!     .build()?
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod source;

// Re-export commonly used types
pub use error::TraitError;
pub use source::{CurveSource, SourceType};
