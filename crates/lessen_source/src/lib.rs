//! Source text management and offset-to-position resolution for diagnostics.
//!
//! This crate provides the [`SourceRegistry`] holding the full text of every
//! file seen during a compilation session, and [`locate`] for converting raw
//! character offsets into [`Location`] line/column coordinates.

#![warn(missing_docs)]

pub mod location;
pub mod registry;

pub use location::{locate, Location};
pub use registry::SourceRegistry;
