//! Core types and reconciliation logic for the NameMesh directory client.
//!
//! This crate provides the foundational pieces used across the NameMesh
//! library:
//!
//! - **Types**: Strongly-typed records, zones, sources, and roster entries
//! - **Diff engine**: [`diff`] recomputes a zone's full record list for a
//!   single edit or removal
//! - **Conflict resolution**: [`resolve`] ranks competing name claims by
//!   trust weight
//! - **Errors**: [`NameMeshError`] distinguishes local validation failures,
//!   directory rejections, and transport faults
//!
//! # Example
//!
//! ```rust,ignore
//! use namemesh_core::{diff, RecordType, ResourceRecord, Result};
//!
//! fn rewrite(entries: &[ResourceRecord]) -> Vec<ResourceRecord> {
//!     let new = ResourceRecord::new("www", RecordType::A, "5.6.7.8");
//!     diff::apply_edit(entries, None, new)
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/namemesh-core/0.3.0")]

mod error;
pub mod diff;
pub mod name;
pub mod resolve;
pub mod types;

pub use error::{NameMeshError, Result};
pub use types::*;
