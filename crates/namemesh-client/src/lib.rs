//! HTTP client for the NameMesh directory API.
//!
//! This crate provides the main [`DirectoryClient`] for talking to a
//! directory node. One client is one session; build several to administer
//! several nodes at once.

#![doc(html_root_url = "https://docs.rs/namemesh-client/0.3.0")]

mod client;
pub mod api;

pub use client::{DirectoryClient, DirectoryClientBuilder};
pub use namemesh_core::{NameMeshError, Result};
