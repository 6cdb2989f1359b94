//! Rust client for peer-operated NameMesh directory nodes.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use namemesh::{DirectoryClient, RecordType, ResourceRecord};
//!
//! #[tokio::main]
//! async fn main() -> namemesh::Result<()> {
//!     let client = DirectoryClient::new("http://localhost:14123");
//!
//!     // Read the local source and edit one zone entry.
//!     let source = client.sources().get("local").await?;
//!     let old = ResourceRecord::new("www", RecordType::A, "1.2.3.4");
//!     let new = ResourceRecord::new("www", RecordType::A, "5.6.7.8");
//!     client
//!         .zones()
//!         .apply_entry_edit(&source, "example.nm", Some(&old), new)
//!         .await?;
//!
//!     // Browse the network's names, best claim first.
//!     let names = client.node().names().await?;
//!     for (name, entry) in namemesh::resolve::order_names(names) {
//!         println!("{name} -> {} (weight {})", entry.public_key, entry.weight);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/namemesh/0.3.0")]

// Re-export core types
pub use namemesh_core::*;

// Re-export client
pub use namemesh_client::{DirectoryClient, DirectoryClientBuilder};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
