//! Command implementations.

pub mod check;
pub mod info;
pub mod name;
pub mod names;
pub mod neighbors;
pub mod roster;
pub mod zone;

use crate::output::OutputFormat;
use namemesh::DirectoryClient;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory node base URL
    pub server: String,

    /// Output format
    pub output_format: OutputFormat,
}

impl Context {
    /// Create a client session against the configured node.
    pub fn client(&self) -> DirectoryClient {
        DirectoryClient::new(&self.server)
    }
}

/// Render a canonical ASCII name for display: Unicode form, with the
/// ASCII form alongside when they differ.
pub fn display_name(ascii: &str) -> String {
    let unicode = namemesh::name::to_unicode(ascii);
    if unicode == ascii {
        ascii.to_string()
    } else {
        format!("{unicode} ({ascii})")
    }
}
