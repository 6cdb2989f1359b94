//! API endpoint modules.

mod node;
mod roster;
mod source;
mod zone;

pub use node::NodeApi;
pub use roster::RosterApi;
pub use source::SourceApi;
pub use zone::ZoneApi;
