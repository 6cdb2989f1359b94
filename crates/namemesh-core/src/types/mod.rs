//! Strongly-typed representations of directory state.

mod node;
mod record;
mod roster;
mod source;
mod zone;

pub use node::{NameListEntry, Neighbor, NodeInfo};
pub use record::{RecordType, ResourceRecord};
pub use roster::{
    Roster, RosterEntry, RosterInfo, UpsertOutcome, DEFAULT_API_PORT, DEFAULT_TRUST_WEIGHT,
};
pub use source::{NameAvailability, NameClaim, Source};
pub use zone::Zone;
