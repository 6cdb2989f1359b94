//! Command-line argument definitions using clap.

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};

/// Administration CLI for NameMesh directory nodes
///
/// Browse domain names, edit your zones, endorse names, and manage
/// peer/trust lists on a running node.
#[derive(Parser, Debug)]
#[command(name = "nmesh")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory node base URL (or set NAMEMESH_SERVER env var)
    #[arg(
        short,
        long,
        env = "NAMEMESH_SERVER",
        global = true,
        default_value = "http://localhost:14123"
    )]
    pub server: String,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show node identity, served TLDs, and operator contact info
    Info,

    /// Show neighbor status
    Neighbors,

    /// Browse the network's domain names, best claim first
    Names,

    /// Check whether a name is valid and available
    Check {
        /// Domain name (Unicode accepted)
        name: String,
    },

    /// Inspect and edit zones
    Zone(ZoneArgs),

    /// Endorse or un-endorse names
    Name(NameArgs),

    /// Manage peer-list / trust-list entries
    Roster(RosterArgs),
}

// ============================================================================
// Zone command
// ============================================================================

#[derive(Args, Debug)]
pub struct ZoneArgs {
    #[command(subcommand)]
    pub command: ZoneCommands,
}

#[derive(Subcommand, Debug)]
pub enum ZoneCommands {
    /// List the zones of a source
    List {
        /// Source to inspect
        #[arg(long, default_value = "local")]
        source: String,
    },

    /// Show one zone's entries
    Show {
        /// Zone name (Unicode accepted)
        name: String,

        /// Fetch globally by public key instead of from a source
        #[arg(long)]
        pk: Option<String>,

        /// Source to read from when --pk is not given
        #[arg(long, default_value = "local")]
        source: String,
    },

    /// Create a new empty zone under a fresh key pair
    Create {
        /// Zone name (Unicode accepted)
        name: String,

        /// Source to create the zone in
        #[arg(long, default_value = "local")]
        source: String,
    },

    /// Add or edit one entry ("name TYPE [priority] value")
    Set {
        /// Zone to edit
        zone: String,

        /// The new record, e.g. "www A 1.2.3.4" or "mail MX 10 mx.example.nm"
        record: String,

        /// Existing record to replace; without it the record is added
        #[arg(long)]
        replaces: Option<String>,

        /// Source owning the zone
        #[arg(long, default_value = "local")]
        source: String,
    },

    /// Delete every entry equal to the given record
    Unset {
        /// Zone to edit
        zone: String,

        /// The record to delete, e.g. "www A 1.2.3.4"
        record: String,

        /// Source owning the zone
        #[arg(long, default_value = "local")]
        source: String,
    },

    /// Delete a whole zone. The zone's secret key is lost!
    Delete {
        /// Zone to delete
        name: String,

        /// Source owning the zone
        #[arg(long, default_value = "local")]
        source: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

// ============================================================================
// Name command
// ============================================================================

#[derive(Args, Debug)]
pub struct NameArgs {
    #[command(subcommand)]
    pub command: NameCommands,
}

#[derive(Subcommand, Debug)]
pub enum NameCommands {
    /// List this source's name claims
    List {
        /// Source to inspect
        #[arg(long, default_value = "local")]
        source: String,

        /// Only pure endorsements (claims without a zone)
        #[arg(long)]
        endorsements: bool,
    },

    /// Add or edit a name endorsement
    Add {
        /// Domain name (Unicode accepted)
        name: String,

        /// Public key of the zone to favour
        pk: String,

        /// Trust weight to attribute to the endorsement
        #[arg(short, long, default_value = "1.0")]
        weight: f64,

        /// Source to add the claim to
        #[arg(long, default_value = "local")]
        source: String,
    },

    /// Delete a name claim
    Del {
        /// Domain name (Unicode accepted)
        name: String,

        /// Source to delete the claim from
        #[arg(long, default_value = "local")]
        source: String,
    },
}

// ============================================================================
// Roster command
// ============================================================================

#[derive(Args, Debug)]
pub struct RosterArgs {
    #[command(subcommand)]
    pub command: RosterCommands,
}

#[derive(Subcommand, Debug)]
pub enum RosterCommands {
    /// List a roster's entries
    List {
        /// Roster to read, e.g. "peers" or "trust"
        list_id: String,

        /// Sort by descending trust weight instead of stored order
        #[arg(long)]
        by_weight: bool,
    },

    /// Add or edit an entry (keyed by ip)
    Add {
        /// Roster to edit
        list_id: String,

        /// Peer display name
        name: String,

        /// Peer IP address; the entry key
        ip: String,

        /// Peer directory API port
        #[arg(long, default_value_t = namemesh_core::DEFAULT_API_PORT)]
        port: u16,

        /// Trust weight, strictly between 0 and 1
        #[arg(short, long, default_value_t = namemesh_core::DEFAULT_TRUST_WEIGHT)]
        weight: f64,
    },

    /// Delete the entry keyed by ip
    Del {
        /// Roster to edit
        list_id: String,

        /// Entry key
        ip: String,
    },
}
