//! `nmesh names` - browse the network's names, best claim first.

use anyhow::Result;
use colored::Colorize;
use namemesh::resolve;
use tabled::{Table, Tabled};

use super::{display_name, Context};
use crate::output::OutputFormat;

#[derive(Tabled)]
struct NameRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Weight")]
    weight: f64,
    #[tabled(rename = "Owner")]
    owner: String,
    #[tabled(rename = "Version")]
    version: u64,
}

pub async fn execute(ctx: Context) -> Result<()> {
    let names = ctx.client().node().names().await?;
    let listing = resolve::order_names(names);

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Pretty => {
            if listing.is_empty() {
                println!("{}", "No names known.".yellow());
                return Ok(());
            }

            let rows: Vec<NameRow> = listing
                .iter()
                .map(|(name, entry)| NameRow {
                    name: display_name(name),
                    weight: entry.weight,
                    owner: entry.public_key.clone(),
                    version: entry.version,
                })
                .collect();

            println!("{}", Table::new(rows));
        }
    }

    Ok(())
}
