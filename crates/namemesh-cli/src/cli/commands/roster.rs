//! `nmesh roster` - peer-list / trust-list management.

use anyhow::Result;
use colored::Colorize;
use namemesh::RosterEntry;
use tabled::{Table, Tabled};

use super::Context;
use crate::cli::args::{RosterArgs, RosterCommands};
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, args: RosterArgs) -> Result<()> {
    match args.command {
        RosterCommands::List { list_id, by_weight } => list(ctx, &list_id, by_weight).await,
        RosterCommands::Add {
            list_id,
            name,
            ip,
            port,
            weight,
        } => add(ctx, &list_id, name, ip, port, weight).await,
        RosterCommands::Del { list_id, ip } => del(ctx, &list_id, &ip).await,
    }
}

#[derive(Tabled)]
struct RosterRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "API port")]
    api_port: u16,
    #[tabled(rename = "Trust")]
    weight: f64,
}

impl RosterRow {
    fn from_entry(entry: &RosterEntry) -> Self {
        Self {
            name: entry.name.clone(),
            ip: entry.ip.clone(),
            api_port: entry.api_port,
            weight: entry.weight,
        }
    }
}

async fn list(ctx: Context, list_id: &str, by_weight: bool) -> Result<()> {
    let info = ctx.client().rosters().get(list_id).await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        OutputFormat::Pretty => {
            if !info.name.is_empty() {
                println!("{}", info.name.bold());
            }
            if !info.description.is_empty() {
                println!("{}", info.description);
            }

            let roster = info.into_roster();
            if roster.is_empty() {
                println!("{}", "No entries.".yellow());
                return Ok(());
            }

            let rows: Vec<RosterRow> = if by_weight {
                roster
                    .order_by_weight()
                    .into_iter()
                    .map(RosterRow::from_entry)
                    .collect()
            } else {
                roster.entries().iter().map(RosterRow::from_entry).collect()
            };
            println!("{}", Table::new(rows));
        }
    }

    Ok(())
}

async fn add(
    ctx: Context,
    list_id: &str,
    name: String,
    ip: String,
    port: u16,
    weight: f64,
) -> Result<()> {
    let entry = RosterEntry {
        name,
        ip,
        api_port: port,
        weight,
    };

    ctx.client().rosters().upsert(list_id, &entry).await?;
    println!(
        "{} entry '{}' ({}) saved to '{}'",
        "ok:".green().bold(),
        entry.name,
        entry.ip,
        list_id
    );
    Ok(())
}

async fn del(ctx: Context, list_id: &str, ip: &str) -> Result<()> {
    ctx.client().rosters().remove(list_id, ip).await?;
    println!(
        "{} entry '{}' removed from '{}'",
        "ok:".green().bold(),
        ip,
        list_id
    );
    Ok(())
}
