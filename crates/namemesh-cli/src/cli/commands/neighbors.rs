//! `nmesh neighbors` - neighbor roster with liveness.

use anyhow::Result;
use colored::Colorize;
use tabled::{Table, Tabled};

use super::Context;
use crate::output::OutputFormat;

#[derive(Tabled)]
struct NeighborRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Trust")]
    weight: f64,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "API port")]
    api_port: u16,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Status")]
    status: String,
}

pub async fn execute(ctx: Context) -> Result<()> {
    let neighbors = ctx.client().node().neighbors().await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&neighbors)?);
        }
        OutputFormat::Pretty => {
            if neighbors.is_empty() {
                println!("{}", "No neighbors.".yellow());
                return Ok(());
            }

            let rows: Vec<NeighborRow> = neighbors
                .iter()
                .map(|n| NeighborRow {
                    name: n.name.clone(),
                    weight: n.weight,
                    ip: n.ip.clone(),
                    api_port: n.api_port,
                    source: n.source.clone(),
                    status: if n.is_up() {
                        n.status.green().to_string()
                    } else {
                        n.status.red().to_string()
                    },
                })
                .collect();

            println!("{}", Table::new(rows));
        }
    }

    Ok(())
}
