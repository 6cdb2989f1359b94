//! `nmesh name` - endorse or un-endorse names.
//!
//! An endorsement backs someone else's attribution of a name: you name
//! the public key you favour and attach a trust weight to that vote.

use anyhow::Result;
use colored::Colorize;
use namemesh::name;
use tabled::{Table, Tabled};

use super::{display_name, Context};
use crate::cli::args::{NameArgs, NameCommands};
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, args: NameArgs) -> Result<()> {
    match args.command {
        NameCommands::List {
            source,
            endorsements,
        } => list(ctx, &source, endorsements).await,
        NameCommands::Add {
            name,
            pk,
            weight,
            source,
        } => add(ctx, &name, &pk, weight, &source).await,
        NameCommands::Del { name, source } => del(ctx, &name, &source).await,
    }
}

#[derive(Tabled)]
struct ClaimRow {
    #[tabled(rename = "Domain Name")]
    name: String,
    #[tabled(rename = "Weight")]
    weight: f64,
    #[tabled(rename = "Public key")]
    pk: String,
    #[tabled(rename = "Kind")]
    kind: String,
}

async fn list(ctx: Context, source_id: &str, endorsements_only: bool) -> Result<()> {
    let source = ctx.client().sources().get(source_id).await?;

    let claims: Vec<(&str, &namemesh::NameClaim)> = if endorsements_only {
        source.endorsements().collect()
    } else {
        source
            .names
            .iter()
            .map(|(n, c)| (n.as_str(), c))
            .collect()
    };

    match ctx.output_format {
        OutputFormat::Json => {
            let map: std::collections::BTreeMap<&str, &namemesh::NameClaim> =
                claims.into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
        }
        OutputFormat::Pretty => {
            if claims.is_empty() {
                println!("{}", "No names defined.".yellow());
                return Ok(());
            }
            let rows: Vec<ClaimRow> = claims
                .into_iter()
                .map(|(claim_name, claim)| ClaimRow {
                    name: display_name(claim_name),
                    weight: claim.weight,
                    pk: claim.public_key.clone(),
                    kind: if source.is_zone_backed(claim_name) {
                        "zone".to_string()
                    } else {
                        "endorsement".to_string()
                    },
                })
                .collect();
            println!("{}", Table::new(rows));
        }
    }

    Ok(())
}

async fn add(ctx: Context, raw: &str, pk: &str, weight: f64, source_id: &str) -> Result<()> {
    let ascii = name::to_ascii(raw)?;
    ctx.client()
        .sources()
        .add_name(source_id, &ascii, pk, weight)
        .await?;
    println!(
        "{} name '{}' now endorses {} at weight {}",
        "ok:".green().bold(),
        ascii,
        pk,
        weight
    );
    Ok(())
}

async fn del(ctx: Context, raw: &str, source_id: &str) -> Result<()> {
    let ascii = name::to_ascii(raw)?;
    ctx.client().sources().delete_name(source_id, &ascii).await?;
    println!("{} name '{}' deleted", "ok:".green().bold(), ascii);
    Ok(())
}
