//! `nmesh zone` - inspect and edit zones.

use anyhow::{Context as _, Result};
use colored::Colorize;
use namemesh::{name, RecordType, ResourceRecord, Zone};
use tabled::{Table, Tabled};

use super::{display_name, Context};
use crate::cli::args::{ZoneArgs, ZoneCommands};
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, args: ZoneArgs) -> Result<()> {
    match args.command {
        ZoneCommands::List { source } => list(ctx, &source).await,
        ZoneCommands::Show { name, pk, source } => show(ctx, &name, pk.as_deref(), &source).await,
        ZoneCommands::Create { name, source } => create(ctx, &name, &source).await,
        ZoneCommands::Set {
            zone,
            record,
            replaces,
            source,
        } => set(ctx, &zone, &record, replaces.as_deref(), &source).await,
        ZoneCommands::Unset {
            zone,
            record,
            source,
        } => unset(ctx, &zone, &record, &source).await,
        ZoneCommands::Delete { name, source, yes } => delete(ctx, &name, &source, yes).await,
    }
}

#[derive(Tabled)]
struct ZoneRow {
    #[tabled(rename = "Zone")]
    name: String,
    #[tabled(rename = "Version")]
    version: u64,
    #[tabled(rename = "Entries")]
    entries: usize,
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Domain Name")]
    name: String,
    #[tabled(rename = "Type")]
    rtype: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl EntryRow {
    fn from_record(record: &ResourceRecord) -> Self {
        Self {
            name: record.name.clone(),
            rtype: record.rtype.to_string(),
            value: match record.priority {
                Some(p) => format!("{p} {}", record.value),
                None => record.value.clone(),
            },
        }
    }
}

async fn list(ctx: Context, source_id: &str) -> Result<()> {
    let source = ctx.client().sources().get(source_id).await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&source.zones)?);
        }
        OutputFormat::Pretty => {
            if source.zones.is_empty() {
                println!("{}", "No zones defined.".yellow());
                return Ok(());
            }
            let rows: Vec<ZoneRow> = source
                .zones
                .iter()
                .map(|(zone_name, zone)| ZoneRow {
                    name: display_name(zone_name),
                    version: zone.version,
                    entries: zone.entries.len(),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
    }

    Ok(())
}

async fn show(ctx: Context, raw: &str, pk: Option<&str>, source_id: &str) -> Result<()> {
    let zone_name = name::to_ascii(raw)?;
    let client = ctx.client();

    let zone: Zone = match pk {
        Some(pk) => client.node().zone(&zone_name, pk).await?,
        None => {
            let source = client.sources().get(source_id).await?;
            source
                .zone(&zone_name)
                .with_context(|| format!("source '{source_id}' has no zone '{zone_name}'"))?
                .clone()
        }
    };

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&zone)?);
        }
        OutputFormat::Pretty => {
            println!("{} {}", "Zone:".bold(), display_name(&zone_name).cyan());
            println!("{} {}", "Public key:".bold(), zone.public_key);
            println!("{} {}", "Version:".bold(), zone.version);
            if zone.entries.is_empty() {
                println!("{}", "No entries.".yellow());
            } else {
                let rows: Vec<EntryRow> = zone.entries.iter().map(EntryRow::from_record).collect();
                println!("{}", Table::new(rows));
            }
        }
    }

    Ok(())
}

async fn create(ctx: Context, raw: &str, source_id: &str) -> Result<()> {
    let zone_name = name::to_ascii(raw)?;
    let client = ctx.client();

    let avail = client.sources().check_name(&zone_name).await?;
    if !avail.valid {
        anyhow::bail!("'{zone_name}' is not a valid name on this node");
    }
    if avail.taken {
        println!(
            "{} '{zone_name}' is already claimed by someone; yours becomes a competing claim",
            "note:".yellow().bold()
        );
    }

    client.zones().create(source_id, &zone_name).await?;
    println!("{} zone '{}' created", "ok:".green().bold(), zone_name);
    Ok(())
}

async fn set(
    ctx: Context,
    zone: &str,
    record: &str,
    replaces: Option<&str>,
    source_id: &str,
) -> Result<()> {
    let zone_name = name::to_ascii(zone)?;
    let replacement = parse_record(record)?;
    let target = replaces.map(parse_record).transpose()?;

    let client = ctx.client();
    let source = client.sources().get(source_id).await?;
    let entries = client
        .zones()
        .apply_entry_edit(&source, &zone_name, target.as_ref(), replacement)
        .await?;

    println!(
        "{} zone '{}' now has {} entries",
        "ok:".green().bold(),
        zone_name,
        entries.len()
    );
    Ok(())
}

async fn unset(ctx: Context, zone: &str, record: &str, source_id: &str) -> Result<()> {
    let zone_name = name::to_ascii(zone)?;
    let target = parse_record(record)?;

    let client = ctx.client();
    let source = client.sources().get(source_id).await?;
    let entries = client
        .zones()
        .remove_entries(&source, &zone_name, &target)
        .await?;

    println!(
        "{} zone '{}' now has {} entries",
        "ok:".green().bold(),
        zone_name,
        entries.len()
    );
    Ok(())
}

async fn delete(ctx: Context, raw: &str, source_id: &str, yes: bool) -> Result<()> {
    let zone_name = name::to_ascii(raw)?;

    if !yes {
        anyhow::bail!(
            "deleting zone '{zone_name}' loses its secret key forever; \
             re-run with --yes to confirm"
        );
    }

    ctx.client().zones().delete(source_id, &zone_name).await?;
    println!("{} zone '{}' deleted", "ok:".green().bold(), zone_name);
    Ok(())
}

/// Parse "name TYPE [priority] value..." into a record.
///
/// The value may contain spaces; everything after the type (and the MX
/// priority) is taken verbatim. The record name is canonicalized so that
/// matching against stored entries is byte-exact.
fn parse_record(s: &str) -> Result<ResourceRecord> {
    let mut parts = s.split_whitespace();
    let raw_name = parts.next().context("missing record name")?;
    let rtype: RecordType = parts.next().context("missing record type")?.parse()?;

    let priority = if rtype == RecordType::Mx {
        let prio = parts
            .next()
            .context("missing MX priority")?
            .parse::<u16>()
            .context("invalid MX priority")?;
        Some(prio)
    } else {
        None
    };

    let value = parts.collect::<Vec<_>>().join(" ");
    anyhow::ensure!(!value.is_empty(), "missing record value");

    let record = match priority {
        Some(p) => ResourceRecord::mx(name::to_ascii(raw_name)?, p, value),
        None => ResourceRecord::new(name::to_ascii(raw_name)?, rtype, value),
    };
    record.validate()?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_record() {
        let rec = parse_record("www A 1.2.3.4").unwrap();
        assert_eq!(rec, ResourceRecord::new("www", RecordType::A, "1.2.3.4"));
    }

    #[test]
    fn parses_mx_with_priority() {
        let rec = parse_record("mail MX 10 mx.example.nm").unwrap();
        assert_eq!(rec, ResourceRecord::mx("mail", 10, "mx.example.nm"));
    }

    #[test]
    fn keeps_spaces_in_txt_values() {
        let rec = parse_record("_spf TXT v=spf1 include:example.nm -all").unwrap();
        assert_eq!(rec.value, "v=spf1 include:example.nm -all");
    }

    #[test]
    fn rejects_missing_value() {
        assert!(parse_record("www A").is_err());
        assert!(parse_record("mail MX 10").is_err());
    }

    #[test]
    fn rejects_unknown_type() {
        assert!(parse_record("www NS ns1.example.nm").is_err());
    }
}
