//! `nmesh info` - node identity and operator details.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context) -> Result<()> {
    let info = ctx.client().node().info().await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        OutputFormat::Pretty => {
            if info.tld.is_empty() {
                println!("{}", "No TLDs served.".yellow());
            } else {
                println!("{}", "Serving TLDs:".bold().underline());
                for tld in &info.tld {
                    println!("  {}", tld.cyan());
                }
            }

            if !info.operator.is_empty() {
                println!();
                println!("{}", "Operator contact:".bold().underline());
                for (key, value) in &info.operator {
                    println!("  {}: {}", key.bold(), value);
                }
            }

            println!();
            println!("{} {}", "Version:".bold(), info.version);
        }
    }

    Ok(())
}
