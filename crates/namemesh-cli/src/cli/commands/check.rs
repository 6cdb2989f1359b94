//! `nmesh check` - name validity and availability.

use anyhow::Result;
use colored::Colorize;
use namemesh::name;

use super::Context;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, raw: &str) -> Result<()> {
    let ascii = name::to_ascii(raw)?;
    let avail = ctx.client().sources().check_name(&ascii).await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&avail)?);
        }
        OutputFormat::Pretty => {
            if !avail.valid {
                println!("{} is {}", ascii.bold(), "invalid".red().bold());
            } else if avail.taken {
                println!(
                    "{} is {}, but you can claim it as well",
                    ascii.bold(),
                    "already used by someone".yellow().bold()
                );
            } else {
                println!("{} is {}", ascii.bold(), "free to use".green().bold());
            }
        }
    }

    Ok(())
}
