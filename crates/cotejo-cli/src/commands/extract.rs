//! Extract command - inspect a single quotation document.

use std::path::PathBuf;

use clap::Args;
use console::style;

use cotejo_core::{ConditionKind, ExtractionError, OfferParser, QuoteParser};

use super::read_document;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Text,
    /// Extracted offer as JSON
    Json,
}

pub async fn run(args: ExtractArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("input file not found: {}", args.input.display());
    }

    let document = read_document(&args.input)?;
    let parser = OfferParser::new();

    let parsed = match parser.parse(&document) {
        Ok(parsed) => parsed,
        Err(ExtractionError::NoItems(name)) => {
            anyhow::bail!("no line items recognized in {name}");
        }
        Err(e) => return Err(e.into()),
    };

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&parsed.offer)?);
        }
        OutputFormat::Text => {
            println!("{} {}", style("Proveedor:").bold(), parsed.offer.vendor);
            println!();

            for item in &parsed.offer.items {
                let code = if item.code.is_empty() { "-" } else { item.code.as_str() };
                println!(
                    "  {} {}  {} x {} = {}",
                    style(code).cyan(),
                    item.description,
                    item.quantity,
                    item.unit_price,
                    item.line_total
                );
            }
            println!();

            for kind in ConditionKind::ALL {
                if let Some(value) = parsed.offer.conditions.get(kind) {
                    println!("  {:<22} {}", kind.label(), value);
                }
            }

            if !parsed.skipped_lines.is_empty() {
                println!();
                println!("{}", style("Lineas no reconocidas:").yellow());
                for line in &parsed.skipped_lines {
                    println!("  {line}");
                }
            }
            for warning in &parsed.warnings {
                println!("{} {warning}", style("!").yellow());
            }
        }
    }

    Ok(())
}
