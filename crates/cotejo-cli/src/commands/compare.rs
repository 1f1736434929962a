//! Compare command - reconcile several quotation documents.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use cotejo_core::{
    compare_documents, ComparisonOutcome, ComparisonTable, ConditionKind, Document,
};

use super::read_document;

/// Arguments for the compare command.
#[derive(Args)]
pub struct CompareArgs {
    /// Input files or glob patterns (PDF or plain text)
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Directory to write CSV exports (comparison, conditions, vendors)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Styled terminal tables
    Text,
    /// Full outcome as JSON
    Json,
}

pub async fn run(args: CompareArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    let files = expand_inputs(&args.inputs)?;
    if files.is_empty() {
        anyhow::bail!("no matching input files");
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    // Documents in upload (argument) order; row and vendor ordering
    // downstream depends on it.
    let mut documents: Vec<Document> = Vec::new();
    for path in &files {
        pb.set_message(path.display().to_string());
        match read_document(path) {
            Ok(document) => documents.push(document),
            Err(e) => warn!("skipping {}: {e}", path.display()),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if documents.is_empty() {
        anyhow::bail!("none of the input files could be read");
    }

    let outcome = compare_documents(&documents);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text => print_outcome(&outcome),
    }

    if let Some(output_dir) = &args.output_dir {
        fs::create_dir_all(output_dir)?;
        write_comparison_csv(&output_dir.join("comparison.csv"), &outcome.table)?;
        write_conditions_csv(&output_dir.join("conditions.csv"), &outcome)?;
        write_vendors_csv(&output_dir.join("vendors.csv"), &outcome)?;
        println!(
            "{} CSV tables written to {}",
            style("✓").green(),
            output_dir.display()
        );
    }

    debug!("total comparison time: {:?}", start.elapsed());

    Ok(())
}

/// Expand argument strings into file paths, keeping argument order.
fn expand_inputs(inputs: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = PathBuf::from(input);
        if path.exists() {
            files.push(path);
            continue;
        }
        for entry in glob(input)? {
            match entry {
                Ok(path) => files.push(path),
                Err(e) => warn!("unreadable glob entry: {e}"),
            }
        }
    }

    Ok(files)
}

fn print_outcome(outcome: &ComparisonOutcome) {
    println!("{}", style("Comparativa de ofertas").bold());
    println!();

    if outcome.table.rows.is_empty() {
        println!("{} no items were extracted", style("!").yellow());
    }

    for row in &outcome.table.rows {
        let code = row.key.code.as_deref().unwrap_or("-");
        println!("{} {}", style(code).cyan(), style(&row.key.description).bold());

        for vendor in &outcome.table.vendors {
            match row.cell(vendor) {
                Some(cell) => {
                    let price = format!(
                        "{} x {} = {}",
                        cell.quantity, cell.unit_price, cell.line_total
                    );
                    if cell.is_best_price {
                        println!("  {:<20} {}", vendor, style(price).green().bold());
                    } else {
                        println!("  {:<20} {}", vendor, price);
                    }
                }
                None => println!("  {:<20} {}", vendor, style("sin oferta").dim()),
            }
        }
        println!();
    }

    if !outcome.conditions.is_empty() {
        println!("{}", style("Condiciones comerciales").bold());
        for entry in &outcome.conditions {
            println!("  {}", style(&entry.vendor).cyan());
            for kind in ConditionKind::ALL {
                if let Some(value) = entry.conditions.get(kind) {
                    println!("    {:<22} {}", kind.label(), value);
                }
            }
        }
        println!();
    }

    if !outcome.summaries.is_empty() {
        println!("{}", style("Totales por proveedor").bold());
        for summary in &outcome.summaries {
            let recommended = outcome.recommended_vendor.as_deref() == Some(&summary.vendor);
            if recommended {
                println!(
                    "  {:<20} {} {}",
                    summary.vendor,
                    style(summary.total_cost).green().bold(),
                    style("(recomendado)").green()
                );
            } else {
                println!("  {:<20} {}", summary.vendor, summary.total_cost);
            }
        }
        println!();
    }

    let report = &outcome.report;
    if !report.unparsed_documents.is_empty() {
        println!("{}", style("Documentos sin items reconocidos:").yellow());
        for name in &report.unparsed_documents {
            println!("  - {name}");
        }
    }
    for warning in &report.warnings {
        println!("{} {warning}", style("!").yellow());
    }
}

fn write_comparison_csv(path: &PathBuf, table: &ComparisonTable) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["codigo".to_string(), "descripcion".to_string()];
    for vendor in &table.vendors {
        header.push(format!("{vendor} cantidad"));
        header.push(format!("{vendor} precio unitario"));
        header.push(format!("{vendor} total"));
        header.push(format!("{vendor} mejor precio"));
    }
    wtr.write_record(&header)?;

    for row in &table.rows {
        let mut record = vec![
            row.key.code.clone().unwrap_or_default(),
            row.key.description.clone(),
        ];
        for vendor in &table.vendors {
            match row.cell(vendor) {
                Some(cell) => {
                    record.push(cell.quantity.to_string());
                    record.push(cell.unit_price.to_string());
                    record.push(cell.line_total.to_string());
                    record.push(if cell.is_best_price { "si" } else { "no" }.to_string());
                }
                None => record.extend(std::iter::repeat_n(String::new(), 4)),
            }
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

fn write_conditions_csv(path: &PathBuf, outcome: &ComparisonOutcome) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["proveedor".to_string()];
    header.extend(ConditionKind::ALL.iter().map(|k| k.label().to_string()));
    wtr.write_record(&header)?;

    for entry in &outcome.conditions {
        let mut record = vec![entry.vendor.clone()];
        for kind in ConditionKind::ALL {
            record.push(entry.conditions.get(kind).unwrap_or("").to_string());
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

fn write_vendors_csv(path: &PathBuf, outcome: &ComparisonOutcome) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["proveedor", "costo total", "recomendado"])?;
    for summary in &outcome.summaries {
        let recommended = outcome.recommended_vendor.as_deref() == Some(&summary.vendor);
        wtr.write_record([
            summary.vendor.as_str(),
            &summary.total_cost.to_string(),
            if recommended { "si" } else { "no" },
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
