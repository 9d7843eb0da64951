//! Parse command - extract data from a single invoice PDF.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use schet_core::InvoiceRecord;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (the full record)
    Json,
    /// CSV summary row
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let record = schet_core::parse_invoice_pdf(&data)?;

    let output = format_record(&record, args.format, args.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_record(
    record: &InvoiceRecord,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &InvoiceRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "invoice_number",
        "invoice_date",
        "supplier_name",
        "supplier_inn",
        "customer_name",
        "customer_inn",
        "total_no_vat",
        "vat_sum",
        "total_with_vat",
    ])?;

    wtr.write_record([
        record.invoice.number.to_string(),
        record.invoice.date.to_string(),
        record.supplier.name.to_string(),
        record.supplier.inn.to_string(),
        record.customer.name.to_string(),
        record.customer.inn.to_string(),
        record.totals.total_no_vat.to_string(),
        record.totals.vat_sum.to_string(),
        record.totals.total_with_vat.to_string(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &InvoiceRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Invoice: {}\n", record.invoice.number));
    output.push_str(&format!("Date: {}\n", record.invoice.date));
    output.push('\n');

    output.push_str("Supplier:\n");
    output.push_str(&format!("  {}\n", record.supplier.name));
    output.push_str(&format!("  ИНН: {}\n", record.supplier.inn));
    output.push_str(&format!("  {}\n", record.supplier.address));
    output.push('\n');

    output.push_str("Customer:\n");
    output.push_str(&format!("  {}\n", record.customer.name));
    output.push_str(&format!("  ИНН: {}\n", record.customer.inn));
    output.push('\n');

    output.push_str("Items:\n");
    for item in &record.items {
        output.push_str(&format!(
            "  {} x{} = {}\n",
            item.name, item.quantity, item.sum_with_vat
        ));
    }
    output.push('\n');

    output.push_str("Totals:\n");
    output.push_str(&format!("  Net:   {}\n", record.totals.total_no_vat));
    output.push_str(&format!(
        "  VAT:   {} ({}%)\n",
        record.totals.vat_sum, record.totals.vat_percent
    ));
    output.push_str(&format!("  Gross: {}\n", record.totals.total_with_vat));

    output
}

#[cfg(test)]
mod tests {
    use schet_core::InvoiceParser;

    use super::*;

    #[test]
    fn csv_summary_has_one_data_row() {
        let record = InvoiceParser::new().parse("СЧЁТ № 9/1 от 01.02.2025");
        let csv = format_csv(&record).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("9/1,01.02.2025,UNRECOGNIZED"));
    }

    #[test]
    fn text_summary_prints_sentinels() {
        let record = InvoiceParser::new().parse("пустой документ");
        let text = format_text(&record);
        assert!(text.contains("Invoice: UNRECOGNIZED"));
    }
}
