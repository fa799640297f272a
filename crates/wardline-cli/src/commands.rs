use std::fs;
use std::io;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use tracing::{debug, info, warn};

use wardline_ingest::{Import, import_rows};
use wardline_labs::{
    CellValue, LabRecord, REFERENCE_RANGES, classify, summarize_abnormalities,
};
use wardline_model::CURRENT_COLUMNS;
use wardline_report::{RoundBundle, build_round_summary};

use crate::cli::{CheckArgs, LabsArgs, SummarizeArgs, TemplateArgs};
use crate::table::{apply_table_style, dim_cell, header_cell, status_cell};

/// Validate a roster file, fill sections, and preview or dump the rows.
pub fn run_check(args: &CheckArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("read roster file: {}", args.file.display()))?;

    let mut import = import_rows(&text)?;
    let Some(mode) = import.mode else {
        println!("Empty file.");
        return Ok(());
    };
    debug!(mode = %mode, rows = import.rows.len(), "roster file validated");

    if let Some(section) = &args.section {
        fill_sections(&mut import, section);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&import)?);
        return Ok(());
    }

    println!("Template: {mode} ({} columns)", mode.column_count());
    if import.is_empty() {
        warn!("roster file contains no non-empty data rows");
        println!("No data rows detected.");
        return Ok(());
    }

    print_preview(&import, args.limit);
    if import.rows.len() > args.limit {
        println!(
            "Showing first {} of {} data rows.",
            args.limit,
            import.rows.len()
        );
    } else {
        println!("{} data rows detected.", import.rows.len());
    }
    info!(rows = import.rows.len(), "roster rows ready to import");
    Ok(())
}

/// Blank Section cells get the caller's active section; rows that already
/// name one keep it.
fn fill_sections(import: &mut Import, section: &str) {
    for row in &mut import.rows {
        if row.get("Section").is_some_and(str::is_empty) {
            row.set_section(section);
        }
    }
}

fn print_preview(import: &Import, limit: usize) {
    let mut table = Table::new();
    table.set_header(CURRENT_COLUMNS.iter().map(|name| header_cell(name)));
    apply_table_style(&mut table);
    for row in import.rows.iter().take(limit) {
        table.add_row(row.values().iter().map(String::as_str));
    }
    println!("{table}");
}

/// Classify a labs record and print the grid plus abnormality chips.
pub fn run_labs(args: &LabsArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("read labs record: {}", args.file.display()))?;
    let record: LabRecord = serde_json::from_str(&text)
        .with_context(|| format!("parse labs record: {}", args.file.display()))?;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Lab"),
        header_cell("Value"),
        header_cell("Reference"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for range in &REFERENCE_RANGES {
        let value = record.get(range.name).cloned();
        let shown = value
            .as_ref()
            .map(CellValue::as_text)
            .unwrap_or_default();
        let classification = classify(
            range.name,
            value.as_ref().unwrap_or(&CellValue::Text(String::new())),
        );
        table.add_row(vec![
            Cell::new(range.name),
            if shown.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(&shown)
            },
            dim_cell(format!("[{}\u{2013}{}]", range.low, range.high)),
            status_cell(classification.status),
        ]);
    }
    println!("{table}");

    let summary = summarize_abnormalities(&record);
    if summary.is_empty() {
        println!("No abnormal labs.");
    } else {
        println!("Abnormal: {}", summary.chips().join(" | "));
    }
    Ok(())
}

/// Render the heuristic round summary for a bundle file.
pub fn run_summarize(args: &SummarizeArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("read bundle: {}", args.file.display()))?;
    let bundle: RoundBundle = serde_json::from_str(&text)
        .with_context(|| format!("parse bundle: {}", args.file.display()))?;
    println!("{}", build_round_summary(&bundle));
    Ok(())
}

/// Write the blank current-template header row.
pub fn run_template(args: &TemplateArgs) -> Result<()> {
    match &args.output {
        Some(path) => {
            let mut writer = csv::Writer::from_path(path)
                .with_context(|| format!("create template: {}", path.display()))?;
            writer.write_record(CURRENT_COLUMNS)?;
            writer.flush()?;
            info!(path = %path.display(), "roster template written");
        }
        None => {
            let mut writer = csv::Writer::from_writer(io::stdout());
            writer.write_record(CURRENT_COLUMNS)?;
            writer.flush()?;
        }
    }
    Ok(())
}
