//! Catalog command handlers: ledger, detail, stats, search and rulebook

use crate::catalog::{Catalog, CatalogEntry, StatusFilter};
use crate::cli::{status_badge, truncate, OutputFormat};
use crate::error::{PlatonicError, Result};
use colored::Colorize;
use oracle::RULEBOOK;
use tabled::{Table, Tabled};

/// Ledger row for table output
#[derive(Tabled)]
struct LedgerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Maintenance")]
    maintenance: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
}

impl From<&CatalogEntry> for LedgerRow {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            category: entry.category.to_string(),
            status: entry.status.label().to_string(),
            model: truncate(entry.model_or_placeholder(), 40),
            maintenance: entry.maintenance.to_string(),
            confidence: entry.confidence_pips(),
        }
    }
}

/// Render entries as the ledger table
pub fn render_ledger(entries: &[&CatalogEntry]) -> String {
    Table::new(entries.iter().map(|entry| LedgerRow::from(*entry))).to_string()
}

/// Render one record as a detail sheet
pub fn render_entry(entry: &CatalogEntry) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{}  [{}]\n\n",
        entry.category.bold().underline(),
        status_badge(entry.status)
    ));

    let price = entry.price.unwrap_or("-");
    let reviewed = entry
        .reviewed_on()
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| entry.last_reviewed.to_string());

    let fields = [
        ("Model", entry.model_or_placeholder()),
        ("Price", price),
        ("Form", entry.form_definition),
        ("Reasoning", entry.core_reasoning),
        ("Disqualifiers", entry.key_disqualifiers),
        ("Maintenance", entry.maintenance.as_str()),
        ("Lifespan", entry.lifespan),
    ];
    for (label, value) in fields {
        out.push_str(&format!("  {:<14} {}\n", format!("{}:", label).bold(), value));
    }

    out.push_str(&format!(
        "  {:<14} {} ({}/5)\n",
        "Confidence:".bold(),
        entry.confidence_pips(),
        entry.confidence
    ));
    out.push_str(&format!("  {:<14} {}\n", "Reviewed:".bold(), reviewed));
    out
}

/// Handle the ledger command
pub fn handle_list(catalog: &Catalog, filter: StatusFilter, format: OutputFormat) -> Result<()> {
    let entries = catalog.filter(filter);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", format!("No categories with status '{}'", filter).yellow());
        return Ok(());
    }

    println!("{}", render_ledger(&entries));
    println!("\nTotal: {} categories ({})", entries.len(), filter);
    Ok(())
}

/// Handle the detail command
pub fn handle_show(catalog: &Catalog, id: &str, format: OutputFormat) -> Result<()> {
    let entry = catalog
        .get(id)
        .ok_or_else(|| PlatonicError::NotFound(format!("category '{}'", id.trim())))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(entry)?),
        OutputFormat::Text => print!("{}", render_entry(entry)),
    }
    Ok(())
}

/// Handle the stats command
pub fn handle_stats(catalog: &Catalog) -> Result<()> {
    let stats = catalog.stats();

    println!("\n{}", "Registry".bold().underline());
    println!("  {:<12} {}", "Declared".green(), stats.declared);
    println!("  {:<12} {}", "Empty".red(), stats.empty);
    println!("  {:<12} {}", "Candidate".yellow(), stats.candidate);
    println!("  {:<12} {}", "Deprecated".dimmed(), stats.deprecated);
    println!("  {:<12} {}", "Total", stats.total);
    Ok(())
}

/// Handle the search command
pub fn handle_search(catalog: &Catalog, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(PlatonicError::InvalidArgument(
            "search text must not be empty".to_string(),
        ));
    }

    let entries = catalog.search(text);
    if entries.is_empty() {
        println!("{}", format!("No categories match '{}'", text.trim()).yellow());
        return Ok(());
    }

    println!("{}", render_ledger(&entries));
    println!("\nTotal: {} matches", entries.len());
    Ok(())
}

/// Handle the rulebook command
pub fn handle_rulebook() -> Result<()> {
    println!("{}", RULEBOOK.trim());
    Ok(())
}
