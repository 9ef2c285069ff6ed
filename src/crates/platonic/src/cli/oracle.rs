//! Oracle command handlers: consult and challenge

use crate::catalog::Catalog;
use crate::cli::OutputFormat;
use crate::error::{PlatonicError, Result};
use colored::{ColoredString, Colorize};
use oracle::{ChallengeTarget, OracleClient, OracleVerdict, Transport, VerdictStatus};

fn verdict_badge(verdict: &OracleVerdict) -> ColoredString {
    let raw = verdict.status.as_deref().unwrap_or("UNKNOWN");
    match verdict.status_kind() {
        Some(VerdictStatus::Declared) => raw.green().bold(),
        Some(VerdictStatus::Candidate) => raw.yellow().bold(),
        Some(VerdictStatus::Empty) | Some(VerdictStatus::Rejected) => raw.red().bold(),
        None => raw.normal(),
    }
}

/// Render a verdict card; absent fields are left out
pub fn render_verdict(verdict: &OracleVerdict) -> String {
    let mut out = String::new();

    let title = verdict.category.as_deref().unwrap_or("Unclassified");
    out.push_str(&format!("\n{}  [{}]\n\n", title.bold().underline(), verdict_badge(verdict)));

    let fields = [
        ("Model", &verdict.model),
        ("Reasoning", &verdict.core_reasoning),
        ("Maintenance", &verdict.maintenance),
        ("Lifespan", &verdict.lifespan),
        ("Failure modes", &verdict.failure_modes),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            out.push_str(&format!("  {:<15} {}\n", format!("{}:", label).bold(), value));
        }
    }

    if verdict.is_empty() {
        out.push_str("  The Oracle returned no recognised fields.\n");
    }
    out
}

/// Handle the consult command
pub async fn handle_consult<T: Transport>(
    client: &OracleClient<T>,
    query: &str,
    format: OutputFormat,
) -> Result<()> {
    let Some(verdict) = client.submit(query).await? else {
        return Ok(());
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&verdict)?),
        OutputFormat::Text => print!("{}", render_verdict(&verdict)),
    }
    Ok(())
}

/// Handle the challenge command
pub async fn handle_challenge<T: Transport>(
    client: &OracleClient<T>,
    catalog: &Catalog,
    id: &str,
    challenger: &str,
) -> Result<()> {
    let entry = catalog
        .get(id)
        .ok_or_else(|| PlatonicError::NotFound(format!("category '{}'", id.trim())))?;

    let target = ChallengeTarget::from(entry);
    if let Some(text) = client.challenge(&target, challenger).await? {
        println!(
            "\n{} {} vs. {}\n",
            "Challenge:".bold(),
            challenger.trim(),
            entry.model_or_placeholder()
        );
        println!("{}", text);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_partial_verdict() {
        let verdict = OracleVerdict {
            category: Some("Toaster".to_string()),
            status: Some("EMPTY".to_string()),
            ..Default::default()
        };

        let card = render_verdict(&verdict);
        assert!(card.contains("Toaster"));
        assert!(card.contains("EMPTY"));
        assert!(!card.contains("Lifespan"));
    }

    #[test]
    fn test_render_empty_verdict() {
        let card = render_verdict(&OracleVerdict::default());
        assert!(card.contains("Unclassified"));
        assert!(card.contains("no recognised fields"));
    }
}
