//! Terminal rendering for lookup results.

use anyhow::Result;
use colored::*;

use crate::fetch::CertificateRecord;

const NAME_HEADER: &str = "Subdomain";
const IP_HEADER: &str = "IP Address";

/// One row of the subdomain table.
#[derive(Debug, Clone)]
pub struct SubdomainRow {
    /// The discovered subdomain.
    pub name: String,
    /// Its resolved address (or the sentinel), when `--show-ips` was given.
    pub ip: Option<String>,
}

/// Prints the discovered subdomains as a two-column table.
///
/// The IP column is only rendered when `show_ips` is set. Width is computed
/// before coloring so ANSI escape codes do not skew the alignment.
pub fn render_subdomain_table(rows: &[SubdomainRow], show_ips: bool) {
    if rows.is_empty() {
        println!("{}", "⚠️  No subdomains found.".yellow().bold());
        return;
    }

    let name_width = rows
        .iter()
        .map(|row| row.name.len())
        .chain([NAME_HEADER.len()])
        .max()
        .unwrap_or(NAME_HEADER.len());

    println!("{}", "🌐 Discovered Subdomains".magenta().bold());
    if show_ips {
        println!(
            "{}  {}",
            format!("{NAME_HEADER:<name_width$}").bold(),
            IP_HEADER.bold()
        );
        for row in rows {
            let ip = row.ip.as_deref().unwrap_or("");
            println!(
                "{}  {}",
                format!("{:<name_width$}", row.name).cyan(),
                ip.green()
            );
        }
    } else {
        println!("{}", NAME_HEADER.bold());
        for row in rows {
            println!("{}", row.name.cyan());
        }
    }
}

/// Prints the raw crt.sh response as indented JSON.
///
/// Unknown upstream fields are preserved by the record model, so this mirrors
/// the response as received.
pub fn render_raw_records(records: &[CertificateRecord], domain: &str) -> Result<()> {
    let body = serde_json::to_string_pretty(records)?;
    println!(
        "{}",
        format!("📜 crt.sh results for {domain}").green().bold()
    );
    println!("{body}");
    Ok(())
}
