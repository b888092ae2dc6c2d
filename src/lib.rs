//! crtsh_lookup library: certificate-transparency domain lookup.
//!
//! This library queries the crt.sh certificate-transparency log for a domain,
//! extracts the unique hostnames from the returned certificate records,
//! optionally narrows them to subdomains, optionally resolves each to an IP
//! address, and renders or saves the results.
//!
//! The pipeline is a straight line: fetch → extract → filter → resolve →
//! render/save. Each stage consumes the previous stage's full output, so
//! there is no shared mutable state and no coordination to speak of.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use crtsh_lookup::{run_lookup, Opt};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opt = Opt::parse_from(["crtsh_lookup", "example.com", "--subdomains"]);
//! let report = run_lookup(&opt).await?;
//! println!("{} unique names for {}", report.unique_names, report.domain);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod app;
pub mod config;
mod dns;
mod domain;
mod error_handling;
mod fetch;
pub mod initialization;
mod names;
pub mod output;

// Re-export public API
pub use app::{startup_action, StartupAction};
pub use config::{LogFormat, LogLevel, Opt};
pub use dns::resolve_ip;
pub use domain::filter_subdomains;
pub use error_handling::{FetchError, InitializationError};
pub use fetch::{fetch_certificates, CertificateRecord};
pub use names::extract_unique_names;
pub use run::{run_lookup, LookupReport};

// Internal run module (contains the pipeline orchestration)
mod run {
    use anyhow::{Context, Result};
    use colored::*;
    use log::info;

    use crate::config::Opt;
    use crate::dns::resolve_ip;
    use crate::domain::filter_subdomains;
    use crate::fetch::fetch_certificates;
    use crate::initialization::{init_client, init_resolver};
    use crate::names::extract_unique_names;
    use crate::output::{self, SubdomainRow};

    /// Results of a completed lookup.
    #[derive(Debug, Clone)]
    pub struct LookupReport {
        /// The domain that was queried.
        pub domain: String,
        /// Number of certificate records returned by crt.sh.
        pub total_records: usize,
        /// Number of unique hostnames extracted from the records.
        pub unique_names: usize,
        /// Number of subdomains shown, when `--subdomains` was requested.
        pub subdomains: Option<usize>,
    }

    impl LookupReport {
        /// One-line summary of the lookup, for logging.
        pub fn summary(&self) -> String {
            match self.subdomains {
                Some(count) => format!(
                    "{} records, {} unique names, {} subdomains",
                    self.total_records, self.unique_names, count
                ),
                None => format!(
                    "{} records, {} unique names",
                    self.total_records, self.unique_names
                ),
            }
        }
    }

    /// Runs the lookup pipeline for the domain in `opt`.
    ///
    /// Fetches the certificate records, extracts the unique hostnames, and
    /// renders either the subdomain table (with IPs when `--show-ips` is set)
    /// or the raw JSON response. When `--save` names a path, the displayed
    /// result is also persisted; a save failure is logged and is not fatal.
    ///
    /// # Errors
    ///
    /// Returns an error if no domain was supplied, if the HTTP client cannot
    /// be built, or if the crt.sh fetch fails. Resolution and save failures
    /// never surface here.
    pub async fn run_lookup(opt: &Opt) -> Result<LookupReport> {
        let domain = opt
            .domain
            .as_deref()
            .context("No domain supplied")?;

        let client = init_client().context("Failed to initialize HTTP client")?;

        println!(
            "🔍 Querying {} on crt.sh...",
            domain.cyan().bold()
        );
        let records = fetch_certificates(&client, domain)
            .await
            .context("Error fetching data from crt.sh")?;
        info!("crt.sh returned {} certificate records", records.len());

        let unique_names = extract_unique_names(&records);
        info!("Extracted {} unique names", unique_names.len());

        let mut report = LookupReport {
            domain: domain.to_string(),
            total_records: records.len(),
            unique_names: unique_names.len(),
            subdomains: None,
        };

        if opt.subdomains {
            let subdomains = filter_subdomains(&unique_names, domain);
            info!("{} subdomains under {}", subdomains.len(), domain);
            report.subdomains = Some(subdomains.len());

            let rows = if opt.show_ips {
                let resolver = init_resolver();
                let mut rows = Vec::with_capacity(subdomains.len());
                // Sequential on purpose: one lookup at a time, no fan-out
                for name in &subdomains {
                    let ip = resolve_ip(name, &resolver).await;
                    rows.push(SubdomainRow {
                        name: name.clone(),
                        ip: Some(ip),
                    });
                }
                rows
            } else {
                subdomains
                    .iter()
                    .map(|name| SubdomainRow {
                        name: name.clone(),
                        ip: None,
                    })
                    .collect()
            };
            output::render_subdomain_table(&rows, opt.show_ips);

            if let Some(path) = &opt.save {
                match output::save_names(path, &subdomains) {
                    Ok(()) => println!(
                        "{} {}",
                        "💾 Results saved to:".green().bold(),
                        path.display()
                    ),
                    Err(e) => log::error!("Error saving file: {e:#}"),
                }
            }
        } else {
            output::render_raw_records(&records, domain)?;

            if let Some(path) = &opt.save {
                match output::save_json(path, &records) {
                    Ok(()) => println!(
                        "{} {}",
                        "💾 Results saved to:".green().bold(),
                        path.display()
                    ),
                    Err(e) => log::error!("Error saving file: {e:#}"),
                }
            }
        }

        Ok(report)
    }
}
