//! Static usage page.

use colored::*;

/// Prints the command wiki.
///
/// This is a static page; no network activity happens before or after it.
pub fn print_wiki() {
    println!("{}", "📘 Command Wiki".cyan().bold());
    println!();
    println!("{}", "Domain:".yellow().bold());
    println!("  The main argument should be the domain you want to query.");
    println!("  Example:");
    println!("    {}", "crtsh_lookup example.com".green());
    println!();
    println!("{}", "--subdomains:".yellow().bold());
    println!("  Show only the subdomains related to the domain.");
    println!("  Example:");
    println!("    {}", "crtsh_lookup example.com --subdomains".green());
    println!();
    println!("{}", "--show-ips:".yellow().bold());
    println!("  Show IP addresses for each subdomain.");
    println!("  Example:");
    println!(
        "    {}",
        "crtsh_lookup example.com --subdomains --show-ips".green()
    );
    println!();
    println!("{}", "--save:".yellow().bold());
    println!("  Save results to a file.");
    println!("  Example:");
    println!(
        "    {}",
        "crtsh_lookup example.com --save results.txt".green()
    );
    println!();
    println!("{}", "--wiki:".yellow().bold());
    println!("  Show this wiki page.");
    println!();
    println!("──────────────────────────────");
    println!("Examples:");
    println!("  {}", "crtsh_lookup example.com".green());
    println!("  {}", "crtsh_lookup example.com --subdomains".green());
    println!(
        "  {}",
        "crtsh_lookup example.com --subdomains --show-ips".green()
    );
    println!(
        "  {}",
        "crtsh_lookup example.com --save domains.txt".green()
    );
}
