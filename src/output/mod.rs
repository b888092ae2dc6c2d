//! Rendering and persistence of lookup results.
//!
//! Rendering is stateless: each function takes the data to display and writes
//! it to stdout. Persistence failures are reported by the caller and are
//! never fatal.

mod render;
mod save;
mod wiki;

pub use render::{render_raw_records, render_subdomain_table, SubdomainRow};
pub use save::{save_json, save_names};
pub use wiki::print_wiki;
