//! Initialization of process-wide resources.
//!
//! This module provides functions to initialize the logger, the HTTP client,
//! and the DNS resolver.

mod client;
mod logger;
mod resolver;

pub use client::init_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;
