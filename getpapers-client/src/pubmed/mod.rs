//! PubMed client for searching and fetching MEDLINE records
//!
//! This module covers the networked half of the pipeline plus the record
//! parser:
//! - [`client`] - ESearch (keyword search) and EFetch (bulk MEDLINE
//!   retrieval) against the E-utilities endpoints
//! - [`parser`] - splitting an EFetch body into records and classifying
//!   authors/affiliations as the lines are scanned
//! - [`models`] - the [`IndustryPaper`] entity the parser produces
//! - `responses` - serde types for the ESearch JSON envelope

pub mod client;
pub mod models;
pub mod parser;
pub(crate) mod responses;

// Re-export public types
pub use client::PubMedClient;
pub use models::IndustryPaper;
pub use parser::parse_industry_papers;
