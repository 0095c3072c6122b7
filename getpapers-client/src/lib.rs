//! # getpapers-client
//!
//! Query PubMed for papers with non-academic authors and commercial
//! affiliations.
//!
//! The pipeline is strictly sequential: ESearch resolves a keyword query to
//! PMIDs, EFetch retrieves the matching MEDLINE text records in one bulk
//! request, the parser splits and scans the records, two heuristic
//! classifiers decide which authors and affiliations look industrial
//! rather than academic, and the exporter renders the survivors as a CSV
//! table or JSON. A record is kept only when it has both a non-academic
//! author and a company affiliation.
//!
//! ## Quick Start
//!
//! ```no_run
//! use getpapers_client::PubMedClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PubMedClient::new();
//!     let papers = client.search_industry_papers("cancer immunotherapy", 10).await?;
//!
//!     for paper in papers {
//!         println!("{}: {}", paper.pmid, paper.title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Parsing without the network
//!
//! The parser and classifiers are pure and usable on their own:
//!
//! ```
//! use getpapers_client::{filter, parse_industry_papers};
//!
//! assert!(filter::is_company_affiliation("Acme Biotech Inc"));
//!
//! let medline = "PMID- 123\nAU  - J. Smith\nAD  - Acme Pharma Corp";
//! assert_eq!(parse_industry_papers(medline).count(), 1);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod pubmed;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{GetPapersError, Result};
pub use pubmed::{parse_industry_papers, IndustryPaper, PubMedClient};
