//! Report export
//!
//! Serializes filtered papers either as a CSV table with a fixed column
//! order, or as pretty JSON for stdout. The CSV writer overwrites any
//! existing file at the destination.

use std::collections::BTreeSet;
use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::error::Result;
use crate::pubmed::models::IndustryPaper;

/// Column order of the CSV report
const CSV_HEADER: [&str; 6] = [
    "PubmedID",
    "Title",
    "PublicationDate",
    "NonAcademicAuthors",
    "CompanyAffiliations",
    "CorrespondingAuthorEmail",
];

/// Write papers as a CSV table, overwriting any existing file
///
/// Set-valued columns are serialized as a bracketed list of their elements
/// (`["a","b"]`) so they survive a round-trip through the file regardless
/// of element order.
///
/// # Errors
///
/// * `GetPapersError::CsvError` - If a record cannot be written
/// * `GetPapersError::IoError` - If the file cannot be created or flushed
pub fn write_csv<P: AsRef<Path>>(papers: &[IndustryPaper], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut writer = Writer::from_path(path)?;

    writer.write_record(CSV_HEADER)?;
    for paper in papers {
        let authors = bracketed_list(&paper.non_academic_authors)?;
        let affiliations = bracketed_list(&paper.company_affiliations)?;
        writer.write_record([
            paper.pmid.as_str(),
            paper.title.as_str(),
            paper.pub_date.as_str(),
            authors.as_str(),
            affiliations.as_str(),
            paper.corresponding_email.as_str(),
        ])?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = papers.len(), "CSV report written");
    Ok(())
}

/// Render papers as pretty JSON for stdout output
pub fn to_json(papers: &[IndustryPaper]) -> Result<String> {
    Ok(serde_json::to_string_pretty(papers)?)
}

/// Render a set as a bracketed JSON list of its elements
fn bracketed_list(values: &BTreeSet<String>) -> Result<String> {
    Ok(serde_json::to_string(values)?)
}
