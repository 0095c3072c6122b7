//! MEDLINE record parser
//!
//! EFetch with `rettype=medline&retmode=text` returns one record per
//! article, separated by blank lines. Each record is a sequence of tagged
//! lines: a short tag, space padding, a `-` separator, then the value
//! (e.g. `TI  - Article title`).
//!
//! The parser is deliberately permissive. Only the six tags the pipeline
//! needs are recognized; continuation lines, unknown tags, and malformed
//! lines have no effect. Author and affiliation values are classified as
//! they are scanned (see [`crate::filter`]), and a record is yielded only
//! when both classified sets end up non-empty.

use tracing::debug;

use crate::filter;
use crate::pubmed::models::IndustryPaper;

/// Blank-line separator between records in an EFetch MEDLINE response
const RECORD_SEPARATOR: &str = "\n\n";

const PMID_TAG: &str = "PMID-";
const TITLE_TAG: &str = "TI  -";
const DATE_TAG: &str = "DP  -";
const AUTHOR_TAG: &str = "AU  -";
const AFFILIATION_TAG: &str = "AD  -";
const EMAIL_TAG: &str = "EM  -";

/// Parse an EFetch MEDLINE response into industry papers
///
/// Lazily yields one [`IndustryPaper`] per record that keeps at least one
/// non-academic author and one company affiliation; all other records
/// yield nothing. The iterator is finite and cheap enough that re-invoking
/// the function stands in for restart.
///
/// # Example
///
/// ```
/// use getpapers_client::parse_industry_papers;
///
/// let medline = "PMID- 123\nAU  - J. Smith\nAD  - Acme Pharma Corp";
/// let papers: Vec<_> = parse_industry_papers(medline).collect();
///
/// assert_eq!(papers.len(), 1);
/// assert_eq!(papers[0].pmid, "123");
/// ```
pub fn parse_industry_papers(text: &str) -> impl Iterator<Item = IndustryPaper> + '_ {
    text.split(RECORD_SEPARATOR).filter_map(parse_record)
}

/// Parse one MEDLINE record block
///
/// Returns `None` unless both classified sets are non-empty after the scan.
fn parse_record(block: &str) -> Option<IndustryPaper> {
    let mut paper = IndustryPaper::default();

    for line in block.lines() {
        if line.starts_with(PMID_TAG) {
            paper.pmid = tag_value(line).to_string();
        } else if line.starts_with(TITLE_TAG) {
            paper.title = tag_value(line).to_string();
        } else if line.starts_with(DATE_TAG) {
            paper.pub_date = tag_value(line).to_string();
        } else if line.starts_with(AUTHOR_TAG) {
            let author = tag_value(line);
            if filter::is_non_academic_author(author) {
                paper.non_academic_authors.insert(author.to_string());
            }
        } else if line.starts_with(AFFILIATION_TAG) {
            let affiliation = tag_value(line);
            if filter::is_company_affiliation(affiliation) {
                paper.company_affiliations.insert(affiliation.to_string());
            }
        } else if line.starts_with(EMAIL_TAG) {
            // Last occurrence wins
            paper.corresponding_email = tag_value(line).to_string();
        }
    }

    if paper.non_academic_authors.is_empty() || paper.company_affiliations.is_empty() {
        debug!(pmid = %paper.pmid, "Record dropped by industry filter");
        return None;
    }

    Some(paper)
}

/// Everything after the first `-` on the line, trimmed
///
/// First-occurrence-split semantics are load-bearing: the downstream
/// heuristics were tuned against them, so values must not be re-split on
/// later separators.
fn tag_value(line: &str) -> &str {
    line.split_once('-')
        .map(|(_, value)| value.trim())
        .unwrap_or("")
}
