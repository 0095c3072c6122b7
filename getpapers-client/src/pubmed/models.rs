use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A paper retained by the industry-affiliation filter
///
/// Produced by the MEDLINE record parser. A record only becomes an
/// `IndustryPaper` when it keeps at least one non-academic author AND at
/// least one company affiliation; every other record is dropped whole.
///
/// The serde renames give the report its column names, so serializing a
/// paper to JSON or CSV produces the `PubmedID`/`Title`/... headings
/// directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryPaper {
    /// PubMed ID
    #[serde(rename = "PubmedID")]
    pub pmid: String,
    /// Article title
    #[serde(rename = "Title")]
    pub title: String,
    /// Publication date as given in the record (free-form, e.g. "2020 Feb")
    #[serde(rename = "PublicationDate")]
    pub pub_date: String,
    /// Authors that passed the non-academic heuristic (exact-string de-dup)
    #[serde(rename = "NonAcademicAuthors")]
    pub non_academic_authors: BTreeSet<String>,
    /// Affiliations that passed the company heuristic (exact-string de-dup)
    #[serde(rename = "CompanyAffiliations")]
    pub company_affiliations: BTreeSet<String>,
    /// Corresponding author email; empty if the record carries none
    #[serde(rename = "CorrespondingAuthorEmail")]
    pub corresponding_email: String,
}
