//! Heuristic classifiers for author and affiliation lines
//!
//! Both predicates are stateless, case-insensitive substring tests over
//! small fixed keyword lists. They are deliberately approximate: false
//! positives and negatives are expected, and the keyword lists are
//! English-only. Downstream results were tuned against exactly these
//! lists, so they must not be extended or "improved" in place.

/// Keywords whose presence marks an author line as academic
const ACADEMIC_KEYWORDS: &[&str] = &["university", "college", "institute", "dept"];

/// Keywords whose presence marks an affiliation as commercial
const COMPANY_KEYWORDS: &[&str] = &["pharma", "biotech", "laboratories", "inc", "corp"];

/// Does this author line look non-academic?
///
/// Defaults to `true`: a name is counted as non-academic unless it contains
/// one of the academic keywords. Absence of evidence of academia counts as
/// evidence of non-academia, a known weakness of the heuristic.
pub fn is_non_academic_author(name: &str) -> bool {
    let name = name.to_lowercase();
    !ACADEMIC_KEYWORDS.iter().any(|keyword| name.contains(keyword))
}

/// Does this affiliation line look like a pharma/biotech company?
pub fn is_company_affiliation(text: &str) -> bool {
    let text = text.to_lowercase();
    COMPANY_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}
