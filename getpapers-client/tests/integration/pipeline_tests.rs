//! End-to-end pipeline tests using mocked ESearch and EFetch responses
//!
//! Verifies that search, bulk fetch, parsing, and the industry filter
//! compose correctly without real API calls.

use getpapers_client::{ClientConfig, PubMedClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ESEARCH_RESPONSE_2_IDS: &str = r#"{
    "header": {"type": "esearch", "version": "0.3"},
    "esearchresult": {
        "count": "2",
        "retmax": "2",
        "retstart": "0",
        "idlist": ["31978945", "33515491"]
    }
}"#;

/// Two records: one with an industry author/affiliation, one fully academic
const EFETCH_MEDLINE_MIXED: &str = "PMID- 31978945\n\
DP  - 2020 Feb\n\
TI  - Anti-infective agents from an industrial screening collection\n\
AU  - Wu F\n\
AU  - Wu F\n\
AU  - Zhao S, Institute of Microbiology\n\
AD  - Acme Pharma Inc, Cambridge, MA\n\
AD  - University of Somewhere, Dept of Chemistry\n\
EM  - old@acmepharma.example\n\
EM  - wu@acmepharma.example\n\
\n\
PMID- 33515491\n\
DP  - 2021 Jan\n\
TI  - Cancer treatment advances\n\
AU  - Smith J, Dept of Oncology\n\
AD  - University Hospital, Boston\n";

async fn mount_search_and_fetch(mock_server: &MockServer, search_body: &str, fetch_body: &str) {
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(search_body, "application/json"))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(fetch_body, "text/plain"))
        .mount(mock_server)
        .await;
}

fn create_mock_client(mock_server: &MockServer) -> PubMedClient {
    let config = ClientConfig::new().with_base_url(mock_server.uri());
    PubMedClient::with_config(config)
}

#[tokio::test]
async fn test_fetch_medline_returns_body_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("id", "31978945,33515491"))
        .and(query_param("rettype", "medline"))
        .and(query_param("retmode", "text"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(EFETCH_MEDLINE_MIXED, "text/plain"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let pmids = vec!["31978945".to_string(), "33515491".to_string()];
    let body = client.fetch_medline(&pmids).await.unwrap();

    assert_eq!(body, EFETCH_MEDLINE_MIXED);
}

#[tokio::test]
async fn test_fetch_medline_with_no_pmids_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let body = client.fetch_medline(&[]).await.unwrap();

    assert!(body.is_empty());
}

#[tokio::test]
async fn test_pipeline_keeps_only_industry_papers() {
    let mock_server = MockServer::start().await;
    mount_search_and_fetch(&mock_server, ESEARCH_RESPONSE_2_IDS, EFETCH_MEDLINE_MIXED).await;

    let client = create_mock_client(&mock_server);
    let papers = client.search_industry_papers("antibiotics", 10).await.unwrap();

    assert_eq!(papers.len(), 1);
    let paper = &papers[0];
    assert_eq!(paper.pmid, "31978945");
    assert_eq!(
        paper.title,
        "Anti-infective agents from an industrial screening collection"
    );
    assert_eq!(paper.pub_date, "2020 Feb");
    // Duplicate author collapsed, academic author excluded
    assert_eq!(paper.non_academic_authors.len(), 1);
    assert!(paper.non_academic_authors.contains("Wu F"));
    // Academic affiliation excluded
    assert_eq!(paper.company_affiliations.len(), 1);
    assert!(paper
        .company_affiliations
        .contains("Acme Pharma Inc, Cambridge, MA"));
    // Later email line wins
    assert_eq!(paper.corresponding_email, "wu@acmepharma.example");
}

#[tokio::test]
async fn test_pipeline_with_zero_search_results_skips_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"esearchresult": {"count": "0", "idlist": []}}"#,
            "application/json",
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let papers = client.search_industry_papers("zzznothing", 10).await.unwrap();

    assert!(papers.is_empty());
}

#[tokio::test]
async fn test_pipeline_with_no_qualifying_records_is_empty() {
    let mock_server = MockServer::start().await;
    let academic_only = "PMID- 33515491\n\
TI  - Cancer treatment advances\n\
AU  - Smith J, Dept of Oncology\n\
AD  - University Hospital, Boston\n";
    mount_search_and_fetch(&mock_server, ESEARCH_RESPONSE_2_IDS, academic_only).await;

    let client = create_mock_client(&mock_server);
    let papers = client.search_industry_papers("oncology", 10).await.unwrap();

    assert!(papers.is_empty());
}
