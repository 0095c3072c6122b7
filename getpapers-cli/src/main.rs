use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use getpapers_client::{export, parse_industry_papers, ClientConfig, IndustryPaper, PubMedClient};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "getpapers",
    version,
    about = "Find PubMed papers with non-academic authors and company affiliations",
    long_about = "Searches PubMed for a keyword query, fetches the matching MEDLINE \
                  records in bulk, and keeps the papers whose author and affiliation \
                  lines look industrial rather than academic. Results go to stdout as \
                  JSON, or to a CSV file with --file."
)]
struct Cli {
    /// Search query for PubMed
    query: String,

    /// Write the report as CSV to this file instead of printing JSON
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Maximum number of search results to fetch
    #[arg(long, default_value_t = 10)]
    limit: usize,

    /// API key for NCBI E-utilities (increases rate limit)
    #[arg(long, env = "NCBI_API_KEY")]
    api_key: Option<String>,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "getpapers")]
    tool: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for the JSON report
    let filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    run(&cli).await;
    Ok(())
}

/// Run the pipeline, converting every failure into a terminal message
///
/// Nothing here crashes the process: transport failures, empty results,
/// and export failures all end in an explanatory message and a normal
/// exit. Zero hits and zero qualifying papers are reported separately.
async fn run(cli: &Cli) {
    let client = PubMedClient::with_config(build_config(cli));

    let pmids = match client.search_pmids(&cli.query, cli.limit).await {
        Ok(pmids) => pmids,
        Err(err) => {
            error!(error = %err, "PubMed search failed");
            eprintln!("Error fetching data from PubMed API: {err}");
            return;
        }
    };

    if pmids.is_empty() {
        println!("No papers found for this query.");
        return;
    }
    debug!(count = pmids.len(), "Fetching MEDLINE records");

    let medline = match client.fetch_medline(&pmids).await {
        Ok(medline) => medline,
        Err(err) => {
            error!(error = %err, "MEDLINE fetch failed");
            eprintln!("Error fetching data from PubMed API: {err}");
            return;
        }
    };

    let papers: Vec<IndustryPaper> = parse_industry_papers(&medline).collect();
    if papers.is_empty() {
        println!("No papers with non-academic authors and company affiliations found.");
        return;
    }
    info!(candidates = pmids.len(), retained = papers.len(), "Industry filter applied");

    report(cli, &papers);
}

/// Write the CSV report or print JSON, swallowing export failures
fn report(cli: &Cli, papers: &[IndustryPaper]) {
    match &cli.file {
        Some(path) => match export::write_csv(papers, path) {
            Ok(()) => println!("Results saved to {}", path.display()),
            Err(err) => {
                error!(error = %err, path = %path.display(), "Failed to write CSV report");
                eprintln!("Error saving CSV: {err}");
            }
        },
        None => match export::to_json(papers) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!(error = %err, "Failed to serialize results");
                eprintln!("Error serializing results: {err}");
            }
        },
    }
}

fn build_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::new().with_tool(&cli.tool);

    if let Some(ref api_key) = cli.api_key {
        config = config.with_api_key(api_key);
    }
    if let Some(ref email) = cli.email {
        config = config.with_email(email);
    }

    config
}
