use std::io;
use std::path::PathBuf;

use anyhow::bail;
use bioscript_cli::retrieve::{self, RetrievalRequest};
use bioscript_cli::{logging, Console};
use bioscript_core::{parse_taxid, LengthBounds};
use bioscript_entrez::config::{DEFAULT_MAX_RECORDS, DEFAULT_PAGE_SIZE, DEFAULT_THROTTLE};
use bioscript_entrez::{EntrezClient, EntrezConfig, Paging};
use clap::Parser;

/// Fetch GenBank records for an organism, keep those within a length range,
/// and save them as a CSV table and a chart.
///
/// Values not given as options are asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "genbank-retriever", version, about, long_about = None)]
struct Args {
    /// Contact email sent to NCBI with every request
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// NCBI API key
    #[arg(long, env = "NCBI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// NCBI taxonomy ID of the organism
    #[arg(long)]
    taxid: Option<String>,

    /// Minimum sequence length (inclusive)
    #[arg(long, value_name = "N")]
    min_len: Option<usize>,

    /// Maximum sequence length (inclusive)
    #[arg(long, value_name = "N")]
    max_len: Option<usize>,

    /// Upper limit on records fetched across all pages
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_RECORDS)]
    max_records: usize,

    /// Records requested per page
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Directory the CSV and PNG files are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let email = match args.email {
        Some(email) => email,
        None => console.prompt_until("Enter your NCBI email: ", |raw| {
            let email = raw.trim();
            if email.is_empty() {
                Err("email must not be empty")
            } else {
                Ok(email.to_string())
            }
        })?,
    };
    let api_key = match args.api_key {
        Some(key) => Some(key),
        None => Some(console.read_line("Enter your NCBI API key (blank for none): ")?),
    };
    let taxid = match args.taxid {
        Some(raw) => parse_taxid(&raw)?,
        None => retrieve::read_taxid(&mut console)?,
    };
    let bounds = match (args.min_len, args.max_len) {
        (Some(min), Some(max)) => LengthBounds::new(min, max)?,
        (None, None) => retrieve::read_bounds(&mut console)?,
        _ => bail!("--min-len and --max-len must be given together"),
    };

    let paging = Paging {
        max_records: args.max_records,
        page_size: args.page_size,
        throttle: DEFAULT_THROTTLE,
    };
    let config = EntrezConfig::new(email)
        .with_api_key(api_key)
        .with_paging(paging);
    let client = EntrezClient::new(config)?;

    let request = RetrievalRequest { taxid, bounds };
    retrieve::run(
        &client,
        &request,
        client.config().paging,
        &args.output_dir,
        console.output(),
    )?;
    Ok(())
}
