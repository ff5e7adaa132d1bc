use std::io;
use std::path::PathBuf;

use bioscript_cli::{generate, logging, Console};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generate a random DNA sequence with a name spliced in and save it as FASTA.
#[derive(Parser, Debug)]
#[command(name = "fasta-generator", version, about, long_about = None)]
struct Args {
    /// Directory the FASTA file is written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Seed for a reproducible sequence
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let request = generate::read_request(&mut console)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    generate::run(&request, &args.output_dir, &mut rng, console.output())?;
    Ok(())
}
