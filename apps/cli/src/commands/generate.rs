use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use bioscript_core::{
    normalize_description, normalize_marker, parse_length, parse_sequence_id, CompositionStats,
    GeneratedSequence, GenerationRequest, MAX_DESCRIPTION_LEN,
};
use bioscript_formats::fasta;
use log::info;
use rand::Rng;

use crate::prompt::Console;

/// Ask for the four generation parameters, re-prompting on invalid input
pub fn read_request<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<GenerationRequest> {
    let length = console.prompt_until("Sequence length (positive integer): ", parse_length)?;
    let sequence_id = console.prompt_until("Sequence ID (no spaces): ", parse_sequence_id)?;

    let description = normalize_description(&console.read_line("Sequence description: ")?);
    if description.truncated {
        writeln!(
            console.output(),
            "Warning: description longer than {} characters, truncated.",
            MAX_DESCRIPTION_LEN
        )?;
    }

    let marker = console.prompt_until("Name to insert (letters only): ", normalize_marker)?;

    Ok(GenerationRequest::from_validated(length, sequence_id, description, marker))
}

/// Generate the sequence, save it as `<sequence_id>.fasta` in `output_dir`
/// and print its composition. Returns the path of the written file.
pub fn run<G: Rng, W: Write>(
    request: &GenerationRequest,
    output_dir: &Path,
    rng: &mut G,
    out: &mut W,
) -> anyhow::Result<PathBuf> {
    let generated = GeneratedSequence::generate(request, rng);
    info!(
        "generated {} bases, marker at offset {}",
        generated.bases().len(),
        generated.insertion_offset()
    );

    let path = output_dir.join(request.file_name());
    let file = File::create(&path).with_context(|| format!("could not create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    fasta::write_record(
        &mut writer,
        request.sequence_id(),
        request.description(),
        generated.decorated(),
    )
    .and_then(|_| writer.flush())
    .with_context(|| format!("could not write {}", path.display()))?;

    let stats = CompositionStats::from_bases(generated.bases())?;

    writeln!(out, "Sequence saved to {}", path.display())?;
    writeln!(out, "Sequence statistics:")?;
    writeln!(out, "{}", stats)?;

    Ok(path)
}
