use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use bioscript_core::{filter_by_length, parse_length_bound, parse_taxid, LengthBounds};
use bioscript_entrez::{Paging, RecordStream, SequenceDatabase};
use bioscript_formats::Report;
use log::{info, warn};

use crate::prompt::Console;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalRequest {
    pub taxid: String,
    pub bounds: LengthBounds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievalOutcome {
    /// The search matched nothing; no files were written
    NoRecords,
    Saved {
        kept: usize,
        csv_path: PathBuf,
        plot_path: PathBuf,
    },
}

pub fn read_taxid<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<String> {
    console.prompt_until("Enter organism taxid: ", parse_taxid)
}

/// Ask for the length range; the maximum is asked again until it is not
/// below the minimum
pub fn read_bounds<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<LengthBounds> {
    let min = console.prompt_until("Min sequence length: ", parse_length_bound)?;
    console.prompt_until("Max sequence length: ", |raw| {
        let max = parse_length_bound(raw).map_err(|e| e.to_string())?;
        LengthBounds::new(min, max).map_err(|e| e.to_string())
    })
}

/// Search, stream and filter records, then write the CSV report and chart
/// into `output_dir`.
pub fn run<D, W>(
    db: &D,
    request: &RetrievalRequest,
    paging: Paging,
    output_dir: &Path,
    out: &mut W,
) -> anyhow::Result<RetrievalOutcome>
where
    D: SequenceDatabase + ?Sized,
    W: Write,
{
    writeln!(out, "Searching for taxid: {}", request.taxid)?;
    let search = db
        .search(&request.taxid)
        .with_context(|| format!("search for taxid {} failed", request.taxid))?;
    writeln!(out, "Found {} records.", search.count)?;

    if search.count == 0 {
        writeln!(out, "No records found.")?;
        return Ok(RetrievalOutcome::NoRecords);
    }

    let kept = {
        let stream = RecordStream::new(db, &search, paging)?.with_progress(|start, end| {
            let _ = writeln!(out, "Fetching records {} to {}", start, end);
        });
        filter_by_length(stream, request.bounds).context("fetching records failed")?
    };
    info!("{} records within {}", kept.len(), request.bounds);
    if kept.is_empty() {
        warn!("no fetched record has a length within {}", request.bounds);
        writeln!(out, "No records within length range {}.", request.bounds)?;
    }

    let report = Report::new(kept);
    let (csv_path, plot_path) = report
        .save_all(output_dir, &request.taxid)
        .context("writing report failed")?;
    writeln!(out, "CSV saved to {}", csv_path.display())?;
    writeln!(out, "Plot saved to {}", plot_path.display())?;

    Ok(RetrievalOutcome::Saved {
        kept: report.records().len(),
        csv_path,
        plot_path,
    })
}
