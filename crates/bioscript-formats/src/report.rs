use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use bioscript_core::{sort_by_length_desc, SequenceRecord};

use crate::{chart, ReportError};

const CSV_HEADER: [&str; 3] = ["accession", "length", "description"];

pub fn csv_file_name(taxid: &str) -> String {
    format!("taxid_{}_filtered.csv", taxid)
}

pub fn plot_file_name(taxid: &str) -> String {
    format!("taxid_{}_plot.png", taxid)
}

/// Filtered records, ordered longest first, ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    records: Vec<SequenceRecord>,
}

impl Report {
    pub fn new(mut records: Vec<SequenceRecord>) -> Self {
        sort_by_length_desc(&mut records);
        Self { records }
    }

    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the CSV table. The header row is written even with no records.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        wtr.write_record(CSV_HEADER)?;
        for record in &self.records {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn save_csv(&self, path: &Path) -> Result<(), ReportError> {
        let file = File::create(path)?;
        self.write_csv(file)?;
        log::info!("wrote {} rows to {}", self.records.len(), path.display());
        Ok(())
    }

    pub fn save_plot(&self, path: &Path) -> Result<(), ReportError> {
        chart::render_png(&self.records, path)?;
        log::info!("rendered chart of {} records to {}", self.records.len(), path.display());
        Ok(())
    }

    /// Write both report files for `taxid` into `dir`, returning their paths
    pub fn save_all(&self, dir: &Path, taxid: &str) -> Result<(PathBuf, PathBuf), ReportError> {
        let csv_path = dir.join(csv_file_name(taxid));
        let plot_path = dir.join(plot_file_name(taxid));
        self.save_csv(&csv_path)?;
        self.save_plot(&plot_path)?;
        Ok((csv_path, plot_path))
    }
}
