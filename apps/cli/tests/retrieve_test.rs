use std::cell::Cell;
use std::time::Duration;

use bioscript_cli::retrieve::{self, RetrievalOutcome, RetrievalRequest};
use bioscript_core::LengthBounds;
use bioscript_entrez::{EntrezError, HistoryHandle, Paging, SearchResult, SequenceDatabase};
use bioscript_formats::GenBankRecord;
use pretty_assertions::assert_eq;

struct FakeDb {
    lengths: Vec<usize>,
    pages: Cell<usize>,
}

impl FakeDb {
    fn new(lengths: Vec<usize>) -> Self {
        Self {
            lengths,
            pages: Cell::new(0),
        }
    }
}

fn record(index: usize, length: usize) -> GenBankRecord {
    GenBankRecord {
        name: format!("OK{:06}", index),
        declared_length: Some(length),
        molecule_type: Some("DNA".to_string()),
        topology: None,
        definition: format!("Example record {}", index),
        accession: Some(format!("OK{:06}", index)),
        version: Some(format!("OK{:06}.1", index)),
        organism: None,
        sequence: "A".repeat(length),
    }
}

impl SequenceDatabase for FakeDb {
    fn search(&self, _taxid: &str) -> Result<SearchResult, EntrezError> {
        let history = (!self.lengths.is_empty()).then(|| HistoryHandle {
            query_key: "1".to_string(),
            web_env: "MCID_fake".to_string(),
        });
        Ok(SearchResult {
            count: self.lengths.len(),
            history,
        })
    }

    fn fetch_page(
        &self,
        _history: &HistoryHandle,
        start: usize,
        size: usize,
    ) -> Result<Vec<GenBankRecord>, EntrezError> {
        self.pages.set(self.pages.get() + 1);
        Ok(self
            .lengths
            .iter()
            .enumerate()
            .skip(start)
            .take(size)
            .map(|(i, &len)| record(i, len))
            .collect())
    }
}

fn paging() -> Paging {
    Paging {
        max_records: 500,
        page_size: 100,
        throttle: Duration::ZERO,
    }
}

fn request(min: usize, max: usize) -> RetrievalRequest {
    RetrievalRequest {
        taxid: "2697049".to_string(),
        bounds: LengthBounds::new(min, max).unwrap(),
    }
}

#[test]
fn test_no_records_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let db = FakeDb::new(Vec::new());
    let mut out = Vec::new();

    let outcome = retrieve::run(&db, &request(100, 200), paging(), dir.path(), &mut out).unwrap();

    assert_eq!(outcome, RetrievalOutcome::NoRecords);
    assert_eq!(db.pages.get(), 0);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Found 0 records."));
    assert!(out.contains("No records found."));
}

#[test]
fn test_filtered_report_written() {
    let dir = tempfile::tempdir().unwrap();
    let db = FakeDb::new(vec![50, 150, 300, 180]);
    let mut out = Vec::new();

    let outcome = retrieve::run(&db, &request(100, 200), paging(), dir.path(), &mut out).unwrap();

    let csv_path = dir.path().join("taxid_2697049_filtered.csv");
    let plot_path = dir.path().join("taxid_2697049_plot.png");
    assert_eq!(
        outcome,
        RetrievalOutcome::Saved {
            kept: 2,
            csv_path: csv_path.clone(),
            plot_path: plot_path.clone(),
        }
    );

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        csv,
        "accession,length,description\n\
         OK000003.1,180,Example record 3\n\
         OK000001.1,150,Example record 1\n"
    );
    assert!(plot_path.exists());

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Searching for taxid: 2697049"));
    assert!(out.contains("Found 4 records."));
    assert!(out.contains("Fetching records 0 to 4"));
    assert!(out.contains("CSV saved to"));
}

#[test]
fn test_nothing_in_range_still_reports() {
    let dir = tempfile::tempdir().unwrap();
    let db = FakeDb::new(vec![10, 20]);
    let mut out = Vec::new();

    let outcome = retrieve::run(&db, &request(100, 200), paging(), dir.path(), &mut out).unwrap();

    assert!(matches!(outcome, RetrievalOutcome::Saved { kept: 0, .. }));
    let csv = std::fs::read_to_string(dir.path().join("taxid_2697049_filtered.csv")).unwrap();
    assert_eq!(csv, "accession,length,description\n");
    assert!(String::from_utf8(out).unwrap().contains("No records within length range"));
}
