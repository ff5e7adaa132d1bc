use serde::{Deserialize, Serialize};

/// One of the four DNA bases used when generating sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    pub fn as_char(&self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    /// Only uppercase symbols count; lowercase letters belong to markers.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Nucleotide::A),
            'C' => Some(Nucleotide::C),
            'G' => Some(Nucleotide::G),
            'T' => Some(Nucleotide::T),
            _ => None,
        }
    }
}

impl std::fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A database entry as seen by the length filter.
///
/// Implemented by parsed GenBank records; kept as a trait so the filter does
/// not depend on any particular file format.
pub trait FetchedEntry {
    fn identifier(&self) -> &str;
    fn sequence_len(&self) -> usize;
    fn description(&self) -> &str;
}

/// Flat summary of a fetched entry, one row of the retrieval report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub accession: String,
    pub length: usize,
    pub description: String,
}

impl SequenceRecord {
    pub fn new(accession: impl Into<String>, length: usize, description: impl Into<String>) -> Self {
        Self {
            accession: accession.into(),
            length,
            description: description.into(),
        }
    }

    pub fn from_entry<E: FetchedEntry + ?Sized>(entry: &E) -> Self {
        Self::new(entry.identifier(), entry.sequence_len(), entry.description())
    }
}

/// Sort records longest first. Equal lengths keep their fetch order.
pub fn sort_by_length_desc(records: &mut [SequenceRecord]) {
    records.sort_by(|a, b| b.length.cmp(&a.length));
}
