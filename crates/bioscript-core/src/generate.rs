use rand::Rng;

use crate::sequence::Nucleotide;
use crate::validate::GenerationRequest;

/// Draw `length` bases independently and uniformly from A, C, G and T
pub fn generate_bases<R: Rng>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| Nucleotide::ALL[rng.random_range(0..Nucleotide::ALL.len())].as_char())
        .collect()
}

/// Build `bases[..offset] + marker + bases[offset..]`.
///
/// `offset` must be a char boundary no greater than `bases.len()`; generated
/// bases are ASCII so every index up to the length qualifies.
pub fn splice_marker(bases: &str, marker: &str, offset: usize) -> String {
    let mut out = String::with_capacity(bases.len() + marker.len());
    out.push_str(&bases[..offset]);
    out.push_str(marker);
    out.push_str(&bases[offset..]);
    out
}

/// A random sequence with a marker spliced in.
///
/// `bases` and `decorated` are kept side by side: statistics are taken from
/// `bases`, the file gets `decorated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSequence {
    bases: String,
    insertion_offset: usize,
    marker_len: usize,
    decorated: String,
}

impl GeneratedSequence {
    /// Generate bases for `request` and insert its marker
    pub fn generate<R: Rng>(request: &GenerationRequest, rng: &mut R) -> Self {
        let bases = generate_bases(request.length(), rng);
        insert_marker(bases, request.marker(), rng)
    }

    pub fn with_offset(bases: String, marker: &str, insertion_offset: usize) -> Self {
        let decorated = splice_marker(&bases, marker, insertion_offset);
        Self {
            bases,
            insertion_offset,
            marker_len: marker.len(),
            decorated,
        }
    }

    pub fn bases(&self) -> &str {
        &self.bases
    }

    pub fn insertion_offset(&self) -> usize {
        self.insertion_offset
    }

    pub fn decorated(&self) -> &str {
        &self.decorated
    }

    /// The marker as it appears in the decorated sequence
    pub fn marker(&self) -> &str {
        &self.decorated[self.insertion_offset..self.insertion_offset + self.marker_len]
    }

    /// Cut the marker back out of the decorated sequence
    pub fn strip_marker(&self) -> String {
        let mut out = String::with_capacity(self.bases.len());
        out.push_str(&self.decorated[..self.insertion_offset]);
        out.push_str(&self.decorated[self.insertion_offset + self.marker_len..]);
        out
    }
}

/// Insert `marker` at an offset drawn uniformly from `0..=bases.len()`
pub fn insert_marker<R: Rng>(bases: String, marker: &str, rng: &mut R) -> GeneratedSequence {
    let offset = rng.random_range(0..=bases.len());
    GeneratedSequence::with_offset(bases, marker, offset)
}
